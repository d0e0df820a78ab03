//! Input diagnostics
//!
//! Inspects a built table for things a reader of the rendered LaTeX may
//! want to know about:
//!
//! - Agents whose rows were padded
//! - Blank input lines and empty input
//! - Tokens carrying LaTeX special characters while escaping is off
//!
//! ## Example
//!
//! ```rust
//! use pathtab::core::loader::parse_rows;
//! use pathtab::core::table::TableBuilder;
//! use pathtab::diagnostics::check_table;
//! use pathtab::TabularOptions;
//!
//! let options = TabularOptions::default();
//! let table = TableBuilder::from_rows(parse_rows("1 2\n3\n")).finish(&options);
//! let warnings = check_table(&table, &options);
//! assert_eq!(warnings.len(), 1);
//! ```

use crate::core::options::{PadMode, TabularOptions};
use crate::core::table::Table;
use crate::data::escapes::find_special;
use crate::utils::error::{
    CliDiagnostic, DiagnosticSeverity, TabularWarning, WarningKind,
};

/// Collect warnings for a padded table
pub fn check_table(table: &Table, options: &TabularOptions) -> Vec<TabularWarning> {
    let mut warnings = Vec::new();

    if table.agent_count() == 0 {
        warnings.push(TabularWarning::new(
            WarningKind::EmptyInput,
            "input has no lines; the table has no agents and no timesteps",
        ));
        return warnings;
    }

    let width = table.width();
    for (agent, (row, &padded)) in table.rows().iter().zip(table.padding()).enumerate() {
        let line = agent + 1;
        let original_len = width - padded;

        if original_len == 0 {
            warnings.push(
                TabularWarning::new(
                    WarningKind::EmptyRow,
                    format!("line is blank; agent {} has no values of its own", agent),
                )
                .at_line(line),
            );
        } else if padded > 0 {
            let how = match options.pad_mode {
                PadMode::Filler => "filler cell(s)",
                PadMode::RepeatLast => "repeated last value(s)",
            };
            warnings.push(
                TabularWarning::new(
                    WarningKind::PaddedRow,
                    format!("agent {} padded with {} {}", agent, padded, how),
                )
                .at_line(line),
            );
        }

        if !options.escape_tokens {
            let special = row.tokens[..original_len]
                .iter()
                .find_map(|t| find_special(t).map(|c| (t, c)));
            if let Some((token, c)) = special {
                warnings.push(
                    TabularWarning::new(
                        WarningKind::UnescapedSpecial,
                        format!("token '{}' contains LaTeX special character '{}'", token, c),
                    )
                    .at_line(line)
                    .with_suggestion("pass --escape to escape input tokens"),
                );
            }
        }
    }

    warnings
}

/// Number of diagnostics that fail strict mode
///
/// Padding is the normal treatment of ragged input, so informational
/// diagnostics are not counted.
pub fn strict_failures(diagnostics: &[CliDiagnostic]) -> usize {
    diagnostics
        .iter()
        .filter(|d| d.severity >= DiagnosticSeverity::Warning)
        .count()
}

/// Format diagnostics for terminal output
pub fn format_diagnostics(diagnostics: &[CliDiagnostic], use_color: bool) -> String {
    let mut output = String::new();
    let reset = if use_color { "\x1b[0m" } else { "" };

    output.push_str(&format!(
        "{}Warnings ({}):{}\n",
        if use_color { "\x1b[33m" } else { "" },
        diagnostics.len(),
        reset
    ));

    for diag in diagnostics {
        let color = if use_color { diag.color_code() } else { "" };
        match diag.location {
            Some(ref loc) => output.push_str(&format!(
                "  {}[{}]{} {}: {}\n",
                color, diag.kind, reset, loc, diag.message
            )),
            None => output.push_str(&format!(
                "  {}[{}]{} {}\n",
                color, diag.kind, reset, diag.message
            )),
        }
    }

    output
}
