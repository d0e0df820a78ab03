//! # pathtab
//!
//! Render per-agent timestep sequences (for example the location paths
//! produced by a multi-agent path planner) as a LaTeX `tabular`.
//!
//! Each input line is one agent; its whitespace-separated tokens are the
//! agent's values at timesteps `0, 1, 2, ...`. Rows shorter than the longest
//! one are padded with a filler marker (`\textbf{S}` by default).
//!
//! ## Features
//!
//! - **Faithful output**: default rendering matches the classic
//!   `make_tabular` layout byte for byte
//! - **Padding modes**: constant filler or repeat-last-location
//! - **Escaping**: optional escaping of LaTeX special characters in tokens
//! - **Diagnostics**: non-fatal warnings about padded, blank or suspicious rows
//! - **WASM Support**: compiles to WebAssembly for browser usage
//!
//! ## Usage Examples
//!
//! ```rust
//! use pathtab::make_tabular;
//!
//! let latex = make_tabular("1 2 3\n4 5\n");
//! assert!(latex.starts_with("\\begin{tabular}{ l ||  l |  l |  l }\n"));
//! assert!(latex.contains("Agent 1 & 4 & 5 & \\textbf{S} \\\\\n"));
//! ```
//!
//! ```rust
//! use pathtab::{make_tabular_with_options, TabularOptions};
//!
//! let output = make_tabular_with_options("1 2 3\n4 5\n", &TabularOptions::hold_position());
//! assert!(output.content.contains("Agent 1 & 4 & 5 & 5 \\\\"));
//! assert!(output.has_warnings());
//! ```

use std::path::Path;

/// Core pipeline: loading, padding, rendering
pub mod core;

/// Data layer - static mappings and constants
pub mod data;

/// Utility modules
pub mod utils;

/// WASM bindings (feature-gated)
#[cfg(feature = "wasm")]
pub mod wasm;

// Re-export core types
pub use crate::core::loader::{self, load_rows, parse_rows, read_rows, Row};
pub use crate::core::options::{PadMode, TabularOptions};
pub use crate::core::table::{Table, TableBuilder, TabularGenerator};

// Re-export utilities
pub use utils::diagnostics;
pub use utils::error::{
    CliDiagnostic, DiagnosticSeverity, TabularError, TabularOutput, TabularResult,
    TabularWarning, WarningKind,
};

/// Render plan text as a LaTeX tabular with default options
///
/// # Arguments
/// * `input` - One line per agent, whitespace-separated values
///
/// # Returns
/// The tabular block, one newline-terminated line per table line
pub fn make_tabular(input: &str) -> String {
    make_tabular_with_options(input, &TabularOptions::default()).content
}

/// Render plan text with custom options, collecting warnings
pub fn make_tabular_with_options(input: &str, options: &TabularOptions) -> TabularOutput {
    render_rows(parse_rows(input), options)
}

/// Read a plan file and render it
///
/// Fails with [`TabularError::Io`] if the file cannot be opened or read.
pub fn make_tabular_from_file(
    path: impl AsRef<Path>,
    options: &TabularOptions,
) -> TabularResult<TabularOutput> {
    let rows = load_rows(path)?;
    Ok(render_rows(rows, options))
}

/// Pad and render already tokenized rows
pub fn render_rows(rows: Vec<Row>, options: &TabularOptions) -> TabularOutput {
    let table = TableBuilder::from_rows(rows).finish(options);
    let content = TabularGenerator::new(&table, options).generate_latex();
    let warnings = diagnostics::check_table(&table, options);
    TabularOutput::with_warnings(content, warnings)
}
