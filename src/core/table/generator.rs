//! LaTeX tabular generator

use std::fmt::Write;

use tracing::trace;

use super::builder::Table;
use crate::core::loader::Row;
use crate::core::options::TabularOptions;
use crate::data::constants::{
    BEGIN_TABULAR, CELL_SEPARATOR, END_TABULAR, HLINE, LABEL_COLUMN_SPEC, LINE_BREAK,
    VALUE_COLUMN_SPEC,
};

/// Renders a padded table as a `tabular` environment
///
/// One header row lists the timestep indices, then one row per agent.
/// Every emitted line, including the last, ends with a newline.
pub struct TabularGenerator<'a> {
    table: &'a Table,
    options: &'a TabularOptions,
}

impl<'a> TabularGenerator<'a> {
    pub fn new(table: &'a Table, options: &'a TabularOptions) -> Self {
        TabularGenerator { table, options }
    }

    /// Generate the complete LaTeX tabular code
    pub fn generate_latex(&self) -> String {
        let mut output = String::new();

        let _ = writeln!(output, "{}{{{}}}", BEGIN_TABULAR, self.build_column_spec());
        let _ = writeln!(output, "{}", self.build_header());
        let _ = writeln!(output, "{}", HLINE);

        for (agent, row) in self.table.rows().iter().enumerate() {
            trace!(agent, "render row");
            let _ = writeln!(output, "{}", self.build_agent_row(agent, row));
        }

        let _ = writeln!(output, "{}", END_TABULAR);

        output
    }

    /// Build the column specification (e.g. `" l ||  l |  l "`)
    ///
    /// The label column is followed by a double rule, each timestep column by
    /// a single rule; the trailing rule and its space are dropped.
    pub fn build_column_spec(&self) -> String {
        let mut spec = String::from(LABEL_COLUMN_SPEC);
        for _ in 0..self.table.width() {
            spec.push_str(VALUE_COLUMN_SPEC);
        }
        spec.truncate(spec.len() - 2);
        spec
    }

    fn build_header(&self) -> String {
        let timesteps = (0..self.table.width())
            .map(|t| t.to_string())
            .collect::<Vec<_>>()
            .join(CELL_SEPARATOR);
        format!(
            "{}{}{} {}",
            self.options.header_label, CELL_SEPARATOR, timesteps, LINE_BREAK
        )
    }

    fn build_agent_row(&self, agent: usize, row: &Row) -> String {
        format!(
            "{} {}{}{} {}",
            self.options.agent_label,
            agent,
            CELL_SEPARATOR,
            row.tokens.join(CELL_SEPARATOR),
            LINE_BREAK
        )
    }
}
