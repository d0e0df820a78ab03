//! Row accumulation and padding

use tracing::debug;

use crate::core::loader::Row;
use crate::core::options::{PadMode, TabularOptions};
use crate::data::escapes::escape_latex;

/// Accumulates rows and tracks the widest one
#[derive(Debug, Default)]
pub struct TableBuilder {
    rows: Vec<Row>,
    width: usize,
}

impl TableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_rows(rows: impl IntoIterator<Item = Row>) -> Self {
        let mut builder = Self::new();
        for row in rows {
            builder.push_row(row);
        }
        builder
    }

    pub fn push_row(&mut self, row: Row) {
        self.width = self.width.max(row.len());
        self.rows.push(row);
    }

    /// Widest row seen so far
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Pad every row to the maximum width
    ///
    /// Input tokens are escaped first when the options ask for it; the
    /// filler is inserted verbatim.
    pub fn finish(self, options: &TabularOptions) -> Table {
        let width = self.width;
        let mut padding = Vec::with_capacity(self.rows.len());

        let rows = self
            .rows
            .into_iter()
            .map(|row| {
                let mut tokens: Vec<String> = if options.escape_tokens {
                    row.tokens
                        .iter()
                        .map(|t| escape_latex(t).into_owned())
                        .collect()
                } else {
                    row.tokens
                };

                let missing = width - tokens.len();
                let pad = match options.pad_mode {
                    PadMode::RepeatLast => tokens.last().cloned(),
                    PadMode::Filler => None,
                }
                .unwrap_or_else(|| options.filler.clone());
                tokens.extend(std::iter::repeat(pad).take(missing));

                padding.push(missing);
                Row::new(tokens)
            })
            .collect::<Vec<_>>();

        debug!(
            rows = rows.len(),
            width,
            padded = padding.iter().filter(|&&p| p > 0).count(),
            "built table"
        );

        Table {
            rows,
            width,
            padding,
        }
    }
}

/// Rows of equal width, ready to render
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    rows: Vec<Row>,
    width: usize,
    /// Number of padding cells appended to each row
    padding: Vec<usize>,
}

impl Table {
    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Number of timesteps (columns after the label column)
    pub fn width(&self) -> usize {
        self.width
    }

    pub fn agent_count(&self) -> usize {
        self.rows.len()
    }

    pub fn padding(&self) -> &[usize] {
        &self.padding
    }

    /// Length of agent `agent`'s row before padding, `None` past the last agent
    pub fn original_len(&self, agent: usize) -> Option<usize> {
        self.padding.get(agent).map(|p| self.width - p)
    }
}
