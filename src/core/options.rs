//! Presentation options for the tabular renderer

use crate::data::constants::{DEFAULT_AGENT_LABEL, DEFAULT_FILLER, DEFAULT_HEADER_LABEL};

/// How rows shorter than the widest row are completed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PadMode {
    /// Append the filler marker
    #[default]
    Filler,
    /// Repeat the row's last token; empty rows fall back to the filler
    RepeatLast,
}

/// Options for rendering a tabular
#[derive(Debug, Clone)]
pub struct TabularOptions {
    /// Token appended to short rows (LaTeX, never escaped)
    pub filler: String,
    /// Padding strategy
    pub pad_mode: PadMode,
    /// Row label prefix, followed by the zero-based agent index
    pub agent_label: String,
    /// Label of the header row
    pub header_label: String,
    /// Escape LaTeX special characters in input tokens
    pub escape_tokens: bool,
}

impl Default for TabularOptions {
    fn default() -> Self {
        Self {
            filler: DEFAULT_FILLER.to_string(),
            pad_mode: PadMode::Filler,
            agent_label: DEFAULT_AGENT_LABEL.to_string(),
            header_label: DEFAULT_HEADER_LABEL.to_string(),
            escape_tokens: false,
        }
    }
}

impl TabularOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Agents that finished early stay at their last location
    pub fn hold_position() -> Self {
        Self {
            pad_mode: PadMode::RepeatLast,
            ..Default::default()
        }
    }

    pub fn with_filler(mut self, filler: impl Into<String>) -> Self {
        self.filler = filler.into();
        self
    }

    pub fn with_escaping(mut self, escape: bool) -> Self {
        self.escape_tokens = escape;
        self
    }
}
