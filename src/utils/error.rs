//! Error handling for pathtab
//!
//! This module provides the error type for fatal failures, the warning type
//! for non-fatal input issues, and the output type that carries both the
//! rendered table and its warnings.

use std::fmt;
use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Fatal error while producing a table
#[derive(Debug, Error)]
pub enum TabularError {
    /// The input could not be opened or read
    #[error("cannot read '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    /// Invalid input
    #[error("Invalid input: {message}")]
    InvalidInput { message: String },
}

impl TabularError {
    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        TabularError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn invalid(message: impl Into<String>) -> Self {
        TabularError::InvalidInput {
            message: message.into(),
        }
    }
}

/// Result type for table operations
pub type TabularResult<T> = Result<T, TabularError>;

/// Kind of non-fatal issue found in the input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningKind {
    /// A row was shorter than the widest row and received padding
    PaddedRow,
    /// A line had no tokens at all
    EmptyRow,
    /// The input had no lines
    EmptyInput,
    /// A token contains a LaTeX special character and escaping is off
    UnescapedSpecial,
}

impl fmt::Display for WarningKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WarningKind::PaddedRow => write!(f, "padded row"),
            WarningKind::EmptyRow => write!(f, "empty row"),
            WarningKind::EmptyInput => write!(f, "empty input"),
            WarningKind::UnescapedSpecial => write!(f, "unescaped special character"),
        }
    }
}

/// Warning produced while building a table (non-fatal issues)
#[derive(Debug, Clone, PartialEq)]
pub struct TabularWarning {
    pub kind: WarningKind,
    pub message: String,
    /// Input line (1-indexed)
    pub line: Option<usize>,
    pub suggestion: Option<String>,
}

impl TabularWarning {
    pub fn new(kind: WarningKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
            line: None,
            suggestion: None,
        }
    }

    pub fn at_line(mut self, line: usize) -> Self {
        self.line = Some(line);
        self
    }

    pub fn with_suggestion(mut self, suggestion: impl Into<String>) -> Self {
        self.suggestion = Some(suggestion.into());
        self
    }
}

impl fmt::Display for TabularWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(l) = self.line {
            write!(f, "Warning at line {}: {}", l, self.message)?;
        } else {
            write!(f, "Warning: {}", self.message)?;
        }
        if let Some(ref sug) = self.suggestion {
            write!(f, " ({})", sug)?;
        }
        Ok(())
    }
}

/// Rendered table with any warnings collected along the way
#[derive(Debug, Clone)]
pub struct TabularOutput {
    /// The LaTeX tabular block
    pub content: String,
    pub warnings: Vec<TabularWarning>,
}

impl TabularOutput {
    pub fn new(content: String) -> Self {
        Self {
            content,
            warnings: Vec::new(),
        }
    }

    pub fn with_warnings(content: String, warnings: Vec<TabularWarning>) -> Self {
        Self { content, warnings }
    }

    pub fn has_warnings(&self) -> bool {
        !self.warnings.is_empty()
    }

    /// Warnings as display strings
    pub fn warning_messages(&self) -> Vec<String> {
        self.warnings.iter().map(|w| w.to_string()).collect()
    }
}

/// Severity used when reporting warnings on the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DiagnosticSeverity {
    /// Expected for ragged input; does not fail strict mode
    Info,
    Warning,
}

/// A warning prepared for terminal output
#[derive(Debug, Clone)]
pub struct CliDiagnostic {
    pub severity: DiagnosticSeverity,
    pub kind: String,
    pub message: String,
    pub location: Option<String>,
}

impl CliDiagnostic {
    pub fn new(
        severity: DiagnosticSeverity,
        kind: impl Into<String>,
        message: impl Into<String>,
    ) -> Self {
        Self {
            severity,
            kind: kind.into(),
            message: message.into(),
            location: None,
        }
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    /// ANSI color escape for this severity
    pub fn color_code(&self) -> &'static str {
        match self.severity {
            DiagnosticSeverity::Info => "\x1b[36m",
            DiagnosticSeverity::Warning => "\x1b[33m",
        }
    }
}

impl From<TabularWarning> for CliDiagnostic {
    fn from(warning: TabularWarning) -> Self {
        let severity = match warning.kind {
            WarningKind::EmptyInput | WarningKind::UnescapedSpecial => DiagnosticSeverity::Warning,
            WarningKind::PaddedRow | WarningKind::EmptyRow => DiagnosticSeverity::Info,
        };

        let message = match warning.suggestion {
            Some(sug) => format!("{} ({})", warning.message, sug),
            None => warning.message,
        };

        let mut diag = CliDiagnostic::new(severity, warning.kind.to_string(), message);
        if let Some(line) = warning.line {
            diag = diag.with_location(format!("line {}", line));
        }
        diag
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_io_error_display() {
        let err = TabularError::io(
            "missing.txt",
            io::Error::new(io::ErrorKind::NotFound, "No such file or directory"),
        );
        let msg = err.to_string();
        assert!(msg.contains("missing.txt"));
        assert!(msg.contains("No such file"));
    }

    #[test]
    fn test_invalid_input_display() {
        let err = TabularError::invalid("stream did not contain valid UTF-8");
        assert!(err.to_string().starts_with("Invalid input"));
    }

    #[test]
    fn test_warning_display() {
        let warn = TabularWarning::new(WarningKind::UnescapedSpecial, "token 'a_b' contains '_'")
            .at_line(3)
            .with_suggestion("pass --escape");
        let msg = warn.to_string();
        assert!(msg.contains("line 3"));
        assert!(msg.ends_with("(pass --escape)"));
    }

    #[test]
    fn test_tabular_output() {
        let output = TabularOutput::new("table".to_string());
        assert!(!output.has_warnings());

        let output_with_warn = TabularOutput::with_warnings(
            "table".to_string(),
            vec![TabularWarning::new(WarningKind::EmptyInput, "no rows")],
        );
        assert!(output_with_warn.has_warnings());
        assert_eq!(output_with_warn.warning_messages(), vec!["Warning: no rows"]);
    }

    #[test]
    fn test_cli_diagnostic_from_warning() {
        let diag: CliDiagnostic =
            TabularWarning::new(WarningKind::PaddedRow, "agent 1 padded with 1 cell")
                .at_line(2)
                .into();
        assert_eq!(diag.severity, DiagnosticSeverity::Info);
        assert_eq!(diag.kind, "padded row");
        assert_eq!(diag.location.as_deref(), Some("line 2"));
    }
}
