//! Utility modules
//!
//! - Error, warning and output types
//! - Input diagnostics and their terminal formatting

pub mod diagnostics;
pub mod error;

// Re-export commonly used items
pub use diagnostics::{check_table, format_diagnostics, strict_failures};
pub use error::{
    CliDiagnostic, DiagnosticSeverity, TabularError, TabularOutput, TabularResult,
    TabularWarning, WarningKind,
};
