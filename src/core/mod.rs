//! Core pipeline
//!
//! - `loader`: lines to token rows
//! - `table`: padding and LaTeX rendering
//! - `options`: presentation options

pub mod loader;
pub mod options;
pub mod table;

pub use loader::{load_rows, parse_rows, read_rows, Row};
pub use options::{PadMode, TabularOptions};
pub use table::{Table, TableBuilder, TabularGenerator};
