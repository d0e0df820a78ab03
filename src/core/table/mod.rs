//! Agent/timestep table construction and LaTeX rendering
//!
//! # Architecture
//!
//! ```text
//! Rows -> TableBuilder (max width, padding) -> Table -> TabularGenerator -> LaTeX
//! ```
//!
//! # Example
//!
//! ```
//! use pathtab::core::loader::parse_rows;
//! use pathtab::core::table::{TableBuilder, TabularGenerator};
//! use pathtab::TabularOptions;
//!
//! let options = TabularOptions::default();
//! let table = TableBuilder::from_rows(parse_rows("1 2 3\n4 5\n")).finish(&options);
//! let latex = TabularGenerator::new(&table, &options).generate_latex();
//! assert!(latex.contains("Agent 1 & 4 & 5 & \\textbf{S} \\\\"));
//! ```

mod builder;
mod generator;

#[cfg(test)]
mod tests;

// Re-export public API
pub use builder::{Table, TableBuilder};
pub use generator::TabularGenerator;
