//! Data layer - Static mappings and constants
//!
//! This module contains the static data used when rendering tables:
//! - Fixed LaTeX fragments and default labels
//! - LaTeX special character escapes

pub mod constants;
pub mod escapes;

// Re-export commonly used items
pub use constants::{DEFAULT_AGENT_LABEL, DEFAULT_FILLER, DEFAULT_HEADER_LABEL};
pub use escapes::{escape_latex, find_special, is_special, LATEX_ESCAPES};
