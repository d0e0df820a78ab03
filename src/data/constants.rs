//! Fixed strings used by the tabular renderer

/// Default padding marker for agents whose path is shorter than the table
pub const DEFAULT_FILLER: &str = "\\textbf{S}";

/// Default row label prefix; the agent index follows after a space
pub const DEFAULT_AGENT_LABEL: &str = "Agent";

/// Default label of the header row
pub const DEFAULT_HEADER_LABEL: &str = "Timestep";

/// LaTeX row terminator
pub const LINE_BREAK: &str = "\\\\";

/// Separator between cells of a row
pub const CELL_SEPARATOR: &str = " & ";

/// Column descriptor for the agent-label column, followed by a double rule
pub const LABEL_COLUMN_SPEC: &str = " l || ";

/// Column descriptor repeated once per timestep
pub const VALUE_COLUMN_SPEC: &str = " l | ";

pub const BEGIN_TABULAR: &str = "\\begin{tabular}";
pub const END_TABULAR: &str = "\\end{tabular}";
pub const HLINE: &str = "\\hline";
