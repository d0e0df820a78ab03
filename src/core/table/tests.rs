//! Tests for table padding and tabular generation

use pretty_assertions::assert_eq;

use super::builder::TableBuilder;
use super::generator::TabularGenerator;
use crate::core::loader::{parse_rows, Row};
use crate::core::options::TabularOptions;

fn render(input: &str, options: &TabularOptions) -> String {
    let table = TableBuilder::from_rows(parse_rows(input)).finish(options);
    TabularGenerator::new(&table, options).generate_latex()
}

#[test]
fn test_basic_table() {
    let latex = render("1 2 3\n4 5\n", &TabularOptions::default());
    let expected = "\\begin{tabular}{ l ||  l |  l |  l }\n\
                    Timestep & 0 & 1 & 2 \\\\\n\
                    \\hline\n\
                    Agent 0 & 1 & 2 & 3 \\\\\n\
                    Agent 1 & 4 & 5 & \\textbf{S} \\\\\n\
                    \\end{tabular}\n";
    assert_eq!(latex, expected);
}

#[test]
fn test_builder_tracks_width() {
    let mut builder = TableBuilder::new();
    builder.push_row(Row::parse("a b"));
    builder.push_row(Row::parse("a b c d"));
    builder.push_row(Row::parse(""));
    assert_eq!(builder.width(), 4);
    assert_eq!(builder.row_count(), 3);

    let table = builder.finish(&TabularOptions::default());
    assert!(table.rows().iter().all(|r| r.len() == 4));
    assert_eq!(table.padding(), &[2, 0, 4]);
    assert_eq!(table.original_len(0), Some(2));
    assert_eq!(table.original_len(2), Some(0));
    assert_eq!(table.original_len(3), None);
}

#[test]
fn test_full_rows_untouched() {
    let options = TabularOptions::default();
    let table = TableBuilder::from_rows(parse_rows("7 8\n9 10\n")).finish(&options);
    assert_eq!(table.rows()[0].tokens, vec!["7", "8"]);
    assert_eq!(table.rows()[1].tokens, vec!["9", "10"]);
    assert_eq!(table.padding(), &[0, 0]);
}

#[test]
fn test_repeat_last_padding() {
    let options = TabularOptions::hold_position();
    let table = TableBuilder::from_rows(parse_rows("1 2 3 4\n5 6\n\n")).finish(&options);
    assert_eq!(table.rows()[1].tokens, vec!["5", "6", "6", "6"]);
    // nothing to repeat on a blank line
    assert_eq!(table.rows()[2].tokens, vec!["\\textbf{S}"; 4]);
}

#[test]
fn test_custom_filler_and_labels() {
    let options = TabularOptions {
        agent_label: "a".to_string(),
        header_label: "t".to_string(),
        ..TabularOptions::new().with_filler("--")
    };
    let latex = render("x y\nz\n", &options);
    assert!(latex.contains("t & 0 & 1 \\\\\n"));
    assert!(latex.contains("a 1 & z & -- \\\\\n"));
}

#[test]
fn test_escaping_skips_filler() {
    let options = TabularOptions::new().with_escaping(true);
    let latex = render("a_1 b#2\nc%\n", &options);
    assert!(latex.contains("Agent 0 & a\\_1 & b\\#2 \\\\"));
    assert!(latex.contains("Agent 1 & c\\% & \\textbf{S} \\\\"));
}

#[test]
fn test_escaping_applies_to_repeated_token() {
    let options = TabularOptions {
        escape_tokens: true,
        ..TabularOptions::hold_position()
    };
    let latex = render("1 2 3\nx_y\n", &options);
    assert!(latex.contains("Agent 1 & x\\_y & x\\_y & x\\_y \\\\"));
}

#[test]
fn test_empty_input() {
    let latex = render("", &TabularOptions::default());
    let expected = "\\begin{tabular}{ l |}\n\
                    Timestep &  \\\\\n\
                    \\hline\n\
                    \\end{tabular}\n";
    assert_eq!(latex, expected);
}

#[test]
fn test_blank_lines_only() {
    let latex = render("\n\n", &TabularOptions::default());
    assert!(latex.contains("Agent 0 &  \\\\\n"));
    assert!(latex.contains("Agent 1 &  \\\\\n"));
}

#[test]
fn test_column_spec_width_one() {
    let options = TabularOptions::default();
    let table = TableBuilder::from_rows(parse_rows("5\n")).finish(&options);
    let gen = TabularGenerator::new(&table, &options);
    assert_eq!(gen.build_column_spec(), " l ||  l ");
}

#[test]
fn test_row_and_column_counts() {
    let input = "1 2 3 4 5\n1\n1 2\n1 2 3\n";
    let options = TabularOptions::default();
    let latex = render(input, &options);

    let agent_lines: Vec<&str> = latex.lines().filter(|l| l.starts_with("Agent ")).collect();
    assert_eq!(agent_lines.len(), 4);
    assert_eq!(latex.lines().filter(|l| l.starts_with("Timestep")).count(), 1);
    for line in agent_lines {
        // label cell + 5 timestep cells
        assert_eq!(line.matches(" & ").count(), 5, "line: {line}");
    }
}
