//! Line reader
//!
//! Turns plan text into rows of tokens, one row per line. Lines end at `\n`,
//! `\r\n` or a lone `\r`. Tokens are split on any whitespace, including the
//! ASCII separator controls `\x1c`..=`\x1f`; a blank line is still a row (an
//! agent with no values).

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use tracing::{debug, trace};

use crate::utils::error::{TabularError, TabularResult};

/// One agent's values, one token per timestep
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    pub tokens: Vec<String>,
}

impl Row {
    pub fn new(tokens: Vec<String>) -> Self {
        Row { tokens }
    }

    /// Tokenize a single input line
    pub fn parse(line: &str) -> Self {
        Row {
            tokens: line
                .split(is_separator)
                .filter(|t| !t.is_empty())
                .map(str::to_string)
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn last(&self) -> Option<&str> {
        self.tokens.last().map(String::as_str)
    }
}

impl<S: Into<String>> FromIterator<S> for Row {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Row {
            tokens: iter.into_iter().map(Into::into).collect(),
        }
    }
}

/// Token separator: Unicode whitespace plus the file/group/record/unit
/// separators `\x1c`..=`\x1f`
#[inline]
pub fn is_separator(c: char) -> bool {
    c.is_whitespace() || ('\x1c'..='\x1f').contains(&c)
}

/// Split text into lines on `\n`, `\r\n` or a lone `\r`
///
/// A terminator at the very end does not start another line.
pub fn split_lines(text: &str) -> Vec<&str> {
    let mut lines = Vec::new();
    let mut rest = text;
    while !rest.is_empty() {
        match rest.find(|c: char| c == '\r' || c == '\n') {
            Some(i) => {
                lines.push(&rest[..i]);
                let skip = if rest[i..].starts_with("\r\n") { 2 } else { 1 };
                rest = &rest[i + skip..];
            }
            None => {
                lines.push(rest);
                break;
            }
        }
    }
    lines
}

/// Split in-memory text into rows
pub fn parse_rows(text: &str) -> Vec<Row> {
    split_lines(text)
        .into_iter()
        .enumerate()
        .map(|(agent, line)| {
            let row = Row::parse(line);
            trace!(agent, tokens = row.len(), "read row");
            row
        })
        .collect()
}

/// Read rows from any buffered reader
///
/// The whole input is read before splitting so that CR-only line endings
/// are recognised.
pub fn read_rows<R: BufRead>(mut reader: R) -> io::Result<Vec<Row>> {
    let mut text = String::new();
    reader.read_to_string(&mut text)?;
    Ok(parse_rows(&text))
}

/// Read rows from a file
///
/// The file handle is dropped as soon as all lines are consumed.
pub fn load_rows(path: impl AsRef<Path>) -> TabularResult<Vec<Row>> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|e| TabularError::io(path, e))?;
    let rows = read_rows(BufReader::new(file)).map_err(|e| match e.kind() {
        io::ErrorKind::InvalidData => {
            TabularError::invalid(format!("'{}' is not valid UTF-8 text", path.display()))
        }
        _ => TabularError::io(path, e),
    })?;
    debug!(path = %path.display(), rows = rows.len(), "loaded plan file");
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_parse_row_whitespace() {
        let row = Row::parse("  1\t2   3 ");
        assert_eq!(row.tokens, vec!["1", "2", "3"]);
    }

    #[test]
    fn test_parse_rows_keeps_blank_lines() {
        let rows = parse_rows("1 2\n\n3\n");
        assert_eq!(rows.len(), 3);
        assert!(rows[1].is_empty());
        assert_eq!(rows[2].last(), Some("3"));
    }

    #[test]
    fn test_parse_rows_crlf() {
        let rows = parse_rows("1 2\r\n3 4\r\n");
        assert_eq!(rows, vec![Row::from_iter(["1", "2"]), Row::from_iter(["3", "4"])]);
    }

    #[test]
    fn test_parse_rows_cr_only() {
        let rows = parse_rows("1 2 3\r4 5\r");
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].tokens, vec!["1", "2", "3"]);
        assert_eq!(rows[1].tokens, vec!["4", "5"]);
    }

    #[test]
    fn test_split_lines_mixed_endings() {
        assert_eq!(split_lines("a\r\nb\rc\nd"), vec!["a", "b", "c", "d"]);
        assert_eq!(split_lines("a\r\r\n"), vec!["a", ""]);
        assert_eq!(split_lines("\n"), vec![""]);
        assert!(split_lines("").is_empty());
    }

    #[test]
    fn test_separator_controls_split_tokens() {
        let row = Row::parse("1\x1c2 3\x1f\x1d4");
        assert_eq!(row.tokens, vec!["1", "2", "3", "4"]);
        assert!(is_separator('\u{85}'));
        assert!(!is_separator('\x1b'));
    }

    #[test]
    fn test_read_rows_cr_only() {
        let rows = read_rows(Cursor::new("7 8\r9\r")).unwrap();
        assert_eq!(rows, vec![Row::from_iter(["7", "8"]), Row::from_iter(["9"])]);
    }

    #[test]
    fn test_read_rows_matches_parse_rows() {
        let text = "10 11 12\n20 21\n";
        let rows = read_rows(Cursor::new(text)).unwrap();
        assert_eq!(rows, parse_rows(text));
    }

    #[test]
    fn test_load_rows_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1 2 3").unwrap();
        writeln!(file, "4 5").unwrap();

        let rows = load_rows(file.path()).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[1].tokens, vec!["4", "5"]);
    }

    #[test]
    fn test_load_rows_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("no_such_plan.txt");

        let err = load_rows(&missing).unwrap_err();
        match err {
            TabularError::Io { path, source } => {
                assert_eq!(path, missing);
                assert_eq!(source.kind(), io::ErrorKind::NotFound);
            }
            other => panic!("unexpected error: {other:?}"),
        }
    }
}
