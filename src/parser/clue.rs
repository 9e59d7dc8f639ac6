//! Clue line parser.
//!
//! Clues are written one per line as `PREFIX:TEXT`. The prefix is the start
//! of the answer and picks the word the clue belongs to; the text is shown
//! to the solver as written.

use crate::error::{AscrossError, Result};
use crate::types::{uppercase_char, Direction};

/// One clue line split into prefix and text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClueLine<'a> {
    /// One-based line number within the clue text.
    pub line: usize,
    /// Uppercased prefix characters.
    pub prefix: Vec<char>,
    /// Clue text after the first `:`, verbatim.
    pub body: &'a str,
    /// The whole line, for error messages.
    pub raw: &'a str,
}

/// Split clue text into lines. Blank lines are skipped.
pub fn parse_clue_lines(source: &str, direction: Direction) -> Result<Vec<ClueLine<'_>>> {
    source
        .lines()
        .enumerate()
        .filter(|(_, line)| !line.trim().is_empty())
        .map(|(idx, line)| parse_clue_line(line, idx + 1, direction))
        .collect()
}

fn parse_clue_line(line: &str, line_no: usize, direction: Direction) -> Result<ClueLine<'_>> {
    let malformed = || AscrossError::MalformedClue {
        direction,
        line: line_no,
        input: line.to_string(),
    };

    let (prefix, body) = line.split_once(':').ok_or_else(malformed)?;
    let prefix: Vec<char> = prefix.trim().chars().map(uppercase_char).collect();
    if prefix.is_empty() {
        return Err(malformed());
    }

    Ok(ClueLine {
        line: line_no,
        prefix,
        body,
        raw: line,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_simple_clue() {
        let lines = parse_clue_lines("abc:Top row", Direction::Horizontal).unwrap();

        assert_eq!(lines.len(), 1);
        assert_eq!(lines[0].prefix, vec!['A', 'B', 'C']);
        assert_eq!(lines[0].body, "Top row");
        assert_eq!(lines[0].line, 1);
    }

    #[test]
    fn test_body_split_on_first_colon_only() {
        let lines = parse_clue_lines("T:Time: 12:30", Direction::Vertical).unwrap();
        assert_eq!(lines[0].body, "Time: 12:30");
    }

    #[test]
    fn test_body_case_preserved() {
        let lines = parse_clue_lines("x:MiXeD Case", Direction::Horizontal).unwrap();
        assert_eq!(lines[0].prefix, vec!['X']);
        assert_eq!(lines[0].body, "MiXeD Case");
    }

    #[test]
    fn test_blank_lines_skipped_and_numbered() {
        let lines = parse_clue_lines("A:one\n\n  \nB:two\n", Direction::Horizontal).unwrap();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[1].line, 4);
        assert_eq!(lines[1].raw, "B:two");
    }

    #[test]
    fn test_missing_colon_is_rejected() {
        let err = parse_clue_lines("A:ok\nno colon here", Direction::Vertical).unwrap_err();

        match err {
            AscrossError::MalformedClue { line, input, direction } => {
                assert_eq!(line, 2);
                assert_eq!(input, "no colon here");
                assert_eq!(direction, Direction::Vertical);
            }
            other => panic!("Expected MalformedClue, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_prefix_is_rejected() {
        let err = parse_clue_lines(" :text", Direction::Horizontal).unwrap_err();
        assert!(matches!(err, AscrossError::MalformedClue { line: 1, .. }));
    }
}
