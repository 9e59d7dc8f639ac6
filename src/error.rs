use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

use crate::types::{Direction, Position};

/// Main error type for ascross operations
#[derive(Error, Diagnostic, Debug)]
pub enum AscrossError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(ascross::io))]
    Io { path: PathBuf, message: String },

    #[error("Parse error: {message}")]
    #[diagnostic(code(ascross::parse))]
    Parse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Grid line {line}, column {column}: modifier '{glyph}' does not follow a cell")]
    #[diagnostic(
        code(ascross::grid::malformed_cell),
        help("Modifiers ('.', '|', '-', ')', '(') must come directly after a letter or '#'")
    )]
    MalformedExtendedCell {
        line: usize,
        column: usize,
        glyph: char,
    },

    #[error("Malformed {direction} clue on line {line}: {input:?}")]
    #[diagnostic(
        code(ascross::clue::malformed),
        help("Write each clue as PREFIX:TEXT, for example `cro:Puzzle with words`")
    )]
    MalformedClue {
        direction: Direction,
        line: usize,
        input: String,
    },

    #[error("Clue was not mapped ({direction}, line {line}): {input}")]
    #[diagnostic(
        code(ascross::clue::not_mapped),
        help("The prefix must match the start of a word of at least two letters, beginning on an uppercase cell")
    )]
    ClueNotMapped {
        direction: Direction,
        line: usize,
        input: String,
    },

    #[error(
        "\"{clue}\" ({direction}, line {line}) matches multiple starting points: {}",
        join_positions(.starts)
    )]
    #[diagnostic(
        code(ascross::clue::ambiguous),
        help("Use a longer prefix so that only one word matches")
    )]
    AmbiguousClue {
        direction: Direction,
        line: usize,
        clue: String,
        starts: Vec<Position>,
    },

    #[error(
        "\"{clue}\" ({direction}, line {line}) matches starting point {number}, which is already used by \"{existing}\""
    )]
    #[diagnostic(
        code(ascross::clue::starting_point_reused),
        help("Consider using longer prefixes for both clues")
    )]
    StartingPointReused {
        direction: Direction,
        line: usize,
        clue: String,
        number: u32,
        existing: String,
    },

    #[error("Puzzle {} was rejected", path.display())]
    #[diagnostic(code(ascross::puzzle))]
    Puzzle {
        path: PathBuf,
        #[source]
        source: Box<AscrossError>,
    },

    #[error("Build error: {message}")]
    #[diagnostic(code(ascross::build))]
    Build {
        message: String,
        #[help]
        help: Option<String>,
    },
}

impl AscrossError {
    /// Attach the puzzle file an error came from.
    pub fn in_puzzle(self, path: impl Into<PathBuf>) -> Self {
        AscrossError::Puzzle {
            path: path.into(),
            source: Box::new(self),
        }
    }
}

fn join_positions(starts: &[Position]) -> String {
    starts
        .iter()
        .map(|p| p.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, AscrossError>;
