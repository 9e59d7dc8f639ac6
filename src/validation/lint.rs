//! Lint findings for a mapped puzzle.

use std::fmt;

use crate::types::Position;

/// What a lint found at a cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintKind {
    /// A numbered cell that begins no clue in either direction.
    UnusedStartingPoint { number: u32 },
    /// A letter that no mapped clue passes through.
    UncoveredLetter { solution: char },
}

/// A single lint finding. Lints never reject a puzzle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lint {
    pub kind: LintKind,
    pub position: Position,
}

impl Lint {
    pub fn new(kind: LintKind, position: Position) -> Self {
        Self { kind, position }
    }

    /// Suggested fix, if there is an obvious one.
    pub fn help(&self) -> Option<&'static str> {
        match self.kind {
            LintKind::UnusedStartingPoint { .. } => {
                Some("Add a clue for it, or write the letter in lowercase")
            }
            LintKind::UncoveredLetter { .. } => None,
        }
    }
}

impl fmt::Display for Lint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.kind {
            LintKind::UnusedStartingPoint { number } => {
                write!(f, "Starting point {} at {} begins no clue", number, self.position)
            }
            LintKind::UncoveredLetter { solution } => {
                write!(f, "Letter '{}' at {} is not part of any clue", solution, self.position)
            }
        }
    }
}
