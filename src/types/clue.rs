//! Mapped clues.

use serde::Serialize;

/// A clue resolved to its starting point, ready for display.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize)]
pub struct Clue {
    /// Starting point number the clue is listed under.
    pub number: u32,
    /// Author text followed by the word length, e.g. `"Top row (3)"`.
    pub text: String,
    /// Number of letter cells in the run.
    pub length: usize,
}

impl Clue {
    pub fn new(number: u32, body: &str, length: usize) -> Self {
        Self {
            number,
            text: format!("{} ({})", body, length),
            length,
        }
    }
}
