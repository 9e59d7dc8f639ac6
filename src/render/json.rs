//! JSON export of mapped puzzles.

use crate::error::{AscrossError, Result};
use crate::types::Puzzle;

/// Serialize puzzles (grid cells and both clue lists) as pretty JSON.
pub fn to_json(puzzles: &[Puzzle]) -> Result<String> {
    serde_json::to_string_pretty(puzzles).map_err(|e| AscrossError::Build {
        message: format!("Failed to serialize puzzles: {}", e),
        help: None,
    })
}
