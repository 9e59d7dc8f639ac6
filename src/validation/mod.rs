//! Lint checks for mapped puzzles.
//!
//! Mapping errors reject a puzzle outright; lints only warn about things
//! that are legal but probably unintended. Used by `ascross check`.

mod checks;
mod lint;

pub use lint::{Lint, LintKind};

use crate::types::Puzzle;

/// Run all lint checks against a puzzle.
pub fn validate_puzzle(puzzle: &Puzzle) -> Vec<Lint> {
    let mut lints = checks::check_unused_starting_points(puzzle);
    lints.extend(checks::check_uncovered_letters(puzzle));
    lints
}
