//! Puzzle file discovery and loading.
//!
//! Inputs may be puzzle files or directories; directories are scanned
//! recursively for `*.puzzle.yaml` files.
//!
//! # Example
//!
//! ```ignore
//! use ascross::discovery::{discover_puzzles, load_puzzles};
//!
//! let paths = discover_puzzles(&["puzzles/".into()])?;
//! let puzzles = load_puzzles(&paths)?;
//! ```

mod loader;
mod scanner;

use std::path::PathBuf;

use log::debug;

use crate::error::Result;

pub use loader::{load_puzzle, load_puzzles, load_puzzles_lenient, LoadedPuzzle};
pub use scanner::{is_puzzle_file, scan_directory, PUZZLE_SUFFIXES};

/// Expand input paths into puzzle files.
///
/// Directories contribute every puzzle file below them (sorted); files are
/// kept as given, in order, whatever their name.
pub fn discover_puzzles(inputs: &[PathBuf]) -> Result<Vec<PathBuf>> {
    let mut result = Vec::new();

    for input in inputs {
        if input.is_dir() {
            let found = scan_directory(input);
            debug!("{}: {} puzzle file(s)", input.display(), found.len());
            result.extend(found);
        } else {
            result.push(input.clone());
        }
    }

    if result.is_empty() {
        return Err(loader::no_puzzles_found());
    }

    Ok(result)
}
