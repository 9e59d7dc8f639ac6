//! Puzzle loader - reads puzzle files and maps their clues.

use std::path::{Path, PathBuf};

use crate::error::{AscrossError, Result};
use crate::parser::PuzzleConfig;
use crate::types::Puzzle;

/// A puzzle together with the file it came from.
#[derive(Debug, Clone)]
pub struct LoadedPuzzle {
    pub path: PathBuf,
    pub puzzle: Puzzle,
}

/// Load and map one puzzle file.
///
/// Errors are tagged with the file path.
pub fn load_puzzle(path: &Path) -> Result<LoadedPuzzle> {
    let puzzle = PuzzleConfig::load(path)
        .and_then(|config| Puzzle::from_config(&config))
        .map_err(|e| e.in_puzzle(path))?;

    Ok(LoadedPuzzle {
        path: path.to_path_buf(),
        puzzle,
    })
}

/// Load every puzzle, stopping at the first failure.
pub fn load_puzzles(paths: &[PathBuf]) -> Result<Vec<LoadedPuzzle>> {
    paths.iter().map(|p| load_puzzle(p)).collect()
}

/// Load every puzzle, keeping failures alongside successes.
pub fn load_puzzles_lenient(paths: &[PathBuf]) -> Vec<(PathBuf, Result<Puzzle>)> {
    paths
        .iter()
        .map(|path| {
            let result = PuzzleConfig::load(path).and_then(|config| Puzzle::from_config(&config));
            (path.clone(), result)
        })
        .collect()
}

/// Error for an empty set of inputs.
pub(crate) fn no_puzzles_found() -> AscrossError {
    AscrossError::Build {
        message: "No puzzle files found".to_string(),
        help: Some("Pass .puzzle.yaml or .puzzle.toml files, or directories containing them".to_string()),
    }
}
