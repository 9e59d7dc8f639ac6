//! File system scanner for puzzle files.
//!
//! Recursively scans directories for `.puzzle.yaml`, `.puzzle.yml` and
//! `.puzzle.toml` files.

use std::path::{Path, PathBuf};

use walkdir::WalkDir;

/// File name suffixes recognised as puzzle files.
pub const PUZZLE_SUFFIXES: [&str; 3] = [".puzzle.yaml", ".puzzle.yml", ".puzzle.toml"];

/// Check whether a path names a puzzle file.
pub fn is_puzzle_file(path: &Path) -> bool {
    path.file_name()
        .and_then(|n| n.to_str())
        .is_some_and(|name| PUZZLE_SUFFIXES.iter().any(|suffix| name.ends_with(suffix)))
}

/// Scan a directory for puzzle files, sorted by path.
pub fn scan_directory(root: &Path) -> Vec<PathBuf> {
    let mut result: Vec<PathBuf> = WalkDir::new(root)
        .follow_links(true)
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
        .map(|e| e.into_path())
        .filter(|p| is_puzzle_file(p))
        .collect();

    result.sort();
    result
}
