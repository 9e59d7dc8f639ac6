//! Puzzle file (`*.puzzle.yaml`, `*.puzzle.toml`) parsing.
//!
//! A puzzle file holds the grid, both clue lists and the text printed
//! around them:
//!
//! ```yaml
//! title: Weekend crossword
//! grammar: extended
//! grid: |
//!   Cat#
//!   a#Do
//! clues_horizontal: |
//!   c:Feline
//! clues_vertical: |
//!   ca:Taxi
//! extra_text: Solutions next week.
//! ```
//!
//! TOML files carry the same fields. They default to the basic grammar,
//! which is what older TOML puzzles were written in:
//!
//! ```toml
//! title = "Korsord"
//! grid = """
//! Cat.
//! a.Do"""
//! clues_horizontal = "c:Feline"
//! clues_vertical = "ca:Taxi"
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{AscrossError, Result};

use super::grid::Grammar;

/// Raw puzzle definition as written by the author.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct PuzzleConfig {
    /// Display title.
    pub title: String,

    /// Grid text, one row per line.
    pub grid: String,

    /// Horizontal clues, one `PREFIX:TEXT` per line.
    #[serde(default)]
    pub clues_horizontal: String,

    /// Vertical clues, one `PREFIX:TEXT` per line.
    #[serde(default)]
    pub clues_vertical: String,

    /// Extra markup printed below the clues.
    #[serde(default)]
    pub extra_text: String,

    /// Glyph set used by `grid`.
    #[serde(default)]
    pub grammar: Grammar,

    /// Headings above the clue lists.
    #[serde(default)]
    pub headings: Headings,
}

/// Headings for the two clue lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Headings {
    pub horizontal: String,
    pub vertical: String,
}

impl Default for Headings {
    fn default() -> Self {
        Self {
            horizontal: "Across".to_string(),
            vertical: "Down".to_string(),
        }
    }
}

/// Syntax of a puzzle file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleFormat {
    Yaml,
    Toml,
}

impl PuzzleFormat {
    /// Pick the format from the file extension. Anything but `.toml` is YAML.
    pub fn from_path(path: &Path) -> Self {
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => PuzzleFormat::Toml,
            _ => PuzzleFormat::Yaml,
        }
    }
}

impl PuzzleConfig {
    /// Load a puzzle file, choosing the parser by extension.
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path).map_err(|e| AscrossError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to read puzzle: {}", e),
        })?;

        match PuzzleFormat::from_path(path) {
            PuzzleFormat::Yaml => Self::parse(&content),
            PuzzleFormat::Toml => Self::parse_toml(&content),
        }
    }

    /// Parse a puzzle from a TOML string. `grammar` defaults to basic.
    pub fn parse_toml(content: &str) -> Result<Self> {
        let invalid = |e: toml::de::Error| AscrossError::Parse {
            message: format!("Invalid puzzle: {}", e),
            help: Some("A puzzle needs at least `title` and `grid`".to_string()),
        };

        let mut table: toml::Table = toml::from_str(content).map_err(invalid)?;
        if !table.contains_key("grammar") {
            table.insert("grammar".to_string(), toml::Value::from("basic"));
        }

        toml::Value::Table(table).try_into().map_err(invalid)
    }

    /// Parse a puzzle from a YAML string.
    pub fn parse(content: &str) -> Result<Self> {
        serde_yaml::from_str(content).map_err(|e| AscrossError::Parse {
            message: format!("Invalid puzzle: {}", e),
            help: Some("A puzzle needs at least `title` and `grid`".to_string()),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_parse_minimal_puzzle() {
        let yaml = "title: Tiny\ngrid: AB";
        let config = PuzzleConfig::parse(yaml).unwrap();

        assert_eq!(config.title, "Tiny");
        assert_eq!(config.grid, "AB");
        assert!(config.clues_horizontal.is_empty());
        assert_eq!(config.grammar, Grammar::Extended);
        assert_eq!(config.headings, Headings::default());
    }

    #[test]
    fn test_parse_full_puzzle() {
        let yaml = r#"
title: Full
grammar: basic
grid: |
  ABC
  D.F
clues_horizontal: |
  a:Top
clues_vertical: |
  ad:Left
extra_text: <b>Good luck</b>
headings:
  horizontal: Vågrätt
  vertical: Lodrätt
"#;
        let config = PuzzleConfig::parse(yaml).unwrap();

        assert_eq!(config.grammar, Grammar::Basic);
        assert_eq!(config.grid, "ABC\nD.F\n");
        assert_eq!(config.clues_vertical, "ad:Left\n");
        assert_eq!(config.extra_text, "<b>Good luck</b>");
        assert_eq!(config.headings.horizontal, "Vågrätt");
        assert_eq!(config.headings.vertical, "Lodrätt");
    }

    #[test]
    fn test_partial_headings_keep_defaults() {
        let yaml = "title: T\ngrid: AB\nheadings:\n  vertical: Downwards";
        let config = PuzzleConfig::parse(yaml).unwrap();

        assert_eq!(config.headings.horizontal, "Across");
        assert_eq!(config.headings.vertical, "Downwards");
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = PuzzleConfig::parse("title: T\ngrid: AB\ncolour: red");
        assert!(result.is_err());
    }

    #[test]
    fn test_missing_grid_rejected() {
        let err = PuzzleConfig::parse("title: T").unwrap_err();
        assert!(err.to_string().contains("grid"));
    }

    #[test]
    fn test_unknown_grammar_rejected() {
        assert!(PuzzleConfig::parse("title: T\ngrid: AB\ngrammar: fancy").is_err());
    }

    #[test]
    fn test_load_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tiny.puzzle.yaml");
        std::fs::write(&path, "title: From disk\ngrid: AB\n").unwrap();

        let config = PuzzleConfig::load(&path).unwrap();
        assert_eq!(config.title, "From disk");
    }

    #[test]
    fn test_parse_toml_puzzle() {
        let source = r#"title = "Korsord"
grid = """
ABC
D.F"""
clues_horizontal = "a:Top"
clues_vertical = "ad:Left"
extra_text = "<i>Lycka till</i>"
"#;
        let config = PuzzleConfig::parse_toml(source).unwrap();

        assert_eq!(config.title, "Korsord");
        assert_eq!(config.grid, "ABC\nD.F");
        assert_eq!(config.clues_horizontal, "a:Top");
        assert_eq!(config.extra_text, "<i>Lycka till</i>");
        assert_eq!(config.grammar, Grammar::Basic);
        assert_eq!(config.headings, Headings::default());
    }

    #[test]
    fn test_parse_toml_explicit_grammar() {
        let config = PuzzleConfig::parse_toml("title = \"T\"\ngrid = \"A#b\"\ngrammar = \"extended\"\n").unwrap();
        assert_eq!(config.grammar, Grammar::Extended);
    }

    #[test]
    fn test_parse_toml_rejects_unknown_field() {
        let err = PuzzleConfig::parse_toml("title = \"T\"\ngrid = \"AB\"\ncolour = \"red\"\n").unwrap_err();
        assert!(matches!(err, AscrossError::Parse { .. }));
    }

    #[test]
    fn test_parse_toml_syntax_error() {
        assert!(PuzzleConfig::parse_toml("title = ").is_err());
    }

    #[test]
    fn test_format_from_path() {
        assert_eq!(PuzzleFormat::from_path(Path::new("a.puzzle.toml")), PuzzleFormat::Toml);
        assert_eq!(PuzzleFormat::from_path(Path::new("a.puzzle.yml")), PuzzleFormat::Yaml);
        assert_eq!(PuzzleFormat::from_path(Path::new("puzzle")), PuzzleFormat::Yaml);
    }

    #[test]
    fn test_load_toml_from_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("tiny.puzzle.toml");
        std::fs::write(&path, "title = \"From disk\"\ngrid = \"A.B\"\n").unwrap();

        let config = PuzzleConfig::load(&path).unwrap();
        assert_eq!(config.title, "From disk");
        assert_eq!(config.grammar, Grammar::Basic);
    }

    #[test]
    fn test_load_missing_file() {
        let err = PuzzleConfig::load(Path::new("/nonexistent/x.puzzle.yaml")).unwrap_err();
        assert!(matches!(err, AscrossError::Io { .. }));
    }
}
