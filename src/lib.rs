//! ascross - ASCII crossword renderer
//!
//! A library for turning plain-text crossword definitions (an ASCII grid
//! plus `PREFIX:TEXT` clue lines) into numbered, printable puzzle pages.

pub mod cli;
pub mod discovery;
pub mod error;
pub mod logging;
pub mod mapper;
pub mod output;
pub mod parser;
pub mod render;
pub mod types;
pub mod validation;

pub use discovery::{discover_puzzles, load_puzzle, load_puzzles, LoadedPuzzle};
pub use error::{AscrossError, Result};
pub use mapper::{find_matches, map_clues, RunMatch, RunWalker};
pub use parser::{parse_clue_lines, parse_grid, Grammar, GridParser, Headings, PuzzleConfig, PuzzleFormat};
pub use render::{dump_grid, render_a4, render_a5_two, svg_grid, to_json, PageOptions, SvgOptions};
pub use validation::{validate_puzzle, Lint, LintKind};
pub use types::{Cell, CellKind, Clue, Direction, Grid, Position, Puzzle};
