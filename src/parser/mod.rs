//! Parsers for ascross input.
//!
//! - [`parse_grid`] turns grid text into a [`Grid`](crate::types::Grid)
//! - [`parse_clue_lines`] splits clue text into prefix and clue text
//! - [`PuzzleConfig`] reads a whole puzzle file
//!
//! # Usage
//!
//! ```ignore
//! use ascross::parser::{parse_grid, Grammar};
//!
//! let grid = parse_grid("Cat#\na#Do", Grammar::Extended)?;
//! println!("{} starting points", grid.starting_points().count());
//! ```

mod clue;
mod grid;
mod puzzle;

pub use clue::{parse_clue_lines, ClueLine};
pub use grid::{parse_grid, Grammar, GridParser};
pub use puzzle::{Headings, PuzzleConfig, PuzzleFormat};
