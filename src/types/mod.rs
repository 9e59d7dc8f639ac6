//! Core domain types for ascross.
//!
//! - `Cell` - One grid position (outside, blocked or letter)
//! - `Grid` - Rectangular matrix of cells
//! - `Clue` - A clue resolved to its starting point number
//! - `Puzzle` - Grid plus both mapped clue lists

mod cell;
mod clue;
mod grid;
mod puzzle;

pub use cell::{uppercase_char, Cell, CellKind};
pub use clue::Clue;
pub use grid::{Direction, Grid, Position};
pub use puzzle::Puzzle;
