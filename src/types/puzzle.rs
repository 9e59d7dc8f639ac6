//! A fully mapped puzzle.

use serde::Serialize;

use crate::error::Result;
use crate::mapper::map_clues;
use crate::parser::{parse_grid, Headings, PuzzleConfig};

use super::{Clue, Direction, Grid};

/// A parsed grid with both clue lists mapped, ready to render.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Puzzle {
    pub title: String,
    pub extra_text: String,
    pub headings: Headings,
    pub grid: Grid,
    pub clues_horizontal: Vec<Clue>,
    pub clues_vertical: Vec<Clue>,
}

impl Puzzle {
    /// Parse the grid and map both clue lists.
    ///
    /// Fails on the first grid or clue error; there is no partially mapped
    /// puzzle.
    pub fn from_config(config: &PuzzleConfig) -> Result<Self> {
        let grid = parse_grid(&config.grid, config.grammar)?;
        let clues_horizontal = map_clues(&grid, &config.clues_horizontal, Direction::Horizontal)?;
        let clues_vertical = map_clues(&grid, &config.clues_vertical, Direction::Vertical)?;

        Ok(Self {
            title: config.title.clone(),
            extra_text: config.extra_text.clone(),
            headings: config.headings.clone(),
            grid,
            clues_horizontal,
            clues_vertical,
        })
    }

    /// The clue list for one direction.
    pub fn clues(&self, direction: Direction) -> &[Clue] {
        match direction {
            Direction::Horizontal => &self.clues_horizontal,
            Direction::Vertical => &self.clues_vertical,
        }
    }

    /// The heading for one direction's clue list.
    pub fn heading(&self, direction: Direction) -> &str {
        match direction {
            Direction::Horizontal => &self.headings.horizontal,
            Direction::Vertical => &self.headings.vertical,
        }
    }
}
