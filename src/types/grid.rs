//! The crossword grid.
//!
//! A rectangular, row-major matrix of [`Cell`]s. Rows shorter than the
//! widest row are padded with outside cells, so `grid[row][col]` is valid
//! for every `row < height` and `col < width`.

use std::fmt;

use serde::Serialize;

use super::Cell;

/// Traversal direction of a run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    Horizontal,
    Vertical,
}

impl Direction {
    /// Both directions, horizontal first.
    pub const ALL: [Direction; 2] = [Direction::Horizontal, Direction::Vertical];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Horizontal => write!(f, "horizontal"),
            Direction::Vertical => write!(f, "vertical"),
        }
    }
}

/// A zero-based grid position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub struct Position {
    pub row: usize,
    pub col: usize,
}

impl Position {
    pub fn new(row: usize, col: usize) -> Self {
        Self { row, col }
    }

    /// The neighbouring position one step in `direction`.
    pub fn step(self, direction: Direction) -> Position {
        match direction {
            Direction::Horizontal => Position::new(self.row, self.col + 1),
            Direction::Vertical => Position::new(self.row + 1, self.col),
        }
    }
}

/// Displayed one-based, the way authors count rows and columns.
impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "row {}, column {}", self.row + 1, self.col + 1)
    }
}

/// A parsed crossword grid. Immutable once built.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Grid {
    rows: Vec<Vec<Cell>>,
}

impl Grid {
    /// Build a grid, padding every row with outside cells to the widest row.
    pub fn from_rows(mut rows: Vec<Vec<Cell>>) -> Self {
        let width = rows.iter().map(Vec::len).max().unwrap_or(0);
        for row in &mut rows {
            row.resize(width, Cell::OUTSIDE);
        }
        Self { rows }
    }

    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Vec::len)
    }

    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.width() == 0
    }

    /// Get the cell at `pos`, or `None` outside the grid bounds.
    pub fn get(&self, pos: Position) -> Option<&Cell> {
        self.rows.get(pos.row).and_then(|row| row.get(pos.col))
    }

    pub fn rows(&self) -> &[Vec<Cell>] {
        &self.rows
    }

    /// Iterate over all cells in row-major order.
    pub fn iter_cells(&self) -> impl Iterator<Item = (Position, &Cell)> + '_ {
        self.rows.iter().enumerate().flat_map(|(r, row)| {
            row.iter()
                .enumerate()
                .map(move |(c, cell)| (Position::new(r, c), cell))
        })
    }

    /// Starting points in row-major order, with their numbers.
    pub fn starting_points(&self) -> impl Iterator<Item = (Position, u32, &Cell)> + '_ {
        self.iter_cells()
            .filter_map(|(pos, cell)| cell.starting_point_num().map(|n| (pos, n, cell)))
    }
}
