//! Grid cells.
//!
//! A cell is either outside the printed grid, an opaque blocked square, or a
//! letter square holding one solution character. Letter squares written in
//! uppercase in the source begin at least one clue and carry a number.

use serde::Serialize;

use super::Direction;

/// What a grid position holds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CellKind {
    /// No printable cell (page padding).
    Outside,
    /// Opaque square.
    Blocked,
    /// A square holding `solution`. `number` is set when the cell is a
    /// starting point.
    Letter { solution: char, number: Option<u32> },
}

/// One grid position with its decorations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Cell {
    #[serde(flatten)]
    pub kind: CellKind,
    #[serde(skip_serializing_if = "is_false")]
    pub wall_right: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub wall_bottom: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub arrow_down: bool,
    #[serde(skip_serializing_if = "is_false")]
    pub arrow_right: bool,
}

fn is_false(value: &bool) -> bool {
    !*value
}

impl Cell {
    pub const OUTSIDE: Cell = Cell::new(CellKind::Outside);
    pub const BLOCKED: Cell = Cell::new(CellKind::Blocked);

    pub const fn new(kind: CellKind) -> Self {
        Self {
            kind,
            wall_right: false,
            wall_bottom: false,
            arrow_down: false,
            arrow_right: false,
        }
    }

    /// A letter cell. `number` marks it as a starting point.
    pub fn letter(solution: char, number: Option<u32>) -> Self {
        Self::new(CellKind::Letter { solution, number })
    }

    pub fn is_letter(&self) -> bool {
        matches!(self.kind, CellKind::Letter { .. })
    }

    pub fn is_outside(&self) -> bool {
        self.kind == CellKind::Outside
    }

    pub fn solution(&self) -> Option<char> {
        match self.kind {
            CellKind::Letter { solution, .. } => Some(solution),
            _ => None,
        }
    }

    /// The starting point number, if this letter begins a clue.
    pub fn starting_point_num(&self) -> Option<u32> {
        match self.kind {
            CellKind::Letter { number, .. } => number,
            _ => None,
        }
    }

    pub fn is_starting_point(&self) -> bool {
        self.starting_point_num().is_some()
    }

    /// Whether a wall on this cell stops a run moving in `direction`.
    pub fn has_wall(&self, direction: Direction) -> bool {
        match direction {
            Direction::Horizontal => self.wall_right,
            Direction::Vertical => self.wall_bottom,
        }
    }

    /// The direction a run continues in after passing this cell.
    pub fn redirect(&self, direction: Direction) -> Direction {
        if self.arrow_down {
            Direction::Vertical
        } else if self.arrow_right {
            Direction::Horizontal
        } else {
            direction
        }
    }
}

impl Default for Cell {
    fn default() -> Self {
        Cell::OUTSIDE
    }
}

/// Uppercase a single character.
///
/// Characters whose uppercase form spans several characters (e.g. 'ß')
/// are returned unchanged so every cell keeps exactly one glyph.
pub fn uppercase_char(c: char) -> char {
    let mut upper = c.to_uppercase();
    match (upper.next(), upper.next()) {
        (Some(u), None) => u,
        _ => c,
    }
}
