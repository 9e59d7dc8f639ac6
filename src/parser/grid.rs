//! ASCII grid parser.
//!
//! Each character of the grid text is one cell: a space is outside the grid,
//! the blocked glyph is an opaque square and anything else is a letter.
//! Letters written in uppercase begin a clue and are numbered in row-major
//! order, starting at 1 for every grid parsed.
//!
//! With the extended grammar a letter or blocked cell may be followed by one
//! modifier glyph that decorates it instead of starting a new cell:
//!
//! ```text
//! .   spacer, keeps columns aligned
//! |   wall on the right
//! -   wall below
//! )   run turns downwards here
//! (   run turns rightwards here
//! ```

use log::{debug, trace};
use serde::{Deserialize, Serialize};

use crate::error::{AscrossError, Result};
use crate::types::{uppercase_char, Cell, Grid};

/// Glyph set used to read a grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Grammar {
    /// `#` is blocked; `.`, `|`, `-`, `)` and `(` are cell modifiers.
    #[default]
    Extended,
    /// `.` is blocked; no modifiers.
    Basic,
}

/// A decoration applied to the preceding cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Modifier {
    Spacer,
    WallRight,
    WallBottom,
    ArrowDown,
    ArrowRight,
}

impl Modifier {
    fn apply(self, cell: &mut Cell) {
        match self {
            Modifier::Spacer => {}
            Modifier::WallRight => cell.wall_right = true,
            Modifier::WallBottom => cell.wall_bottom = true,
            Modifier::ArrowDown => cell.arrow_down = true,
            Modifier::ArrowRight => cell.arrow_right = true,
        }
    }
}

impl Grammar {
    /// The glyph for an opaque square.
    pub fn blocked_glyph(self) -> char {
        match self {
            Grammar::Extended => '#',
            Grammar::Basic => '.',
        }
    }

    fn modifier(self, c: char) -> Option<Modifier> {
        if self == Grammar::Basic {
            return None;
        }
        match c {
            '.' => Some(Modifier::Spacer),
            '|' => Some(Modifier::WallRight),
            '-' => Some(Modifier::WallBottom),
            ')' => Some(Modifier::ArrowDown),
            '(' => Some(Modifier::ArrowRight),
            _ => None,
        }
    }
}

/// Parse grid text with the given grammar.
///
/// Leading and trailing empty lines are ignored.
pub fn parse_grid(source: &str, grammar: Grammar) -> Result<Grid> {
    GridParser::new(grammar).parse(source)
}

/// Single-use grid parser owning the starting point counter.
#[derive(Debug)]
pub struct GridParser {
    grammar: Grammar,
    next_starting_point_num: u32,
}

impl GridParser {
    pub fn new(grammar: Grammar) -> Self {
        Self {
            grammar,
            next_starting_point_num: 1,
        }
    }

    pub fn parse(mut self, source: &str) -> Result<Grid> {
        let lines: Vec<&str> = source
            .split('\n')
            .map(|line| line.strip_suffix('\r').unwrap_or(line))
            .collect();

        let Some(first) = lines.iter().position(|line| !line.is_empty()) else {
            return Ok(Grid::from_rows(Vec::new()));
        };
        let last = lines
            .iter()
            .rposition(|line| !line.is_empty())
            .unwrap_or(first);

        let mut rows = Vec::with_capacity(last - first + 1);
        for (offset, line) in lines[first..=last].iter().enumerate() {
            rows.push(self.parse_row(line, first + offset + 1)?);
        }

        let grid = Grid::from_rows(rows);
        debug!(
            "parsed {}x{} grid with {} starting point(s)",
            grid.width(),
            grid.height(),
            self.next_starting_point_num - 1
        );
        Ok(grid)
    }

    /// Parse one line. `line_no` is one-based, for error messages.
    fn parse_row(&mut self, line: &str, line_no: usize) -> Result<Vec<Cell>> {
        let mut cells = Vec::with_capacity(line.len());
        let mut chars = line.chars().enumerate().peekable();

        while let Some((col, c)) = chars.next() {
            if self.grammar.modifier(c).is_some() {
                return Err(AscrossError::MalformedExtendedCell {
                    line: line_no,
                    column: col + 1,
                    glyph: c,
                });
            }

            let mut cell = self.create_cell(c);

            if !cell.is_outside() {
                let modifier = chars
                    .peek()
                    .and_then(|&(_, next)| self.grammar.modifier(next));
                if let Some(modifier) = modifier {
                    trace!("line {line_no}: {modifier:?} on '{c}'");
                    modifier.apply(&mut cell);
                    chars.next();
                }
            }

            cells.push(cell);
        }

        Ok(cells)
    }

    fn create_cell(&mut self, c: char) -> Cell {
        if c == ' ' {
            return Cell::OUTSIDE;
        }
        if c == self.grammar.blocked_glyph() {
            return Cell::BLOCKED;
        }

        let number = if c.is_uppercase() {
            let n = self.next_starting_point_num;
            self.next_starting_point_num += 1;
            Some(n)
        } else {
            None
        };

        Cell::letter(uppercase_char(c), number)
    }
}
