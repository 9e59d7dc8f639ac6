//! Monospace text dump of a grid, for debugging puzzle sources.

use crate::types::{CellKind, Clue, Grid};

/// Render the grid as a table with three columns per cell.
///
/// Blocked cells show `#`; starting points show their number right-aligned
/// in front of the solution letter.
pub fn dump_grid(grid: &Grid) -> String {
    let mut out = String::new();

    for row in grid.rows() {
        for cell in row {
            match cell.kind {
                CellKind::Outside => out.push_str("   "),
                CellKind::Blocked => out.push_str("  #"),
                CellKind::Letter { solution, number: Some(n) } => {
                    out.push_str(&format!("{n:>2}{solution}"));
                }
                CellKind::Letter { solution, number: None } => {
                    out.push_str(&format!("  {solution}"));
                }
            }
        }
        out.push('\n');
    }

    out
}

/// Render a numbered clue list under a heading.
pub fn dump_clues(heading: &str, clues: &[Clue]) -> String {
    let mut out = format!("{heading}\n");
    for clue in clues {
        out.push_str(&format!("{:>4}. {}\n", clue.number, clue.text));
    }
    out
}
