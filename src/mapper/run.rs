//! Run traversal.
//!
//! A run starts on a letter cell and steps through neighbouring letter cells
//! in the current direction. Arrows switch the direction from the cell that
//! carries them; a wall on the current cell in the current direction ends
//! the run after that cell. Runs only ever move right or down, so a run
//! leaves the grid after at most `width + height` steps.

use crate::types::{Direction, Grid, Position};

/// Iterator over the positions of a run.
#[derive(Debug, Clone)]
pub struct RunWalker<'g> {
    grid: &'g Grid,
    next: Option<Position>,
    direction: Direction,
}

impl<'g> RunWalker<'g> {
    pub fn new(grid: &'g Grid, start: Position, direction: Direction) -> Self {
        Self {
            grid,
            next: Some(start),
            direction,
        }
    }
}

impl Iterator for RunWalker<'_> {
    type Item = Position;

    fn next(&mut self) -> Option<Position> {
        let pos = self.next.take()?;
        let cell = self.grid.get(pos).filter(|cell| cell.is_letter())?;

        self.direction = cell.redirect(self.direction);
        if !cell.has_wall(self.direction) {
            self.next = Some(pos.step(self.direction));
        }

        Some(pos)
    }
}

/// Walk the run from `start` and check it against `prefix`.
///
/// Returns the word length, or `None` when the run is not a word for this
/// prefix: a letter differs from the prefix, the run is a single letter, or
/// it ends before the whole prefix is matched.
pub fn match_run(grid: &Grid, start: Position, direction: Direction, prefix: &[char]) -> Option<usize> {
    let mut length = 0;

    for (i, pos) in RunWalker::new(grid, start, direction).enumerate() {
        let solution = grid.get(pos).and_then(|cell| cell.solution());
        if let Some(&expected) = prefix.get(i) {
            if solution != Some(expected) {
                return None;
            }
        }
        length += 1;
    }

    if length <= 1 || length < prefix.len() {
        None
    } else {
        Some(length)
    }
}
