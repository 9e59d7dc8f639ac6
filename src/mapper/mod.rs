//! Clue mapping.
//!
//! Resolves each clue line to the one starting point whose run in the given
//! direction begins with the clue's prefix, then numbers the clue after that
//! starting point and appends the word length.
//!
//! # Usage
//!
//! ```ignore
//! use ascross::mapper::map_clues;
//! use ascross::parser::{parse_grid, Grammar};
//! use ascross::types::Direction;
//!
//! let grid = parse_grid("ABC\nD.F\nGHI", Grammar::Basic)?;
//! let clues = map_clues(&grid, "A:Top row", Direction::Horizontal)?;
//! assert_eq!(clues[0].text, "Top row (3)");
//! ```

mod run;

use std::collections::HashMap;

use log::debug;

use crate::error::{AscrossError, Result};
use crate::parser::{parse_clue_lines, ClueLine};
use crate::types::{Clue, Direction, Grid, Position};

pub use run::{match_run, RunWalker};

/// A starting point whose run matches a clue prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunMatch {
    pub start: Position,
    pub number: u32,
    pub length: usize,
}

/// Map every clue line in `source` for one direction.
///
/// The result is sorted by starting point number. Each direction is mapped
/// independently, since one starting cell may begin both an across and a
/// down word.
pub fn map_clues(grid: &Grid, source: &str, direction: Direction) -> Result<Vec<Clue>> {
    let lines = parse_clue_lines(source, direction)?;

    let mut mapper = ClueMapper::new(grid, direction);
    for line in &lines {
        mapper.map(line)?;
    }

    Ok(mapper.finish())
}

/// Find every starting point whose run in `direction` fits `prefix`.
///
/// Candidates are visited in row-major order.
pub fn find_matches<'g>(
    grid: &'g Grid,
    prefix: &'g [char],
    direction: Direction,
) -> impl Iterator<Item = RunMatch> + 'g {
    let first = prefix.first().copied();

    grid.starting_points()
        .filter(move |(_, _, cell)| cell.solution() == first)
        .filter_map(move |(start, number, _)| {
            match_run(grid, start, direction, prefix).map(|length| RunMatch {
                start,
                number,
                length,
            })
        })
}

/// Mapping state for a single direction pass.
struct ClueMapper<'g> {
    grid: &'g Grid,
    direction: Direction,
    clues: Vec<Clue>,
    /// Starting point number -> index into `clues`.
    used: HashMap<u32, usize>,
}

impl<'g> ClueMapper<'g> {
    fn new(grid: &'g Grid, direction: Direction) -> Self {
        Self {
            grid,
            direction,
            clues: Vec::new(),
            used: HashMap::new(),
        }
    }

    fn map(&mut self, line: &ClueLine<'_>) -> Result<()> {
        let found = self.resolve(line)?;

        if let Some(&existing) = self.used.get(&found.number) {
            return Err(AscrossError::StartingPointReused {
                direction: self.direction,
                line: line.line,
                clue: line.body.to_string(),
                number: found.number,
                existing: self.clues[existing].text.clone(),
            });
        }

        debug!(
            "{} clue on line {} -> {} at {} ({} letters)",
            self.direction, line.line, found.number, found.start, found.length
        );

        self.used.insert(found.number, self.clues.len());
        self.clues.push(Clue::new(found.number, line.body, found.length));
        Ok(())
    }

    /// The single run matching this clue line.
    fn resolve(&self, line: &ClueLine<'_>) -> Result<RunMatch> {
        let mut matches = find_matches(self.grid, &line.prefix, self.direction);

        let Some(first) = matches.next() else {
            return Err(AscrossError::ClueNotMapped {
                direction: self.direction,
                line: line.line,
                input: line.raw.to_string(),
            });
        };

        let others: Vec<Position> = matches.map(|m| m.start).collect();
        if !others.is_empty() {
            let mut starts = vec![first.start];
            starts.extend(others);
            return Err(AscrossError::AmbiguousClue {
                direction: self.direction,
                line: line.line,
                clue: line.body.to_string(),
                starts,
            });
        }

        Ok(first)
    }

    fn finish(mut self) -> Vec<Clue> {
        self.clues.sort();
        self.clues
    }
}
