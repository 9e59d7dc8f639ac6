//! Lint checks for mapped puzzles.
//!
//! Each check takes a `&Puzzle` and returns its findings in grid order. A puzzle
//! that maps cleanly can still contain cells no solver will ever be asked
//! to fill, which these checks point out.

use std::collections::HashSet;

use crate::mapper::RunWalker;
use crate::types::{Direction, Position, Puzzle};

use super::lint::{Lint, LintKind};

/// Positions of every cell covered by a mapped clue.
fn covered_cells(puzzle: &Puzzle) -> HashSet<Position> {
    let mut covered = HashSet::new();

    for direction in Direction::ALL {
        let numbers: HashSet<u32> = puzzle.clues(direction).iter().map(|c| c.number).collect();
        for (start, number, _) in puzzle.grid.starting_points() {
            if numbers.contains(&number) {
                covered.extend(RunWalker::new(&puzzle.grid, start, direction));
            }
        }
    }

    covered
}

/// Check for numbered cells that begin no clue in either direction.
pub fn check_unused_starting_points(puzzle: &Puzzle) -> Vec<Lint> {
    let used: HashSet<u32> = Direction::ALL
        .iter()
        .flat_map(|&d| puzzle.clues(d).iter().map(|c| c.number))
        .collect();

    puzzle
        .grid
        .starting_points()
        .filter(|(_, number, _)| !used.contains(number))
        .map(|(pos, number, _)| Lint::new(LintKind::UnusedStartingPoint { number }, pos))
        .collect()
}

/// Check for letter cells that no mapped clue passes through.
pub fn check_uncovered_letters(puzzle: &Puzzle) -> Vec<Lint> {
    let covered = covered_cells(puzzle);

    puzzle
        .grid
        .iter_cells()
        .filter(|(pos, _)| !covered.contains(pos))
        .filter_map(|(pos, cell)| {
            cell.solution()
                .map(|solution| Lint::new(LintKind::UncoveredLetter { solution }, pos))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::PuzzleConfig;

    fn puzzle(yaml: &str) -> Puzzle {
        Puzzle::from_config(&PuzzleConfig::parse(yaml).unwrap()).unwrap()
    }

    #[test]
    fn test_all_starting_points_used() {
        let p = puzzle("title: T\ngrid: |\n  Ab\n  c#\nclues_horizontal: a:Row\nclues_vertical: ac:Col\n");

        assert!(check_unused_starting_points(&p).is_empty());
        assert!(check_uncovered_letters(&p).is_empty());
    }

    #[test]
    fn test_unused_starting_point() {
        let p = puzzle("title: T\ngrid: |\n  Ab\n  #C\nclues_horizontal: a:Row\n");

        let lints = check_unused_starting_points(&p);

        assert_eq!(
            lints,
            vec![Lint::new(LintKind::UnusedStartingPoint { number: 2 }, Position::new(1, 1))]
        );
    }

    #[test]
    fn test_uncovered_letter() {
        let p = puzzle("title: T\ngrid: |\n  Ab\n  #c\nclues_horizontal: a:Row\n");

        let lints = check_uncovered_letters(&p);

        assert_eq!(
            lints,
            vec![Lint::new(LintKind::UncoveredLetter { solution: 'C' }, Position::new(1, 1))]
        );
    }

    #[test]
    fn test_bent_run_covers_cells() {
        let p = puzzle("title: T\ngrid: |\n  Ab)\n  #c\nclues_horizontal: abc:Bent\n");

        assert!(check_uncovered_letters(&p).is_empty());
    }
}
