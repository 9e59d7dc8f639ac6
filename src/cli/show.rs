//! Show command implementation.
//!
//! Prints the grid dump and both numbered clue lists of one puzzle.

use std::path::PathBuf;

use clap::Args;

use crate::discovery::load_puzzle;
use crate::error::Result;
use crate::render::{dump_clues, dump_grid};
use crate::types::{Direction, Puzzle};

/// Print a puzzle's grid and clue lists as text
#[derive(Args, Debug)]
pub struct ShowArgs {
    /// Puzzle file
    pub file: PathBuf,
}

pub fn run(args: ShowArgs) -> Result<()> {
    let loaded = load_puzzle(&args.file)?;
    print!("{}", render(&loaded.puzzle));
    Ok(())
}

fn render(puzzle: &Puzzle) -> String {
    let mut out = format!("{}\n\n{}", puzzle.title, dump_grid(&puzzle.grid));
    for direction in Direction::ALL {
        out.push('\n');
        out.push_str(&dump_clues(puzzle.heading(direction), puzzle.clues(direction)));
    }
    out
}
