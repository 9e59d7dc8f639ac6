//! Check command implementation.
//!
//! Parses and maps every puzzle, reporting all failures instead of stopping
//! at the first one. Puzzles that map cleanly are also linted; lint
//! warnings never fail the check.

use std::path::PathBuf;

use clap::Args;
use miette::Diagnostic;

use crate::discovery::{discover_puzzles, load_puzzles_lenient};
use crate::error::{AscrossError, Result};
use crate::output::{display_path, plural, Printer};
use crate::validation::validate_puzzle;

/// Parse and map puzzles without rendering
#[derive(Args, Debug)]
pub struct CheckArgs {
    /// Puzzle files or directories to check
    #[arg(required = true)]
    pub files: Vec<PathBuf>,
}

pub fn run(args: CheckArgs, printer: &Printer) -> Result<()> {
    let paths = discover_puzzles(&args.files)?;
    let results = load_puzzles_lenient(&paths);

    let mut failed = 0;
    for (path, result) in &results {
        match result {
            Ok(puzzle) => {
                let summary = format!(
                    "({} across, {} down)",
                    puzzle.clues_horizontal.len(),
                    puzzle.clues_vertical.len()
                );
                printer.status("Checked", &format!("{} {}", display_path(path), printer.dim(&summary)));
                for lint in validate_puzzle(puzzle) {
                    printer.warning("warning", &format!("{}: {}", display_path(path), lint));
                    if let Some(help) = lint.help() {
                        printer.info("help", help);
                    }
                }
            }
            Err(e) => {
                failed += 1;
                printer.error("Failed", &format!("{}: {}", display_path(path), e));
                if let Some(help) = e.help() {
                    printer.info("help", &help.to_string());
                }
            }
        }
    }

    if failed > 0 {
        return Err(AscrossError::Build {
            message: format!(
                "{} of {} failed",
                plural(failed, "puzzle", "puzzles"),
                results.len()
            ),
            help: None,
        });
    }

    printer.status("Finished", &format!("{} ok", plural(results.len(), "puzzle", "puzzles")));
    Ok(())
}
