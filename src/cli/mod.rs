pub mod build;
pub mod check;
pub mod completions;
pub mod show;

use clap::{Parser, Subcommand};

/// ascross - ASCII crossword renderer
#[derive(Parser, Debug)]
#[command(name = "ascross")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Print debug tracing (RUST_LOG overrides)
    #[arg(long, short, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Render puzzles to HTML pages, SVG or JSON
    Build(build::BuildArgs),

    /// Parse and map puzzles without rendering
    Check(check::CheckArgs),

    /// Print a puzzle's grid and clue lists as text
    Show(show::ShowArgs),

    /// Generate shell completions
    Completions(completions::CompletionsArgs),
}
