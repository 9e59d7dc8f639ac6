use ascross::cli::{Cli, Commands};
use ascross::output::Printer;
use clap::Parser;
use miette::Result;

fn main() -> Result<()> {
    let cli = Cli::parse();
    ascross::logging::init_logger(cli.verbose);
    let printer = Printer::new();

    match cli.command {
        Commands::Build(args) => ascross::cli::build::run(args, &printer)?,
        Commands::Check(args) => ascross::cli::check::run(args, &printer)?,
        Commands::Show(args) => ascross::cli::show::run(args)?,
        Commands::Completions(args) => ascross::cli::completions::run(args)?,
    }

    Ok(())
}
