mod cli;
mod commands;
mod output;

use crate::cli::{Cli, Commands};
use crate::commands::Command as _;
use crate::commands::highlight::HighlightCommand;
use crate::commands::lines::LinesCommand;
use anyhow::Result;
use clap::Parser;
use fieldlens_core::LineWindow;

fn main() -> Result<()> {
    let cli = Cli::parse();
    let default_filter = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();

    match cli.command {
        Commands::Lines(args) => {
            let cmd = LinesCommand::new(args.path, LineWindow::new(args.start, args.end));
            cmd.run()?;
        }
        Commands::Highlight(args) => {
            let cmd = HighlightCommand::new(args.path, args.mapping, args.dry_run);
            cmd.run()?;
        }
    }

    Ok(())
}
