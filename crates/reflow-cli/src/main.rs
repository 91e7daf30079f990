//! reflow-md
//!
//! Reflows Markdown paragraphs in a file to a preferred line width.

mod cli;
mod commands;
mod config;
mod error;
mod io;
mod logging;

use clap::Parser;
use colored::Colorize;

use cli::{Cli, Commands};
use commands::Outcome;
use error::Result;

fn main() {
    match run() {
        Ok(Outcome::Clean) => {}
        Ok(Outcome::WouldChange) => std::process::exit(1),
        Err(e) => {
            eprintln!("{}: {}", "error".red().bold(), e);
            std::process::exit(1);
        }
    }
}

fn run() -> Result<Outcome> {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.verbose) {
        eprintln!("{}: could not initialise logging: {e}", "warning".yellow());
    }
    tracing::debug!(command = ?cli.command, "starting");

    match &cli.command {
        Commands::Paragraph { line, args } => commands::run_paragraph(args, *line),
        Commands::Format { on_save, args } => commands::run_format(args, *on_save),
    }
}
