//! WandrWays CLI - Travel companion for the terminal
//!
//! One process is one session: packing list, pins and diary live in memory
//! and are gone when you quit.

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Commands};
use wandrways::Config;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with panel output
    let log_level = if cli.verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(format!("wandrways={}", log_level).parse()?),
        )
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let config = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::load_default().context("Cannot load default config")?,
    };

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => cli::commands::run(&config),
        Commands::Languages => cli::commands::languages(&config),
        Commands::Tips => {
            cli::output::print_tips(&wandrways::panels::tips::render());
            Ok(())
        }
    }
}
