//! CLI definitions for WandrWays.

pub mod commands;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// WandrWays - Jouw ultieme reispartner
#[derive(Parser)]
#[command(name = "wandrways")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Path to config file (default: ~/.config/wandrways/wandrways.toml)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Start an interactive session (default)
    Run,

    /// List the languages the translator can target
    Languages,

    /// Show the travel tips
    Tips,
}
