//! Command-line interface for the gomoku binary.

use std::path::PathBuf;

use clap::{Parser, Subcommand};

/// Five-in-a-row for two players, or one player against a random computer
#[derive(Parser, Debug)]
#[command(name = "gomoku")]
#[command(about = "Five-in-a-row board game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML configuration file
    #[arg(short, long, default_value = "gomoku.toml")]
    pub config: PathBuf,

    /// Override the board database path from the config
    #[arg(long)]
    pub db: Option<PathBuf>,

    /// Front end to run (defaults to the text console)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available front ends
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Menu-driven text console
    Console,
    /// Graphical board
    Gui,
}
