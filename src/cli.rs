//! Command-line interface for strictly_rematch.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Strictly Rematch - tic-tac-toe with a replayable move log
#[derive(Parser, Debug)]
#[command(name = "strictly_rematch")]
#[command(about = "Two-player tic-tac-toe driven by an append-only move log", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a session, reading commands from stdin
    Play {
        /// Path to a TOML config file
        #[arg(short, long)]
        config: Option<PathBuf>,

        /// Print each state as a JSON line instead of a board drawing
        #[arg(long)]
        json: bool,
    },

    /// Print a default config file
    ConfigTemplate,
}
