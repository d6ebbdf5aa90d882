//! Strictly Rematch - terminal driver
//!
//! Reads game commands from stdin and prints derived state to stdout.
//! Logs go to stderr.

#![warn(missing_docs)]

mod cli;

use anyhow::{Context, Result};
use clap::Parser;
use cli::{Cli, Command};
use strictly_rematch::SessionConfig;
use strictly_rematch::SessionController;
use strictly_rematch::console::{self, OutputFormat};
use tracing::{info, instrument};
use tracing_subscriber::{EnvFilter, layer::SubscriberExt, util::SubscriberInitExt};

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { config, json } => run_play(config, json),
        Command::ConfigTemplate => {
            print!("{}", SessionConfig::default().to_toml()?);
            Ok(())
        }
    }
}

/// Run an interactive session on stdin/stdout
fn run_play(config_path: Option<std::path::PathBuf>, json: bool) -> Result<()> {
    let config = match &config_path {
        Some(path) => SessionConfig::from_file(path)
            .with_context(|| format!("Loading {}", path.display()))?,
        None => SessionConfig::default(),
    };

    initialize_tracing(config.log_filter());
    info!(config = ?config_path, json, "Starting play session");

    let format = if json {
        OutputFormat::Json
    } else {
        OutputFormat::Text
    };

    let mut session = SessionController::new(config.registry());
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    console::run(&mut session, stdin.lock(), stdout.lock(), format)?;

    info!("Session ended");
    Ok(())
}

#[instrument]
fn initialize_tracing(default_filter: &str) {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default_filter.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    info!("Tracing initialized");
}
