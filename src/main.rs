//! Tally Toe - terminal tic-tac-toe.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use tracing::info;
use tracing_subscriber::EnvFilter;

use tally_toe::{Cli, GameSession, run_tui};

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Log to a file so the TUI keeps stdout to itself.
    let log_file = std::fs::File::create(&cli.log_file)
        .with_context(|| format!("Failed to create log file {}", cli.log_file.display()))?;
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::sync::Arc::new(log_file))
        .with_ansi(false)
        .init();

    info!("Starting tally_toe");

    let mut session = GameSession::new();
    if let (Some(one), Some(two)) = (&cli.player_one, &cli.player_two) {
        session
            .start_game(one, two)
            .context("Invalid player names on the command line")?;
        info!(player_one = %one, player_two = %two, "Game pre-started from CLI");
    }

    run_tui(session)
}
