//! Command-line interface for tally_toe.

use clap::Parser;
use std::path::PathBuf;

/// Tally Toe - two-player tic-tac-toe with a running scoreboard
#[derive(Parser, Debug)]
#[command(name = "tally_toe")]
#[command(about = "Two-player tic-tac-toe with move history and a session scoreboard", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Log file path (the TUI owns stdout, so logs go to a file)
    #[arg(long, default_value = "tally_toe.log")]
    pub log_file: PathBuf,

    /// Player one's name (X). When both names are given, the setup screen
    /// is skipped.
    #[arg(long)]
    pub player_one: Option<String>,

    /// Player two's name (O).
    #[arg(long)]
    pub player_two: Option<String>,
}
