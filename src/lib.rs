//! Tally Toe - two-player tic-tac-toe with move history and a session
//! scoreboard.
//!
//! # Architecture
//!
//! - **Engine** ([`game`]): board snapshots, win/draw rules, the move
//!   timeline with time travel, and session statistics, all behind the
//!   [`GameSession`] facade.
//! - **Presentation** (`tui`): a ratatui front end that translates key
//!   events into engine commands and re-renders from engine state after
//!   every operation.
//!
//! # Example
//!
//! ```
//! use tally_toe::GameSession;
//!
//! let mut session = GameSession::new();
//! session.start_game("Ada", "Grace")?;
//! session.play(4)?;
//! let game = session.active().expect("started");
//! assert_eq!(game.timeline().cursor(), 1);
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod tui;

pub mod game;

// Crate-level exports - CLI
pub use cli::Cli;

// Crate-level exports - engine types
pub use game::{
    ActiveGame, Board, Cell, GameError, GameSession, HistoryError, Mark, MoveError, Players,
    Scoreboard, StartError, Timeline, Verdict, WinLine,
};

// Crate-level exports - TUI entry point
pub use tui::run_tui;
