//! Game rules for tic-tac-toe.
//!
//! Pure functions for evaluating a board snapshot. The verdict is recomputed
//! on every inspection rather than cached, because the engine inspects
//! arbitrary historical snapshots during time travel.

pub mod draw;
pub mod win;

pub use draw::is_draw;
pub use win::{LINES, WinLine, check_winner};

use crate::game::types::Board;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The derived status of a board snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Verdict {
    /// No line matches and at least one cell is empty.
    InProgress,
    /// A player has completed a line.
    Won(WinLine),
    /// No line matches and every cell is occupied.
    Draw,
}

impl Verdict {
    /// Checks whether the game is over (won or drawn).
    pub fn is_decided(&self) -> bool {
        !matches!(self, Verdict::InProgress)
    }

    /// Returns the winning line, if any.
    pub fn win_line(&self) -> Option<WinLine> {
        match self {
            Verdict::Won(line) => Some(*line),
            _ => None,
        }
    }
}

/// Evaluates a snapshot for win, draw, or in-progress.
#[instrument]
pub fn evaluate(board: &Board) -> Verdict {
    if let Some(line) = check_winner(board) {
        Verdict::Won(line)
    } else if board.is_full() {
        Verdict::Draw
    } else {
        Verdict::InProgress
    }
}
