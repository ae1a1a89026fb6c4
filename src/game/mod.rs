//! Game engine: board snapshots, rules, history, and session state.

mod session;
mod stats;
mod timeline;
mod types;

pub mod rules;

pub use rules::{LINES, Verdict, WinLine, check_winner, evaluate, is_draw};
pub use session::{ActiveGame, GameError, GameSession, Players, StartError};
pub use stats::Scoreboard;
pub use timeline::{HistoryError, MoveError, Timeline};
pub use types::{Board, Cell, Mark};
