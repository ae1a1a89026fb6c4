//! Screens for the TUI state machine.

mod game;
mod setup;

pub use game::GameScreen;
pub use setup::SetupScreen;
