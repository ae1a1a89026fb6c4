//! Screen trait and transition types for the TUI state machine.

use crossterm::event::KeyEvent;
use ratatui::Frame;

use crate::game::GameSession;

/// An engine operation requested by a screen.
///
/// Screens never mutate the session themselves; they emit a command and the
/// controller applies it, then re-renders from the new state. This keeps the
/// data flow one direction per interaction: input -> engine -> render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameCommand {
    /// Start a game with the given player names.
    Start {
        /// Player one (X).
        one: String,
        /// Player two (O).
        two: String,
    },
    /// Place the active mark at the given cell index.
    Play(usize),
    /// Move the history cursor to the given snapshot.
    JumpTo(usize),
    /// Clear the board, keeping players and the scoreboard.
    ResetGame,
    /// Zero the scoreboard.
    ResetStats,
    /// Return to player setup, clearing everything.
    NewGame,
}

/// The result of handling an input event on a screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScreenTransition {
    /// Stay on the current screen — no engine call.
    Stay,
    /// Ask the controller to apply an engine command.
    Submit(GameCommand),
    /// Exit the application cleanly.
    Quit,
}

/// Trait implemented by each screen in the TUI state machine.
///
/// Each screen owns its own input state (cursor, text fields, list
/// selection), renders from the session, and translates key events into
/// transitions. The controller calls these methods in the event loop.
pub trait Screen {
    /// Renders the screen into the provided [`Frame`].
    fn render(&self, frame: &mut Frame, session: &GameSession);

    /// Handles a key event and returns the resulting [`ScreenTransition`].
    fn handle_key(&mut self, key: KeyEvent, session: &GameSession) -> ScreenTransition;
}
