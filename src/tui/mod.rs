//! Terminal UI for tally_toe.
//!
//! The controller drives a two-screen state machine that mirrors the
//! engine's phases: player setup while the session is not started, the game
//! screen while it is. Screens emit [`GameCommand`]s; the controller applies
//! them to the [`GameSession`] and re-renders from the resulting state.

mod input;
mod screen;
mod screens;

use std::io;
use std::time::Duration;

use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::Backend, backend::CrosstermBackend};
use tracing::{debug, info, instrument, warn};

use crate::game::GameSession;
use screen::{GameCommand, Screen, ScreenTransition};
use screens::{GameScreen, SetupScreen};

/// Active screen in the TUI state machine.
#[derive(Debug)]
enum ActiveScreen {
    Setup(SetupScreen),
    Game(GameScreen),
}

/// Controller that owns the session and drives the event loop.
#[derive(Debug)]
struct AppController {
    session: GameSession,
}

impl AppController {
    fn new(session: GameSession) -> Self {
        Self { session }
    }

    /// Runs the event loop until the user quits.
    #[instrument(skip(self, terminal))]
    fn run<B: Backend>(&mut self, terminal: &mut Terminal<B>) -> Result<()>
    where
        <B as Backend>::Error: Send + Sync + 'static,
    {
        info!("Starting TUI event loop");

        let mut screen = if self.session.is_started() {
            ActiveScreen::Game(GameScreen::new())
        } else {
            ActiveScreen::Setup(SetupScreen::new())
        };

        loop {
            terminal.draw(|f| match &screen {
                ActiveScreen::Setup(s) => s.render(f, &self.session),
                ActiveScreen::Game(s) => s.render(f, &self.session),
            })?;

            // Poll with a short timeout to keep the loop responsive.
            if event::poll(Duration::from_millis(100))?
                && let Event::Key(key) = event::read()?
            {
                // Skip key release events (crossterm fires both press and release).
                if key.kind == KeyEventKind::Release {
                    continue;
                }

                let transition = match &mut screen {
                    ActiveScreen::Setup(s) => s.handle_key(key, &self.session),
                    ActiveScreen::Game(s) => s.handle_key(key, &self.session),
                };

                match transition {
                    ScreenTransition::Stay => {}
                    ScreenTransition::Quit => {
                        info!("User quit");
                        return Ok(());
                    }
                    ScreenTransition::Submit(command) => {
                        self.apply_command(command, &mut screen);
                    }
                }
            }
        }
    }

    /// Applies an engine command, then reconciles the active screen with the
    /// session phase.
    #[instrument(skip(self, screen))]
    fn apply_command(&mut self, command: GameCommand, screen: &mut ActiveScreen) {
        debug!(command = ?command, "Applying engine command");
        match command {
            GameCommand::Start { one, two } => {
                if let Err(e) = self.session.start_game(&one, &two)
                    && let ActiveScreen::Setup(s) = screen
                {
                    s.show_error(e.to_string());
                }
            }
            // A declined move is "nothing happened" for the user.
            GameCommand::Play(index) => {
                if let Err(e) = self.session.play(index) {
                    debug!(index, error = %e, "Move declined");
                }
            }
            GameCommand::JumpTo(index) => {
                if let Err(e) = self.session.jump_to(index) {
                    warn!(index, error = %e, "History jump rejected");
                }
            }
            GameCommand::ResetGame => self.session.reset_game(),
            GameCommand::ResetStats => self.session.reset_stats(),
            GameCommand::NewGame => self.session.new_game(),
        }

        match (&*screen, self.session.is_started()) {
            (ActiveScreen::Setup(_), true) => *screen = ActiveScreen::Game(GameScreen::new()),
            (ActiveScreen::Game(_), false) => *screen = ActiveScreen::Setup(SetupScreen::new()),
            _ => {}
        }
    }
}

/// Runs the TUI with the given session until the user quits.
///
/// Sets up the terminal, runs the controller loop, and restores the terminal
/// on the way out — including on error.
pub fn run_tui(session: GameSession) -> Result<()> {
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = AppController::new(session).run(&mut terminal);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    res
}
