//! Player setup screen — enter both names to begin.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Paragraph},
};
use tracing::{debug, instrument};

use crate::game::GameSession;
use crate::tui::screen::{GameCommand, Screen, ScreenTransition};

/// Which name field currently receives typed characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    PlayerOne,
    PlayerTwo,
}

/// State for the player setup screen.
///
/// Two text inputs; Enter submits once both names are non-blank. The engine
/// re-validates on [`GameSession::start_game`], so a refused start simply
/// shows the error and keeps the screen.
#[derive(Debug, Getters)]
pub struct SetupScreen {
    name_one: String,
    name_two: String,
    #[getter(skip)]
    focus: Field,
    error_message: Option<String>,
}

impl SetupScreen {
    /// Creates an empty setup screen.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing SetupScreen");
        Self {
            name_one: String::new(),
            name_two: String::new(),
            focus: Field::PlayerOne,
            error_message: None,
        }
    }

    /// Shows a validation error after a refused start.
    pub fn show_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    fn toggle_focus(&mut self) {
        self.focus = match self.focus {
            Field::PlayerOne => Field::PlayerTwo,
            Field::PlayerTwo => Field::PlayerOne,
        };
    }

    fn focused_input(&mut self) -> &mut String {
        match self.focus {
            Field::PlayerOne => &mut self.name_one,
            Field::PlayerTwo => &mut self.name_two,
        }
    }

    fn submit(&mut self) -> ScreenTransition {
        if self.name_one.trim().is_empty() || self.name_two.trim().is_empty() {
            self.error_message = Some("Both player names are required".to_string());
            return ScreenTransition::Stay;
        }
        self.error_message = None;
        ScreenTransition::Submit(GameCommand::Start {
            one: self.name_one.clone(),
            two: self.name_two.clone(),
        })
    }

    fn input_box<'a>(&'a self, title: &'a str, value: &'a str, focused: bool) -> Paragraph<'a> {
        let style = if focused {
            Style::default().fg(Color::White)
        } else {
            Style::default().fg(Color::DarkGray)
        };
        Paragraph::new(value)
            .style(style)
            .block(Block::default().borders(Borders::ALL).title(title))
    }
}

impl Default for SetupScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for SetupScreen {
    #[instrument(skip(self, frame, _session))]
    fn render(&self, frame: &mut Frame, _session: &GameSession) {
        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Length(3),
                Constraint::Min(0),
            ])
            .split(area);

        let title = Paragraph::new("Tic-Tac-Toe — Enter player names to begin")
            .style(
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(title, chunks[0]);

        frame.render_widget(
            self.input_box(
                "Player 1 (X)",
                &self.name_one,
                self.focus == Field::PlayerOne,
            ),
            chunks[1],
        );
        frame.render_widget(
            self.input_box(
                "Player 2 (O)",
                &self.name_two,
                self.focus == Field::PlayerTwo,
            ),
            chunks[2],
        );

        let error_text = self.error_message.as_deref().unwrap_or("");
        let error = Paragraph::new(error_text)
            .style(Style::default().fg(Color::Red))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(error, chunks[3]);

        let help = Paragraph::new("Type name | Tab/↑↓: Switch field | Enter: Start | Esc: Quit")
            .style(Style::default().fg(Color::DarkGray))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[4]);
    }

    #[instrument(skip(self, key, _session))]
    fn handle_key(&mut self, key: KeyEvent, _session: &GameSession) -> ScreenTransition {
        match key.code {
            KeyCode::Char(c) => {
                self.focused_input().push(c);
                ScreenTransition::Stay
            }
            KeyCode::Backspace => {
                self.focused_input().pop();
                ScreenTransition::Stay
            }
            KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
                self.toggle_focus();
                ScreenTransition::Stay
            }
            KeyCode::Enter => self.submit(),
            KeyCode::Esc => ScreenTransition::Quit,
            _ => ScreenTransition::Stay,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyEvent, KeyModifiers};

    fn press(screen: &mut SetupScreen, code: KeyCode) -> ScreenTransition {
        let session = GameSession::new();
        screen.handle_key(KeyEvent::new(code, KeyModifiers::NONE), &session)
    }

    fn type_name(screen: &mut SetupScreen, name: &str) {
        for c in name.chars() {
            press(screen, KeyCode::Char(c));
        }
    }

    #[test]
    fn test_enter_with_blank_name_stays() {
        let mut screen = SetupScreen::new();
        type_name(&mut screen, "Ada");
        assert_eq!(press(&mut screen, KeyCode::Enter), ScreenTransition::Stay);
        assert!(screen.error_message().is_some());
    }

    #[test]
    fn test_enter_with_both_names_submits_start() {
        let mut screen = SetupScreen::new();
        type_name(&mut screen, "Ada");
        press(&mut screen, KeyCode::Tab);
        type_name(&mut screen, "Grace");
        assert_eq!(
            press(&mut screen, KeyCode::Enter),
            ScreenTransition::Submit(GameCommand::Start {
                one: "Ada".to_string(),
                two: "Grace".to_string(),
            })
        );
    }
}
