//! Game screen — board, scoreboard, and move history.

use crossterm::event::{KeyCode, KeyEvent};
use derive_getters::Getters;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Cell as TableCell, List, ListItem, ListState, Paragraph, Row, Table},
};
use tracing::{debug, instrument};

use crate::game::{ActiveGame, Cell, GameSession, Mark, Verdict};
use crate::tui::input::move_cursor;
use crate::tui::screen::{GameCommand, Screen, ScreenTransition};

/// Which pane receives arrow-key navigation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Pane {
    Board,
    History,
}

/// State for the in-game screen.
///
/// Owns only presentation state — the board cursor and history selection.
/// All game state is read from the session on every render.
#[derive(Debug, Getters)]
pub struct GameScreen {
    cursor: usize,
    #[getter(skip)]
    history_state: ListState,
    #[getter(skip)]
    focus: Pane,
}

impl GameScreen {
    /// Creates a game screen with the cursor on the center cell.
    #[instrument]
    pub fn new() -> Self {
        debug!("Initializing GameScreen");
        let mut history_state = ListState::default();
        history_state.select(Some(0));
        Self {
            cursor: 4,
            history_state,
            focus: Pane::Board,
        }
    }

    fn mark_color(mark: Mark) -> Color {
        match mark {
            Mark::X => Color::Blue,
            Mark::O => Color::Magenta,
        }
    }

    fn status_line(game: &ActiveGame) -> (String, Color) {
        match game.verdict() {
            Verdict::Won(line) => (
                format!("🎉 {} wins!", game.players().name_of(line.mark)),
                Self::mark_color(line.mark),
            ),
            Verdict::Draw => ("It's a draw! 🤝".to_string(), Color::Gray),
            Verdict::InProgress => {
                let mark = game.timeline().to_move();
                (
                    format!("{}'s turn ({})", game.to_move_name(), mark),
                    Self::mark_color(mark),
                )
            }
        }
    }

    fn board_lines(&self, game: &ActiveGame) -> Vec<Line<'static>> {
        let board = game.timeline().current();
        let win_line = game.verdict().win_line();

        let mut lines = Vec::new();
        for row in 0..3 {
            let mut spans = Vec::new();
            for col in 0..3 {
                let index = row * 3 + col;
                let (symbol, mut style) = match board.get(index) {
                    Some(Cell::Occupied(mark)) => (
                        format!(" {} ", mark),
                        Style::default()
                            .fg(Self::mark_color(mark))
                            .add_modifier(Modifier::BOLD),
                    ),
                    _ => ("   ".to_string(), Style::default().fg(Color::DarkGray)),
                };
                if win_line.is_some_and(|line| line.contains(index)) {
                    style = style.fg(Color::Yellow).add_modifier(Modifier::BOLD);
                }
                if self.focus == Pane::Board && index == self.cursor {
                    style = style.add_modifier(Modifier::REVERSED);
                }
                spans.push(Span::styled(symbol, style));
                if col < 2 {
                    spans.push(Span::raw("│"));
                }
            }
            lines.push(Line::from(spans).alignment(Alignment::Center));
            if row < 2 {
                lines.push(Line::from("───┼───┼───").alignment(Alignment::Center));
            }
        }
        lines
    }

    fn scoreboard_rows(game: &ActiveGame) -> Vec<Row<'static>> {
        let stats = game.stats();
        let players = game.players();
        vec![
            Row::new(vec![
                TableCell::from(format!("{} (X)", players.one()))
                    .style(Style::default().fg(Color::Blue)),
                TableCell::from(stats.player_one_wins().to_string()),
            ]),
            Row::new(vec![
                TableCell::from(format!("{} (O)", players.two()))
                    .style(Style::default().fg(Color::Magenta)),
                TableCell::from(stats.player_two_wins().to_string()),
            ]),
            Row::new(vec![
                TableCell::from("Draws"),
                TableCell::from(stats.draws().to_string()),
            ]),
            Row::new(vec![
                TableCell::from("Total games"),
                TableCell::from(stats.total_games().to_string()),
            ]),
        ]
    }

    fn history_items(game: &ActiveGame) -> Vec<ListItem<'static>> {
        let pointer = game.timeline().cursor();
        (0..game.timeline().len())
            .map(|move_number| {
                let label = if move_number == 0 {
                    "Game start".to_string()
                } else {
                    format!("Move #{}", move_number)
                };
                let item = ListItem::new(label);
                if move_number == pointer {
                    item.style(
                        Style::default()
                            .fg(Color::Yellow)
                            .add_modifier(Modifier::BOLD),
                    )
                } else {
                    item
                }
            })
            .collect()
    }

    fn selected_history(&self, game: &ActiveGame) -> usize {
        self.history_state
            .selected()
            .unwrap_or(0)
            .min(game.timeline().len() - 1)
    }

    fn handle_board_key(&mut self, key: KeyCode) -> ScreenTransition {
        match key {
            KeyCode::Left | KeyCode::Right | KeyCode::Up | KeyCode::Down => {
                self.cursor = move_cursor(self.cursor, key);
                ScreenTransition::Stay
            }
            KeyCode::Enter | KeyCode::Char(' ') => {
                ScreenTransition::Submit(GameCommand::Play(self.cursor))
            }
            _ => ScreenTransition::Stay,
        }
    }

    fn handle_history_key(&mut self, key: KeyCode, game: &ActiveGame) -> ScreenTransition {
        let selected = self.selected_history(game);
        match key {
            KeyCode::Up => {
                self.history_state.select(Some(selected.saturating_sub(1)));
                ScreenTransition::Stay
            }
            KeyCode::Down => {
                let last = game.timeline().len() - 1;
                self.history_state.select(Some((selected + 1).min(last)));
                ScreenTransition::Stay
            }
            KeyCode::Enter => ScreenTransition::Submit(GameCommand::JumpTo(selected)),
            _ => ScreenTransition::Stay,
        }
    }
}

impl Default for GameScreen {
    fn default() -> Self {
        Self::new()
    }
}

impl Screen for GameScreen {
    #[instrument(skip(self, frame, session))]
    fn render(&self, frame: &mut Frame, session: &GameSession) {
        let Some(game) = session.active() else {
            return;
        };

        let area = frame.area();
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(3),
                Constraint::Min(7),
                Constraint::Length(3),
            ])
            .split(area);

        let (status_text, status_color) = Self::status_line(game);
        let status = Paragraph::new(status_text)
            .style(
                Style::default()
                    .fg(status_color)
                    .add_modifier(Modifier::BOLD),
            )
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title("Tic-Tac-Toe"));
        frame.render_widget(status, chunks[0]);

        let columns = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([Constraint::Min(20), Constraint::Length(34)])
            .split(chunks[1]);

        let board_title = if self.focus == Pane::Board {
            "Board [active]"
        } else {
            "Board"
        };
        let board = Paragraph::new(self.board_lines(game))
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).title(board_title));
        frame.render_widget(board, columns[0]);

        let side = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(6), Constraint::Min(4)])
            .split(columns[1]);

        let widths = [Constraint::Percentage(70), Constraint::Percentage(30)];
        let scoreboard = Table::new(Self::scoreboard_rows(game), widths).block(
            Block::default()
                .borders(Borders::ALL)
                .title("🏆 Scoreboard"),
        );
        frame.render_widget(scoreboard, side[0]);

        let history_title = if self.focus == Pane::History {
            "History [active]"
        } else {
            "History"
        };
        let history = List::new(Self::history_items(game))
            .block(Block::default().borders(Borders::ALL).title(history_title))
            .highlight_style(Style::default().add_modifier(Modifier::REVERSED))
            .highlight_symbol("> ");
        let mut history_state = self.history_state.clone();
        frame.render_stateful_widget(history, side[1], &mut history_state);

        let help = Paragraph::new(
            "↑↓←→: Move | Enter: Place/Jump | Tab: Pane | r: Reset game | s: Reset stats | n: New players | q: Quit",
        )
        .style(Style::default().fg(Color::DarkGray))
        .alignment(Alignment::Center)
        .block(Block::default().borders(Borders::ALL));
        frame.render_widget(help, chunks[2]);
    }

    #[instrument(skip(self, key, session))]
    fn handle_key(&mut self, key: KeyEvent, session: &GameSession) -> ScreenTransition {
        let Some(game) = session.active() else {
            return ScreenTransition::Stay;
        };

        match key.code {
            KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => ScreenTransition::Quit,
            KeyCode::Char('r') | KeyCode::Char('R') => {
                ScreenTransition::Submit(GameCommand::ResetGame)
            }
            KeyCode::Char('s') | KeyCode::Char('S') => {
                ScreenTransition::Submit(GameCommand::ResetStats)
            }
            KeyCode::Char('n') | KeyCode::Char('N') => {
                ScreenTransition::Submit(GameCommand::NewGame)
            }
            KeyCode::Tab => {
                self.focus = match self.focus {
                    Pane::Board => Pane::History,
                    Pane::History => Pane::Board,
                };
                ScreenTransition::Stay
            }
            // Digit shortcuts place directly, regardless of pane focus.
            KeyCode::Char(c) if ('1'..='9').contains(&c) => {
                let index = c as usize - '1' as usize;
                self.cursor = index;
                ScreenTransition::Submit(GameCommand::Play(index))
            }
            // Step through history from either pane.
            KeyCode::PageUp => {
                let pointer = game.timeline().cursor();
                ScreenTransition::Submit(GameCommand::JumpTo(pointer.saturating_sub(1)))
            }
            KeyCode::PageDown => {
                let pointer = game.timeline().cursor();
                let last = game.timeline().len() - 1;
                ScreenTransition::Submit(GameCommand::JumpTo((pointer + 1).min(last)))
            }
            code => match self.focus {
                Pane::Board => self.handle_board_key(code),
                Pane::History => self.handle_history_key(code, game),
            },
        }
    }
}
