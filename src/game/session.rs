//! The engine facade: player identity, phase machine, and statistics guard.
//!
//! [`GameSession`] is the single entry point the presentation layer drives.
//! It is a two-state machine — `NotStarted -> InProgress` via
//! [`GameSession::start_game`], back via [`GameSession::new_game`] — where
//! won/drawn are derived facts about the active snapshot, not separate
//! states.

use crate::game::rules::{Verdict, evaluate};
use crate::game::stats::Scoreboard;
use crate::game::timeline::{HistoryError, MoveError, Timeline};
use crate::game::types::Mark;
use derive_getters::Getters;
use derive_new::new;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

/// Display names for the two players.
///
/// Player one always plays X, player two always plays O.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters, new)]
pub struct Players {
    /// Player one (X).
    one: String,
    /// Player two (O).
    two: String,
}

impl Players {
    /// Returns the display name of the player holding `mark`.
    pub fn name_of(&self, mark: Mark) -> &str {
        match mark {
            Mark::X => &self.one,
            Mark::O => &self.two,
        }
    }
}

/// Error that can occur when starting a game.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum StartError {
    /// A player name was empty after trimming whitespace.
    #[display("Both player names are required")]
    BlankName,
    /// A game is already in progress.
    #[display("A game is already in progress")]
    AlreadyStarted,
}

impl std::error::Error for StartError {}

/// Error that can occur when operating on a session.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::From)]
pub enum GameError {
    /// No game has been started yet.
    #[display("No game in progress")]
    NotStarted,
    /// A move was declined.
    #[display("{}", _0)]
    #[from]
    Move(MoveError),
    /// A history jump was rejected.
    #[display("{}", _0)]
    #[from]
    History(HistoryError),
}

impl std::error::Error for GameError {}

/// State of an in-progress session: who is playing, the snapshot timeline,
/// and the session scoreboard.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ActiveGame {
    players: Players,
    timeline: Timeline,
    stats: Scoreboard,
}

impl ActiveGame {
    fn new(players: Players) -> Self {
        Self {
            players,
            timeline: Timeline::new(),
            stats: Scoreboard::new(),
        }
    }

    /// The verdict for the active snapshot, recomputed on every call.
    pub fn verdict(&self) -> Verdict {
        evaluate(self.timeline.current())
    }

    /// The display name of the player whose turn it is.
    pub fn to_move_name(&self) -> &str {
        self.players.name_of(self.timeline.to_move())
    }
}

#[derive(Debug, Clone)]
enum Phase {
    NotStarted,
    InProgress(ActiveGame),
}

/// A complete game session: phase machine plus all engine operations.
///
/// Every method is a synchronous, atomic transformation — it either applies
/// fully or leaves the session untouched.
#[derive(Debug, Clone)]
pub struct GameSession {
    phase: Phase,
}

impl GameSession {
    /// Creates a session in the not-started phase.
    #[instrument]
    pub fn new() -> Self {
        debug!("Creating game session");
        Self {
            phase: Phase::NotStarted,
        }
    }

    /// Checks whether a game is in progress.
    pub fn is_started(&self) -> bool {
        matches!(self.phase, Phase::InProgress(_))
    }

    /// Returns the active game state, if started.
    pub fn active(&self) -> Option<&ActiveGame> {
        match &self.phase {
            Phase::InProgress(game) => Some(game),
            Phase::NotStarted => None,
        }
    }

    /// Starts a game with the given player names.
    ///
    /// Names are trimmed; both must be non-empty or the start is refused
    /// with no partial state change.
    #[instrument(skip(self))]
    pub fn start_game(&mut self, one: &str, two: &str) -> Result<(), StartError> {
        if self.is_started() {
            warn!("Rejected start: game already in progress");
            return Err(StartError::AlreadyStarted);
        }
        let one = one.trim();
        let two = two.trim();
        if one.is_empty() || two.is_empty() {
            warn!("Rejected start: blank player name");
            return Err(StartError::BlankName);
        }
        info!(player_one = one, player_two = two, "Starting game");
        self.phase = Phase::InProgress(ActiveGame::new(Players::new(
            one.to_string(),
            two.to_string(),
        )));
        Ok(())
    }

    /// Places the active mark at `index` on the current snapshot.
    ///
    /// Declines when the snapshot is already decided or the cell is
    /// unavailable. On success the scoreboard is bumped iff the move both
    /// completed the game and was live — played from the true end of
    /// history, not a replay position. The guard keeps an already-counted
    /// game from being counted again after time travel.
    #[instrument(skip(self))]
    pub fn play(&mut self, index: usize) -> Result<(), GameError> {
        let game = match &mut self.phase {
            Phase::InProgress(game) => game,
            Phase::NotStarted => return Err(GameError::NotStarted),
        };

        // Capture liveness before the move truncates history.
        let was_live = game.timeline.is_live();
        game.timeline.play(index)?;

        if was_live {
            match evaluate(game.timeline.current()) {
                Verdict::Won(line) => game.stats.record(Some(line.mark)),
                Verdict::Draw => game.stats.record(None),
                Verdict::InProgress => {}
            }
        }
        Ok(())
    }

    /// Moves the history cursor to `index`.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), GameError> {
        match &mut self.phase {
            Phase::InProgress(game) => {
                game.timeline.jump_to(index)?;
                Ok(())
            }
            Phase::NotStarted => Err(GameError::NotStarted),
        }
    }

    /// Clears the board timeline; players and scoreboard are untouched.
    #[instrument(skip(self))]
    pub fn reset_game(&mut self) {
        if let Phase::InProgress(game) = &mut self.phase {
            info!("Resetting game");
            game.timeline.reset();
        }
    }

    /// Zeroes the scoreboard; timeline and players are untouched.
    #[instrument(skip(self))]
    pub fn reset_stats(&mut self) {
        if let Phase::InProgress(game) = &mut self.phase {
            game.stats.reset();
        }
    }

    /// Returns to the not-started phase, clearing players, timeline, and
    /// scoreboard. New names must be supplied before play resumes.
    #[instrument(skip(self))]
    pub fn new_game(&mut self) {
        info!("Returning to player setup");
        self.phase = Phase::NotStarted;
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::rules::WinLine;

    fn started() -> GameSession {
        let mut session = GameSession::new();
        session.start_game("Ada", "Grace").unwrap();
        session
    }

    #[test]
    fn test_start_trims_names() {
        let mut session = GameSession::new();
        session.start_game("  Ada ", "\tGrace\n").unwrap();
        let players = session.active().unwrap().players();
        assert_eq!(players.one(), "Ada");
        assert_eq!(players.two(), "Grace");
    }

    #[test]
    fn test_start_rejects_blank_names() {
        let mut session = GameSession::new();
        assert_eq!(session.start_game("Ada", "   "), Err(StartError::BlankName));
        assert!(!session.is_started());
    }

    #[test]
    fn test_start_rejects_second_start() {
        let mut session = started();
        assert_eq!(
            session.start_game("Alan", "Edsger"),
            Err(StartError::AlreadyStarted)
        );
    }

    #[test]
    fn test_play_requires_started_game() {
        let mut session = GameSession::new();
        assert_eq!(session.play(0), Err(GameError::NotStarted));
    }

    #[test]
    fn test_x_wins_top_row_scenario() {
        let mut session = started();
        for index in [0, 3, 1, 4, 2] {
            session.play(index).unwrap();
        }
        let game = session.active().unwrap();
        assert_eq!(
            game.verdict().win_line(),
            Some(WinLine {
                mark: Mark::X,
                cells: [0, 1, 2]
            })
        );
        assert_eq!(*game.stats().player_one_wins(), 1);
        assert_eq!(*game.stats().player_two_wins(), 0);
        assert_eq!(*game.stats().draws(), 0);
        assert_eq!(*game.stats().total_games(), 1);
    }

    #[test]
    fn test_draw_scenario() {
        let mut session = started();
        for index in [0, 1, 2, 4, 3, 5, 7, 6, 8] {
            session.play(index).unwrap();
        }
        let game = session.active().unwrap();
        assert_eq!(game.verdict(), Verdict::Draw);
        assert_eq!(*game.stats().draws(), 1);
        assert_eq!(*game.stats().total_games(), 1);
    }

    #[test]
    fn test_replay_does_not_double_count() {
        let mut session = started();
        for index in [0, 3, 1, 4, 2] {
            session.play(index).unwrap();
        }
        // Navigate back through the finished game and return to the end.
        session.jump_to(2).unwrap();
        session.jump_to(5).unwrap();
        let game = session.active().unwrap();
        assert_eq!(*game.stats().player_one_wins(), 1);
        assert_eq!(*game.stats().total_games(), 1);
    }

    #[test]
    fn test_reset_game_keeps_players_and_stats() {
        let mut session = started();
        for index in [0, 3, 1, 4, 2] {
            session.play(index).unwrap();
        }
        session.reset_game();
        let game = session.active().unwrap();
        assert_eq!(game.timeline().len(), 1);
        assert_eq!(game.timeline().cursor(), 0);
        assert_eq!(game.players().one(), "Ada");
        assert_eq!(*game.stats().total_games(), 1);
    }

    #[test]
    fn test_reset_stats_keeps_timeline() {
        let mut session = started();
        for index in [0, 3, 1, 4, 2] {
            session.play(index).unwrap();
        }
        session.reset_stats();
        let game = session.active().unwrap();
        assert_eq!(*game.stats().total_games(), 0);
        assert_eq!(game.timeline().len(), 6);
    }

    #[test]
    fn test_new_game_clears_everything() {
        let mut session = started();
        session.play(0).unwrap();
        session.new_game();
        assert!(!session.is_started());
        assert!(session.active().is_none());
    }

    #[test]
    fn test_branch_move_finishing_a_game_is_not_live() {
        let mut session = started();
        // Finish a game: X wins the top row.
        for index in [0, 3, 1, 4, 2] {
            session.play(index).unwrap();
        }
        // Jump back into the finished game and win again on a new branch.
        session.jump_to(4).unwrap();
        session.play(2).unwrap();
        let game = session.active().unwrap();
        assert!(game.verdict().is_decided());
        // The branch move was not played from the end of history, so the
        // guard keeps it out of the scoreboard.
        assert_eq!(*game.stats().player_one_wins(), 1);
        assert_eq!(*game.stats().total_games(), 1);
    }
}
