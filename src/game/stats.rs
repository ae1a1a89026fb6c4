//! Session scoreboard.

use crate::game::types::Mark;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::{info, instrument};

/// Cumulative statistics for the session.
///
/// Counters are bumped exactly once per completed game (see
/// [`GameSession::play`](crate::GameSession::play) for the live-move guard).
/// They survive board resets but not a full new-players reset.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, Getters,
)]
pub struct Scoreboard {
    /// Wins for player one (X).
    player_one_wins: u32,
    /// Wins for player two (O).
    player_two_wins: u32,
    /// Drawn games.
    draws: u32,
    /// Completed games of any outcome.
    total_games: u32,
}

impl Scoreboard {
    /// Creates a zeroed scoreboard.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one completed game: a win for `winner`, or a draw for `None`.
    #[instrument(skip(self))]
    pub fn record(&mut self, winner: Option<Mark>) {
        match winner {
            Some(Mark::X) => self.player_one_wins += 1,
            Some(Mark::O) => self.player_two_wins += 1,
            None => self.draws += 1,
        }
        self.total_games += 1;
        info!(
            player_one_wins = self.player_one_wins,
            player_two_wins = self.player_two_wins,
            draws = self.draws,
            total_games = self.total_games,
            "Recorded game result"
        );
    }

    /// Zeroes all counters.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        *self = Self::default();
        info!("Scoreboard reset");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_win_and_draw() {
        let mut stats = Scoreboard::new();
        stats.record(Some(Mark::X));
        stats.record(Some(Mark::O));
        stats.record(None);
        assert_eq!(*stats.player_one_wins(), 1);
        assert_eq!(*stats.player_two_wins(), 1);
        assert_eq!(*stats.draws(), 1);
        assert_eq!(*stats.total_games(), 3);
    }

    #[test]
    fn test_reset_zeroes_counters() {
        let mut stats = Scoreboard::new();
        stats.record(Some(Mark::X));
        stats.reset();
        assert_eq!(stats, Scoreboard::default());
    }
}
