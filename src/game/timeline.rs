//! Move history with time travel.
//!
//! A [`Timeline`] is an ordered sequence of board snapshots (element 0 is the
//! empty starting board) plus a cursor selecting the active snapshot. The
//! cursor can move backward without losing snapshots; playing a move from a
//! non-terminal cursor discards the future (branch overwrite) — history is a
//! single linear timeline, not a tree.

use crate::game::rules::check_winner;
use crate::game::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// Error that can occur when applying a move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The cell index is outside 0-8.
    #[display("Cell index {} is out of bounds (must be 0-8)", _0)]
    OutOfBounds(usize),
    /// The cell is already occupied.
    #[display("Cell {} is already occupied", _0)]
    Occupied(usize),
    /// The active snapshot already has a winner.
    #[display("Game is already decided")]
    Decided,
}

impl std::error::Error for MoveError {}

/// Error that can occur when jumping through history.
#[derive(Debug, Clone, Copy, PartialEq, Eq, derive_more::Display)]
pub enum HistoryError {
    /// The requested index does not name a snapshot.
    #[display("History index {} is out of range (0-{})", index, last)]
    OutOfRange {
        /// The rejected index.
        index: usize,
        /// The last valid index.
        last: usize,
    },
}

impl std::error::Error for HistoryError {}

/// Ordered snapshot history with a current-move cursor.
///
/// Invariants: the history is never empty, `cursor < len`, and each snapshot
/// after the first differs from its predecessor in exactly one cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Timeline {
    boards: Vec<Board>,
    cursor: usize,
}

impl Timeline {
    /// Creates a timeline holding only the empty starting board.
    pub fn new() -> Self {
        Self {
            boards: vec![Board::new()],
            cursor: 0,
        }
    }

    /// Returns the active snapshot.
    pub fn current(&self) -> &Board {
        &self.boards[self.cursor]
    }

    /// Returns the current-move cursor.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Returns the number of snapshots (always at least 1).
    pub fn len(&self) -> usize {
        self.boards.len()
    }

    /// Always `false`; present for slice-like completeness.
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns all snapshots, oldest first.
    pub fn boards(&self) -> &[Board] {
        &self.boards
    }

    /// Returns the snapshot at `index`, if it exists.
    pub fn snapshot(&self, index: usize) -> Option<&Board> {
        self.boards.get(index)
    }

    /// The mark that moves next from the active snapshot.
    ///
    /// Derived from cursor parity (even -> X), which enforces strict
    /// alternation with no independent source of truth.
    pub fn to_move(&self) -> Mark {
        if self.cursor % 2 == 0 { Mark::X } else { Mark::O }
    }

    /// Checks whether the cursor sits at the end of history.
    ///
    /// A move played while live is a real move; one played after jumping
    /// back replaces the future instead.
    pub fn is_live(&self) -> bool {
        self.cursor == self.boards.len() - 1
    }

    /// Places the active mark at `index`, producing a new snapshot.
    ///
    /// Truncates history to the cursor, appends the new snapshot, and
    /// advances the cursor to the new end. Declines without any state change
    /// when the active snapshot already has a winner or the cell is
    /// unavailable.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn play(&mut self, index: usize) -> Result<(), MoveError> {
        if check_winner(self.current()).is_some() {
            return Err(MoveError::Decided);
        }
        if index >= 9 {
            return Err(MoveError::OutOfBounds(index));
        }
        let next = self
            .current()
            .with_mark(index, self.to_move())
            .ok_or(MoveError::Occupied(index))?;

        self.boards.truncate(self.cursor + 1);
        self.boards.push(next);
        self.cursor = self.boards.len() - 1;
        debug!(cursor = self.cursor, "Move applied");
        Ok(())
    }

    /// Moves the cursor to `index` without touching any snapshot.
    ///
    /// Out-of-range requests are rejected rather than clamped, to surface
    /// caller bugs.
    #[instrument(skip(self), fields(cursor = self.cursor))]
    pub fn jump_to(&mut self, index: usize) -> Result<(), HistoryError> {
        if index >= self.boards.len() {
            return Err(HistoryError::OutOfRange {
                index,
                last: self.boards.len() - 1,
            });
        }
        self.cursor = index;
        debug!(cursor = self.cursor, "Jumped to snapshot");
        Ok(())
    }

    /// Discards all history, returning to a single empty starting board.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        self.boards = vec![Board::new()];
        self.cursor = 0;
        debug!("Timeline reset");
    }
}

impl Default for Timeline {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Cell;

    #[test]
    fn test_marks_alternate_by_parity() {
        let mut timeline = Timeline::new();
        assert_eq!(timeline.to_move(), Mark::X);
        timeline.play(0).unwrap();
        assert_eq!(timeline.to_move(), Mark::O);
        timeline.play(1).unwrap();
        assert_eq!(timeline.to_move(), Mark::X);
    }

    #[test]
    fn test_jump_back_changes_to_move() {
        let mut timeline = Timeline::new();
        timeline.play(0).unwrap();
        timeline.play(1).unwrap();
        timeline.jump_to(1).unwrap();
        assert_eq!(timeline.to_move(), Mark::O);
        timeline.jump_to(0).unwrap();
        assert_eq!(timeline.to_move(), Mark::X);
    }

    #[test]
    fn test_branch_overwrite_discards_future() {
        let mut timeline = Timeline::new();
        timeline.play(0).unwrap();
        timeline.play(1).unwrap();
        timeline.play(2).unwrap();
        assert_eq!(timeline.len(), 4);

        timeline.jump_to(1).unwrap();
        timeline.play(4).unwrap();

        assert_eq!(timeline.len(), 3);
        assert_eq!(timeline.cursor(), 2);
        assert_eq!(timeline.current().get(4), Some(Cell::Occupied(Mark::O)));
        // The discarded future (O at 1, X at 2) is gone.
        assert!(timeline.current().is_vacant(1));
        assert!(timeline.current().is_vacant(2));
    }

    #[test]
    fn test_occupied_cell_declines_without_change() {
        let mut timeline = Timeline::new();
        timeline.play(4).unwrap();
        let before = timeline.clone();
        assert_eq!(timeline.play(4), Err(MoveError::Occupied(4)));
        assert_eq!(timeline, before);
    }

    #[test]
    fn test_decided_game_declines_moves() {
        let mut timeline = Timeline::new();
        // X: 0, 1, 2 — top row; O: 3, 4.
        for index in [0, 3, 1, 4, 2] {
            timeline.play(index).unwrap();
        }
        let before = timeline.clone();
        assert_eq!(timeline.play(5), Err(MoveError::Decided));
        assert_eq!(timeline, before);
    }

    #[test]
    fn test_jump_out_of_range_rejected() {
        let mut timeline = Timeline::new();
        timeline.play(0).unwrap();
        assert_eq!(
            timeline.jump_to(2),
            Err(HistoryError::OutOfRange { index: 2, last: 1 })
        );
        assert_eq!(timeline.cursor(), 1);
    }

    #[test]
    fn test_reset_returns_to_start() {
        let mut timeline = Timeline::new();
        timeline.play(0).unwrap();
        timeline.play(1).unwrap();
        timeline.reset();
        assert_eq!(timeline.len(), 1);
        assert_eq!(timeline.cursor(), 0);
        assert_eq!(timeline.current(), &Board::new());
    }
}
