//! Win detection.

use crate::game::types::{Board, Cell, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// The 8 winning lines, checked in a fixed order: rows, then columns, then
/// diagonals. The first matching line wins the tie-break.
pub const LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // Rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // Columns
    [0, 4, 8],
    [2, 4, 6], // Diagonals
];

/// A completed winning line: the mark and the cell indices that form it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WinLine {
    /// The winning mark.
    pub mark: Mark,
    /// The three cell indices of the line, in [`LINES`] order.
    pub cells: [usize; 3],
}

impl WinLine {
    /// Checks whether the given cell index lies on the winning line.
    pub fn contains(&self, index: usize) -> bool {
        self.cells.contains(&index)
    }
}

/// Checks the board for a winner.
///
/// Returns the first line (in [`LINES`] order) whose three cells hold the
/// same mark. Pure: the same snapshot always yields the same result.
#[instrument]
pub fn check_winner(board: &Board) -> Option<WinLine> {
    for line in LINES {
        let [a, b, c] = line;
        if let Some(Cell::Occupied(mark)) = board.get(a)
            && board.get(b) == Some(Cell::Occupied(mark))
            && board.get(c) == Some(Cell::Occupied(mark))
        {
            return Some(WinLine { mark, cells: line });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    fn board_with(marks: &[(usize, Mark)]) -> Board {
        let mut board = Board::new();
        for &(index, mark) in marks {
            board = board.with_mark(index, mark).unwrap();
        }
        board
    }

    #[test]
    fn test_empty_board_has_no_winner() {
        assert_eq!(check_winner(&Board::new()), None);
    }

    #[test]
    fn test_every_line_is_detected() {
        for line in LINES {
            let board = board_with(&[
                (line[0], Mark::O),
                (line[1], Mark::O),
                (line[2], Mark::O),
            ]);
            let win = check_winner(&board).expect("line should win");
            assert_eq!(win.mark, Mark::O);
            assert_eq!(win.cells, line);
        }
    }

    #[test]
    fn test_mixed_line_does_not_win() {
        let board = board_with(&[(0, Mark::X), (1, Mark::O), (2, Mark::X)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_tie_break_prefers_first_listed_line() {
        // Unreachable under normal play: X holds both the top row and the
        // left column. The row is listed first, so it wins the tie-break.
        let board = board_with(&[
            (0, Mark::X),
            (1, Mark::X),
            (2, Mark::X),
            (3, Mark::X),
            (6, Mark::X),
        ]);
        let win = check_winner(&board).unwrap();
        assert_eq!(win.cells, [0, 1, 2]);
    }

    #[test]
    fn test_win_line_contains() {
        let win = WinLine {
            mark: Mark::X,
            cells: [0, 4, 8],
        };
        assert!(win.contains(4));
        assert!(!win.contains(1));
    }
}
