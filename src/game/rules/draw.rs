//! Draw detection.

use crate::game::rules::win::check_winner;
use crate::game::types::Board;
use tracing::instrument;

/// Checks whether the board is a draw: every cell occupied and no winner.
#[instrument]
pub fn is_draw(board: &Board) -> bool {
    board.is_full() && check_winner(board).is_none()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::game::types::Mark;

    #[test]
    fn test_empty_board_is_not_a_draw() {
        assert!(!is_draw(&Board::new()));
    }

    #[test]
    fn test_full_board_without_line_is_a_draw() {
        // X O X / O X X / O X O
        let marks = [
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
        ];
        let mut board = Board::new();
        for (index, mark) in marks.into_iter().enumerate() {
            board = board.with_mark(index, mark).unwrap();
        }
        assert!(is_draw(&board));
    }

    #[test]
    fn test_full_board_with_winner_is_not_a_draw() {
        // X X X / O O X / O X O — top row wins.
        let marks = [
            Mark::X,
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::O,
            Mark::X,
            Mark::O,
        ];
        let mut board = Board::new();
        for (index, mark) in marks.into_iter().enumerate() {
            board = board.with_mark(index, mark).unwrap();
        }
        assert!(!is_draw(&board));
    }
}
