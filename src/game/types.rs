//! Core domain types: marks, cells, and immutable board snapshots.

use serde::{Deserialize, Serialize};

/// A player's mark on the board.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, strum::Display,
)]
pub enum Mark {
    /// Mark X (player one, goes first).
    X,
    /// Mark O (player two, goes second).
    O,
}

impl Mark {
    /// Returns the opposing mark.
    pub fn opponent(self) -> Self {
        match self {
            Mark::X => Mark::O,
            Mark::O => Mark::X,
        }
    }
}

/// One cell of the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// No mark placed yet.
    Empty,
    /// Cell occupied by a mark.
    Occupied(Mark),
}

impl Cell {
    /// Returns the mark in this cell, if any.
    pub fn mark(self) -> Option<Mark> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(mark) => Some(mark),
        }
    }
}

/// An immutable snapshot of the 3x3 board.
///
/// Cells are indexed 0-8 in row-major order (row = index / 3,
/// col = index % 3). A snapshot is never mutated in place; [`Board::with_mark`]
/// produces a copy with exactly one previously-empty cell filled.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cells: [Cell; 9],
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Gets the cell at the given index (0-8).
    pub fn get(&self, index: usize) -> Option<Cell> {
        self.cells.get(index).copied()
    }

    /// Checks whether the cell at the given index is empty.
    ///
    /// Out-of-range indices report `false`.
    pub fn is_vacant(&self, index: usize) -> bool {
        matches!(self.get(index), Some(Cell::Empty))
    }

    /// Checks whether every cell is occupied.
    pub fn is_full(&self) -> bool {
        self.cells.iter().all(|c| *c != Cell::Empty)
    }

    /// Returns all cells as a slice.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns a copy of this board with `mark` placed at `index`.
    ///
    /// Returns `None` when the index is out of range or the cell is already
    /// occupied, leaving the snapshot untouched either way.
    pub fn with_mark(&self, index: usize, mark: Mark) -> Option<Board> {
        if !self.is_vacant(index) {
            return None;
        }
        let mut cells = self.cells;
        cells[index] = Cell::Occupied(mark);
        Some(Board { cells })
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}
