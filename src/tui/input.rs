//! Cursor movement for keyboard navigation of the board grid.

use crossterm::event::KeyCode;

/// Moves the board cursor (cell index 0-8) based on arrow keys.
///
/// Movement stops at the grid edges; other keys leave the cursor in place.
pub fn move_cursor(cursor: usize, key: KeyCode) -> usize {
    let row = cursor / 3;
    let col = cursor % 3;

    match key {
        KeyCode::Left if col > 0 => cursor - 1,
        KeyCode::Right if col < 2 => cursor + 1,
        KeyCode::Up if row > 0 => cursor - 3,
        KeyCode::Down if row < 2 => cursor + 3,
        _ => cursor,
    }
}
