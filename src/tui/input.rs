//! Keyboard mapping for the game screen.

use crossterm::event::KeyCode;
use strictly_rewind_core::Position;

/// What a key press asks the application to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor.
    Cursor(KeyCode),
    /// Play the square under the cursor.
    PlayCursor,
    /// Play a square directly (0-8).
    PlayCell(usize),
    /// View the previous snapshot.
    StepBack,
    /// View the next snapshot.
    StepForward,
    /// View the game start.
    JumpStart,
    /// View the newest snapshot.
    JumpLatest,
    /// Flip the move-list order.
    ToggleOrder,
    /// Start over.
    Restart,
    /// Leave the application.
    Quit,
}

/// Maps a key to an action, if it has one.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => Some(Action::Cursor(key)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Action::PlayCell(d as usize - 1)),
        KeyCode::Char('[') => Some(Action::StepBack),
        KeyCode::Char(']') => Some(Action::StepForward),
        KeyCode::Home => Some(Action::JumpStart),
        KeyCode::End => Some(Action::JumpLatest),
        KeyCode::Char('s') => Some(Action::ToggleOrder),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1), col),
        KeyCode::Down => ((row + 1).min(2), col),
        KeyCode::Left => (row, col.saturating_sub(1)),
        KeyCode::Right => (row, (col + 1).min(2)),
        _ => (row, col),
    };
    Position::from_index(row * 3 + col).unwrap_or(cursor)
}
