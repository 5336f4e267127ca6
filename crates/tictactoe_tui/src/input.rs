//! Keyboard mapping for the terminal UI.

use crossterm::event::KeyCode;
use tictactoe_rules::{BOARD_SIDE, Position};

/// Cursor direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    /// One row up.
    Up,
    /// One row down.
    Down,
    /// One column left.
    Left,
    /// One column right.
    Right,
}

/// What the user asked for.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Move the cursor.
    Cursor(Direction),
    /// Place a mark under the cursor.
    SelectCursor,
    /// Place a mark at a cell index (0-8).
    Select(usize),
    /// Start a new game.
    Reset,
    /// Leave the program.
    Quit,
}

/// Maps a key to an intent. Unmapped keys return `None`.
pub fn intent_for(key: KeyCode) -> Option<Intent> {
    match key {
        KeyCode::Up | KeyCode::Char('k') => Some(Intent::Cursor(Direction::Up)),
        KeyCode::Down | KeyCode::Char('j') => Some(Intent::Cursor(Direction::Down)),
        KeyCode::Left | KeyCode::Char('h') => Some(Intent::Cursor(Direction::Left)),
        KeyCode::Right | KeyCode::Char('l') => Some(Intent::Cursor(Direction::Right)),
        KeyCode::Enter | KeyCode::Char(' ') => Some(Intent::SelectCursor),
        KeyCode::Char(c @ '1'..='9') => c
            .to_digit(10)
            .map(|digit| Intent::Select(digit as usize - 1)),
        KeyCode::Char('r') => Some(Intent::Reset),
        KeyCode::Char('q') | KeyCode::Esc => Some(Intent::Quit),
        _ => None,
    }
}

/// Moves the cursor one step, staying put at the board edge.
pub fn move_cursor(cursor: Position, direction: Direction) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match direction {
        Direction::Up => (row.saturating_sub(1), col),
        Direction::Down => ((row + 1).min(BOARD_SIDE - 1), col),
        Direction::Left => (row, col.saturating_sub(1)),
        Direction::Right => (row, (col + 1).min(BOARD_SIDE - 1)),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_digits_are_one_based() {
        assert_eq!(intent_for(KeyCode::Char('1')), Some(Intent::Select(0)));
        assert_eq!(intent_for(KeyCode::Char('9')), Some(Intent::Select(8)));
        assert_eq!(intent_for(KeyCode::Char('0')), None);
    }

    #[test]
    fn test_control_keys() {
        assert_eq!(intent_for(KeyCode::Enter), Some(Intent::SelectCursor));
        assert_eq!(intent_for(KeyCode::Char('r')), Some(Intent::Reset));
        assert_eq!(intent_for(KeyCode::Esc), Some(Intent::Quit));
        assert_eq!(intent_for(KeyCode::Tab), None);
    }

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, Direction::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Down), Position::BottomCenter);
        assert_eq!(move_cursor(Position::Center, Direction::Left), Position::MiddleLeft);
        assert_eq!(move_cursor(Position::Center, Direction::Right), Position::MiddleRight);
    }

    #[test]
    fn test_cursor_stops_at_edges() {
        assert_eq!(move_cursor(Position::TopLeft, Direction::Up), Position::TopLeft);
        assert_eq!(move_cursor(Position::TopLeft, Direction::Left), Position::TopLeft);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Down), Position::BottomRight);
        assert_eq!(move_cursor(Position::BottomRight, Direction::Right), Position::BottomRight);
    }
}
