//! Win detection logic for tic-tac-toe.

use super::super::{Board, Mark, Position};
use tracing::instrument;

/// The 8 winning lines: rows, then columns, then diagonals.
pub const LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [
        Position::MiddleLeft,
        Position::Center,
        Position::MiddleRight,
    ],
    [
        Position::BottomLeft,
        Position::BottomCenter,
        Position::BottomRight,
    ],
    // Columns
    [
        Position::TopLeft,
        Position::MiddleLeft,
        Position::BottomLeft,
    ],
    [
        Position::TopCenter,
        Position::Center,
        Position::BottomCenter,
    ],
    [
        Position::TopRight,
        Position::MiddleRight,
        Position::BottomRight,
    ],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the mark owning the line, if all three cells hold it.
fn line_owner(board: &Board, [a, b, c]: [Position; 3]) -> Option<Mark> {
    let cell = board.get(a);
    if cell == board.get(b) && cell == board.get(c) {
        cell.mark()
    } else {
        None
    }
}

/// Checks if there is a winner on the board.
///
/// Lines are scanned in [`LINES`] order and the first complete one
/// decides. Returns `None` if no line is uniformly marked.
#[instrument]
pub fn detect_winner(board: &Board) -> Option<Mark> {
    LINES.into_iter().find_map(|line| line_owner(board, line))
}

/// Checks if `mark` owns at least one complete line.
#[instrument]
pub fn has_line(board: &Board, mark: Mark) -> bool {
    LINES
        .into_iter()
        .any(|line| line_owner(board, line) == Some(mark))
}

#[cfg(test)]
mod tests {
    use super::super::super::Cell;
    use super::*;

    fn board_with(marks: &[(Position, Mark)]) -> Board {
        let mut cells = [Cell::Empty; 9];
        for (pos, mark) in marks {
            cells[pos.to_index()] = Cell::Marked(*mark);
        }
        Board::from_cells(cells)
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new();
        assert_eq!(detect_winner(&board), None);
    }

    #[test]
    fn test_every_line_wins() {
        for line in LINES {
            let board = board_with(&line.map(|pos| (pos, Mark::O)));
            assert_eq!(detect_winner(&board), Some(Mark::O), "line {:?}", line);
            assert!(has_line(&board, Mark::O));
            assert!(!has_line(&board, Mark::X));
        }
    }

    #[test]
    fn test_winner_diagonal() {
        let board = board_with(&[
            (Position::TopRight, Mark::X),
            (Position::Center, Mark::X),
            (Position::BottomLeft, Mark::X),
        ]);
        assert_eq!(detect_winner(&board), Some(Mark::X));
    }

    #[test]
    fn test_mixed_line_is_not_a_win() {
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::O),
            (Position::TopRight, Mark::X),
        ]);
        assert_eq!(detect_winner(&board), None);
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = board_with(&[(Position::TopLeft, Mark::X), (Position::TopCenter, Mark::X)]);
        assert_eq!(detect_winner(&board), None);
    }

    #[test]
    fn test_rows_scanned_before_columns() {
        // Unreachable board: X owns the top row, O owns the right column.
        let board = board_with(&[
            (Position::TopLeft, Mark::X),
            (Position::TopCenter, Mark::X),
            (Position::TopRight, Mark::X),
            (Position::MiddleRight, Mark::O),
            (Position::BottomRight, Mark::O),
        ]);
        assert_eq!(detect_winner(&board), Some(Mark::X));
    }
}
