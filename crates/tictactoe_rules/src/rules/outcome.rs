//! Derived game outcome.

use super::super::{Board, Mark};
use super::{detect_winner, is_full};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Classification of a board.
///
/// Never stored alongside the board; always recomputed with
/// [`compute_outcome`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// Moves can still be made.
    InProgress,
    /// A mark completed a line.
    Win(Mark),
    /// The board is full with no completed line.
    Tie,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Mark> {
        match self {
            Outcome::Win(mark) => Some(*mark),
            Outcome::InProgress | Outcome::Tie => None,
        }
    }

    /// Returns true once no further move is legal.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win(mark) => write!(f, "{} wins", mark),
            Outcome::Tie => write!(f, "Tie"),
        }
    }
}

/// Computes the outcome of a board.
///
/// A win is checked before a full board, so the final move of a game
/// that both completes a line and fills the board reports `Win`.
#[instrument]
pub fn compute_outcome(board: &Board) -> Outcome {
    if let Some(mark) = detect_winner(board) {
        Outcome::Win(mark)
    } else if is_full(board) {
        Outcome::Tie
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::Cell;
    use super::*;

    const X: Cell = Cell::Marked(Mark::X);
    const O: Cell = Cell::Marked(Mark::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(compute_outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_full_board_with_line_is_win() {
        // X O X / O X O / O X X
        let board = Board::from_cells([X, O, X, O, X, O, O, X, X]);
        assert_eq!(compute_outcome(&board), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_full_board_without_line_is_tie() {
        // X X O / O O X / X O X
        let board = Board::from_cells([X, X, O, O, O, X, X, O, X]);
        assert_eq!(compute_outcome(&board), Outcome::Tie);
    }

    #[test]
    fn test_partial_board_in_progress() {
        let board = Board::from_cells([X, O, E, E, X, E, E, E, O]);
        assert_eq!(compute_outcome(&board), Outcome::InProgress);
    }

    #[test]
    fn test_outcome_helpers() {
        assert_eq!(Outcome::Win(Mark::O).winner(), Some(Mark::O));
        assert_eq!(Outcome::Tie.winner(), None);
        assert!(Outcome::Tie.is_terminal());
        assert!(!Outcome::InProgress.is_terminal());
    }
}
