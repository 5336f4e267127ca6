//! Session state: the board plus the mark to move.

use super::action::MoveError;
use super::contracts::LegalMove;
use super::rules::{Outcome, compute_outcome};
use super::types::{Board, Mark};
use serde::{Deserialize, Serialize};
use tracing::instrument;

#[cfg(debug_assertions)]
use super::contracts::{Contract, MoveContract};

/// Complete state of one game.
///
/// A plain value: every transition produces a new `GameState` instead
/// of editing one in place, so an observer never sees a board written
/// without its turn flipped.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GameState {
    /// The board.
    board: Board,
    /// Mark to place next.
    to_move: Mark,
}

impl GameState {
    /// Creates the initial state: empty board, X to move.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            to_move: Mark::X,
        }
    }

    /// Builds a state from raw parts without validation.
    pub(crate) fn from_parts(board: Board, to_move: Mark) -> Self {
        Self { board, to_move }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the mark to place next.
    pub fn to_move(&self) -> Mark {
        self.to_move
    }

    /// Computes the outcome of the current board.
    pub fn outcome(&self) -> Outcome {
        compute_outcome(&self.board)
    }

    /// Returns the state after the current mark is placed at `index`.
    ///
    /// # Errors
    ///
    /// - [`MoveError::IndexOutOfRange`] if `index` is not 0-8
    /// - [`MoveError::GameAlreadyOver`] if the board already has a winner or is full
    /// - [`MoveError::CellOccupied`] if the cell is marked
    /// - [`MoveError::InvariantViolation`] if a postcondition fails (debug builds only)
    #[instrument(skip(self), fields(to_move = %self.to_move))]
    pub fn play(self, index: usize) -> Result<GameState, MoveError> {
        let pos = LegalMove::check(index, &self)?;

        let mut next = self;
        next.board.place(pos, self.to_move);
        next.to_move = self.to_move.opponent();

        #[cfg(debug_assertions)]
        MoveContract::post(&self, &next)?;

        Ok(next)
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
