//! Move rejection reasons.
//!
//! Every variant is recoverable: a rejected move leaves the session
//! exactly as it was.

use super::position::Position;
use super::rules::Outcome;

/// Error that can occur when validating or applying a move.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum MoveError {
    /// The index does not address a cell (valid range is 0-8).
    #[display("Cell index {} is out of range (must be 0-8)", _0)]
    IndexOutOfRange(usize),

    /// The cell at the position is already marked.
    #[display("{} is already occupied", _0)]
    CellOccupied(Position),

    /// The game has already ended.
    #[display("Game is already over ({})", _0)]
    GameAlreadyOver(Outcome),

    /// A postcondition failed after computing the next state.
    #[display("Invariant violation: {}", _0)]
    InvariantViolation(String),
}

impl std::error::Error for MoveError {}
