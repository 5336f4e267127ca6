//! Contract-based validation for tic-tac-toe.
//!
//! Contracts define correctness through preconditions and postconditions.
//! They formalize the Hoare-style reasoning: {P} action {Q}

use super::action::MoveError;
use super::invariants::{InvariantSet, TicTacToeInvariants};
use super::position::Position;
use super::state::GameState;
use tracing::{instrument, warn};

// ─────────────────────────────────────────────────────────────
//  Contract Trait
// ─────────────────────────────────────────────────────────────

/// A contract defines preconditions and postconditions for state transitions.
///
/// - Precondition: {P(state, action)} - must hold before applying action
/// - Postcondition: {Q(before, after)} - must hold after applying action
pub trait Contract<S, A> {
    /// Checks preconditions before applying the action.
    fn pre(state: &S, action: &A) -> Result<(), MoveError>;

    /// Checks postconditions after applying the action.
    fn post(before: &S, after: &S) -> Result<(), MoveError>;
}

// ─────────────────────────────────────────────────────────────
//  Move Preconditions
// ─────────────────────────────────────────────────────────────

/// Precondition: the index addresses a cell.
pub struct IndexInRange;

impl IndexInRange {
    /// Converts the index, rejecting anything outside 0-8.
    #[instrument]
    pub fn check(index: usize) -> Result<Position, MoveError> {
        Position::try_from(index)
    }
}

/// Precondition: nobody has won and the board is not full.
pub struct GameNotOver;

impl GameNotOver {
    /// Rejects moves once the outcome is terminal.
    #[instrument(skip(state))]
    pub fn check(state: &GameState) -> Result<(), MoveError> {
        let outcome = state.outcome();
        if outcome.is_terminal() {
            Err(MoveError::GameAlreadyOver(outcome))
        } else {
            Ok(())
        }
    }
}

/// Precondition: the addressed cell is empty.
pub struct CellIsEmpty;

impl CellIsEmpty {
    /// Rejects moves onto a marked cell.
    #[instrument(skip(state))]
    pub fn check(pos: Position, state: &GameState) -> Result<(), MoveError> {
        if state.board().is_empty(pos) {
            Ok(())
        } else {
            Err(MoveError::CellOccupied(pos))
        }
    }
}

/// Composite precondition: index in range, game not over, cell empty.
///
/// Checked in that order, so the first failing rule names the error.
pub struct LegalMove;

impl LegalMove {
    /// Validates all preconditions and returns the addressed position.
    #[instrument(skip(state))]
    pub fn check(index: usize, state: &GameState) -> Result<Position, MoveError> {
        let pos = IndexInRange::check(index)?;
        GameNotOver::check(state)?;
        CellIsEmpty::check(pos, state)?;
        Ok(pos)
    }
}

// ─────────────────────────────────────────────────────────────
//  Move Contract (Pre + Post)
// ─────────────────────────────────────────────────────────────

/// Contract for placing a mark by cell index.
///
/// Preconditions: see [`LegalMove`].
///
/// Postconditions:
/// - Exactly one previously empty cell is now marked, nothing else changed
/// - All [`TicTacToeInvariants`] hold
pub struct MoveContract;

impl Contract<GameState, usize> for MoveContract {
    fn pre(state: &GameState, index: &usize) -> Result<(), MoveError> {
        LegalMove::check(*index, state).map(|_| ())
    }

    fn post(before: &GameState, after: &GameState) -> Result<(), MoveError> {
        if !OneMarkPerMove::holds(before, after) {
            return Err(MoveError::InvariantViolation(
                "Postcondition failed: a move must mark exactly one empty cell".to_string(),
            ));
        }

        TicTacToeInvariants::check_all(after).map_err(|violations| {
            let descriptions = violations
                .iter()
                .map(|v| v.description.as_str())
                .collect::<Vec<_>>()
                .join("; ");
            MoveError::InvariantViolation(format!("Postcondition failed: {}", descriptions))
        })
    }
}

/// Transition property: one new mark, previously marked cells untouched.
pub struct OneMarkPerMove;

impl OneMarkPerMove {
    /// Compares the boards before and after a move.
    #[instrument(skip_all)]
    pub fn holds(before: &GameState, after: &GameState) -> bool {
        let kept = before
            .board()
            .cells()
            .iter()
            .zip(after.board().cells())
            .all(|(old, new)| old.is_empty() || old == new);
        let grew = after.board().filled() == before.board().filled() + 1;

        let valid = kept && grew;
        if !valid {
            warn!(
                before = before.board().filled(),
                after = after.board().filled(),
                "One-mark-per-move violated"
            );
        }
        valid
    }
}
