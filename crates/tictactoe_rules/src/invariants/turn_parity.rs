//! Turn parity invariant: the mark to move follows from the mark counts.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: X moves when both marks are level, O moves when X leads.
///
/// Equivalent to strict alternation from an empty board with X first.
pub struct TurnParityInvariant;

impl Invariant<GameState> for TurnParityInvariant {
    fn holds(state: &GameState) -> bool {
        let level = state.board().count(Mark::X) == state.board().count(Mark::O);
        let expected = if level { Mark::X } else { Mark::O };
        state.to_move() == expected
    }

    fn description() -> &'static str {
        "Marks alternate (X, O, X, O, ...)"
    }
}
