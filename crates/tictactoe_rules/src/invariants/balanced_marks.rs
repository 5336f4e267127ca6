//! Balanced marks invariant: X leads O by zero or one.

use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: X has placed as many marks as O, or exactly one more.
pub struct BalancedMarksInvariant;

impl Invariant<GameState> for BalancedMarksInvariant {
    fn holds(state: &GameState) -> bool {
        let x_count = state.board().count(Mark::X);
        let o_count = state.board().count(Mark::O);
        x_count == o_count || x_count == o_count + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O or exactly one more"
    }
}
