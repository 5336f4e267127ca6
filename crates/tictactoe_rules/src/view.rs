//! Read-only snapshot handed to presentation layers.

use super::rules::Outcome;
use super::types::{BOARD_CELLS, Cell, Mark};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// Everything a presentation layer needs to draw one frame.
///
/// Built by the controller; adapters render it without consulting the
/// rules themselves.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameView {
    /// Cells in row-major order.
    cells: [Cell; BOARD_CELLS],
    /// Mark to place next.
    to_move: Mark,
    /// Outcome of the board.
    outcome: Outcome,
    /// Whether selecting each cell would be accepted.
    interactive: [bool; BOARD_CELLS],
}

impl GameView {
    /// Creates a snapshot from its parts.
    pub(crate) fn new(
        cells: [Cell; BOARD_CELLS],
        to_move: Mark,
        outcome: Outcome,
        interactive: [bool; BOARD_CELLS],
    ) -> Self {
        Self {
            cells,
            to_move,
            outcome,
            interactive,
        }
    }

    /// Returns true when at least one cell accepts a move.
    pub fn accepts_moves(&self) -> bool {
        self.interactive.iter().any(|i| *i)
    }
}
