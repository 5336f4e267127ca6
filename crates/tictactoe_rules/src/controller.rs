//! Game controller: the only writer of session state.

use super::action::MoveError;
use super::contracts::{Contract, MoveContract};
use super::position::Position;
use super::rules::Outcome;
use super::state::GameState;
use super::types::{BOARD_CELLS, Board, Mark};
use super::view::GameView;
use tracing::{debug, info, instrument, warn};

/// Tic-tac-toe game controller.
///
/// Owns one [`GameState`] and mediates every change to it. The outcome
/// is never stored; each query recomputes it from the board.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameController {
    state: GameState,
}

impl GameController {
    /// Creates a controller with an empty board and X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            state: GameState::new(),
        }
    }

    /// Places the current mark at `index` (0-8) and passes the turn.
    ///
    /// On error the session is left untouched.
    ///
    /// # Errors
    ///
    /// See [`GameState::play`].
    #[instrument(skip(self), fields(to_move = %self.state.to_move()))]
    pub fn apply_move(&mut self, index: usize) -> Result<(), MoveError> {
        match self.state.play(index) {
            Ok(next) => {
                self.state = next;
                info!(index, outcome = %next.outcome(), "Move accepted");
                Ok(())
            }
            Err(e) => {
                warn!(index, error = %e, "Move rejected");
                Err(e)
            }
        }
    }

    /// Starts over: empty board, X to move.
    #[instrument(skip(self))]
    pub fn reset(&mut self) {
        info!(previous = %self.current_outcome(), "Resetting game");
        self.state = GameState::new();
    }

    /// Computes the outcome of the live board.
    pub fn current_outcome(&self) -> Outcome {
        self.state.outcome()
    }

    /// Returns the current session state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        self.state.board()
    }

    /// Returns the mark to place next.
    pub fn to_move(&self) -> Mark {
        self.state.to_move()
    }

    /// Whether a move at `index` would be accepted right now.
    ///
    /// Equivalent to "game in progress and cell empty"; out-of-range
    /// indices are never interactive.
    pub fn is_interactive(&self, index: usize) -> bool {
        MoveContract::pre(&self.state, &index).is_ok()
    }

    /// Positions that would accept a move. Empty once the game is over.
    #[instrument(skip(self))]
    pub fn valid_moves(&self) -> Vec<Position> {
        if self.current_outcome().is_terminal() {
            return Vec::new();
        }
        Position::empty_cells(self.board())
    }

    /// Builds a snapshot for presentation.
    #[instrument(skip(self))]
    pub fn view(&self) -> GameView {
        let outcome = self.current_outcome();
        let board = self.board();
        let interactive: [bool; BOARD_CELLS] = std::array::from_fn(|index| {
            !outcome.is_terminal() && board.cell(index).is_some_and(|c| c.is_empty())
        });
        debug!(%outcome, "Built game view");
        GameView::new(*board.cells(), self.to_move(), outcome, interactive)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Cell;

    #[test]
    fn test_first_move_marks_x_and_passes_turn() {
        let mut game = GameController::new();
        game.apply_move(4).expect("legal move");
        assert_eq!(game.board().get(Position::Center), Cell::Marked(Mark::X));
        assert_eq!(game.to_move(), Mark::O);
    }

    #[test]
    fn test_view_matches_is_interactive() {
        let mut game = GameController::new();
        for index in [0, 3, 1] {
            game.apply_move(index).expect("legal move");
        }
        let view = game.view();
        for index in 0..BOARD_CELLS {
            assert_eq!(view.interactive()[index], game.is_interactive(index));
        }
        assert!(!game.is_interactive(BOARD_CELLS));
    }

    #[test]
    fn test_valid_moves_empty_after_win() {
        let mut game = GameController::new();
        for index in [0, 3, 1, 4, 2] {
            game.apply_move(index).expect("legal move");
        }
        assert!(game.valid_moves().is_empty());
        assert!(!game.view().accepts_moves());
    }

    #[test]
    fn test_valid_moves_shrink() {
        let mut game = GameController::new();
        assert_eq!(game.valid_moves().len(), 9);
        game.apply_move(8).expect("legal move");
        assert_eq!(game.valid_moves().len(), 8);
        assert!(!game.valid_moves().contains(&Position::BottomRight));
    }
}
