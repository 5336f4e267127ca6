//! Single winner invariant: at most one mark owns a complete line.

use super::super::rules::has_line;
use super::super::{GameState, Mark};
use super::Invariant;

/// Invariant: X and O never both own a complete line.
pub struct SingleWinnerInvariant;

impl Invariant<GameState> for SingleWinnerInvariant {
    fn holds(state: &GameState) -> bool {
        !(has_line(state.board(), Mark::X) && has_line(state.board(), Mark::O))
    }

    fn description() -> &'static str {
        "At most one mark owns a complete line"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{Board, Cell};

    #[test]
    fn test_one_winner_holds() {
        let state = [0, 3, 1, 4, 2]
            .into_iter()
            .try_fold(GameState::new(), GameState::play)
            .expect("legal moves");
        assert!(SingleWinnerInvariant::holds(&state));
    }

    #[test]
    fn test_two_winners_violate() {
        let x = Cell::Marked(Mark::X);
        let o = Cell::Marked(Mark::O);
        let e = Cell::Empty;
        let board = Board::from_cells([x, x, x, o, o, o, e, e, e]);
        let state = GameState::from_parts(board, Mark::X);
        assert!(!SingleWinnerInvariant::holds(&state));
    }
}
