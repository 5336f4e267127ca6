//! Properties of board evaluation over every board reachable by legal play.

use std::collections::HashSet;
use tictactoe_rules::rules::has_line;
use tictactoe_rules::{
    BOARD_CELLS, GameState, Mark, MoveError, Outcome, compute_outcome, detect_winner, is_full,
};

/// Collects every state reachable from the empty board.
fn reachable_states() -> Vec<GameState> {
    let mut seen = HashSet::new();
    let mut stack = vec![GameState::new()];
    while let Some(state) = stack.pop() {
        if !seen.insert(state) {
            continue;
        }
        for index in 0..BOARD_CELLS {
            if let Ok(next) = state.play(index) {
                stack.push(next);
            }
        }
    }
    seen.into_iter().collect()
}

#[test]
fn test_reachable_state_count() {
    // Well-known count of distinct legal tic-tac-toe positions.
    assert_eq!(reachable_states().len(), 5478);
}

#[test]
fn test_no_reachable_board_has_two_winners() {
    for state in reachable_states() {
        let board = state.board();
        assert!(
            !(has_line(board, Mark::X) && has_line(board, Mark::O)),
            "two winners on\n{}",
            board
        );
    }
}

#[test]
fn test_outcome_composition() {
    for state in reachable_states() {
        let board = state.board();
        let expected = match detect_winner(board) {
            Some(mark) => Outcome::Win(mark),
            None if is_full(board) => Outcome::Tie,
            None => Outcome::InProgress,
        };
        assert_eq!(compute_outcome(board), expected);
        // Pure: a second call on the same board agrees.
        assert_eq!(compute_outcome(board), expected);
    }
}

#[test]
fn test_terminal_states_reject_every_cell() {
    for state in reachable_states() {
        let outcome = state.outcome();
        if !outcome.is_terminal() {
            continue;
        }
        for index in 0..BOARD_CELLS {
            assert_eq!(state.play(index), Err(MoveError::GameAlreadyOver(outcome)));
        }
    }
}

#[test]
fn test_in_progress_states_accept_exactly_empty_cells() {
    for state in reachable_states() {
        if state.outcome().is_terminal() {
            continue;
        }
        for index in 0..BOARD_CELLS {
            let empty = state.board().cell(index).is_some_and(|c| c.is_empty());
            assert_eq!(state.play(index).is_ok(), empty);
        }
    }
}
