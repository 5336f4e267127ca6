//! Text derived from a game snapshot.
//!
//! Pure functions over [`GameView`]; no rendering and no game rules.

use crate::config::TuiConfig;
use tictactoe_rules::{BOARD_SIDE, Cell, GameView, Outcome};

/// Status line: winner, tie, or whose turn it is.
pub fn status_text(view: &GameView, config: &TuiConfig) -> String {
    match view.outcome() {
        Outcome::Win(mark) => format!("Winner: {}", config.symbol(*mark)),
        Outcome::Tie => "It's a tie!".to_string(),
        Outcome::InProgress => format!("Next player: {}", config.symbol(*view.to_move())),
    }
}

/// Symbol drawn inside a cell; empty cells show their 1-based number.
pub fn cell_symbol(index: usize, cell: Cell, config: &TuiConfig) -> String {
    match cell {
        Cell::Empty => (index + 1).to_string(),
        Cell::Marked(mark) => config.symbol(mark).to_string(),
    }
}

/// Plain-text grid using the configured symbols, one board row per line.
pub fn board_text(view: &GameView, config: &TuiConfig) -> String {
    view.cells()
        .chunks(BOARD_SIDE)
        .enumerate()
        .map(|(row, cells)| {
            cells
                .iter()
                .enumerate()
                .map(|(col, cell)| cell_symbol(row * BOARD_SIDE + col, *cell, config))
                .collect::<Vec<_>>()
                .join("|")
        })
        .collect::<Vec<_>>()
        .join("\n-+-+-\n")
}

/// Accessible description of one cell, numbered from 1.
pub fn cell_label(index: usize, view: &GameView, config: &TuiConfig) -> String {
    let number = index + 1;
    match view.cells().get(index) {
        Some(Cell::Marked(mark)) => {
            format!("Square {} filled with {}", number, config.symbol(*mark))
        }
        Some(Cell::Empty) if view.interactive()[index] => {
            format!("Empty square {}, select to place your mark", number)
        }
        Some(Cell::Empty) => format!("Empty square {}", number),
        None => format!("No square {}", number),
    }
}

/// Hint for the keys available in the current state.
pub fn key_hint(view: &GameView) -> &'static str {
    if view.outcome().is_terminal() {
        "r: play again   q: quit"
    } else {
        "arrows: move   enter/space: place   1-9: place   q: quit"
    }
}
