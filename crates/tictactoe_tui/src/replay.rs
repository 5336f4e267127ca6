//! Headless replay of a move list.

use crate::config::TuiConfig;
use crate::presenter::{board_text, status_text};
use tictactoe_rules::GameController;
use tracing::instrument;

/// Applies `moves` in order and returns a printable transcript.
///
/// Rejected moves are reported and skipped; they never change the game.
#[instrument(skip(config))]
pub fn transcript(moves: &[usize], config: &TuiConfig) -> String {
    let mut game = GameController::new();
    let mut blocks = Vec::with_capacity(moves.len() + 1);

    for (n, &index) in moves.iter().enumerate() {
        let header = format!("move {}: {} -> {}", n + 1, config.symbol(game.to_move()), index);
        let block = match game.apply_move(index) {
            Ok(()) => {
                let view = game.view();
                format!(
                    "{}\n{}\n{}\n",
                    header,
                    board_text(&view, config),
                    status_text(&view, config)
                )
            }
            Err(e) => format!("{} rejected: {}\n", header, e),
        };
        blocks.push(block);
    }

    blocks.push(format!("final: {}", status_text(&game.view(), config)));
    blocks.join("\n")
}
