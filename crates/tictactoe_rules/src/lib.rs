//! Tic-tac-toe rules engine.
//!
//! Pure game-state logic for the 3x3 mark-placement game, with no
//! rendering and no I/O.
//!
//! # Architecture
//!
//! - **Board evaluation** ([`rules`]): winner detection, full-board
//!   detection and the derived [`Outcome`]
//! - **Controller** ([`GameController`]): owns the session state and is
//!   the only place moves and resets happen
//! - **Contracts and invariants**: move preconditions and debug-build
//!   postconditions
//! - **Presentation boundary** ([`GameView`], [`SharedGame`]): read-only
//!   snapshots and a lock-guarded handle that publishes them
//!
//! # Example
//!
//! ```
//! use tictactoe_rules::{GameController, Mark, MoveError, Outcome};
//!
//! let mut game = GameController::new();
//! for index in [0, 3, 1, 4, 2] {
//!     game.apply_move(index)?;
//! }
//! assert_eq!(game.current_outcome(), Outcome::Win(Mark::X));
//! assert!(matches!(game.apply_move(5), Err(MoveError::GameAlreadyOver(_))));
//! # Ok::<(), MoveError>(())
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod controller;
mod position;
mod shared;
mod state;
mod types;
mod view;

pub mod contracts;
pub mod invariants;
pub mod rules;

pub use action::MoveError;
pub use controller::GameController;
pub use position::Position;
pub use rules::{LINES, Outcome, compute_outcome, detect_winner, is_full};
pub use shared::SharedGame;
pub use state::GameState;
pub use types::{BOARD_CELLS, BOARD_SIDE, Board, Cell, Mark};
pub use view::GameView;
