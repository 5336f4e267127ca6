//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating a board snapshot
//! according to tic-tac-toe rules. Rules never mutate their input and
//! run in constant time, so callers can query them as often as they
//! like instead of caching results next to the board.

pub mod draw;
pub mod outcome;
pub mod win;

pub use draw::is_full;
pub use outcome::{Outcome, compute_outcome};
pub use win::{LINES, detect_winner, has_line};
