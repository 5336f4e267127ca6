//! Thread-safe handle to one game session.
//!
//! Every operation runs inside a single critical section, so two
//! callers racing for the same empty cell cannot both succeed.

use super::action::MoveError;
use super::controller::GameController;
use super::rules::Outcome;
use super::view::GameView;
use std::sync::mpsc::{Receiver, Sender, channel};
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tracing::{debug, instrument};

#[derive(Debug, Default)]
struct Inner {
    controller: GameController,
    subscribers: Vec<Sender<GameView>>,
}

impl Inner {
    /// Sends the current view to every live subscriber, dropping closed ones.
    fn publish(&mut self) {
        let view = self.controller.view();
        let before = self.subscribers.len();
        self.subscribers.retain(|tx| tx.send(view).is_ok());
        let dropped = before - self.subscribers.len();
        if dropped > 0 {
            debug!(dropped, "Pruned closed subscribers");
        }
    }
}

/// Cloneable, lock-guarded game controller.
#[derive(Debug, Clone, Default)]
pub struct SharedGame {
    inner: Arc<Mutex<Inner>>,
}

impl SharedGame {
    /// Creates a new shared game.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps an existing controller.
    pub fn from_controller(controller: GameController) -> Self {
        Self {
            inner: Arc::new(Mutex::new(Inner {
                controller,
                subscribers: Vec::new(),
            })),
        }
    }

    // Mutations are single assignments, so a panic elsewhere while the
    // lock was held cannot leave a half-written session behind.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Applies a move atomically and notifies subscribers on success.
    ///
    /// # Errors
    ///
    /// See [`GameController::apply_move`].
    #[instrument(skip(self))]
    pub fn apply_move(&self, index: usize) -> Result<(), MoveError> {
        let mut inner = self.lock();
        inner.controller.apply_move(index)?;
        inner.publish();
        Ok(())
    }

    /// Resets the game and notifies subscribers.
    #[instrument(skip(self))]
    pub fn reset(&self) {
        let mut inner = self.lock();
        inner.controller.reset();
        inner.publish();
    }

    /// Computes the outcome of the live board.
    pub fn current_outcome(&self) -> Outcome {
        self.lock().controller.current_outcome()
    }

    /// Builds a snapshot of the live session.
    pub fn view(&self) -> GameView {
        self.lock().controller.view()
    }

    /// Registers for a view after every accepted move and every reset.
    ///
    /// Dropping the receiver unsubscribes.
    #[instrument(skip(self))]
    pub fn subscribe(&self) -> Receiver<GameView> {
        let (tx, rx) = channel();
        self.lock().subscribers.push(tx);
        rx
    }
}
