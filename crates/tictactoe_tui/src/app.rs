//! Application state for the terminal UI.
//!
//! The app never decides whether a move is legal. It forwards intents
//! to the shared game and redraws from the views the game publishes.

use crate::config::TuiConfig;
use crate::input::{Intent, move_cursor};
use std::sync::mpsc::Receiver;
use tictactoe_rules::{GameView, Position, SharedGame};
use tracing::{debug, info, instrument};

/// Main application state.
pub struct App {
    game: SharedGame,
    updates: Receiver<GameView>,
    view: GameView,
    cursor: Position,
    notice: Option<String>,
    config: TuiConfig,
    should_quit: bool,
}

impl App {
    /// Creates a new application around a fresh game.
    #[instrument(skip(config))]
    pub fn new(config: TuiConfig) -> Self {
        let game = SharedGame::new();
        let updates = game.subscribe();
        let view = game.view();
        Self {
            game,
            updates,
            view,
            cursor: Position::Center,
            notice: None,
            config,
            should_quit: false,
        }
    }

    /// Latest snapshot of the game.
    pub fn view(&self) -> &GameView {
        &self.view
    }

    /// Cell under the cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Message from the last rejected action, if any.
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Display configuration.
    pub fn config(&self) -> &TuiConfig {
        &self.config
    }

    /// Whether the user asked to leave.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Pulls every published view, keeping the newest.
    pub fn sync(&mut self) {
        if let Some(view) = self.updates.try_iter().last() {
            debug!(outcome = %view.outcome(), "Received game update");
            self.view = view;
        }
    }

    /// Handles one user intent.
    #[instrument(skip(self))]
    pub fn handle(&mut self, intent: Intent) {
        match intent {
            Intent::Cursor(direction) => {
                self.cursor = move_cursor(self.cursor, direction);
            }
            Intent::SelectCursor => self.select(self.cursor.to_index()),
            Intent::Select(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.select(index);
            }
            Intent::Reset => {
                // The reset affordance is only offered once the game is over.
                if self.view.outcome().is_terminal() {
                    info!("Starting a new game");
                    self.game.reset();
                    self.notice = None;
                }
            }
            Intent::Quit => self.should_quit = true,
        }
        self.sync();
    }

    fn select(&mut self, index: usize) {
        self.notice = match self.game.apply_move(index) {
            Ok(()) => None,
            Err(e) => Some(e.to_string()),
        };
    }
}
