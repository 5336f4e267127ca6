//! Command-line interface for tictactoe.

use clap::{Parser, Subcommand};

/// Tic-tac-toe in the terminal
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Two-player tic-tac-toe for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to an optional TOML configuration file
    #[arg(short, long, default_value = "tictactoe.toml", global = true)]
    pub config: std::path::PathBuf,

    /// Subcommand to run (defaults to `play`)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Play an interactive game in the terminal
    Play,

    /// Apply a list of moves and print each resulting board
    Replay {
        /// Comma-separated cell indices (0-8, row-major)
        #[arg(short, long, value_delimiter = ',', required = true)]
        moves: Vec<usize>,
    },
}
