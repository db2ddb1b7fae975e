//! Command-line interface for the tic-tac-toe driver.

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tictactoe_engine::{Board, Player};

/// Tic-tac-toe against an exhaustive minimax opponent
#[derive(Parser, Debug)]
#[command(name = "tictactoe")]
#[command(about = "Play tic-tac-toe against a perfect minimax opponent", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to the TOML config file (missing file means defaults)
    #[arg(long, global = true, default_value = "tictactoe.toml")]
    pub config: PathBuf,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play against the engine on the terminal
    Play {
        /// Mark the human plays (x or o); overrides the config file
        #[arg(long)]
        human: Option<Player>,

        /// Print the minimax value of every legal move before each turn
        #[arg(long)]
        show_values: bool,
    },

    /// Let the engine play both sides
    Selfplay,

    /// Analyze a position given as nine cells, e.g. "XX./OO./..."
    Analyze {
        /// Board in row-major order; X, O, and . for empty
        board: Board,
    },
}
