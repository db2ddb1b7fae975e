//! Tic-tac-toe rules engine with exhaustive minimax search.
//!
//! Every operation is a pure function of a [`Board`] value. A driver holds a
//! board, asks whose turn it is and which moves are legal, applies a move to
//! get a new board, and asks [`minimax`] for the optimal move.
//!
//! # Example
//!
//! ```
//! use tictactoe_engine::{initial_state, minimax, result, terminal, utility};
//!
//! # fn main() -> Result<(), tictactoe_engine::EngineError> {
//! let mut board = initial_state();
//! while let Some(action) = minimax(&board) {
//!     board = result(&board, action)?;
//! }
//! assert!(terminal(&board));
//! assert_eq!(utility(&board)?, 0);
//! # Ok(())
//! # }
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod action;
mod game;
pub mod invariants;
mod position;
pub mod rules;
mod search;
mod types;

pub use action::{Action, EngineError};
pub use game::Game;
pub use position::Position;
pub use rules::{
    actions, initial_state, is_full, outcome, player, result, terminal, utility, winner,
};
pub use search::{minimax, search, value, SearchReport};
pub use types::{Board, Cell, Outcome, Player};
