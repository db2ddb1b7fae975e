//! Game rules for tic-tac-toe.
//!
//! This module contains pure functions for evaluating board state
//! according to tic-tac-toe rules. Every function takes a board by
//! reference and never modifies it.

pub mod draw;
pub mod moves;
pub mod win;

pub use draw::is_full;
pub use moves::{actions, result};
pub use win::winner;

use super::action::EngineError;
use super::types::{Board, Outcome, Player};
use tracing::instrument;

/// Returns the all-empty starting board.
pub fn initial_state() -> Board {
    Board::new()
}

/// Returns the player who moves next.
///
/// X moves first and the players alternate, so X is to move whenever it
/// has no more marks than O.
#[instrument(level = "trace", skip(board))]
pub fn player(board: &Board) -> Player {
    if board.count(Player::X) <= board.count(Player::O) {
        Player::X
    } else {
        Player::O
    }
}

/// Returns true if the game is over: someone won or the board is full.
#[instrument(level = "trace", skip(board))]
pub fn terminal(board: &Board) -> bool {
    winner(board).is_some() || is_full(board)
}

/// Scores a terminal board: +1 if X won, -1 if O won, 0 for a draw.
///
/// Fails with [`EngineError::PreconditionViolation`] while the game is
/// still in progress.
#[instrument(level = "trace", skip(board))]
pub fn utility(board: &Board) -> Result<i8, EngineError> {
    terminal_score(board).ok_or(EngineError::PreconditionViolation(
        "utility is only defined for terminal boards",
    ))
}

/// Derives the outcome of a board.
#[instrument(level = "trace", skip(board))]
pub fn outcome(board: &Board) -> Outcome {
    match winner(board) {
        Some(player) => Outcome::Winner(player),
        None if is_full(board) => Outcome::Draw,
        None => Outcome::InProgress,
    }
}

/// Utility of the board if it is terminal, `None` otherwise.
pub(crate) fn terminal_score(board: &Board) -> Option<i8> {
    match outcome(board) {
        Outcome::Winner(Player::X) => Some(1),
        Outcome::Winner(Player::O) => Some(-1),
        Outcome::Draw => Some(0),
        Outcome::InProgress => None,
    }
}
