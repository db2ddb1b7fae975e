//! Winner-moved-last invariant: a completed line belongs to the player who
//! made the final move.

use super::super::rules::winner;
use super::super::{Board, Player};
use super::Invariant;

/// Invariant: if X owns a line X has one more mark than O; if O owns a
/// line the counts are equal.
pub struct WinnerMovedLastInvariant;

impl Invariant<Board> for WinnerMovedLastInvariant {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);
        match winner(board) {
            Some(Player::X) => x_count == o_count + 1,
            Some(Player::O) => x_count == o_count,
            None => true,
        }
    }

    fn description() -> &'static str {
        "The owner of a complete line made the last move"
    }
}
