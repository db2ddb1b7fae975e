//! Mark balance invariant: X has the same number of marks as O, or one more.

use super::super::{Board, Player};
use super::Invariant;

/// Invariant: count(X) - count(O) is 0 or 1.
pub struct MarkBalanceInvariant;

impl Invariant<Board> for MarkBalanceInvariant {
    fn holds(board: &Board) -> bool {
        let x_count = board.count(Player::X);
        let o_count = board.count(Player::O);
        x_count == o_count || x_count == o_count + 1
    }

    fn description() -> &'static str {
        "X has as many marks as O or exactly one more"
    }
}
