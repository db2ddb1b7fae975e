//! Single winner invariant: the game stops at the first completed line.

use super::super::rules::win::completed_lines;
use super::super::{Board, Player};
use super::Invariant;

/// Invariant: X and O never both own a complete line.
pub struct SingleWinnerInvariant;

impl Invariant<Board> for SingleWinnerInvariant {
    fn holds(board: &Board) -> bool {
        let mut owners = completed_lines(board);
        match owners.next() {
            Some(first) => owners.all(|p: Player| p == first),
            None => true,
        }
    }

    fn description() -> &'static str {
        "X and O do not both own a complete line"
    }
}
