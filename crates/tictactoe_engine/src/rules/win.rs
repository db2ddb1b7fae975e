//! Win detection logic for tic-tac-toe.

use super::super::{Board, Cell, Player, Position};
use tracing::instrument;

/// The eight lines, in the order they are scanned.
static LINES: [[Position; 3]; 8] = [
    // Rows
    [Position::TopLeft, Position::TopCenter, Position::TopRight],
    [Position::MiddleLeft, Position::Center, Position::MiddleRight],
    [Position::BottomLeft, Position::BottomCenter, Position::BottomRight],
    // Columns
    [Position::TopLeft, Position::MiddleLeft, Position::BottomLeft],
    [Position::TopCenter, Position::Center, Position::BottomCenter],
    [Position::TopRight, Position::MiddleRight, Position::BottomRight],
    // Diagonals
    [Position::TopLeft, Position::Center, Position::BottomRight],
    [Position::TopRight, Position::Center, Position::BottomLeft],
];

/// Returns the owner of every complete line: rows, then columns, then
/// the main diagonal, then the anti-diagonal.
pub fn completed_lines(board: &Board) -> impl Iterator<Item = Player> + '_ {
    LINES.iter().filter_map(move |&[a, b, c]| {
        let cell = board.at(a);
        if cell != Cell::Empty && cell == board.at(b) && cell == board.at(c) {
            cell.mark()
        } else {
            None
        }
    })
}

/// Checks if there is a winner on the board.
///
/// Returns the owner of the first complete line in scan order, or `None`
/// if no line is complete.
#[instrument(level = "trace", skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    completed_lines(board).next()
}

#[cfg(test)]
mod tests {
    use super::*;

    const X: Cell = Cell::Occupied(Player::X);
    const O: Cell = Cell::Occupied(Player::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_no_winner_empty_board() {
        assert_eq!(winner(&Board::new()), None);
    }

    #[test]
    fn test_winner_top_row() {
        let board = Board::from_rows([[X, X, X], [O, O, E], [E, E, E]]);
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_winner_column() {
        let board = Board::from_rows([[X, O, X], [E, O, E], [X, O, X]]);
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_winner_main_diagonal() {
        let board = Board::from_rows([[O, X, X], [E, O, X], [E, E, O]]);
        assert_eq!(winner(&board), Some(Player::O));
    }

    #[test]
    fn test_anti_diagonal_checked_independently() {
        // Main diagonal is not a three-way match here.
        let board = Board::from_rows([[O, O, X], [E, X, E], [X, E, E]]);
        assert_eq!(winner(&board), Some(Player::X));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let board = Board::from_rows([[X, X, E], [O, O, E], [E, E, E]]);
        assert_eq!(winner(&board), None);
    }

    #[test]
    fn test_columns_scanned_left_to_right() {
        // Unreachable, but exercises the scan order.
        let board = Board::from_rows([[O, X, X], [O, X, X], [O, E, X]]);
        let owners: Vec<Player> = completed_lines(&board).collect();
        assert_eq!(owners, vec![Player::O, Player::X]);
        assert_eq!(winner(&board), Some(Player::O));
    }
}
