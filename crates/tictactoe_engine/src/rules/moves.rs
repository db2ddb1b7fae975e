//! Legal-move enumeration and move application.

use super::super::action::{Action, EngineError};
use super::super::types::{Board, Cell};
use super::player;
use std::collections::BTreeSet;
use tracing::instrument;

/// Returns every action whose target cell is empty.
///
/// The set iterates in row-major order, which is the order the search
/// uses to break ties.
#[instrument(level = "trace", skip(board))]
pub fn actions(board: &Board) -> BTreeSet<Action> {
    successors(board).map(|(action, _)| action).collect()
}

/// Returns the board that results from the player to move marking
/// `action`'s cell.
///
/// The input board is left unchanged.
#[instrument(level = "trace", skip(board))]
pub fn result(board: &Board, action: Action) -> Result<Board, EngineError> {
    let index = action.index().ok_or(EngineError::InvalidAction {
        row: action.row,
        column: action.column,
    })?;

    if board.cells()[index] != Cell::Empty {
        return Err(EngineError::IllegalMove(action));
    }

    Ok(board.with_mark(index, player(board)))
}

/// Every legal action paired with the board it produces, in row-major order.
pub(crate) fn successors(board: &Board) -> impl Iterator<Item = (Action, Board)> + '_ {
    let mover = player(board);
    board
        .cells()
        .iter()
        .enumerate()
        .filter(|(_, cell)| **cell == Cell::Empty)
        .filter_map(move |(index, _)| {
            Action::from_index(index).map(|action| (action, board.with_mark(index, mover)))
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Player;

    const X: Cell = Cell::Occupied(Player::X);
    const O: Cell = Cell::Occupied(Player::O);
    const E: Cell = Cell::Empty;

    #[test]
    fn test_successors_match_actions() {
        let board = Board::from_rows([[X, E, E], [E, O, E], [E, E, X]]);
        let from_successors: Vec<Action> = successors(&board).map(|(a, _)| a).collect();
        let from_actions: Vec<Action> = actions(&board).into_iter().collect();
        assert_eq!(from_successors, from_actions);
        for (action, next) in successors(&board) {
            assert_eq!(result(&board, action), Ok(next));
        }
    }

    #[test]
    fn test_result_marks_player_to_move() {
        let board = Board::from_rows([[X, E, E], [E, E, E], [E, E, E]]);
        let next = result(&board, Action::new(1, 1)).unwrap();
        assert_eq!(next.cell(Action::new(1, 1)), Some(O));
    }
}
