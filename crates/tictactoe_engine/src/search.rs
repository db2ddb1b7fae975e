//! Exhaustive minimax search.
//!
//! X maximizes utility and O minimizes it. The whole remaining game tree is
//! explored: no depth limit, no pruning, no caching. From the empty board
//! that is a little over half a million boards.

use super::rules::moves::successors;
use super::rules::{player, terminal_score};
use super::{Action, Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument};

/// What a search found for one board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchReport {
    /// Optimal action for the player to move; `None` on a terminal board.
    pub action: Option<Action>,
    /// Minimax value of the board from X's point of view.
    pub value: i8,
    /// Boards visited, the root included.
    pub nodes: u64,
}

/// Searches the full game tree below `board`.
///
/// Among equally good actions the first in row-major order wins.
#[instrument(level = "debug", skip(board), fields(to_move = %player(board)))]
pub fn search(board: &Board) -> SearchReport {
    let mut nodes = 1;

    if let Some(score) = terminal_score(board) {
        debug!(score, "Board is terminal, nothing to search");
        return SearchReport {
            action: None,
            value: score,
            nodes,
        };
    }

    let maximizing = player(board) == Player::X;
    let mut best: Option<(Action, i8)> = None;

    for (action, next) in successors(board) {
        let score = if maximizing {
            min_value(&next, &mut nodes)
        } else {
            max_value(&next, &mut nodes)
        };

        let improves = match best {
            None => true,
            Some((_, best_score)) if maximizing => score > best_score,
            Some((_, best_score)) => score < best_score,
        };
        if improves {
            best = Some((action, score));
        }
    }

    let report = SearchReport {
        action: best.map(|(action, _)| action),
        value: best.map_or(0, |(_, score)| score),
        nodes,
    };
    debug!(action = ?report.action, value = report.value, nodes, "Search complete");
    report
}

/// Returns the optimal action for the player to move, or `None` if the
/// board is terminal.
pub fn minimax(board: &Board) -> Option<Action> {
    search(board).action
}

/// Minimax value of a board: +1 X wins, -1 O wins, 0 draw under optimal
/// play from here.
pub fn value(board: &Board) -> i8 {
    search(board).value
}

fn max_value(board: &Board, nodes: &mut u64) -> i8 {
    *nodes += 1;
    if let Some(score) = terminal_score(board) {
        return score;
    }
    successors(board).fold(i8::MIN, |best, (_, next)| best.max(min_value(&next, nodes)))
}

fn min_value(board: &Board, nodes: &mut u64) -> i8 {
    *nodes += 1;
    if let Some(score) = terminal_score(board) {
        return score;
    }
    successors(board).fold(i8::MAX, |best, (_, next)| best.min(max_value(&next, nodes)))
}
