//! Actions and the errors raised when applying them.
//!
//! An action names a target cell; whose mark lands there is decided by the
//! board it is applied to.

use derive_new::new;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A `(row, column)` pair naming a target cell.
///
/// Coordinates are not checked on construction; applying an off-grid action
/// fails with [`EngineError::InvalidAction`]. Actions order row-major.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, new,
)]
pub struct Action {
    /// Row, 0-2 from the top.
    pub row: usize,
    /// Column, 0-2 from the left.
    pub column: usize,
}

impl Action {
    /// Returns true if both coordinates are inside the 3x3 grid.
    pub fn is_on_board(&self) -> bool {
        self.row < 3 && self.column < 3
    }

    /// Row-major cell index (0-8), or `None` for an off-grid action.
    pub fn index(&self) -> Option<usize> {
        self.is_on_board().then(|| self.row * 3 + self.column)
    }

    /// Creates the action targeting a row-major cell index.
    pub fn from_index(index: usize) -> Option<Self> {
        (index < 9).then(|| Self::new(index / 3, index % 3))
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.row, self.column)
    }
}

/// Parses `"row,col"`, optionally wrapped in parentheses.
impl FromStr for Action {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let malformed = || EngineError::MalformedAction(s.to_string());
        let inner = s
            .trim()
            .trim_start_matches('(')
            .trim_end_matches(')');
        let (row, column) = inner.split_once(',').ok_or_else(malformed)?;
        let row = row.trim().parse().map_err(|_| malformed())?;
        let column = column.trim().parse().map_err(|_| malformed())?;
        Ok(Self::new(row, column))
    }
}

/// Error that can occur when applying an action or reading a board.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display)]
pub enum EngineError {
    /// The action's coordinates are outside the grid.
    #[display("Invalid action: ({}, {}) is outside the 3x3 grid", row, column)]
    InvalidAction {
        /// Requested row.
        row: usize,
        /// Requested column.
        column: usize,
    },

    /// The target cell is already occupied.
    #[display("Illegal move: cell {} is already occupied", _0)]
    IllegalMove(Action),

    /// An operation was called on a board it is not defined for.
    #[display("Precondition violated: {}", _0)]
    PreconditionViolation(&'static str),

    /// The game has already ended.
    #[display("Game is already over")]
    GameOver,

    /// Board notation could not be parsed.
    #[display("Malformed board: {}", _0)]
    MalformedBoard(String),

    /// Action notation could not be parsed.
    #[display("Malformed action: {:?} (expected \"row,col\")", _0)]
    MalformedAction(String),

    /// The board cannot arise from alternating legal play.
    #[display("Unreachable board: {}", _0)]
    UnreachableBoard(String),
}

impl std::error::Error for EngineError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_index_round_trips_on_board() {
        for index in 0..9 {
            let action = Action::from_index(index).unwrap();
            assert_eq!(action.index(), Some(index));
        }
        assert_eq!(Action::from_index(9), None);
        assert_eq!(Action::new(0, 3).index(), None);
    }

    #[test]
    fn test_ordering_is_row_major() {
        assert!(Action::new(0, 2) < Action::new(1, 0));
        assert!(Action::new(1, 0) < Action::new(1, 1));
    }

    #[test]
    fn test_parse_action() {
        assert_eq!("1,2".parse::<Action>().unwrap(), Action::new(1, 2));
        assert_eq!(" (0, 1) ".parse::<Action>().unwrap(), Action::new(0, 1));
        assert!(matches!(
            "12".parse::<Action>(),
            Err(EngineError::MalformedAction(_))
        ));
        assert!(matches!(
            "a,b".parse::<Action>(),
            Err(EngineError::MalformedAction(_))
        ));
    }

    #[test]
    fn test_error_messages() {
        let err = EngineError::IllegalMove(Action::new(1, 1));
        assert!(err.to_string().contains("occupied"));
        let err = EngineError::InvalidAction { row: 3, column: 0 };
        assert!(err.to_string().contains("(3, 0)"));
    }
}
