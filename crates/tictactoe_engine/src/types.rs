//! Core domain types for tic-tac-toe.

use super::action::{Action, EngineError};
use super::invariants::{describe, BoardInvariants, InvariantSet};
use super::position::Position;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use tracing::instrument;

/// Player in the game.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[strum(ascii_case_insensitive)]
pub enum Player {
    /// Player X (goes first).
    #[serde(alias = "x")]
    X,
    /// Player O (goes second).
    #[serde(alias = "o")]
    O,
}

impl Player {
    /// Returns the opponent player.
    pub fn opponent(self) -> Self {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }
}

/// A cell on the tic-tac-toe board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    /// Empty cell.
    Empty,
    /// Cell holding a player's mark.
    Occupied(Player),
}

impl Cell {
    /// Returns the player whose mark is in this cell, if any.
    pub fn mark(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::Occupied(player) => Some(player),
        }
    }

    /// Character used by the board notation.
    pub fn symbol(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::Occupied(Player::X) => 'X',
            Cell::Occupied(Player::O) => 'O',
        }
    }

    fn from_symbol(c: char) -> Option<Self> {
        match c {
            'X' | 'x' => Some(Cell::Occupied(Player::X)),
            'O' | 'o' => Some(Cell::Occupied(Player::O)),
            '.' | '_' | '-' => Some(Cell::Empty),
            _ => None,
        }
    }
}

/// Immutable 3x3 tic-tac-toe board.
///
/// A board is a plain value: applying a move produces a new board and leaves
/// the original untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "[Cell; 9]", into = "[Cell; 9]")]
pub struct Board {
    /// Cells in row-major order (0-8).
    cells: [Cell; 9],
}

impl Board {
    /// Creates a new empty board.
    pub fn new() -> Self {
        Self {
            cells: [Cell::Empty; 9],
        }
    }

    /// Builds a board from rows without checking that it is reachable.
    ///
    /// Use [`Board::validate`] or parse the board from text when the input
    /// is untrusted.
    pub fn from_rows(rows: [[Cell; 3]; 3]) -> Self {
        let mut cells = [Cell::Empty; 9];
        for (row_index, row) in rows.iter().enumerate() {
            cells[row_index * 3..row_index * 3 + 3].copy_from_slice(row);
        }
        Self { cells }
    }

    /// Returns the cell targeted by an action, or `None` if it is off the grid.
    pub fn cell(&self, action: Action) -> Option<Cell> {
        action.index().map(|index| self.cells[index])
    }

    /// Returns the cell at a named position.
    pub fn at(&self, position: Position) -> Cell {
        self.cells[position.to_index()]
    }

    /// Checks if the cell at a position is empty.
    pub fn is_empty(&self, position: Position) -> bool {
        self.at(position) == Cell::Empty
    }

    /// Returns all cells in row-major order.
    pub fn cells(&self) -> &[Cell; 9] {
        &self.cells
    }

    /// Returns the board as three rows.
    pub fn rows(&self) -> [[Cell; 3]; 3] {
        let c = &self.cells;
        [[c[0], c[1], c[2]], [c[3], c[4], c[5]], [c[6], c[7], c[8]]]
    }

    /// Counts the marks a player has on the board.
    pub fn count(&self, player: Player) -> usize {
        self.cells
            .iter()
            .filter(|cell| **cell == Cell::Occupied(player))
            .count()
    }

    /// Checks that the board could arise from alternating legal play.
    #[instrument(level = "trace")]
    pub fn validate(&self) -> Result<(), EngineError> {
        BoardInvariants::check_all(self)
            .map_err(|violations| EngineError::UnreachableBoard(describe(&violations)))
    }

    /// Returns a copy of this board with `player` marked at `index`.
    pub(crate) fn with_mark(&self, index: usize, player: Player) -> Self {
        let mut cells = self.cells;
        cells[index] = Cell::Occupied(player);
        Self { cells }
    }
}

/// Deserialized boards must be reachable, like parsed ones.
impl TryFrom<[Cell; 9]> for Board {
    type Error = EngineError;

    fn try_from(cells: [Cell; 9]) -> Result<Self, Self::Error> {
        let board = Self { cells };
        board.validate()?;
        Ok(board)
    }
}

impl From<Board> for [Cell; 9] {
    fn from(board: Board) -> Self {
        board.cells
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row_index, row) in self.rows().iter().enumerate() {
            if row_index > 0 {
                writeln!(f, "-+-+-")?;
            }
            writeln!(
                f,
                "{}|{}|{}",
                row[0].symbol(),
                row[1].symbol(),
                row[2].symbol()
            )?;
        }
        Ok(())
    }
}

/// Parses boards such as `"XX./OO./..."`.
///
/// `/`, `|` and whitespace separate cells and are ignored. The parsed board
/// must be reachable from the empty board.
impl FromStr for Board {
    type Err = EngineError;

    #[instrument(level = "trace")]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut cells = [Cell::Empty; 9];
        let mut count = 0;
        for c in s.chars() {
            if c == '/' || c == '|' || c.is_whitespace() {
                continue;
            }
            let cell = Cell::from_symbol(c).ok_or_else(|| {
                EngineError::MalformedBoard(format!("unexpected character {:?}", c))
            })?;
            if count == 9 {
                return Err(EngineError::MalformedBoard(
                    "more than 9 cells".to_string(),
                ));
            }
            cells[count] = cell;
            count += 1;
        }
        if count != 9 {
            return Err(EngineError::MalformedBoard(format!(
                "expected 9 cells, found {}",
                count
            )));
        }

        Self::try_from(cells)
    }
}

/// Derived state of a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// A player owns a complete line.
    Winner(Player),
    /// The board is full with no winner.
    Draw,
    /// No winner yet and at least one empty cell.
    InProgress,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Winner(player) => Some(*player),
            Outcome::Draw | Outcome::InProgress => None,
        }
    }

    /// Returns true if the game was a draw.
    pub fn is_draw(&self) -> bool {
        matches!(self, Outcome::Draw)
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        !matches!(self, Outcome::InProgress)
    }
}

impl fmt::Display for Outcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Outcome::Winner(player) => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
            Outcome::InProgress => write!(f, "In progress"),
        }
    }
}
