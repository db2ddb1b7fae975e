//! A game record: the current board plus the actions that produced it.

use super::action::{Action, EngineError};
use super::rules::{self, initial_state, outcome};
use super::search::minimax;
use super::types::{Board, Outcome, Player};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument};

/// A game in progress or finished, with its move history.
///
/// Only boards reached by legal play from the empty board are ever stored.
/// Deserializing replays the recorded history and rejects records whose
/// board disagrees with it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "GameRecord")]
pub struct Game {
    board: Board,
    history: Vec<Action>,
}

/// Serialized form of a [`Game`], checked before it becomes one.
#[derive(Deserialize)]
struct GameRecord {
    board: Board,
    history: Vec<Action>,
}

impl TryFrom<GameRecord> for Game {
    type Error = EngineError;

    fn try_from(record: GameRecord) -> Result<Self, Self::Error> {
        let game = Self::replay(&record.history)?;
        if game.board != record.board {
            return Err(EngineError::UnreachableBoard(
                "board does not match the recorded history".to_string(),
            ));
        }
        Ok(game)
    }
}

impl Game {
    /// Creates a new game on the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            board: initial_state(),
            history: Vec::new(),
        }
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Returns the actions played so far.
    pub fn history(&self) -> &[Action] {
        &self.history
    }

    /// Returns the player to move.
    pub fn to_move(&self) -> Player {
        rules::player(&self.board)
    }

    /// Returns the current outcome.
    pub fn outcome(&self) -> Outcome {
        outcome(&self.board)
    }

    /// Returns true once the game has ended.
    pub fn is_over(&self) -> bool {
        rules::terminal(&self.board)
    }

    /// Plays an action for the player to move.
    ///
    /// Returns the outcome after the move. Fails with
    /// [`EngineError::GameOver`] once the game has ended, and with the
    /// errors of [`rules::result`] for bad actions.
    #[instrument(skip(self), fields(to_move = %self.to_move()))]
    pub fn play(&mut self, action: Action) -> Result<Outcome, EngineError> {
        if self.is_over() {
            return Err(EngineError::GameOver);
        }

        let next = rules::result(&self.board, action)?;

        #[cfg(debug_assertions)]
        next.validate()?;

        self.board = next;
        self.history.push(action);

        let outcome = self.outcome();
        if outcome.is_over() {
            info!(%outcome, moves = self.history.len(), "Game finished");
        } else {
            debug!(%action, "Move applied");
        }
        Ok(outcome)
    }

    /// Returns the optimal action for the player to move.
    #[instrument(skip(self))]
    pub fn best_move(&self) -> Option<Action> {
        minimax(&self.board)
    }

    /// Replays actions from the empty board.
    #[instrument]
    pub fn replay(actions: &[Action]) -> Result<Self, EngineError> {
        let mut game = Self::new();
        for action in actions {
            game.play(*action)?;
        }
        Ok(game)
    }
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_game() {
        let game = Game::new();
        assert_eq!(game.to_move(), Player::X);
        assert_eq!(game.outcome(), Outcome::InProgress);
        assert!(game.history().is_empty());
    }

    #[test]
    fn test_play_records_history() {
        let mut game = Game::new();
        game.play(Action::new(1, 1)).unwrap();
        assert_eq!(game.history(), &[Action::new(1, 1)]);
        assert_eq!(game.to_move(), Player::O);
    }

    #[test]
    fn test_rejected_move_leaves_game_unchanged() {
        let mut game = Game::new();
        game.play(Action::new(1, 1)).unwrap();
        let before = game.clone();
        assert_eq!(
            game.play(Action::new(1, 1)),
            Err(EngineError::IllegalMove(Action::new(1, 1)))
        );
        assert_eq!(game, before);
    }

    #[test]
    fn test_play_after_win_is_rejected() {
        let moves = [
            Action::new(0, 0),
            Action::new(1, 0),
            Action::new(0, 1),
            Action::new(1, 1),
            Action::new(0, 2),
        ];
        let mut game = Game::replay(&moves).unwrap();
        assert_eq!(game.outcome(), Outcome::Winner(Player::X));
        assert_eq!(game.play(Action::new(2, 2)), Err(EngineError::GameOver));
        assert_eq!(game.best_move(), None);
    }
}
