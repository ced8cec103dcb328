//! High-level game management

use serde::{Deserialize, Serialize};

use crate::{
    board::{Action, Board, Outcome, Player},
    error::{Error, Result},
};

/// A move in a played game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Move {
    pub action: Action,
    pub player: Player,
}

/// A game in progress: the current board plus the moves that led to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Game {
    board: Board,
    moves: Vec<Move>,
}

impl Game {
    /// Start a new game from the empty board
    pub fn new() -> Self {
        Game {
            board: Board::new(),
            moves: Vec::new(),
        }
    }

    /// Play a move for the player whose turn it is.
    ///
    /// # Errors
    ///
    /// Returns an error if the game is already over or the action is
    /// illegal on the current board.
    pub fn play(&mut self, action: Action) -> Result<()> {
        if self.board.is_terminal() {
            return Err(Error::GameOver);
        }

        let player = self.board.to_move();
        self.board = self.board.apply(action)?;
        self.moves.push(Move { action, player });
        Ok(())
    }

    /// The current board
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The moves played so far, in order
    pub fn moves(&self) -> &[Move] {
        &self.moves
    }

    /// Result of the game so far
    pub fn outcome(&self) -> Outcome {
        self.board.outcome()
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
    fn test_play_records_alternating_moves() {
        let mut game = Game::new();
        game.play(Action::new(1, 1)).unwrap();
        game.play(Action::new(0, 0)).unwrap();

        assert_eq!(game.moves().len(), 2);
        assert_eq!(game.moves()[0].player, Player::X);
        assert_eq!(game.moves()[1].player, Player::O);
        assert_eq!(game.outcome(), Outcome::InProgress);
    }

    #[test]
    fn test_play_rejects_illegal_move() {
        let mut game = Game::new();
        game.play(Action::new(1, 1)).unwrap();

        assert!(game.play(Action::new(1, 1)).is_err());
        assert_eq!(game.moves().len(), 1, "failed move must not be recorded");
    }

    #[test]
    fn test_play_rejects_moves_after_game_over() {
        let mut game = Game::new();
        // X takes the top row
        for action in [
            Action::new(0, 0),
            Action::new(1, 0),
            Action::new(0, 1),
            Action::new(1, 1),
            Action::new(0, 2),
        ] {
            game.play(action).unwrap();
        }

        assert_eq!(game.outcome(), Outcome::Win(Player::X));
        assert!(matches!(
            game.play(Action::new(2, 2)),
            Err(Error::GameOver)
        ));
    }

    #[test]
    fn test_serde_roundtrip() {
        let mut game = Game::new();
        game.play(Action::new(1, 1)).unwrap();
        game.play(Action::new(0, 2)).unwrap();

        let json = serde_json::to_string(&game).unwrap();
        let restored: Game = serde_json::from_str(&json).unwrap();
        assert_eq!(restored.board(), game.board());
        assert_eq!(restored.moves(), game.moves());
    }
}
