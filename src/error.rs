//! Error types for the oxo crate

use thiserror::Error;

/// Main error type for the oxo crate
#[derive(Error, Debug)]
#[non_exhaustive]
pub enum Error {
    #[error("illegal move: cell ({row}, {col}) is already occupied")]
    CellOccupied { row: usize, col: usize },

    #[error("cell ({row}, {col}) is off the board (rows and columns run 0-2)")]
    CellOutOfBounds { row: usize, col: usize },

    #[error("game already over")]
    GameOver,

    #[error("cannot pick a move: the game is already over")]
    SearchAfterGameOver,

    #[error("score is undefined while the game is still in progress")]
    ScoreInProgress,

    #[error("board string too short: expected {expected} cells, got {got} in '{context}'")]
    InvalidBoardLength {
        expected: usize,
        got: usize,
        context: String,
    },

    #[error("invalid character '{character}' at position {position} in '{context}'")]
    InvalidCellCharacter {
        character: char,
        position: usize,
        context: String,
    },

    #[error("invalid mark counts: X={x_count}, O={o_count} (must be equal or X ahead by 1)")]
    InvalidMarkCounts { x_count: usize, o_count: usize },

    #[error("impossible board '{context}': {reason}")]
    ImpossibleBoard { context: String, reason: String },
}

/// Convenience type alias for Results using the crate's Error type
pub type Result<T> = std::result::Result<T, Error>;
