//! CLI commands for the oxo engine

use clap::ValueEnum;

use crate::board::Player;

pub mod analyze;
pub mod play;
pub mod simulate;
pub mod solve;

/// Which mark the engine controls
#[derive(Copy, Clone, Debug, Eq, PartialEq, ValueEnum)]
pub enum EngineMark {
    X,
    O,
}

impl EngineMark {
    pub fn player(self) -> Player {
        match self {
            EngineMark::X => Player::X,
            EngineMark::O => Player::O,
        }
    }
}

/// Describe a minimax value from the maximizing player's perspective
pub(crate) fn describe_value(value: i32) -> &'static str {
    match value {
        v if v > 0 => "X wins",
        v if v < 0 => "O wins",
        _ => "draw",
    }
}
