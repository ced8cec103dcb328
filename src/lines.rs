//! Winning line detection

use crate::board::{Cell, Player};

/// The eight winning lines on the 3x3 board, scanned rows first, then
/// columns, then diagonals
pub const WINNING_LINES: [[usize; 3]; 8] = [
    [0, 1, 2],
    [3, 4, 5],
    [6, 7, 8], // rows
    [0, 3, 6],
    [1, 4, 7],
    [2, 5, 8], // columns
    [0, 4, 8],
    [2, 4, 6], // diagonals
];

/// The first completed line's owner, or `None`.
///
/// A reachable board has at most one winner, so the scan order never
/// produces ambiguity.
pub fn winner(cells: &[Cell; 9]) -> Option<Player> {
    for line in &WINNING_LINES {
        let first = cells[line[0]];
        if first != Cell::Empty && line.iter().all(|&idx| cells[idx] == first) {
            return first.player();
        }
    }
    None
}

/// Check if a player has three in a row anywhere
pub fn has_won(cells: &[Cell; 9], player: Player) -> bool {
    let target = player.cell();
    WINNING_LINES
        .iter()
        .any(|line| line.iter().all(|&idx| cells[idx] == target))
}
