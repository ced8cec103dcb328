//! Exhaustive enumeration of the reachable game tree

use std::collections::{HashSet, VecDeque};

use serde::Serialize;

use crate::board::{Board, Outcome, Player};

/// Play-out counts for the subtree below a position.
///
/// Every distinct move sequence is counted separately, so these are game
/// counts, not board counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct OutcomeCounts {
    pub x_wins: usize,
    pub o_wins: usize,
    pub draws: usize,
}

impl OutcomeCounts {
    pub fn total(&self) -> usize {
        self.x_wins + self.o_wins + self.draws
    }
}

/// Count every play-out below a position
pub fn count_outcomes(board: &Board) -> OutcomeCounts {
    let mut counts = OutcomeCounts::default();
    visit(board, &mut counts);
    counts
}

fn visit(board: &Board, counts: &mut OutcomeCounts) {
    match board.outcome() {
        Outcome::Win(Player::X) => counts.x_wins += 1,
        Outcome::Win(Player::O) => counts.o_wins += 1,
        Outcome::Draw => counts.draws += 1,
        Outcome::InProgress => {
            for action in board.legal_actions() {
                if let Ok(next) = board.apply(action) {
                    visit(&next, counts);
                }
            }
        }
    }
}

/// All distinct boards reachable from the start position, terminals
/// included, in breadth-first order
pub fn reachable_states() -> Vec<Board> {
    let mut states = Vec::new();
    let mut visited = HashSet::new();
    let mut queue = VecDeque::new();

    let root = Board::new();
    visited.insert(root.encode());
    queue.push_back(root);

    while let Some(board) = queue.pop_front() {
        states.push(board);

        if board.is_terminal() {
            continue;
        }

        for action in board.legal_actions() {
            let Ok(next) = board.apply(action) else {
                continue;
            };
            if visited.insert(next.encode()) {
                queue.push_back(next);
            }
        }
    }

    states
}
