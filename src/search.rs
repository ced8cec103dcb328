//! Minimax search with alpha-beta pruning.
//!
//! The game tree is small enough to search exhaustively: no depth limit,
//! no heuristic evaluation, no transposition table. X maximizes the
//! terminal score, O minimizes it.

use crate::{
    board::{Action, Board, Player},
    error::{Error, Result},
};

/// Pick the best action for the player to move.
///
/// Actions are explored in row-major order and ties are broken by keeping
/// the first action whose value strictly beats the best seen so far, so
/// the result is deterministic.
///
/// # Errors
///
/// Returns an error if the game is already over.
pub fn best_action(board: &Board) -> Result<Action> {
    if board.is_terminal() {
        return Err(Error::SearchAfterGameOver);
    }

    let mut alpha = i32::MIN;
    let mut beta = i32::MAX;
    let mut best: Option<(Action, i32)> = None;

    match board.to_move() {
        Player::X => {
            for action in board.legal_actions() {
                let child = board.apply(action)?;
                let value = min_value(&child, alpha, beta);
                if best.is_none_or(|(_, v)| value > v) {
                    best = Some((action, value));
                }
                alpha = alpha.max(value);
            }
        }
        Player::O => {
            for action in board.legal_actions() {
                let child = board.apply(action)?;
                let value = max_value(&child, alpha, beta);
                if best.is_none_or(|(_, v)| value < v) {
                    best = Some((action, value));
                }
                beta = beta.min(value);
            }
        }
    }

    let (action, _) = best.expect("a board that is not over has at least one legal action");
    Ok(action)
}

/// Exact minimax value of a position: +1 when X forces a win, -1 when O
/// does, 0 when best play from both sides ends in a draw.
pub fn value(board: &Board) -> i32 {
    match board.to_move() {
        Player::X => max_value(board, i32::MIN, i32::MAX),
        Player::O => min_value(board, i32::MIN, i32::MAX),
    }
}

/// Exact minimax value of every legal action, in row-major order.
///
/// Each child is searched with a full window so the values are exact,
/// not pruning bounds; this is what the CLI uses to list all
/// minimax-equivalent moves.
///
/// # Errors
///
/// Returns an error if the game is already over.
pub fn action_values(board: &Board) -> Result<Vec<(Action, i32)>> {
    if board.is_terminal() {
        return Err(Error::SearchAfterGameOver);
    }

    let mut values = Vec::new();
    for action in board.legal_actions() {
        let child = board.apply(action)?;
        values.push((action, value(&child)));
    }
    Ok(values)
}

fn max_value(board: &Board, mut alpha: i32, beta: i32) -> i32 {
    if let Ok(score) = board.score() {
        return score;
    }

    let mut best = i32::MIN;
    for action in board.legal_actions() {
        let child = board
            .apply(action)
            .expect("actions from legal_actions always apply cleanly");
        best = best.max(min_value(&child, alpha, beta));
        alpha = alpha.max(best);
        if best >= beta {
            return best;
        }
    }
    best
}

fn min_value(board: &Board, alpha: i32, mut beta: i32) -> i32 {
    if let Ok(score) = board.score() {
        return score;
    }

    let mut best = i32::MAX;
    for action in board.legal_actions() {
        let child = board
            .apply(action)
            .expect("actions from legal_actions always apply cleanly");
        best = best.min(max_value(&child, alpha, beta));
        beta = beta.min(best);
        if best <= alpha {
            return best;
        }
    }
    best
}
