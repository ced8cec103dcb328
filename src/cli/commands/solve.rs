//! Solve command - compute the best move for a position

use anyhow::Result;
use clap::Parser;
use serde::Serialize;

use crate::{
    board::{Action, Board, Outcome, Player},
    search,
};

#[derive(Parser, Debug)]
#[command(about = "Compute the best move for a position")]
pub struct SolveArgs {
    /// Board as nine cells, row by row ('.' for empty, e.g. "XO..X....")
    #[arg(long, default_value = ".........")]
    pub state: String,

    /// Show every minimax-equivalent move instead of just the first
    #[arg(long)]
    pub all: bool,

    /// Emit the result as JSON
    #[arg(long)]
    pub json: bool,
}

#[derive(Serialize)]
struct Solution {
    state: String,
    to_move: Player,
    outcome: Outcome,
    value: i32,
    moves: Vec<Action>,
}

pub fn execute(args: SolveArgs) -> Result<()> {
    let board = Board::from_string(&args.state)?;
    let value = search::value(&board);

    let moves = if board.is_terminal() {
        Vec::new()
    } else if args.all {
        search::action_values(&board)?
            .into_iter()
            .filter(|&(_, v)| v == value)
            .map(|(action, _)| action)
            .collect()
    } else {
        vec![search::best_action(&board)?]
    };

    if args.json {
        let solution = Solution {
            state: board.encode(),
            to_move: board.to_move(),
            outcome: board.outcome(),
            value,
            moves,
        };
        println!("{}", serde_json::to_string_pretty(&solution)?);
        return Ok(());
    }

    println!("{board}");
    println!();
    match board.outcome() {
        Outcome::Win(player) => println!("Game over: {player} has won"),
        Outcome::Draw => println!("Game over: draw"),
        Outcome::InProgress => {
            println!("{} to move", board.to_move());
            println!("Best play ends in: {}", super::describe_value(value));
            if args.all {
                println!("Minimax-equivalent moves:");
                for action in &moves {
                    println!("  - {action}");
                }
            } else {
                println!("Best move: {}", moves[0]);
            }
        }
    }

    Ok(())
}
