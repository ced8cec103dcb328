//! Play command - interactive game against the engine

use std::io::{self, BufRead, Write};

use anyhow::Result;
use clap::Parser;

use super::EngineMark;
use crate::{
    board::{Action, Outcome},
    game::Game,
    search,
};

#[derive(Parser, Debug)]
#[command(about = "Play an interactive game against the engine")]
pub struct PlayArgs {
    /// Mark the engine plays ('x' moves first)
    #[arg(long, value_enum, default_value = "o")]
    pub engine: EngineMark,
}

pub fn execute(args: PlayArgs) -> Result<()> {
    let engine = args.engine.player();
    let mut game = Game::new();
    let stdin = io::stdin();
    let mut input = stdin.lock().lines();

    println!(
        "You are {}, the engine is {engine}. Enter moves as 'row col' (0-2).",
        engine.opponent()
    );

    while !game.board().is_terminal() {
        println!("\n{}", game.board());

        if game.board().to_move() == engine {
            let action = search::best_action(game.board())?;
            game.play(action)?;
            println!("Engine plays {action}");
            continue;
        }

        print!("Your move: ");
        io::stdout().flush()?;
        let Some(line) = input.next() else {
            println!("\nInput closed, leaving the game unfinished.");
            return Ok(());
        };
        let Some(action) = parse_action(&line?) else {
            println!("Could not read that as 'row col' (0-2), try again.");
            continue;
        };
        if let Err(err) = game.play(action) {
            println!("{err}");
        }
    }

    println!("\n{}", game.board());
    match game.outcome() {
        Outcome::Win(player) if player == engine => println!("The engine wins."),
        Outcome::Win(_) => println!("You win."),
        Outcome::Draw => println!("Draw."),
        Outcome::InProgress => {}
    }

    Ok(())
}

fn parse_action(line: &str) -> Option<Action> {
    let mut parts = line.split_whitespace();
    let row = parts.next()?.parse().ok()?;
    let col = parts.next()?.parse().ok()?;
    if parts.next().is_some() {
        return None;
    }
    Some(Action::new(row, col))
}
