//! Simulate command - pit the engine against a random opponent

use anyhow::Result;
use clap::Parser;
use rand::{SeedableRng, prelude::IndexedRandom, rngs::StdRng};

use super::EngineMark;
use crate::{board::Outcome, cli::output, game::Game, search};

#[derive(Parser, Debug)]
#[command(about = "Pit the engine against a random opponent")]
pub struct SimulateArgs {
    /// Number of games to play
    #[arg(long, default_value_t = 1000)]
    pub games: usize,

    /// Mark the engine plays ('x' moves first)
    #[arg(long, value_enum, default_value = "x")]
    pub engine: EngineMark,

    /// Seed for the random opponent
    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn execute(args: SimulateArgs) -> Result<()> {
    let engine = args.engine.player();
    let mut rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::seed_from_u64(rand::random()),
    };

    let mut wins = 0usize;
    let mut draws = 0usize;
    let mut losses = 0usize;

    let bar = output::create_progress(args.games as u64);
    for _ in 0..args.games {
        let mut game = Game::new();
        while !game.board().is_terminal() {
            let action = if game.board().to_move() == engine {
                search::best_action(game.board())?
            } else {
                let legal = game.board().legal_actions();
                *legal
                    .choose(&mut rng)
                    .expect("an unfinished game has a legal action")
            };
            game.play(action)?;
        }

        match game.outcome() {
            Outcome::Win(player) if player == engine => wins += 1,
            Outcome::Win(_) => losses += 1,
            Outcome::Draw => draws += 1,
            Outcome::InProgress => {}
        }
        bar.inc(1);
    }
    bar.finish_and_clear();

    output::print_section(&format!("Engine as {engine} vs random opponent"));
    output::print_kv("Games", &output::format_number(args.games));
    output::print_kv("Engine wins", &output::format_number(wins));
    output::print_kv("Draws", &output::format_number(draws));
    output::print_kv("Engine losses", &output::format_number(losses));

    Ok(())
}
