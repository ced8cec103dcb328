//! oxo CLI - perfect-play Tic-Tac-Toe engine
//!
//! This CLI provides a unified interface for:
//! - Solving positions (best move and minimax value)
//! - Playing interactive games against the engine
//! - Analyzing the full game tree
//! - Running engine-vs-random simulations

use anyhow::Result;
use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "oxo")]
#[command(version, about = "Perfect-play Tic-Tac-Toe engine", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Compute the best move for a position
    Solve(oxo::cli::commands::solve::SolveArgs),

    /// Play an interactive game against the engine
    Play(oxo::cli::commands::play::PlayArgs),

    /// Exhaustive statistics over the full game tree
    Analyze(oxo::cli::commands::analyze::AnalyzeArgs),

    /// Pit the engine against a random opponent
    Simulate(oxo::cli::commands::simulate::SimulateArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Solve(args) => oxo::cli::commands::solve::execute(args),
        Commands::Play(args) => oxo::cli::commands::play::execute(args),
        Commands::Analyze(args) => oxo::cli::commands::analyze::execute(args),
        Commands::Simulate(args) => oxo::cli::commands::simulate::execute(args),
    }
}
