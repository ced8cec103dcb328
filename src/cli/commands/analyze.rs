//! Analyze command - exhaustive statistics over the game tree

use std::{fs::File, io::Write, path::PathBuf};

use anyhow::Result;
use clap::Parser;

use crate::{
    board::{Action, Board},
    cli::output,
    search,
    tree::{self, OutcomeCounts},
};

#[derive(Parser, Debug)]
#[command(about = "Exhaustive statistics over the full game tree")]
pub struct AnalyzeArgs {
    /// Export the per-opening table as CSV
    #[arg(long)]
    pub export: Option<PathBuf>,
}

pub fn execute(args: AnalyzeArgs) -> Result<()> {
    output::print_section("State space");

    let spinner = output::create_spinner("Enumerating reachable states...");
    let states = tree::reachable_states();
    let terminal = states.iter().filter(|board| board.is_terminal()).count();
    spinner.finish_and_clear();

    output::print_kv("Reachable states", &output::format_number(states.len()));
    output::print_kv("Terminal states", &output::format_number(terminal));
    output::print_kv("Open states", &output::format_number(states.len() - terminal));

    output::print_section("Openings");

    let root = Board::new();
    let openings = root.legal_actions();
    let bar = output::create_progress(openings.len() as u64);

    let mut rows: Vec<(Action, OutcomeCounts, i32)> = Vec::new();
    for action in openings {
        let child = root.apply(action)?;
        rows.push((action, tree::count_outcomes(&child), search::value(&child)));
        bar.inc(1);
    }
    bar.finish_and_clear();

    println!(
        "  {:<8} {:>8} {:>8} {:>8} {:>8}  best play",
        "opening", "games", "X wins", "draws", "O wins"
    );
    for (action, counts, value) in &rows {
        println!(
            "  {:<8} {:>8} {:>7.1}% {:>7.1}% {:>7.1}%  {}",
            action.to_string(),
            output::format_number(counts.total()),
            percent(counts.x_wins, counts.total()),
            percent(counts.draws, counts.total()),
            percent(counts.o_wins, counts.total()),
            super::describe_value(*value),
        );
    }

    let totals = rows
        .iter()
        .fold(OutcomeCounts::default(), |acc, (_, counts, _)| {
            OutcomeCounts {
                x_wins: acc.x_wins + counts.x_wins,
                o_wins: acc.o_wins + counts.o_wins,
                draws: acc.draws + counts.draws,
            }
        });

    output::print_section("All play-outs");
    output::print_kv("Games", &output::format_number(totals.total()));
    output::print_kv("X wins", &output::format_number(totals.x_wins));
    output::print_kv("Draws", &output::format_number(totals.draws));
    output::print_kv("O wins", &output::format_number(totals.o_wins));

    if let Some(path) = args.export {
        let mut file = File::create(&path)?;
        writeln!(file, "row,col,games,x_wins,draws,o_wins,value")?;
        for (action, counts, value) in &rows {
            writeln!(
                file,
                "{},{},{},{},{},{},{}",
                action.row,
                action.col,
                counts.total(),
                counts.x_wins,
                counts.draws,
                counts.o_wins,
                value
            )?;
        }
        println!("\nOpening table exported to: {}", path.display());
    }

    Ok(())
}

fn percent(part: usize, total: usize) -> f64 {
    part as f64 / total as f64 * 100.0
}
