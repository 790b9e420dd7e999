//! Line-oriented driver for the Connect 4 solver
//!
//! Reads one move string per line, solves the resulting position and prints
//! `<moves> <score> <nodes> <microseconds>` for it. Invalid lines are
//! reported on stderr and skipped.

use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::PathBuf;
use std::time::Instant;

use anyhow::{anyhow, Context, Result};
use clap::Parser;

use connect4_solver::{
    bitboard::Position,
    solver::Solver,
    transposition_table::{TranspositionTable, DEFAULT_TABLE_SIZE},
    WIDTH,
};

/// Solves Connect 4 positions given as move strings, one per line
#[derive(Parser, Debug)]
struct Cli {
    /// File of move strings to solve (defaults to standard input)
    file: Option<PathBuf>,

    /// Number of transposition table entries; must be a prime no smaller
    /// than 131072 to keep lookups sound
    #[arg(long, default_value_t = DEFAULT_TABLE_SIZE)]
    table_size: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let reader: Box<dyn BufRead> = match &cli.file {
        Some(path) => Box::new(BufReader::new(
            File::open(path).with_context(|| format!("cannot open {}", path.display()))?,
        )),
        None => Box::new(BufReader::new(io::stdin())),
    };

    for line in reader.lines() {
        let moves = line?;
        let moves = moves.trim();

        let position = match replay(moves) {
            Ok(position) => position,
            Err(err) => {
                eprintln!("{err}");
                continue;
            }
        };

        let mut solver =
            Solver::with_transposition_table(TranspositionTable::with_capacity(cli.table_size));
        let start = Instant::now();
        let score = solver.solve(position)?;
        let elapsed = start.elapsed();

        println!(
            "{moves} {score} {} {}",
            solver.node_count,
            elapsed.as_micros()
        );
    }

    Ok(())
}

/// Replays a move string from the empty board, rejecting out-of-range
/// columns, full columns and moves that would end the game
fn replay(moves: &str) -> Result<Position> {
    let mut position = Position::new();

    for (index, column_char) in moves.chars().enumerate() {
        let column = match column_char.to_digit(10).map(|c| c as usize) {
            Some(column @ 1..=WIDTH) => column - 1,
            _ => {
                return Err(anyhow!(
                    "Move {index}: column '{column_char}' out of range"
                ))
            }
        };
        if !position.can_play(column) {
            return Err(anyhow!(
                "Move {index}: cannot play in column {column_char}:\n{position}"
            ));
        }
        if position.is_winning_move(column) {
            return Err(anyhow!(
                "Move {index}: cannot play in column {column_char}, as it would end the game:\n{position}"
            ));
        }
        position = position.play(column);
    }
    Ok(position)
}
