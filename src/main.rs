//! King Slide Puzzle Solver
//!
//! Solves a sliding puzzle played on a 2x3 board with chess pieces: one
//! King, two Bishops and two Rooks around a single empty square. Each move
//! slides a piece one step into the empty square (King any direction, Rook
//! orthogonal, Bishop diagonal); the goal is a fixed target arrangement.
//! The solver explores the position graph breadth-first and reports a
//! shortest move sequence.

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Parser, Subcommand};

use kingslide::state::{format_replay, PuzzleState};
use kingslide::{persistence, solver};

/// Solves the 2x3 chess-piece sliding puzzle.
#[derive(Parser)]
#[command(name = "kingslide")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Directory for solution.txt and solution.bin.
    #[arg(long, default_value = ".")]
    dir: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Solve the puzzle and save the move sequence to disk.
    Solve,
    /// Print the step-by-step replay of the saved solution.
    Replay,
    /// Show the number of moves in the saved solution.
    Count,
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    match cli.command {
        Some(Command::Solve) => run_solve(&cli.dir, false),
        Some(Command::Replay) => run_replay(&cli.dir),
        Some(Command::Count) => run_count(&cli.dir),
        None => {
            // default: solve and show the replay
            run_solve(&cli.dir, true)
        }
    }
}

/// Solves the puzzle, saves the result, and optionally prints the replay.
fn run_solve(dir: &Path, print_replay: bool) -> ExitCode {
    let Some(solution) = solver::solve(PuzzleState::initial()) else {
        eprintln!("No solution: the reachable state space was exhausted.");
        return ExitCode::FAILURE;
    };

    println!(
        "Solved in {} moves ({} states expanded, {} generated).",
        solution.moves.len(),
        solution.expanded,
        solution.generated
    );

    if let Err(error) = persistence::save(dir, &solution.moves) {
        eprintln!("Failed to save solution: {error}");
        return ExitCode::FAILURE;
    }
    println!("Wrote solution.txt and solution.bin");

    if print_replay {
        println!();
        print!("{}", format_replay(&solution.moves));
    }

    ExitCode::SUCCESS
}

/// Loads the saved solution and prints it step by step.
fn run_replay(dir: &Path) -> ExitCode {
    match persistence::load(dir) {
        Ok(moves) => {
            print!("{}", format_replay(&moves));
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Cannot load solution: {error}. Run 'kingslide solve' first.");
            ExitCode::FAILURE
        }
    }
}

/// Prints the saved move count.
fn run_count(dir: &Path) -> ExitCode {
    match persistence::count(dir) {
        Ok(count) => {
            println!("{count} moves");
            ExitCode::SUCCESS
        }
        Err(error) => {
            eprintln!("Cannot read solution: {error}. Run 'kingslide solve' first.");
            ExitCode::FAILURE
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shortest_solution_replay_snapshot() {
        let solution = solver::solve(PuzzleState::initial()).expect("the puzzle is solvable");
        let replay = format_replay(&solution.moves);

        insta::assert_snapshot!("shortest_solution_replay", replay);
    }

    #[test]
    fn test_solution_move_count() {
        let solution = solver::solve(PuzzleState::initial()).expect("the puzzle is solvable");
        assert_eq!(solution.moves.len(), 11);
    }
}
