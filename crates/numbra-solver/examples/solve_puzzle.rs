//! Example demonstrating puzzle solving from the command line.
//!
//! The puzzle is given as a grid string: digits 1-9 fill cells, and `.`,
//! `_`, or `0` mark empty cells. Whitespace is ignored, so both a single
//! 81-character line and a 9-line layout work.
//!
//! # Usage
//!
//! ```sh
//! cargo run --example solve_puzzle -- \
//!     "53__7____6__195____98____6_8___6___34__8_3__17___2___6_6____28____419__5____8__79"
//! ```
//!
//! Collect more solutions for an under-constrained puzzle:
//!
//! ```sh
//! cargo run --example solve_puzzle -- --solution-limit 10 "..."
//! ```
//!
//! Set `RUST_LOG=debug` (or `trace`) to follow deduction rounds and branch
//! decisions.

use std::process;

use clap::Parser;
use numbra_core::Grid;
use numbra_solver::{Outcome, Solver};

#[derive(Debug, Parser)]
#[command(author, version, about)]
struct Args {
    /// Puzzle grid: 81 cells, digits 1-9 or `.`/`_`/`0` for empty.
    puzzle: String,

    /// Maximum number of solutions to collect before stopping.
    #[arg(long, value_name = "N", default_value_t = Solver::DEFAULT_SOLUTION_LIMIT)]
    solution_limit: usize,
}

fn main() {
    env_logger::init();
    let args = Args::parse();

    let grid = match args.puzzle.parse::<Grid>() {
        Ok(grid) => grid,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    };

    let solver = Solver::new().with_solution_limit(args.solution_limit);
    let outcome = match solver.solve(&grid) {
        Ok(outcome) => outcome,
        Err(e) => {
            eprintln!("error: {e}");
            process::exit(2);
        }
    };

    match outcome {
        Outcome::Unique(solution) => {
            println!("unique solution:\n{solution}");
        }
        Outcome::Multiple(solutions) => {
            println!("{} solutions found:", solutions.len());
            for (i, solution) in (1..).zip(&solutions) {
                println!("--- solution {i} ---\n{solution}");
            }
        }
        Outcome::Unsolvable(stalled) => {
            println!("no solution; furthest deduced state:\n{stalled}");
            process::exit(1);
        }
    }
}
