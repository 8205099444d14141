//! N-Queens SAT Enumerator
//!
//! This library enumerates all solutions of the N-queens puzzle by encoding
//! queen placements as SAT constraints and repeatedly re-solving with
//! blocking clauses until the constraint set becomes unsatisfiable.

pub mod config;
pub mod enumerate;
pub mod queens;
pub mod sat;
pub mod utils;

pub use config::Settings;
pub use enumerate::{QueensProblem, RunReport, Solution};

use anyhow::Result;
use rayon::prelude::*;

/// Enumerate every configured board size, one independent run per size.
///
/// Runs share no state and execute on the rayon worker pool; reports come
/// back in the configured size order.
pub fn enumerate_all(settings: &Settings) -> Result<Vec<RunReport>> {
    settings.validate()?;

    settings
        .puzzle
        .board_sizes
        .par_iter()
        .map(|&board_size| {
            let mut problem = QueensProblem::new(settings, board_size)?;
            problem.solve()
        })
        .collect()
}
