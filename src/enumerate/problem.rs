//! One N-queens enumeration run

use super::{Solution, SolutionValidator};
use crate::config::Settings;
use crate::sat::encoder::EncodingStatistics;
use crate::sat::QueensEncoder;
use anyhow::{Context, Result};
use std::time::{Duration, Instant};

/// A single puzzle-size run: one fresh solver context, one enumeration loop.
///
/// Runs share nothing, so independent sizes can execute on separate workers.
pub struct QueensProblem {
    board_size: usize,
    max_solutions: usize,
    encoder: QueensEncoder,
    validator: SolutionValidator,
}

/// The outcome of one completed run
#[derive(Debug, Clone)]
pub struct RunReport {
    pub board_size: usize,
    pub solutions: Vec<Solution>,
    pub total_time: Duration,
}

impl QueensProblem {
    /// Create a run for one board size
    pub fn new(settings: &Settings, board_size: usize) -> Result<Self> {
        if board_size == 0 {
            anyhow::bail!("Board size must be at least 1");
        }

        let encoder = QueensEncoder::new(board_size, settings.encoding.symmetry_breaking);

        Ok(Self {
            board_size,
            max_solutions: settings.solver.max_solutions,
            encoder,
            validator: SolutionValidator::new(),
        })
    }

    /// Enumerate all solutions for this board size.
    ///
    /// Every model coming back from the solver is independently re-checked;
    /// a model that fails validation points at an encoding bug and aborts
    /// the run rather than being dropped silently.
    pub fn solve(&mut self) -> Result<RunReport> {
        let start_time = Instant::now();

        let models = self
            .encoder
            .enumerate(self.max_solutions)
            .with_context(|| format!("enumeration failed for n = {}", self.board_size))?;

        let mut solutions = Vec::with_capacity(models.len());
        for (i, model) in models.into_iter().enumerate() {
            let index = i + 1;

            let result = self.validator.validate(&model.positions, self.board_size);
            if !result.is_valid {
                anyhow::bail!(
                    "solution {} for n = {} failed validation: {}",
                    index,
                    self.board_size,
                    result.error_message.unwrap_or_else(|| "unknown".to_string())
                );
            }

            solutions.push(Solution::new(
                self.board_size,
                index,
                model.positions,
                model.solve_time,
            ));
        }

        Ok(RunReport {
            board_size: self.board_size,
            solutions,
            total_time: start_time.elapsed(),
        })
    }

    /// Board size of this run
    pub fn board_size(&self) -> usize {
        self.board_size
    }

    /// Get encoding statistics
    pub fn encoding_statistics(&self) -> EncodingStatistics {
        self.encoder.statistics()
    }
}

impl std::fmt::Debug for QueensProblem {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueensProblem")
            .field("board_size", &self.board_size)
            .field("max_solutions", &self.max_solutions)
            .finish()
    }
}

impl RunReport {
    /// Number of solutions found
    pub fn solution_count(&self) -> usize {
        self.solutions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    fn run(board_size: usize, symmetry_breaking: bool) -> RunReport {
        let mut settings = Settings::default();
        settings.encoding.symmetry_breaking = symmetry_breaking;
        let mut problem = QueensProblem::new(&settings, board_size).unwrap();
        problem.solve().unwrap()
    }

    #[test]
    fn test_rejects_zero_board_size() {
        let settings = Settings::default();
        assert!(QueensProblem::new(&settings, 0).is_err());
    }

    #[test]
    fn test_classical_counts_small_boards() {
        assert_eq!(run(1, true).solution_count(), 1);
        assert_eq!(run(2, true).solution_count(), 0);
        assert_eq!(run(3, true).solution_count(), 0);
        assert_eq!(run(4, true).solution_count(), 2);
        assert_eq!(run(5, true).solution_count(), 10);
        assert_eq!(run(6, true).solution_count(), 4);
    }

    #[test]
    fn test_classical_count_n8() {
        assert_eq!(run(8, true).solution_count(), 92);
    }

    #[test]
    fn test_trivial_board_placement() {
        let report = run(1, true);
        assert_eq!(report.solutions[0].positions.len(), 1);
        assert_eq!(report.solutions[0].positions[0].col, 1);
        assert_eq!(report.solutions[0].positions[0].row, 1);
    }

    #[test]
    fn test_without_symmetry_breaking_labelings_multiply() {
        // Each of the 2 physical 4-queens arrangements admits 4! labelings
        assert_eq!(run(4, false).solution_count(), 48);
    }

    #[test]
    fn test_all_reported_placements_distinct() {
        let report = run(6, true);
        let distinct: HashSet<Vec<_>> = report
            .solutions
            .iter()
            .map(|s| s.canonical_positions())
            .collect();
        assert_eq!(distinct.len(), report.solution_count());
    }

    #[test]
    fn test_max_solutions_cap() {
        let mut settings = Settings::default();
        settings.solver.max_solutions = 5;
        let mut problem = QueensProblem::new(&settings, 8).unwrap();
        let report = problem.solve().unwrap();
        assert_eq!(report.solution_count(), 5);
    }
}
