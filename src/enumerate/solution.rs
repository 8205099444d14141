//! Solution representation for enumerated queen placements

use crate::queens::{Board, Position};
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

/// One enumerated solution: the queens' positions plus discovery metadata
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Solution {
    pub board_size: usize,
    /// 1-based discovery order within the run
    pub index: usize,
    pub positions: Vec<Position>,
    pub solve_time: Duration,
}

impl Solution {
    /// Create a new solution
    pub fn new(
        board_size: usize,
        index: usize,
        positions: Vec<Position>,
        solve_time: Duration,
    ) -> Self {
        Self {
            board_size,
            index,
            positions,
            solve_time,
        }
    }

    /// Derive the printable board for this placement
    pub fn board(&self) -> Result<Board> {
        Board::from_positions(&self.positions, self.board_size)
            .with_context(|| format!("solution {} is not renderable", self.index))
    }

    /// The placement in algebraic notation, one square per queen
    pub fn algebraic_squares(&self) -> Result<Vec<String>> {
        self.positions
            .iter()
            .map(|p| {
                p.algebraic()
                    .with_context(|| format!("solution {} has an unnameable column", self.index))
            })
            .collect()
    }

    /// The placement as a canonical (sorted) set of positions, for
    /// distinctness comparisons across solutions
    pub fn canonical_positions(&self) -> Vec<Position> {
        let mut sorted = self.positions.clone();
        sorted.sort();
        sorted
    }

    /// Save the solution as JSON
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("Failed to serialize solution")?;
        std::fs::write(path.as_ref(), json).with_context(|| {
            format!("Failed to write solution to {}", path.as_ref().display())
        })?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    fn sample_solution() -> Solution {
        let positions = vec![
            Position { col: 2, row: 1 },
            Position { col: 4, row: 2 },
            Position { col: 1, row: 3 },
            Position { col: 3, row: 4 },
        ];
        Solution::new(4, 1, positions, Duration::from_millis(7))
    }

    #[test]
    fn test_board_derivation() {
        let solution = sample_solution();
        let board = solution.board().unwrap();
        assert_eq!(board.queen_count(), 4);
        assert_eq!(board.get(2, 1), Some('Q'));
    }

    #[test]
    fn test_algebraic_squares() {
        let solution = sample_solution();
        let squares = solution.algebraic_squares().unwrap();
        assert_eq!(squares, vec!["B1", "D2", "A3", "C4"]);
    }

    #[test]
    fn test_canonical_positions_are_sorted() {
        let solution = sample_solution();
        let canonical = solution.canonical_positions();
        let mut expected = solution.positions.clone();
        expected.sort();
        assert_eq!(canonical, expected);
    }

    #[test]
    fn test_json_round_trip() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("solution.json");

        let solution = sample_solution();
        solution.save_to_file(&path).unwrap();

        let loaded: Solution =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(loaded.board_size, 4);
        assert_eq!(loaded.positions, solution.positions);
    }
}
