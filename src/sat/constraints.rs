//! Constraint generation for the N-queens SAT encoding

use super::variables::{Axis, VariableManager};
use anyhow::Result;
use itertools::Itertools;

/// Represents a SAT clause (disjunction of literals)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub literals: Vec<i32>, // Positive for variable, negative for negation
}

impl Clause {
    /// Create a new clause from literals
    pub fn new(literals: Vec<i32>) -> Self {
        Self { literals }
    }

    /// Create a unit clause (single literal)
    pub fn unit(literal: i32) -> Self {
        Self {
            literals: vec![literal],
        }
    }

    /// Create a binary clause (two literals)
    pub fn binary(lit1: i32, lit2: i32) -> Self {
        Self {
            literals: vec![lit1, lit2],
        }
    }

    /// Check if clause is empty (unsatisfiable)
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }

    /// Check if clause is unit
    pub fn is_unit(&self) -> bool {
        self.literals.len() == 1
    }
}

/// Generates the clause families encoding a valid non-attacking placement.
///
/// Integer coordinates are rendered one-hot, so "x_i in [1, n]" becomes an
/// exactly-one group and the arithmetic constraints become forbidden value
/// combinations over selector literals.
pub struct QueensConstraintGenerator {
    variable_manager: VariableManager,
    board_size: usize,
    symmetry_breaking: bool,
    counts: ClauseCounts,
}

#[derive(Debug, Clone, Copy, Default)]
struct ClauseCounts {
    bounding: usize,
    distinctness: usize,
    diagonal: usize,
    ordering: usize,
}

impl QueensConstraintGenerator {
    /// Create a generator for `board_size` queens on a `board_size` board
    pub fn new(board_size: usize, symmetry_breaking: bool) -> Self {
        let variable_manager = VariableManager::new(board_size, board_size);

        Self {
            variable_manager,
            board_size,
            symmetry_breaking,
            counts: ClauseCounts::default(),
        }
    }

    /// Generate all constraints for the puzzle
    pub fn generate_all_constraints(&mut self) -> Result<Vec<Clause>> {
        let mut clauses = Vec::new();

        // 1. Bounding: each coordinate takes exactly one value in [1, n]
        let bounding = self.generate_bounding_constraints()?;
        self.counts.bounding = bounding.len();
        clauses.extend(bounding);

        // 2. Distinctness: all columns pairwise distinct, all rows pairwise distinct
        let distinctness = self.generate_distinctness_constraints()?;
        self.counts.distinctness = distinctness.len();
        clauses.extend(distinctness);

        // 3. Anti-diagonal: no two queens with |Δcol| == |Δrow|
        let diagonal = self.generate_diagonal_constraints()?;
        self.counts.diagonal = diagonal.len();
        clauses.extend(diagonal);

        // 4. Ordering: row-major order over consecutive queen indices
        if self.symmetry_breaking {
            let ordering = self.generate_ordering_constraints()?;
            self.counts.ordering = ordering.len();
            clauses.extend(ordering);
        }

        Ok(clauses)
    }

    /// Exactly-one clauses for every coordinate's one-hot selector group
    fn generate_bounding_constraints(&mut self) -> Result<Vec<Clause>> {
        let mut clauses = Vec::new();

        for queen in 0..self.board_size {
            for axis in [Axis::Col, Axis::Row] {
                let group = self.variable_manager.coord_group(queen, axis)?;

                // At least one value
                clauses.push(Clause::new(group.clone()));

                // At most one value
                for (&a, &b) in group.iter().tuple_combinations() {
                    clauses.push(Clause::binary(-a, -b));
                }
            }
        }

        Ok(clauses)
    }

    /// Pairwise distinctness of column values and of row values
    fn generate_distinctness_constraints(&mut self) -> Result<Vec<Clause>> {
        let mut clauses = Vec::new();

        for axis in [Axis::Col, Axis::Row] {
            for value in 1..=self.board_size {
                for (i, j) in (0..self.board_size).tuple_combinations() {
                    let sel_i = self.variable_manager.coord_variable(i, axis, value)?;
                    let sel_j = self.variable_manager.coord_variable(j, axis, value)?;
                    clauses.push(Clause::binary(-sel_i, -sel_j));
                }
            }
        }

        Ok(clauses)
    }

    /// Forbid every placement of a queen pair on a shared diagonal.
    ///
    /// Matches the arithmetic constraint `|x_i - x_j| != |y_i - y_j|`, so the
    /// degenerate same-cell case (both deltas zero) is forbidden here too even
    /// though distinctness already excludes it.
    fn generate_diagonal_constraints(&mut self) -> Result<Vec<Clause>> {
        let mut clauses = Vec::new();
        let n = self.board_size;

        for (i, j) in (0..n).tuple_combinations() {
            for col_a in 1..=n {
                for row_a in 1..=n {
                    for col_b in 1..=n {
                        for row_b in 1..=n {
                            let dc = (col_a as i64 - col_b as i64).abs();
                            let dr = (row_a as i64 - row_b as i64).abs();
                            if dc != dr {
                                continue;
                            }

                            let xi = self.variable_manager.coord_variable(i, Axis::Col, col_a)?;
                            let yi = self.variable_manager.coord_variable(i, Axis::Row, row_a)?;
                            let xj = self.variable_manager.coord_variable(j, Axis::Col, col_b)?;
                            let yj = self.variable_manager.coord_variable(j, Axis::Row, row_b)?;
                            clauses.push(Clause::new(vec![-xi, -yi, -xj, -yj]));
                        }
                    }
                }
            }
        }

        Ok(clauses)
    }

    /// Strict row-major ordering over consecutive queens:
    /// `y_{i-1} * n + x_{i-1} < y_i * n + x_i`.
    ///
    /// For coordinates in [1, n] this equals lexicographic (row, col) order,
    /// encoded as: forbid `row_{i-1} > row_i`, and on equal rows forbid
    /// `col_{i-1} >= col_i`.
    fn generate_ordering_constraints(&mut self) -> Result<Vec<Clause>> {
        let mut clauses = Vec::new();
        let n = self.board_size;

        for i in 1..n {
            let prev = i - 1;

            // row_{i-1} > row_i forbidden
            for row_a in 1..=n {
                for row_b in 1..row_a {
                    let ya = self.variable_manager.coord_variable(prev, Axis::Row, row_a)?;
                    let yb = self.variable_manager.coord_variable(i, Axis::Row, row_b)?;
                    clauses.push(Clause::binary(-ya, -yb));
                }
            }

            // equal rows with col_{i-1} >= col_i forbidden
            for row in 1..=n {
                for col_a in 1..=n {
                    for col_b in 1..=col_a {
                        let ya = self.variable_manager.coord_variable(prev, Axis::Row, row)?;
                        let xa = self.variable_manager.coord_variable(prev, Axis::Col, col_a)?;
                        let yb = self.variable_manager.coord_variable(i, Axis::Row, row)?;
                        let xb = self.variable_manager.coord_variable(i, Axis::Col, col_b)?;
                        clauses.push(Clause::new(vec![-ya, -xa, -yb, -xb]));
                    }
                }
            }
        }

        Ok(clauses)
    }

    /// Get the variable manager (for external access)
    pub fn variable_manager(&mut self) -> &mut VariableManager {
        &mut self.variable_manager
    }

    /// Get constraint generation statistics
    pub fn statistics(&self) -> ConstraintStatistics {
        ConstraintStatistics {
            board_size: self.board_size,
            total_variables: self.variable_manager.variable_count(),
            bounding_clauses: self.counts.bounding,
            distinctness_clauses: self.counts.distinctness,
            diagonal_clauses: self.counts.diagonal,
            ordering_clauses: self.counts.ordering,
        }
    }
}

/// Statistics about constraint generation
#[derive(Debug, Clone)]
pub struct ConstraintStatistics {
    pub board_size: usize,
    pub total_variables: usize,
    pub bounding_clauses: usize,
    pub distinctness_clauses: usize,
    pub diagonal_clauses: usize,
    pub ordering_clauses: usize,
}

impl ConstraintStatistics {
    /// Total clause count over all families
    pub fn total_clauses(&self) -> usize {
        self.bounding_clauses
            + self.distinctness_clauses
            + self.diagonal_clauses
            + self.ordering_clauses
    }
}

impl std::fmt::Display for ConstraintStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Constraint Generation Statistics:")?;
        writeln!(f, "  Board size: {0}x{0}", self.board_size)?;
        writeln!(f, "  Total variables: {}", self.total_variables)?;
        writeln!(f, "  Bounding clauses: {}", self.bounding_clauses)?;
        writeln!(f, "  Distinctness clauses: {}", self.distinctness_clauses)?;
        writeln!(f, "  Diagonal clauses: {}", self.diagonal_clauses)?;
        writeln!(f, "  Ordering clauses: {}", self.ordering_clauses)?;
        writeln!(f, "  Total clauses: {}", self.total_clauses())?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clause_creation() {
        let clause = Clause::new(vec![1, -2, 3]);
        assert_eq!(clause.literals, vec![1, -2, 3]);
        assert!(!clause.is_empty());
        assert!(!clause.is_unit());

        let unit_clause = Clause::unit(5);
        assert!(unit_clause.is_unit());
        assert_eq!(unit_clause.literals, vec![5]);
    }

    #[test]
    fn test_trivial_board_has_no_pairwise_clauses() {
        let mut cg = QueensConstraintGenerator::new(1, true);
        let clauses = cg.generate_all_constraints().unwrap();

        // Only the two at-least-one clauses for x_0 and y_0, both unit
        assert_eq!(clauses.len(), 2);
        assert!(clauses.iter().all(Clause::is_unit));

        let stats = cg.statistics();
        assert_eq!(stats.distinctness_clauses, 0);
        assert_eq!(stats.diagonal_clauses, 0);
        assert_eq!(stats.ordering_clauses, 0);
        assert_eq!(stats.total_variables, 2);
    }

    #[test]
    fn test_clause_family_counts_for_n2() {
        let mut cg = QueensConstraintGenerator::new(2, true);
        let _ = cg.generate_all_constraints().unwrap();
        let stats = cg.statistics();

        // 4 groups, each 1 at-least-one + 1 at-most-one pair
        assert_eq!(stats.bounding_clauses, 8);
        // 2 axes * 2 values * 1 queen pair
        assert_eq!(stats.distinctness_clauses, 4);
        // 1 queen pair, 8 ordered cell pairs with |dc| == |dr| on a 2x2 board
        assert_eq!(stats.diagonal_clauses, 8);
        // 1 row-inversion clause + 2 rows * 3 column pairs
        assert_eq!(stats.ordering_clauses, 7);
        // 2 queens * 2 axes * 2 values
        assert_eq!(stats.total_variables, 8);
    }

    #[test]
    fn test_ordering_family_is_optional() {
        let mut with = QueensConstraintGenerator::new(3, true);
        let mut without = QueensConstraintGenerator::new(3, false);

        let with_clauses = with.generate_all_constraints().unwrap();
        let without_clauses = without.generate_all_constraints().unwrap();

        assert!(with_clauses.len() > without_clauses.len());
        assert_eq!(without.statistics().ordering_clauses, 0);
        assert_eq!(
            with.statistics().total_clauses() - with.statistics().ordering_clauses,
            without.statistics().total_clauses()
        );
    }

    #[test]
    fn test_no_empty_clauses() {
        let mut cg = QueensConstraintGenerator::new(4, true);
        let clauses = cg.generate_all_constraints().unwrap();
        assert!(clauses.iter().all(|c| !c.is_empty()));
    }
}
