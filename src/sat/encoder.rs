//! SAT encoder and model-enumeration driver for the N-queens puzzle

use super::constraints::{Clause, QueensConstraintGenerator};
use super::solver::{CadicalSolver, Model, SatBackend, SolveOutcome};
use super::variables::Axis;
use crate::queens::Position;
use anyhow::{Context, Result};
use std::time::Instant;

/// One enumerated placement, snapshotted from a model before it was blocked
#[derive(Debug, Clone)]
pub struct EnumeratedModel {
    pub positions: Vec<Position>,
    pub solve_time: std::time::Duration,
}

/// Encodes one puzzle size and drives the enumeration loop.
///
/// The encoder owns the backend and its constraint set for the whole run;
/// dropping the encoder releases the solver context.
pub struct QueensEncoder {
    board_size: usize,
    constraint_generator: QueensConstraintGenerator,
    backend: Box<dyn SatBackend>,
    encoded: bool,
}

impl QueensEncoder {
    /// Create an encoder backed by CaDiCaL
    pub fn new(board_size: usize, symmetry_breaking: bool) -> Self {
        Self::with_backend(
            board_size,
            symmetry_breaking,
            Box::new(CadicalSolver::new()),
        )
    }

    /// Create an encoder over an explicit backend (used by tests to script
    /// decision-procedure outcomes)
    pub fn with_backend(
        board_size: usize,
        symmetry_breaking: bool,
        backend: Box<dyn SatBackend>,
    ) -> Self {
        let constraint_generator = QueensConstraintGenerator::new(board_size, symmetry_breaking);

        Self {
            board_size,
            constraint_generator,
            backend,
            encoded: false,
        }
    }

    /// Generate the puzzle clauses and load them into the backend
    fn encode(&mut self) -> Result<()> {
        if self.encoded {
            return Ok(());
        }

        let clauses = self
            .constraint_generator
            .generate_all_constraints()
            .context("Failed to generate queen placement constraints")?;

        self.backend
            .add_clauses(&clauses)
            .context("Failed to add clauses to SAT backend")?;

        self.encoded = true;
        Ok(())
    }

    /// Enumerate placements until UNSAT or `max_solutions` is reached.
    ///
    /// Protocol per iteration: check, snapshot the model on SAT, decode the
    /// positions, then add the blocking clause and loop. A definite UNSAT
    /// ends enumeration; an indeterminate answer is an error, never silent
    /// completion.
    pub fn enumerate(&mut self, max_solutions: usize) -> Result<Vec<EnumeratedModel>> {
        self.encode()?;

        let mut found = Vec::new();

        while found.len() < max_solutions {
            let start = Instant::now();

            match self.backend.solve()? {
                SolveOutcome::Satisfiable => {
                    let model = Model {
                        assignment: self.backend.extract_assignment(),
                        solve_time: start.elapsed(),
                    };

                    let positions = self.decode_positions(&model)?;
                    self.block_placement(&positions)?;

                    found.push(EnumeratedModel {
                        positions,
                        solve_time: model.solve_time,
                    });
                }
                SolveOutcome::Unsatisfiable => break,
                SolveOutcome::Unknown => {
                    anyhow::bail!(
                        "decision procedure returned an indeterminate result for n = {} \
                         after {} solution(s); enumeration is incomplete",
                        self.board_size,
                        found.len()
                    );
                }
            }
        }

        Ok(found)
    }

    /// Decode one position per queen out of a model
    fn decode_positions(&mut self, model: &Model) -> Result<Vec<Position>> {
        let mut positions = Vec::with_capacity(self.board_size);

        for queen in 0..self.board_size {
            let col = self.decode_coord(model, queen, Axis::Col)?;
            let row = self.decode_coord(model, queen, Axis::Row)?;

            let position = Position::new(col as i64, row as i64, self.board_size)
                .with_context(|| format!("model placed queen {} off the board", queen))?;
            positions.push(position);
        }

        Ok(positions)
    }

    /// Extract the single assigned value of a one-hot coordinate group
    fn decode_coord(&mut self, model: &Model, queen: usize, axis: Axis) -> Result<usize> {
        let group = self
            .constraint_generator
            .variable_manager()
            .coord_group(queen, axis)?;

        let mut assigned = None;
        for (index, &selector) in group.iter().enumerate() {
            if model.assignment.get(&selector).copied().unwrap_or(false) {
                if assigned.is_some() {
                    anyhow::bail!(
                        "model assigns multiple values to {}_{}",
                        axis.label(),
                        queen
                    );
                }
                assigned = Some(index + 1);
            }
        }

        assigned.ok_or_else(|| {
            anyhow::anyhow!("model assigns no value to {}_{}", axis.label(), queen)
        })
    }

    /// Block the exact placement: at least one coordinate selector must differ
    fn block_placement(&mut self, positions: &[Position]) -> Result<()> {
        let mut literals = Vec::with_capacity(2 * positions.len());

        for (queen, position) in positions.iter().enumerate() {
            let col_sel = self
                .constraint_generator
                .variable_manager()
                .coord_variable(queen, Axis::Col, position.col)?;
            let row_sel = self
                .constraint_generator
                .variable_manager()
                .coord_variable(queen, Axis::Row, position.row)?;
            literals.push(-col_sel);
            literals.push(-row_sel);
        }

        self.backend
            .add_clause(&Clause::new(literals))
            .context("Failed to add blocking clause")
    }

    /// Get encoding statistics
    pub fn statistics(&self) -> EncodingStatistics {
        let constraint_stats = self.constraint_generator.statistics();

        EncodingStatistics {
            board_size: self.board_size,
            total_variables: constraint_stats.total_variables,
            puzzle_clauses: constraint_stats.total_clauses(),
            backend_clauses: self.backend.clause_count(),
        }
    }
}

impl std::fmt::Debug for QueensEncoder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueensEncoder")
            .field("board_size", &self.board_size)
            .field("encoded", &self.encoded)
            .finish()
    }
}

/// Statistics about the SAT encoding
#[derive(Debug, Clone)]
pub struct EncodingStatistics {
    pub board_size: usize,
    pub total_variables: usize,
    /// Clauses from the puzzle encoding itself
    pub puzzle_clauses: usize,
    /// All clauses in the backend, blocking clauses included
    pub backend_clauses: usize,
}

impl std::fmt::Display for EncodingStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "SAT Encoding Statistics:")?;
        writeln!(f, "  Board size: {0}x{0}", self.board_size)?;
        writeln!(f, "  Total variables: {}", self.total_variables)?;
        writeln!(f, "  Puzzle clauses: {}", self.puzzle_clauses)?;
        writeln!(f, "  Backend clauses: {}", self.backend_clauses)?;
        Ok(())
    }
}
