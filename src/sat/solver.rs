//! SAT solver integration using CaDiCaL

use super::constraints::Clause;
use anyhow::Result;
use cadical::Solver;
use std::collections::HashMap;
use std::time::Duration;

/// Outcome of one decision-procedure call.
///
/// `Unknown` is distinct from `Unsatisfiable` on purpose: only a definite
/// UNSAT may end enumeration, an indeterminate answer must surface as an
/// error upstream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SolveOutcome {
    Satisfiable,
    Unsatisfiable,
    Unknown,
}

/// A snapshot of the solver's assignment, copied out before the constraint
/// set is mutated again
#[derive(Debug, Clone)]
pub struct Model {
    pub assignment: HashMap<i32, bool>,
    pub solve_time: Duration,
}

/// Capability interface over the external decision procedure.
///
/// The enumeration loop only needs incremental clause addition, a
/// SAT/UNSAT/UNKNOWN check, and model value extraction, so it is written
/// against this trait and tested against a scripted stub.
pub trait SatBackend {
    /// Add a single clause to the constraint set
    fn add_clause(&mut self, clause: &Clause) -> Result<()>;

    /// Run the decision procedure on the accumulated constraint set
    fn solve(&mut self) -> Result<SolveOutcome>;

    /// Value of a variable in the current model (valid after `Satisfiable`)
    fn value(&self, variable: i32) -> Option<bool>;

    /// Highest variable id seen so far
    fn variable_count(&self) -> usize;

    /// Number of clauses added so far
    fn clause_count(&self) -> usize;

    /// Add many clauses at once
    fn add_clauses(&mut self, clauses: &[Clause]) -> Result<()> {
        for clause in clauses {
            self.add_clause(clause)?;
        }
        Ok(())
    }

    /// Snapshot the full assignment out of the backend
    fn extract_assignment(&self) -> HashMap<i32, bool> {
        let mut assignment = HashMap::new();
        for var in 1..=self.variable_count() as i32 {
            if let Some(value) = self.value(var) {
                assignment.insert(var, value);
            }
        }
        assignment
    }
}

/// CaDiCaL-backed implementation of the capability interface
pub struct CadicalSolver {
    solver: Solver,
    variable_count: usize,
    clause_count: usize,
}

impl CadicalSolver {
    /// Create a new solver instance
    pub fn new() -> Self {
        Self {
            solver: Solver::new(),
            variable_count: 0,
            clause_count: 0,
        }
    }
}

impl Default for CadicalSolver {
    fn default() -> Self {
        Self::new()
    }
}

impl SatBackend for CadicalSolver {
    fn add_clause(&mut self, clause: &Clause) -> Result<()> {
        if clause.is_empty() {
            anyhow::bail!("Cannot add empty clause (unsatisfiable)");
        }

        for &literal in &clause.literals {
            let var = literal.unsigned_abs() as usize;
            if var > self.variable_count {
                self.variable_count = var;
            }
        }

        self.solver.add_clause(clause.literals.iter().copied());
        self.clause_count += 1;
        Ok(())
    }

    fn solve(&mut self) -> Result<SolveOutcome> {
        // CaDiCaL returns None when interrupted or resource-limited
        match self.solver.solve() {
            Some(true) => Ok(SolveOutcome::Satisfiable),
            Some(false) => Ok(SolveOutcome::Unsatisfiable),
            None => Ok(SolveOutcome::Unknown),
        }
    }

    fn value(&self, variable: i32) -> Option<bool> {
        self.solver.value(variable)
    }

    fn variable_count(&self) -> usize {
        self.variable_count
    }

    fn clause_count(&self) -> usize {
        self.clause_count
    }
}

impl std::fmt::Debug for CadicalSolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CadicalSolver")
            .field("variable_count", &self.variable_count)
            .field("clause_count", &self.clause_count)
            .finish()
    }
}

impl std::fmt::Display for Model {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Model:")?;
        writeln!(f, "  Solve time: {:.3}s", self.solve_time.as_secs_f64())?;
        writeln!(f, "  Variables assigned: {}", self.assignment.len())?;

        let mut vars: Vec<_> = self.assignment.keys().collect();
        vars.sort();

        write!(f, "  Sample assignments: ")?;
        for (i, &var) in vars.iter().take(10).enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            let value = self.assignment[var];
            write!(f, "{}={}", var, if value { "T" } else { "F" })?;
        }
        if vars.len() > 10 {
            write!(f, ", ...")?;
        }
        writeln!(f)?;

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_solver_creation() {
        let solver = CadicalSolver::new();
        assert_eq!(solver.variable_count(), 0);
        assert_eq!(solver.clause_count(), 0);
    }

    #[test]
    fn test_simple_satisfiable() {
        let mut solver = CadicalSolver::new();

        // x1 ∨ x2, ¬x1 ∨ x2
        solver.add_clause(&Clause::binary(1, 2)).unwrap();
        solver.add_clause(&Clause::binary(-1, 2)).unwrap();

        assert_eq!(solver.solve().unwrap(), SolveOutcome::Satisfiable);

        // x2 must be true to satisfy both clauses
        assert_eq!(solver.value(2), Some(true));
    }

    #[test]
    fn test_unsatisfiable() {
        let mut solver = CadicalSolver::new();

        solver.add_clause(&Clause::unit(1)).unwrap();
        solver.add_clause(&Clause::unit(-1)).unwrap();

        assert_eq!(solver.solve().unwrap(), SolveOutcome::Unsatisfiable);
    }

    #[test]
    fn test_incremental_blocking() {
        let mut solver = CadicalSolver::new();

        // x1 ∨ x2 has three models; block each found assignment and re-solve
        solver.add_clause(&Clause::binary(1, 2)).unwrap();

        let mut found = 0;
        while solver.solve().unwrap() == SolveOutcome::Satisfiable {
            let assignment = solver.extract_assignment();
            let blocking: Vec<i32> = assignment
                .iter()
                .map(|(&var, &val)| if val { -var } else { var })
                .collect();
            solver.add_clause(&Clause::new(blocking)).unwrap();
            found += 1;
        }

        assert_eq!(found, 3);
    }

    #[test]
    fn test_empty_clause_error() {
        let mut solver = CadicalSolver::new();
        assert!(solver.add_clause(&Clause::new(vec![])).is_err());
    }

    #[test]
    fn test_variable_count_tracking() {
        let mut solver = CadicalSolver::new();

        solver.add_clause(&Clause::new(vec![1, -5, 3])).unwrap();
        assert_eq!(solver.variable_count(), 5);

        solver.add_clause(&Clause::binary(2, -7)).unwrap();
        assert_eq!(solver.variable_count(), 7);
        assert_eq!(solver.clause_count(), 2);
    }
}
