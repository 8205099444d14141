//! SAT solving components for N-queens enumeration

pub mod constraints;
pub mod encoder;
pub mod solver;
pub mod variables;

pub use constraints::QueensConstraintGenerator;
pub use encoder::{EnumeratedModel, QueensEncoder};
pub use solver::{CadicalSolver, Model, SatBackend, SolveOutcome};
pub use variables::{Axis, VariableManager};
