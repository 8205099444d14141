//! Enumeration runs and solution handling

pub mod problem;
pub mod solution;
pub mod validator;

pub use problem::{QueensProblem, RunReport};
pub use solution::Solution;
pub use validator::{SolutionValidator, ValidationResult};
