//! Independent validation of enumerated placements

use crate::queens::Position;
use itertools::Itertools;
use std::collections::HashSet;

/// Re-checks every reported placement against the puzzle rules, independent
/// of the SAT encoding that produced it
#[derive(Debug, Clone, Copy, Default)]
pub struct SolutionValidator;

/// Result of validating one placement
#[derive(Debug, Clone)]
pub struct ValidationResult {
    pub is_valid: bool,
    pub error_message: Option<String>,
}

impl ValidationResult {
    fn valid() -> Self {
        Self {
            is_valid: true,
            error_message: None,
        }
    }

    fn invalid(message: String) -> Self {
        Self {
            is_valid: false,
            error_message: Some(message),
        }
    }
}

impl SolutionValidator {
    pub fn new() -> Self {
        Self
    }

    /// Check a placement: queen count, bounds, distinct columns, distinct
    /// rows, and no shared diagonal
    pub fn validate(&self, positions: &[Position], board_size: usize) -> ValidationResult {
        if positions.len() != board_size {
            return ValidationResult::invalid(format!(
                "expected {} queens, found {}",
                board_size,
                positions.len()
            ));
        }

        for pos in positions {
            if pos.col < 1 || pos.col > board_size || pos.row < 1 || pos.row > board_size {
                return ValidationResult::invalid(format!(
                    "queen at ({}, {}) outside board of size {}",
                    pos.col, pos.row, board_size
                ));
            }
        }

        let cols: HashSet<usize> = positions.iter().map(|p| p.col).collect();
        if cols.len() != positions.len() {
            return ValidationResult::invalid("two queens share a column".to_string());
        }

        let rows: HashSet<usize> = positions.iter().map(|p| p.row).collect();
        if rows.len() != positions.len() {
            return ValidationResult::invalid("two queens share a row".to_string());
        }

        for (a, b) in positions.iter().tuple_combinations() {
            if a.on_same_diagonal(b) {
                return ValidationResult::invalid(format!(
                    "queens at {} and {} share a diagonal",
                    a, b
                ));
            }
        }

        ValidationResult::valid()
    }
}

impl std::fmt::Display for ValidationResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.is_valid {
            write!(f, "Validation: valid placement")
        } else {
            write!(
                f,
                "Validation: invalid placement ({})",
                self.error_message.as_deref().unwrap_or("unknown reason")
            )
        }
    }
}
