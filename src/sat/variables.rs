//! Variable management for the queens SAT encoding

use anyhow::Result;
use std::collections::HashMap;

/// The two coordinate axes of a queen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Column coordinate, conventionally named `x`
    Col,
    /// Row coordinate, conventionally named `y`
    Row,
}

impl Axis {
    /// Conventional single-letter label for variable names
    pub fn label(self) -> &'static str {
        match self {
            Axis::Col => "x",
            Axis::Row => "y",
        }
    }
}

/// Types of variables used in the SAT encoding
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum VariableType {
    /// Selector: coordinate `axis` of queen `queen` equals `value` (1-based)
    Coord { queen: usize, axis: Axis, value: usize },
}

/// Maps queen coordinate selectors to SAT variable ids.
///
/// Each abstract integer variable `x_i` / `y_i` is represented one-hot by the
/// selector group `{x_i=1 .. x_i=n}`. Ids are allocated on first use, so a
/// fixed creation order yields deterministic ids.
#[derive(Debug)]
pub struct VariableManager {
    /// Map from variable type to SAT variable id (positive integer)
    variable_map: HashMap<VariableType, i32>,
    /// Next available variable id
    next_id: i32,
    queen_count: usize,
    board_size: usize,
}

impl VariableManager {
    /// Create a manager for `queen_count` queens on a `board_size` board
    pub fn new(queen_count: usize, board_size: usize) -> Self {
        Self {
            variable_map: HashMap::new(),
            next_id: 1, // SAT variables start from 1
            queen_count,
            board_size,
        }
    }

    /// Get or create a variable id for the given variable type
    pub fn get_variable(&mut self, var_type: VariableType) -> Result<i32> {
        if let Some(&id) = self.variable_map.get(&var_type) {
            return Ok(id);
        }

        self.validate_variable(&var_type)?;

        let id = self.next_id;
        self.next_id += 1;
        self.variable_map.insert(var_type, id);
        Ok(id)
    }

    /// Selector variable for `axis(queen) = value`
    pub fn coord_variable(&mut self, queen: usize, axis: Axis, value: usize) -> Result<i32> {
        self.get_variable(VariableType::Coord { queen, axis, value })
    }

    /// The full one-hot selector group for one coordinate, in value order
    pub fn coord_group(&mut self, queen: usize, axis: Axis) -> Result<Vec<i32>> {
        (1..=self.board_size)
            .map(|value| self.coord_variable(queen, axis, value))
            .collect()
    }

    /// Human-readable name of a selector ("x_3=5" style)
    pub fn variable_name(&self, var_type: &VariableType) -> String {
        match var_type {
            VariableType::Coord { queen, axis, value } => {
                format!("{}_{}={}", axis.label(), queen, value)
            }
        }
    }

    /// Total number of variables created
    pub fn variable_count(&self) -> usize {
        (self.next_id - 1) as usize
    }

    /// Problem dimensions as (queen_count, board_size)
    pub fn dimensions(&self) -> (usize, usize) {
        (self.queen_count, self.board_size)
    }

    fn validate_variable(&self, var_type: &VariableType) -> Result<()> {
        match var_type {
            VariableType::Coord { queen, value, .. } => {
                if *queen >= self.queen_count {
                    anyhow::bail!(
                        "queen index {} out of bounds (queen count: {})",
                        queen,
                        self.queen_count
                    );
                }
                if *value < 1 || *value > self.board_size {
                    anyhow::bail!(
                        "coordinate value {} out of bounds (board size: {})",
                        value,
                        self.board_size
                    );
                }
            }
        }
        Ok(())
    }
}
