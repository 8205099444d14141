//! Queen positions and attack geometry

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors for invalid queen positions
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PositionError {
    #[error("column {col} out of range for board size {board_size}")]
    ColumnOutOfRange { col: i64, board_size: usize },

    #[error("row {row} out of range for board size {board_size}")]
    RowOutOfRange { row: i64, board_size: usize },

    #[error("column {col} has no letter name (algebraic notation supports at most 26 columns)")]
    NoColumnLetter { col: usize },

    #[error("cannot parse '{text}' as an algebraic square")]
    ParseError { text: String },
}

/// A queen's square on the board, 1-based in both coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Position {
    pub col: usize,
    pub row: usize,
}

impl Position {
    /// Create a position, rejecting coordinates outside `[1, board_size]`
    pub fn new(col: i64, row: i64, board_size: usize) -> Result<Self, PositionError> {
        if col < 1 || col > board_size as i64 {
            return Err(PositionError::ColumnOutOfRange { col, board_size });
        }
        if row < 1 || row > board_size as i64 {
            return Err(PositionError::RowOutOfRange { row, board_size });
        }
        Ok(Self {
            col: col as usize,
            row: row as usize,
        })
    }

    /// Render as algebraic notation: column letter plus row number ("A1")
    pub fn algebraic(&self) -> Result<String, PositionError> {
        if self.col > 26 {
            return Err(PositionError::NoColumnLetter { col: self.col });
        }
        let letter = (b'A' + (self.col - 1) as u8) as char;
        Ok(format!("{}{}", letter, self.row))
    }

    /// Parse algebraic notation ("A1", "h8") into a position
    pub fn parse_algebraic(text: &str, board_size: usize) -> Result<Self, PositionError> {
        let text = text.trim();
        let mut chars = text.chars();

        let letter = chars.next().ok_or_else(|| PositionError::ParseError {
            text: text.to_string(),
        })?;
        if !letter.is_ascii_alphabetic() {
            return Err(PositionError::ParseError {
                text: text.to_string(),
            });
        }
        let col = (letter.to_ascii_uppercase() as u8 - b'A') as i64 + 1;

        let row: i64 = chars
            .as_str()
            .parse()
            .map_err(|_| PositionError::ParseError {
                text: text.to_string(),
            })?;

        Self::new(col, row, board_size)
    }

    /// True if two queens attack each other: shared column, row, or diagonal
    pub fn attacks(&self, other: &Position) -> bool {
        if self.col == other.col || self.row == other.row {
            return true;
        }
        self.on_same_diagonal(other)
    }

    /// Shared-diagonal predicate: |Δcol| == |Δrow|
    pub fn on_same_diagonal(&self, other: &Position) -> bool {
        let dc = (self.col as i64 - other.col as i64).abs();
        let dr = (self.row as i64 - other.row as i64).abs();
        dc == dr
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.algebraic() {
            Ok(s) => write!(f, "{}", s),
            Err(_) => write!(f, "({},{})", self.col, self.row),
        }
    }
}
