//! Board rendering derived from a set of queen positions

use super::Position;
use anyhow::Result;

const QUEEN_GLYPH: char = 'Q';
const FILLER_GLYPH: char = '+';

/// An ephemeral square grid populated from queen positions, used for printing
#[derive(Debug, Clone)]
pub struct Board {
    size: usize,
    cells: Vec<char>,
}

impl Board {
    /// Build a board from positions, failing on any out-of-range coordinate
    pub fn from_positions(positions: &[Position], board_size: usize) -> Result<Self> {
        let mut cells = vec![FILLER_GLYPH; board_size * board_size];

        for pos in positions {
            if pos.col < 1 || pos.col > board_size || pos.row < 1 || pos.row > board_size {
                anyhow::bail!(
                    "position ({}, {}) outside board of size {}",
                    pos.col,
                    pos.row,
                    board_size
                );
            }
            cells[(pos.row - 1) * board_size + (pos.col - 1)] = QUEEN_GLYPH;
        }

        Ok(Self {
            size: board_size,
            cells,
        })
    }

    /// Board dimension
    pub fn size(&self) -> usize {
        self.size
    }

    /// Glyph at a 1-based (col, row) coordinate
    pub fn get(&self, col: usize, row: usize) -> Option<char> {
        if col < 1 || col > self.size || row < 1 || row > self.size {
            return None;
        }
        Some(self.cells[(row - 1) * self.size + (col - 1)])
    }

    /// Number of queens placed
    pub fn queen_count(&self) -> usize {
        self.cells.iter().filter(|&&c| c == QUEEN_GLYPH).count()
    }
}

impl std::fmt::Display for Board {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for row in 0..self.size {
            for col in 0..self.size {
                write!(f, "{} ", self.cells[row * self.size + col])?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pos(col: i64, row: i64, n: usize) -> Position {
        Position::new(col, row, n).unwrap()
    }

    #[test]
    fn test_board_from_positions() {
        let positions = vec![pos(2, 1, 4), pos(4, 2, 4), pos(1, 3, 4), pos(3, 4, 4)];
        let board = Board::from_positions(&positions, 4).unwrap();

        assert_eq!(board.size(), 4);
        assert_eq!(board.queen_count(), 4);
        assert_eq!(board.get(2, 1), Some('Q'));
        assert_eq!(board.get(1, 1), Some('+'));
        assert_eq!(board.get(5, 1), None);
    }

    #[test]
    fn test_board_rejects_out_of_range() {
        let bad = Position { col: 5, row: 1 };
        assert!(Board::from_positions(&[bad], 4).is_err());
    }

    #[test]
    fn test_board_rendering() {
        let positions = vec![pos(1, 1, 2)];
        let board = Board::from_positions(&positions, 2).unwrap();

        assert_eq!(board.to_string(), "Q + \n+ + \n");
    }

    #[test]
    fn test_trivial_board() {
        let board = Board::from_positions(&[pos(1, 1, 1)], 1).unwrap();
        assert_eq!(board.to_string(), "Q \n");
        assert_eq!(board.queen_count(), 1);
    }
}
