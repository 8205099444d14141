//! Domain model for queen placements

pub mod board;
pub mod position;

pub use board::Board;
pub use position::{Position, PositionError};
