//! Error types for the 2048 engine
//!
//! Moves never fail; a shift that changes nothing is reported through
//! [`crate::game::MoveOutcome::changed`]. Errors only arise when building a
//! grid from external values.

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Game2048Error {
    /// Wrong number of cells for a 4x4 grid
    #[error("Expected 16 grid values, got {len}")]
    InvalidLength { len: usize },

    /// Tile that is neither empty nor a power of two in range
    #[error("Invalid tile {value} at index {index}: tiles must be 0 or a power of two from 2 to 131072")]
    InvalidTile { value: u32, index: usize },
}

/// Result type alias for 2048 operations
pub type Game2048Result<T> = Result<T, Game2048Error>;
