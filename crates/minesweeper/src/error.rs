//! Error types for the minesweeper engine

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MinesweeperError {
    /// Board with no rows or no columns
    #[error("Board dimensions must be nonzero, got {rows}x{cols}")]
    EmptyBoard { rows: usize, cols: usize },

    /// More mines requested than the board has cells
    #[error("Cannot place {mines} mines on a {rows}x{cols} board")]
    TooManyMines { rows: usize, cols: usize, mines: usize },

    /// Mine coordinate outside the board
    #[error("Mine at ({row}, {col}) is outside the board")]
    MineOutOfBounds { row: usize, col: usize },

    /// Preset name that is not beginner, intermediate or expert
    #[error("Unknown preset {name:?}")]
    UnknownPreset { name: String },
}

/// Result type alias for minesweeper operations
pub type MinesweeperResult<T> = Result<T, MinesweeperError>;
