//! Error types for the sudoku engine

use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SudokuError {
    /// Cell value outside 0..=9
    #[error("Invalid value {value} at row {row}, col {col} (must be 0-9)")]
    InvalidValue { value: u8, row: usize, col: usize },

    /// Givens that admit no solution
    #[error("Puzzle has no solution")]
    Unsolvable,

    /// Difficulty name that is not easy, medium or hard
    #[error("Unknown difficulty {name:?}")]
    UnknownDifficulty { name: String },
}

pub type SudokuResult<T> = Result<T, SudokuError>;
