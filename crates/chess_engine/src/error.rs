//! Error types for chess engine
//!
//! Gameplay never fails: illegal clicks and moves are reported through
//! `Option`/`Vec` return values. Errors are reserved for building positions
//! from external input (square coordinates, algebraic notation, ASCII boards).

use thiserror::Error;

/// Errors that can occur in the chess engine
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ChessEngineError {
    /// Square coordinates outside the 8x8 board
    #[error("Invalid square: row {row}, col {col} (must be 0-7)")]
    InvalidSquare { row: i32, col: i32 },

    /// Algebraic square that could not be parsed
    #[error("Invalid algebraic square: {text:?}")]
    InvalidNotation { text: String },

    /// Unknown piece character in a board diagram
    #[error("Unknown piece symbol {symbol:?} at row {row}")]
    UnknownPiece { symbol: char, row: usize },

    /// Board diagram or position that breaks the rules of a playable game
    #[error("Invalid board: {message}")]
    InvalidBoard { message: String },
}

/// Result type alias for chess engine operations
pub type ChessEngineResult<T> = Result<T, ChessEngineError>;
