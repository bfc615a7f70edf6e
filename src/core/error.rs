//! Error types for core module
//!
//! Covers settings and score-book persistence. Game engines report their own
//! errors; command handlers wrap everything in `anyhow` for context.

use thiserror::Error;

/// Errors that can occur while loading or saving local state
#[derive(Error, Debug)]
pub enum ArcadeError {
    /// Settings or score file I/O error
    #[error("Storage I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Settings or score file serialization/deserialization error
    #[error("Storage serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type alias for core operations
pub type ArcadeResult<T> = Result<T, ArcadeError>;
