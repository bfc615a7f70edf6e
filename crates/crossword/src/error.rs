//! Error types for the crossword builder
//!
//! Building never fails: unusable or unplaceable words are dropped and
//! logged. Errors only come from reading word lists.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum CrosswordError {
    /// Word list that is not a JSON array of `{ "word", "clue" }` objects
    #[error("Invalid word list: {0}")]
    InvalidWordList(#[from] serde_json::Error),

    /// Word list with no entries at all
    #[error("Word list is empty")]
    EmptyWordList,
}

pub type CrosswordResult<T> = Result<T, CrosswordError>;
