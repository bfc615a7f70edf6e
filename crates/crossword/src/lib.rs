//! # Crossword Builder
//!
//! Greedy crossword layout from a list of words and clues. Answers are
//! normalized (uppercase, no punctuation, Arabic diacritics removed and
//! letter variants folded) before placement and before checking.
//!
//! ```rust
//! use crossword::{CrosswordBuilder, WordEntry};
//!
//! let words = vec![
//!     WordEntry::new("planet", "Earth is one"),
//!     WordEntry::new("moon", "Orbits the Earth"),
//! ];
//! let puzzle = CrosswordBuilder::new(12).build(&words);
//! assert_eq!(puzzle.words.len(), 2);
//! assert_eq!(puzzle.words[0].answer, "PLANET");
//! ```

pub mod builder;
pub mod error;
pub mod normalize;
pub mod puzzle;

pub use builder::{load_entries, CrosswordBuilder, WordEntry, DEFAULT_MAX_WORDS, MIN_WORD_LEN};
pub use error::{CrosswordError, CrosswordResult};
pub use normalize::normalize;
pub use puzzle::{Orientation, PlacedWord, Puzzle};
