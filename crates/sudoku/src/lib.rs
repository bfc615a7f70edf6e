//! # Sudoku Engine
//!
//! Randomized backtracking generation, difficulty-based cell removal and
//! conflict checking for 9x9 sudoku.
//!
//! ```rust
//! use sudoku::{generate, Difficulty};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(1);
//! let puzzle = generate(Difficulty::Easy, &mut rng);
//! assert_eq!(puzzle.filled_count(), 41);
//! assert!(puzzle.conflicts().is_empty());
//! ```

pub mod error;
pub mod generator;
pub mod grid;
pub mod puzzle;
pub mod solver;

pub use error::{SudokuError, SudokuResult};
pub use generator::{generate, Difficulty};
pub use grid::{find_box_conflicts, find_conflicts, Cells, SIZE};
pub use puzzle::Puzzle;
pub use solver::solve_random;
