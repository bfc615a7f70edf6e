//! # Minesweeper Engine
//!
//! Random mine placement, neighbor counting, flood-fill reveal, flags and
//! win/loss detection.
//!
//! ```rust
//! use minesweeper::{Board, GameState, Preset};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(7);
//! let mut board = Board::from_preset(Preset::Beginner, &mut rng);
//! assert_eq!(board.mine_count(), 10);
//! assert_eq!(board.state(), GameState::Playing);
//! board.reveal(4, 4);
//! ```

pub mod board;
pub mod error;
pub mod types;

pub use board::Board;
pub use error::{MinesweeperError, MinesweeperResult};
pub use types::{Cell, GameState, Preset, RevealOutcome};
