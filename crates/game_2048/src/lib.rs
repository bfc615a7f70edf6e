//! # 2048 Game Engine
//!
//! Grid shift/merge logic, tile spawning and win/loss detection for the
//! 2048 sliding-tile game. Randomness is injected so games are reproducible
//! with a seeded RNG.
//!
//! ## Example
//!
//! ```rust
//! use game_2048::{Direction, Game};
//! use rand::rngs::StdRng;
//! use rand::SeedableRng;
//!
//! let mut rng = StdRng::seed_from_u64(42);
//! let mut game = Game::new(&mut rng);
//! let outcome = game.step(Direction::Left, &mut rng);
//! println!("Score: {}, Changed: {}", game.score(), outcome.changed);
//! ```

pub mod error;
pub mod game;
pub mod grid;

pub use error::{Game2048Error, Game2048Result};
pub use game::{Game, MoveOutcome};
pub use grid::{Direction, Grid, GRID_SIZE, MAX_TILE, WIN_TILE};
