//! Public API for the chess engine
//!
//! Provides high-level functions for game management and move execution.
//!
//! ## Module Organization
//!
//! - `game` - Game lifecycle ([`ChessGame`])
//! - `moves` - Move execution and validation (apply_move, find_legal_move)
//! - `state` - Game state queries (get_game_state)

mod game;
mod moves;
mod state;

pub use game::ChessGame;
pub use moves::{apply_move, find_legal_move};
pub use state::{get_game_state, has_any_legal_move};
