//! Chess rules engine
//!
//! Board representation, per-piece move generation, legality filtering,
//! check/checkmate/stalemate detection and a lightweight computer player.
//!
//! Every rule is a pure function of the board and the previous move; the
//! [`api::ChessGame`] controller adds the turn, history and selection state
//! an interactive game needs.
//!
//! ```rust
//! use chess_engine::api::ChessGame;
//! use chess_engine::types::Square;
//!
//! let mut game = ChessGame::new();
//! let e2 = Square::from_algebraic("e2").unwrap();
//! let e4 = Square::from_algebraic("e4").unwrap();
//! assert!(game.try_move(e2, e4).is_some());
//! ```

pub mod ai;
pub mod api;
pub mod board;
pub mod constants;
pub mod error;
pub mod move_gen;
pub mod types;

pub use api::ChessGame;
pub use board::Board;
pub use error::{ChessEngineError, ChessEngineResult};
pub use types::{Color, GameStatus, Move, Piece, PieceKind, Square};
