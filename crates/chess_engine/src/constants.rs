//! # Chess Engine Constants - Directions, Setup & AI Heuristic Weights
//!
//! ## Coordinate System
//!
//! Squares are addressed as `(row, col)` with row 0 at the top of the
//! displayed board (black's back rank, rank 8) and row 7 at the bottom
//! (white's back rank, rank 1). Column 0 is the a-file.
//!
//! White pawns therefore advance toward row 0 and black pawns toward row 7.
//!
//! ## Direction Vectors
//!
//! Movement is encoded as `(row_delta, col_delta)` pairs:
//! - **North (N)**: `(-1, 0)` (toward black's side)
//! - **South (S)**: `(1, 0)`
//! - **East (O)**: `(0, 1)` (toward the h-file)
//! - **West (W)**: `(0, -1)`
//! - **Diagonals**: combinations (NO, NW, SO, SW)
//!
//! Sliding pieces repeat a direction until blocked; knights and kings apply
//! each offset exactly once.
//!
//! ## Heuristic Weights
//!
//! The computer player does not search. It scores each legal move with a flat
//! bonus table (capture > promotion > castle) and picks at random among the
//! best few. See [`crate::ai`].

use crate::types::PieceKind;

pub type Direction = (i8, i8);

pub const N: Direction = (-1, 0);
pub const S: Direction = (1, 0);
pub const O: Direction = (0, 1);
pub const W: Direction = (0, -1);
pub const NO: Direction = (-1, 1);
pub const NW: Direction = (-1, -1);
pub const SO: Direction = (1, 1);
pub const SW: Direction = (1, -1);

pub const BISHOP_DIRS: [Direction; 4] = [NO, SO, NW, SW];
pub const ROOK_DIRS: [Direction; 4] = [N, O, S, W];
pub const QUEEN_DIRS: [Direction; 8] = [N, O, S, W, NO, SO, NW, SW];
pub const KING_DIRS: [Direction; 8] = QUEEN_DIRS;
pub const KNIGHT_DIRS: [Direction; 8] = [
    (-2, 1), (-2, -1), (2, 1), (2, -1),
    (-1, 2), (1, 2), (-1, -2), (1, -2),
];

pub const BOARD_SIZE: usize = 8;

/// Back rank order from the a-file to the h-file
pub const BACK_RANK: [PieceKind; BOARD_SIZE] = [
    PieceKind::Rook,
    PieceKind::Knight,
    PieceKind::Bishop,
    PieceKind::Queen,
    PieceKind::King,
    PieceKind::Bishop,
    PieceKind::Knight,
    PieceKind::Rook,
];

pub const WHITE_BACK_ROW: u8 = 7;
pub const BLACK_BACK_ROW: u8 = 0;
pub const WHITE_PAWN_ROW: u8 = 6;
pub const BLACK_PAWN_ROW: u8 = 1;

pub const KING_START_COL: u8 = 4;
pub const KINGSIDE_ROOK_COL: u8 = 7;
pub const QUEENSIDE_ROOK_COL: u8 = 0;
pub const KINGSIDE_KING_DEST_COL: u8 = 6;
pub const QUEENSIDE_KING_DEST_COL: u8 = 2;

pub const CAPTURE_SCORE: i32 = 3;
pub const PROMOTION_SCORE: i32 = 2;
pub const CASTLE_SCORE: i32 = 1;

/// Number of best-scoring moves the computer player chooses between
pub const AI_TOP_N: usize = 3;
