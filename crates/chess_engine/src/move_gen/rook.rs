//! Rook move generation
//!
//! Rooks slide horizontally or vertically any number of squares until blocked.
//! Their castling partner role lives in [`super::castling`].

use super::sliding::generate_sliding_moves;
use crate::board::Board;
use crate::constants::ROOK_DIRS;
use crate::types::*;

/// Generate rook moves from a given square
pub fn generate_rook_moves(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    generate_sliding_moves(board, from, piece, &ROOK_DIRS, moves);
}
