//! Bishop move generation
//!
//! Bishops slide diagonally any number of squares until blocked.

use super::sliding::generate_sliding_moves;
use crate::board::Board;
use crate::constants::BISHOP_DIRS;
use crate::types::*;

/// Generate bishop moves from a given square
pub fn generate_bishop_moves(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    generate_sliding_moves(board, from, piece, &BISHOP_DIRS, moves);
}
