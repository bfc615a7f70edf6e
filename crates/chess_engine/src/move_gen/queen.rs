//! Queen move generation
//!
//! Handles queen-specific move generation. Queens combine the movement patterns
//! of bishops and rooks, making them the most powerful piece on the board.
//!
//! ## Queen Movement Rules
//!
//! - Queens move like bishops (diagonally) OR rooks (horizontally/vertically)
//! - Cannot jump over pieces
//! - Movement stops when blocked by any piece

use super::bishop;
use super::rook;
use crate::board::Board;
use crate::types::*;

/// Generate queen moves from a given square
///
/// Queens combine bishop and rook movement, so this function generates
/// moves for both patterns and combines them.
pub fn generate_queen_moves(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    bishop::generate_bishop_moves(board, from, piece, moves);
    rook::generate_rook_moves(board, from, piece, moves);
}
