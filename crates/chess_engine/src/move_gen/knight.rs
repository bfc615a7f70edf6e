//! Knight move generation
//!
//! Handles knight-specific move generation. Knights move in an L-shape pattern:
//! 2 squares in one direction, then 1 square perpendicular (or vice versa).
//!
//! ## Knight Movement Rules
//!
//! - Knights can jump over pieces (unlike sliding pieces)
//! - 8 possible destinations from most squares (fewer near edges)
//! - Cannot move to squares occupied by own pieces
//! - Can capture opponent pieces on destination squares

use crate::board::Board;
use crate::constants::KNIGHT_DIRS;
use crate::types::*;

use super::king::push_step_moves;

/// Generate knight moves from a given square
pub fn generate_knight_moves(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    push_step_moves(board, from, piece, &KNIGHT_DIRS, moves);
}
