//! King move generation
//!
//! Handles king-specific move generation. Kings move one square in any direction
//! (horizontally, vertically, or diagonally).
//!
//! ## King Movement Rules
//!
//! - Kings move one square in any direction (8 possible destinations)
//! - Cannot move to squares occupied by own pieces
//! - Cannot move to squares attacked by opponent pieces (handled by legal-move filtering)
//! - Can capture opponent pieces on destination squares
//! - Castling is handled separately in [`super::castling`]

use crate::board::Board;
use crate::constants::{Direction, KING_DIRS};
use crate::types::*;

/// Generate king moves from a given square (excluding castling)
pub fn generate_king_moves(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    push_step_moves(board, from, piece, &KING_DIRS, moves);
}

/// Apply each offset once, keeping empty squares and opponent pieces
///
/// Shared by kings and knights, the two fixed-offset movers.
pub(crate) fn push_step_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    offsets: &[Direction],
    moves: &mut Vec<Move>,
) {
    for &delta in offsets {
        let Some(to) = from.offset(delta) else {
            continue;
        };
        match board.get(to) {
            None => moves.push(Move::quiet(from, to, piece)),
            Some(target) if target.color != piece.color => {
                moves.push(Move::capture(from, to, piece, target))
            }
            Some(_) => {}
        }
    }
}
