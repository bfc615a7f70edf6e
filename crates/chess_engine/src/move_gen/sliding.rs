//! Sliding piece move generation
//!
//! Common functionality for sliding pieces (bishops, rooks, queens).
//! These pieces can move multiple squares in a direction until blocked.
//!
//! ## Algorithm
//!
//! For each direction we cast a ray from the source square:
//! 1. Empty squares are valid moves and the ray continues
//! 2. An opponent piece is a valid capture and ends the ray
//! 3. An own piece ends the ray without a move

use crate::board::Board;
use crate::constants::Direction;
use crate::types::*;

/// Generate moves for a sliding piece along the given directions
pub fn generate_sliding_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    directions: &[Direction],
    moves: &mut Vec<Move>,
) {
    for &dir in directions {
        let mut current = from;
        while let Some(next) = current.offset(dir) {
            match board.get(next) {
                None => moves.push(Move::quiet(from, next, piece)),
                Some(target) => {
                    if target.color != piece.color {
                        moves.push(Move::capture(from, next, piece, target));
                    }
                    break;
                }
            }
            current = next;
        }
    }
}

/// Whether every square strictly between `from` and `to` is empty
///
/// The caller guarantees that both squares share a row, column or diagonal.
pub(crate) fn is_path_clear(board: &Board, from: Square, to: Square) -> bool {
    let dir = (
        (to.row as i8 - from.row as i8).signum(),
        (to.col as i8 - from.col as i8).signum(),
    );
    let mut current = from;
    while let Some(next) = current.offset(dir) {
        if next == to {
            return true;
        }
        if !board.is_empty(next) {
            return false;
        }
        current = next;
    }
    false
}
