//! Move execution and validation
//!
//! Functions for executing moves and looking up legal ones.

use crate::board::Board;
use crate::move_gen::castling::castling_rook_squares;
use crate::move_gen::legal_moves;
use crate::types::*;

/// Execute a move on a copy of the board
///
/// Handles captures, en passant removal, the rook jump of castling and
/// promotion, and marks every moved piece as `has_moved`.
///
/// # Errors
///
/// This function does not validate move legality. Use [`find_legal_move`] or
/// [`crate::move_gen::legal_moves`] first.
///
/// # Examples
///
/// ```rust,ignore
/// let moves = legal_moves(&board, e2, None);
/// let next = apply_move(&board, &moves[0]);
/// ```
pub fn apply_move(board: &Board, mv: &Move) -> Board {
    let mut next = *board;

    next.set(mv.from, None);

    if mv.is_en_passant {
        next.set(
            Square {
                row: mv.from.row,
                col: mv.to.col,
            },
            None,
        );
    }

    if mv.is_castle {
        let (rook_from, rook_to) = castling_rook_squares(mv);
        if let Some(mut rook) = next.get(rook_from) {
            rook.has_moved = true;
            next.set(rook_from, None);
            next.set(rook_to, Some(rook));
        }
    }

    let placed = Piece {
        kind: mv.promotion.unwrap_or(mv.piece.kind),
        color: mv.piece.color,
        has_moved: true,
    };
    next.set(mv.to, Some(placed));

    next
}

/// Find the legal move from `from` to `to`, if there is one
///
/// The default promotion piece (queen) is kept for promoting pawn moves.
pub fn find_legal_move(
    board: &Board,
    from: Square,
    to: Square,
    last_move: Option<&Move>,
) -> Option<Move> {
    legal_moves(board, from, last_move)
        .into_iter()
        .find(|mv| mv.to == to)
}
