//! Pawn move generation
//!
//! Handles pawn-specific move generation including:
//! - Single and double forward pushes
//! - Diagonal captures
//! - En passant
//! - Promotion (queen by default, see [`crate::api::ChessGame::try_move_with_promotion`])
//!
//! ## Pawn Movement Rules
//!
//! - **Forward push**: one square toward the opponent, onto an empty square
//! - **Double push**: from the start row, two squares, both empty
//! - **Captures**: one square diagonally forward onto an opponent piece
//! - **En passant**: only on the move immediately after an opponent pawn's
//!   double push that landed beside this pawn
//! - **Promotion**: any move reaching the opponent's back row

use crate::board::Board;
use crate::types::*;

/// Generate pawn moves from a given square
///
/// # Arguments
///
/// * `board` - The current position
/// * `from` - Square of the pawn
/// * `piece` - The pawn itself
/// * `last_move` - The move played just before, needed for en passant
/// * `moves` - Output vector to append moves to
pub fn generate_pawn_moves(
    board: &Board,
    from: Square,
    piece: Piece,
    last_move: Option<&Move>,
    moves: &mut Vec<Move>,
) {
    let dir = piece.color.pawn_direction();

    // Forward pushes
    if let Some(one) = from.offset((dir, 0)) {
        if board.is_empty(one) {
            push_pawn_move(Move::quiet(from, one, piece), moves);

            if from.row == piece.color.pawn_start_row() {
                if let Some(two) = from.offset((2 * dir, 0)) {
                    if board.is_empty(two) {
                        moves.push(Move::quiet(from, two, piece));
                    }
                }
            }
        }
    }

    // Diagonal captures
    for side in [-1, 1] {
        if let Some(to) = from.offset((dir, side)) {
            match board.get(to) {
                Some(target) if target.color != piece.color => {
                    push_pawn_move(Move::capture(from, to, piece, target), moves);
                }
                _ => {}
            }
        }
    }

    if let Some(mv) = en_passant_capture(board, from, piece, last_move) {
        moves.push(mv);
    }
}

fn push_pawn_move(mut mv: Move, moves: &mut Vec<Move>) {
    if mv.to.row == mv.piece.color.promotion_row() {
        mv.promotion = Some(PieceKind::Queen);
    }
    moves.push(mv);
}

fn en_passant_capture(
    board: &Board,
    from: Square,
    piece: Piece,
    last_move: Option<&Move>,
) -> Option<Move> {
    let last = last_move?;
    if !last.is_double_pawn_step() || last.piece.color == piece.color {
        return None;
    }
    if last.to.row != from.row || last.to.col.abs_diff(from.col) != 1 {
        return None;
    }

    // The double-stepped pawn must still be standing where it landed
    let victim = board.get(last.to)?;
    if victim.kind != PieceKind::Pawn || victim.color == piece.color {
        return None;
    }

    let to = from.offset((piece.color.pawn_direction(), last.to.col as i8 - from.col as i8))?;
    if !board.is_empty(to) {
        return None;
    }

    Some(Move {
        is_en_passant: true,
        ..Move::capture(from, to, piece, victim)
    })
}
