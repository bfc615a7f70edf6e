//! Move generation
//!
//! Two layers, mirroring how the rules are usually stated:
//!
//! 1. **Pseudo-legal** moves follow each piece's movement pattern and the
//!    occupancy of the board, but may leave the mover's own king attacked.
//! 2. **Legal** moves are the pseudo-legal moves that survive simulation:
//!    the move is applied to a copy of the board and rejected if the
//!    mover's king is then attacked.
//!
//! Castling is the one pseudo-legal generator that already consults attack
//! information, since the king may not start, pass through, or land on an
//! attacked square.

pub mod attack;
pub mod bishop;
pub mod castling;
pub mod king;
pub mod knight;
pub mod pawn;
pub mod queen;
pub mod rook;
pub mod sliding;


use crate::api::apply_move;
use crate::board::Board;
use crate::types::*;

pub use attack::{is_in_check, is_square_attacked};

/// Generate pseudo-legal moves for the piece standing on `from`
///
/// Returns an empty list for empty squares.
pub fn pseudo_legal_moves(board: &Board, from: Square, last_move: Option<&Move>) -> Vec<Move> {
    let mut moves = Vec::with_capacity(28);
    let Some(piece) = board.get(from) else {
        return moves;
    };

    match piece.kind {
        PieceKind::Pawn => pawn::generate_pawn_moves(board, from, piece, last_move, &mut moves),
        PieceKind::Knight => knight::generate_knight_moves(board, from, piece, &mut moves),
        PieceKind::Bishop => bishop::generate_bishop_moves(board, from, piece, &mut moves),
        PieceKind::Rook => rook::generate_rook_moves(board, from, piece, &mut moves),
        PieceKind::Queen => queen::generate_queen_moves(board, from, piece, &mut moves),
        PieceKind::King => {
            king::generate_king_moves(board, from, piece, &mut moves);
            castling::generate_castling_moves(board, from, piece, &mut moves);
        }
    }

    moves
}

/// Generate all pseudo-legal moves for a color
pub fn generate_pseudo_legal_moves(
    board: &Board,
    color: Color,
    last_move: Option<&Move>,
) -> Vec<Move> {
    board
        .pieces_of(color)
        .flat_map(|(square, _)| pseudo_legal_moves(board, square, last_move))
        .collect()
}

/// Whether playing `mv` keeps the mover's king out of check
pub fn is_self_check_free(board: &Board, mv: &Move) -> bool {
    let next = apply_move(board, mv);
    !is_in_check(&next, mv.piece.color)
}

/// Legal moves for the piece on `from`
pub fn legal_moves(board: &Board, from: Square, last_move: Option<&Move>) -> Vec<Move> {
    pseudo_legal_moves(board, from, last_move)
        .into_iter()
        .filter(|mv| is_self_check_free(board, mv))
        .collect()
}

/// Legal moves for every piece of a color
pub fn all_legal_moves(board: &Board, color: Color, last_move: Option<&Move>) -> Vec<Move> {
    generate_pseudo_legal_moves(board, color, last_move)
        .into_iter()
        .filter(|mv| is_self_check_free(board, mv))
        .collect()
}
