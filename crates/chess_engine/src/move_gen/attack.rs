//! Attack detection and square checking
//!
//! Provides functions to check if squares are under attack and if kings are in check.
//! This module is critical for move legality validation and check detection.
//!
//! ## Algorithm
//!
//! To check if a square is attacked, we iterate through all pieces of the
//! attacking color and verify if any can reach the target square. This is
//! cheaper than generating every move and looking for the target, and it
//! ignores pins and self-check on purpose: a pinned piece still attacks.

use super::sliding::is_path_clear;
use crate::board::Board;
use crate::types::*;

/// Check if a square is under attack by pieces of the specified color
///
/// Used for:
/// - Check detection (is the king attacked?)
/// - Move legality (does this move leave the king in check?)
/// - Castling (may the king start, pass or land here?)
///
/// # Examples
///
/// ```rust,ignore
/// let e4 = Square::from_algebraic("e4")?;
/// let attacked = is_square_attacked(&board, e4, Color::Black);
/// ```
pub fn is_square_attacked(board: &Board, square: Square, by_color: Color) -> bool {
    board.pieces_of(by_color).any(|(from, piece)| {
        if from == square {
            return false;
        }
        match piece.kind {
            PieceKind::Pawn => can_pawn_attack(from, square, by_color),
            PieceKind::Knight => can_knight_attack(from, square),
            PieceKind::Bishop => can_bishop_attack(board, from, square),
            PieceKind::Rook => can_rook_attack(board, from, square),
            PieceKind::Queen => can_queen_attack(board, from, square),
            PieceKind::King => can_king_attack(from, square),
        }
    })
}

/// Pawns attack one square diagonally forward
fn can_pawn_attack(from: Square, to: Square, color: Color) -> bool {
    let row_delta = to.row as i8 - from.row as i8;
    row_delta == color.pawn_direction() && from.col.abs_diff(to.col) == 1
}

/// Knights attack in an L-shape and jump over pieces
fn can_knight_attack(from: Square, to: Square) -> bool {
    let row_diff = from.row.abs_diff(to.row);
    let col_diff = from.col.abs_diff(to.col);
    (row_diff == 2 && col_diff == 1) || (row_diff == 1 && col_diff == 2)
}

fn can_bishop_attack(board: &Board, from: Square, to: Square) -> bool {
    from.row.abs_diff(to.row) == from.col.abs_diff(to.col) && is_path_clear(board, from, to)
}

fn can_rook_attack(board: &Board, from: Square, to: Square) -> bool {
    (from.row == to.row || from.col == to.col) && is_path_clear(board, from, to)
}

fn can_queen_attack(board: &Board, from: Square, to: Square) -> bool {
    can_rook_attack(board, from, to) || can_bishop_attack(board, from, to)
}

fn can_king_attack(from: Square, to: Square) -> bool {
    from.row.abs_diff(to.row) <= 1 && from.col.abs_diff(to.col) <= 1
}

/// Check if the king of a given color is in check
///
/// A board without a king of that color is never in check.
pub fn is_in_check(board: &Board, color: Color) -> bool {
    board
        .find_king(color)
        .is_some_and(|king| is_square_attacked(board, king, color.opponent()))
}
