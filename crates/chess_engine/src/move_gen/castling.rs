//! Castling move generation
//!
//! Castling depends on more than the king's movement pattern:
//! - King and the castling rook have never moved
//! - Every square between them is empty
//! - The king's start, path and destination squares are not attacked
//!
//! The king's path is three squares on both wings (e-f-g or e-d-c); on the
//! queenside the b-file square must be empty but may be attacked.

use super::attack::is_square_attacked;
use crate::board::Board;
use crate::constants::*;
use crate::types::*;

/// Generate castling moves for an unmoved king on its home square
pub fn generate_castling_moves(board: &Board, from: Square, piece: Piece, moves: &mut Vec<Move>) {
    let home = Square {
        row: piece.color.back_row(),
        col: KING_START_COL,
    };
    if piece.kind != PieceKind::King || piece.has_moved || from != home {
        return;
    }

    for (rook_col, king_dest_col) in [
        (KINGSIDE_ROOK_COL, KINGSIDE_KING_DEST_COL),
        (QUEENSIDE_ROOK_COL, QUEENSIDE_KING_DEST_COL),
    ] {
        if can_castle(board, home, piece.color, rook_col, king_dest_col) {
            moves.push(Move {
                is_castle: true,
                ..Move::quiet(
                    home,
                    Square {
                        row: home.row,
                        col: king_dest_col,
                    },
                    piece,
                )
            });
        }
    }
}

fn can_castle(board: &Board, king: Square, color: Color, rook_col: u8, king_dest_col: u8) -> bool {
    let row = king.row;
    let rook_square = Square { row, col: rook_col };
    match board.get(rook_square) {
        Some(rook) if rook.kind == PieceKind::Rook && rook.color == color && !rook.has_moved => {}
        _ => return false,
    }

    let (low, high) = if rook_col < king.col {
        (rook_col + 1, king.col - 1)
    } else {
        (king.col + 1, rook_col - 1)
    };
    if !(low..=high).all(|col| board.is_empty(Square { row, col })) {
        return false;
    }

    let (path_low, path_high) = if king_dest_col < king.col {
        (king_dest_col, king.col)
    } else {
        (king.col, king_dest_col)
    };
    let enemy = color.opponent();
    (path_low..=path_high).all(|col| !is_square_attacked(board, Square { row, col }, enemy))
}

/// Rook relocation `(from, to)` for a castling king move
pub fn castling_rook_squares(king_move: &Move) -> (Square, Square) {
    let row = king_move.to.row;
    if king_move.to.col == KINGSIDE_KING_DEST_COL {
        (
            Square {
                row,
                col: KINGSIDE_ROOK_COL,
            },
            Square {
                row,
                col: KINGSIDE_KING_DEST_COL - 1,
            },
        )
    } else {
        (
            Square {
                row,
                col: QUEENSIDE_ROOK_COL,
            },
            Square {
                row,
                col: QUEENSIDE_KING_DEST_COL + 1,
            },
        )
    }
}
