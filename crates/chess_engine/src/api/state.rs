//! Game state queries
//!
//! Functions for deciding whether the side to move is playing, in check,
//! checkmated or stalemated.

use crate::board::Board;
use crate::move_gen::{generate_pseudo_legal_moves, is_in_check, is_self_check_free};
use crate::types::*;

/// Get the game state for the side about to move
///
/// With no legal move available the game is over: checkmate if the king is
/// attacked, stalemate otherwise.
pub fn get_game_state(board: &Board, side_to_move: Color, last_move: Option<&Move>) -> GameStatus {
    let in_check = is_in_check(board, side_to_move);
    let has_legal_moves = has_any_legal_move(board, side_to_move, last_move);

    match (has_legal_moves, in_check) {
        (false, true) => GameStatus::Checkmate {
            winner: side_to_move.opponent(),
        },
        (false, false) => GameStatus::Stalemate,
        (true, true) => GameStatus::Check,
        (true, false) => GameStatus::Playing,
    }
}

/// Stops at the first legal move instead of collecting them all
pub fn has_any_legal_move(board: &Board, color: Color, last_move: Option<&Move>) -> bool {
    generate_pseudo_legal_moves(board, color, last_move)
        .iter()
        .any(|mv| is_self_check_free(board, mv))
}
