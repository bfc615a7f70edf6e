//! Computer player
//!
//! The computer does not search ahead. It scores each legal move with a flat
//! bonus table and picks uniformly among the [`AI_TOP_N`] best:
//!
//! | Feature   | Bonus |
//! |-----------|-------|
//! | Capture   | 3     |
//! | Promotion | 2     |
//! | Castle    | 1     |
//!
//! Bonuses add up, so a capturing promotion outranks a plain capture. Moves
//! are shuffled before the stable sort so that equally scored moves do not
//! always resolve to board order.

use rand::seq::{IndexedRandom, SliceRandom};
use rand::Rng;
use tracing::debug;

use crate::board::Board;
use crate::constants::*;
use crate::move_gen::all_legal_moves;
use crate::types::*;

/// Flat heuristic score of a move
pub fn score_move(mv: &Move) -> i32 {
    let mut score = 0;
    if mv.captured.is_some() {
        score += CAPTURE_SCORE;
    }
    if mv.is_promotion() {
        score += PROMOTION_SCORE;
    }
    if mv.is_castle {
        score += CASTLE_SCORE;
    }
    score
}

/// Legal moves for `color`, best heuristic score first
pub fn ranked_moves<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    last_move: Option<&Move>,
    rng: &mut R,
) -> Vec<Move> {
    let mut moves = all_legal_moves(board, color, last_move);
    moves.shuffle(rng);
    moves.sort_by_key(|mv| std::cmp::Reverse(score_move(mv)));
    moves
}

/// Pick the computer's move, `None` when `color` has no legal move
pub fn choose_move<R: Rng + ?Sized>(
    board: &Board,
    color: Color,
    last_move: Option<&Move>,
    rng: &mut R,
) -> Option<Move> {
    let ranked = ranked_moves(board, color, last_move, rng);
    let top = &ranked[..ranked.len().min(AI_TOP_N)];
    let choice = top.choose(rng).copied();
    if let Some(mv) = &choice {
        debug!(%color, %mv, score = score_move(mv), candidates = ranked.len(), "computer move");
    }
    choice
}
