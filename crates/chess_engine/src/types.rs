//! # Chess Engine Core Types
//!
//! ## Overview
//!
//! Pieces are small `Copy` values so that a whole [`crate::board::Board`] is
//! a plain 8x8 array that can be passed by value. Legality checks simulate
//! a move on a copy of the board and inspect the result, which keeps every
//! rule a pure function of `(board, last_move)`.
//!
//! ## The `Move` Structure
//!
//! A [`Move`] carries everything needed to apply it without re-deriving the
//! rules: the moving piece as it was before the move, the captured piece (if
//! any), the promotion target and the two special-move flags. The previous
//! move is what makes en passant decidable, so the engine threads
//! `last_move: Option<&Move>` through move generation.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    White,
    Black,
}

impl Color {
    pub fn opponent(self) -> Color {
        match self {
            Color::White => Color::Black,
            Color::Black => Color::White,
        }
    }

    /// Row delta of a single pawn step
    pub fn pawn_direction(self) -> i8 {
        match self {
            Color::White => -1,
            Color::Black => 1,
        }
    }

    pub fn pawn_start_row(self) -> u8 {
        match self {
            Color::White => WHITE_PAWN_ROW,
            Color::Black => BLACK_PAWN_ROW,
        }
    }

    pub fn back_row(self) -> u8 {
        match self {
            Color::White => WHITE_BACK_ROW,
            Color::Black => BLACK_BACK_ROW,
        }
    }

    /// Row on which this color's pawns promote
    pub fn promotion_row(self) -> u8 {
        self.opponent().back_row()
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Color::White => write!(f, "white"),
            Color::Black => write!(f, "black"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    Pawn,
    Knight,
    Bishop,
    Rook,
    Queen,
    King,
}

impl PieceKind {
    /// Lowercase FEN letter
    pub fn symbol(self) -> char {
        match self {
            PieceKind::Pawn => 'p',
            PieceKind::Knight => 'n',
            PieceKind::Bishop => 'b',
            PieceKind::Rook => 'r',
            PieceKind::Queen => 'q',
            PieceKind::King => 'k',
        }
    }

    pub fn from_symbol(symbol: char) -> Option<PieceKind> {
        match symbol.to_ascii_lowercase() {
            'p' => Some(PieceKind::Pawn),
            'n' => Some(PieceKind::Knight),
            'b' => Some(PieceKind::Bishop),
            'r' => Some(PieceKind::Rook),
            'q' => Some(PieceKind::Queen),
            'k' => Some(PieceKind::King),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub color: Color,
    pub has_moved: bool,
}

impl Piece {
    pub fn new(kind: PieceKind, color: Color) -> Self {
        Piece {
            kind,
            color,
            has_moved: false,
        }
    }

    /// FEN-style symbol: uppercase for white, lowercase for black
    pub fn symbol(&self) -> char {
        match self.color {
            Color::White => self.kind.symbol().to_ascii_uppercase(),
            Color::Black => self.kind.symbol(),
        }
    }
}

/// A board square, row 0 at the top (rank 8)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Square {
    pub row: u8,
    pub col: u8,
}

impl Square {
    pub fn new(row: i32, col: i32) -> ChessEngineResult<Self> {
        if (0..BOARD_SIZE as i32).contains(&row) && (0..BOARD_SIZE as i32).contains(&col) {
            Ok(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            Err(ChessEngineError::InvalidSquare { row, col })
        }
    }

    /// Step by `(row_delta, col_delta)`; `None` when leaving the board
    #[inline]
    pub fn offset(self, delta: Direction) -> Option<Square> {
        let row = self.row as i8 + delta.0;
        let col = self.col as i8 + delta.1;
        if (0..BOARD_SIZE as i8).contains(&row) && (0..BOARD_SIZE as i8).contains(&col) {
            Some(Square {
                row: row as u8,
                col: col as u8,
            })
        } else {
            None
        }
    }

    /// Parse `"e4"` style coordinates
    pub fn from_algebraic(text: &str) -> ChessEngineResult<Self> {
        let invalid = || ChessEngineError::InvalidNotation {
            text: text.to_string(),
        };
        let mut chars = text.chars();
        let (Some(file), Some(rank), None) = (chars.next(), chars.next(), chars.next()) else {
            return Err(invalid());
        };
        if !('a'..='h').contains(&file) || !('1'..='8').contains(&rank) {
            return Err(invalid());
        }
        let col = file as i32 - 'a' as i32;
        let row = BOARD_SIZE as i32 - (rank as i32 - '0' as i32);
        Square::new(row, col)
    }

    pub fn all() -> impl Iterator<Item = Square> {
        (0..BOARD_SIZE as u8)
            .flat_map(|row| (0..BOARD_SIZE as u8).map(move |col| Square { row, col }))
    }
}

impl fmt::Display for Square {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let file = (b'a' + self.col) as char;
        let rank = BOARD_SIZE as u8 - self.row;
        write!(f, "{}{}", file, rank)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Move {
    pub from: Square,
    pub to: Square,
    /// The moving piece as it stood before the move
    pub piece: Piece,
    pub captured: Option<Piece>,
    pub promotion: Option<PieceKind>,
    pub is_castle: bool,
    pub is_en_passant: bool,
}

impl Move {
    pub fn quiet(from: Square, to: Square, piece: Piece) -> Self {
        Move {
            from,
            to,
            piece,
            captured: None,
            promotion: None,
            is_castle: false,
            is_en_passant: false,
        }
    }

    pub fn capture(from: Square, to: Square, piece: Piece, captured: Piece) -> Self {
        Move {
            captured: Some(captured),
            ..Move::quiet(from, to, piece)
        }
    }

    /// A pawn reaching its promotion row from any square
    pub fn is_promotion(&self) -> bool {
        self.promotion.is_some()
    }

    /// Whether this was a pawn's two-square advance
    pub fn is_double_pawn_step(&self) -> bool {
        self.piece.kind == PieceKind::Pawn && self.from.row.abs_diff(self.to.row) == 2
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.from, self.to)?;
        if let Some(kind) = self.promotion {
            write!(f, "{}", kind.symbol())?;
        }
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameStatus {
    Playing,
    /// The side to move is in check but has a legal reply
    Check,
    Checkmate { winner: Color },
    Stalemate,
}

impl GameStatus {
    pub fn is_over(&self) -> bool {
        matches!(self, GameStatus::Checkmate { .. } | GameStatus::Stalemate)
    }
}
