//! Board representation and helper functions
//!
//! Provides fundamental board operations used throughout the engine:
//! - Square access and piece queries
//! - Standard and empty setups
//! - ASCII diagrams for tests and the command-line front end

use std::fmt;

use crate::constants::*;
use crate::error::{ChessEngineError, ChessEngineResult};
use crate::types::*;

/// 8x8 grid of optional pieces, indexed `[row][col]`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Board {
    squares: [[Option<Piece>; BOARD_SIZE]; BOARD_SIZE],
}

impl Default for Board {
    fn default() -> Self {
        Board::standard()
    }
}

impl Board {
    pub fn empty() -> Self {
        Board {
            squares: [[None; BOARD_SIZE]; BOARD_SIZE],
        }
    }

    /// Initialize a board to the standard starting position
    pub fn standard() -> Self {
        let mut board = Board::empty();
        for (col, &kind) in BACK_RANK.iter().enumerate() {
            board.squares[BLACK_BACK_ROW as usize][col] = Some(Piece::new(kind, Color::Black));
            board.squares[BLACK_PAWN_ROW as usize][col] =
                Some(Piece::new(PieceKind::Pawn, Color::Black));
            board.squares[WHITE_PAWN_ROW as usize][col] =
                Some(Piece::new(PieceKind::Pawn, Color::White));
            board.squares[WHITE_BACK_ROW as usize][col] = Some(Piece::new(kind, Color::White));
        }
        board
    }

    /// Parse an 8-line diagram, row 0 first
    ///
    /// Uppercase letters are white, lowercase black, `.` is empty. Pieces
    /// standing off their starting square are marked as having moved so that
    /// castling rights follow the diagram.
    ///
    /// ```text
    /// r...k..r
    /// ........
    /// ........
    /// ........
    /// ........
    /// ........
    /// ........
    /// R...K..R
    /// ```
    pub fn from_ascii(diagram: &str) -> ChessEngineResult<Self> {
        let rows: Vec<&str> = diagram
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        if rows.len() != BOARD_SIZE {
            return Err(ChessEngineError::InvalidBoard {
                message: format!("expected {} rows, found {}", BOARD_SIZE, rows.len()),
            });
        }

        let mut board = Board::empty();
        for (row, line) in rows.iter().enumerate() {
            let symbols: Vec<char> = line.chars().filter(|c| !c.is_whitespace()).collect();
            if symbols.len() != BOARD_SIZE {
                return Err(ChessEngineError::InvalidBoard {
                    message: format!("row {} has {} squares", row, symbols.len()),
                });
            }
            for (col, &symbol) in symbols.iter().enumerate() {
                if symbol == '.' {
                    continue;
                }
                let kind = PieceKind::from_symbol(symbol)
                    .ok_or(ChessEngineError::UnknownPiece { symbol, row })?;
                let color = if symbol.is_ascii_uppercase() {
                    Color::White
                } else {
                    Color::Black
                };
                let square = Square {
                    row: row as u8,
                    col: col as u8,
                };
                let mut piece = Piece::new(kind, color);
                piece.has_moved = !is_home_square(piece, square);
                board.set(square, Some(piece));
            }
        }
        Ok(board)
    }

    #[inline]
    pub fn get(&self, square: Square) -> Option<Piece> {
        self.squares[square.row as usize][square.col as usize]
    }

    #[inline]
    pub fn set(&mut self, square: Square, piece: Option<Piece>) {
        self.squares[square.row as usize][square.col as usize] = piece;
    }

    #[inline]
    pub fn is_empty(&self, square: Square) -> bool {
        self.get(square).is_none()
    }

    /// Iterate over occupied squares
    pub fn pieces(&self) -> impl Iterator<Item = (Square, Piece)> + '_ {
        Square::all().filter_map(move |square| self.get(square).map(|piece| (square, piece)))
    }

    pub fn pieces_of(&self, color: Color) -> impl Iterator<Item = (Square, Piece)> + '_ {
        self.pieces().filter(move |(_, piece)| piece.color == color)
    }

    /// Find the king position for a color
    pub fn find_king(&self, color: Color) -> Option<Square> {
        self.pieces_of(color)
            .find(|(_, piece)| piece.kind == PieceKind::King)
            .map(|(square, _)| square)
    }

    /// Checks the one-king-per-color invariant of an active game
    pub fn validate(&self) -> ChessEngineResult<()> {
        for color in [Color::White, Color::Black] {
            let kings = self
                .pieces_of(color)
                .filter(|(_, piece)| piece.kind == PieceKind::King)
                .count();
            if kings != 1 {
                return Err(ChessEngineError::InvalidBoard {
                    message: format!("{} has {} kings", color, kings),
                });
            }
        }
        Ok(())
    }
}

fn is_home_square(piece: Piece, square: Square) -> bool {
    match piece.kind {
        PieceKind::Pawn => square.row == piece.color.pawn_start_row(),
        kind => square.row == piece.color.back_row() && BACK_RANK[square.col as usize] == kind,
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..BOARD_SIZE {
            write!(f, "{} ", BOARD_SIZE - row)?;
            for col in 0..BOARD_SIZE {
                let symbol = self.squares[row][col].map_or('.', |piece| piece.symbol());
                write!(f, "{}", symbol)?;
            }
            writeln!(f)?;
        }
        write!(f, "  abcdefgh")
    }
}
