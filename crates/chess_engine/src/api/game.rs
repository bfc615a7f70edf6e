//! Game lifecycle management
//!
//! [`ChessGame`] wraps the pure rule functions with the state a single game
//! needs between user interactions: whose turn it is, the previous move (for
//! en passant), move history, captured pieces and the current selection.
//!
//! Invalid interactions are silently ignored: selecting an empty or
//! opponent square clears the selection, and moving to a square that is not
//! a legal target leaves the game unchanged.

use rand::Rng;
use tracing::{debug, info};

use super::moves::{apply_move, find_legal_move};
use super::state::get_game_state;
use crate::ai::choose_move;
use crate::board::Board;
use crate::error::ChessEngineResult;
use crate::move_gen::legal_moves;
use crate::types::*;

#[derive(Debug, Clone)]
pub struct ChessGame {
    board: Board,
    turn: Color,
    history: Vec<Move>,
    captured: Vec<Piece>,
    status: GameStatus,
    selected: Option<Square>,
}

impl Default for ChessGame {
    fn default() -> Self {
        ChessGame::new()
    }
}

impl ChessGame {
    /// Create a new game with the standard starting position
    pub fn new() -> Self {
        ChessGame {
            board: Board::standard(),
            turn: Color::White,
            history: Vec::new(),
            captured: Vec::new(),
            status: GameStatus::Playing,
            selected: None,
        }
    }

    /// Start from an arbitrary position
    ///
    /// # Errors
    ///
    /// Fails unless each color has exactly one king.
    pub fn from_board(board: Board, turn: Color) -> ChessEngineResult<Self> {
        board.validate()?;
        let status = get_game_state(&board, turn, None);
        Ok(ChessGame {
            board,
            turn,
            history: Vec::new(),
            captured: Vec::new(),
            status,
            selected: None,
        })
    }

    /// Reset the game to starting position
    pub fn reset(&mut self) {
        *self = ChessGame::new();
        debug!("chess game reset");
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn turn(&self) -> Color {
        self.turn
    }

    pub fn history(&self) -> &[Move] {
        &self.history
    }

    pub fn last_move(&self) -> Option<&Move> {
        self.history.last()
    }

    pub fn captured(&self) -> &[Piece] {
        &self.captured
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn selected(&self) -> Option<Square> {
        self.selected
    }

    pub fn is_over(&self) -> bool {
        self.status.is_over()
    }

    /// Legal moves of the side to move from `square`
    pub fn legal_moves_from(&self, square: Square) -> Vec<Move> {
        if self.is_over() {
            return Vec::new();
        }
        match self.board.get(square) {
            Some(piece) if piece.color == self.turn => {
                legal_moves(&self.board, square, self.last_move())
            }
            _ => Vec::new(),
        }
    }

    /// Select a piece and return its legal destination squares
    ///
    /// Selecting anything other than a piece of the side to move clears the
    /// selection and returns no targets.
    pub fn select(&mut self, square: Square) -> Vec<Square> {
        let targets: Vec<Square> = self
            .legal_moves_from(square)
            .iter()
            .map(|mv| mv.to)
            .collect();
        self.selected = match self.board.get(square) {
            Some(piece) if piece.color == self.turn && !self.is_over() => Some(square),
            _ => None,
        };
        targets
    }

    /// Click-style interaction: move the selected piece or change selection
    pub fn click(&mut self, square: Square) -> Option<Move> {
        if let Some(from) = self.selected {
            if let Some(mv) = self.try_move(from, square) {
                return Some(mv);
            }
        }
        self.select(square);
        None
    }

    /// Play `from -> to` if legal, promoting to a queen
    pub fn try_move(&mut self, from: Square, to: Square) -> Option<Move> {
        self.try_move_with_promotion(from, to, PieceKind::Queen)
    }

    /// Play `from -> to` if legal, choosing the promotion piece
    ///
    /// Kings and pawns are not valid promotion choices; those fall back to a queen.
    pub fn try_move_with_promotion(
        &mut self,
        from: Square,
        to: Square,
        promotion: PieceKind,
    ) -> Option<Move> {
        if self.is_over() {
            return None;
        }
        match self.board.get(from) {
            Some(piece) if piece.color == self.turn => {}
            _ => return None,
        }

        let mut mv = find_legal_move(&self.board, from, to, self.last_move())?;
        if mv.is_promotion() && !matches!(promotion, PieceKind::King | PieceKind::Pawn) {
            mv.promotion = Some(promotion);
        }
        self.play(mv);
        Some(mv)
    }

    /// Let the heuristic player choose and play a move for the side to move
    pub fn computer_move<R: Rng + ?Sized>(&mut self, rng: &mut R) -> Option<Move> {
        if self.is_over() {
            return None;
        }
        let mv = choose_move(&self.board, self.turn, self.last_move(), rng)?;
        self.play(mv);
        Some(mv)
    }

    fn play(&mut self, mv: Move) {
        self.board = apply_move(&self.board, &mv);
        if let Some(piece) = mv.captured {
            self.captured.push(piece);
        }
        self.history.push(mv);
        self.turn = self.turn.opponent();
        self.selected = None;
        self.status = get_game_state(&self.board, self.turn, self.last_move());

        debug!(%mv, status = ?self.status, "move played");
        if self.status.is_over() {
            info!(status = ?self.status, plies = self.history.len(), "chess game over");
        }
    }
}
