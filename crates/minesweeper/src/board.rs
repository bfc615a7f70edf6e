//! Minefield generation and play
//!
//! Mines are placed once at generation by drawing uniform random cells and
//! retrying duplicates until the requested count is reached. Neighbor counts
//! are computed immediately afterwards and never change.
//!
//! Revealing a zero-count cell floods outward with an explicit stack. The
//! flood uncovers the connected zero region and its numbered border, never
//! crossing a mine or a flag.

use std::fmt;

use rand::Rng;
use tracing::{debug, info};

use crate::error::{MinesweeperError, MinesweeperResult};
use crate::types::{Cell, GameState, Preset, RevealOutcome};

const NEIGHBOR_OFFSETS: [(isize, isize); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Board {
    rows: usize,
    cols: usize,
    mines: usize,
    cells: Vec<Cell>,
    flags: usize,
    revealed_safe: usize,
    state: GameState,
}

impl Board {
    /// Generate a board with `mines` randomly placed mines
    ///
    /// # Errors
    ///
    /// [`MinesweeperError::EmptyBoard`] when either dimension is zero and
    /// [`MinesweeperError::TooManyMines`] when `mines > rows * cols`.
    pub fn generate<R: Rng + ?Sized>(
        rows: usize,
        cols: usize,
        mines: usize,
        rng: &mut R,
    ) -> MinesweeperResult<Self> {
        validate_dimensions(rows, cols, mines)?;

        let mut board = Board::blank(rows, cols, mines);
        let mut placed = 0;
        while placed < mines {
            let index = rng.random_range(0..rows * cols);
            if !board.cells[index].is_mine {
                board.cells[index].is_mine = true;
                placed += 1;
            }
        }
        board.compute_neighbor_counts();

        debug!(rows, cols, mines, "minesweeper board generated");
        Ok(board)
    }

    /// Generate a board of a standard size
    pub fn from_preset<R: Rng + ?Sized>(preset: Preset, rng: &mut R) -> Self {
        let (rows, cols, mines) = preset.dimensions();
        match Board::generate(rows, cols, mines, rng) {
            Ok(board) => board,
            // Preset dimensions are always valid
            Err(_) => Board::blank(rows, cols, 0),
        }
    }

    /// Build a board with mines at the given coordinates
    ///
    /// Duplicate coordinates count once.
    pub fn with_mines(rows: usize, cols: usize, mines: &[(usize, usize)]) -> MinesweeperResult<Self> {
        validate_dimensions(rows, cols, 0)?;

        let mut board = Board::blank(rows, cols, 0);
        for &(row, col) in mines {
            if row >= rows || col >= cols {
                return Err(MinesweeperError::MineOutOfBounds { row, col });
            }
            let cell = &mut board.cells[row * cols + col];
            if !cell.is_mine {
                cell.is_mine = true;
                board.mines += 1;
            }
        }
        board.compute_neighbor_counts();
        Ok(board)
    }

    fn blank(rows: usize, cols: usize, mines: usize) -> Self {
        Board {
            rows,
            cols,
            mines,
            cells: vec![Cell::default(); rows * cols],
            flags: 0,
            revealed_safe: 0,
            state: GameState::Playing,
        }
    }

    fn compute_neighbor_counts(&mut self) {
        for row in 0..self.rows {
            for col in 0..self.cols {
                let count = self
                    .neighbors(row, col)
                    .filter(|&(r, c)| self.cells[self.index(r, c)].is_mine)
                    .count();
                let index = self.index(row, col);
                self.cells[index].neighbor_mines = count as u8;
            }
        }
    }

    #[inline]
    fn index(&self, row: usize, col: usize) -> usize {
        row * self.cols + col
    }

    /// In-bounds neighbours of a cell, up to eight
    pub fn neighbors(&self, row: usize, col: usize) -> impl Iterator<Item = (usize, usize)> + '_ {
        NEIGHBOR_OFFSETS.iter().filter_map(move |&(dr, dc)| {
            let r = row.checked_add_signed(dr)?;
            let c = col.checked_add_signed(dc)?;
            (r < self.rows && c < self.cols).then_some((r, c))
        })
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    pub fn mine_count(&self) -> usize {
        self.mines
    }

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&Cell> {
        (row < self.rows && col < self.cols).then(|| &self.cells[self.index(row, col)])
    }

    /// Mines minus placed flags; negative when over-flagged
    pub fn flags_remaining(&self) -> isize {
        self.mines as isize - self.flags as isize
    }

    pub fn revealed_count(&self) -> usize {
        self.cells.iter().filter(|cell| cell.is_revealed).count()
    }

    /// Reveal a cell, flooding outward from zero-count cells
    pub fn reveal(&mut self, row: usize, col: usize) -> RevealOutcome {
        if self.state.is_over() || row >= self.rows || col >= self.cols {
            return RevealOutcome::Ignored;
        }
        let start = self.index(row, col);
        let cell = self.cells[start];
        if cell.is_revealed || cell.is_flagged {
            return RevealOutcome::Ignored;
        }

        if cell.is_mine {
            self.explode();
            info!(row, col, "mine revealed, game lost");
            return RevealOutcome::Exploded;
        }

        let mut uncovered = 0;
        let mut stack = vec![(row, col)];
        while let Some((r, c)) = stack.pop() {
            let index = self.index(r, c);
            let cell = &mut self.cells[index];
            if cell.is_revealed || cell.is_flagged || cell.is_mine {
                continue;
            }
            cell.is_revealed = true;
            uncovered += 1;

            if cell.neighbor_mines == 0 {
                stack.extend(self.neighbors(r, c).filter(|&(nr, nc)| {
                    let next = &self.cells[self.index(nr, nc)];
                    !next.is_revealed && !next.is_flagged
                }));
            }
        }

        self.revealed_safe += uncovered;
        if self.revealed_safe == self.rows * self.cols - self.mines {
            self.state = GameState::Won;
            info!(rows = self.rows, cols = self.cols, mines = self.mines, "board cleared, game won");
        }
        RevealOutcome::Revealed(uncovered)
    }

    fn explode(&mut self) {
        self.state = GameState::Lost;
        for cell in self.cells.iter_mut().filter(|cell| cell.is_mine) {
            cell.is_revealed = true;
        }
    }

    /// Toggle a flag on a hidden cell, returning whether it is now flagged
    ///
    /// Revealed cells, out-of-bounds coordinates and finished games are
    /// ignored and report `false`.
    pub fn toggle_flag(&mut self, row: usize, col: usize) -> bool {
        if self.state.is_over() || row >= self.rows || col >= self.cols {
            return false;
        }
        let index = self.index(row, col);
        let cell = &mut self.cells[index];
        if cell.is_revealed {
            return false;
        }
        cell.is_flagged = !cell.is_flagged;
        let flagged = cell.is_flagged;
        if flagged {
            self.flags += 1;
        } else {
            self.flags -= 1;
        }
        flagged
    }
}

fn validate_dimensions(rows: usize, cols: usize, mines: usize) -> MinesweeperResult<()> {
    if rows == 0 || cols == 0 {
        return Err(MinesweeperError::EmptyBoard { rows, cols });
    }
    if mines > rows * cols {
        return Err(MinesweeperError::TooManyMines { rows, cols, mines });
    }
    Ok(())
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.cols) {
            let line: String = row.iter().map(Cell::symbol).collect();
            writeln!(f, "{}", line)?;
        }
        Ok(())
    }
}
