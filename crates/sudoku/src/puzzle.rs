//! Playable puzzle state
//!
//! Original cells are fixed. Player edits go through [`Puzzle::set_cell`],
//! which refreshes the row/column conflict set after every change.

use std::collections::BTreeSet;
use std::fmt;

use rand::Rng;
use tracing::info;

use crate::error::{SudokuError, SudokuResult};
use crate::grid::{self, Cells, SIZE};
use crate::solver::solve_random;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Puzzle {
    cells: Cells,
    solution: Cells,
    original: [[bool; SIZE]; SIZE],
    conflicts: BTreeSet<(usize, usize)>,
}

impl Puzzle {
    pub(crate) fn new(cells: Cells, solution: Cells) -> Self {
        let original = cells.map(|row| row.map(|value| value != 0));
        Puzzle {
            conflicts: grid::find_conflicts(&cells),
            cells,
            solution,
            original,
        }
    }

    /// Start a puzzle from externally supplied givens
    ///
    /// # Errors
    ///
    /// [`SudokuError::InvalidValue`] for values above 9 and
    /// [`SudokuError::Unsolvable`] when the givens break a rule or admit
    /// no solution.
    pub fn from_givens<R: Rng + ?Sized>(cells: Cells, rng: &mut R) -> SudokuResult<Self> {
        grid::validate(&cells)?;
        if !grid::find_conflicts(&cells).is_empty() || !grid::find_box_conflicts(&cells).is_empty() {
            return Err(SudokuError::Unsolvable);
        }
        let mut solution = cells;
        if !solve_random(&mut solution, rng) {
            return Err(SudokuError::Unsolvable);
        }
        Ok(Puzzle::new(cells, solution))
    }

    pub fn cells(&self) -> &Cells {
        &self.cells
    }

    pub fn solution(&self) -> &Cells {
        &self.solution
    }

    pub fn get(&self, row: usize, col: usize) -> Option<u8> {
        self.cells.get(row)?.get(col).copied()
    }

    pub fn is_original(&self, row: usize, col: usize) -> bool {
        row < SIZE && col < SIZE && self.original[row][col]
    }

    /// Current row/column conflicts
    pub fn conflicts(&self) -> &BTreeSet<(usize, usize)> {
        &self.conflicts
    }

    pub fn filled_count(&self) -> usize {
        grid::filled_count(&self.cells)
    }

    /// Write `value` (0 clears) into a player cell
    ///
    /// Out-of-range coordinates, values above 9 and original cells are
    /// ignored and report `false`.
    pub fn set_cell(&mut self, row: usize, col: usize, value: u8) -> bool {
        if row >= SIZE || col >= SIZE || value as usize > SIZE || self.original[row][col] {
            return false;
        }
        self.cells[row][col] = value;
        self.conflicts = grid::find_conflicts(&self.cells);
        if self.is_solved() {
            info!("sudoku solved");
        }
        true
    }

    /// Full grid that satisfies the row, column and box rules
    pub fn is_solved(&self) -> bool {
        grid::is_complete_solution(&self.cells)
    }

    /// Clear every player entry
    pub fn reset(&mut self) {
        for row in 0..SIZE {
            for col in 0..SIZE {
                if !self.original[row][col] {
                    self.cells[row][col] = 0;
                }
            }
        }
        self.conflicts = grid::find_conflicts(&self.cells);
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", grid::render(&self.cells))
    }
}
