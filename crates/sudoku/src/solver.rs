//! Randomized backtracking solver
//!
//! Empty cells are filled in row-major order. Each depth keeps its own
//! shuffled candidate list on an explicit stack; exhausting a list clears
//! the cell and backtracks one level.

use rand::seq::SliceRandom;
use rand::Rng;

use crate::grid::{is_safe, Cells, SIZE};

/// Fill every empty cell of `cells` with a random valid digit
///
/// Returns `false` and leaves the empty cells at 0 when no solution exists.
pub fn solve_random<R: Rng + ?Sized>(cells: &mut Cells, rng: &mut R) -> bool {
    let empties: Vec<(usize, usize)> = (0..SIZE)
        .flat_map(|r| (0..SIZE).map(move |c| (r, c)))
        .filter(|&(r, c)| cells[r][c] == 0)
        .collect();

    let mut candidates: Vec<Vec<u8>> = Vec::with_capacity(empties.len());
    let mut depth = 0;

    while depth < empties.len() {
        if candidates.len() == depth {
            let mut digits: Vec<u8> = (1..=SIZE as u8).collect();
            digits.shuffle(rng);
            candidates.push(digits);
        }

        let (row, col) = empties[depth];
        cells[row][col] = 0;

        let mut placed = false;
        while let Some(digit) = candidates[depth].pop() {
            if is_safe(cells, row, col, digit) {
                cells[row][col] = digit;
                placed = true;
                break;
            }
        }

        if placed {
            depth += 1;
        } else {
            candidates.pop();
            if depth == 0 {
                return false;
            }
            depth -= 1;
        }
    }
    true
}
