//! Puzzle generation
//!
//! A full solution is produced by [`solve_random`] on an empty grid, then a
//! shuffled list of coordinates is cleared up to the difficulty's removal
//! count. Uniqueness of the solution is not enforced.

use std::fmt;
use std::str::FromStr;

use rand::seq::SliceRandom;
use rand::Rng;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::SudokuError;
use crate::grid::{Cells, SIZE};
use crate::puzzle::Puzzle;
use crate::solver::solve_random;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    #[default]
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Number of cells cleared from the solution
    pub fn removals(self) -> usize {
        match self {
            Difficulty::Easy => 40,
            Difficulty::Medium => 50,
            Difficulty::Hard => 60,
        }
    }
}

impl fmt::Display for Difficulty {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Difficulty::Easy => "easy",
            Difficulty::Medium => "medium",
            Difficulty::Hard => "hard",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Difficulty {
    type Err = SudokuError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "easy" => Ok(Difficulty::Easy),
            "medium" => Ok(Difficulty::Medium),
            "hard" => Ok(Difficulty::Hard),
            _ => Err(SudokuError::UnknownDifficulty { name: s.to_string() }),
        }
    }
}

/// Generate a puzzle with `difficulty.removals()` empty cells
pub fn generate<R: Rng + ?Sized>(difficulty: Difficulty, rng: &mut R) -> Puzzle {
    let mut solution: Cells = [[0; SIZE]; SIZE];
    // An empty grid always has a solution
    solve_random(&mut solution, rng);

    let mut coordinates: Vec<(usize, usize)> = (0..SIZE)
        .flat_map(|r| (0..SIZE).map(move |c| (r, c)))
        .collect();
    coordinates.shuffle(rng);

    let mut cells = solution;
    for &(row, col) in coordinates.iter().take(difficulty.removals()) {
        cells[row][col] = 0;
    }

    debug!(%difficulty, removed = difficulty.removals(), "sudoku generated");
    Puzzle::new(cells, solution)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{filled_count, find_conflicts, is_complete_solution};
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_easy_puzzle_has_41_filled_cells_and_no_conflicts() {
        let mut rng = StdRng::seed_from_u64(2024);
        let puzzle = generate(Difficulty::Easy, &mut rng);
        assert_eq!(puzzle.filled_count(), 41);
        assert!(find_conflicts(puzzle.cells()).is_empty());
        assert!(puzzle.conflicts().is_empty());
    }

    #[test]
    fn test_removal_counts_per_difficulty() {
        for (difficulty, filled) in [
            (Difficulty::Easy, 41),
            (Difficulty::Medium, 31),
            (Difficulty::Hard, 21),
        ] {
            let mut rng = StdRng::seed_from_u64(9);
            let puzzle = generate(difficulty, &mut rng);
            assert_eq!(filled_count(puzzle.cells()), filled, "{} filled count", difficulty);
        }
    }

    #[test]
    fn test_difficulty_parsing() {
        assert_eq!("Medium".parse::<Difficulty>(), Ok(Difficulty::Medium));
        assert!("impossible".parse::<Difficulty>().is_err());
    }

    proptest! {
        #![proptest_config(ProptestConfig::with_cases(32))]

        #[test]
        fn prop_generated_puzzle_is_consistent(seed in any::<u64>(), level in 0usize..3) {
            let difficulty = [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard][level];
            let mut rng = StdRng::seed_from_u64(seed);
            let puzzle = generate(difficulty, &mut rng);

            prop_assert!(is_complete_solution(puzzle.solution()), "Solution must satisfy every rule");
            for row in 0..SIZE {
                for col in 0..SIZE {
                    let value = puzzle.cells()[row][col];
                    prop_assert_eq!(puzzle.is_original(row, col), value != 0, "Original mask equals nonzero cells");
                    if value != 0 {
                        prop_assert_eq!(value, puzzle.solution()[row][col]);
                    }
                }
            }
        }
    }
}
