//! Built crossword and answer checking

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::normalize::normalize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Orientation {
    Across,
    Down,
}

impl Orientation {
    pub fn perpendicular(self) -> Orientation {
        match self {
            Orientation::Across => Orientation::Down,
            Orientation::Down => Orientation::Across,
        }
    }

    /// `(row, col)` step between consecutive letters
    pub fn step(self) -> (usize, usize) {
        match self {
            Orientation::Across => (0, 1),
            Orientation::Down => (1, 0),
        }
    }
}

impl fmt::Display for Orientation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Orientation::Across => write!(f, "Across"),
            Orientation::Down => write!(f, "Down"),
        }
    }
}

/// A word placed on the grid
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlacedWord {
    /// Normalized answer
    pub answer: String,
    pub clue: String,
    pub direction: Orientation,
    pub row: usize,
    pub col: usize,
    /// Clue number, assigned in placement order from 1
    pub number: u32,
}

impl PlacedWord {
    /// Grid coordinates of every letter with the letter itself
    pub fn cells(&self) -> impl Iterator<Item = ((usize, usize), char)> + '_ {
        let (dr, dc) = self.direction.step();
        self.answer
            .chars()
            .enumerate()
            .map(move |(i, letter)| ((self.row + dr * i, self.col + dc * i), letter))
    }

    pub fn len(&self) -> usize {
        self.answer.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.answer.is_empty()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Puzzle {
    pub size: usize,
    /// Row-major letters, `None` for blank cells
    pub grid: Vec<Vec<Option<char>>>,
    /// Words in placement order
    pub words: Vec<PlacedWord>,
}

impl Puzzle {
    pub(crate) fn empty(size: usize) -> Self {
        Puzzle {
            size,
            grid: vec![vec![None; size]; size],
            words: Vec::new(),
        }
    }

    pub fn letter_at(&self, row: usize, col: usize) -> Option<char> {
        *self.grid.get(row)?.get(col)?
    }

    pub fn word(&self, number: u32) -> Option<&PlacedWord> {
        self.words.iter().find(|word| word.number == number)
    }

    /// Words running in one direction, in number order
    pub fn clues(&self, direction: Orientation) -> impl Iterator<Item = &PlacedWord> {
        self.words.iter().filter(move |word| word.direction == direction)
    }

    /// Numbers of the words whose answer matches after normalization
    pub fn check(&self, answers: &BTreeMap<u32, String>) -> Vec<u32> {
        self.words
            .iter()
            .filter(|word| {
                answers
                    .get(&word.number)
                    .is_some_and(|answer| normalize(answer) == word.answer)
            })
            .map(|word| word.number)
            .collect()
    }

    pub fn is_complete(&self, answers: &BTreeMap<u32, String>) -> bool {
        self.check(answers).len() == self.words.len()
    }
}

impl fmt::Display for Puzzle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in &self.grid {
            let line: String = row.iter().map(|cell| cell.unwrap_or('.')).collect();
            writeln!(f, "{}", line)?;
        }
        for direction in [Orientation::Across, Orientation::Down] {
            let mut clues = self.clues(direction).peekable();
            if clues.peek().is_none() {
                continue;
            }
            writeln!(f, "\n{}", direction)?;
            for word in clues {
                writeln!(f, "{:>3}. {} ({})", word.number, word.clue, word.len())?;
            }
        }
        Ok(())
    }
}
