//! Greedy crossword layout
//!
//! Candidate words are normalized, filtered to at least [`MIN_WORD_LEN`]
//! letters, sorted longest first and capped. The first word runs across the
//! middle row. Every later word tries each crossing with an already placed
//! word and takes the valid position sharing the most letters with the grid;
//! the first position found wins a tie. Every shared letter must be a true
//! crossing: a word never overlaps another word running the same way. A word that crosses nothing goes to
//! the first all-blank horizontal slot in row-major order, and is dropped
//! when no such slot exists.

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CrosswordError, CrosswordResult};
use crate::normalize::{letter_count, normalize};
use crate::puzzle::{Orientation, PlacedWord, Puzzle};

pub const MIN_WORD_LEN: usize = 3;
pub const MIN_GRID_SIZE: usize = 10;
/// Blank margin added to the longest word when sizing the grid
pub const GRID_MARGIN: usize = 4;
pub const DEFAULT_MAX_WORDS: usize = 12;

/// Input word with its clue
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordEntry {
    pub word: String,
    #[serde(default)]
    pub clue: String,
}

impl WordEntry {
    pub fn new(word: impl Into<String>, clue: impl Into<String>) -> Self {
        WordEntry {
            word: word.into(),
            clue: clue.into(),
        }
    }
}

/// Parse a JSON array of `{ "word": .., "clue": .. }` objects
pub fn load_entries(json: &str) -> CrosswordResult<Vec<WordEntry>> {
    let entries: Vec<WordEntry> = serde_json::from_str(json)?;
    if entries.is_empty() {
        return Err(CrosswordError::EmptyWordList);
    }
    Ok(entries)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Placement {
    row: usize,
    col: usize,
    direction: Orientation,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrosswordBuilder {
    max_words: usize,
}

impl Default for CrosswordBuilder {
    fn default() -> Self {
        CrosswordBuilder::new(DEFAULT_MAX_WORDS)
    }
}

impl CrosswordBuilder {
    pub fn new(max_words: usize) -> Self {
        CrosswordBuilder { max_words }
    }

    pub fn max_words(&self) -> usize {
        self.max_words
    }

    /// Normalized, filtered, longest-first candidate list
    pub fn candidates(&self, entries: &[WordEntry]) -> Vec<(String, String)> {
        let mut candidates: Vec<(String, String)> = entries
            .iter()
            .map(|entry| (normalize(&entry.word), entry.clue.clone()))
            .filter(|(answer, _)| letter_count(answer) >= MIN_WORD_LEN)
            .collect();
        candidates.sort_by_key(|(answer, _)| std::cmp::Reverse(letter_count(answer)));
        candidates.truncate(self.max_words);
        candidates
    }

    pub fn build(&self, entries: &[WordEntry]) -> Puzzle {
        let candidates = self.candidates(entries);
        let longest = candidates
            .first()
            .map(|(answer, _)| letter_count(answer))
            .unwrap_or(0);
        let size = (longest + GRID_MARGIN).max(MIN_GRID_SIZE);
        let mut puzzle = Puzzle::empty(size);

        for (answer, clue) in candidates {
            let letters: Vec<char> = answer.chars().collect();
            let placement = if puzzle.words.is_empty() {
                Some(Placement {
                    row: size / 2,
                    col: (size - letters.len()) / 2,
                    direction: Orientation::Across,
                })
            } else {
                best_intersection(&puzzle, &letters).or_else(|| first_free_slot(&puzzle, &letters))
            };

            match placement {
                Some(placement) => place(&mut puzzle, answer, clue, placement),
                None => warn!(word = %answer, "no room for word, dropped"),
            }
        }

        debug!(size, placed = puzzle.words.len(), "crossword built");
        puzzle
    }
}

/// Letters shared with the grid, or `None` when the word does not fit
fn overlap(puzzle: &Puzzle, letters: &[char], placement: Placement) -> Option<usize> {
    let (dr, dc) = placement.direction.step();
    let end_row = placement.row + dr * (letters.len() - 1);
    let end_col = placement.col + dc * (letters.len() - 1);
    if end_row >= puzzle.size || end_col >= puzzle.size {
        return None;
    }

    let mut shared = 0;
    for (i, &letter) in letters.iter().enumerate() {
        let (row, col) = (placement.row + dr * i, placement.col + dc * i);
        match puzzle.grid[row][col] {
            None => {}
            Some(existing) if existing == letter => {
                // A shared cell must be a crossing, never a stretch of a parallel word
                if runs_through(puzzle, row, col, placement.direction) {
                    return None;
                }
                shared += 1;
            }
            Some(_) => return None,
        }
    }
    Some(shared)
}

fn runs_through(puzzle: &Puzzle, row: usize, col: usize, direction: Orientation) -> bool {
    puzzle
        .clues(direction)
        .any(|word| word.cells().any(|(cell, _)| cell == (row, col)))
}

fn best_intersection(puzzle: &Puzzle, letters: &[char]) -> Option<Placement> {
    let mut best: Option<(Placement, usize)> = None;

    for placed in &puzzle.words {
        let direction = placed.direction.perpendicular();
        for ((cross_row, cross_col), existing) in placed.cells() {
            for (offset, &letter) in letters.iter().enumerate() {
                if letter != existing {
                    continue;
                }
                let start = match direction {
                    Orientation::Across => cross_col.checked_sub(offset).map(|col| (cross_row, col)),
                    Orientation::Down => cross_row.checked_sub(offset).map(|row| (row, cross_col)),
                };
                let Some((row, col)) = start else {
                    continue;
                };
                let candidate = Placement { row, col, direction };
                if let Some(shared) = overlap(puzzle, letters, candidate) {
                    if best.map_or(true, |(_, best_shared)| shared > best_shared) {
                        best = Some((candidate, shared));
                    }
                }
            }
        }
    }

    best.map(|(placement, _)| placement)
}

fn first_free_slot(puzzle: &Puzzle, letters: &[char]) -> Option<Placement> {
    if letters.len() > puzzle.size {
        return None;
    }
    for row in 0..puzzle.size {
        for col in 0..=puzzle.size - letters.len() {
            let all_blank = (0..letters.len()).all(|i| puzzle.grid[row][col + i].is_none());
            if all_blank {
                return Some(Placement {
                    row,
                    col,
                    direction: Orientation::Across,
                });
            }
        }
    }
    None
}

fn place(puzzle: &mut Puzzle, answer: String, clue: String, placement: Placement) {
    let word = PlacedWord {
        answer,
        clue,
        direction: placement.direction,
        row: placement.row,
        col: placement.col,
        number: puzzle.words.len() as u32 + 1,
    };
    for ((row, col), letter) in word.cells() {
        puzzle.grid[row][col] = Some(letter);
    }
    debug!(word = %word.answer, number = word.number, direction = %word.direction, row = word.row, col = word.col, "word placed");
    puzzle.words.push(word);
}
