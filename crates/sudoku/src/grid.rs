//! Grid representation and conflict checks
//!
//! A grid is a plain `[[u8; 9]; 9]` with 0 marking an empty cell.

use std::collections::BTreeSet;

use crate::error::{SudokuError, SudokuResult};

pub const SIZE: usize = 9;
pub const BOX_SIZE: usize = 3;

pub type Cells = [[u8; SIZE]; SIZE];

/// Reject any value above 9
pub fn validate(cells: &Cells) -> SudokuResult<()> {
    for (row, line) in cells.iter().enumerate() {
        for (col, &value) in line.iter().enumerate() {
            if value as usize > SIZE {
                return Err(SudokuError::InvalidValue { value, row, col });
            }
        }
    }
    Ok(())
}

/// Whether `digit` can go at `(row, col)` under the row, column and box rules
///
/// The cell itself is not considered.
pub fn is_safe(cells: &Cells, row: usize, col: usize, digit: u8) -> bool {
    let row_clash = (0..SIZE).any(|c| c != col && cells[row][c] == digit);
    let col_clash = (0..SIZE).any(|r| r != row && cells[r][col] == digit);
    let (top, left) = (row - row % BOX_SIZE, col - col % BOX_SIZE);
    let box_clash = (top..top + BOX_SIZE)
        .flat_map(|r| (left..left + BOX_SIZE).map(move |c| (r, c)))
        .any(|(r, c)| (r, c) != (row, col) && cells[r][c] == digit);
    !(row_clash || col_clash || box_clash)
}

/// Cells sharing a nonzero value with another cell of the same group
fn collect_duplicates<I>(cells: &Cells, groups: I, conflicts: &mut BTreeSet<(usize, usize)>)
where
    I: IntoIterator<Item = Vec<(usize, usize)>>,
{
    for group in groups {
        for (i, &(r1, c1)) in group.iter().enumerate() {
            let value = cells[r1][c1];
            if value == 0 {
                continue;
            }
            for &(r2, c2) in &group[i + 1..] {
                if cells[r2][c2] == value {
                    conflicts.insert((r1, c1));
                    conflicts.insert((r2, c2));
                }
            }
        }
    }
}

fn rows() -> impl Iterator<Item = Vec<(usize, usize)>> {
    (0..SIZE).map(|r| (0..SIZE).map(|c| (r, c)).collect())
}

fn columns() -> impl Iterator<Item = Vec<(usize, usize)>> {
    (0..SIZE).map(|c| (0..SIZE).map(|r| (r, c)).collect())
}

fn boxes() -> impl Iterator<Item = Vec<(usize, usize)>> {
    (0..SIZE).map(|b| {
        let (top, left) = ((b / BOX_SIZE) * BOX_SIZE, (b % BOX_SIZE) * BOX_SIZE);
        (top..top + BOX_SIZE)
            .flat_map(|r| (left..left + BOX_SIZE).map(move |c| (r, c)))
            .collect()
    })
}

/// Cells that duplicate a value in their row or column
///
/// The 3x3 box rule is not checked here; see [`find_box_conflicts`].
pub fn find_conflicts(cells: &Cells) -> BTreeSet<(usize, usize)> {
    let mut conflicts = BTreeSet::new();
    collect_duplicates(cells, rows(), &mut conflicts);
    collect_duplicates(cells, columns(), &mut conflicts);
    conflicts
}

/// Cells that duplicate a value in their 3x3 box
pub fn find_box_conflicts(cells: &Cells) -> BTreeSet<(usize, usize)> {
    let mut conflicts = BTreeSet::new();
    collect_duplicates(cells, boxes(), &mut conflicts);
    conflicts
}

pub fn filled_count(cells: &Cells) -> usize {
    cells.iter().flatten().filter(|&&value| value != 0).count()
}

/// Every row, column and box holds 1 through 9 exactly once
pub fn is_complete_solution(cells: &Cells) -> bool {
    filled_count(cells) == SIZE * SIZE
        && find_conflicts(cells).is_empty()
        && find_box_conflicts(cells).is_empty()
}

/// Plain-text rendering with box separators, `.` for empty cells
pub fn render(cells: &Cells) -> String {
    let mut out = String::new();
    for (row, line) in cells.iter().enumerate() {
        if row > 0 && row % BOX_SIZE == 0 {
            out.push_str("------+-------+------\n");
        }
        let mut parts = Vec::with_capacity(SIZE + 2);
        for (col, &value) in line.iter().enumerate() {
            if col > 0 && col % BOX_SIZE == 0 {
                parts.push("|".to_string());
            }
            parts.push(if value == 0 { ".".to_string() } else { value.to_string() });
        }
        out.push_str(&parts.join(" "));
        out.push('\n');
    }
    out
}
