//! 4x4 tile grid and the shift/merge rule
//!
//! Every direction is reduced to a single canonical operation, shifting
//! left: the grid is rotated clockwise until the requested edge faces left,
//! each row is compacted and merged, and the grid is rotated back.
//!
//! | Direction | Clockwise turns |
//! |-----------|-----------------|
//! | Left      | 0               |
//! | Down      | 1               |
//! | Right     | 2               |
//! | Up        | 3               |

use std::fmt;

use crate::error::{Game2048Error, Game2048Result};

pub const GRID_SIZE: usize = 4;

/// Tile value that wins the game
pub const WIN_TILE: u32 = 2048;

/// Largest tile accepted by [`Grid::from_rows`], the highest a 4x4 game can reach
pub const MAX_TILE: u32 = 1 << 17;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub fn all() -> [Direction; 4] {
        [Direction::Up, Direction::Down, Direction::Left, Direction::Right]
    }

    /// `u`, `d`, `l`, `r` (case-insensitive)
    pub fn from_char(c: char) -> Option<Direction> {
        match c.to_ascii_lowercase() {
            'u' => Some(Direction::Up),
            'd' => Some(Direction::Down),
            'l' => Some(Direction::Left),
            'r' => Some(Direction::Right),
            _ => None,
        }
    }

    fn clockwise_turns(self) -> usize {
        match self {
            Direction::Left => 0,
            Direction::Down => 1,
            Direction::Right => 2,
            Direction::Up => 3,
        }
    }
}

/// Row-major grid, 0 marks an empty cell
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Grid {
    cells: [[u32; GRID_SIZE]; GRID_SIZE],
}

impl Grid {
    pub fn empty() -> Self {
        Grid::default()
    }

    /// Build a grid from 16 row-major values
    ///
    /// # Errors
    ///
    /// Fails on the wrong number of values or on a tile that is neither 0
    /// nor a power of two between 2 and [`MAX_TILE`].
    pub fn from_rows(values: &[u32]) -> Game2048Result<Self> {
        if values.len() != GRID_SIZE * GRID_SIZE {
            return Err(Game2048Error::InvalidLength { len: values.len() });
        }
        let mut grid = Grid::empty();
        for (index, &value) in values.iter().enumerate() {
            if value != 0 && (value < 2 || value > MAX_TILE || !value.is_power_of_two()) {
                return Err(Game2048Error::InvalidTile { value, index });
            }
            grid.cells[index / GRID_SIZE][index % GRID_SIZE] = value;
        }
        Ok(grid)
    }

    pub fn rows(&self) -> &[[u32; GRID_SIZE]; GRID_SIZE] {
        &self.cells
    }

    #[inline]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.cells[row][col]
    }

    #[inline]
    pub(crate) fn set(&mut self, row: usize, col: usize, value: u32) {
        self.cells[row][col] = value;
    }

    pub fn empty_cells(&self) -> Vec<(usize, usize)> {
        (0..GRID_SIZE)
            .flat_map(|row| (0..GRID_SIZE).map(move |col| (row, col)))
            .filter(|&(row, col)| self.cells[row][col] == 0)
            .collect()
    }

    pub fn is_full(&self) -> bool {
        self.cells.iter().flatten().all(|&value| value != 0)
    }

    pub fn max_tile(&self) -> u32 {
        self.cells.iter().flatten().copied().max().unwrap_or(0)
    }

    pub fn tile_sum(&self) -> u32 {
        self.cells.iter().flatten().sum()
    }

    /// Any horizontally or vertically adjacent equal nonzero pair
    pub fn has_adjacent_pair(&self) -> bool {
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                let value = self.cells[row][col];
                if value == 0 {
                    continue;
                }
                if col + 1 < GRID_SIZE && self.cells[row][col + 1] == value {
                    return true;
                }
                if row + 1 < GRID_SIZE && self.cells[row + 1][col] == value {
                    return true;
                }
            }
        }
        false
    }

    /// Full and no merge possible in any direction
    pub fn is_stuck(&self) -> bool {
        self.is_full() && !self.has_adjacent_pair()
    }

    pub fn has_won(&self) -> bool {
        self.max_tile() >= WIN_TILE
    }

    pub fn rotate_clockwise(&self) -> Grid {
        let mut rotated = Grid::empty();
        for row in 0..GRID_SIZE {
            for col in 0..GRID_SIZE {
                rotated.cells[row][col] = self.cells[GRID_SIZE - 1 - col][row];
            }
        }
        rotated
    }

    fn rotated(&self, turns: usize) -> Grid {
        (0..turns % 4).fold(*self, |grid, _| grid.rotate_clockwise())
    }

    /// Shift every row toward column 0, returning the merged points
    pub fn shift_left(&self) -> (Grid, u32) {
        let mut shifted = Grid::empty();
        let mut points = 0;
        for (row, line) in self.cells.iter().enumerate() {
            let (merged, line_points) = merge_line(line);
            shifted.cells[row] = merged;
            points += line_points;
        }
        (shifted, points)
    }

    /// Shift toward `direction`, returning the new grid and the score delta
    ///
    /// A shift that cannot move anything returns an identical grid and 0.
    pub fn shift(&self, direction: Direction) -> (Grid, u32) {
        let turns = direction.clockwise_turns();
        let (shifted, points) = self.rotated(turns).shift_left();
        (shifted.rotated(4 - turns), points)
    }

    pub fn can_shift(&self, direction: Direction) -> bool {
        self.shift(direction).0 != *self
    }
}

/// Compact a line toward index 0 and merge equal neighbours in one pass
///
/// Each tile merges at most once: `[2, 2, 2, 2]` becomes `[4, 4, 0, 0]`,
/// never `[8, 0, 0, 0]`.
pub fn merge_line(line: &[u32; GRID_SIZE]) -> ([u32; GRID_SIZE], u32) {
    let tiles: Vec<u32> = line.iter().copied().filter(|&value| value != 0).collect();
    let mut merged = [0; GRID_SIZE];
    let mut points = 0;
    let mut write = 0;
    let mut read = 0;

    while read < tiles.len() {
        if read + 1 < tiles.len() && tiles[read] == tiles[read + 1] {
            let value = tiles[read] * 2;
            merged[write] = value;
            points += value;
            read += 2;
        } else {
            merged[write] = tiles[read];
            read += 1;
        }
        write += 1;
    }

    (merged, points)
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "+------+------+------+------+")?;
        for row in &self.cells {
            write!(f, "|")?;
            for &value in row {
                if value == 0 {
                    write!(f, "      |")?;
                } else {
                    write!(f, "{:^6}|", value)?;
                }
            }
            writeln!(f)?;
            writeln!(f, "+------+------+------+------+")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn grid(values: [u32; 16]) -> Grid {
        Grid::from_rows(&values).unwrap()
    }

    // -------------------------------------------------------------------------
    // Line merge tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_merge_line_compacts() {
        assert_eq!(merge_line(&[0, 2, 0, 4]), ([2, 4, 0, 0], 0));
    }

    #[test]
    fn test_merge_line_merges_once_per_tile() {
        assert_eq!(merge_line(&[2, 2, 2, 2]), ([4, 4, 0, 0], 8));
        assert_eq!(merge_line(&[4, 4, 8, 0]), ([8, 8, 0, 0], 8));
    }

    #[test]
    fn test_merge_line_odd_run_merges_leading_pair() {
        assert_eq!(merge_line(&[2, 2, 2, 0]), ([4, 2, 0, 0], 4));
    }

    #[test]
    fn test_merge_line_across_gap() {
        assert_eq!(merge_line(&[2, 0, 0, 2]), ([4, 0, 0, 0], 4));
    }

    // -------------------------------------------------------------------------
    // Direction tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_rotate_four_times_is_identity() {
        let g = grid([2, 4, 8, 16, 0, 2, 0, 0, 0, 0, 4, 0, 32, 0, 0, 2]);
        assert_eq!(g.rotated(4), g);
        assert_ne!(g.rotate_clockwise(), g);
    }

    #[test]
    fn test_shift_each_direction() {
        let g = grid([
            2, 0, 0, 2, //
            0, 0, 0, 0, //
            0, 0, 0, 0, //
            2, 0, 0, 0,
        ]);

        let (left, points) = g.shift(Direction::Left);
        assert_eq!(left, grid([4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2, 0, 0, 0]));
        assert_eq!(points, 4);

        let (right, _) = g.shift(Direction::Right);
        assert_eq!(right, grid([0, 0, 0, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 2]));

        let (up, points) = g.shift(Direction::Up);
        assert_eq!(up, grid([4, 0, 0, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]));
        assert_eq!(points, 4);

        let (down, _) = g.shift(Direction::Down);
        assert_eq!(down, grid([0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 4, 0, 0, 2]));
    }

    #[test]
    fn test_blocked_shift_leaves_grid_unchanged() {
        let g = grid([2, 4, 0, 0, 8, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]);
        let (shifted, points) = g.shift(Direction::Left);
        assert_eq!(shifted, g);
        assert_eq!(points, 0);
        assert!(!g.can_shift(Direction::Left));
        assert!(g.can_shift(Direction::Right));
    }

    // -------------------------------------------------------------------------
    // Terminal state tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_full_grid_without_pairs_is_stuck() {
        let g = grid([2, 4, 2, 4, 4, 2, 4, 2, 2, 4, 2, 4, 4, 2, 4, 2]);
        assert!(g.is_stuck());
        assert!(Direction::all().iter().all(|&d| !g.can_shift(d)));
    }

    #[test]
    fn test_full_grid_with_vertical_pair_is_not_stuck() {
        let g = grid([2, 4, 2, 4, 2, 8, 4, 2, 8, 4, 2, 4, 4, 2, 4, 2]);
        assert!(!g.is_stuck());
    }

    #[test]
    fn test_win_tile_detected() {
        let mut g = Grid::empty();
        g.set(3, 3, WIN_TILE);
        assert!(g.has_won());
    }

    #[test]
    fn test_from_rows_rejects_bad_input() {
        assert!(Grid::from_rows(&[0; 15]).is_err());
        let mut values = [0; 16];
        values[5] = 3;
        assert_eq!(
            Grid::from_rows(&values),
            Err(Game2048Error::InvalidTile { value: 3, index: 5 })
        );
    }

    #[test]
    fn test_from_rows_rejects_tiles_beyond_max() {
        let mut values = [0; 16];
        values[0] = 1 << 31;
        values[1] = 1 << 31;
        assert_eq!(
            Grid::from_rows(&values),
            Err(Game2048Error::InvalidTile { value: 1 << 31, index: 0 }),
            "Tiles too large to merge must be rejected"
        );

        values[0] = MAX_TILE;
        values[1] = MAX_TILE;
        let g = Grid::from_rows(&values).unwrap();
        let (shifted, points) = g.shift(Direction::Left);
        assert_eq!(shifted.get(0, 0), MAX_TILE * 2);
        assert_eq!(points, MAX_TILE * 2);
    }
}
