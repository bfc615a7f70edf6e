//! Game state: grid, score and terminal flags
//!
//! A move that changes the grid adds its merge points to the score and
//! spawns exactly one tile (2 with probability 0.9, otherwise 4) in a random
//! empty cell. A move that changes nothing spawns nothing.
//!
//! Reaching [`WIN_TILE`] sets `won` but play may continue; the game is lost
//! once the grid is full with no adjacent equal pair.

use rand::seq::IndexedRandom;
use rand::Rng;
use tracing::{debug, info};

use crate::grid::{Direction, Grid, WIN_TILE};

/// Probability that a spawned tile is a 2 rather than a 4
pub const TWO_PROBABILITY: f64 = 0.9;

/// Result of executing a move
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveOutcome {
    /// Whether the grid changed (and a new tile was spawned)
    pub changed: bool,
    /// Points earned from merges in this move
    pub score_delta: u32,
    pub won: bool,
    pub lost: bool,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    grid: Grid,
    score: u32,
    won: bool,
    lost: bool,
}

impl Game {
    /// Create a new game with two random tiles
    pub fn new<R: Rng + ?Sized>(rng: &mut R) -> Self {
        let mut grid = Grid::empty();
        spawn_tile(&mut grid, rng);
        spawn_tile(&mut grid, rng);
        debug!(%grid, "2048 game created");
        Game::from_grid(grid)
    }

    /// Resume from an existing grid with a zero score
    pub fn from_grid(grid: Grid) -> Self {
        Game {
            grid,
            score: 0,
            won: grid.has_won(),
            lost: grid.is_stuck(),
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn has_won(&self) -> bool {
        self.won
    }

    pub fn is_lost(&self) -> bool {
        self.lost
    }

    pub fn max_tile(&self) -> u32 {
        self.grid.max_tile()
    }

    /// Directions that would change the grid
    pub fn legal_directions(&self) -> Vec<Direction> {
        Direction::all()
            .into_iter()
            .filter(|&direction| self.grid.can_shift(direction))
            .collect()
    }

    /// Execute a move in the given direction
    ///
    /// Once lost, every move is a no-op.
    pub fn step<R: Rng + ?Sized>(&mut self, direction: Direction, rng: &mut R) -> MoveOutcome {
        if self.lost {
            return self.outcome(false, 0);
        }

        let (shifted, score_delta) = self.grid.shift(direction);
        let changed = shifted != self.grid;
        if changed {
            self.grid = shifted;
            self.score += score_delta;
            spawn_tile(&mut self.grid, rng);

            if !self.won && self.grid.max_tile() >= WIN_TILE {
                self.won = true;
                info!(score = self.score, "2048 reached");
            }
            if self.grid.is_stuck() {
                self.lost = true;
                info!(score = self.score, max_tile = self.grid.max_tile(), "2048 game over");
            }
        }

        self.outcome(changed, if changed { score_delta } else { 0 })
    }

    fn outcome(&self, changed: bool, score_delta: u32) -> MoveOutcome {
        MoveOutcome {
            changed,
            score_delta,
            won: self.won,
            lost: self.lost,
        }
    }
}

/// Place a 2 (90%) or 4 (10%) in a random empty cell; no-op on a full grid
pub fn spawn_tile<R: Rng + ?Sized>(grid: &mut Grid, rng: &mut R) -> Option<(usize, usize)> {
    let empty = grid.empty_cells();
    let &(row, col) = empty.choose(rng)?;
    let value = if rng.random_bool(TWO_PROBABILITY) { 2 } else { 4 };
    grid.set(row, col, value);
    Some((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_new_game_has_two_tiles() {
        let mut rng = StdRng::seed_from_u64(42);
        let game = Game::new(&mut rng);
        assert_eq!(game.grid().empty_cells().len(), 14);
        assert!(game
            .grid()
            .rows()
            .iter()
            .flatten()
            .all(|&v| v == 0 || v == 2 || v == 4));
        assert_eq!(game.score(), 0);
    }

    #[test]
    fn test_changed_move_spawns_one_tile_and_scores() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = Grid::from_rows(&[2, 2, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        let mut game = Game::from_grid(grid);

        let outcome = game.step(Direction::Left, &mut rng);
        assert!(outcome.changed);
        assert_eq!(outcome.score_delta, 4);
        assert_eq!(game.score(), 4);
        assert_eq!(game.grid().empty_cells().len(), 14, "Merged tile plus one spawn");
    }

    #[test]
    fn test_unchanged_move_spawns_nothing() {
        let mut rng = StdRng::seed_from_u64(3);
        let grid = Grid::from_rows(&[2, 4, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        let mut game = Game::from_grid(grid);

        let outcome = game.step(Direction::Left, &mut rng);
        assert!(!outcome.changed);
        assert_eq!(outcome.score_delta, 0);
        assert_eq!(*game.grid(), grid);
    }

    #[test]
    fn test_reaching_2048_wins() {
        let mut rng = StdRng::seed_from_u64(9);
        let grid =
            Grid::from_rows(&[1024, 1024, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0, 0]).unwrap();
        let mut game = Game::from_grid(grid);
        let outcome = game.step(Direction::Left, &mut rng);
        assert!(outcome.won);
        assert!(!outcome.lost);
        assert_eq!(game.max_tile(), 2048);
    }

    #[test]
    fn test_stuck_grid_is_lost_and_ignores_moves() {
        let mut rng = StdRng::seed_from_u64(1);
        let grid = Grid::from_rows(&[2, 4, 2, 4, 4, 2, 4, 2, 2, 4, 2, 4, 4, 2, 4, 2]).unwrap();
        let mut game = Game::from_grid(grid);
        assert!(game.is_lost());
        assert!(game.legal_directions().is_empty());
        let outcome = game.step(Direction::Up, &mut rng);
        assert!(!outcome.changed);
        assert!(outcome.lost);
    }

    fn tile() -> impl Strategy<Value = u32> {
        prop_oneof![Just(0u32), (1u32..8).prop_map(|exp| 1 << exp)]
    }

    proptest! {
        #[test]
        fn prop_no_tile_merges_twice(values in prop::collection::vec(tile(), 16), dir in 0usize..4) {
            let grid = Grid::from_rows(&values).unwrap();
            let direction = Direction::all()[dir];
            let (shifted, points) = grid.shift(direction);

            // Tile mass is conserved and every merge doubles exactly one pair
            prop_assert_eq!(shifted.tile_sum(), grid.tile_sum());
            let before = grid.rows().iter().flatten().filter(|&&v| v != 0).count();
            let after = shifted.rows().iter().flatten().filter(|&&v| v != 0).count();
            prop_assert!(after * 2 >= before, "A tile merged more than once");
            prop_assert!(shifted.max_tile() <= grid.max_tile() * 2);
            prop_assert_eq!(points == 0, before == after);
        }

        #[test]
        fn prop_impossible_shift_changes_nothing(values in prop::collection::vec(tile(), 16), dir in 0usize..4, seed in any::<u64>()) {
            let grid = Grid::from_rows(&values).unwrap();
            let direction = Direction::all()[dir];
            prop_assume!(!grid.can_shift(direction));

            let mut rng = StdRng::seed_from_u64(seed);
            let mut game = Game::from_grid(grid);
            let outcome = game.step(direction, &mut rng);
            prop_assert!(!outcome.changed);
            prop_assert_eq!(*game.grid(), grid);
        }
    }
}
