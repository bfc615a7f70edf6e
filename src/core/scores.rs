//! Best scores and favorite games persisted as `scores.json`

use std::collections::{BTreeSet, HashMap};
use std::fmt;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::info;

use super::error::ArcadeResult;
use super::storage;

/// Score book filename
pub const SCORES_FILENAME: &str = "scores.json";

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, clap::ValueEnum,
)]
#[serde(rename_all = "lowercase")]
pub enum GameKind {
    Chess,
    Crossword,
    Minesweeper,
    Sudoku,
    #[serde(rename = "2048")]
    #[value(name = "2048")]
    Game2048,
}

impl GameKind {
    pub fn all() -> [GameKind; 5] {
        [
            GameKind::Chess,
            GameKind::Crossword,
            GameKind::Minesweeper,
            GameKind::Sudoku,
            GameKind::Game2048,
        ]
    }

    pub fn name(self) -> &'static str {
        match self {
            GameKind::Chess => "chess",
            GameKind::Crossword => "crossword",
            GameKind::Minesweeper => "minesweeper",
            GameKind::Sudoku => "sudoku",
            GameKind::Game2048 => "2048",
        }
    }
}

impl fmt::Display for GameKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Local best scores and favorites
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoreBook {
    best: HashMap<GameKind, u64>,
    favorites: BTreeSet<GameKind>,
}

impl ScoreBook {
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(SCORES_FILENAME)
    }

    pub fn load_or_default(path: &Path) -> Self {
        storage::load_or_default(path, "SCORES")
    }

    pub fn save_to(&self, path: &Path) -> ArcadeResult<()> {
        storage::write_json(self, path)
    }

    pub fn best(&self, game: GameKind) -> Option<u64> {
        self.best.get(&game).copied()
    }

    /// Store `score` when it beats the previous best, returning whether it did
    pub fn record(&mut self, game: GameKind, score: u64) -> bool {
        match self.best.get(&game) {
            Some(&best) if best >= score => false,
            _ => {
                self.best.insert(game, score);
                info!(%game, score, "new best score");
                true
            }
        }
    }

    /// Flip the favorite flag, returning the new state
    pub fn toggle_favorite(&mut self, game: GameKind) -> bool {
        if self.favorites.remove(&game) {
            false
        } else {
            self.favorites.insert(game);
            true
        }
    }

    pub fn is_favorite(&self, game: GameKind) -> bool {
        self.favorites.contains(&game)
    }

    pub fn favorites(&self) -> impl Iterator<Item = GameKind> + '_ {
        self.favorites.iter().copied()
    }
}
