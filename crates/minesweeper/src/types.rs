//! Cell, preset and outcome types

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::MinesweeperError;

/// A single square of the minefield
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cell {
    pub is_mine: bool,
    pub is_revealed: bool,
    pub is_flagged: bool,
    /// Number of mines among the up to eight neighbours
    pub neighbor_mines: u8,
}

impl Cell {
    /// Character shown to the player
    ///
    /// `#` hidden, `F` flagged, `*` mine, `.` revealed zero, digit otherwise.
    pub fn symbol(&self) -> char {
        if self.is_flagged && !self.is_revealed {
            'F'
        } else if !self.is_revealed {
            '#'
        } else if self.is_mine {
            '*'
        } else if self.neighbor_mines == 0 {
            '.'
        } else {
            char::from(b'0' + self.neighbor_mines)
        }
    }
}

/// Standard board sizes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Preset {
    /// 9x9 with 10 mines
    #[default]
    Beginner,
    /// 16x16 with 40 mines
    Intermediate,
    /// 16x30 with 99 mines
    Expert,
}

impl Preset {
    /// `(rows, cols, mines)`
    pub fn dimensions(self) -> (usize, usize, usize) {
        match self {
            Preset::Beginner => (9, 9, 10),
            Preset::Intermediate => (16, 16, 40),
            Preset::Expert => (16, 30, 99),
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Preset::Beginner => "beginner",
            Preset::Intermediate => "intermediate",
            Preset::Expert => "expert",
        };
        write!(f, "{}", name)
    }
}

impl FromStr for Preset {
    type Err = MinesweeperError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(Preset::Beginner),
            "intermediate" => Ok(Preset::Intermediate),
            "expert" => Ok(Preset::Expert),
            _ => Err(MinesweeperError::UnknownPreset { name: s.to_string() }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameState {
    Playing,
    Won,
    Lost,
}

impl GameState {
    pub fn is_over(self) -> bool {
        self != GameState::Playing
    }
}

/// Result of a reveal request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RevealOutcome {
    /// Out of bounds, already revealed, flagged, or the game is over
    Ignored,
    /// Number of cells newly uncovered (at least 1)
    Revealed(usize),
    /// A mine was revealed and the game is lost
    Exploded,
}
