//! User preferences persisted as `settings.json`

use std::path::{Path, PathBuf};

use chess_engine::Color;
use minesweeper::Preset;
use serde::{Deserialize, Serialize};
use sudoku::Difficulty;

use super::error::ArcadeResult;
use super::storage;

/// Settings filename
pub const SETTINGS_FILENAME: &str = "settings.json";

pub const DEFAULT_LOG_LEVEL: &str = "info";

/// Preferences applied when a command does not override them
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArcadeSettings {
    /// Side played by the computer in chess
    pub chess_ai_color: Color,

    /// Board size used by `minesweeper` without `--preset`
    pub minesweeper_preset: Preset,

    /// Difficulty used by `sudoku` without `--difficulty`
    pub sudoku_difficulty: Difficulty,

    /// Maximum number of words placed in a crossword
    pub crossword_max_words: usize,

    /// Tracing filter directive used when `RUST_LOG` is unset
    pub log_level: String,

    /// Fixed seed for reproducible games
    pub seed: Option<u64>,
}

impl Default for ArcadeSettings {
    fn default() -> Self {
        Self {
            chess_ai_color: Color::Black,
            minesweeper_preset: Preset::Beginner,
            sudoku_difficulty: Difficulty::Easy,
            crossword_max_words: crossword::DEFAULT_MAX_WORDS,
            log_level: DEFAULT_LOG_LEVEL.to_string(),
            seed: None,
        }
    }
}

impl ArcadeSettings {
    pub fn path_in(dir: &Path) -> PathBuf {
        dir.join(SETTINGS_FILENAME)
    }

    /// Strict read, `Ok(None)` when the file is missing
    pub fn read_from(path: &Path) -> ArcadeResult<Option<Self>> {
        storage::read_json(path)
    }

    /// Forgiving read that falls back to defaults
    pub fn load_or_default(path: &Path) -> Self {
        storage::load_or_default(path, "SETTINGS")
    }

    pub fn save_to(&self, path: &Path) -> ArcadeResult<()> {
        storage::write_json(self, path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let settings = ArcadeSettings::default();
        assert_eq!(settings.chess_ai_color, Color::Black);
        assert_eq!(settings.minesweeper_preset, Preset::Beginner);
        assert_eq!(settings.sudoku_difficulty, Difficulty::Easy);
        assert_eq!(settings.crossword_max_words, 12);
        assert_eq!(settings.log_level, "info");
        assert_eq!(settings.seed, None);
    }

    #[test]
    fn test_partial_json_fills_defaults() {
        let settings: ArcadeSettings =
            serde_json::from_str(r#"{"chess_ai_color": "white", "sudoku_difficulty": "hard"}"#)
                .unwrap();
        assert_eq!(settings.chess_ai_color, Color::White);
        assert_eq!(settings.sudoku_difficulty, Difficulty::Hard);
        assert_eq!(settings.minesweeper_preset, Preset::Beginner, "Missing keys use defaults");
    }

    #[test]
    fn test_serialized_names_are_lowercase() {
        let json = serde_json::to_string(&ArcadeSettings::default()).unwrap();
        assert!(json.contains(r#""chess_ai_color":"black""#), "{}", json);
        assert!(json.contains(r#""minesweeper_preset":"beginner""#), "{}", json);
    }
}
