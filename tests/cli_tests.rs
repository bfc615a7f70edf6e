//! Command Integration Tests
//!
//! Runs the command handlers against a throwaway config directory and
//! checks the printed report plus what lands in settings.json/scores.json.

use std::fs;
use std::path::{Path, PathBuf};

use arcade::cli::{ChessArgs, Command, CrosswordArgs, MinesweeperArgs, Play2048Args, SudokuArgs};
use arcade::commands::{self, Context};
use arcade::core::{ArcadeSettings, GameKind, ScoreBook};
use chess_engine::Color;
use minesweeper::Preset;
use sudoku::Difficulty;

/// Fresh per-test directory under the system temp dir, removed on drop
struct ScratchDir(PathBuf);

impl ScratchDir {
    fn new(name: &str) -> Self {
        let dir = std::env::temp_dir().join(format!("arcade-test-{}-{}", std::process::id(), name));
        let _ = fs::remove_dir_all(&dir);
        ScratchDir(dir)
    }

    fn path(&self) -> &Path {
        &self.0
    }
}

impl Drop for ScratchDir {
    fn drop(&mut self) {
        let _ = fs::remove_dir_all(&self.0);
    }
}

fn context(dir: &ScratchDir) -> Context {
    Context {
        settings: ArcadeSettings {
            seed: Some(42),
            ..ArcadeSettings::default()
        },
        config_dir: dir.path().to_path_buf(),
    }
}

// ============================================================================
// Settings and score book persistence
// ============================================================================

#[test]
fn test_settings_round_trip() {
    let scratch = ScratchDir::new("settings");
    let dir = scratch.path();
    let path = ArcadeSettings::path_in(&dir.join("nested"));
    let settings = ArcadeSettings {
        chess_ai_color: Color::White,
        minesweeper_preset: Preset::Expert,
        sudoku_difficulty: Difficulty::Hard,
        crossword_max_words: 5,
        log_level: "debug".to_string(),
        seed: Some(9),
    };
    settings.save_to(&path).unwrap();
    assert_eq!(ArcadeSettings::read_from(&path).unwrap(), Some(settings.clone()));
    assert_eq!(ArcadeSettings::load_or_default(&path), settings);
}

#[test]
fn test_malformed_settings_fall_back_to_defaults() {
    let scratch = ScratchDir::new("malformed");
    let dir = scratch.path();
    fs::create_dir_all(dir).unwrap();
    let path = ArcadeSettings::path_in(dir);
    fs::write(&path, "{ not json").unwrap();
    assert!(ArcadeSettings::read_from(&path).is_err());
    assert_eq!(ArcadeSettings::load_or_default(&path), ArcadeSettings::default());
}

#[test]
fn test_missing_settings_read_as_none() {
    let scratch = ScratchDir::new("missing");
    let dir = scratch.path();
    assert_eq!(ArcadeSettings::read_from(&ArcadeSettings::path_in(dir)).unwrap(), None);
}

#[test]
fn test_scratch_dir_removed_after_use() {
    let scratch = ScratchDir::new("cleanup");
    let ctx = context(&scratch);
    commands::run(&Command::Favorite { game: GameKind::Chess }, &ctx).unwrap();
    assert!(ctx.config_dir.join("scores.json").exists(), "Favorite must be saved");

    drop(scratch);
    assert!(!ctx.config_dir.exists(), "Scratch directory must not outlive the test");
}

// ============================================================================
// Commands
// ============================================================================

#[test]
fn test_play2048_records_best_score() {
    let scratch = ScratchDir::new("play2048");
    let ctx = context(&scratch);
    let command = Command::Play2048(Play2048Args {
        moves: "lrudlrudlrudlrud".to_string(),
        seed: None,
    });
    let output = commands::run(&command, &ctx).unwrap();
    assert!(output.contains("Score:"), "{}", output);

    assert!(output.contains("New best score!"), "First game is always a best: {}", output);

    let book = ScoreBook::load_or_default(&ScoreBook::path_in(&ctx.config_dir));
    assert!(book.best(GameKind::Game2048).is_some(), "New best must be saved");

    // Same seed, same moves: same score, so no new best the second time
    let again = commands::run(&command, &ctx).unwrap();
    assert!(!again.contains("New best score!"), "{}", again);
}

#[test]
fn test_play2048_rejects_unknown_moves() {
    let scratch = ScratchDir::new("play2048-bad");
    let ctx = context(&scratch);
    let command = Command::Play2048(Play2048Args {
        moves: "lx".to_string(),
        seed: Some(1),
    });
    assert!(commands::run(&command, &ctx).is_err());
}

#[test]
fn test_favorite_toggle_persists() {
    let scratch = ScratchDir::new("favorite");
    let ctx = context(&scratch);
    let add = commands::run(&Command::Favorite { game: GameKind::Sudoku }, &ctx).unwrap();
    assert!(add.contains("added"), "{}", add);

    let listing = commands::run(&Command::Scores, &ctx).unwrap();
    assert!(listing.lines().any(|line| line.starts_with('*') && line.contains("sudoku")), "{}", listing);

    let remove = commands::run(&Command::Favorite { game: GameKind::Sudoku }, &ctx).unwrap();
    assert!(remove.contains("removed"), "{}", remove);
}

#[test]
fn test_sudoku_command_reports_no_conflicts() {
    let scratch = ScratchDir::new("sudoku");
    let ctx = context(&scratch);
    let output = commands::run(
        &Command::Sudoku(SudokuArgs {
            difficulty: None,
            seed: None,
        }),
        &ctx,
    )
    .unwrap();
    assert!(output.contains("Filled: 41/81"), "{}", output);
    assert!(output.contains("Conflicts: none"), "{}", output);
}

#[test]
fn test_minesweeper_command_applies_flags() {
    let scratch = ScratchDir::new("minesweeper");
    let ctx = context(&scratch);
    let output = commands::run(
        &Command::Minesweeper(MinesweeperArgs {
            preset: Some(Preset::Beginner),
            seed: Some(3),
            flags: vec![(0, 0)],
            reveals: vec![(0, 0)],
        }),
        &ctx,
    )
    .unwrap();
    assert!(output.contains("reveal 0,0: ignored"), "Flagged cell cannot be revealed: {}", output);
    assert!(output.contains("Flags left: 9"), "{}", output);
}

#[test]
fn test_chess_command_plays_scripted_moves() {
    let scratch = ScratchDir::new("chess");
    let ctx = context(&scratch);
    let output = commands::run(
        &Command::Chess(ChessArgs {
            plies: 6,
            seed: None,
            ai_color: Some(Color::Black),
            moves: "e2e4 g1f3".to_string(),
        }),
        &ctx,
    )
    .unwrap();
    assert!(output.contains("Moves: 1. e2e4 "), "{}", output);
    assert!(output.contains("2. g1f3 "), "{}", output);
    assert!(output.contains("Stopped after 6 plies"), "{}", output);
}

#[test]
fn test_chess_command_rejects_illegal_script() {
    let scratch = ScratchDir::new("chess-illegal");
    let ctx = context(&scratch);
    let command = Command::Chess(ChessArgs {
        plies: 4,
        seed: None,
        ai_color: None,
        moves: "e2e5".to_string(),
    });
    assert!(commands::run(&command, &ctx).is_err());
}

#[test]
fn test_crossword_command_builds_from_file() {
    let scratch = ScratchDir::new("crossword");
    let ctx = context(&scratch);
    fs::create_dir_all(&ctx.config_dir).unwrap();
    let words = ctx.config_dir.join("words.json");
    fs::write(
        &words,
        r#"[
            {"word": "planet", "clue": "Earth is one"},
            {"word": "moon", "clue": "Orbits the Earth"},
            {"word": "ox", "clue": "Too short"}
        ]"#,
    )
    .unwrap();

    let output = commands::run(
        &Command::Crossword(CrosswordArgs {
            words,
            max_words: None,
        }),
        &ctx,
    )
    .unwrap();
    assert!(output.starts_with("Placed 2 of 3 words on a 10x10 grid"), "{}", output);
    assert!(output.contains("Earth is one (6)"), "{}", output);
    assert!(output.contains("Orbits the Earth (4)"), "{}", output);
}

#[test]
fn test_crossword_command_missing_file() {
    let scratch = ScratchDir::new("crossword-missing");
    let ctx = context(&scratch);
    let command = Command::Crossword(CrosswordArgs {
        words: ctx.config_dir.join("nope.json"),
        max_words: Some(3),
    });
    assert!(commands::run(&command, &ctx).is_err());
}
