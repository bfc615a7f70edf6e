//! Command handlers
//!
//! Each handler drives one engine and returns the text to print, so the
//! binary only has to write it to stdout.

pub mod chess;
pub mod crossword;
pub mod minesweeper;
pub mod play2048;
pub mod scores;
pub mod sudoku;

use std::path::PathBuf;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::cli::Command;
use crate::core::ArcadeSettings;

/// Settings and storage location for one invocation
#[derive(Debug, Clone)]
pub struct Context {
    pub settings: ArcadeSettings,
    pub config_dir: PathBuf,
}

impl Context {
    /// Seeded from the flag, then the settings, then the OS
    pub fn rng(&self, seed: Option<u64>) -> StdRng {
        match seed.or(self.settings.seed) {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        }
    }
}

pub fn run(command: &Command, ctx: &Context) -> anyhow::Result<String> {
    match command {
        Command::Chess(args) => chess::run(args, ctx),
        Command::Crossword(args) => crossword::run(args, ctx),
        Command::Minesweeper(args) => minesweeper::run(args, ctx),
        Command::Sudoku(args) => sudoku::run(args, ctx),
        Command::Play2048(args) => play2048::run(args, ctx),
        Command::Scores => scores::show(ctx),
        Command::Favorite { game } => scores::toggle_favorite(*game, ctx),
    }
}
