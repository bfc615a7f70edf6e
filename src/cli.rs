//! Command-line interface definition

use std::path::PathBuf;

use chess_engine::Color;
use clap::{Args, Parser, Subcommand};
use minesweeper::Preset;
use sudoku::Difficulty;

use crate::core::GameKind;

#[derive(Parser, Debug)]
#[command(name = "arcade")]
#[command(author, version, about = "Chess, crossword, minesweeper, sudoku and 2048 in the terminal")]
pub struct Cli {
    /// Log at debug level (overrides the configured level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Directory holding settings.json and scores.json
    #[arg(long, global = true, value_name = "DIR")]
    pub config_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play chess against the heuristic computer player
    Chess(ChessArgs),
    /// Build a crossword from a JSON word list
    Crossword(CrosswordArgs),
    /// Generate a minefield and apply flags and reveals
    Minesweeper(MinesweeperArgs),
    /// Generate a sudoku puzzle
    Sudoku(SudokuArgs),
    /// Play a sequence of 2048 moves
    #[command(name = "play2048")]
    Play2048(Play2048Args),
    /// Show best scores and favorites
    Scores,
    /// Toggle a game as favorite
    Favorite {
        #[arg(value_enum)]
        game: GameKind,
    },
}

#[derive(Args, Debug)]
pub struct ChessArgs {
    /// Stop after this many plies
    #[arg(long, default_value_t = 200)]
    pub plies: usize,

    /// Random seed for a reproducible game
    #[arg(long)]
    pub seed: Option<u64>,

    /// Side played by the computer; the other side plays --moves first
    #[arg(long, value_parser = parse_color)]
    pub ai_color: Option<Color>,

    /// Moves for the player's side in coordinate notation, e.g. "e2e4 g1f3"
    ///
    /// Once exhausted the computer plays both sides.
    #[arg(long, default_value = "")]
    pub moves: String,
}

#[derive(Args, Debug)]
pub struct CrosswordArgs {
    /// JSON array of {"word": .., "clue": ..} objects
    #[arg(long, value_name = "FILE")]
    pub words: PathBuf,

    /// Maximum number of words to place
    #[arg(long)]
    pub max_words: Option<usize>,
}

#[derive(Args, Debug)]
pub struct MinesweeperArgs {
    /// beginner, intermediate or expert
    #[arg(long)]
    pub preset: Option<Preset>,

    #[arg(long)]
    pub seed: Option<u64>,

    /// Cells to flag before revealing, as ROW,COL
    #[arg(long = "flag", value_parser = parse_coordinate, value_name = "ROW,COL")]
    pub flags: Vec<(usize, usize)>,

    /// Cells to reveal in order, as ROW,COL
    #[arg(long = "reveal", value_parser = parse_coordinate, value_name = "ROW,COL")]
    pub reveals: Vec<(usize, usize)>,
}

#[derive(Args, Debug)]
pub struct SudokuArgs {
    /// easy, medium or hard
    #[arg(long)]
    pub difficulty: Option<Difficulty>,

    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(Args, Debug)]
pub struct Play2048Args {
    /// Moves as a string of u, d, l, r
    #[arg(long, default_value = "")]
    pub moves: String,

    #[arg(long)]
    pub seed: Option<u64>,
}

pub fn parse_color(text: &str) -> Result<Color, String> {
    match text.trim().to_ascii_lowercase().as_str() {
        "white" | "w" => Ok(Color::White),
        "black" | "b" => Ok(Color::Black),
        _ => Err(format!("expected white or black, got {:?}", text)),
    }
}

pub fn parse_coordinate(text: &str) -> Result<(usize, usize), String> {
    let (row, col) = text
        .split_once(',')
        .ok_or_else(|| format!("expected ROW,COL, got {:?}", text))?;
    let row = row.trim().parse().map_err(|e| format!("bad row in {:?}: {}", text, e))?;
    let col = col.trim().parse().map_err(|e| format!("bad column in {:?}: {}", text, e))?;
    Ok((row, col))
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_minesweeper_reveals() {
        let cli = Cli::parse_from([
            "arcade",
            "minesweeper",
            "--preset",
            "expert",
            "--reveal",
            "3,4",
            "--reveal",
            "0,0",
        ]);
        match cli.command {
            Command::Minesweeper(args) => {
                assert_eq!(args.preset, Some(Preset::Expert));
                assert_eq!(args.reveals, vec![(3, 4), (0, 0)]);
            }
            other => panic!("Unexpected command {:?}", other),
        }
    }

    #[test]
    fn test_parse_favorite_2048() {
        let cli = Cli::parse_from(["arcade", "favorite", "2048"]);
        assert!(matches!(cli.command, Command::Favorite { game: GameKind::Game2048 }));
    }

    #[test]
    fn test_parse_coordinate_errors() {
        assert!(parse_coordinate("3").is_err());
        assert!(parse_coordinate("a,1").is_err());
        assert_eq!(parse_coordinate(" 2 , 5 "), Ok((2, 5)));
    }

    #[test]
    fn test_parse_color() {
        assert_eq!(parse_color("White"), Ok(Color::White));
        assert!(parse_color("red").is_err());
    }
}
