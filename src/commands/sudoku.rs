//! `arcade sudoku`

use std::fmt::Write;

use sudoku::generate;

use super::Context;
use crate::cli::SudokuArgs;

pub fn run(args: &SudokuArgs, ctx: &Context) -> anyhow::Result<String> {
    let difficulty = args.difficulty.unwrap_or(ctx.settings.sudoku_difficulty);
    let mut rng = ctx.rng(args.seed);
    let puzzle = generate(difficulty, &mut rng);

    let conflicts = if puzzle.conflicts().is_empty() {
        "none".to_string()
    } else {
        puzzle
            .conflicts()
            .iter()
            .map(|(row, col)| format!("({},{})", row, col))
            .collect::<Vec<_>>()
            .join(" ")
    };

    let mut out = String::new();
    let _ = writeln!(out, "{}", puzzle);
    let _ = writeln!(out, "Difficulty: {}  Filled: {}/81", difficulty, puzzle.filled_count());
    let _ = writeln!(out, "Conflicts: {}", conflicts);
    Ok(out)
}
