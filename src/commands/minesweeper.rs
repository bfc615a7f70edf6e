//! `arcade minesweeper`

use std::fmt::Write;

use minesweeper::{Board, GameState, RevealOutcome};

use super::Context;
use crate::cli::MinesweeperArgs;

pub fn run(args: &MinesweeperArgs, ctx: &Context) -> anyhow::Result<String> {
    let preset = args.preset.unwrap_or(ctx.settings.minesweeper_preset);
    let mut rng = ctx.rng(args.seed);
    let mut board = Board::from_preset(preset, &mut rng);
    let mut out = String::new();

    for &(row, col) in &args.flags {
        if !board.toggle_flag(row, col) {
            let _ = writeln!(out, "flag {},{}: ignored", row, col);
        }
    }
    for &(row, col) in &args.reveals {
        match board.reveal(row, col) {
            RevealOutcome::Ignored => {
                let _ = writeln!(out, "reveal {},{}: ignored", row, col);
            }
            RevealOutcome::Revealed(count) => {
                let _ = writeln!(out, "reveal {},{}: {} cells opened", row, col, count);
            }
            RevealOutcome::Exploded => {
                let _ = writeln!(out, "reveal {},{}: BOOM", row, col);
            }
        }
    }

    let status = match board.state() {
        GameState::Playing => "playing",
        GameState::Won => "won",
        GameState::Lost => "lost",
    };
    let _ = writeln!(out, "\n{}", board);
    let _ = writeln!(
        out,
        "Preset: {}  Mines: {}  Flags left: {}  Status: {}",
        preset,
        board.mine_count(),
        board.flags_remaining(),
        status
    );
    Ok(out)
}
