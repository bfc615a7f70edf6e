//! `arcade chess`

use std::fmt::Write;

use anyhow::{bail, Context as _};
use chess_engine::{ChessGame, GameStatus, Move, PieceKind, Square};
use tracing::debug;

use super::Context;
use crate::cli::ChessArgs;

/// A player move in coordinate notation such as `e2e4` or `e7e8n`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScriptedMove {
    pub from: Square,
    pub to: Square,
    pub promotion: PieceKind,
}

pub fn parse_move(text: &str) -> anyhow::Result<ScriptedMove> {
    if !text.is_ascii() || !(4..=5).contains(&text.len()) {
        bail!("expected a move like e2e4 or e7e8q, got {:?}", text);
    }
    let from = Square::from_algebraic(&text[0..2])?;
    let to = Square::from_algebraic(&text[2..4])?;
    let promotion = match text[4..].chars().next() {
        None => PieceKind::Queen,
        Some(symbol) => match PieceKind::from_symbol(symbol) {
            Some(kind) if !matches!(kind, PieceKind::King | PieceKind::Pawn) => kind,
            _ => bail!("invalid promotion piece {:?} in {:?}", symbol, text),
        },
    };
    Ok(ScriptedMove { from, to, promotion })
}

pub fn parse_moves(text: &str) -> anyhow::Result<Vec<ScriptedMove>> {
    text.split_whitespace().map(parse_move).collect()
}

pub fn run(args: &ChessArgs, ctx: &Context) -> anyhow::Result<String> {
    let ai_color = args.ai_color.unwrap_or(ctx.settings.chess_ai_color);
    let mut scripted = parse_moves(&args.moves)?.into_iter();
    let mut rng = ctx.rng(args.seed);
    let mut game = ChessGame::new();

    while !game.is_over() && game.history().len() < args.plies {
        if game.turn() != ai_color {
            if let Some(mv) = scripted.next() {
                game.try_move_with_promotion(mv.from, mv.to, mv.promotion)
                    .with_context(|| {
                        format!("illegal move {}{} for {}", mv.from, mv.to, game.turn())
                    })?;
                continue;
            }
        }
        if game.computer_move(&mut rng).is_none() {
            break;
        }
    }
    debug!(plies = game.history().len(), status = ?game.status(), "chess command finished");

    Ok(report(&game))
}

fn format_history(history: &[Move]) -> String {
    history
        .chunks(2)
        .enumerate()
        .map(|(i, pair)| {
            let moves: Vec<String> = pair.iter().map(Move::to_string).collect();
            format!("{}. {}", i + 1, moves.join(" "))
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn report(game: &ChessGame) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "{}", game.board());
    let _ = writeln!(out, "Moves: {}", format_history(game.history()));
    let outcome = match game.status() {
        GameStatus::Checkmate { winner } => format!("Checkmate, {} wins", winner),
        GameStatus::Stalemate => "Stalemate".to_string(),
        GameStatus::Check | GameStatus::Playing => format!(
            "Stopped after {} plies, {} to move",
            game.history().len(),
            game.turn()
        ),
    };
    let _ = writeln!(out, "Result: {}", outcome);
    out
}
