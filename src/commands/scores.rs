//! `arcade scores` and `arcade favorite`

use std::fmt::Write;

use anyhow::Context as _;

use super::Context;
use crate::core::{GameKind, ScoreBook};

pub fn show(ctx: &Context) -> anyhow::Result<String> {
    let book = ScoreBook::load_or_default(&ScoreBook::path_in(&ctx.config_dir));
    let mut out = String::new();
    for game in GameKind::all() {
        let best = book
            .best(game)
            .map(|score| score.to_string())
            .unwrap_or_else(|| "-".to_string());
        let star = if book.is_favorite(game) { "*" } else { " " };
        let _ = writeln!(out, "{} {:<12} {}", star, game, best);
    }
    Ok(out)
}

pub fn toggle_favorite(game: GameKind, ctx: &Context) -> anyhow::Result<String> {
    let path = ScoreBook::path_in(&ctx.config_dir);
    let mut book = ScoreBook::load_or_default(&path);
    let favorite = book.toggle_favorite(game);
    book.save_to(&path)
        .with_context(|| format!("failed to save scores to {:?}", path))?;
    Ok(if favorite {
        format!("{} added to favorites\n", game)
    } else {
        format!("{} removed from favorites\n", game)
    })
}
