//! `arcade crossword`

use std::fmt::Write;
use std::fs;

use anyhow::Context as _;
use crossword::{load_entries, CrosswordBuilder};

use super::Context;
use crate::cli::CrosswordArgs;

pub fn run(args: &CrosswordArgs, ctx: &Context) -> anyhow::Result<String> {
    let json = fs::read_to_string(&args.words)
        .with_context(|| format!("failed to read word list {:?}", args.words))?;
    let entries =
        load_entries(&json).with_context(|| format!("failed to parse word list {:?}", args.words))?;

    let max_words = args.max_words.unwrap_or(ctx.settings.crossword_max_words);
    let puzzle = CrosswordBuilder::new(max_words).build(&entries);

    let mut out = String::new();
    let _ = writeln!(
        out,
        "Placed {} of {} words on a {}x{} grid\n",
        puzzle.words.len(),
        entries.len(),
        puzzle.size,
        puzzle.size
    );
    let _ = write!(out, "{}", puzzle);
    Ok(out)
}
