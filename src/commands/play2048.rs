//! `arcade play2048`

use std::fmt::Write;

use anyhow::Context as _;
use game_2048::{Direction, Game};

use super::Context;
use crate::cli::Play2048Args;
use crate::core::{GameKind, ScoreBook};

pub fn parse_directions(moves: &str) -> anyhow::Result<Vec<Direction>> {
    moves
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| {
            Direction::from_char(c)
                .ok_or_else(|| anyhow::anyhow!("unknown move {:?}, expected u, d, l or r", c))
        })
        .collect()
}

pub fn run(args: &Play2048Args, ctx: &Context) -> anyhow::Result<String> {
    let directions = parse_directions(&args.moves)?;
    let mut rng = ctx.rng(args.seed);
    let mut game = Game::new(&mut rng);

    let mut applied = 0;
    for direction in directions {
        if game.is_lost() {
            break;
        }
        if game.step(direction, &mut rng).changed {
            applied += 1;
        }
    }

    let scores_path = ScoreBook::path_in(&ctx.config_dir);
    let mut book = ScoreBook::load_or_default(&scores_path);
    let new_best = book.record(GameKind::Game2048, u64::from(game.score()));
    if new_best {
        book.save_to(&scores_path)
            .with_context(|| format!("failed to save scores to {:?}", scores_path))?;
    }

    let status = if game.is_lost() {
        "game over"
    } else if game.has_won() {
        "won, still playing"
    } else {
        "playing"
    };

    let mut out = String::new();
    let _ = write!(out, "{}", game.grid());
    let _ = writeln!(
        out,
        "Score: {}  Max tile: {}  Moves applied: {}  Status: {}",
        game.score(),
        game.max_tile(),
        applied,
        status
    );
    if new_best {
        let _ = writeln!(out, "New best score!");
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_directions() {
        assert_eq!(
            parse_directions("u d,L r").unwrap(),
            vec![Direction::Up, Direction::Down, Direction::Left, Direction::Right]
        );
        assert!(parse_directions("ux").is_err());
    }
}
