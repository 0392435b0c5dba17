//! Headless demo: two computer players play a full match
//!
//! Usage: `rally-core [seed] [tuning.json]`. Set `RUST_LOG=debug` to follow
//! every rebound and prediction.

use anyhow::{Context, Result};

use rally_core::sim::{Match, TickEvent, TickInput};
use rally_core::Tuning;

/// Give up on matches that never finish (e.g. an endless wall rally)
const MAX_TICKS: u64 = 2_000_000;

fn main() -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let mut args = std::env::args().skip(1);
    let seed = match args.next() {
        Some(raw) => raw
            .parse::<u64>()
            .with_context(|| format!("seed must be an unsigned integer, got {raw:?}"))?,
        None => 12345,
    };
    let tuning = match args.next() {
        Some(path) => {
            let json = std::fs::read_to_string(&path)
                .with_context(|| format!("failed to read tuning file {path}"))?;
            Tuning::from_json(&json).with_context(|| format!("bad tuning in {path}"))?
        }
        None => Tuning::default(),
    };

    log::info!("Rally Core starting...");
    let mut game = Match::new(tuning, seed);
    let input = TickInput::default();
    let mut rebounds = 0u64;

    while !game.is_over() && game.ticks() < MAX_TICKS {
        for event in game.tick(&input) {
            if let TickEvent::Rebound { .. } = event {
                rebounds += 1;
            }
        }
    }

    let score = game.score();
    match game.winner() {
        Some(winner) => log::info!(
            "{} wins {}-{} after {} ticks and {} rebounds",
            winner.as_str(),
            score.left,
            score.right,
            game.ticks(),
            rebounds
        ),
        None => log::warn!(
            "No winner after {} ticks (score {}-{})",
            game.ticks(),
            score.left,
            score.right
        ),
    }

    Ok(())
}
