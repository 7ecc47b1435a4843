//! Self-play driver: seats two policies and plays a seeded series.
//!
//! Configuration comes from the environment (see `MatchConfig::from_env`),
//! plus `UR_OPPONENT` (`heuristic` or `random`) for the second seat.
//! Logs go to stderr; `RUST_LOG` overrides the default `info` level.

use std::env;

use anyhow::{bail, Result};
use royal_ur::{HeuristicBot, MatchConfig, MatchRunner, PlayerId, Policy, RandomPolicy};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let config = MatchConfig::from_env();
    let opponent = env::var("UR_OPPONENT").unwrap_or_else(|_| "heuristic".to_string());

    let runner = match opponent.as_str() {
        "heuristic" => MatchRunner::new(config, HeuristicBot, HeuristicBot),
        "random" => MatchRunner::new(config, HeuristicBot, RandomPolicy),
        other => bail!("unknown UR_OPPONENT {other:?} (expected \"heuristic\" or \"random\")"),
    };

    let config = runner.config();
    info!(
        seed = config.seed,
        games = config.games,
        max_actions = config.max_actions,
        first = HeuristicBot.name(),
        second = %opponent,
        "starting series"
    );

    let summary = runner.play_series()?;

    info!(
        games = summary.games,
        first_wins = summary.wins[PlayerId::FIRST],
        second_wins = summary.wins[PlayerId::SECOND],
        unfinished = summary.unfinished,
        mean_length = summary.mean_length(),
        first_captures = summary.captures[PlayerId::FIRST],
        second_captures = summary.captures[PlayerId::SECOND],
        "series summary"
    );
    println!(
        "{} games: player 0 won {} ({:.1}%), player 1 won {} ({:.1}%), {} unfinished, {:.1} actions/game",
        summary.games,
        summary.wins[PlayerId::FIRST],
        summary.win_rate(PlayerId::FIRST) * 100.0,
        summary.wins[PlayerId::SECOND],
        summary.win_rate(PlayerId::SECOND) * 100.0,
        summary.unfinished,
        summary.mean_length(),
    );

    Ok(())
}
