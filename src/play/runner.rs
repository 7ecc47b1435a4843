//! Plays whole games between two policies.

use crate::bot::{HeuristicBot, Policy};
use crate::core::{Action, Dice, Move, PlayerId, Players};
use crate::rules::potential_moves;

use super::config::MatchConfig;
use super::record::{MatchRecord, SeriesSummary};
use super::session::{Match, MatchError};

/// Drives games between two seated policies.
///
/// Each game gets its own `Dice` stream seeded from the config; policies
/// draw from a fork of it so their randomness never shifts the rolls.
pub struct MatchRunner {
    config: MatchConfig,
    seats: Players<Box<dyn Policy>>,
}

impl MatchRunner {
    /// Seat `first` as player 0 and `second` as player 1.
    pub fn new(config: MatchConfig, first: impl Policy + 'static, second: impl Policy + 'static) -> Self {
        let first: Box<dyn Policy> = Box::new(first);
        let second: Box<dyn Policy> = Box::new(second);
        Self {
            config,
            seats: Players::from_pair(first, second),
        }
    }

    /// Heuristic bot in both seats.
    pub fn heuristic_pair(config: MatchConfig) -> Self {
        Self::new(config, HeuristicBot, HeuristicBot)
    }

    /// Configuration this runner plays with.
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// Play one game to completion or to the action cap.
    ///
    /// Policies only ever return generated moves, so an error here means a
    /// policy or the rules broke their contract. A policy that returns no
    /// move fails the game with `MatchError::PolicyFailed`.
    pub fn play(&self, seed: u64) -> Result<MatchRecord, MatchError> {
        let mut game = Match::new();
        let mut dice = Dice::new(seed);
        let mut policy_rng = dice.fork();
        let mut captures = Players::with_value(0u32);

        while game.winner().is_none() && game.history().len() < self.config.max_actions {
            let player = game.current_player();
            let moves = potential_moves(game.state());

            let action = if self.config.auto_pass && moves.as_slice() == [Move::Pass] {
                Action::Pass
            } else {
                let seat = &self.seats[player];
                let mv = seat
                    .choose_move(game.state(), &moves, &mut policy_rng)
                    .ok_or(MatchError::PolicyFailed { player })?;
                mv.into_action(&mut dice)
            };

            let outcome = game.perform(player, action)?;
            if outcome.captured {
                captures[player] += 1;
            }
        }

        let winner = game.winner();
        if winner.is_none() {
            tracing::warn!(seed, max_actions = self.config.max_actions, "game abandoned at action cap");
        }

        Ok(MatchRecord {
            seed,
            winner,
            history: game.history().to_vec(),
            final_state: game.state().clone(),
            captures,
        })
    }

    /// Play `config.games` games, seeding game `i` with `config.game_seed(i)`.
    pub fn play_series(&self) -> Result<SeriesSummary, MatchError> {
        let mut summary = SeriesSummary::new();

        for i in 0..self.config.games {
            let record = self.play(self.config.game_seed(i))?;
            tracing::debug!(
                game = i,
                winner = ?record.winner,
                actions = record.len(),
                "game complete"
            );
            summary.record(&record);
        }

        tracing::info!(
            first = self.seats[PlayerId::FIRST].name(),
            second = self.seats[PlayerId::SECOND].name(),
            games = summary.games,
            "series complete"
        );

        Ok(summary)
    }
}
