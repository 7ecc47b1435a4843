//! Move-selection policies.
//!
//! A `Policy` is how a driver asks a non-human seat for its move. Policies
//! are trait objects so a driver can seat any mix of them.

use crate::core::{Dice, GameState, Move};

use super::heuristic;

/// Strategy for picking one of the generated candidate moves.
pub trait Policy: Send + Sync {
    /// Short name for logs.
    fn name(&self) -> &'static str;

    /// Choose a move from `moves`.
    ///
    /// Returns `None` if `moves` is empty.
    fn choose_move(&self, state: &GameState, moves: &[Move], rng: &mut Dice) -> Option<Move>;
}

/// The fixed-priority heuristic from [`heuristic`].
#[derive(Clone, Debug, Default)]
pub struct HeuristicBot;

impl Policy for HeuristicBot {
    fn name(&self) -> &'static str {
        "heuristic"
    }

    fn choose_move(&self, state: &GameState, moves: &[Move], _rng: &mut Dice) -> Option<Move> {
        if moves.is_empty() {
            return None;
        }
        Some(heuristic::choose_move(state, moves))
    }
}

/// Uniform random choice among legal moves.
#[derive(Clone, Debug, Default)]
pub struct RandomPolicy;

impl Policy for RandomPolicy {
    fn name(&self) -> &'static str {
        "random"
    }

    fn choose_move(&self, _state: &GameState, moves: &[Move], rng: &mut Dice) -> Option<Move> {
        let idx = rng.choose_index(moves.len())?;
        Some(moves[idx])
    }
}
