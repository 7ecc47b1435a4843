//! # royal-ur
//!
//! Rules engine and heuristic bot for the Royal Game of Ur.
//!
//! Two players race seven pieces each along a fourteen-square track, moving
//! by the sum of four binary dice. Pieces in the shared middle lane can be
//! captured; landing on a rosette grants another roll.
//!
//! ## Design Principles
//!
//! 1. **Pure Rules**: `potential_moves`, `reduce` and `has_winner` are
//!    functions of an immutable `GameState`. Dice are drawn by the caller.
//!
//! 2. **Cheap Successors**: Piece lists use `im-rs` vectors, so a reduced
//!    state shares structure with its predecessor and clones in O(1).
//!
//! 3. **Explicit Rejection**: Illegal actions come back as `InvalidAction`
//!    instead of silently leaving the state alone.
//!
//! ## Modules
//!
//! - `core`: board geometry, players, state, moves, dice, errors
//! - `rules`: move generator, reducer, win detector
//! - `bot`: the heuristic bot and the `Policy` trait
//! - `play`: a single authoritative match and a self-play runner

pub mod core;
pub mod rules;
pub mod bot;
pub mod play;

// Re-export commonly used types
pub use crate::core::{
    PlayerId, Players,
    Dice, DiceState, RollSource, ScriptedRolls,
    Action, ActionRecord, Move,
    initial_state, GameState, Piece, PlayerState,
    CodecError, InvalidAction, InvariantViolation,
};

pub use crate::rules::{potential_moves, reduce, has_winner, is_terminal, Moves};

pub use crate::bot::{next_move, HeuristicBot, Policy, RandomPolicy};

pub use crate::play::{
    Match, MatchConfig, MatchError, MatchStatus, TurnOutcome,
    MatchRecord, MatchRunner, SeriesSummary,
};
