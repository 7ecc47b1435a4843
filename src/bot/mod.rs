//! Computer players.
//!
//! - `heuristic`: the fixed-priority bot (`next_move`)
//! - `policy`: the `Policy` trait drivers use to seat bots

pub mod heuristic;
pub mod policy;

pub use heuristic::{captures, choose_move, danger_exposure, next_move};
pub use policy::{HeuristicBot, Policy, RandomPolicy};
