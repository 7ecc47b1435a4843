//! Driving games: one authoritative match, and a runner that seats
//! policies and plays series of them.
//!
//! - `session`: `Match`, turn and game-over checks around the reducer
//! - `runner`: `MatchRunner`, plays seeded games between two policies
//! - `record`: `MatchRecord` and `SeriesSummary`
//! - `config`: `MatchConfig`, defaults and environment overrides

pub mod config;
pub mod record;
pub mod runner;
pub mod session;

pub use config::MatchConfig;
pub use record::{MatchRecord, SeriesSummary};
pub use runner::MatchRunner;
pub use session::{Match, MatchError, MatchStatus, TurnOutcome};
