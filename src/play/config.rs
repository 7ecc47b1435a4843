//! Driver configuration.

use std::env;

/// Configuration for playing matches.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct MatchConfig {
    /// Base seed. Game `i` of a series uses `seed + i`.
    pub seed: u64,

    /// Number of games in a series.
    pub games: usize,

    /// Maximum actions per game before it is abandoned.
    pub max_actions: usize,

    /// Apply a lone `Pass` without consulting the seat's policy.
    pub auto_pass: bool,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            games: 100,
            max_actions: 2_000,
            auto_pass: true,
        }
    }
}

impl MatchConfig {
    /// Create a new match config.
    pub fn new() -> Self {
        Self::default()
    }

    /// Defaults overlaid with `UR_SEED`, `UR_GAMES`, `UR_MAX_ACTIONS` and
    /// `UR_AUTO_PASS`. Unparsable values are ignored.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Some(seed) = read_env::<u64>("UR_SEED") {
            config.seed = seed;
        }
        if let Some(games) = read_env::<usize>("UR_GAMES") {
            config.games = games;
        }
        if let Some(max) = read_env::<usize>("UR_MAX_ACTIONS") {
            config.max_actions = max.max(1);
        }
        if let Some(auto_pass) = read_env_bool("UR_AUTO_PASS") {
            config.auto_pass = auto_pass;
        }

        config
    }

    /// Set the base seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the number of games in a series.
    pub fn with_games(mut self, games: usize) -> Self {
        self.games = games;
        self
    }

    /// Set the per-game action cap.
    pub fn with_max_actions(mut self, max: usize) -> Self {
        self.max_actions = max;
        self
    }

    /// Enable or disable automatic passing.
    pub fn with_auto_pass(mut self, auto_pass: bool) -> Self {
        self.auto_pass = auto_pass;
        self
    }

    /// Seed for game `game_index` of a series.
    pub fn game_seed(&self, game_index: usize) -> u64 {
        self.seed.wrapping_add(game_index as u64)
    }
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}

fn read_env_bool(key: &str) -> Option<bool> {
    match env::var(key).ok()?.to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
