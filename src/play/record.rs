//! Results of played games.

use serde::{Deserialize, Serialize};

use crate::core::{ActionRecord, GameState, PlayerId, Players};

/// A complete game played by the runner.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Seed of the dice stream used for this game.
    pub seed: u64,

    /// `None` if the game hit the action cap.
    pub winner: Option<PlayerId>,

    /// Every accepted action, in order.
    pub history: Vec<ActionRecord>,

    /// State after the last action.
    pub final_state: GameState,

    /// Opponent pieces each seat sent back to the bench.
    pub captures: Players<u32>,
}

impl MatchRecord {
    /// Number of actions in the game.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Check if no action was played.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Did the game reach a winner?
    pub fn is_finished(&self) -> bool {
        self.winner.is_some()
    }

    /// Actions taken by one seat.
    pub fn player_actions(&self, player: PlayerId) -> impl Iterator<Item = &ActionRecord> {
        self.history.iter().filter(move |r| r.player == player)
    }
}

/// Aggregate over a series of games.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeriesSummary {
    /// Games played.
    pub games: u32,

    /// Games won per seat.
    pub wins: Players<u32>,

    /// Games abandoned at the action cap.
    pub unfinished: u32,

    /// Actions over all games.
    pub total_actions: u64,

    /// Captures per seat over all games.
    pub captures: Players<u32>,
}

impl SeriesSummary {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fold one game into the summary.
    pub fn record(&mut self, game: &MatchRecord) {
        self.games += 1;
        self.total_actions += game.len() as u64;
        match game.winner {
            Some(winner) => self.wins[winner] += 1,
            None => self.unfinished += 1,
        }
        for (player, &count) in game.captures.iter() {
            self.captures[player] += count;
        }
    }

    /// Average actions per game.
    #[must_use]
    pub fn mean_length(&self) -> f64 {
        if self.games == 0 {
            0.0
        } else {
            self.total_actions as f64 / f64::from(self.games)
        }
    }

    /// Share of finished games won by `player`.
    #[must_use]
    pub fn win_rate(&self, player: PlayerId) -> f64 {
        let finished = self.games - self.unfinished;
        if finished == 0 {
            0.0
        } else {
            f64::from(self.wins[player]) / f64::from(finished)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Action;

    fn record(winner: Option<PlayerId>, actions: usize) -> MatchRecord {
        MatchRecord {
            seed: 0,
            winner,
            history: (0..actions)
                .map(|i| {
                    let player = if i % 2 == 0 { PlayerId::FIRST } else { PlayerId::SECOND };
                    ActionRecord::new(player, Action::Pass, i as u32)
                })
                .collect(),
            final_state: GameState::initial(),
            captures: Players::from_pair(2, 1),
        }
    }

    #[test]
    fn test_record_accessors() {
        let game = record(Some(PlayerId::SECOND), 5);

        assert_eq!(game.len(), 5);
        assert!(!game.is_empty());
        assert!(game.is_finished());
        assert_eq!(game.player_actions(PlayerId::FIRST).count(), 3);
    }

    #[test]
    fn test_summary_accumulates() {
        let mut summary = SeriesSummary::new();
        summary.record(&record(Some(PlayerId::FIRST), 10));
        summary.record(&record(Some(PlayerId::FIRST), 20));
        summary.record(&record(None, 30));

        assert_eq!(summary.games, 3);
        assert_eq!(summary.wins[PlayerId::FIRST], 2);
        assert_eq!(summary.unfinished, 1);
        assert_eq!(summary.total_actions, 60);
        assert_eq!(summary.captures[PlayerId::FIRST], 6);
        assert_eq!(summary.mean_length(), 20.0);
        assert_eq!(summary.win_rate(PlayerId::FIRST), 1.0);
        assert_eq!(summary.win_rate(PlayerId::SECOND), 0.0);
    }

    #[test]
    fn test_empty_summary() {
        let summary = SeriesSummary::new();
        assert_eq!(summary.mean_length(), 0.0);
        assert_eq!(summary.win_rate(PlayerId::FIRST), 0.0);
    }

    #[test]
    fn test_record_serialization() {
        let game = record(Some(PlayerId::FIRST), 2);

        let json = serde_json::to_string(&game).unwrap();
        let back: MatchRecord = serde_json::from_str(&json).unwrap();

        assert_eq!(back.history, game.history);
        assert_eq!(back.winner, game.winner);
    }
}
