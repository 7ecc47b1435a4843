//! One game's authoritative state.
//!
//! `Match` wraps the pure rules with what every driver needs: it owns the
//! current state and refuses actions from the wrong seat or after the game
//! ended. Each accepted action is recorded and summarized in a `TurnOutcome`.

use crate::core::{Action, ActionRecord, GameState, InvalidAction, PlayerId};
use crate::rules::{has_winner, reduce};

/// Where a match stands.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchStatus {
    /// Actions are accepted.
    Playing,
    /// A player brought every piece home.
    Finished { winner: PlayerId },
}

/// Why a match refused an action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum MatchError {
    #[error("the game is already finished ({winner} won)")]
    Finished { winner: PlayerId },

    #[error("it is not {player}'s turn ({current} to act)")]
    NotYourTurn { player: PlayerId, current: PlayerId },

    #[error("{player}'s policy returned no move")]
    PolicyFailed { player: PlayerId },

    #[error(transparent)]
    Invalid(#[from] InvalidAction),
}

/// What an accepted action changed.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Who acted.
    pub player: PlayerId,
    /// Who acts next.
    pub next_player: PlayerId,
    /// Did the turn move to the other player?
    pub turn_passed: bool,
    /// Did the action send an opponent piece back to the bench?
    pub captured: bool,
    /// Set once the action won the game.
    pub winner: Option<PlayerId>,
}

/// A single game in progress.
#[derive(Clone, Debug)]
pub struct Match {
    state: GameState,
    history: Vec<ActionRecord>,
    status: MatchStatus,
}

impl Default for Match {
    fn default() -> Self {
        Self::new()
    }
}

impl Match {
    /// Start a new game from the initial state.
    pub fn new() -> Self {
        Self::from_state(GameState::initial())
    }

    /// Resume from an existing state.
    pub fn from_state(state: GameState) -> Self {
        let status = match has_winner(&state) {
            Some(winner) => MatchStatus::Finished { winner },
            None => MatchStatus::Playing,
        };
        Self {
            state,
            history: Vec::new(),
            status,
        }
    }

    /// Current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Actions accepted so far.
    pub fn history(&self) -> &[ActionRecord] {
        &self.history
    }

    pub fn status(&self) -> MatchStatus {
        self.status
    }

    /// The winner, once there is one.
    pub fn winner(&self) -> Option<PlayerId> {
        match self.status {
            MatchStatus::Finished { winner } => Some(winner),
            MatchStatus::Playing => None,
        }
    }

    /// Seat whose turn it is.
    pub fn current_player(&self) -> PlayerId {
        self.state.current_player
    }

    /// Apply `action` on behalf of `player`.
    ///
    /// The state only changes when the action is accepted.
    pub fn perform(&mut self, player: PlayerId, action: Action) -> Result<TurnOutcome, MatchError> {
        if let MatchStatus::Finished { winner } = self.status {
            return Err(MatchError::Finished { winner });
        }
        let current = self.state.current_player;
        if player != current {
            return Err(MatchError::NotYourTurn { player, current });
        }

        let next = reduce(&self.state, action)?;

        let opponent = player.opponent();
        let captured = next.player(opponent).out_of_play_pieces > self.state.player(opponent).out_of_play_pieces;
        let winner = has_winner(&next);

        let sequence = self.history.len() as u32;
        self.history.push(ActionRecord::new(player, action, sequence));
        self.state = next;

        if let Some(winner) = winner {
            self.status = MatchStatus::Finished { winner };
            tracing::info!(%winner, actions = self.history.len(), "game over");
        }

        Ok(TurnOutcome {
            player,
            next_player: self.state.current_player,
            turn_passed: self.state.current_player != player,
            captured,
            winner,
        })
    }
}
