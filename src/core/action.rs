//! Moves and actions.
//!
//! A [`Move`] is a choice offered to a player by the move generator (and
//! picked by a bot). An [`Action`] is what the reducer applies. They differ
//! only for rolling: the generator offers `Move::Roll` without a value, and
//! the value is drawn when the move becomes `Action::Roll { value }`, so the
//! reducer itself never touches randomness.
//!
//! ```
//! use royal_ur::core::{Action, Move, ScriptedRolls};
//!
//! let mut rolls = ScriptedRolls::new([3]);
//!
//! assert_eq!(Move::Roll.into_action(&mut rolls), Action::Roll { value: 3 });
//! assert_eq!(
//!     Move::MovePiece { index: 1, to: 6 }.into_action(&mut rolls),
//!     Action::MovePiece { index: 1 },
//! );
//! ```

use serde::{Deserialize, Serialize};

use super::dice::RollSource;
use super::player::PlayerId;

/// A candidate move produced by the move generator.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Move {
    /// Throw the dice.
    Roll,
    /// Enter a piece from the bench.
    AddPiece,
    /// Advance the fielded piece at `index` to `to` (14 = home).
    MovePiece { index: usize, to: u8 },
    /// No legal move for this roll.
    Pass,
}

impl Move {
    /// Is this a move with nothing to decide (`Roll` or `Pass`)?
    #[must_use]
    pub fn is_degenerate(&self) -> bool {
        matches!(self, Move::Roll | Move::Pass)
    }

    /// Destination square of a piece move.
    #[must_use]
    pub fn destination(&self) -> Option<u8> {
        match self {
            Move::MovePiece { to, .. } => Some(*to),
            _ => None,
        }
    }

    /// Turn this move into a reducer action, drawing a roll if needed.
    pub fn into_action(self, rolls: &mut impl RollSource) -> Action {
        match self {
            Move::Roll => Action::Roll { value: rolls.roll() },
            Move::AddPiece => Action::AddPiece,
            Move::MovePiece { index, .. } => Action::MovePiece { index },
            Move::Pass => Action::Pass,
        }
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Roll => write!(f, "roll"),
            Move::AddPiece => write!(f, "add piece"),
            Move::MovePiece { index, to } => write!(f, "move piece {index} to {to}"),
            Move::Pass => write!(f, "pass"),
        }
    }
}

/// An action applied by the reducer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "camelCase")]
pub enum Action {
    /// Record a roll drawn outside the reducer.
    Roll { value: u8 },
    /// Enter a piece on square `roll - 1`.
    AddPiece,
    /// Advance the fielded piece at `index` by the pending roll.
    MovePiece { index: usize },
    /// Give up the turn.
    Pass,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Action::Roll { value } => write!(f, "roll {value}"),
            Action::AddPiece => write!(f, "add piece"),
            Action::MovePiece { index } => write!(f, "move piece {index}"),
            Action::Pass => write!(f, "pass"),
        }
    }
}

/// A recorded action with metadata for history tracking.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    /// The player who took this action.
    pub player: PlayerId,

    /// The action taken.
    pub action: Action,

    /// Position in the game's action sequence (0-based).
    pub sequence: u32,
}

impl ActionRecord {
    /// Create a new action record.
    #[must_use]
    pub fn new(player: PlayerId, action: Action, sequence: u32) -> Self {
        Self {
            player,
            action,
            sequence,
        }
    }
}
