//! Error types surfaced by the rules engine.

use super::player::PlayerId;

/// A rule violation reported by the reducer.
///
/// Always recoverable: the state handed to the reducer is left untouched and
/// the caller may retry with another action.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvalidAction {
    #[error("already rolled {roll} this turn")]
    AlreadyRolled { roll: u8 },

    #[error("roll value {value} is outside 0..=4")]
    RollOutOfRange { value: u8 },

    #[error("no pending roll; roll the dice first")]
    NoPendingRoll,

    #[error("a roll of 0 cannot move or enter a piece")]
    ZeroRoll,

    #[error("no pieces left to enter")]
    BenchEmpty,

    #[error("entry square {square} is occupied by your own piece")]
    EntryBlocked { square: u8 },

    #[error("no fielded piece at index {index} (player has {fielded})")]
    NoSuchPiece { index: usize, fielded: usize },

    #[error("piece at {from} would overshoot home with a roll of {roll}")]
    Overshoot { from: u8, roll: u8 },

    #[error("square {square} is occupied by your own piece")]
    OwnPieceBlocks { square: u8 },

    #[error("the safe spot is held by the opponent and cannot be captured")]
    SafeSpotTaken,
}

/// A state that breaks the data-model invariants.
///
/// The reducer never produces one from a valid state; this is reported when
/// checking hand-built or decoded states.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("unknown player index {raw}")]
    UnknownPlayer { raw: u8 },

    #[error("{player} accounts for {total} pieces instead of 7")]
    PieceCount { player: PlayerId, total: usize },

    #[error("{player} has a fielded piece off the track at {position}")]
    OffTrack { player: PlayerId, position: u8 },

    #[error("{player} has two pieces on square {position}")]
    DuplicatePosition { player: PlayerId, position: u8 },

    #[error("both players occupy shared square {position}")]
    SharedSquare { position: u8 },

    #[error("pending roll {roll} is outside 0..=4")]
    RollOutOfRange { roll: u8 },
}

/// Failure to encode or decode a state snapshot.
#[derive(Debug, thiserror::Error)]
pub enum CodecError {
    #[error("failed to encode game state: {0}")]
    Encode(#[source] bincode::Error),

    #[error("failed to decode game state: {0}")]
    Decode(#[source] bincode::Error),

    #[error("decoded game state is inconsistent: {0}")]
    Inconsistent(#[from] InvariantViolation),
}
