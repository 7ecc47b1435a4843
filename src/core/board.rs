//! Track topology: pure constants and predicates.
//!
//! Each player walks their own 14-square track numbered `0..=13`:
//!
//! - `0..=3`: private entry lane
//! - `4..=11`: shared middle lane (the danger zone), with the safe spot at 7
//! - `12..=13`: private exit lane
//! - `14`: home; a piece arriving here leaves the board
//!
//! Positions are always counted along the owner's own track. Because both
//! tracks share the middle lane, equal positions in `4..=11` are the same
//! physical square for both players, while equal positions outside it are not.
//!
//! Every other module asks these predicates instead of re-encoding ranges.

use super::player::PlayerId;

/// Pieces each player has to bring home.
pub const PIECES_PER_PLAYER: u8 = 7;

/// Last square a piece can stand on.
pub const LAST_SQUARE: u8 = 13;

/// Home. Reaching it removes the piece from the board.
pub const HOME: u8 = 14;

/// The single shared square where pieces cannot be captured.
pub const SAFE_SPOT: u8 = 7;

/// First square of the shared lane.
pub const DANGER_ZONE_START: u8 = 4;

/// Last square of the shared lane.
pub const DANGER_ZONE_END: u8 = 11;

/// Squares that grant the mover another turn.
pub const REROLL_SPOTS: [u8; 3] = [3, 7, 13];

/// Is `position` in the shared lane, where opposing pieces meet?
///
/// The safe spot is part of the lane; callers that capture must also check
/// [`is_safe_spot`].
#[must_use]
pub const fn is_danger_zone(position: u8) -> bool {
    DANGER_ZONE_START <= position && position <= DANGER_ZONE_END
}

/// Is `position` the safe spot?
#[must_use]
pub const fn is_safe_spot(position: u8) -> bool {
    position == SAFE_SPOT
}

/// Does landing on `position` grant another turn?
#[must_use]
pub const fn is_reroll_spot(position: u8) -> bool {
    position == REROLL_SPOTS[0] || position == REROLL_SPOTS[1] || position == REROLL_SPOTS[2]
}

/// Square a newly entered piece lands on for a given roll.
///
/// A roll of 0 cannot enter a piece.
#[must_use]
pub const fn entry_square(roll: u8) -> Option<u8> {
    roll.checked_sub(1)
}

/// The other player.
#[must_use]
pub const fn opponent_of(player: PlayerId) -> PlayerId {
    player.opponent()
}
