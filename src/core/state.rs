//! Game state: the complete value describing one game.
//!
//! ## PlayerState
//!
//! One player's pieces: how many are home, how many wait on the bench, and
//! the ordered list of pieces on the track. Moves name a fielded piece by its
//! index in that list, so the order matters.
//!
//! ## GameState
//!
//! Both players plus whose turn it is and the pending roll. A state is never
//! mutated in place by the rules: the reducer builds a successor from a clone.
//! `fielded_pieces` is an `im::Vector`, so that clone is O(1).
//!
//! The serialized field names follow the wire format shared with other
//! collaborators (`wonPieces`, `currentPlayer`, `lastRoll`, ...).

use im::Vector;
use serde::{Deserialize, Serialize};

use super::board::{is_danger_zone, is_safe_spot, LAST_SQUARE, PIECES_PER_PLAYER};
use super::dice::MAX_ROLL;
use super::error::{CodecError, InvariantViolation};
use super::player::{PlayerId, Players};

/// A piece on the track.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    /// Square along the owner's track, `0..=13`.
    pub position: u8,
}

impl Piece {
    /// Create a piece at `position`.
    #[must_use]
    pub const fn at(position: u8) -> Self {
        Self { position }
    }
}

/// One player's pieces.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    /// Pieces that reached home.
    pub won_pieces: u8,

    /// Pieces on the bench, not yet entered (or captured back).
    pub out_of_play_pieces: u8,

    /// Pieces on the track, in the order they were entered.
    pub fielded_pieces: Vector<Piece>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self::new()
    }
}

impl PlayerState {
    /// All pieces on the bench.
    #[must_use]
    pub fn new() -> Self {
        Self {
            won_pieces: 0,
            out_of_play_pieces: PIECES_PER_PLAYER,
            fielded_pieces: Vector::new(),
        }
    }

    /// Build a player with `won` pieces home and pieces fielded at
    /// `positions` (in that order). The rest sit on the bench.
    ///
    /// # Panics
    ///
    /// Panics if more than seven pieces are accounted for.
    #[must_use]
    pub fn with_pieces(won: u8, positions: &[u8]) -> Self {
        let placed = usize::from(won) + positions.len();
        assert!(
            placed <= usize::from(PIECES_PER_PLAYER),
            "At most 7 pieces per player"
        );

        Self {
            won_pieces: won,
            out_of_play_pieces: PIECES_PER_PLAYER - placed as u8,
            fielded_pieces: positions.iter().copied().map(Piece::at).collect(),
        }
    }

    /// Total pieces accounted for. Seven in every valid state.
    #[must_use]
    pub fn piece_count(&self) -> usize {
        usize::from(self.won_pieces) + usize::from(self.out_of_play_pieces) + self.fielded_pieces.len()
    }

    /// Is one of this player's pieces on `position`?
    #[must_use]
    pub fn occupies(&self, position: u8) -> bool {
        self.piece_at(position).is_some()
    }

    /// Index of the fielded piece on `position`, if any.
    #[must_use]
    pub fn piece_at(&self, position: u8) -> Option<usize> {
        self.fielded_pieces.iter().position(|p| p.position == position)
    }

    /// Positions of fielded pieces, in fielded order.
    pub fn positions(&self) -> impl Iterator<Item = u8> + '_ {
        self.fielded_pieces.iter().map(|p| p.position)
    }

    /// Move a piece from the bench onto `position`.
    pub(crate) fn enter_piece(&mut self, position: u8) {
        self.out_of_play_pieces -= 1;
        self.fielded_pieces.push_back(Piece::at(position));
    }

    /// Send the piece at `index` back to the bench.
    pub(crate) fn bench_piece(&mut self, index: usize) {
        self.fielded_pieces.remove(index);
        self.out_of_play_pieces += 1;
    }

    /// Take the piece at `index` off the board as a won piece.
    pub(crate) fn bring_home(&mut self, index: usize) {
        self.fielded_pieces.remove(index);
        self.won_pieces += 1;
    }
}

/// Complete state of one game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameState {
    /// Per-player pieces.
    pub players: Players<PlayerState>,

    /// Whose turn it is.
    pub current_player: PlayerId,

    /// Pending roll. `None` means the current player must roll next.
    pub last_roll: Option<u8>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::initial()
    }
}

/// The state every game starts from.
#[must_use]
pub fn initial_state() -> GameState {
    GameState::initial()
}

impl GameState {
    /// Both benches full, player 0 to roll.
    #[must_use]
    pub fn initial() -> Self {
        Self {
            players: Players::with_value(PlayerState::new()),
            current_player: PlayerId::FIRST,
            last_roll: None,
        }
    }

    /// Assemble a state from parts. Mostly useful for setting up positions.
    #[must_use]
    pub fn from_parts(
        first: PlayerState,
        second: PlayerState,
        current_player: PlayerId,
        last_roll: Option<u8>,
    ) -> Self {
        Self {
            players: Players::from_pair(first, second),
            current_player,
            last_roll,
        }
    }

    /// A player's pieces.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.players[player]
    }

    /// Pieces of the player to move.
    #[must_use]
    pub fn current(&self) -> &PlayerState {
        &self.players[self.current_player]
    }

    /// Pieces of the player waiting.
    #[must_use]
    pub fn opponent(&self) -> &PlayerState {
        &self.players[self.current_player.opponent()]
    }

    /// Verify the data-model invariants.
    ///
    /// States produced by the reducer from a valid state always pass; this
    /// exists for hand-built and decoded states.
    pub fn check_invariants(&self) -> Result<(), InvariantViolation> {
        if let Some(roll) = self.last_roll.filter(|&r| r > MAX_ROLL) {
            return Err(InvariantViolation::RollOutOfRange { roll });
        }

        for (player, pieces) in self.players.iter() {
            let total = pieces.piece_count();
            if total != usize::from(PIECES_PER_PLAYER) {
                return Err(InvariantViolation::PieceCount { player, total });
            }

            let mut seen = [false; LAST_SQUARE as usize + 1];
            for position in pieces.positions() {
                if position > LAST_SQUARE {
                    return Err(InvariantViolation::OffTrack { player, position });
                }
                if std::mem::replace(&mut seen[usize::from(position)], true) {
                    return Err(InvariantViolation::DuplicatePosition { player, position });
                }
            }
        }

        let [first, second] = [PlayerId::FIRST, PlayerId::SECOND].map(|p| self.player(p));
        if let Some(position) = first
            .positions()
            .filter(|&p| is_danger_zone(p) && !is_safe_spot(p))
            .find(|&p| second.occupies(p))
        {
            return Err(InvariantViolation::SharedSquare { position });
        }

        Ok(())
    }

    // === Snapshots ===

    /// Encode to a compact binary snapshot.
    pub fn encode(&self) -> Result<Vec<u8>, CodecError> {
        bincode::serialize(self).map_err(CodecError::Encode)
    }

    /// Decode a snapshot produced by [`GameState::encode`].
    ///
    /// The decoded state is checked against the invariants before it is
    /// returned.
    pub fn decode(bytes: &[u8]) -> Result<Self, CodecError> {
        let state: Self = bincode::deserialize(bytes).map_err(CodecError::Decode)?;
        state.check_invariants()?;
        Ok(state)
    }
}
