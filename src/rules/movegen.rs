//! Legal-move generation.

use smallvec::{smallvec, SmallVec};

use crate::core::board::{entry_square, is_safe_spot, HOME};
use crate::core::{GameState, InvalidAction, Move, PlayerState, MAX_ROLL};

/// Candidate moves for one decision. Seven pieces plus an entry fit inline.
pub type Moves = SmallVec<[Move; 8]>;

/// Enumerate every legal move for the player to act.
///
/// - No pending roll: exactly `[Roll]`.
/// - Otherwise one `MovePiece` per fielded piece that can land, in fielded
///   order, then `AddPiece` if a piece can enter.
/// - If nothing qualifies (always the case for a roll of 0 or one above
///   4): `[Pass]`.
///
/// Never returns an empty list.
#[must_use]
pub fn potential_moves(state: &GameState) -> Moves {
    let Some(roll) = state.last_roll else {
        return smallvec![Move::Roll];
    };

    let mover = state.current();
    let opponent = state.opponent();
    let mut moves = Moves::new();

    if (1..=MAX_ROLL).contains(&roll) {
        for (index, piece) in mover.fielded_pieces.iter().enumerate() {
            if check_destination(mover, opponent, piece.position, roll).is_ok() {
                moves.push(Move::MovePiece {
                    index,
                    to: piece.position + roll,
                });
            }
        }

        if check_entry(mover, roll).is_ok() {
            moves.push(Move::AddPiece);
        }
    }

    if moves.is_empty() {
        moves.push(Move::Pass);
    }

    moves
}

/// Can a piece of `mover` standing on `from` advance by `roll`?
///
/// Shared by the generator and the reducer so both agree on legality.
pub(crate) fn check_destination(
    mover: &PlayerState,
    opponent: &PlayerState,
    from: u8,
    roll: u8,
) -> Result<u8, InvalidAction> {
    let to = from + roll;
    if to > HOME {
        return Err(InvalidAction::Overshoot { from, roll });
    }
    if to == HOME {
        return Ok(to);
    }
    if mover.occupies(to) {
        return Err(InvalidAction::OwnPieceBlocks { square: to });
    }
    if is_safe_spot(to) && opponent.occupies(to) {
        return Err(InvalidAction::SafeSpotTaken);
    }
    Ok(to)
}

/// Can `mover` enter a piece with `roll`? Returns the entry square.
pub(crate) fn check_entry(mover: &PlayerState, roll: u8) -> Result<u8, InvalidAction> {
    let square = entry_square(roll).ok_or(InvalidAction::ZeroRoll)?;
    if mover.out_of_play_pieces == 0 {
        return Err(InvalidAction::BenchEmpty);
    }
    if mover.occupies(square) {
        return Err(InvalidAction::EntryBlocked { square });
    }
    Ok(square)
}
