//! Turn resolution: apply one action to a state.
//!
//! The turn phase is implied by `last_roll`: `None` means the player must
//! roll, `Some(_)` means they must add, move or pass. Every successful
//! non-roll action clears the roll and either hands the turn over or, when
//! the piece landed on a reroll spot, keeps it with the same player.

use crate::core::board::{is_danger_zone, is_reroll_spot, HOME};
use crate::core::{Action, GameState, InvalidAction, Piece, MAX_ROLL};

use super::movegen::{check_destination, check_entry};

/// Apply `action` to `state`, returning the successor state.
///
/// `state` is never modified. The successor is built from a clone and only
/// returned when every check passed.
pub fn reduce(state: &GameState, action: Action) -> Result<GameState, InvalidAction> {
    let next = match action {
        Action::Roll { value } => roll(state, value),
        Action::AddPiece => add_piece(state),
        Action::MovePiece { index } => move_piece(state, index),
        Action::Pass => Ok(pass(state)),
    }?;

    tracing::trace!(
        player = %state.current_player,
        %action,
        next_player = %next.current_player,
        "applied action"
    );

    Ok(next)
}

fn roll(state: &GameState, value: u8) -> Result<GameState, InvalidAction> {
    if let Some(roll) = state.last_roll {
        return Err(InvalidAction::AlreadyRolled { roll });
    }
    if value > MAX_ROLL {
        return Err(InvalidAction::RollOutOfRange { value });
    }

    let mut next = state.clone();
    next.last_roll = Some(value);
    Ok(next)
}

fn add_piece(state: &GameState) -> Result<GameState, InvalidAction> {
    let roll = pending_roll(state)?;
    let square = check_entry(state.current(), roll)?;

    let mut next = state.clone();
    next.players[state.current_player].enter_piece(square);
    Ok(finish_turn(next, square))
}

fn move_piece(state: &GameState, index: usize) -> Result<GameState, InvalidAction> {
    let roll = pending_roll(state)?;
    let mover = state.current_player;
    let opponent = mover.opponent();

    let piece = state
        .current()
        .fielded_pieces
        .get(index)
        .ok_or(InvalidAction::NoSuchPiece {
            index,
            fielded: state.current().fielded_pieces.len(),
        })?;
    let to = check_destination(state.current(), state.opponent(), piece.position, roll)?;

    let mut next = state.clone();

    if to == HOME {
        next.players[mover].bring_home(index);
        tracing::debug!(player = %mover, "piece reached home");
    } else {
        if is_danger_zone(to) {
            if let Some(captured) = state.opponent().piece_at(to) {
                // check_destination already refused the safe spot.
                next.players[opponent].bench_piece(captured);
                tracing::debug!(player = %mover, square = to, "captured opponent piece");
            }
        }
        next.players[mover].fielded_pieces.set(index, Piece::at(to));
    }

    Ok(finish_turn(next, to))
}

fn pass(state: &GameState) -> GameState {
    let mut next = state.clone();
    next.last_roll = None;
    next.current_player = state.current_player.opponent();
    next
}

/// The roll a move or entry will use. Zero rolls can only pass.
fn pending_roll(state: &GameState) -> Result<u8, InvalidAction> {
    match state.last_roll {
        None => Err(InvalidAction::NoPendingRoll),
        Some(0) => Err(InvalidAction::ZeroRoll),
        Some(value) if value > MAX_ROLL => Err(InvalidAction::RollOutOfRange { value }),
        Some(roll) => Ok(roll),
    }
}

fn finish_turn(mut next: GameState, landed_on: u8) -> GameState {
    next.last_roll = None;
    if is_reroll_spot(landed_on) {
        tracing::debug!(player = %next.current_player, square = landed_on, "extra turn");
    } else {
        next.current_player = next.current_player.opponent();
    }
    next
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{initial_state, PlayerId, PlayerState};

    fn state_with(first: &[u8], second: &[u8], current: PlayerId, roll: Option<u8>) -> GameState {
        GameState::from_parts(
            PlayerState::with_pieces(0, first),
            PlayerState::with_pieces(0, second),
            current,
            roll,
        )
    }

    #[test]
    fn test_roll_sets_pending_roll() {
        let next = reduce(&initial_state(), Action::Roll { value: 3 }).unwrap();

        assert_eq!(next.last_roll, Some(3));
        assert_eq!(next.current_player, PlayerId::FIRST);
    }

    #[test]
    fn test_cannot_roll_twice() {
        let rolled = reduce(&initial_state(), Action::Roll { value: 2 }).unwrap();

        assert_eq!(
            reduce(&rolled, Action::Roll { value: 1 }),
            Err(InvalidAction::AlreadyRolled { roll: 2 })
        );
    }

    #[test]
    fn test_roll_out_of_range() {
        assert_eq!(
            reduce(&initial_state(), Action::Roll { value: 5 }),
            Err(InvalidAction::RollOutOfRange { value: 5 })
        );
    }

    #[test]
    fn test_add_piece_requires_roll() {
        assert_eq!(
            reduce(&initial_state(), Action::AddPiece),
            Err(InvalidAction::NoPendingRoll)
        );
    }

    #[test]
    fn test_add_piece_on_zero_roll() {
        let state = state_with(&[], &[], PlayerId::FIRST, Some(0));
        assert_eq!(reduce(&state, Action::AddPiece), Err(InvalidAction::ZeroRoll));
    }

    #[test]
    fn test_pending_roll_out_of_range() {
        let state = state_with(&[2], &[], PlayerId::FIRST, Some(9));

        assert_eq!(
            reduce(&state, Action::AddPiece),
            Err(InvalidAction::RollOutOfRange { value: 9 })
        );
        assert_eq!(
            reduce(&state, Action::MovePiece { index: 0 }),
            Err(InvalidAction::RollOutOfRange { value: 9 })
        );
        assert!(reduce(&state, Action::Pass).is_ok());
    }

    #[test]
    fn test_add_piece_passes_turn() {
        let state = state_with(&[], &[], PlayerId::FIRST, Some(3));
        let next = reduce(&state, Action::AddPiece).unwrap();

        assert_eq!(next.player(PlayerId::FIRST).positions().collect::<Vec<_>>(), vec![2]);
        assert_eq!(next.player(PlayerId::FIRST).out_of_play_pieces, 6);
        assert_eq!(next.last_roll, None);
        assert_eq!(next.current_player, PlayerId::SECOND);
    }

    #[test]
    fn test_add_piece_on_reroll_spot_keeps_turn() {
        let state = state_with(&[], &[], PlayerId::SECOND, Some(4));
        let next = reduce(&state, Action::AddPiece).unwrap();

        assert_eq!(next.player(PlayerId::SECOND).positions().collect::<Vec<_>>(), vec![3]);
        assert_eq!(next.current_player, PlayerId::SECOND);
    }

    #[test]
    fn test_add_piece_entry_blocked() {
        let state = state_with(&[1], &[], PlayerId::FIRST, Some(2));
        assert_eq!(
            reduce(&state, Action::AddPiece),
            Err(InvalidAction::EntryBlocked { square: 1 })
        );
    }

    #[test]
    fn test_add_piece_bench_empty() {
        let mut state = state_with(&[], &[], PlayerId::FIRST, Some(1));
        state.players[PlayerId::FIRST] = PlayerState::with_pieces(7, &[]);

        assert_eq!(reduce(&state, Action::AddPiece), Err(InvalidAction::BenchEmpty));
    }

    #[test]
    fn test_move_piece_simple() {
        let state = state_with(&[1], &[], PlayerId::FIRST, Some(4));
        let next = reduce(&state, Action::MovePiece { index: 0 }).unwrap();

        assert_eq!(next.player(PlayerId::FIRST).positions().collect::<Vec<_>>(), vec![5]);
        assert_eq!(next.current_player, PlayerId::SECOND);
        assert_eq!(next.last_roll, None);
    }

    #[test]
    fn test_move_piece_bad_index() {
        let state = state_with(&[1], &[], PlayerId::FIRST, Some(1));
        assert_eq!(
            reduce(&state, Action::MovePiece { index: 3 }),
            Err(InvalidAction::NoSuchPiece { index: 3, fielded: 1 })
        );
    }

    #[test]
    fn test_move_piece_overshoot() {
        let state = state_with(&[12], &[], PlayerId::FIRST, Some(3));
        assert_eq!(
            reduce(&state, Action::MovePiece { index: 0 }),
            Err(InvalidAction::Overshoot { from: 12, roll: 3 })
        );
    }

    #[test]
    fn test_move_piece_blocked_by_own_piece() {
        let state = state_with(&[4, 6], &[], PlayerId::FIRST, Some(2));
        assert_eq!(
            reduce(&state, Action::MovePiece { index: 0 }),
            Err(InvalidAction::OwnPieceBlocks { square: 6 })
        );
    }

    #[test]
    fn test_move_piece_home_reindexes() {
        let state = state_with(&[12, 2, 5], &[], PlayerId::FIRST, Some(2));
        let next = reduce(&state, Action::MovePiece { index: 0 }).unwrap();

        let player = next.player(PlayerId::FIRST);
        assert_eq!(player.won_pieces, 1);
        assert_eq!(player.positions().collect::<Vec<_>>(), vec![2, 5]);
        assert_eq!(next.current_player, PlayerId::SECOND);
    }

    #[test]
    fn test_capture_returns_piece_to_bench() {
        let state = state_with(&[2], &[6, 9], PlayerId::FIRST, Some(4));
        let next = reduce(&state, Action::MovePiece { index: 0 }).unwrap();

        let victim = next.player(PlayerId::SECOND);
        assert_eq!(victim.positions().collect::<Vec<_>>(), vec![9]);
        assert_eq!(victim.out_of_play_pieces, 6);
        assert_eq!(victim.won_pieces, 0);
        assert_eq!(next.player(PlayerId::FIRST).positions().collect::<Vec<_>>(), vec![6]);
        assert_eq!(next.check_invariants(), Ok(()));
    }

    #[test]
    fn test_no_capture_outside_danger_zone() {
        // Square 12 is each player's own exit lane.
        let state = state_with(&[10], &[12], PlayerId::FIRST, Some(2));
        let next = reduce(&state, Action::MovePiece { index: 0 }).unwrap();

        assert_eq!(next.player(PlayerId::SECOND).positions().collect::<Vec<_>>(), vec![12]);
        assert_eq!(next.player(PlayerId::FIRST).positions().collect::<Vec<_>>(), vec![12]);
    }

    #[test]
    fn test_safe_spot_capture_forbidden() {
        let state = state_with(&[5], &[7], PlayerId::FIRST, Some(2));

        assert_eq!(
            reduce(&state, Action::MovePiece { index: 0 }),
            Err(InvalidAction::SafeSpotTaken)
        );
    }

    #[test]
    fn test_landing_on_safe_spot_keeps_turn() {
        let state = state_with(&[5], &[], PlayerId::FIRST, Some(2));
        let next = reduce(&state, Action::MovePiece { index: 0 }).unwrap();

        assert_eq!(next.current_player, PlayerId::FIRST);
        assert_eq!(next.last_roll, None);
    }

    #[test]
    fn test_pass_always_hands_over() {
        for roll in [None, Some(0), Some(3)] {
            let state = state_with(&[], &[], PlayerId::SECOND, roll);
            let next = reduce(&state, Action::Pass).unwrap();

            assert_eq!(next.current_player, PlayerId::FIRST);
            assert_eq!(next.last_roll, None);
        }
    }

    #[test]
    fn test_failed_action_leaves_state_untouched() {
        let state = state_with(&[4, 6], &[5], PlayerId::FIRST, Some(2));
        let before = state.clone();

        assert!(reduce(&state, Action::MovePiece { index: 0 }).is_err());
        assert_eq!(state, before);
    }
}
