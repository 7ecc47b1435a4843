//! Fixed-priority heuristic bot.
//!
//! Rules are tried top to bottom and the first that matches decides:
//!
//! 1. A lone `Roll` or `Pass`: nothing to decide.
//! 2. Bring a piece home.
//! 3. Capture an opponent piece (first in generator order).
//! 4. Enter a new piece.
//! 5. Land on a reroll spot, furthest one first.
//! 6. Move to the square least exposed to the opponent's next roll.
//!
//! Ties always go to the move the generator listed first.

use crate::core::board::{is_danger_zone, is_reroll_spot, is_safe_spot, HOME};
use crate::core::{roll_likelihood, GameState, Move};
use crate::rules::potential_moves;

/// Pick the bot's move for the player to act.
///
/// # Panics
///
/// Panics if the move generator breaks its contract and yields no
/// candidates.
#[must_use]
pub fn next_move(state: &GameState) -> Move {
    choose_move(state, &potential_moves(state))
}

/// Apply the priority rules to an already generated candidate list.
///
/// # Panics
///
/// Panics if `moves` is empty: the generator always offers at least `Pass`,
/// so an empty list is a programming error.
#[must_use]
pub fn choose_move(state: &GameState, moves: &[Move]) -> Move {
    if let [only] = moves {
        if only.is_degenerate() {
            return *only;
        }
    }

    if let Some(mv) = piece_moves(moves).find(|&(_, to)| to == HOME) {
        return decided(mv, "reach home");
    }

    if let Some(mv) = piece_moves(moves).find(|&(_, to)| captures(state, to)) {
        return decided(mv, "capture");
    }

    if moves.contains(&Move::AddPiece) {
        tracing::debug!(rule = "enter piece", "bot decided");
        return Move::AddPiece;
    }

    let furthest_reroll = piece_moves(moves)
        .filter(|&(_, to)| is_reroll_spot(to))
        .reduce(|best, mv| if mv.1 > best.1 { mv } else { best });
    if let Some(mv) = furthest_reroll {
        return decided(mv, "reroll spot");
    }

    // min_by_key keeps the first of equal minima, i.e. generator order.
    match piece_moves(moves).min_by_key(|&(_, to)| danger_exposure(state, to)) {
        Some(mv) => decided(mv, "least exposed"),
        None => panic!("bot has no move to choose from: {moves:?}"),
    }
}

/// How likely the opponent's next roll lands on `position`, in sixteenths.
///
/// Zero on the safe spot and outside the shared lane. Otherwise the sum,
/// over opponent pieces behind `position`, of the number of dice outcomes
/// that cover exactly the distance.
#[must_use]
pub fn danger_exposure(state: &GameState, position: u8) -> u32 {
    if is_safe_spot(position) || !is_danger_zone(position) {
        return 0;
    }

    state
        .opponent()
        .positions()
        .map(|p| roll_likelihood(i16::from(position) - i16::from(p)))
        .sum()
}

/// Would a piece of the player to act landing on `to` capture?
#[must_use]
pub fn captures(state: &GameState, to: u8) -> bool {
    is_danger_zone(to) && !is_safe_spot(to) && state.opponent().occupies(to)
}

fn piece_moves(moves: &[Move]) -> impl Iterator<Item = (usize, u8)> + '_ {
    moves.iter().filter_map(|mv| match *mv {
        Move::MovePiece { index, to } => Some((index, to)),
        _ => None,
    })
}

fn decided((index, to): (usize, u8), rule: &'static str) -> Move {
    tracing::debug!(rule, index, to, "bot decided");
    Move::MovePiece { index, to }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{initial_state, PlayerId, PlayerState};

    fn state_with(first: &[u8], second: &[u8], roll: u8) -> GameState {
        GameState::from_parts(
            PlayerState::with_pieces(0, first),
            PlayerState::with_pieces(0, second),
            PlayerId::FIRST,
            Some(roll),
        )
    }

    #[test]
    fn test_degenerate_moves_pass_through() {
        assert_eq!(next_move(&initial_state()), Move::Roll);
        assert_eq!(next_move(&state_with(&[3], &[], 0)), Move::Pass);
    }

    #[test]
    fn test_home_beats_capture() {
        // Piece 0 can capture on 5, piece 1 can go home.
        let state = state_with(&[4, 13], &[5], 1);
        assert_eq!(next_move(&state), Move::MovePiece { index: 1, to: 14 });
    }

    #[test]
    fn test_capture_beats_entry() {
        let state = state_with(&[3], &[6], 3);
        assert_eq!(next_move(&state), Move::MovePiece { index: 0, to: 6 });
    }

    #[test]
    fn test_first_capture_in_generator_order() {
        let state = state_with(&[4, 6], &[5, 7, 8], 2);
        // Piece 0 -> 6 is blocked by piece 1; piece 1 -> 8 captures.
        assert_eq!(next_move(&state), Move::MovePiece { index: 1, to: 8 });

        let state = state_with(&[2, 4], &[5, 6], 2);
        // Piece 0 -> 4 blocked; piece 1 -> 6 captures.
        assert_eq!(next_move(&state), Move::MovePiece { index: 1, to: 6 });
    }

    #[test]
    fn test_entry_beats_reroll() {
        // 5 -> 7 would reach a reroll spot, square 1 is free for entry.
        let state = state_with(&[5], &[], 2);
        assert_eq!(next_move(&state), Move::AddPiece);
    }

    #[test]
    fn test_furthest_reroll_spot() {
        // Bench empty so entry is not an option.
        let mut state = state_with(&[1, 5, 11], &[], 2);
        state.players[PlayerId::FIRST] = PlayerState::with_pieces(4, &[1, 5, 11]);

        assert_eq!(next_move(&state), Move::MovePiece { index: 2, to: 13 });
    }

    #[test]
    fn test_least_exposed_square() {
        let mut state = state_with(&[2, 8], &[4], 3);
        state.players[PlayerId::FIRST] = PlayerState::with_pieces(5, &[2, 8]);

        // 2 -> 5 sits one square ahead of the opponent (exposure 4),
        // 8 -> 11 is seven squares ahead (exposure 0).
        assert_eq!(danger_exposure(&state, 5), 4);
        assert_eq!(danger_exposure(&state, 11), 0);
        assert_eq!(next_move(&state), Move::MovePiece { index: 1, to: 11 });
    }

    #[test]
    fn test_exposure_tie_goes_to_generator_order() {
        let mut state = state_with(&[0, 9], &[], 1);
        state.players[PlayerId::FIRST] = PlayerState::with_pieces(5, &[0, 9]);

        // Both destinations are unthreatened.
        assert_eq!(next_move(&state), Move::MovePiece { index: 0, to: 1 });
    }

    #[test]
    fn test_danger_exposure_ignores_safe_spot_and_private_lanes() {
        let state = state_with(&[], &[5, 6], 1);

        assert_eq!(danger_exposure(&state, 7), 0);
        assert_eq!(danger_exposure(&state, 2), 0);
        assert_eq!(danger_exposure(&state, 12), 0);
        // 8 is 3 ahead of 5 and 2 ahead of 6: 4 + 6.
        assert_eq!(danger_exposure(&state, 8), 10);
    }

    #[test]
    fn test_captures() {
        let state = state_with(&[], &[0, 7, 9], 1);

        assert!(captures(&state, 9));
        assert!(!captures(&state, 7));
        assert!(!captures(&state, 0));
        assert!(!captures(&state, 10));
    }

    #[test]
    #[should_panic(expected = "bot has no move to choose from")]
    fn test_empty_candidates_panic() {
        let _ = choose_move(&initial_state(), &[]);
    }
}
