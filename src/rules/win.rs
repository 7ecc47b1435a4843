//! Win detection.

use crate::core::board::PIECES_PER_PLAYER;
use crate::core::{GameState, PlayerId};

/// The first player (0, then 1) with all seven pieces home.
#[must_use]
pub fn has_winner(state: &GameState) -> Option<PlayerId> {
    PlayerId::all().find(|&p| state.player(p).won_pieces == PIECES_PER_PLAYER)
}

/// Is the game over?
#[must_use]
pub fn is_terminal(state: &GameState) -> bool {
    has_winner(state).is_some()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{initial_state, PlayerState};

    #[test]
    fn test_no_winner_at_start() {
        assert_eq!(has_winner(&initial_state()), None);
        assert!(!is_terminal(&initial_state()));
    }

    #[test]
    fn test_six_home_is_not_enough() {
        let state = GameState::from_parts(
            PlayerState::with_pieces(6, &[13]),
            PlayerState::new(),
            PlayerId::FIRST,
            None,
        );
        assert_eq!(has_winner(&state), None);
    }

    #[test]
    fn test_second_player_wins() {
        let state = GameState::from_parts(
            PlayerState::with_pieces(3, &[]),
            PlayerState::with_pieces(7, &[]),
            PlayerId::FIRST,
            None,
        );
        assert_eq!(has_winner(&state), Some(PlayerId::SECOND));
        assert!(is_terminal(&state));
    }
}
