//! The rules of the race: legal moves, turn resolution, win detection.
//!
//! All three are pure functions of a [`GameState`](crate::core::GameState):
//!
//! - [`potential_moves`]: what the player to act may do
//! - [`reduce`]: apply one action, or explain why it is illegal
//! - [`has_winner`]: who, if anyone, has brought every piece home
//!
//! Drivers call `has_winner` after every `reduce` and stop once it reports a
//! player; the reducer itself does not refuse actions on a finished game.

pub mod movegen;
pub mod reducer;
pub mod win;

pub use movegen::{potential_moves, Moves};
pub use reducer::reduce;
pub use win::{has_winner, is_terminal};
