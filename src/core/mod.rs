//! Core game types: board geometry, players, state, moves, dice, errors.
//!
//! Everything here is plain data plus pure predicates. The rules that move
//! a state forward live in [`crate::rules`].

pub mod board;
pub mod player;
pub mod dice;
pub mod action;
pub mod state;
pub mod error;

pub use player::{PlayerId, Players, PLAYER_COUNT};
pub use dice::{roll_likelihood, Dice, DiceState, DICE_COUNT, RollSource, ScriptedRolls, MAX_ROLL, ROLL_OUTCOMES, ROLL_WEIGHTS};
pub use action::{Action, ActionRecord, Move};
pub use state::{initial_state, GameState, Piece, PlayerState};
pub use error::{CodecError, InvalidAction, InvariantViolation};
