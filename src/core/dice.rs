//! Dice: the binomial roll model and deterministic roll sources.
//!
//! A roll is the number of marked tips showing on four tetrahedral dice, i.e.
//! the sum of four fair coin flips:
//!
//! | roll | ways | probability |
//! |------|------|-------------|
//! | 0    | 1    | 1/16        |
//! | 1    | 4    | 4/16        |
//! | 2    | 6    | 6/16        |
//! | 3    | 4    | 4/16        |
//! | 4    | 1    | 1/16        |
//!
//! The reducer never rolls. Drivers draw a value from a [`RollSource`] and
//! hand it over inside `Action::Roll`.
//!
//! ```
//! use royal_ur::core::{Dice, RollSource};
//!
//! let mut dice = Dice::new(42);
//! let roll = dice.roll();
//! assert!(roll <= 4);
//!
//! // Same seed, same rolls.
//! let mut again = Dice::new(42);
//! assert_eq!(again.roll(), roll);
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Binary dice thrown per roll.
pub const DICE_COUNT: u8 = 4;

/// Highest value a roll can take: every die showing its marked side.
pub const MAX_ROLL: u8 = DICE_COUNT;

/// Number of ways to produce each roll value `0..=4`.
pub const ROLL_WEIGHTS: [u32; 5] = [1, 4, 6, 4, 1];

/// Total number of equally likely dice outcomes (`2^4`).
pub const ROLL_OUTCOMES: u32 = 16;

/// Number of dice outcomes that produce exactly `distance`.
///
/// Zero for anything outside `0..=4`, negative distances included.
#[must_use]
pub fn roll_likelihood(distance: i16) -> u32 {
    usize::try_from(distance)
        .ok()
        .and_then(|d| ROLL_WEIGHTS.get(d))
        .copied()
        .unwrap_or(0)
}

/// Anything that can supply a roll value in `0..=4`.
pub trait RollSource {
    /// Produce the next roll.
    fn roll(&mut self) -> u8;
}

impl<R: RollSource + ?Sized> RollSource for &mut R {
    fn roll(&mut self) -> u8 {
        (**self).roll()
    }
}

/// Seeded dice backed by ChaCha8.
///
/// Forkable so drivers can hand independent streams to policies, and its
/// position can be captured and restored.
#[derive(Clone, Debug)]
pub struct Dice {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl Dice {
    /// Create dice with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Seed these dice were created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork an independent, deterministic stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self::new(fork_seed)
    }

    /// Pick an index uniformly from `0..len`.
    ///
    /// Returns `None` when `len` is zero.
    pub fn choose_index(&mut self, len: usize) -> Option<usize> {
        if len == 0 {
            None
        } else {
            Some(self.inner.gen_range(0..len))
        }
    }

    /// Get the current state for checkpointing.
    #[must_use]
    pub fn state(&self) -> DiceState {
        DiceState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            fork_counter: self.fork_counter,
        }
    }

    /// Restore from a saved state.
    #[must_use]
    pub fn from_state(state: &DiceState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            fork_counter: state.fork_counter,
        }
    }
}

impl RollSource for Dice {
    fn roll(&mut self) -> u8 {
        (0..DICE_COUNT).map(|_| u8::from(self.inner.gen_bool(0.5))).sum()
    }
}

/// Serializable dice position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiceState {
    /// Original seed
    pub seed: u64,
    /// ChaCha8 word position
    pub word_pos: u128,
    /// Fork counter for deterministic branching
    pub fork_counter: u64,
}

/// Replays a fixed cycle of roll values.
///
/// Intended for tests and scripted scenarios.
#[derive(Clone, Debug)]
pub struct ScriptedRolls {
    rolls: Vec<u8>,
    cursor: usize,
}

impl ScriptedRolls {
    /// Create a script. Values repeat once exhausted.
    ///
    /// # Panics
    ///
    /// Panics if `rolls` is empty or contains a value above 4.
    #[must_use]
    pub fn new(rolls: impl Into<Vec<u8>>) -> Self {
        let rolls = rolls.into();
        assert!(!rolls.is_empty(), "Script needs at least one roll");
        assert!(rolls.iter().all(|&r| r <= MAX_ROLL), "Rolls must be in 0..=4");
        Self { rolls, cursor: 0 }
    }
}

impl RollSource for ScriptedRolls {
    fn roll(&mut self) -> u8 {
        let roll = self.rolls[self.cursor];
        self.cursor = (self.cursor + 1) % self.rolls.len();
        roll
    }
}
