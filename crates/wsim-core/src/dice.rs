//! Seeded dice for gunnery rolls.
//!
//! The rules take the roll as a plain integer so callers can supply their own.
//! [`Dice`] is the convenience source used by the game roster: a `ChaCha8`
//! stream seeded from a `u64`, so a replay with the same seed rolls the same
//! numbers on every platform.

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Deterministic six-sided dice.
#[derive(Debug, Clone)]
pub struct Dice {
    rng: ChaCha8Rng,
    seed: u64,
}

impl Dice {
    /// Creates dice seeded with `seed`.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed these dice were created with.
    #[must_use]
    pub const fn seed(&self) -> u64 {
        self.seed
    }

    /// One die, `1..=6`.
    pub fn roll_d6(&mut self) -> i32 {
        self.rng.gen_range(1..=6)
    }

    /// Two dice summed, `2..=12`.
    pub fn roll_2d6(&mut self) -> i32 {
        self.roll_d6() + self.roll_d6()
    }
}

impl Default for Dice {
    fn default() -> Self {
        Self::new(0)
    }
}
