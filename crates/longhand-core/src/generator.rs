//! Random problem generation.
//!
//! Factors are drawn uniformly so they have exactly `digit_range` decimal
//! digits: `[10^(digit_range-1), 10^digit_range - 1]`. For `digit_range == 1`
//! this degrades to `[1, 9]`. The floor always tracks the configured range;
//! a fixed floor would silently change the drill difficulty.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::error::MAX_DIGIT_RANGE;
use crate::model::Problem;

/// Draws a fresh [`Problem`] per trial from a seedable RNG.
#[derive(Debug)]
pub struct ProblemGenerator {
    rng: StdRng,
}

impl ProblemGenerator {
    /// Generator seeded from the OS for ordinary play.
    pub fn from_entropy() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic generator for reproducible sessions and tests.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Draw both factors independently and uniformly with exactly
    /// `digit_range` digits and compute the exact product.
    ///
    /// `digit_range` must be in `1..=MAX_DIGIT_RANGE`; session
    /// configuration validates this before a generator is ever asked.
    pub fn generate(&mut self, digit_range: u32) -> Problem {
        let (lo, hi) = factor_bounds(digit_range);
        let multiplicand = self.rng.gen_range(lo..=hi);
        let multiplier = self.rng.gen_range(lo..=hi);
        Problem::new(multiplicand, multiplier)
    }
}

/// Inclusive bounds for factors with exactly `digit_range` digits.
pub fn factor_bounds(digit_range: u32) -> (u64, u64) {
    let digit_range = digit_range.clamp(1, MAX_DIGIT_RANGE);
    let hi = 10u64.pow(digit_range) - 1;
    let lo = if digit_range == 1 {
        1
    } else {
        10u64.pow(digit_range - 1)
    };
    (lo, hi)
}
