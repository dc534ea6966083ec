//! Core data model types for longhand.
//!
//! These are the fundamental types the entire longhand system uses to
//! represent a multiplication problem, the outcome of grading one trial,
//! and the learner identity handed to persistence sinks.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A single long-multiplication problem posed to the learner.
///
/// Immutable once created; a fresh `Problem` is generated for every trial
/// and discarded after grading.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Problem {
    /// The top factor, written first on paper.
    pub multiplicand: u64,
    /// The bottom factor; each of its digits produces one working row.
    pub multiplier: u64,
    /// The exact product of the two factors.
    pub product: u64,
}

impl Problem {
    /// Build a problem from two factors, computing the product.
    ///
    /// Factors must be non-zero; the grid shape is undefined for a zero
    /// multiplier (no digits → no working rows). Panics if the product
    /// overflows `u64`; factors within
    /// [`MAX_DIGIT_RANGE`](crate::error::MAX_DIGIT_RANGE) digits always
    /// fit.
    pub fn new(multiplicand: u64, multiplier: u64) -> Self {
        debug_assert!(multiplicand > 0 && multiplier > 0);
        let product = multiplicand
            .checked_mul(multiplier)
            .expect("factor product overflows u64");
        Self {
            multiplicand,
            multiplier,
            product,
        }
    }

    /// Character width of the product in decimal — the width of every
    /// row in the answer grid.
    pub fn product_width(&self) -> usize {
        decimal_width(self.product)
    }
}

impl fmt::Display for Problem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} × {}", self.multiplicand, self.multiplier)
    }
}

/// Number of decimal digits in `n` (1 for 0).
pub fn decimal_width(n: u64) -> usize {
    if n == 0 {
        return 1;
    }
    let mut width = 0;
    let mut n = n;
    while n > 0 {
        width += 1;
        n /= 10;
    }
    width
}

/// The graded outcome of one trial.
///
/// Derived by the verifier, never stored inside the grid; the session
/// records a [`crate::report::TrialRecord`] built from it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialOutcome {
    /// Every working row matched its expected partial product.
    pub rows_correct: bool,
    /// The final row matched the product.
    pub final_correct: bool,
    /// Per-working-row verdicts, least-significant row first.
    pub row_results: Vec<bool>,
}

impl TrialOutcome {
    /// A trial counts as correct only when every working row and the
    /// final row are correct.
    pub fn is_correct(&self) -> bool {
        self.rows_correct && self.final_correct
    }
}

/// Opaque learner identity handed to persistence sinks alongside the
/// terminal report. The core never inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct StudentId(pub String);

impl StudentId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for StudentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
