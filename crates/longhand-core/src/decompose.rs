//! Textbook decomposition of a multiplication into partial products.
//!
//! Mirrors the pencil-and-paper algorithm: one working row per digit of the
//! multiplier, least-significant digit first, each row shifted one place
//! further left. Row texts are zero-padded to the width of the final
//! product so every row in the grid lines up column for column.

use serde::{Deserialize, Serialize};

use crate::model::{decimal_width, Problem};

/// The product of the multiplicand with a single multiplier digit,
/// shifted by that digit's position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartialProduct {
    /// The multiplier digit that produced this row.
    pub digit: u8,
    /// Positional shift: 0 for the ones digit, 1 for tens, and so on.
    pub shift: usize,
    /// `multiplicand * digit * 10^shift`.
    pub value: u64,
}

impl PartialProduct {
    /// Decimal text of `value`, left-padded with `'0'` to `width` chars.
    pub fn canonical_text(&self, width: usize) -> String {
        format!("{:0>width$}", self.value)
    }
}

/// The full ordered decomposition of one problem.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Decomposition {
    partials: Vec<PartialProduct>,
    product: u64,
    width: usize,
}

impl Decomposition {
    /// One partial product per multiplier digit, shift 0 first.
    pub fn partials(&self) -> &[PartialProduct] {
        &self.partials
    }

    /// Number of working rows.
    pub fn len(&self) -> usize {
        self.partials.len()
    }

    pub fn is_empty(&self) -> bool {
        self.partials.is_empty()
    }

    /// Character width of every row: the width of the final product.
    pub fn width(&self) -> usize {
        self.width
    }

    /// The expected final product.
    pub fn product(&self) -> u64 {
        self.product
    }

    /// Canonical text for the working row at `shift`.
    pub fn expected_row(&self, shift: usize) -> Option<String> {
        self.partials
            .get(shift)
            .map(|p| p.canonical_text(self.width))
    }

    /// Canonical text of the final row (the product; already full width).
    pub fn expected_final(&self) -> String {
        format!("{:0>width$}", self.product, width = self.width)
    }
}

/// Decompose a problem into its ordered partial products.
///
/// Scans the multiplier's decimal digits from least significant to most;
/// never fails, since the problem is valid by construction.
pub fn decompose(problem: &Problem) -> Decomposition {
    let width = problem.product_width();
    let mut partials = Vec::with_capacity(decimal_width(problem.multiplier));

    let mut rest = problem.multiplier;
    let mut shift = 0usize;
    while rest > 0 {
        let digit = (rest % 10) as u8;
        partials.push(PartialProduct {
            digit,
            shift,
            value: problem.multiplicand * u64::from(digit) * 10u64.pow(shift as u32),
        });
        rest /= 10;
        shift += 1;
    }

    debug_assert_eq!(
        partials.iter().map(|p| p.value).sum::<u64>(),
        problem.product
    );

    Decomposition {
        partials,
        product: problem.product,
        width,
    }
}
