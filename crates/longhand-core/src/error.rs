//! Session and grid error types.
//!
//! Configuration problems are fatal to session start and surface as
//! [`ConfigError`] before any problem is generated. Grading mismatches are
//! *not* errors — they are ordinary `false` outcomes.

use thiserror::Error;

/// Highest digit range the engine accepts: 9-digit factors keep the
/// product within `u64`.
pub const MAX_DIGIT_RANGE: u32 = 9;

/// A session cannot start with this configuration.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// `total_trials` must be positive for a session to exist.
    #[error("total_trials must be greater than 0")]
    ZeroTrials,

    /// Factor digit count must be in `1..=MAX_DIGIT_RANGE`.
    #[error("digit_range {0} out of range (expected 1..={MAX_DIGIT_RANGE})")]
    DigitRange(u32),

    /// Accuracy threshold must be a percentage.
    #[error("required_percent {0} out of range (expected 0..=100)")]
    RequiredPercent(f64),
}

/// Runtime session failures.
#[derive(Debug, Error, PartialEq)]
pub enum SessionError {
    /// The session already graded its last trial; no further problems
    /// are generated and submissions are rejected.
    #[error("session is complete after {0} trials")]
    Complete(u32),
}

/// Rejected writes to the digit grid.
#[derive(Debug, Error, PartialEq)]
pub enum GridError {
    /// The column index does not exist in this row.
    #[error("column {col} out of range for row of width {width}")]
    ColumnOutOfRange { col: usize, width: usize },

    /// The column is a shift placeholder and cannot be edited.
    #[error("column {0} is a placeholder cell")]
    NotEditable(usize),

    /// Only single decimal digits may be entered.
    #[error("'{0}' is not a decimal digit")]
    NotADigit(char),

    /// More digits supplied than the row has editable cells.
    #[error("entry of {entered} digits exceeds {editable} editable cells")]
    TooManyDigits { entered: usize, editable: usize },
}
