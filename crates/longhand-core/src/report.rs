//! Terminal session reports with JSON persistence.
//!
//! Once a session completes, its result is frozen into a [`TerminalReport`]
//! and handed to a persistence sink. Asynchronous delivery must never
//! alter the already-finalized percent/passed values, so the report is a
//! plain value type.

use std::path::Path;

use anyhow::{Context, Result};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::model::{Problem, TrialOutcome};

/// The digest of one graded trial.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrialRecord {
    pub multiplicand: u64,
    pub multiplier: u64,
    pub product: u64,
    pub rows_correct: bool,
    pub final_correct: bool,
}

impl TrialRecord {
    pub fn new(problem: &Problem, outcome: &TrialOutcome) -> Self {
        Self {
            multiplicand: problem.multiplicand,
            multiplier: problem.multiplier,
            product: problem.product,
            rows_correct: outcome.rows_correct,
            final_correct: outcome.final_correct,
        }
    }

    pub fn is_correct(&self) -> bool {
        self.rows_correct && self.final_correct
    }
}

/// The frozen result of a completed session.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TerminalReport {
    /// Unique report identifier.
    pub id: Uuid,
    /// When the session completed.
    pub created_at: DateTime<Utc>,
    /// Digit range the factors were drawn from.
    pub digit_range: u32,
    /// Trials in the session.
    pub total_trials: u32,
    /// Trials graded fully correct.
    pub correct_trials: u32,
    /// `100 * correct_trials / total_trials`.
    pub percent: f64,
    /// Accuracy threshold the session was measured against.
    pub required_percent: f64,
    /// Whether `percent >= required_percent`.
    pub passed: bool,
    /// One record per graded trial, in order.
    pub trials: Vec<TrialRecord>,
}

impl TerminalReport {
    /// Save the report as pretty JSON, creating parent directories.
    pub fn save_json(&self, path: &Path) -> Result<()> {
        let json = serde_json::to_string_pretty(self).context("failed to serialize report")?;
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, json)
            .with_context(|| format!("failed to write report to {}", path.display()))?;
        Ok(())
    }

    /// Load a report from a JSON file.
    pub fn load_json(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read report from {}", path.display()))?;
        let report: TerminalReport =
            serde_json::from_str(&content).context("failed to parse report JSON")?;
        Ok(report)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn make_report() -> TerminalReport {
        TerminalReport {
            id: Uuid::nil(),
            created_at: Utc::now(),
            digit_range: 2,
            total_trials: 5,
            correct_trials: 4,
            percent: 80.0,
            required_percent: 75.0,
            passed: true,
            trials: vec![TrialRecord {
                multiplicand: 23,
                multiplier: 14,
                product: 322,
                rows_correct: true,
                final_correct: true,
            }],
        }
    }

    #[test]
    fn json_roundtrip() {
        let report = make_report();
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("report.json");

        report.save_json(&path).unwrap();
        let loaded = TerminalReport::load_json(&path).unwrap();

        assert_eq!(loaded.correct_trials, 4);
        assert!(loaded.passed);
        assert_eq!(loaded.trials.len(), 1);
        assert!(loaded.trials[0].is_correct());
    }

    #[test]
    fn load_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        assert!(TerminalReport::load_json(&dir.path().join("nope.json")).is_err());
    }
}
