//! Core trait definition for report persistence sinks.
//!
//! Implemented by the `longhand-persist` crate. Delivery happens after a
//! session reaches its terminal state, so a sink receives an immutable
//! report and can neither block nor alter the finalized result; retry and
//! timeout policy belong to the sink, not the engine.

use async_trait::async_trait;

use crate::model::StudentId;
use crate::report::TerminalReport;

/// A destination for terminal session reports.
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Human-readable sink name (e.g. "firebase").
    fn name(&self) -> &str;

    /// Deliver the terminal report for the given learner. The engine
    /// neither retries nor verifies delivery.
    async fn deliver(&self, report: &TerminalReport, student: &StudentId) -> anyhow::Result<()>;
}
