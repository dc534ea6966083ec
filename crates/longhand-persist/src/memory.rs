//! In-memory sink for testing.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use longhand_core::model::StudentId;
use longhand_core::report::TerminalReport;
use longhand_core::traits::ReportSink;

/// A sink that records delivered reports instead of sending them
/// anywhere, for testing session plumbing without a live backend.
#[derive(Default)]
pub struct MemorySink {
    delivered: Mutex<Vec<(StudentId, TerminalReport)>>,
    call_count: AtomicU32,
}

impl MemorySink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of deliveries made to this sink.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// Snapshot of everything delivered so far.
    pub fn delivered(&self) -> Vec<(StudentId, TerminalReport)> {
        self.delivered.lock().unwrap().clone()
    }
}

#[async_trait]
impl ReportSink for MemorySink {
    fn name(&self) -> &str {
        "memory"
    }

    async fn deliver(&self, report: &TerminalReport, student: &StudentId) -> anyhow::Result<()> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        self.delivered
            .lock()
            .unwrap()
            .push((student.clone(), report.clone()));
        Ok(())
    }
}
