use std::sync::atomic::{AtomicU64, Ordering};

use sl_core::ports::AnalyticsPort;
use tracing::info;

/// Analytics sink that emits scan events as structured log records.
#[derive(Debug, Default)]
pub struct TracingAnalyticsSink {
    successes: AtomicU64,
    failures: AtomicU64,
}

impl TracingAnalyticsSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// `(successes, failures)` recorded so far.
    pub fn totals(&self) -> (u64, u64) {
        (
            self.successes.load(Ordering::Relaxed),
            self.failures.load(Ordering::Relaxed),
        )
    }
}

impl AnalyticsPort for TracingAnalyticsSink {
    fn record_scan_success(&self) {
        let total = self.successes.fetch_add(1, Ordering::Relaxed) + 1;
        info!(target: "storylens::analytics", event = "scan_success", total);
    }

    fn record_scan_fail(&self) {
        let total = self.failures.fetch_add(1, Ordering::Relaxed) + 1;
        info!(target: "storylens::analytics", event = "scan_fail", total);
    }
}
