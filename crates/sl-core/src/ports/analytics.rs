/// Fire-and-forget analytics sink.
pub trait AnalyticsPort: Send + Sync {
    fn record_scan_success(&self);

    fn record_scan_fail(&self);
}
