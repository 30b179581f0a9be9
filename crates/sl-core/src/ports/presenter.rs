use crate::scan::ScanMessage;

/// Scan screen surface the orchestrator drives.
///
/// Calls are synchronous UI updates; implementations must not block.
pub trait ScanPresenterPort: Send + Sync {
    fn set_loading(&self, loading: bool);

    fn show_message(&self, message: &ScanMessage);

    fn clear_message(&self);

    fn hide_intro(&self);
}
