use super::message::ScanMessage;

/// Flag key recording that the app has been launched before.
pub const ALREADY_LAUNCHED_FLAG: &str = "alreadyLaunched";

/// What the scan screen currently shows besides the camera.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanScreenState {
    /// Recognition spinner.
    pub loading: bool,
    pub message: Option<ScanMessage>,
    /// First-run intro cards.
    pub show_intro: bool,
}

impl Default for ScanScreenState {
    fn default() -> Self {
        Self {
            loading: false,
            message: None,
            show_intro: true,
        }
    }
}
