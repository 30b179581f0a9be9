use sl_core::capture::CameraView;
use sl_core::ports::ScanPresenterPort;
use sl_core::scan::ScanMessage;
use tracing::{debug, warn};

use super::output::TerminalOutput;

const INTRO_TEXT: &str = "Point the camera at an artwork and take a photo to read its story.";

/// Scan screen rendered as terminal lines.
pub struct TerminalPresenter {
    output: TerminalOutput,
}

impl TerminalPresenter {
    pub fn new(output: TerminalOutput) -> Self {
        Self { output }
    }

    pub fn show_intro(&self) {
        self.emit(INTRO_TEXT);
    }

    pub fn show_camera_view(&self, view: &CameraView) {
        match view {
            CameraView::PermissionDenied => self.emit(CameraView::PERMISSION_DENIED_NOTICE),
            CameraView::AwaitingPermission => self.emit("Waiting for camera permission..."),
            CameraView::Live { ratio, .. } => match ratio.as_ratio() {
                Some(ratio) => debug!(%ratio, "camera live"),
                None => debug!("camera live with hardware default ratio"),
            },
        }
    }

    fn emit(&self, text: &str) {
        if let Err(err) = self.output.write_block(text) {
            warn!(error = %err, "failed to write to terminal");
        }
    }
}

impl ScanPresenterPort for TerminalPresenter {
    fn set_loading(&self, loading: bool) {
        if loading {
            self.emit("Recognising artwork...");
        }
    }

    fn show_message(&self, message: &ScanMessage) {
        self.emit(message.text());
    }

    fn clear_message(&self) {
        debug!("scan message cleared");
    }

    fn hide_intro(&self) {
        debug!("intro hidden");
    }
}
