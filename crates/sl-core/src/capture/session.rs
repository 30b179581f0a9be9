//! Capture session state.
//!
//! One session lives for as long as the camera view is mounted. It records the
//! resolved camera permission, the negotiated capture ratio and whether a
//! capture is currently in flight. Only the owning controller mutates it.

use super::ratio::SelectedRatio;

/// Camera permission as resolved for this session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PermissionState {
    /// The permission prompt has not completed yet.
    #[default]
    Unknown,
    Granted,
    Denied,
}

/// Why a capture request was turned away without touching the hardware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CaptureRejection {
    /// Another capture is still running.
    InFlight,
    PermissionNotGranted,
}

/// What the camera area of the screen should show.
#[derive(Debug, Clone, PartialEq)]
pub enum CameraView {
    AwaitingPermission,
    /// Static notice shown instead of the live preview.
    PermissionDenied,
    Live {
        ratio: SelectedRatio,
        shutter_enabled: bool,
    },
}

impl CameraView {
    pub const PERMISSION_DENIED_NOTICE: &'static str = "Permission to camera not granted";
}

/// Mutable state of one mounted camera.
#[derive(Debug, Clone, Default)]
pub struct CaptureSession {
    permission: PermissionState,
    selected_ratio: SelectedRatio,
    ratio_resolved: bool,
    capture_in_flight: bool,
}

impl CaptureSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn permission(&self) -> PermissionState {
        self.permission
    }

    pub fn selected_ratio(&self) -> &SelectedRatio {
        &self.selected_ratio
    }

    pub fn is_ratio_resolved(&self) -> bool {
        self.ratio_resolved
    }

    pub fn is_capture_in_flight(&self) -> bool {
        self.capture_in_flight
    }

    /// Record the permission prompt result.
    ///
    /// Only the first resolution sticks; a grant is never downgraded.
    pub fn resolve_permission(&mut self, granted: bool) -> PermissionState {
        if self.permission == PermissionState::Unknown {
            self.permission = if granted {
                PermissionState::Granted
            } else {
                PermissionState::Denied
            };
        }
        self.permission
    }

    /// Record the negotiated ratio. Returns `false` when a ratio was already
    /// resolved for this session, in which case nothing changes.
    pub fn resolve_ratio(&mut self, ratio: SelectedRatio) -> bool {
        if self.ratio_resolved {
            return false;
        }
        self.selected_ratio = ratio;
        self.ratio_resolved = true;
        true
    }

    /// Claim the single capture slot.
    pub fn begin_capture(&mut self) -> Result<(), CaptureRejection> {
        if self.permission != PermissionState::Granted {
            return Err(CaptureRejection::PermissionNotGranted);
        }
        if self.capture_in_flight {
            return Err(CaptureRejection::InFlight);
        }
        self.capture_in_flight = true;
        Ok(())
    }

    /// Release the capture slot. Safe to call when idle.
    pub fn finish_capture(&mut self) {
        self.capture_in_flight = false;
    }

    pub fn view(&self) -> CameraView {
        match self.permission {
            PermissionState::Unknown => CameraView::AwaitingPermission,
            PermissionState::Denied => CameraView::PermissionDenied,
            PermissionState::Granted => CameraView::Live {
                ratio: self.selected_ratio.clone(),
                shutter_enabled: !self.capture_in_flight,
            },
        }
    }
}
