use async_trait::async_trait;
use sl_core::ports::{CameraPermissionPort, PermissionStatus};
use tracing::info;

/// Environment variable overriding the camera permission answer.
pub const CAMERA_PERMISSION_ENV: &str = "STORYLENS_CAMERA_PERMISSION";

/// Permission provider with a fixed answer.
///
/// Desktop hosts have no camera prompt; the answer comes from the
/// environment or the caller.
#[derive(Debug, Clone, Copy)]
pub struct StaticPermissionProvider {
    status: PermissionStatus,
}

impl StaticPermissionProvider {
    pub fn new(status: PermissionStatus) -> Self {
        Self { status }
    }

    pub fn granted() -> Self {
        Self::new(PermissionStatus::Granted)
    }

    /// `denied` (any case) in [`CAMERA_PERMISSION_ENV`] denies; anything else
    /// grants.
    pub fn from_env() -> Self {
        match std::env::var(CAMERA_PERMISSION_ENV) {
            Ok(value) => Self::new(parse_status(&value)),
            Err(_) => Self::granted(),
        }
    }
}

fn parse_status(value: &str) -> PermissionStatus {
    if value.trim().eq_ignore_ascii_case("denied") {
        PermissionStatus::Denied
    } else {
        PermissionStatus::Granted
    }
}

#[async_trait]
impl CameraPermissionPort for StaticPermissionProvider {
    async fn request_camera_permission(&self) -> anyhow::Result<PermissionStatus> {
        info!(status = ?self.status, "camera permission answered");
        Ok(self.status)
    }
}
