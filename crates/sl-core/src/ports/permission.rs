use async_trait::async_trait;

/// Answer of the platform permission prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PermissionStatus {
    Granted,
    Denied,
}

/// Platform permission prompt for the camera.
#[async_trait]
pub trait CameraPermissionPort: Send + Sync {
    /// Ask for camera access. May show a system prompt.
    async fn request_camera_permission(&self) -> anyhow::Result<PermissionStatus>;
}
