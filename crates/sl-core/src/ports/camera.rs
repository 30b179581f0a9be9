use async_trait::async_trait;

use super::errors::CameraError;
use crate::capture::RawImageHandle;

/// Camera hardware.
///
/// 相机硬件端口。
#[async_trait]
pub trait HardwareCameraPort: Send + Sync {
    /// Picture ratios the device can capture, as `"h:w"` strings in device
    /// order.
    ///
    /// `None` when the platform does not expose negotiable ratios (the
    /// hardware default is used).
    async fn supported_ratios(&self) -> Result<Option<Vec<String>>, CameraError>;

    /// Trigger the shutter and wait for the raw picture.
    async fn take_picture(&self) -> Result<RawImageHandle, CameraError>;
}
