//! Capture domain: camera session state, ratio negotiation and image payloads.

mod image;
mod ratio;
mod session;

pub use image::{NormalizedImage, RawImageHandle, NORMALIZED_JPEG_QUALITY, NORMALIZED_MAX_EDGE};
pub use ratio::{negotiate_ratio, CaptureRatio, RatioParseError, ScreenMetrics, SelectedRatio};
pub use session::{CameraView, CaptureRejection, CaptureSession, PermissionState};
