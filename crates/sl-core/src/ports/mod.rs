//! Port interfaces for the application layer
//!
//! Ports define the contract between the use cases and the infrastructure or
//! platform implementations: camera hardware, the permission prompt, image
//! encoding, the recognition service, navigation, analytics, flag storage and
//! the scan screen itself.

mod analytics;
mod camera;
pub mod errors;
mod flag_store;
mod image_normalizer;
mod navigation;
mod permission;
mod presenter;
mod recognition;

pub use analytics::AnalyticsPort;
pub use camera::HardwareCameraPort;
pub use errors::{CameraError, FlagStoreError, ImageProcessingError, RecognitionTransportError};
pub use flag_store::FlagStorePort;
pub use image_normalizer::ImageNormalizerPort;
pub use navigation::NavigationPort;
pub use permission::{CameraPermissionPort, PermissionStatus};
pub use presenter::ScanPresenterPort;
pub use recognition::RecognitionClientPort;
