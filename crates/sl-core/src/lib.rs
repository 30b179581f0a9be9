//! # sl-core
//!
//! Core domain models and business rules for StoryLens.
//!
//! This crate contains pure business logic without any infrastructure dependencies:
//! the capture session state machine, capture ratio negotiation, recognition
//! outcome classification and the story carousel model. Everything that talks to
//! hardware, the network or the screen is expressed as a port in [`ports`].

// Public module exports
pub mod artwork;
pub mod capture;
pub mod config;
pub mod ids;
pub mod ports;
pub mod recognition;
pub mod scan;
pub mod story;

// Re-export commonly used types at the crate root
pub use artwork::{Artwork, StorySegment};
pub use capture::{
    CameraView, CaptureRatio, CaptureRejection, CaptureSession, NormalizedImage, PermissionState,
    RawImageHandle, ScreenMetrics, SelectedRatio,
};
pub use config::AppConfig;
pub use ids::CaptureId;
pub use recognition::{Candidates, RecognitionOutcome, RecognitionResponse};
pub use scan::{ScanMessage, ScanRoute, ScanScreenState};
pub use story::{CarouselState, DisplaySegment, Pagination, StoryCarousel};
