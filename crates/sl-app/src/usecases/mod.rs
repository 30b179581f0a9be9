//! Business logic use cases
//!
//! ```text
//! shutter ─▶ CaptureController ─▶ ImageNormalizerPort
//!                 │
//!                 ▼
//!          ScanOrchestrator ─▶ RecognitionClientPort
//!                 │
//!        ┌────────┴─────────┐
//!        ▼                  ▼
//!  NavigationPort     ScanPresenterPort (message, loading)
//! ```

pub mod capture;
pub mod intro;
pub mod scan;

pub use capture::{CaptureController, CaptureError, CaptureTicket};
pub use intro::ResolveIntroGuidance;
pub use scan::{ScanOrchestrator, ScanReport};
