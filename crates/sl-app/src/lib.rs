//! StoryLens application layer
//!
//! This crate contains the use cases that drive the capture → recognition →
//! presentation pipeline over the ports defined in `sl-core`.

pub mod deps;
pub mod usecases;

pub use deps::ScanDeps;
pub use usecases::{
    CaptureController, CaptureError, CaptureTicket, ResolveIntroGuidance, ScanOrchestrator,
    ScanReport,
};
