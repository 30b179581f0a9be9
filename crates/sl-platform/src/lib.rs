//! # sl-platform
//!
//! Device-side implementations for StoryLens.
//!
//! This crate adapts the host device to the camera, permission and screen
//! ports of `sl-core`. On a desktop host the camera is backed by image files.

pub mod camera;
pub mod permission;
pub mod screen;

pub use camera::FileCamera;
pub use permission::StaticPermissionProvider;
pub use screen::screen_metrics;
