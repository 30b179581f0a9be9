//! StoryLens: photograph an artwork, recognise it and read its story.
//!
//! The library half of the `storylens` binary: bootstrap (config, tracing,
//! dependency wiring), the command line surface and the terminal
//! presentation that stands in for the navigation host.

pub mod bootstrap;
pub mod cli;
pub mod presentation;

pub use cli::{run, Cli, Command};
