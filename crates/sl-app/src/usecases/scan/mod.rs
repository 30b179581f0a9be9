mod loading;
mod orchestrator;
mod screen;

pub use orchestrator::{ScanOrchestrator, ScanReport};
