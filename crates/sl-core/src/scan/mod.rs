//! Scan screen domain: status messages, routes and screen state.

mod message;
mod route;
mod state;

pub use message::ScanMessage;
pub use route::ScanRoute;
pub use state::{ScanScreenState, ALREADY_LAUNCHED_FLAG};
