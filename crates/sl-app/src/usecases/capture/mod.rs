mod controller;

pub use controller::{CaptureController, CaptureError, CaptureTicket};
