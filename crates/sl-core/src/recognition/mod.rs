//! Recognition round-trip domain: the wire response and its classification.

mod outcome;
mod response;

pub use outcome::{Candidates, RecognitionOutcome};
pub use response::RecognitionResponse;
