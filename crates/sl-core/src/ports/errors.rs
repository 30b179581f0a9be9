use thiserror::Error;

/// Camera hardware failure. Fatal to the single capture attempt.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CameraError {
    #[error("camera is not ready")]
    NotReady,

    #[error("shutter failed: {0}")]
    Shutter(String),

    #[error("camera query failed: {0}")]
    Query(String),
}

/// Raw capture could not be turned into a normalized image.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ImageProcessingError {
    #[error("raw capture is unreadable: {0}")]
    Unreadable(String),

    #[error("failed to decode image: {0}")]
    Decode(String),

    #[error("failed to encode image: {0}")]
    Encode(String),
}

/// No well-formed response came back from the recognition service.
///
/// This is distinct from a well-formed "not recognized" answer.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RecognitionTransportError {
    #[error("recognition request timed out")]
    Timeout,

    #[error("recognition service unreachable: {0}")]
    Connection(String),

    #[error("recognition service returned status {0}")]
    Status(u16),

    #[error("recognition response could not be decoded: {0}")]
    Decode(String),
}

#[derive(Debug, Error)]
pub enum FlagStoreError {
    #[error("flag storage error: {0}")]
    Storage(String),

    #[error("flag storage is corrupt: {0}")]
    Corrupt(String),
}
