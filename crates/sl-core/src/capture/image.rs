use std::path::PathBuf;

use base64::Engine;

/// Handle to a picture exactly as the camera produced it.
///
/// Normalizers only read from it; the original capture is never modified.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RawImageHandle {
    /// Picture written by the camera to a local file.
    File(PathBuf),
    /// Picture delivered in memory.
    Bytes(Vec<u8>),
}

/// Default bound for the longest edge of a normalized image, in pixels.
pub const NORMALIZED_MAX_EDGE: u32 = 1000;

/// Default JPEG quality for normalized images (0-100).
pub const NORMALIZED_JPEG_QUALITY: u8 = 80;

/// Bounded, re-encoded picture ready to be sent for recognition.
///
/// Not `Clone`. The recognition client takes it by value, so each image is
/// sent at most once.
#[derive(Debug, PartialEq, Eq)]
pub struct NormalizedImage {
    bytes: Vec<u8>,
    width: u32,
    height: u32,
}

impl NormalizedImage {
    pub const MIME_TYPE: &'static str = "image/jpeg";

    pub fn new(bytes: Vec<u8>, width: u32, height: u32) -> Self {
        Self {
            bytes,
            width,
            height,
        }
    }

    pub fn bytes(&self) -> &[u8] {
        &self.bytes
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn len(&self) -> usize {
        self.bytes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bytes.is_empty()
    }

    /// Self-contained transport form of the payload.
    pub fn to_base64(&self) -> String {
        base64::engine::general_purpose::STANDARD.encode(&self.bytes)
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.bytes
    }
}
