use async_trait::async_trait;

use super::errors::ImageProcessingError;
use crate::capture::{NormalizedImage, RawImageHandle};

/// Turns a raw capture into a bounded, re-encoded payload.
///
/// 将原始拍摄结果转换为尺寸受限、重新编码的负载。
#[async_trait]
pub trait ImageNormalizerPort: Send + Sync {
    /// Normalize a raw capture. The raw capture is only read.
    async fn normalize(&self, raw: &RawImageHandle)
        -> Result<NormalizedImage, ImageProcessingError>;
}
