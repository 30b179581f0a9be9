use async_trait::async_trait;

use super::errors::RecognitionTransportError;
use crate::capture::NormalizedImage;
use crate::recognition::RecognitionResponse;

/// Remote artwork recognition service.
///
/// 远程艺术品识别服务。
#[async_trait]
pub trait RecognitionClientPort: Send + Sync {
    /// One request/response round-trip. The image is consumed by the call.
    async fn recognize(
        &self,
        image: NormalizedImage,
    ) -> Result<RecognitionResponse, RecognitionTransportError>;
}
