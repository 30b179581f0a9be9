use async_trait::async_trait;
use image::codecs::jpeg::JpegEncoder;
use image::{imageops::FilterType, ColorType, GenericImageView};
use sl_core::capture::{
    NormalizedImage, RawImageHandle, NORMALIZED_JPEG_QUALITY, NORMALIZED_MAX_EDGE,
};
use sl_core::ports::{ImageNormalizerPort, ImageProcessingError};
use tracing::debug;

/// Bounds the longest edge of a capture and re-encodes it as JPEG.
///
/// Decoding, resizing and encoding run on the blocking pool.
pub struct JpegImageNormalizer {
    max_edge: u32,
    quality: u8,
}

impl JpegImageNormalizer {
    pub fn new(max_edge: u32, quality: u8) -> Self {
        Self {
            max_edge: max_edge.max(1),
            quality: quality.clamp(1, 100),
        }
    }

    pub fn with_defaults() -> Self {
        Self::new(NORMALIZED_MAX_EDGE, NORMALIZED_JPEG_QUALITY)
    }
}

#[async_trait]
impl ImageNormalizerPort for JpegImageNormalizer {
    async fn normalize(
        &self,
        raw: &RawImageHandle,
    ) -> Result<NormalizedImage, ImageProcessingError> {
        let source = match raw {
            RawImageHandle::File(path) => tokio::fs::read(path).await.map_err(|e| {
                ImageProcessingError::Unreadable(format!("{}: {}", path.display(), e))
            })?,
            RawImageHandle::Bytes(bytes) => bytes.clone(),
        };

        let max_edge = self.max_edge;
        let quality = self.quality;
        tokio::task::spawn_blocking(move || encode_bounded_jpeg(&source, max_edge, quality))
            .await
            .map_err(|e| ImageProcessingError::Encode(format!("normalizer task failed: {}", e)))?
    }
}

fn encode_bounded_jpeg(
    source: &[u8],
    max_edge: u32,
    quality: u8,
) -> Result<NormalizedImage, ImageProcessingError> {
    let decoded = image::load_from_memory(source)
        .map_err(|e| ImageProcessingError::Decode(e.to_string()))?;
    let (original_width, original_height) = decoded.dimensions();
    let (target_width, target_height) =
        calculate_target_size(original_width, original_height, max_edge);

    let resized = if target_width == original_width && target_height == original_height {
        decoded
    } else {
        decoded.resize_exact(target_width, target_height, FilterType::Triangle)
    };

    // JPEG has no alpha channel.
    let rgb = resized.to_rgb8();
    let (width, height) = rgb.dimensions();
    let mut jpeg_bytes = Vec::new();
    let mut encoder = JpegEncoder::new_with_quality(&mut jpeg_bytes, quality);
    encoder
        .encode(rgb.as_raw(), width, height, ColorType::Rgb8.into())
        .map_err(|e| ImageProcessingError::Encode(e.to_string()))?;

    debug!(
        original_width,
        original_height,
        width,
        height,
        bytes = jpeg_bytes.len(),
        "capture re-encoded"
    );
    Ok(NormalizedImage::new(jpeg_bytes, width, height))
}

/// Scale `(width, height)` so the longest edge is at most `max_edge`,
/// keeping the aspect. Never upscales.
fn calculate_target_size(width: u32, height: u32, max_edge: u32) -> (u32, u32) {
    if width <= max_edge && height <= max_edge {
        return (width, height);
    }

    if width >= height {
        let scaled_height = ((height as f64) * (max_edge as f64) / (width as f64)).round() as u32;
        (max_edge, scaled_height.max(1))
    } else {
        let scaled_width = ((width as f64) * (max_edge as f64) / (height as f64)).round() as u32;
        (scaled_width.max(1), max_edge)
    }
}
