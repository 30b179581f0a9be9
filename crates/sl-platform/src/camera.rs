//! File-backed camera.
//!
//! The "shutter" hands out image files: a single file is returned on every
//! shot, a directory is walked in file-name order and wraps around.

use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use sl_core::capture::RawImageHandle;
use sl_core::ports::{CameraError, HardwareCameraPort};
use tracing::debug;

const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "webp"];

pub struct FileCamera {
    source: PathBuf,
    supported_ratios: Vec<String>,
    next_shot: AtomicUsize,
}

impl FileCamera {
    /// `supported_ratios` empty means the device exposes no negotiable ratio.
    pub fn new(source: impl Into<PathBuf>, supported_ratios: Vec<String>) -> Self {
        Self {
            source: source.into(),
            supported_ratios,
            next_shot: AtomicUsize::new(0),
        }
    }

    async fn roll(&self) -> Result<Vec<PathBuf>, CameraError> {
        let mut entries = tokio::fs::read_dir(&self.source)
            .await
            .map_err(|e| CameraError::Shutter(format!("{}: {}", self.source.display(), e)))?;

        let mut frames = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| CameraError::Shutter(e.to_string()))?
        {
            let path = entry.path();
            if is_image(&path) {
                frames.push(path);
            }
        }
        frames.sort();
        Ok(frames)
    }
}

fn is_image(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| {
            IMAGE_EXTENSIONS
                .iter()
                .any(|known| ext.eq_ignore_ascii_case(known))
        })
        .unwrap_or(false)
}

#[async_trait]
impl HardwareCameraPort for FileCamera {
    async fn supported_ratios(&self) -> Result<Option<Vec<String>>, CameraError> {
        tokio::fs::metadata(&self.source)
            .await
            .map_err(|e| CameraError::Query(format!("{}: {}", self.source.display(), e)))?;

        if self.supported_ratios.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.supported_ratios.clone()))
    }

    async fn take_picture(&self) -> Result<RawImageHandle, CameraError> {
        let metadata = tokio::fs::metadata(&self.source)
            .await
            .map_err(|e| CameraError::Shutter(format!("{}: {}", self.source.display(), e)))?;

        if metadata.is_file() {
            debug!(path = %self.source.display(), "picture taken");
            return Ok(RawImageHandle::File(self.source.clone()));
        }

        let frames = self.roll().await?;
        if frames.is_empty() {
            return Err(CameraError::NotReady);
        }
        let shot = self.next_shot.fetch_add(1, Ordering::SeqCst);
        let path = frames[shot % frames.len()].clone();
        debug!(path = %path.display(), shot, "picture taken");
        Ok(RawImageHandle::File(path))
    }
}
