//! Camera capture controller.
//!
//! Owns the [`CaptureSession`] of one mounted camera: resolves the camera
//! permission once, negotiates the capture ratio when the hardware reports
//! ready, and runs single-flight captures (shutter → normalize → hand-off).

use std::future::Future;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tokio::sync::OnceCell;
use tracing::{debug, info, info_span, warn, Instrument};

use sl_core::capture::{
    negotiate_ratio, CameraView, CaptureRatio, CaptureRejection, CaptureSession, NormalizedImage,
    PermissionState, ScreenMetrics, SelectedRatio,
};
use sl_core::ids::CaptureId;
use sl_core::ports::{
    CameraError, CameraPermissionPort, HardwareCameraPort, ImageNormalizerPort,
    ImageProcessingError, PermissionStatus,
};

/// Errors produced by a capture attempt.
#[derive(Debug, thiserror::Error)]
pub enum CaptureError {
    #[error("a capture is already in flight")]
    Busy,
    #[error("camera permission not granted")]
    PermissionNotGranted,
    #[error("camera hardware error: {0}")]
    Hardware(#[from] CameraError),
    #[error("image processing error: {0}")]
    ImageProcessing(#[from] ImageProcessingError),
}

impl CaptureError {
    /// The request was turned away before any hardware call.
    pub fn is_rejection(&self) -> bool {
        matches!(self, CaptureError::Busy | CaptureError::PermissionNotGranted)
    }
}

impl From<CaptureRejection> for CaptureError {
    fn from(rejection: CaptureRejection) -> Self {
        match rejection {
            CaptureRejection::InFlight => CaptureError::Busy,
            CaptureRejection::PermissionNotGranted => CaptureError::PermissionNotGranted,
        }
    }
}

fn lock_session(session: &Mutex<CaptureSession>) -> MutexGuard<'_, CaptureSession> {
    session.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Controller for one mounted camera view.
pub struct CaptureController {
    session: Arc<Mutex<CaptureSession>>,
    permission_prompt: OnceCell<bool>,
    camera: Arc<dyn HardwareCameraPort>,
    permission: Arc<dyn CameraPermissionPort>,
    normalizer: Arc<dyn ImageNormalizerPort>,
}

impl CaptureController {
    pub fn new(
        camera: Arc<dyn HardwareCameraPort>,
        permission: Arc<dyn CameraPermissionPort>,
        normalizer: Arc<dyn ImageNormalizerPort>,
    ) -> Self {
        Self {
            session: Arc::new(Mutex::new(CaptureSession::new())),
            permission_prompt: OnceCell::new(),
            camera,
            permission,
            normalizer,
        }
    }

    /// Resolve the camera permission.
    ///
    /// The platform prompt runs at most once per controller; later calls
    /// return the resolved state without prompting again. A denial is final
    /// for this controller.
    pub async fn request_permission(&self) -> PermissionState {
        let granted = *self
            .permission_prompt
            .get_or_init(move || async move {
                match self.permission.request_camera_permission().await {
                    Ok(PermissionStatus::Granted) => true,
                    Ok(PermissionStatus::Denied) => false,
                    Err(err) => {
                        warn!(error = %err, "camera permission request failed, treating as denied");
                        false
                    }
                }
            })
            .await;

        let state = lock_session(&self.session).resolve_permission(granted);
        info!(permission = ?state, "camera permission resolved");
        state
    }

    /// Negotiate the capture ratio once the hardware reports ready.
    ///
    /// Runs once per controller; later calls return the ratio already chosen.
    /// Unparseable ratios are skipped, and query failures fall back to the
    /// hardware default.
    pub async fn on_camera_ready(&self, screen: ScreenMetrics) -> SelectedRatio {
        {
            let session = lock_session(&self.session);
            if session.is_ratio_resolved() {
                return session.selected_ratio().clone();
            }
        }

        let selected = match self.camera.supported_ratios().await {
            Ok(Some(labels)) => {
                let supported: Vec<CaptureRatio> = labels
                    .iter()
                    .filter_map(|label| match label.parse::<CaptureRatio>() {
                        Ok(ratio) => Some(ratio),
                        Err(err) => {
                            warn!(error = %err, "skipping unsupported capture ratio");
                            None
                        }
                    })
                    .collect();
                negotiate_ratio(&supported, screen.aspect())
            }
            Ok(None) => SelectedRatio::Unset,
            Err(err) => {
                warn!(error = %err, "failed to query capture ratios, using hardware default");
                SelectedRatio::Unset
            }
        };

        let mut session = lock_session(&self.session);
        if session.resolve_ratio(selected) {
            debug!(ratio = ?session.selected_ratio(), "capture ratio negotiated");
        }
        session.selected_ratio().clone()
    }

    /// What the camera area should render right now.
    pub fn view(&self) -> CameraView {
        lock_session(&self.session).view()
    }

    pub fn session(&self) -> CaptureSession {
        lock_session(&self.session).clone()
    }

    /// Claim the capture slot.
    ///
    /// Fails immediately, without touching the camera, when a capture is in
    /// flight or the permission is not granted. The slot is released when the
    /// returned ticket is dropped.
    pub fn begin_capture(&self) -> Result<CaptureTicket, CaptureError> {
        lock_session(&self.session).begin_capture()?;
        let ticket = CaptureTicket {
            id: CaptureId::new(),
            fired: false,
            session: Arc::clone(&self.session),
            camera: Arc::clone(&self.camera),
            normalizer: Arc::clone(&self.normalizer),
        };
        debug!(capture_id = %ticket.id, "capture slot claimed");
        Ok(ticket)
    }

    /// Take one picture and hand the normalized image to `on_picture`.
    ///
    /// The capture slot stays claimed until `on_picture` completes and is
    /// released on every exit path.
    pub async fn capture<F, Fut, T>(&self, on_picture: F) -> Result<T, CaptureError>
    where
        F: FnOnce(NormalizedImage) -> Fut,
        Fut: Future<Output = T>,
    {
        let mut ticket = self.begin_capture()?;
        let image = ticket.shoot().await?;
        Ok(on_picture(image).await)
    }
}

/// Claim on the single capture slot of a [`CaptureController`].
///
/// One ticket fires the shutter at most once. Dropping it releases the slot.
pub struct CaptureTicket {
    id: CaptureId,
    fired: bool,
    session: Arc<Mutex<CaptureSession>>,
    camera: Arc<dyn HardwareCameraPort>,
    normalizer: Arc<dyn ImageNormalizerPort>,
}

impl CaptureTicket {
    pub fn id(&self) -> &CaptureId {
        &self.id
    }

    /// Fire the shutter and normalize the raw picture.
    pub async fn shoot(&mut self) -> Result<NormalizedImage, CaptureError> {
        if self.fired {
            return Err(CaptureError::Busy);
        }
        self.fired = true;

        let span = info_span!("usecase.capture_controller.shoot", capture_id = %self.id);
        async {
            let raw = self.camera.take_picture().await.map_err(|err| {
                warn!(error = %err, "shutter failed");
                CaptureError::from(err)
            })?;

            let image = self.normalizer.normalize(&raw).await.map_err(|err| {
                warn!(error = %err, "failed to normalize capture");
                CaptureError::from(err)
            })?;

            info!(
                bytes = image.len(),
                width = image.width(),
                height = image.height(),
                "capture normalized"
            );
            Ok(image)
        }
        .instrument(span)
        .await
    }
}

impl Drop for CaptureTicket {
    fn drop(&mut self) {
        lock_session(&self.session).finish_capture();
        debug!(capture_id = %self.id, "capture slot released");
    }
}
