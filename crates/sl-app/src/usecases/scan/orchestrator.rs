//! Scan orchestration: one capture, one recognition round-trip, one outcome.
//!
//! 扫描编排：一次拍摄、一次识别往返、一个结果。

use std::sync::Arc;

use tracing::{debug, info, info_span, warn, Instrument};

use sl_core::capture::NormalizedImage;
use sl_core::ports::{AnalyticsPort, NavigationPort, RecognitionClientPort};
use sl_core::recognition::RecognitionOutcome;
use sl_core::scan::{ScanMessage, ScanRoute, ScanScreenState};

use super::loading::LoadingIndicator;
use super::screen::ScanScreen;
use crate::deps::ScanDeps;
use crate::usecases::capture::{CaptureController, CaptureError};

/// How a scan attempt ended.
#[derive(Debug)]
pub enum ScanReport {
    /// Turned away before the shutter; the screen is untouched.
    Rejected(CaptureError),
    /// Shutter or normalization failed; surfaced as a recognition problem.
    CaptureFailed(CaptureError),
    Completed(RecognitionOutcome),
}

impl ScanReport {
    pub fn outcome(&self) -> Option<&RecognitionOutcome> {
        match self {
            ScanReport::Completed(outcome) => Some(outcome),
            ScanReport::Rejected(_) | ScanReport::CaptureFailed(_) => None,
        }
    }
}

/// Drives capture output through recognition and applies the outcome to the
/// screen, analytics and navigation.
pub struct ScanOrchestrator {
    capture: Arc<CaptureController>,
    recognition: Arc<dyn RecognitionClientPort>,
    navigation: Arc<dyn NavigationPort>,
    analytics: Arc<dyn AnalyticsPort>,
    screen: ScanScreen,
}

impl ScanOrchestrator {
    pub fn from_deps(deps: ScanDeps) -> Self {
        let ScanDeps {
            capture,
            recognition,
            navigation,
            analytics,
            presenter,
        } = deps;

        Self {
            capture,
            recognition,
            navigation,
            analytics,
            screen: ScanScreen::new(presenter),
        }
    }

    pub fn capture_controller(&self) -> &Arc<CaptureController> {
        &self.capture
    }

    pub fn screen_state(&self) -> ScanScreenState {
        self.screen.state()
    }

    /// Run one scan: shutter, normalize, recognize, then route or report.
    ///
    /// The capture slot stays claimed until the outcome is applied, so a
    /// second scan during the round-trip is rejected. Loading is shown once
    /// the slot is claimed and cleared exactly once when the attempt ends.
    pub async fn scan(&self) -> ScanReport {
        let span = info_span!("usecase.scan_orchestrator.scan");
        async {
            let mut ticket = match self.capture.begin_capture() {
                Ok(ticket) => ticket,
                Err(err) => {
                    debug!(error = %err, "scan rejected");
                    return ScanReport::Rejected(err);
                }
            };
            let _loading = LoadingIndicator::show(&self.screen);

            let image = match ticket.shoot().await {
                Ok(image) => image,
                Err(err) => {
                    warn!(capture_id = %ticket.id(), error = %err, "capture failed during scan");
                    self.report_failure(ScanMessage::RecognitionProblem);
                    return ScanReport::CaptureFailed(err);
                }
            };

            let outcome = self.round_trip(image).await;
            self.apply(&outcome).await;
            ScanReport::Completed(outcome)
        }
        .instrument(span)
        .await
    }

    /// Recognize an already normalized image and apply the outcome.
    pub async fn recognize(&self, image: NormalizedImage) -> RecognitionOutcome {
        let span = info_span!("usecase.scan_orchestrator.recognize");
        async {
            let _loading = LoadingIndicator::show(&self.screen);
            let outcome = self.round_trip(image).await;
            self.apply(&outcome).await;
            outcome
        }
        .instrument(span)
        .await
    }

    /// Explicit dismissal of the status message.
    pub fn dismiss_message(&self) {
        if self.screen.clear_message() {
            debug!("scan message dismissed");
        }
    }

    pub async fn open_help(&self) {
        if let Err(err) = self.navigation.goto_help().await {
            warn!(error = %err, "failed to open help");
        }
    }

    pub fn set_intro_visible(&self, visible: bool) {
        self.screen.set_intro_visible(visible);
    }

    async fn round_trip(&self, image: NormalizedImage) -> RecognitionOutcome {
        let bytes = image.len();
        let outcome = RecognitionOutcome::classify(self.recognition.recognize(image).await);
        info!(bytes, outcome = outcome.kind(), "recognition finished");
        outcome
    }

    async fn apply(&self, outcome: &RecognitionOutcome) {
        match outcome.route() {
            Some(route) => {
                self.screen.clear_message();
                self.screen.set_intro_visible(false);
                self.analytics.record_scan_success();
                self.navigate(route).await;
            }
            None => {
                if let RecognitionOutcome::TransportError(err) = outcome {
                    warn!(error = %err, "recognition transport failed");
                }
                let message = outcome.message().unwrap_or(ScanMessage::RecognitionProblem);
                self.report_failure(message);
            }
        }
    }

    fn report_failure(&self, message: ScanMessage) {
        self.analytics.record_scan_fail();
        self.screen.show_message(message);
    }

    async fn navigate(&self, route: ScanRoute) {
        let result = match route {
            ScanRoute::SingleArtwork(artwork) => {
                debug!(title = %artwork.title, "routing to single artwork");
                self.navigation.goto_single_artwork(artwork).await
            }
            ScanRoute::ArtworkChooser(candidates) => {
                debug!(count = candidates.len(), "routing to artwork chooser");
                self.navigation
                    .goto_artwork_chooser(candidates.into_vec())
                    .await
            }
        };
        if let Err(err) = result {
            warn!(error = %err, "navigation failed");
        }
    }
}
