//! # Dependency Injection / 依赖注入模块
//!
//! Creates the infra and platform adapters and hands them to the use cases
//! as port trait objects. No business logic lives here; unset numeric
//! settings fall back to the normalizer and timeout constants.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use anyhow::Context;
use sl_app::{CaptureController, ResolveIntroGuidance, ScanDeps, ScanOrchestrator};
use sl_core::capture::{ScreenMetrics, NORMALIZED_JPEG_QUALITY, NORMALIZED_MAX_EDGE};
use sl_core::config::{AppConfig, DEFAULT_RECOGNITION_TIMEOUT_SECS};
use sl_core::ports::{NavigationPort, ScanPresenterPort};
use sl_infra::{FileFlagStore, HttpRecognitionClient, JpegImageNormalizer, TracingAnalyticsSink};
use sl_platform::{screen_metrics, FileCamera, StaticPermissionProvider};
use tracing::info;

/// Everything a scan session needs.
pub struct ScanApp {
    pub orchestrator: ScanOrchestrator,
    pub intro: ResolveIntroGuidance,
    pub analytics: Arc<TracingAnalyticsSink>,
    pub screen: ScreenMetrics,
}

fn non_zero_or<T: Default + PartialEq>(value: T, fallback: T) -> T {
    if value == T::default() {
        fallback
    } else {
        value
    }
}

/// Wire a scan session whose camera reads pictures from `image_source`.
pub fn wire_scan_app(
    config: &AppConfig,
    image_source: PathBuf,
    navigation: Arc<dyn NavigationPort>,
    presenter: Arc<dyn ScanPresenterPort>,
) -> anyhow::Result<ScanApp> {
    if config.recognition_endpoint.trim().is_empty() {
        anyhow::bail!("Recognition endpoint is not configured ([recognition] endpoint)");
    }

    let timeout = Duration::from_secs(non_zero_or(
        config.recognition_timeout_secs,
        DEFAULT_RECOGNITION_TIMEOUT_SECS,
    ));
    let recognition = HttpRecognitionClient::new(config.recognition_endpoint.clone(), timeout)
        .context("Failed to create recognition client")?;

    let normalizer = JpegImageNormalizer::new(
        non_zero_or(config.capture_max_edge, NORMALIZED_MAX_EDGE),
        non_zero_or(config.capture_jpeg_quality, NORMALIZED_JPEG_QUALITY),
    );
    let camera = FileCamera::new(image_source, config.capture_supported_ratios.clone());
    let capture = Arc::new(CaptureController::new(
        Arc::new(camera),
        Arc::new(StaticPermissionProvider::from_env()),
        Arc::new(normalizer),
    ));

    let analytics = Arc::new(TracingAnalyticsSink::new());
    let orchestrator = ScanOrchestrator::from_deps(ScanDeps {
        capture,
        recognition: Arc::new(recognition),
        navigation,
        analytics: analytics.clone(),
        presenter,
    });

    let flags = FileFlagStore::with_defaults(config.data_dir.clone());
    info!(
        endpoint = %config.recognition_endpoint,
        timeout_secs = timeout.as_secs(),
        data_dir = %config.data_dir.display(),
        "scan session wired"
    );

    Ok(ScanApp {
        orchestrator,
        intro: ResolveIntroGuidance::new(Arc::new(flags)),
        analytics,
        screen: screen_metrics(config),
    })
}
