use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use tokio::sync::Notify;

use sl_app::{CaptureController, CaptureError, ScanDeps, ScanOrchestrator, ScanReport};
use sl_core::artwork::{Artwork, StorySegment};
use sl_core::capture::{NormalizedImage, RawImageHandle, ScreenMetrics};
use sl_core::ports::{
    AnalyticsPort, CameraError, CameraPermissionPort, HardwareCameraPort, ImageNormalizerPort,
    ImageProcessingError, NavigationPort, PermissionStatus, RecognitionClientPort,
    RecognitionTransportError, ScanPresenterPort,
};
use sl_core::recognition::{RecognitionOutcome, RecognitionResponse};
use sl_core::scan::ScanMessage;

mockall::mock! {
    pub Navigation {}

    #[async_trait]
    impl NavigationPort for Navigation {
        async fn goto_single_artwork(&self, artwork: Artwork) -> anyhow::Result<()>;
        async fn goto_artwork_chooser(&self, artworks: Vec<Artwork>) -> anyhow::Result<()>;
        async fn goto_help(&self) -> anyhow::Result<()>;
    }
}

mockall::mock! {
    pub Analytics {}

    impl AnalyticsPort for Analytics {
        fn record_scan_success(&self);
        fn record_scan_fail(&self);
    }
}

mockall::mock! {
    pub Recognition {}

    #[async_trait]
    impl RecognitionClientPort for Recognition {
        async fn recognize(
            &self,
            image: NormalizedImage,
        ) -> Result<RecognitionResponse, RecognitionTransportError>;
    }
}

struct CountingCamera {
    shots: AtomicUsize,
}

#[async_trait]
impl HardwareCameraPort for CountingCamera {
    async fn supported_ratios(&self) -> Result<Option<Vec<String>>, CameraError> {
        Ok(Some(vec!["4:3".to_string(), "16:9".to_string()]))
    }

    async fn take_picture(&self) -> Result<RawImageHandle, CameraError> {
        self.shots.fetch_add(1, Ordering::SeqCst);
        Ok(RawImageHandle::Bytes(vec![0xff, 0xd8, 0xff]))
    }
}

struct Granted;

#[async_trait]
impl CameraPermissionPort for Granted {
    async fn request_camera_permission(&self) -> anyhow::Result<PermissionStatus> {
        Ok(PermissionStatus::Granted)
    }
}

struct BytesNormalizer;

#[async_trait]
impl ImageNormalizerPort for BytesNormalizer {
    async fn normalize(&self, raw: &RawImageHandle) -> Result<NormalizedImage, ImageProcessingError> {
        match raw {
            RawImageHandle::Bytes(bytes) => Ok(NormalizedImage::new(bytes.clone(), 4, 3)),
            RawImageHandle::File(path) => Err(ImageProcessingError::Unreadable(
                path.display().to_string(),
            )),
        }
    }
}

#[derive(Default)]
struct LoadingRecorder {
    loading: Mutex<Vec<bool>>,
}

impl ScanPresenterPort for LoadingRecorder {
    fn set_loading(&self, loading: bool) {
        self.loading.lock().unwrap().push(loading);
    }

    fn show_message(&self, _message: &ScanMessage) {}

    fn clear_message(&self) {}

    fn hide_intro(&self) {}
}

/// Recognition that waits until released.
struct GatedRecognition {
    gate: Arc<Notify>,
    calls: AtomicUsize,
}

#[async_trait]
impl RecognitionClientPort for GatedRecognition {
    async fn recognize(
        &self,
        _image: NormalizedImage,
    ) -> Result<RecognitionResponse, RecognitionTransportError> {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.gate.notified().await;
        Ok(RecognitionResponse::not_recognized())
    }
}

async fn granted_controller(camera: Arc<CountingCamera>) -> Arc<CaptureController> {
    let controller = Arc::new(CaptureController::new(
        camera,
        Arc::new(Granted),
        Arc::new(BytesNormalizer),
    ));
    controller.request_permission().await;
    controller
        .on_camera_ready(ScreenMetrics::new(1080.0, 1920.0))
        .await;
    controller
}

fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::new("sl_app=debug"))
        .with_test_writer()
        .try_init();
}

fn quiet_analytics() -> MockAnalytics {
    let mut analytics = MockAnalytics::new();
    analytics.expect_record_scan_success().return_const(());
    analytics.expect_record_scan_fail().return_const(());
    analytics
}

#[tokio::test]
async fn scan_flow_second_scan_rejected_during_round_trip() {
    init_test_tracing();
    let camera = Arc::new(CountingCamera {
        shots: AtomicUsize::new(0),
    });
    let gate = Arc::new(Notify::new());
    let recognition = Arc::new(GatedRecognition {
        gate: gate.clone(),
        calls: AtomicUsize::new(0),
    });
    let presenter = Arc::new(LoadingRecorder::default());

    let orchestrator = ScanOrchestrator::from_deps(ScanDeps {
        capture: granted_controller(camera.clone()).await,
        recognition: recognition.clone(),
        navigation: Arc::new(MockNavigation::new()),
        analytics: Arc::new(quiet_analytics()),
        presenter: presenter.clone(),
    });

    let (first, second) = tokio::join!(orchestrator.scan(), async {
        tokio::task::yield_now().await;
        let report = orchestrator.scan().await;
        gate.notify_one();
        report
    });

    assert!(matches!(
        first,
        ScanReport::Completed(RecognitionOutcome::NoMatch)
    ));
    assert!(matches!(second, ScanReport::Rejected(CaptureError::Busy)));
    assert_eq!(camera.shots.load(Ordering::SeqCst), 1);
    assert_eq!(recognition.calls.load(Ordering::SeqCst), 1);
    assert_eq!(*presenter.loading.lock().unwrap(), vec![true, false]);
}

#[tokio::test]
async fn scan_flow_navigation_failure_keeps_outcome() {
    init_test_tracing();
    let camera = Arc::new(CountingCamera {
        shots: AtomicUsize::new(0),
    });

    let mut recognition = MockRecognition::new();
    recognition.expect_recognize().times(1).returning(|image| {
        assert_eq!(image.bytes(), &[0xff, 0xd8, 0xff]);
        Ok(RecognitionResponse::recognized(vec![Artwork::new(
            "https://img.example/starry-night.jpg",
            "The Starry Night",
            vec![StorySegment::new("1", "Painted from memory")],
        )]))
    });

    let mut navigation = MockNavigation::new();
    navigation
        .expect_goto_single_artwork()
        .withf(|artwork| artwork.title == "The Starry Night")
        .times(1)
        .returning(|_| Err(anyhow::anyhow!("navigation host unavailable")));

    let mut analytics = MockAnalytics::new();
    analytics.expect_record_scan_success().times(1).return_const(());
    analytics.expect_record_scan_fail().never();

    let orchestrator = ScanOrchestrator::from_deps(ScanDeps {
        capture: granted_controller(camera).await,
        recognition: Arc::new(recognition),
        navigation: Arc::new(navigation),
        analytics: Arc::new(analytics),
        presenter: Arc::new(LoadingRecorder::default()),
    });

    let report = orchestrator.scan().await;

    assert!(matches!(
        report.outcome(),
        Some(RecognitionOutcome::Unique(artwork)) if artwork.title == "The Starry Night"
    ));
    assert_eq!(orchestrator.screen_state().message, None);
}

#[tokio::test]
async fn scan_flow_retry_after_transport_error() {
    init_test_tracing();
    let camera = Arc::new(CountingCamera {
        shots: AtomicUsize::new(0),
    });

    let mut recognition = MockRecognition::new();
    let mut seq = mockall::Sequence::new();
    recognition
        .expect_recognize()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| Err(RecognitionTransportError::Connection("offline".into())));
    recognition
        .expect_recognize()
        .times(1)
        .in_sequence(&mut seq)
        .returning(|_| {
            Ok(RecognitionResponse::recognized(vec![
                Artwork::new("https://img.example/a.jpg", "A", Vec::new()),
                Artwork::new("https://img.example/b.jpg", "B", Vec::new()),
            ]))
        });

    let mut navigation = MockNavigation::new();
    navigation
        .expect_goto_artwork_chooser()
        .withf(|artworks| {
            artworks.iter().map(|a| a.title.as_str()).collect::<Vec<_>>() == ["A", "B"]
        })
        .times(1)
        .returning(|_| Ok(()));

    let mut analytics = MockAnalytics::new();
    analytics.expect_record_scan_fail().times(1).return_const(());
    analytics.expect_record_scan_success().times(1).return_const(());

    let orchestrator = ScanOrchestrator::from_deps(ScanDeps {
        capture: granted_controller(camera.clone()).await,
        recognition: Arc::new(recognition),
        navigation: Arc::new(navigation),
        analytics: Arc::new(analytics),
        presenter: Arc::new(LoadingRecorder::default()),
    });

    orchestrator.scan().await;
    assert_eq!(
        orchestrator.screen_state().message,
        Some(ScanMessage::RecognitionProblem)
    );

    let report = orchestrator.scan().await;
    assert!(matches!(
        report.outcome(),
        Some(RecognitionOutcome::Ambiguous(candidates)) if candidates.len() == 2
    ));
    assert_eq!(orchestrator.screen_state().message, None);
    assert_eq!(camera.shots.load(Ordering::SeqCst), 2);
}
