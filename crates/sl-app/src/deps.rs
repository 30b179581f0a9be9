//! # Scan dependencies
//!
//! Parameter grouping for [`ScanOrchestrator`](crate::ScanOrchestrator)
//! construction. Not a builder: no defaults, no hidden logic, every field is
//! required.

use std::sync::Arc;

use sl_core::ports::{AnalyticsPort, NavigationPort, RecognitionClientPort, ScanPresenterPort};

use crate::usecases::CaptureController;

pub struct ScanDeps {
    pub capture: Arc<CaptureController>,
    pub recognition: Arc<dyn RecognitionClientPort>,
    pub navigation: Arc<dyn NavigationPort>,
    pub analytics: Arc<dyn AnalyticsPort>,
    pub presenter: Arc<dyn ScanPresenterPort>,
}
