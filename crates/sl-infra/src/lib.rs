pub mod analytics;
pub mod capture;
pub mod flag_store;
pub mod recognition;

pub use analytics::TracingAnalyticsSink;
pub use capture::JpegImageNormalizer;
pub use flag_store::FileFlagStore;
pub use recognition::HttpRecognitionClient;
