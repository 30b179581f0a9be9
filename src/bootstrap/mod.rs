pub mod config;
pub mod tracing;
pub mod wiring;

pub use self::config::{default_data_dir, load_config, resolve_config};
pub use self::tracing::init_tracing_subscriber;
pub use self::wiring::{wire_scan_app, ScanApp};
