use sl_core::capture::ScreenMetrics;
use sl_core::AppConfig;
use tracing::debug;

/// Portrait phone screen used when the host has no configured size.
pub const FALLBACK_SCREEN_WIDTH: f64 = 1080.0;
pub const FALLBACK_SCREEN_HEIGHT: f64 = 1920.0;

/// Screen size for ratio negotiation.
pub fn screen_metrics(config: &AppConfig) -> ScreenMetrics {
    if config.screen_width > 0.0 && config.screen_height > 0.0 {
        return ScreenMetrics::new(config.screen_width, config.screen_height);
    }
    debug!("screen size not configured, using portrait fallback");
    ScreenMetrics::new(FALLBACK_SCREEN_WIDTH, FALLBACK_SCREEN_HEIGHT)
}
