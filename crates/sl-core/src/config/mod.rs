//! # Configuration DTO
//!
//! Pure data only: TOML → [`AppConfig`] mapping, no validation and no policy.
//! Missing keys map to empty values; they are facts, not errors. Callers that
//! need defaults build them with [`AppConfig::with_system_defaults`].

use std::path::PathBuf;

use crate::capture::{NORMALIZED_JPEG_QUALITY, NORMALIZED_MAX_EDGE};

/// Default recognition request timeout, in seconds.
pub const DEFAULT_RECOGNITION_TIMEOUT_SECS: u64 = 30;

/// Application configuration DTO (pure data, no logic)
/// 应用配置 DTO（纯数据，无逻辑）
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    /// Recognition service URL (may be empty)
    pub recognition_endpoint: String,

    /// Recognition request timeout in seconds (0 when unset)
    pub recognition_timeout_secs: u64,

    /// Longest edge of normalized images (0 when unset)
    pub capture_max_edge: u32,

    /// JPEG quality of normalized images (0 when unset)
    pub capture_jpeg_quality: u8,

    /// Ratios the camera advertises, as `"h:w"` strings. Empty means the
    /// platform has no negotiable ratio.
    pub capture_supported_ratios: Vec<String>,

    /// Screen size used for ratio negotiation (0 when unset)
    pub screen_width: f64,
    pub screen_height: f64,

    /// Directory for flags and logs (path info only, no existence check)
    /// 标志与日志目录（仅路径信息，不检查是否存在）
    pub data_dir: PathBuf,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    /// 从 TOML 值创建 AppConfig
    ///
    /// This method must NOT contain any validation or default value logic.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let section = |name: &str, key: &str| toml_value.get(name).and_then(|s| s.get(key));

        Ok(Self {
            recognition_endpoint: section("recognition", "endpoint")
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string(),
            recognition_timeout_secs: section("recognition", "timeout_secs")
                .and_then(|v| v.as_integer())
                .and_then(|v| u64::try_from(v).ok())
                .unwrap_or(0),
            capture_max_edge: section("capture", "max_edge")
                .and_then(|v| v.as_integer())
                .and_then(|v| u32::try_from(v).ok())
                .unwrap_or(0),
            capture_jpeg_quality: section("capture", "jpeg_quality")
                .and_then(|v| v.as_integer())
                .and_then(|v| u8::try_from(v).ok())
                .unwrap_or(0),
            capture_supported_ratios: section("capture", "supported_ratios")
                .and_then(|v| v.as_array())
                .map(|values| {
                    values
                        .iter()
                        .filter_map(|v| v.as_str().map(str::to_string))
                        .collect()
                })
                .unwrap_or_default(),
            screen_width: section("screen", "width").and_then(as_float).unwrap_or(0.0),
            screen_height: section("screen", "height").and_then(as_float).unwrap_or(0.0),
            data_dir: PathBuf::from(
                section("storage", "data_dir")
                    .and_then(|v| v.as_str())
                    .unwrap_or(""),
            ),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    /// 创建空的 AppConfig（所有字段为空/默认值）
    pub fn empty() -> Self {
        Self {
            recognition_endpoint: String::new(),
            recognition_timeout_secs: 0,
            capture_max_edge: 0,
            capture_jpeg_quality: 0,
            capture_supported_ratios: Vec::new(),
            screen_width: 0.0,
            screen_height: 0.0,
            data_dir: PathBuf::new(),
        }
    }

    /// Create AppConfig with defaults rooted at `data_dir`.
    /// 生产环境使用：以 `data_dir` 为根创建默认配置
    ///
    /// The base directory is computed by the caller (e.g. with the `dirs` crate).
    pub fn with_system_defaults(data_dir: PathBuf) -> Self {
        Self {
            recognition_endpoint: String::new(),
            recognition_timeout_secs: DEFAULT_RECOGNITION_TIMEOUT_SECS,
            capture_max_edge: NORMALIZED_MAX_EDGE,
            capture_jpeg_quality: NORMALIZED_JPEG_QUALITY,
            capture_supported_ratios: Vec::new(),
            screen_width: 0.0,
            screen_height: 0.0,
            data_dir,
        }
    }
}

fn as_float(value: &toml::Value) -> Option<f64> {
    value
        .as_float()
        .or_else(|| value.as_integer().map(|i| i as f64))
}
