//! # Configuration Loader / 配置加载器
//!
//! [`load_config`] is pure data loading: read the TOML file and map it to
//! [`AppConfig`]. No validation and no defaults; missing keys stay empty.
//!
//! [`resolve_config`] is the only place that decides where the file lives and
//! what an empty data directory means.

use std::path::PathBuf;

use anyhow::Context;
use sl_core::config::AppConfig;

const APP_DIR_NAME: &str = "storylens";
const CONFIG_FILE_NAME: &str = "config.toml";

/// Load configuration from a TOML file
/// 从 TOML 文件加载配置
///
/// # Errors / 错误
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// `<system data dir>/storylens`
pub fn default_data_dir() -> anyhow::Result<PathBuf> {
    let base = dirs::data_dir().context("Failed to resolve system data directory")?;
    Ok(base.join(APP_DIR_NAME))
}

/// Resolve the effective configuration.
///
/// An explicit path must exist. Without one, `config.toml` in the default
/// data directory is used when present, otherwise system defaults. An empty
/// `data_dir` is replaced by the default data directory.
pub fn resolve_config(explicit_path: Option<PathBuf>) -> anyhow::Result<AppConfig> {
    let mut config = match explicit_path {
        Some(path) => load_config(path)?,
        None => {
            let data_dir = default_data_dir()?;
            let candidate = data_dir.join(CONFIG_FILE_NAME);
            if candidate.is_file() {
                load_config(candidate)?
            } else {
                AppConfig::with_system_defaults(data_dir)
            }
        }
    };

    if config.data_dir.as_os_str().is_empty() {
        config.data_dir = default_data_dir()?;
    }
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn load_config_reads_all_sections() {
        let toml_content = r#"
            [recognition]
            endpoint = "https://api.example/recognize"
            timeout_secs = 12

            [capture]
            max_edge = 800
            jpeg_quality = 75
            supported_ratios = ["4:3", "16:9"]

            [screen]
            width = 1080
            height = 1920.0

            [storage]
            data_dir = "/tmp/storylens"
        "#;

        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(toml_content.as_bytes()).unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.recognition_endpoint, "https://api.example/recognize");
        assert_eq!(config.recognition_timeout_secs, 12);
        assert_eq!(config.capture_max_edge, 800);
        assert_eq!(config.capture_jpeg_quality, 75);
        assert_eq!(config.capture_supported_ratios, vec!["4:3", "16:9"]);
        assert_eq!(config.screen_width, 1080.0);
        assert_eq!(config.screen_height, 1920.0);
        assert_eq!(config.data_dir, PathBuf::from("/tmp/storylens"));
    }

    #[test]
    fn load_config_keeps_missing_values_empty() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[recognition]\n").unwrap();

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config, AppConfig::empty());
    }

    #[test]
    fn load_config_rejects_invalid_toml() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(b"[recognition\nendpoint = ").unwrap();

        let err = load_config(temp_file.path().to_path_buf()).unwrap_err();
        assert!(err.to_string().contains("Failed to parse config as TOML"));
    }

    #[test]
    fn load_config_reports_missing_file() {
        let err = load_config(PathBuf::from("/nonexistent/storylens.toml")).unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn resolve_config_keeps_explicit_data_dir() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[storage]\ndata_dir = \"/srv/storylens\"\n")
            .unwrap();

        let config = resolve_config(Some(temp_file.path().to_path_buf())).unwrap();
        assert_eq!(config.data_dir, PathBuf::from("/srv/storylens"));
    }
}
