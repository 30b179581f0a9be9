//! File-based flag store
//!
//! Persists app flags as a flat JSON object in the application data
//! directory.

use std::collections::BTreeMap;
use std::path::PathBuf;

use async_trait::async_trait;
use sl_core::ports::{FlagStoreError, FlagStorePort};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tokio::sync::Mutex;

pub const DEFAULT_FLAGS_FILE: &str = "flags.json";

pub struct FileFlagStore {
    flags_file_path: PathBuf,
    write_lock: Mutex<()>,
}

impl FileFlagStore {
    pub fn new(flags_file_path: PathBuf) -> Self {
        Self {
            flags_file_path,
            write_lock: Mutex::new(()),
        }
    }

    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_FLAGS_FILE))
    }

    async fn load(&self) -> Result<BTreeMap<String, String>, FlagStoreError> {
        let content = match fs::read_to_string(&self.flags_file_path).await {
            Ok(content) => content,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => return Err(FlagStoreError::Storage(e.to_string())),
        };

        if content.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&content)
            .map_err(|e| FlagStoreError::Corrupt(format!("Failed to parse flags file: {}", e)))
    }

    async fn persist(&self, flags: &BTreeMap<String, String>) -> Result<(), FlagStoreError> {
        if let Some(parent) = self.flags_file_path.parent() {
            fs::create_dir_all(parent)
                .await
                .map_err(|e| FlagStoreError::Storage(e.to_string()))?;
        }

        let json = serde_json::to_string_pretty(flags)
            .map_err(|e| FlagStoreError::Storage(format!("Failed to serialize flags: {}", e)))?;

        let mut file = fs::File::create(&self.flags_file_path)
            .await
            .map_err(|e| FlagStoreError::Storage(format!("Failed to create flags file: {}", e)))?;
        file.write_all(json.as_bytes())
            .await
            .map_err(|e| FlagStoreError::Storage(format!("Failed to write flags file: {}", e)))?;
        file.sync_all()
            .await
            .map_err(|e| FlagStoreError::Storage(format!("Failed to sync flags file: {}", e)))?;

        Ok(())
    }
}

#[async_trait]
impl FlagStorePort for FileFlagStore {
    async fn get_flag(&self, key: &str) -> Result<Option<String>, FlagStoreError> {
        Ok(self.load().await?.remove(key))
    }

    async fn set_flag(&self, key: &str, value: &str) -> Result<(), FlagStoreError> {
        let _guard = self.write_lock.lock().await;
        let mut flags = self.load().await?;
        flags.insert(key.to_string(), value.to_string());
        self.persist(&flags).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[tokio::test]
    async fn missing_file_has_no_flags() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileFlagStore::new(temp_dir.path().join("nonexistent.json"));

        assert_eq!(store.get_flag("alreadyLaunched").await.unwrap(), None);
    }

    #[tokio::test]
    async fn set_then_get_keeps_other_flags() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileFlagStore::with_defaults(temp_dir.path().join("nested"));

        store.set_flag("alreadyLaunched", "true").await.unwrap();
        store.set_flag("theme", "dark").await.unwrap();

        assert_eq!(
            store.get_flag("alreadyLaunched").await.unwrap().as_deref(),
            Some("true")
        );
        assert_eq!(store.get_flag("theme").await.unwrap().as_deref(), Some("dark"));
        assert!(temp_dir.path().join("nested").join(DEFAULT_FLAGS_FILE).exists());
    }

    #[tokio::test]
    async fn empty_file_has_no_flags() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("flags.json");
        fs::write(&path, "").await.unwrap();

        let store = FileFlagStore::new(path);
        assert_eq!(store.get_flag("alreadyLaunched").await.unwrap(), None);
    }

    #[tokio::test]
    async fn invalid_json_is_corrupt() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("flags.json");
        fs::write(&path, "{invalid json").await.unwrap();

        let store = FileFlagStore::new(path);
        let result = store.get_flag("alreadyLaunched").await;

        assert!(matches!(result, Err(FlagStoreError::Corrupt(_))));
    }
}
