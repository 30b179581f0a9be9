use async_trait::async_trait;

use super::errors::FlagStoreError;

/// Small persistent key/value store for app flags.
///
/// 应用标志的持久化键值存储。
#[async_trait]
pub trait FlagStorePort: Send + Sync {
    async fn get_flag(&self, key: &str) -> Result<Option<String>, FlagStoreError>;

    async fn set_flag(&self, key: &str, value: &str) -> Result<(), FlagStoreError>;
}
