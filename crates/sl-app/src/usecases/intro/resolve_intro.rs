use std::sync::Arc;

use tracing::{info, info_span, warn, Instrument};

use sl_core::ports::{FlagStoreError, FlagStorePort};
use sl_core::scan::ALREADY_LAUNCHED_FLAG;

/// Decide whether the first-run intro cards are shown.
///
/// 决定是否显示首次启动引导。
///
/// The first launch shows the intro and records the launch; every later
/// launch hides it.
pub struct ResolveIntroGuidance {
    flags: Arc<dyn FlagStorePort>,
}

impl ResolveIntroGuidance {
    pub fn new(flags: Arc<dyn FlagStorePort>) -> Self {
        Self { flags }
    }

    /// Returns `true` when the intro should be shown.
    pub async fn execute(&self) -> Result<bool, FlagStoreError> {
        let span = info_span!("usecase.resolve_intro_guidance.execute");
        async {
            if self.flags.get_flag(ALREADY_LAUNCHED_FLAG).await?.is_some() {
                return Ok(false);
            }

            self.flags.set_flag(ALREADY_LAUNCHED_FLAG, "true").await?;
            info!("first launch recorded");
            Ok(true)
        }
        .instrument(span)
        .await
    }

    /// Like [`execute`](Self::execute), but a storage failure shows the intro.
    pub async fn show_intro(&self) -> bool {
        match self.execute().await {
            Ok(show) => show,
            Err(err) => {
                warn!(error = %err, "intro flag unavailable, showing intro");
                true
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;
    use std::sync::Mutex;

    use async_trait::async_trait;

    #[derive(Default)]
    struct MemoryFlags {
        values: Mutex<HashMap<String, String>>,
        broken: bool,
    }

    #[async_trait]
    impl FlagStorePort for MemoryFlags {
        async fn get_flag(&self, key: &str) -> Result<Option<String>, FlagStoreError> {
            if self.broken {
                return Err(FlagStoreError::Storage("disk gone".into()));
            }
            Ok(self.values.lock().unwrap().get(key).cloned())
        }

        async fn set_flag(&self, key: &str, value: &str) -> Result<(), FlagStoreError> {
            self.values
                .lock()
                .unwrap()
                .insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    #[tokio::test]
    async fn first_launch_shows_intro_once() {
        let flags = Arc::new(MemoryFlags::default());
        let uc = ResolveIntroGuidance::new(flags.clone());

        assert!(uc.execute().await.unwrap());
        assert_eq!(
            flags.values.lock().unwrap().get(ALREADY_LAUNCHED_FLAG).map(String::as_str),
            Some("true")
        );
        assert!(!uc.execute().await.unwrap());
    }

    #[tokio::test]
    async fn storage_failure_shows_intro() {
        let uc = ResolveIntroGuidance::new(Arc::new(MemoryFlags {
            broken: true,
            ..Default::default()
        }));

        assert!(uc.execute().await.is_err());
        assert!(uc.show_intro().await);
    }
}
