use async_trait::async_trait;
use tokio::sync::RwLock;

use ll_core::ports::{ProfileStoreError, ProfileStorePort};
use ll_core::profile::ProfileRecord;

/// Which store operations should fail, and with what message.
#[derive(Debug, Clone, Default)]
struct Failures {
    load: Option<String>,
    save: Option<String>,
    clear: Option<String>,
}

/// Process-local profile store.
///
/// Keeps the record behind an async lock so a concurrent `load` sees either
/// the previous or the new record. Each operation can be told to fail,
/// which lets collaborators exercise their negative paths.
#[derive(Default)]
pub struct InMemoryProfileStore {
    profile: RwLock<Option<ProfileRecord>>,
    failures: RwLock<Failures>,
}

impl InMemoryProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(profile: ProfileRecord) -> Self {
        Self {
            profile: RwLock::new(Some(profile)),
            failures: RwLock::new(Failures::default()),
        }
    }

    /// Current stored record, bypassing failure injection.
    pub async fn stored(&self) -> Option<ProfileRecord> {
        self.profile.read().await.clone()
    }

    pub async fn fail_load(&self, reason: Option<&str>) {
        self.failures.write().await.load = reason.map(str::to_string);
    }

    pub async fn fail_save(&self, reason: Option<&str>) {
        self.failures.write().await.save = reason.map(str::to_string);
    }

    pub async fn fail_clear(&self, reason: Option<&str>) {
        self.failures.write().await.clear = reason.map(str::to_string);
    }
}

#[async_trait]
impl ProfileStorePort for InMemoryProfileStore {
    async fn load(&self) -> Result<Option<ProfileRecord>, ProfileStoreError> {
        if let Some(reason) = self.failures.read().await.load.clone() {
            return Err(ProfileStoreError::Read(reason));
        }
        Ok(self.profile.read().await.clone())
    }

    async fn save(&self, profile: &ProfileRecord) -> Result<(), ProfileStoreError> {
        if let Some(reason) = self.failures.read().await.save.clone() {
            return Err(ProfileStoreError::Write(reason));
        }
        *self.profile.write().await = Some(profile.clone());
        Ok(())
    }

    async fn clear(&self) -> Result<(), ProfileStoreError> {
        if let Some(reason) = self.failures.read().await.clear.clone() {
            return Err(ProfileStoreError::Clear(reason));
        }
        *self.profile.write().await = None;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn new_store_is_empty() {
        let store = InMemoryProfileStore::new();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn save_load_clear() {
        let store = InMemoryProfileStore::new();
        let profile = ProfileRecord::onboarding("Ana", "Lee", "ana@x.com");

        store.save(&profile).await.unwrap();
        assert_eq!(store.load().await.unwrap(), Some(profile));

        store.clear().await.unwrap();
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn failed_save_keeps_previous_record() {
        let original = ProfileRecord::onboarding("Ana", "Lee", "ana@x.com");
        let store = InMemoryProfileStore::with_profile(original.clone());
        store.fail_save(Some("disk full")).await;

        let err = store
            .save(&ProfileRecord::onboarding("Bo", "Kim", "bo@x.com"))
            .await
            .expect_err("expected write failure");

        assert_eq!(err, ProfileStoreError::Write("disk full".into()));
        assert_eq!(store.stored().await, Some(original));
    }

    #[tokio::test]
    async fn failures_can_be_lifted() {
        let store = InMemoryProfileStore::new();
        store.fail_load(Some("io")).await;
        assert!(matches!(store.load().await, Err(ProfileStoreError::Read(_))));

        store.fail_load(None).await;
        assert_eq!(store.load().await.unwrap(), None);
    }

    #[tokio::test]
    async fn failed_clear_keeps_record() {
        let original = ProfileRecord::onboarding("Ana", "Lee", "ana@x.com");
        let store = InMemoryProfileStore::with_profile(original.clone());
        store.fail_clear(Some("locked")).await;

        assert!(matches!(store.clear().await, Err(ProfileStoreError::Clear(_))));
        assert_eq!(store.stored().await, Some(original));
    }
}
