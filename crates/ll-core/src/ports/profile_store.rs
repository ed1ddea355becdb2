//! Profile store port
//!
//! This port defines the contract for persisting and retrieving the single
//! profile record. Implementations are provided by the infrastructure layer
//! (e.g., file-based storage).

use async_trait::async_trait;
use thiserror::Error;

use crate::profile::ProfileRecord;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ProfileStoreError {
    #[error("profile read failed: {0}")]
    Read(String),

    #[error("profile write failed: {0}")]
    Write(String),

    #[error("profile clear failed: {0}")]
    Clear(String),

    #[error("stored profile schema version {found} is newer than supported version {supported}")]
    UnsupportedVersion { found: u32, supported: u32 },
}

#[async_trait]
pub trait ProfileStorePort: Send + Sync {
    /// Last persisted record, or `None` when nothing is stored.
    async fn load(&self) -> Result<Option<ProfileRecord>, ProfileStoreError>;

    /// Persist the full record, replacing any prior value.
    ///
    /// A concurrent `load` observes either the old or the new record.
    async fn save(&self, profile: &ProfileRecord) -> Result<(), ProfileStoreError>;

    /// Remove all persisted session/profile data.
    async fn clear(&self) -> Result<(), ProfileStoreError>;
}

#[cfg(test)]
mockall::mock! {
    pub ProfileStore {}

    #[async_trait]
    impl ProfileStorePort for ProfileStore {
        async fn load(&self) -> Result<Option<ProfileRecord>, ProfileStoreError>;
        async fn save(&self, profile: &ProfileRecord) -> Result<(), ProfileStoreError>;
        async fn clear(&self) -> Result<(), ProfileStoreError>;
    }
}
