//! File-based profile store
//!
//! This module provides a file-based implementation of the ProfileStorePort,
//! persisting the profile record as a versioned JSON envelope in the
//! application data directory.

use anyhow::Context;
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::fs;
use tokio::io::AsyncWriteExt;

use ll_core::config::DEFAULT_PROFILE_FILE;
use ll_core::ports::{ProfileStoreError, ProfileStorePort};
use ll_core::profile::{ProfileRecord, StoredProfile};

use super::migration::{MigrationError, ProfileMigrator};

pub struct FileProfileStore {
    path: PathBuf,
    migrator: ProfileMigrator,
    tmp_seq: AtomicU64,
}

impl FileProfileStore {
    /// Create store with custom file path
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            migrator: ProfileMigrator::new(),
            tmp_seq: AtomicU64::new(0),
        }
    }

    /// Create store with base dir and filename
    pub fn with_base_dir(base_dir: PathBuf, filename: impl Into<String>) -> Self {
        Self::new(base_dir.join(filename.into()))
    }

    /// Create store with defaults
    pub fn with_defaults(base_dir: PathBuf) -> Self {
        Self::new(base_dir.join(DEFAULT_PROFILE_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn ensure_parent_dir(&self) -> anyhow::Result<()> {
        if let Some(dir) = self.path.parent() {
            fs::create_dir_all(dir)
                .await
                .with_context(|| format!("create profile dir failed: {}", dir.display()))?;
        }
        Ok(())
    }

    /// Unique sibling path for one write; concurrent writers never share it.
    fn tmp_path(&self) -> PathBuf {
        let seq = self.tmp_seq.fetch_add(1, Ordering::Relaxed);
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| DEFAULT_PROFILE_FILE.to_string());
        self.path
            .with_file_name(format!(".{name}.{}.{seq}.tmp", std::process::id()))
    }

    /// Writes `content` to a temp file and renames it over the target, so the
    /// target holds either the previous contents or the complete new ones.
    async fn atomic_write(&self, content: &str) -> anyhow::Result<()> {
        self.ensure_parent_dir().await?;

        let tmp_path = self.tmp_path();
        let written = async {
            let mut file = fs::File::create(&tmp_path)
                .await
                .with_context(|| format!("create temp profile failed: {}", tmp_path.display()))?;
            file.write_all(content.as_bytes())
                .await
                .with_context(|| format!("write temp profile failed: {}", tmp_path.display()))?;
            file.sync_all()
                .await
                .with_context(|| format!("sync temp profile failed: {}", tmp_path.display()))?;

            fs::rename(&tmp_path, &self.path).await.with_context(|| {
                format!(
                    "rename temp profile to target failed: {} -> {}",
                    tmp_path.display(),
                    self.path.display()
                )
            })
        }
        .await;

        if written.is_err() {
            let _ = fs::remove_file(&tmp_path).await;
        }
        written
    }

    async fn read_raw(&self) -> anyhow::Result<Option<String>> {
        match fs::read_to_string(&self.path).await {
            Ok(content) if content.trim().is_empty() => Ok(None),
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => {
                Err(e).with_context(|| format!("read profile failed: {}", self.path.display()))
            }
        }
    }
}

#[async_trait]
impl ProfileStorePort for FileProfileStore {
    async fn load(&self) -> Result<Option<ProfileRecord>, ProfileStoreError> {
        let content = match self
            .read_raw()
            .await
            .map_err(|e| ProfileStoreError::Read(format!("{e:#}")))?
        {
            Some(content) => content,
            None => {
                tracing::debug!(path = %self.path.display(), "no stored profile");
                return Ok(None);
            }
        };

        let raw: serde_json::Value = serde_json::from_str(&content)
            .map_err(|e| ProfileStoreError::Read(format!("Failed to parse stored profile: {e}")))?;

        let migrated = self.migrator.migrate_to_latest(raw).map_err(|e| match e {
            MigrationError::Unsupported { found, supported } => {
                ProfileStoreError::UnsupportedVersion { found, supported }
            }
            other => ProfileStoreError::Read(other.to_string()),
        })?;

        let stored: StoredProfile = serde_json::from_value(migrated)
            .map_err(|e| ProfileStoreError::Read(format!("Failed to decode stored profile: {e}")))?;

        Ok(Some(stored.profile))
    }

    async fn save(&self, profile: &ProfileRecord) -> Result<(), ProfileStoreError> {
        let json = serde_json::to_string_pretty(&StoredProfile::current(profile.clone()))
            .map_err(|e| ProfileStoreError::Write(format!("serialize profile failed: {e}")))?;

        self.atomic_write(&json)
            .await
            .map_err(|e| ProfileStoreError::Write(format!("{e:#}")))?;

        tracing::debug!(path = %self.path.display(), "profile saved");
        Ok(())
    }

    async fn clear(&self) -> Result<(), ProfileStoreError> {
        match fs::remove_file(&self.path).await {
            Ok(()) => {
                tracing::debug!(path = %self.path.display(), "profile cleared");
                Ok(())
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(ProfileStoreError::Clear(format!(
                "remove profile failed: {}: {e}",
                self.path.display()
            ))),
        }
    }
}
