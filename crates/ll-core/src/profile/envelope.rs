use serde::{Deserialize, Serialize};
use thiserror::Error;

use super::model::ProfileRecord;

/// Layout written by the current build.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Unversioned layout: a bare profile object with flat notification keys
/// and the avatar stored under `image`.
pub const LEGACY_SCHEMA_VERSION: u32 = 0;

/// Name of the version tag inside a stored envelope.
pub const SCHEMA_VERSION_KEY: &str = "schemaVersion";

/// A raw stored value that cannot be a profile envelope of any version.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum EnvelopeError {
    #[error("stored profile is not a JSON object")]
    NotAnObject,

    #[error("stored profile has an invalid schema version: {0}")]
    InvalidVersion(String),
}

/// What actually lands in storage: the full record plus its schema tag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredProfile {
    pub schema_version: u32,
    pub profile: ProfileRecord,
}

impl StoredProfile {
    pub fn current(profile: ProfileRecord) -> Self {
        Self {
            schema_version: CURRENT_SCHEMA_VERSION,
            profile,
        }
    }

    /// Schema version of a raw stored value.
    ///
    /// Objects without a version tag predate versioning and report
    /// [`LEGACY_SCHEMA_VERSION`]. Non-object roots and tags that are not a
    /// `u32` are rejected.
    pub fn version_of(raw: &serde_json::Value) -> Result<u32, EnvelopeError> {
        let object = raw.as_object().ok_or(EnvelopeError::NotAnObject)?;
        match object.get(SCHEMA_VERSION_KEY) {
            None => Ok(LEGACY_SCHEMA_VERSION),
            Some(tag) => tag
                .as_u64()
                .and_then(|v| u32::try_from(v).ok())
                .ok_or_else(|| EnvelopeError::InvalidVersion(tag.to_string())),
        }
    }
}
