use ll_core::ports::ProfileMigrationPort;
use ll_core::profile::envelope::SCHEMA_VERSION_KEY;
use ll_core::profile::{
    EnvelopeError, StoredProfile, CURRENT_SCHEMA_VERSION, LEGACY_SCHEMA_VERSION,
};
use serde_json::{Map, Value};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MigrationError {
    #[error("no profile migration registered from schema version {0}")]
    MissingStep(u32),

    #[error("profile schema version {found} is newer than supported version {supported}")]
    Unsupported { found: u32, supported: u32 },

    #[error(transparent)]
    Malformed(#[from] EnvelopeError),
}

/// Legacy flat preference keys, in the order they appear in the nested object.
const LEGACY_PREF_KEYS: [&str; 4] = [
    "orderStatuses",
    "passwordChanges",
    "specialOffers",
    "newsletter",
];

/// Wraps the unversioned flat record into the v1 envelope.
///
/// Notification preferences move under `notificationPrefs` and the avatar
/// key `image` becomes `avatarUri`.
pub struct MigrationV0ToV1;

impl ProfileMigrationPort for MigrationV0ToV1 {
    fn from_version(&self) -> u32 {
        LEGACY_SCHEMA_VERSION
    }

    fn to_version(&self) -> u32 {
        1
    }

    fn migrate(&self, raw: Value) -> Value {
        let mut legacy = match raw {
            Value::Object(map) => map,
            _ => Map::new(),
        };

        let mut prefs = Map::new();
        for key in LEGACY_PREF_KEYS {
            if let Some(value) = legacy.remove(key) {
                prefs.insert(key.to_string(), value);
            }
        }

        let mut profile = Map::new();
        for key in ["firstName", "lastName", "email", "phoneNumber"] {
            if let Some(value) = legacy.remove(key) {
                profile.insert(key.to_string(), value);
            }
        }
        profile.insert("notificationPrefs".to_string(), Value::Object(prefs));
        if let Some(image) = legacy.remove("image") {
            profile.insert("avatarUri".to_string(), image);
        }

        let mut envelope = Map::new();
        envelope.insert(SCHEMA_VERSION_KEY.to_string(), Value::from(1u32));
        envelope.insert("profile".to_string(), Value::Object(profile));
        Value::Object(envelope)
    }
}

pub struct ProfileMigrator {
    migrations: Vec<Box<dyn ProfileMigrationPort>>,
}

impl Default for ProfileMigrator {
    fn default() -> Self {
        Self::new()
    }
}

impl ProfileMigrator {
    pub fn new() -> Self {
        Self {
            migrations: vec![Box::new(MigrationV0ToV1)],
        }
    }

    /// Migrator with an explicit chain; used to exercise future steps.
    pub fn with_migrations(migrations: Vec<Box<dyn ProfileMigrationPort>>) -> Self {
        Self { migrations }
    }

    /// Runs the chain until the value reaches [`CURRENT_SCHEMA_VERSION`].
    pub fn migrate_to_latest(&self, mut raw: Value) -> Result<Value, MigrationError> {
        loop {
            let current = StoredProfile::version_of(&raw)?;

            if current == CURRENT_SCHEMA_VERSION {
                return Ok(raw);
            }
            if current > CURRENT_SCHEMA_VERSION {
                return Err(MigrationError::Unsupported {
                    found: current,
                    supported: CURRENT_SCHEMA_VERSION,
                });
            }

            let migration = self
                .migrations
                .iter()
                .find(|m| m.from_version() == current)
                .ok_or(MigrationError::MissingStep(current))?;

            tracing::debug!(
                from = migration.from_version(),
                to = migration.to_version(),
                "migrating stored profile"
            );
            raw = migration.migrate(raw);
        }
    }
}
