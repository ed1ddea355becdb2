//! Configuration DTO
//!
//! Plain data read from the TOML config file. No validation and no
//! defaults computed from the environment: empty values are facts that the
//! bootstrap layer resolves (e.g. an empty `data_dir` means "use the
//! platform data directory").

use std::path::PathBuf;

/// Default file name of the stored profile under the data directory.
pub const DEFAULT_PROFILE_FILE: &str = "profile.json";

/// Application configuration DTO (pure data, no logic)
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Data directory override (empty = platform default)
    pub data_dir: PathBuf,

    /// Profile file name inside the data directory (empty = default)
    pub profile_file: String,

    /// Log filter directive, e.g. "info" (empty = build default)
    pub log_level: String,

    /// Whether to also write logs to a file under the logs dir
    pub log_to_file: bool,
}

impl AppConfig {
    /// Create AppConfig from TOML value
    ///
    /// Must not validate or compute defaults. Missing keys become empty.
    pub fn from_toml(toml_value: &toml::Value) -> anyhow::Result<Self> {
        let str_at = |section: &str, key: &str| {
            toml_value
                .get(section)
                .and_then(|s| s.get(key))
                .and_then(|v| v.as_str())
                .unwrap_or("")
                .to_string()
        };

        Ok(Self {
            data_dir: PathBuf::from(str_at("storage", "data_dir")),
            profile_file: str_at("storage", "profile_file"),
            log_level: str_at("logging", "level"),
            log_to_file: toml_value
                .get("logging")
                .and_then(|l| l.get("file"))
                .and_then(|v| v.as_bool())
                .unwrap_or(false),
        })
    }

    /// Create empty AppConfig (all empty/default values)
    pub fn empty() -> Self {
        Self {
            data_dir: PathBuf::new(),
            profile_file: String::new(),
            log_level: String::new(),
            log_to_file: false,
        }
    }

    /// Profile file name, falling back to [`DEFAULT_PROFILE_FILE`] when unset.
    pub fn profile_file_name(&self) -> &str {
        if self.profile_file.is_empty() {
            DEFAULT_PROFILE_FILE
        } else {
            &self.profile_file
        }
    }
}
