//! # Configuration Loader
//!
//! Reads the TOML config file into the [`AppConfig`] DTO.
//!
//! Pure data loading only. No validation, no default values, no business
//! rules: whatever is in the file is accepted as a fact.

use std::path::{Path, PathBuf};

use anyhow::Context;
use ll_core::config::AppConfig;

/// Load configuration from a TOML file.
///
/// Missing sections and keys become empty values.
///
/// # Errors
///
/// Returns error if the file cannot be read or is not valid TOML.
pub fn load_config(config_path: PathBuf) -> anyhow::Result<AppConfig> {
    let content = std::fs::read_to_string(&config_path)
        .with_context(|| format!("Failed to read config file: {}", config_path.display()))?;
    let toml_value: toml::Value =
        toml::from_str(&content).context("Failed to parse config as TOML")?;
    AppConfig::from_toml(&toml_value)
}

/// [`load_config`] when a path is given, otherwise [`AppConfig::empty`].
pub fn load_config_or_default(config_path: Option<&Path>) -> anyhow::Result<AppConfig> {
    match config_path {
        Some(path) => load_config(path.to_path_buf()),
        None => Ok(AppConfig::empty()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn write_config(content: &str) -> NamedTempFile {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file.write_all(content.as_bytes()).unwrap();
        temp_file
    }

    #[test]
    fn test_load_config_reads_valid_toml() {
        let temp_file = write_config(
            r#"
            [storage]
            data_dir = "/var/lib/littlelemon"
            profile_file = "ana.json"

            [logging]
            level = "warn"
            file = true
        "#,
        );

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config.data_dir, PathBuf::from("/var/lib/littlelemon"));
        assert_eq!(config.profile_file, "ana.json");
        assert_eq!(config.log_level, "warn");
        assert!(config.log_to_file);
    }

    #[test]
    fn test_load_config_returns_empty_values_when_missing() {
        let temp_file = write_config(
            r#"
            [storage]
            # data_dir is missing
        "#,
        );

        let config = load_config(temp_file.path().to_path_buf()).unwrap();

        assert_eq!(config, AppConfig::empty());
        assert_eq!(config.profile_file_name(), "profile.json");
    }

    #[test]
    fn test_load_config_rejects_invalid_toml() {
        let temp_file = write_config("[storage\ndata_dir = ");

        let err = load_config(temp_file.path().to_path_buf()).unwrap_err();

        assert!(err.to_string().contains("TOML"), "got: {err}");
    }

    #[test]
    fn test_load_config_returns_io_error_on_file_not_found() {
        let result = load_config(PathBuf::from("/this/path/does/not/exist/config.toml"));

        let err = result.unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_no_config_path_means_empty_config() {
        assert_eq!(load_config_or_default(None).unwrap(), AppConfig::empty());
    }
}
