use std::path::PathBuf;

use ll_core::app_dirs::AppDirs;
use ll_core::config::DEFAULT_PROFILE_FILE;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppPaths {
    pub profile_path: PathBuf,
    pub logs_dir: PathBuf,
}

impl AppPaths {
    pub fn from_app_dirs(dirs: &AppDirs) -> Self {
        Self::with_profile_file(dirs, DEFAULT_PROFILE_FILE)
    }

    /// Same as [`AppPaths::from_app_dirs`] with a configured profile file name.
    pub fn with_profile_file(dirs: &AppDirs, profile_file: &str) -> Self {
        Self {
            profile_path: dirs.app_data_root.join(profile_file),
            logs_dir: dirs.app_data_root.join("logs"),
        }
    }
}
