//! Dependency wiring: resolves storage locations and builds the session.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use ll_app::{AppDeps, AppPaths, SessionOrchestrator};
use ll_core::app_dirs::AppDirs;
use ll_core::config::AppConfig;
use ll_core::ports::{AppDirsPort, ProfileStorePort};
use ll_core::validation::ValidationPolicy;
use ll_infra::{DirsAppDirsAdapter, FileProfileStore, InMemoryProfileStore};

/// Command-line overrides applied on top of the config file.
#[derive(Debug, Clone, Default)]
pub struct StorageOverrides {
    /// Data directory taking precedence over config and platform default.
    pub data_dir: Option<PathBuf>,
    /// Keep the profile in memory only.
    pub ephemeral: bool,
}

pub struct SessionWiring {
    pub orchestrator: Arc<SessionOrchestrator>,
    pub paths: AppPaths,
}

/// Data root: command line, then config, then the platform data dir.
pub fn resolve_app_dirs(
    config: &AppConfig,
    overrides: &StorageOverrides,
) -> anyhow::Result<AppDirs> {
    if let Some(dir) = &overrides.data_dir {
        return Ok(AppDirs {
            app_data_root: dir.clone(),
        });
    }
    if !config.data_dir.as_os_str().is_empty() {
        return Ok(AppDirs {
            app_data_root: config.data_dir.clone(),
        });
    }
    DirsAppDirsAdapter::new()
        .get_app_dirs()
        .context("Failed to resolve platform data directory")
}

pub fn build_session(
    config: &AppConfig,
    overrides: &StorageOverrides,
) -> anyhow::Result<SessionWiring> {
    let dirs = resolve_app_dirs(config, overrides)?;
    let paths = AppPaths::with_profile_file(&dirs, config.profile_file_name());

    let profile_store: Arc<dyn ProfileStorePort> = if overrides.ephemeral {
        Arc::new(InMemoryProfileStore::new())
    } else {
        Arc::new(FileProfileStore::new(paths.profile_path.clone()))
    };

    let orchestrator = SessionOrchestrator::from_deps(AppDeps {
        profile_store,
        validation_policy: ValidationPolicy::new(),
    });

    Ok(SessionWiring {
        orchestrator: Arc::new(orchestrator),
        paths,
    })
}
