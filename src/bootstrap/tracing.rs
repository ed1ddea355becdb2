//! Tracing configuration for Little Lemon
//!
//! Installs the global `tracing-subscriber` registry: an env filter, a
//! formatted stderr layer and, when enabled in config, a non-blocking
//! daily log file under the logs dir. Stdout is left to command output.

use std::{fs, io, path::Path, sync::OnceLock};

use ll_core::config::AppConfig;
use tracing_appender::non_blocking::{NonBlocking, WorkerGuard};
use tracing_subscriber::{fmt, fmt::writer::BoxMakeWriter, prelude::*, registry, EnvFilter};

const LOG_FILE_PREFIX: &str = "littlelemon.log";
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S%.3f";

static LOG_GUARD: OnceLock<WorkerGuard> = OnceLock::new();

fn is_development() -> bool {
    cfg!(debug_assertions)
}

/// Default filter directives when `RUST_LOG` is not set.
///
/// The configured level wins over the build-profile default.
fn build_filter_directives(is_dev: bool, configured_level: &str) -> Vec<String> {
    let base = if !configured_level.is_empty() {
        configured_level
    } else if is_dev {
        "debug"
    } else {
        "info"
    };

    vec![
        base.to_string(),
        if is_dev { "ll_infra=debug" } else { "ll_infra=info" }.to_string(),
    ]
}

/// Initialize the tracing subscriber.
///
/// Call once, before the first session operation:
///
/// ```ignore
/// let config = load_config_or_default(cli.config.as_deref())?;
/// init_tracing_subscriber(&config, &paths.logs_dir)?;
/// ```
///
/// ## Errors
///
/// Returns `Err` if a global subscriber is already registered.
pub fn init_tracing_subscriber(config: &AppConfig, logs_dir: &Path) -> anyhow::Result<()> {
    let filter_directives = build_filter_directives(is_development(), &config.log_level);
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(filter_directives.join(",")));

    let stderr_writer: BoxMakeWriter = BoxMakeWriter::new(io::stderr);
    let file_writer = if config.log_to_file {
        match build_file_writer(logs_dir) {
            Ok(writer) => Some(writer),
            Err(err) => {
                eprintln!("Failed to initialize file logging, falling back to stderr: {err}");
                None
            }
        }
    } else {
        None
    };

    let stderr_layer = fmt::layer()
        .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
        .with_level(true)
        .with_file(true)
        .with_line_number(true)
        .with_target(true)
        .with_ansi(cfg!(not(test)))
        .with_writer(stderr_writer);

    let file_layer = file_writer.map(|writer| {
        fmt::layer()
            .with_timer(fmt::time::ChronoUtc::new(TIMESTAMP_FORMAT.to_string()))
            .with_level(true)
            .with_file(true)
            .with_line_number(true)
            .with_target(true)
            .with_ansi(false)
            .with_writer(writer)
    });

    registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()?;

    Ok(())
}

fn build_file_writer(logs_dir: &Path) -> anyhow::Result<NonBlocking> {
    fs::create_dir_all(logs_dir)?;

    let file_appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    LOG_GUARD
        .set(guard)
        .map_err(|_| anyhow::anyhow!("Tracing log guard already initialized"))?;

    Ok(non_blocking)
}
