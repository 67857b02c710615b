use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::error::{Result, ShelfError};

const DEFAULT_LOG_FILE_NAME: &str = "shelfql.log";

/// Initialize the logging system
///
/// # Arguments
/// * `verbose` - Enable verbose (DEBUG) logging
/// * `log_file` - Optional path to a JSON log file, rotated daily. If None, logs only to stderr
///
/// Fails when the log file cannot be created or a global subscriber is
/// already installed.
pub fn init(verbose: bool, log_file: Option<PathBuf>) -> Result<()> {
    let env_filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_directive(verbose)));

    let stderr_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .compact();

    let file_layer = log_file
        .as_deref()
        .map(file_appender)
        .transpose()?
        .map(|appender| {
            fmt::layer()
                .with_writer(appender)
                .with_ansi(false)
                .json()
        });

    tracing_subscriber::registry()
        .with(env_filter)
        .with(stderr_layer)
        .with(file_layer)
        .try_init()
        .map_err(|e| ShelfError::Logging(e.to_string()))
}

/// Daily-rotated appender writing `<file name>.<date>` next to `log_path`.
fn file_appender(log_path: &Path) -> Result<RollingFileAppender> {
    let dir = match log_path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(|e| {
        ShelfError::Logging(format!("Cannot create log directory {}: {}", dir.display(), e))
    })?;

    let prefix = log_path
        .file_name()
        .and_then(|n| n.to_str())
        .unwrap_or(DEFAULT_LOG_FILE_NAME);

    RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix(prefix)
        .build(dir)
        .map_err(|e| ShelfError::Logging(format!("Cannot open log file in {}: {}", dir.display(), e)))
}

/// Filter used when `RUST_LOG` is unset. HTTP request spans come from
/// `tower_http`, so it is enabled alongside the crate itself.
fn default_directive(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "info" };
    format!("shelfql={level},tower_http={level}")
}
