//! Log output setup.
//!
//! The terminal carries the console UI, so logs go to a file in the
//! application data directory.

use crate::{AppError, AppResult, config::LoggingConfig};

use std::{fs, panic::Location, path::Path};

use error_location::ErrorLocation;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Install the global subscriber writing to `log_dir`.
///
/// `RUST_LOG` overrides the configured filter. The returned guard flushes
/// buffered log lines when dropped and must live until exit.
#[track_caller]
pub fn init_logging(config: &LoggingConfig, log_dir: &Path) -> AppResult<WorkerGuard> {
    fs::create_dir_all(log_dir)?;

    let file_appender = tracing_appender::rolling::never(log_dir, &config.file_name);
    let (writer, guard) = tracing_appender::non_blocking(file_appender);

    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.filter));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .map_err(|e| AppError::LoggingError {
            reason: format!("Failed to install subscriber: {}", e),
            location: ErrorLocation::from(Location::caller()),
        })?;

    Ok(guard)
}
