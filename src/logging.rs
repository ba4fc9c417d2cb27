//! Tracing setup.
//!
//! The TUI owns stdout, so logs go to a file:
//! `<data-local-dir>/unmutte/unmutte.log` unless a directory is configured.

use std::fs::{self, OpenOptions};
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use thiserror::Error;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::config::ClientConfig;

pub const LOG_FILE_NAME: &str = "unmutte.log";

#[derive(Debug, Error)]
pub enum LoggingError {
    #[error("no data directory available for the log file")]
    NoLogDir,

    #[error("cannot open log file {path}: {source}")]
    Open {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid log filter '{filter}': {message}")]
    Filter { filter: String, message: String },

    #[error("global subscriber already installed")]
    AlreadyInstalled,
}

/// Where the log file lives for `config`.
pub fn log_file_path(config: &ClientConfig) -> Result<PathBuf, LoggingError> {
    let dir = match &config.log_dir {
        Some(dir) => dir.clone(),
        None => dirs::data_local_dir()
            .ok_or(LoggingError::NoLogDir)?
            .join("unmutte"),
    };
    Ok(dir.join(LOG_FILE_NAME))
}

fn build_filter(directive: &str) -> Result<EnvFilter, LoggingError> {
    EnvFilter::try_new(directive).map_err(|e| LoggingError::Filter {
        filter: directive.to_string(),
        message: e.to_string(),
    })
}

fn open_append(path: &Path) -> Result<fs::File, LoggingError> {
    let open_err = |source| LoggingError::Open {
        path: path.to_path_buf(),
        source,
    };
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(open_err)?;
    }
    OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .map_err(open_err)
}

/// Install the global subscriber. Returns the log file path.
pub fn init_logging(config: &ClientConfig) -> Result<PathBuf, LoggingError> {
    let filter = build_filter(&config.log_filter)?;
    let path = log_file_path(config)?;
    let file = open_append(&path)?;

    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true);

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init()
        .map_err(|_| LoggingError::AlreadyInstalled)?;

    tracing::info!(backend = %config.backend_url, "unmutte {} starting", env!("CARGO_PKG_VERSION"));
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_log_path_uses_configured_dir() {
        let config = ClientConfig::new().with_log_dir("/var/tmp/unmutte-logs");
        assert_eq!(
            log_file_path(&config).unwrap(),
            PathBuf::from("/var/tmp/unmutte-logs/unmutte.log")
        );
    }

    #[test]
    fn test_invalid_filter_is_rejected() {
        let err = build_filter("unmutte=[[[").unwrap_err();
        assert!(matches!(err, LoggingError::Filter { .. }));
    }

    #[test]
    fn test_open_append_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("nested").join(LOG_FILE_NAME);
        open_append(&path).unwrap();
        assert!(path.exists());
    }
}
