//! Log file setup.
//!
//! Log lines are JSON, appended to the configured file. The subscriber is
//! returned to the caller rather than installed globally so each invocation
//! can scope it with [`tracing::subscriber::with_default`].

use std::fs::OpenOptions;
use std::path::Path;
use std::sync::Mutex;

use tracing_subscriber::EnvFilter;

use crate::constants;
use crate::error::Result;

/// Builds a subscriber writing to `log_file`.
///
/// `PERSONCTL_LOG` takes precedence over `default_level` when set.
pub fn file_subscriber(
    log_file: &Path,
    default_level: &str,
) -> Result<impl tracing::Subscriber + Send + Sync + 'static> {
    if let Some(parent) = log_file.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)?;
    }
    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(log_file)?;

    let filter = EnvFilter::try_from_env(constants::ENV_LOG)
        .unwrap_or_else(|_| EnvFilter::new(default_level));

    Ok(tracing_subscriber::fmt()
        .json()
        .with_ansi(false)
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .finish())
}
