//! Log setup for the replay binary.
//!
//! Diagnoses go to stdout; everything traced goes to stderr and, unless
//! disabled, to a log file.
use std::path::PathBuf;

use anyhow::{Context, Result};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{EnvFilter, Layer};

/// Platform cache directory for logs, or `POLICE_LOG_DIR` when set.
///
/// - macOS: `~/Library/Caches/police/logs`
/// - Linux: `~/.cache/police/logs` (or `$XDG_CACHE_HOME/police/logs`)
/// - Windows: `%LOCALAPPDATA%\police\logs`
/// - Fallback: `/tmp/police/logs`
pub fn log_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os("POLICE_LOG_DIR") {
        return PathBuf::from(dir);
    }
    directories::ProjectDirs::from("", "", "police")
        .map(|dirs| dirs.cache_dir().to_path_buf())
        .unwrap_or_else(|| PathBuf::from("/tmp/police"))
        .join("logs")
}

/// Installs the global subscriber. `RUST_LOG` overrides the `info` default.
pub fn setup_logging(to_file: bool) -> Result<()> {
    let env_filter = || EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    let stderr_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_filter(env_filter());

    let file_layer = if to_file {
        let dir = log_dir();
        std::fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
        let appender = tracing_appender::rolling::never(&dir, "police.log");
        let (writer, guard) = tracing_appender::non_blocking(appender);
        // Dropping the guard stops the writer thread.
        std::mem::forget(guard);
        Some(
            tracing_subscriber::fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_filter(env_filter()),
        )
    } else {
        None
    };

    tracing_subscriber::registry()
        .with(stderr_layer)
        .with(file_layer)
        .init();

    if to_file {
        tracing::debug!(dir = %log_dir().display(), "file logging enabled");
    }
    Ok(())
}
