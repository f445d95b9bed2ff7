//! File logging setup.
//!
//! Logs go to ${BEACON_HOME}/logs/ rather than the terminal, since the
//! portal owns the screen while it runs. The filter defaults to `info` and
//! can be overridden with RUST_LOG.

use anyhow::{Context, Result};
use beacon_core::config::paths;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Initializes file logging and returns the guard that flushes buffered
/// records on drop. The caller must keep the guard alive for the process
/// lifetime.
pub fn init() -> Result<WorkerGuard> {
    let logs_dir = paths::logs_dir();
    std::fs::create_dir_all(&logs_dir)
        .with_context(|| format!("create logs directory {}", logs_dir.display()))?;

    let appender = tracing_appender::rolling::daily(logs_dir, "beacon.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .init();

    Ok(guard)
}
