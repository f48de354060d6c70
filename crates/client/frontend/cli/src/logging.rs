//! Log setup for the interactive client.
//!
//! Menus own the terminal, so log lines go to a per-session file instead of
//! stderr.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

pub const LOG_FILE_NAME: &str = "client.log";

/// Install the global subscriber writing to `<log_dir>/<session>/client.log`.
///
/// `RUST_LOG` overrides the default `info` level. Keep the returned guard
/// alive for the whole program; dropping it flushes and stops the writer.
pub fn setup_logging(log_dir: &Path) -> Result<(WorkerGuard, PathBuf)> {
    let session_id = format!("session_{}", chrono::Local::now().format("%Y%m%d_%H%M%S"));
    let session_log_dir = log_dir.join(&session_id);
    std::fs::create_dir_all(&session_log_dir).with_context(|| {
        format!(
            "Failed to create log directory {}",
            session_log_dir.display()
        )
    })?;

    let file_appender = tracing_appender::rolling::never(&session_log_dir, LOG_FILE_NAME);
    let (non_blocking_file, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info"));

    let file_layer = tracing_subscriber::fmt::layer()
        .with_writer(non_blocking_file)
        .with_ansi(false);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .try_init()
        .context("Failed to install the tracing subscriber")?;

    let log_file = session_log_dir.join(LOG_FILE_NAME);
    tracing::info!("Logging initialized: session={}", session_id);
    tracing::info!("Log file: {}", log_file.display());

    Ok((guard, log_file))
}
