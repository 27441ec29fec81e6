//! File-based logging. The terminal belongs to the UI, so nothing goes to stdout.

use std::fs;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LogConfig;

/// Installs the global subscriber. The returned guard must outlive the app or
/// buffered lines are lost.
pub fn init(config: &LogConfig) -> Option<WorkerGuard> {
    if !config.enabled {
        return None;
    }
    if let Err(err) = fs::create_dir_all(&config.dir) {
        eprintln!("Warning: failed to create log directory {}: {err}", config.dir.display());
        return None;
    }

    let appender = tracing_appender::rolling::daily(&config.dir, &config.file_name);
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    let layer = fmt::layer()
        .with_writer(writer)
        .with_target(true)
        .with_ansi(false);

    if tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
        .is_err()
    {
        // Someone else already owns the global subscriber.
        return None;
    }

    tracing::info!(
        dir = %config.dir.display(),
        level = %config.level,
        "logging initialized"
    );
    Some(guard)
}
