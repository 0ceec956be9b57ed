//! File logging for the CLI.
//!
//! The terminal belongs to the presenter, so logs go to a daily rolling file
//! under `~/.pearls/logs/`. `PEARLS_DEBUG_LOG=1` forces debug level, otherwise
//! `RUST_LOG` is honoured with `info` as the fallback.

use fs_err as fs;
use std::env;
use std::path::Path;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

const LOG_FILE_PREFIX: &str = "pearls.log";

/// Installs the global subscriber. The returned guard must live until exit so
/// buffered lines are flushed; `None` means logging is disabled for this run.
pub fn init(logs_dir: &Path) -> Option<WorkerGuard> {
    let debug_enabled = env::var("PEARLS_DEBUG_LOG")
        .map(|value| matches!(value.as_str(), "1" | "true" | "TRUE" | "yes" | "YES"))
        .unwrap_or(false);
    let filter = if debug_enabled {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    if let Err(err) = fs::create_dir_all(logs_dir) {
        eprintln!("Warning: logging disabled: {}", err);
        return None;
    }

    let appender = tracing_appender::rolling::daily(logs_dir, LOG_FILE_PREFIX);
    let (writer, guard) = tracing_appender::non_blocking(appender);
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .try_init()
        .ok()?;
    Some(guard)
}
