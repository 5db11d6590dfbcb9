//! ImageRenamer Logging & Observability Module
//!
//! Provides structured logging, log rotation cleanup and crash reports.

mod logging;
mod panic_hook;

pub use logging::{cleanup_old_logs, cleanup_logs_in, init_logging};
pub use panic_hook::init_panic_hook;

use directories::ProjectDirs;
use std::path::PathBuf;
use tracing_appender::non_blocking::WorkerGuard;

/// Get the application log directory
pub fn log_dir() -> PathBuf {
    ProjectDirs::from("com", "ImageRenamer", "ImageRenamer")
        .map(|dirs| dirs.data_dir().join("logs"))
        .unwrap_or_else(|| PathBuf::from("./logs"))
}

/// Initialize all observability features.
///
/// The returned guard flushes the log file when dropped; keep it alive
/// for the lifetime of the process.
pub fn init() -> anyhow::Result<WorkerGuard> {
    let guard = init_logging()?;
    init_panic_hook();

    Ok(guard)
}
