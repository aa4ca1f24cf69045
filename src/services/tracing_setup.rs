//! Tracing subscriber setup
//!
//! Stdout is the editor's screen, so logs only ever go to a file, and only
//! when `RUST_LOG` asks for them.

use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tracing_subscriber::prelude::*;
use tracing_subscriber::{fmt, EnvFilter};

/// Default log file location: `<temp_dir>/jot-<pid>.log`
pub fn default_log_path() -> PathBuf {
    std::env::temp_dir().join(format!("jot-{}.log", std::process::id()))
}

/// Initialize the global tracing subscriber from the environment.
///
/// Does nothing unless `RUST_LOG` is set. Returns the log file path when
/// logging was enabled.
pub fn init_from_env() -> Option<PathBuf> {
    let filter = EnvFilter::try_from_default_env().ok()?;
    let path = default_log_path();
    init_global(&path, filter)?;
    Some(path)
}

/// Initialize the global tracing subscriber writing to `log_file_path`.
pub fn init_global(log_file_path: &Path, filter: EnvFilter) -> Option<()> {
    let log_file = File::create(log_file_path).ok()?;
    build_subscriber(log_file, filter).try_init().ok()
}

/// Build a subscriber logging to `log_file` through `filter`.
///
/// This is the core subscriber configuration shared between production and tests.
pub fn build_subscriber(
    log_file: File,
    filter: EnvFilter,
) -> impl tracing::Subscriber + Send + Sync {
    let fmt_layer = fmt::layer()
        .with_ansi(false)
        .with_writer(Arc::new(log_file));

    tracing_subscriber::registry().with(fmt_layer).with(filter)
}
