//! Time source abstraction for testability.
//!
//! Production code stamps saves with the local wall clock; tests swap in a
//! fixed timestamp so rendered frames are deterministic.

use chrono::Local;
use std::fmt::Write;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

/// Source of human-readable timestamps.
pub trait TimeSource: Send + Sync + std::fmt::Debug {
    /// Current time formatted with a strftime pattern.
    fn timestamp(&self, format: &str) -> String;
}

/// Type alias for shared time source.
pub type SharedTimeSource = Arc<dyn TimeSource>;

/// Production implementation using the local wall clock.
#[derive(Debug, Clone, Copy, Default)]
pub struct RealTimeSource;

impl RealTimeSource {
    pub fn new() -> Self {
        Self
    }

    pub fn shared() -> SharedTimeSource {
        Arc::new(Self)
    }
}

impl TimeSource for RealTimeSource {
    fn timestamp(&self, format: &str) -> String {
        let mut out = String::new();
        // An invalid pattern makes chrono's Display fail; fall back to an
        // empty stamp rather than panicking.
        if write!(out, "{}", Local::now().format(format)).is_err() {
            tracing::warn!("Invalid timestamp format {:?}", format);
            out.clear();
        }
        out
    }
}

/// Test implementation returning a fixed timestamp.
///
/// Also counts how many timestamps were taken, which tells tests how many
/// saves succeeded.
#[derive(Debug)]
pub struct TestTimeSource {
    stamp: String,
    calls: AtomicUsize,
}

impl TestTimeSource {
    pub fn new(stamp: impl Into<String>) -> Self {
        Self {
            stamp: stamp.into(),
            calls: AtomicUsize::new(0),
        }
    }

    pub fn shared(stamp: impl Into<String>) -> Arc<Self> {
        Arc::new(Self::new(stamp))
    }

    /// Number of timestamps handed out so far.
    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl TimeSource for TestTimeSource {
    fn timestamp(&self, _format: &str) -> String {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.stamp.clone()
    }
}
