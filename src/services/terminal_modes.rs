//! Terminal mode management
//!
//! The editor needs exactly one mode: raw input (no echo, no line
//! buffering, no signal keys, no output post-processing). `TerminalModes`
//! tracks whether it was enabled and restores the original state via
//! `undo()`, on drop, or through `emergency_cleanup()` from a panic hook.

use crate::view::escape::clear_screen;
use anyhow::{Context, Result};
use crossterm::{
    cursor::Show,
    terminal::{disable_raw_mode, enable_raw_mode},
    ExecutableCommand,
};
use std::io::{stdout, Write};

/// Tracks which terminal modes have been enabled and provides cleanup.
#[derive(Debug, Default)]
pub struct TerminalModes {
    raw_mode: bool,
}

impl TerminalModes {
    /// Create a new TerminalModes with nothing enabled.
    pub fn new() -> Self {
        Self::default()
    }

    /// Switch the controlling terminal to raw mode.
    ///
    /// Fails when stdin is not a terminal.
    pub fn enable() -> Result<Self> {
        let mut modes = Self::new();

        if let Err(e) = enable_raw_mode() {
            tracing::error!("Failed to enable raw mode: {}", e);
            return Err(e).context("enabling raw mode");
        }
        modes.raw_mode = true;
        tracing::debug!("Enabled raw mode");

        Ok(modes)
    }

    /// Restore the terminal to its original state.
    ///
    /// Safe to call multiple times.
    pub fn undo(&mut self) {
        if self.raw_mode {
            let _ = disable_raw_mode();
            self.raw_mode = false;
            tracing::debug!("Disabled raw mode");
        }
    }

    /// Returns true if raw mode is enabled.
    pub fn raw_mode_enabled(&self) -> bool {
        self.raw_mode
    }
}

impl Drop for TerminalModes {
    fn drop(&mut self) {
        self.undo();
    }
}

/// Unconditionally restore terminal state without tracking.
///
/// For panic hooks, where the `TerminalModes` instance is out of reach.
/// Also re-shows the cursor in case the panic hit mid-frame.
pub fn emergency_cleanup() {
    let _ = stdout().execute(Show);
    let _ = disable_raw_mode();
    let _ = stdout().flush();
}

/// Run an editor session, leaving a clean screen behind if it fails.
///
/// Every failure, including one while the terminal is still being set up,
/// is logged and followed by clear screen plus cursor home on `out`. The
/// session's error is returned unchanged.
pub fn run_with_clean_exit<W, F>(out: &mut W, session: F) -> Result<()>
where
    W: Write + ?Sized,
    F: FnOnce() -> Result<()>,
{
    let result = session();
    if let Err(e) = &result {
        tracing::error!("Fatal error: {:#}", e);
        let _ = clear_screen(out);
    }
    result
}
