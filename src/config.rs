//! Editor configuration
//!
//! Every tunable has a default; nothing is read from disk.

use std::time::Duration;

/// Tunables for rendering, input decoding and saving
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// How long to wait for the rest of an escape sequence after ESC
    pub escape_timeout: Duration,

    /// Centered on an empty document
    pub welcome_message: String,

    /// Drawn on screen rows past the end of the document
    pub empty_line_marker: u8,

    /// Status bar text for a buffer with no filename
    pub unnamed_buffer_label: String,

    /// Maximum filename characters shown in the status bar
    pub filename_display_width: usize,

    /// strftime pattern for the last-save timestamp
    pub timestamp_format: String,
}

fn default_escape_timeout() -> Duration {
    Duration::from_millis(100)
}

fn default_welcome_message() -> String {
    "type CTRL + q and give me text".to_string()
}

fn default_empty_line_marker() -> u8 {
    b'~'
}

fn default_unnamed_buffer_label() -> String {
    "[No Name]".to_string()
}

fn default_filename_display_width() -> usize {
    20
}

fn default_timestamp_format() -> String {
    "%c".to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            escape_timeout: default_escape_timeout(),
            welcome_message: default_welcome_message(),
            empty_line_marker: default_empty_line_marker(),
            unnamed_buffer_label: default_unnamed_buffer_label(),
            filename_display_width: default_filename_display_width(),
            timestamp_format: default_timestamp_format(),
        }
    }
}
