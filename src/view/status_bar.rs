//! Status bar rendering
//!
//! One reverse-video line: filename and last-save time on the left, a
//! document size indicator on the right, spaces in between.

use super::escape::RESET_ATTRIBUTES;
use crossterm::queue;
use crossterm::style::{Attribute, SetAttribute};
use std::io;
use std::path::Path;

/// What the status bar shows
#[derive(Debug, Clone, Copy)]
pub struct StatusLine<'a> {
    pub filename: Option<&'a Path>,
    pub last_save: Option<&'a str>,
    pub row_count: usize,
}

/// Status bar styling knobs taken from the editor config
#[derive(Debug, Clone, Copy)]
pub struct StatusStyle<'a> {
    /// Shown instead of a filename when the buffer has none
    pub unnamed_label: &'a str,
    /// Maximum number of filename characters shown
    pub filename_width: usize,
}

/// Truncate `name` to at most `max_chars` characters
pub fn truncate_filename(name: &str, max_chars: usize) -> &str {
    match name.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &name[..byte_index],
        None => name,
    }
}

impl StatusLine<'_> {
    /// Left-aligned text
    pub fn left_text(&self, style: &StatusStyle<'_>) -> String {
        let name = self
            .filename
            .map(|path| path.display().to_string())
            .unwrap_or_else(|| style.unnamed_label.to_string());
        format!(
            " {} {}",
            truncate_filename(&name, style.filename_width),
            self.last_save.unwrap_or("")
        )
    }

    /// Right-aligned text
    pub fn right_text(&self) -> String {
        format!("{} lines ", self.row_count)
    }

    /// Append the status bar, exactly `width` cells wide, to `buf`.
    ///
    /// The left text is clipped to the width. The right text is drawn flush
    /// right only when it fits in what remains; otherwise the line is padded
    /// with spaces.
    pub fn render_into(
        &self,
        buf: &mut Vec<u8>,
        width: usize,
        style: &StatusStyle<'_>,
    ) -> io::Result<()> {
        queue!(buf, SetAttribute(Attribute::Reverse))?;

        let left = self.left_text(style);
        let left = &left.as_bytes()[..left.len().min(width)];
        buf.extend_from_slice(left);

        let right = self.right_text();
        let remaining = width - left.len();
        if right.len() <= remaining {
            buf.resize(buf.len() + remaining - right.len(), b' ');
            buf.extend_from_slice(right.as_bytes());
        } else {
            buf.resize(buf.len() + remaining, b' ');
        }

        buf.extend_from_slice(RESET_ATTRIBUTES);
        Ok(())
    }
}
