//! Terminal size detection
//!
//! Asks the OS first. Some terminals report zero columns (or the ioctl is
//! unavailable), so the fallback pushes the cursor into the bottom-right
//! corner and asks the terminal where it ended up.

use crate::input::source::ByteSource;
use crate::view::escape::{move_cursor_to_bottom_right, REQUEST_CURSOR_POSITION};
use anyhow::{bail, Context, Result};
use std::io::Write;
use std::time::Duration;

/// Longest cursor position report accepted, terminator excluded
const MAX_REPORT_LEN: usize = 31;

/// Terminal dimensions in character cells
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TerminalSize {
    pub rows: usize,
    pub cols: usize,
}

/// Determine the terminal size, falling back to a cursor position query.
pub fn window_size<S, W>(
    input: &mut S,
    output: &mut W,
    timeout: Duration,
) -> Result<TerminalSize>
where
    S: ByteSource + ?Sized,
    W: Write + ?Sized,
{
    match crossterm::terminal::size() {
        Ok((cols, rows)) if cols > 0 => {
            let size = TerminalSize {
                rows: rows as usize,
                cols: cols as usize,
            };
            tracing::debug!("Terminal size from OS: {:?}", size);
            Ok(size)
        }
        Ok(_) => {
            tracing::debug!("OS reported zero columns, querying terminal");
            query_window_size(input, output, timeout)
        }
        Err(e) => {
            tracing::debug!("Terminal size unavailable ({}), querying terminal", e);
            query_window_size(input, output, timeout)
        }
    }
}

/// Measure the terminal by moving the cursor to the far corner and reading
/// back its position.
pub fn query_window_size<S, W>(
    input: &mut S,
    output: &mut W,
    timeout: Duration,
) -> Result<TerminalSize>
where
    S: ByteSource + ?Sized,
    W: Write + ?Sized,
{
    let mut request = Vec::new();
    move_cursor_to_bottom_right(&mut request)?;
    request.extend_from_slice(REQUEST_CURSOR_POSITION);
    output
        .write_all(&request)
        .and_then(|()| output.flush())
        .context("requesting cursor position")?;

    let mut reply = Vec::with_capacity(MAX_REPORT_LEN);
    while reply.len() < MAX_REPORT_LEN {
        match input
            .read_byte_within(timeout)
            .context("reading cursor position report")?
        {
            Some(b'R') | None => break,
            Some(byte) => reply.push(byte),
        }
    }

    match parse_cursor_report(&reply) {
        Some((rows, cols)) => Ok(TerminalSize {
            rows: rows as usize,
            cols: cols as usize,
        }),
        None => bail!(
            "malformed cursor position report: {:?}",
            String::from_utf8_lossy(&reply)
        ),
    }
}

/// Parse `ESC [ <rows> ; <cols>` (the trailing `R` already stripped).
pub fn parse_cursor_report(reply: &[u8]) -> Option<(u16, u16)> {
    let body = reply.strip_prefix(b"\x1b[")?;
    let text = std::str::from_utf8(body).ok()?;
    let (rows, cols) = text.split_once(';')?;
    Some((rows.parse().ok()?, cols.parse().ok()?))
}
