//! Full-screen frame rendering.
//!
//! A frame is built into one growable buffer and handed to the terminal in a
//! single write, so the screen never shows a half-drawn state:
//! 1. hide the cursor and home it
//! 2. one line per text row: visible slice of the row, `~` past the end of
//!    the document, or the welcome message on an empty document
//! 3. the status bar
//! 4. place the cursor and show it

use super::escape::{move_cursor_to, CURSOR_HOME, LINE_BREAK};
use super::status_bar::{StatusLine, StatusStyle};
use crate::config::Config;
use crate::model::cursor::Cursor;
use crate::model::document::Document;
use crate::model::viewport::Viewport;
use crossterm::cursor::{Hide, Show};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use std::io;

/// Everything a frame is drawn from
#[derive(Debug, Clone, Copy)]
pub struct FrameContext<'a> {
    pub document: &'a Document,
    pub cursor: &'a Cursor,
    pub viewport: &'a Viewport,
    pub status: StatusLine<'a>,
    pub config: &'a Config,
}

/// Build one complete frame.
///
/// The viewport is expected to have been scrolled to the cursor already.
pub fn render_frame(ctx: &FrameContext<'_>) -> io::Result<Vec<u8>> {
    let viewport = ctx.viewport;
    // Rough upper bound: every cell plus per-line escapes.
    let mut buf = Vec::with_capacity((viewport.rows + 1) * (viewport.cols + 8) + 32);

    queue!(buf, Hide)?;
    buf.extend_from_slice(CURSOR_HOME);

    draw_rows(&mut buf, ctx)?;

    let style = StatusStyle {
        unnamed_label: &ctx.config.unnamed_buffer_label,
        filename_width: ctx.config.filename_display_width,
    };
    ctx.status.render_into(&mut buf, viewport.cols, &style)?;

    let (row, col) = viewport.screen_position(ctx.cursor);
    move_cursor_to(&mut buf, row, col)?;
    queue!(buf, Show)?;

    Ok(buf)
}

fn draw_rows(buf: &mut Vec<u8>, ctx: &FrameContext<'_>) -> io::Result<()> {
    let viewport = ctx.viewport;
    let document = ctx.document;
    let welcome_row = viewport.rows / 3;

    for screen_row in 0..viewport.rows {
        let line = screen_row + viewport.row_offset;
        match document.row(line) {
            Some(row) => {
                buf.extend_from_slice(row.visible_render(viewport.col_offset, viewport.cols));
            }
            None if document.is_empty() && screen_row == welcome_row => {
                draw_welcome(buf, ctx.config, viewport.cols);
            }
            None => buf.push(ctx.config.empty_line_marker),
        }

        queue!(buf, Clear(ClearType::UntilNewLine))?;
        buf.extend_from_slice(LINE_BREAK);
    }
    Ok(())
}

/// Centered welcome message, truncated to the screen width
fn draw_welcome(buf: &mut Vec<u8>, config: &Config, cols: usize) {
    let message = config.welcome_message.as_bytes();
    let message = &message[..message.len().min(cols)];

    let mut padding = (cols - message.len()) / 2;
    if padding > 0 {
        buf.push(config.empty_line_marker);
        padding -= 1;
    }
    buf.resize(buf.len() + padding, b' ');
    buf.extend_from_slice(message);
}
