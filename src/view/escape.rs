//! Terminal control output.
//!
//! Sequences are queued as crossterm commands into a frame buffer. Cursor
//! home and attribute reset go out raw in their short forms (`ESC [ H`,
//! `ESC [ m`), which crossterm has no command for.

use crossterm::cursor::{MoveDown, MoveRight, MoveTo};
use crossterm::queue;
use crossterm::terminal::{Clear, ClearType};
use std::io::{self, Write};

pub const CURSOR_HOME: &[u8] = b"\x1b[H";
pub const RESET_ATTRIBUTES: &[u8] = b"\x1b[m";
/// Ask for a `ESC [ <row> ; <col> R` cursor position report
pub const REQUEST_CURSOR_POSITION: &[u8] = b"\x1b[6n";
pub const LINE_BREAK: &[u8] = b"\r\n";

fn to_cell(n: usize) -> u16 {
    u16::try_from(n).unwrap_or(u16::MAX)
}

/// Queue `ESC [ <row> ; <col> H` for a zero-based screen position
pub fn move_cursor_to(buf: &mut Vec<u8>, row: usize, col: usize) -> io::Result<()> {
    queue!(buf, MoveTo(to_cell(col), to_cell(row)))
}

/// Push the cursor as far right and down as the terminal allows
pub fn move_cursor_to_bottom_right(buf: &mut Vec<u8>) -> io::Result<()> {
    queue!(buf, MoveRight(999), MoveDown(999))
}

/// Clear the whole screen and home the cursor
pub fn clear_screen<W: Write + ?Sized>(out: &mut W) -> io::Result<()> {
    let mut buf = Vec::with_capacity(8);
    queue!(buf, Clear(ClearType::All))?;
    buf.extend_from_slice(CURSOR_HOME);
    out.write_all(&buf)?;
    out.flush()
}
