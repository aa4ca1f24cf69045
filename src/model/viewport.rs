//! Scrolling window onto the document.
//!
//! Tracks which slice of lines and columns is on screen and scrolls just far
//! enough to keep the cursor visible.

use super::cursor::Cursor;
use std::ops::Range;

/// The visible window into the document
///
/// `rows`/`cols` are the size of the text area (the status line is not
/// included). After [`Viewport::scroll`] the cursor is inside
/// `row_offset..row_offset + rows` and `col_offset..col_offset + cols`
/// whenever the respective extent is non-zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Viewport {
    /// First document line shown
    pub row_offset: usize,
    /// First content column shown
    pub col_offset: usize,
    /// Number of text rows on screen
    pub rows: usize,
    /// Number of columns on screen
    pub cols: usize,
}

impl Viewport {
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            row_offset: 0,
            col_offset: 0,
            rows,
            cols,
        }
    }

    /// Shift the offsets by the least amount that brings `cursor` into view
    pub fn scroll(&mut self, cursor: &Cursor) {
        if cursor.line < self.row_offset {
            self.row_offset = cursor.line;
        }
        if self.rows > 0 && cursor.line >= self.row_offset + self.rows {
            self.row_offset = cursor.line + 1 - self.rows;
        }

        if cursor.column < self.col_offset {
            self.col_offset = cursor.column;
        }
        if self.cols > 0 && cursor.column >= self.col_offset + self.cols {
            self.col_offset = cursor.column + 1 - self.cols;
        }
    }

    /// Document lines covered by the screen rows
    pub fn visible_lines(&self) -> Range<usize> {
        self.row_offset..self.row_offset + self.rows
    }

    /// Whether `cursor` lies inside the visible band
    pub fn contains(&self, cursor: &Cursor) -> bool {
        self.visible_lines().contains(&cursor.line)
            && (self.col_offset..self.col_offset + self.cols).contains(&cursor.column)
    }

    /// Zero-based screen (row, column) of `cursor`
    pub fn screen_position(&self, cursor: &Cursor) -> (usize, usize) {
        (
            cursor.line.saturating_sub(self.row_offset),
            cursor.column.saturating_sub(self.col_offset),
        )
    }
}
