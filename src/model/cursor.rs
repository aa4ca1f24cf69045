//! Cursor position and movement over a document

use super::document::Document;

/// Direction of a single-step cursor movement
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

/// Logical insertion point in content space (not render space)
///
/// `line` ranges over `0..=row_count`; the line one past the last row is the
/// append position. `column` ranges over `0..=len` of the row at `line`, and
/// is 0 on the append line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Cursor {
    pub line: usize,
    pub column: usize,
}

impl Cursor {
    pub fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }

    /// Move one step in `direction`.
    ///
    /// Left at column 0 wraps to the end of the previous line; right at the
    /// end of a row wraps to the start of the next line (which may be the
    /// append line). Vertical moves clamp the line to `0..=row_count`. After
    /// any move the column is clamped to the target row's length; the
    /// previous column is not remembered.
    pub fn move_in(&mut self, direction: Direction, document: &Document) {
        let row_count = document.row_count();
        match direction {
            Direction::Left => {
                if self.column > 0 {
                    self.column -= 1;
                } else if self.line > 0 {
                    self.line -= 1;
                    self.column = document.line_len(self.line);
                }
            }
            Direction::Right => {
                if let Some(row) = document.row(self.line) {
                    if self.column < row.len() {
                        self.column += 1;
                    } else {
                        self.line += 1;
                        self.column = 0;
                    }
                }
            }
            Direction::Up => {
                self.line = self.line.saturating_sub(1);
            }
            Direction::Down => {
                if self.line < row_count {
                    self.line += 1;
                }
            }
        }
        self.clamp_to(document);
    }

    /// Snap the cursor back inside the document
    pub fn clamp_to(&mut self, document: &Document) {
        self.line = self.line.min(document.row_count());
        self.column = self.column.min(document.line_len(self.line));
    }

    pub fn move_to_line_start(&mut self) {
        self.column = 0;
    }

    /// Move to the end of the current row; no-op on the append line
    pub fn move_to_line_end(&mut self, document: &Document) {
        if let Some(row) = document.row(self.line) {
            self.column = row.len();
        }
    }

    /// Whether the cursor satisfies its bounds against `document`
    pub fn is_within(&self, document: &Document) -> bool {
        self.line <= document.row_count() && self.column <= document.line_len(self.line)
    }
}
