//! The editing buffer: an ordered, append-only sequence of rows.
//!
//! Rows are never removed. The document grows when a file is loaded, when a
//! row is appended, or when a character is typed on the line just past the
//! last row.

use super::row::Row;
use std::io::{self, BufRead};

/// Ordered collection of rows; insertion order is line order
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Document {
    rows: Vec<Row>,
}

impl Document {
    /// Create an empty document
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a document from a list of row contents
    pub fn from_lines<I, L>(lines: I) -> Self
    where
        I: IntoIterator<Item = L>,
        L: Into<Vec<u8>>,
    {
        let mut document = Self::new();
        for line in lines {
            document.append_row(line);
        }
        document
    }

    /// Parse a byte slice into rows (see [`Document::load`])
    pub fn from_bytes(bytes: &[u8]) -> Self {
        // Reading from a slice cannot fail.
        Self::load(bytes).unwrap_or_default()
    }

    /// Read a byte stream into a new document.
    ///
    /// Lines end at `\n`, `\r\n` or a lone `\r`. Every trailing `\r`
    /// before a `\n` is stripped along with it, so `a\r\r\n` is the single
    /// row `a`. A final line without a terminator still becomes a row, and
    /// an empty stream yields an empty document. Other bytes are kept
    /// exactly as read, with no encoding transformation.
    pub fn load<R: BufRead>(mut reader: R) -> io::Result<Self> {
        let mut document = Self::new();
        let mut line = Vec::new();
        loop {
            line.clear();
            if reader.read_until(b'\n', &mut line)? == 0 {
                break;
            }
            while matches!(line.last(), Some(b'\n' | b'\r')) {
                line.pop();
            }
            for segment in line.split(|&b| b == b'\r') {
                document.append_row(segment);
            }
        }
        tracing::debug!("Loaded {} rows", document.row_count());
        Ok(document)
    }

    /// Append a new row at the end of the document
    pub fn append_row(&mut self, bytes: impl Into<Vec<u8>>) {
        self.rows.push(Row::new(bytes));
    }

    /// Insert `byte` at (`line`, `column`).
    ///
    /// When `line` is one past the last row an empty row is appended first,
    /// so typing on the append line creates a new row. A `column` beyond the
    /// row's length is clamped to the end of the row. Returns the column the
    /// byte was inserted at.
    pub fn insert_char(&mut self, line: usize, column: usize, byte: u8) -> usize {
        debug_assert!(line <= self.rows.len(), "line {} out of range", line);
        let line = line.min(self.rows.len());
        if line == self.rows.len() {
            self.append_row(Vec::new());
        }
        self.rows[line].insert(column, byte)
    }

    /// Join every row's content with a `\n` after each row, the last
    /// included.
    pub fn serialize(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.serialized_len());
        for row in &self.rows {
            bytes.extend_from_slice(row.content());
            bytes.push(b'\n');
        }
        bytes
    }

    /// Exact length of [`Document::serialize`] output
    pub fn serialized_len(&self) -> usize {
        self.rows.iter().map(|row| row.len() + 1).sum()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row(&self, line: usize) -> Option<&Row> {
        self.rows.get(line)
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    /// Content length of `line`, or 0 when there is no row there
    pub fn line_len(&self, line: usize) -> usize {
        self.rows.get(line).map(Row::len).unwrap_or(0)
    }
}
