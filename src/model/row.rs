//! A single line of editable text.
//!
//! A row owns its raw content bytes plus a render form derived from them.
//! The render form is what the screen renderer draws; it is rebuilt after
//! every mutation of the content, so the two are never observed out of sync.
//! Both buffers are private and only reachable through methods that keep
//! that invariant.

/// One line of text (no trailing newline)
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Row {
    content: Vec<u8>,
    render: Vec<u8>,
}

impl Row {
    /// Create an empty row
    pub fn empty() -> Self {
        Self::default()
    }

    /// Create a row from raw content bytes
    pub fn new(content: impl Into<Vec<u8>>) -> Self {
        let mut row = Self {
            content: content.into(),
            render: Vec::new(),
        };
        row.update_render();
        row
    }

    /// The stored bytes of this row
    pub fn content(&self) -> &[u8] {
        &self.content
    }

    /// The bytes drawn on screen for this row
    pub fn render(&self) -> &[u8] {
        &self.render
    }

    /// Length of the content in bytes
    pub fn len(&self) -> usize {
        self.content.len()
    }

    pub fn is_empty(&self) -> bool {
        self.content.is_empty()
    }

    /// Insert a byte at `at`, shifting the rest of the row right.
    ///
    /// An index past the end is clamped to the end of the row. Returns the
    /// index the byte actually landed at.
    pub fn insert(&mut self, at: usize, byte: u8) -> usize {
        let at = at.min(self.content.len());
        self.content.insert(at, byte);
        self.update_render();
        at
    }

    /// The part of the render form visible through a window starting at
    /// `col_offset` and `width` bytes wide.
    ///
    /// Returns an empty slice when the row is shorter than `col_offset`.
    pub fn visible_render(&self, col_offset: usize, width: usize) -> &[u8] {
        let start = col_offset.min(self.render.len());
        let end = start.saturating_add(width).min(self.render.len());
        &self.render[start..end]
    }

    // Render is an identity copy for now. Display-only expansions (tabs,
    // control characters) belong here so `content` is never touched.
    fn update_render(&mut self) {
        self.render.clear();
        self.render.extend_from_slice(&self.content);
    }
}
