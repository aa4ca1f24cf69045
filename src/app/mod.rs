//! The editor session
//!
//! `Editor` owns everything one editing session touches: the document, the
//! cursor and viewport, the associated file, and the services used to save
//! it. The edit loop alternates between drawing a frame and applying one
//! decoded key.

mod input_dispatch;

use crate::config::Config;
use crate::input::decoder::KeyDecoder;
use crate::input::source::ByteSource;
use crate::model::cursor::{Cursor, Direction};
use crate::model::document::Document;
use crate::model::filesystem::{FileSystem, StdFileSystem};
use crate::model::viewport::Viewport;
use crate::services::time_source::{RealTimeSource, SharedTimeSource};
use crate::view::escape::clear_screen;
use crate::view::render::{render_frame, FrameContext};
use crate::view::status_bar::StatusLine;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// One editing session
pub struct Editor {
    document: Document,
    cursor: Cursor,
    viewport: Viewport,

    /// File the document is saved to
    filename: Option<PathBuf>,

    /// Formatted time of the last successful save
    last_save: Option<String>,

    config: Config,
    filesystem: Arc<dyn FileSystem>,
    time_source: SharedTimeSource,
}

impl Editor {
    /// Create an editor for a terminal of `terminal_rows` x `terminal_cols`.
    ///
    /// The bottom row is reserved for the status bar.
    pub fn new(terminal_rows: usize, terminal_cols: usize, config: Config) -> Self {
        Self::with_services(
            terminal_rows,
            terminal_cols,
            config,
            Arc::new(StdFileSystem),
            RealTimeSource::shared(),
        )
    }

    /// Create an editor with explicit persistence and clock services.
    pub fn with_services(
        terminal_rows: usize,
        terminal_cols: usize,
        config: Config,
        filesystem: Arc<dyn FileSystem>,
        time_source: SharedTimeSource,
    ) -> Self {
        let visible_rows = terminal_rows.saturating_sub(1);
        tracing::debug!(
            "Editor viewport {}x{} (terminal {}x{})",
            visible_rows,
            terminal_cols,
            terminal_rows,
            terminal_cols
        );
        Self {
            document: Document::new(),
            cursor: Cursor::default(),
            viewport: Viewport::new(visible_rows, terminal_cols),
            filename: None,
            last_save: None,
            config,
            filesystem,
            time_source,
        }
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    pub fn cursor(&self) -> &Cursor {
        &self.cursor
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    pub fn filename(&self) -> Option<&Path> {
        self.filename.as_deref()
    }

    pub fn last_save(&self) -> Option<&str> {
        self.last_save.as_deref()
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Load `path` and bind the session to it.
    ///
    /// A file that does not exist yet opens as an empty document; the first
    /// save creates it. Any other read error is returned.
    pub fn open(&mut self, path: impl Into<PathBuf>) -> io::Result<()> {
        let path = path.into();
        let document = match self.filesystem.read_file(&path) {
            Ok(bytes) => Document::load(bytes.as_slice())?,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!("{} does not exist yet, starting empty", path.display());
                Document::new()
            }
            Err(e) => return Err(e),
        };

        tracing::debug!(
            "Opened {} ({} rows)",
            path.display(),
            document.row_count()
        );
        self.document = document;
        self.cursor = Cursor::default();
        self.viewport.row_offset = 0;
        self.viewport.col_offset = 0;
        self.filename = Some(path);
        Ok(())
    }

    /// Insert `byte` at the cursor and advance past it.
    ///
    /// On the append line a new empty row is created first.
    pub fn insert_char(&mut self, byte: u8) {
        let at = self
            .document
            .insert_char(self.cursor.line, self.cursor.column, byte);
        self.cursor.column = at + 1;
    }

    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor.move_in(direction, &self.document);
    }

    pub fn move_to_line_start(&mut self) {
        self.cursor.move_to_line_start();
    }

    pub fn move_to_line_end(&mut self) {
        self.cursor.move_to_line_end(&self.document);
    }

    /// Jump to the top of the screen, then up one screenful.
    pub fn page_up(&mut self) {
        self.cursor.line = self.viewport.row_offset;
        for _ in 0..self.viewport.rows {
            self.move_cursor(Direction::Up);
        }
        self.cursor.clamp_to(&self.document);
    }

    /// Jump to the bottom of the screen, then down one screenful.
    pub fn page_down(&mut self) {
        let bottom = (self.viewport.row_offset + self.viewport.rows).saturating_sub(1);
        self.cursor.line = bottom.min(self.document.row_count());
        for _ in 0..self.viewport.rows {
            self.move_cursor(Direction::Down);
        }
        self.cursor.clamp_to(&self.document);
    }

    /// Write the document to the associated file.
    ///
    /// Without a filename this does nothing. A failed write is logged and
    /// leaves the last-save time unchanged.
    pub fn save(&mut self) {
        let Some(path) = self.filename.as_deref() else {
            tracing::debug!("No filename, not saving");
            return;
        };

        let data = self.document.serialize();
        match self.filesystem.write_file(path, &data) {
            Ok(()) => {
                self.last_save = Some(self.time_source.timestamp(&self.config.timestamp_format));
                tracing::debug!("Saved {} bytes to {}", data.len(), path.display());
            }
            Err(e) => {
                tracing::warn!("Failed to save {}: {}", path.display(), e);
            }
        }
    }

    /// Build the next frame, scrolling the viewport to the cursor first.
    pub fn render(&mut self) -> io::Result<Vec<u8>> {
        debug_assert!(self.cursor.is_within(&self.document));
        self.viewport.scroll(&self.cursor);
        render_frame(&FrameContext {
            document: &self.document,
            cursor: &self.cursor,
            viewport: &self.viewport,
            status: StatusLine {
                filename: self.filename.as_deref(),
                last_save: self.last_save.as_deref(),
                row_count: self.document.row_count(),
            },
            config: &self.config,
        })
    }

    /// Draw one frame to `out` in a single write.
    pub fn refresh_screen<W: Write + ?Sized>(&mut self, out: &mut W) -> io::Result<()> {
        let frame = self.render()?;
        out.write_all(&frame)?;
        out.flush()
    }

    /// Run the edit loop until quit or end of input.
    ///
    /// On quit the screen is cleared and the cursor homed.
    pub fn run<S, W>(&mut self, decoder: &mut KeyDecoder<S>, out: &mut W) -> io::Result<()>
    where
        S: ByteSource,
        W: Write + ?Sized,
    {
        loop {
            self.refresh_screen(out)?;

            let Some(key) = decoder.read_key()? else {
                tracing::debug!("Input ended");
                return Ok(());
            };

            if !self.handle_key(key) {
                tracing::debug!("Quit requested");
                return clear_screen(out);
            }
        }
    }
}
