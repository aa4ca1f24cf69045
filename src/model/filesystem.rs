//! Filesystem abstraction used to load and save documents
//!
//! The editor only ever reads a whole file and writes a whole file, so the
//! trait is deliberately small:
//! - `StdFileSystem`: native filesystem using `std::fs`
//! - test doubles can keep files in memory or inject failures

use std::fs::OpenOptions;
use std::io::{self, Write};
use std::path::Path;

/// Whole-file persistence
pub trait FileSystem: Send + Sync {
    /// Read entire file into memory
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>>;

    /// Replace the file's content with exactly `data`
    fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()>;
}

/// Native filesystem implementation
#[derive(Debug, Clone, Copy, Default)]
pub struct StdFileSystem;

impl FileSystem for StdFileSystem {
    fn read_file(&self, path: &Path) -> io::Result<Vec<u8>> {
        std::fs::read(path)
    }

    /// Writes in place: open (creating with 0644), truncate to the new
    /// length, then write every byte.
    fn write_file(&self, path: &Path, data: &[u8]) -> io::Result<()> {
        let mut options = OpenOptions::new();
        options.read(true).write(true).create(true);
        #[cfg(unix)]
        {
            use std::os::unix::fs::OpenOptionsExt;
            options.mode(0o644);
        }
        let mut file = options.open(path)?;
        file.set_len(data.len() as u64)?;
        file.write_all(data)?;
        file.flush()
    }
}
