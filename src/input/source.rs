//! Byte sources feeding the key decoder
//!
//! The decoder needs two kinds of reads: a blocking read for the first byte
//! of a keypress, and a bounded wait for the rest of an escape sequence so a
//! lone ESC can be told apart from the start of a longer sequence.

use std::io::{self, Read};
use std::time::Duration;

/// A stream of raw input bytes
pub trait ByteSource {
    /// Block until a byte arrives. `Ok(None)` means the input has ended.
    fn read_byte(&mut self) -> io::Result<Option<u8>>;

    /// Wait at most `timeout` for a byte. `Ok(None)` means nothing arrived
    /// in time (or the input has ended).
    fn read_byte_within(&mut self, timeout: Duration) -> io::Result<Option<u8>>;
}

impl<S: ByteSource + ?Sized> ByteSource for &mut S {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        (**self).read_byte()
    }

    fn read_byte_within(&mut self, timeout: Duration) -> io::Result<Option<u8>> {
        (**self).read_byte_within(timeout)
    }
}

/// Adapts any reader into a byte source.
///
/// Reads never time out: a bounded read simply reads the next byte, and end
/// of input stands in for an expired wait. Suited to scripted input and
/// piped streams.
#[derive(Debug)]
pub struct ReaderSource<R> {
    reader: R,
}

impl<R: Read> ReaderSource<R> {
    pub fn new(reader: R) -> Self {
        Self { reader }
    }

    pub fn into_inner(self) -> R {
        self.reader
    }
}

impl<R: Read> ByteSource for ReaderSource<R> {
    fn read_byte(&mut self) -> io::Result<Option<u8>> {
        read_one(&mut self.reader)
    }

    fn read_byte_within(&mut self, _timeout: Duration) -> io::Result<Option<u8>> {
        read_one(&mut self.reader)
    }
}

/// Read a single byte, retrying on interruption
fn read_one<R: Read + ?Sized>(reader: &mut R) -> io::Result<Option<u8>> {
    let mut byte = [0u8; 1];
    loop {
        match reader.read(&mut byte) {
            Ok(0) => return Ok(None),
            Ok(_) => return Ok(Some(byte[0])),
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(e) => return Err(e),
        }
    }
}

#[cfg(unix)]
pub use self::unix::TerminalInput;

#[cfg(unix)]
mod unix {
    use super::{read_one, ByteSource};
    use nix::errno::Errno;
    use nix::poll::{poll, PollFd, PollFlags, PollTimeout};
    use std::fs::File;
    use std::io;
    use std::os::fd::AsFd;
    use std::time::Duration;

    /// Unbuffered reader over the controlling terminal.
    ///
    /// Holds its own duplicate of the stdin descriptor so no userspace
    /// buffer can hide bytes from `poll(2)`.
    #[derive(Debug)]
    pub struct TerminalInput {
        tty: File,
    }

    impl TerminalInput {
        pub fn from_stdin() -> io::Result<Self> {
            let fd = io::stdin().as_fd().try_clone_to_owned()?;
            Ok(Self {
                tty: File::from(fd),
            })
        }

        /// Whether a byte is ready within `timeout`
        fn wait_readable(&self, timeout: Duration) -> io::Result<bool> {
            let millis = u16::try_from(timeout.as_millis()).unwrap_or(u16::MAX);
            let mut fds = [PollFd::new(self.tty.as_fd(), PollFlags::POLLIN)];
            loop {
                match poll(&mut fds, PollTimeout::from(millis)) {
                    Ok(ready) => return Ok(ready > 0),
                    Err(Errno::EINTR) => continue,
                    Err(errno) => return Err(io::Error::from(errno)),
                }
            }
        }
    }

    impl ByteSource for TerminalInput {
        fn read_byte(&mut self) -> io::Result<Option<u8>> {
            loop {
                match read_one(&mut self.tty) {
                    Err(e) if e.kind() == io::ErrorKind::WouldBlock => continue,
                    other => return other,
                }
            }
        }

        fn read_byte_within(&mut self, timeout: Duration) -> io::Result<Option<u8>> {
            if !self.wait_readable(timeout)? {
                return Ok(None);
            }
            self.read_byte()
        }
    }
}
