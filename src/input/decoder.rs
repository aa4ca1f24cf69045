//! Escape sequence decoder for raw terminal input.
//!
//! Turns raw bytes into [`Key`] events:
//! - Single bytes (printable, control chords, Enter, Backspace)
//! - CSI sequences: `ESC [ A..D`, `ESC [ H`, `ESC [ F`
//! - CSI tilde sequences: `ESC [ <digit> ~`
//! - SS3 sequences: `ESC O H`, `ESC O F`
//!
//! Decoding is a pure state machine ([`step`]) driven by a blocking reader
//! ([`KeyDecoder`]). A short wait after ESC tells a lone ESC apart from the
//! start of a sequence. Each key starts from [`DecodeState::Ground`], so a
//! byte arriving late never corrupts the next decode; unknown sequences are
//! absorbed as a single [`Key::Escape`].

use super::key::Key;
use super::source::ByteSource;
use std::io;
use std::time::Duration;

const ESC: u8 = 0x1b;

/// Position inside an escape sequence
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DecodeState {
    #[default]
    Ground,
    /// Read `ESC`
    SawEsc,
    /// Read `ESC [`
    SawBracket,
    /// Read `ESC [ <digit>`
    SawBracketDigit(u8),
    /// Read `ESC O`
    SawSs3,
}

/// Outcome of feeding one byte to the state machine
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    /// More bytes are needed
    Pending(DecodeState),
    /// A complete key was decoded
    Emit(Key),
}

/// Advance the decoder by one byte
pub fn step(state: DecodeState, byte: u8) -> Step {
    match state {
        DecodeState::Ground => match Key::from_byte(byte) {
            Some(key) => Step::Emit(key),
            None => Step::Pending(DecodeState::SawEsc),
        },
        DecodeState::SawEsc => match byte {
            b'[' => Step::Pending(DecodeState::SawBracket),
            b'O' => Step::Pending(DecodeState::SawSs3),
            _ => Step::Emit(Key::Escape),
        },
        DecodeState::SawBracket => {
            if byte.is_ascii_digit() {
                Step::Pending(DecodeState::SawBracketDigit(byte))
            } else {
                Step::Emit(csi_letter_key(byte).unwrap_or(Key::Escape))
            }
        }
        DecodeState::SawBracketDigit(digit) => match byte {
            b'~' => Step::Emit(tilde_key(digit).unwrap_or(Key::Escape)),
            _ => Step::Emit(Key::Escape),
        },
        DecodeState::SawSs3 => Step::Emit(ss3_key(byte).unwrap_or(Key::Escape)),
    }
}

/// Key to emit when input stops while in `state`
pub fn on_timeout(state: DecodeState) -> Option<Key> {
    match state {
        DecodeState::Ground => None,
        _ => Some(Key::Escape),
    }
}

/// `ESC [ <letter>`
fn csi_letter_key(letter: u8) -> Option<Key> {
    match letter {
        b'A' => Some(Key::ArrowUp),
        b'B' => Some(Key::ArrowDown),
        b'C' => Some(Key::ArrowRight),
        b'D' => Some(Key::ArrowLeft),
        b'H' => Some(Key::Home),
        b'F' => Some(Key::End),
        _ => None,
    }
}

/// `ESC [ <digit> ~`
fn tilde_key(digit: u8) -> Option<Key> {
    match digit {
        b'1' | b'7' => Some(Key::Home),
        b'3' => Some(Key::Delete),
        b'4' | b'8' => Some(Key::End),
        b'5' => Some(Key::PageUp),
        b'6' => Some(Key::PageDown),
        _ => None,
    }
}

/// `ESC O <letter>`
fn ss3_key(letter: u8) -> Option<Key> {
    match letter {
        b'H' => Some(Key::Home),
        b'F' => Some(Key::End),
        _ => None,
    }
}

/// Default wait for the rest of an escape sequence
pub const DEFAULT_ESCAPE_TIMEOUT: Duration = Duration::from_millis(100);

/// Blocking key reader over a [`ByteSource`]
///
/// Also an iterator: each item is the next key, and iteration ends when the
/// source is exhausted.
#[derive(Debug)]
pub struct KeyDecoder<S> {
    source: S,
    escape_timeout: Duration,
}

impl<S: ByteSource> KeyDecoder<S> {
    pub fn new(source: S) -> Self {
        Self::with_escape_timeout(source, DEFAULT_ESCAPE_TIMEOUT)
    }

    pub fn with_escape_timeout(source: S, escape_timeout: Duration) -> Self {
        Self {
            source,
            escape_timeout,
        }
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    /// Block until one key is decoded. `Ok(None)` once input has ended.
    pub fn read_key(&mut self) -> io::Result<Option<Key>> {
        let Some(first) = self.source.read_byte()? else {
            return Ok(None);
        };

        let mut state = match step(DecodeState::Ground, first) {
            Step::Emit(key) => return Ok(Some(key)),
            Step::Pending(state) => state,
        };

        loop {
            let Some(byte) = self.source.read_byte_within(self.escape_timeout)? else {
                tracing::trace!("Escape sequence cut short in {:?}", state);
                return Ok(on_timeout(state));
            };
            match step(state, byte) {
                Step::Emit(key) => return Ok(Some(key)),
                Step::Pending(next) => state = next,
            }
        }
    }
}

impl<S: ByteSource> Iterator for KeyDecoder<S> {
    type Item = io::Result<Key>;

    fn next(&mut self) -> Option<Self::Item> {
        self.read_key().transpose()
    }
}

/// Decode a complete byte string (used for scripted input)
pub fn decode_all(bytes: &[u8]) -> io::Result<Vec<Key>> {
    KeyDecoder::new(super::source::ReaderSource::new(bytes)).collect()
}
