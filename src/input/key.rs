//! Logical key events produced by the decoder

/// A decoded keypress
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// Any byte without a named meaning, inserted as-is
    Char(u8),
    /// Ctrl plus a letter, stored as the lowercase letter (`Ctrl(b'q')`)
    Ctrl(u8),
    Enter,
    Backspace,
    /// A lone ESC, or an escape sequence that was not recognized
    Escape,
    ArrowLeft,
    ArrowRight,
    ArrowUp,
    ArrowDown,
    Delete,
    Home,
    End,
    PageUp,
    PageDown,
}

const ESC: u8 = 0x1b;
const TAB: u8 = b'\t';
const LINE_FEED: u8 = b'\n';
const CARRIAGE_RETURN: u8 = b'\r';
const CTRL_H: u8 = 0x08;
const DEL: u8 = 0x7f;

impl Key {
    /// Classify a single byte that does not start an escape sequence.
    ///
    /// Returns `None` for ESC, which the decoder handles separately.
    pub fn from_byte(byte: u8) -> Option<Key> {
        let key = match byte {
            ESC => return None,
            CARRIAGE_RETURN | LINE_FEED => Key::Enter,
            DEL | CTRL_H => Key::Backspace,
            TAB => Key::Char(TAB),
            0x01..=0x1a => Key::Ctrl(byte + b'a' - 1),
            _ => Key::Char(byte),
        };
        Some(key)
    }

    /// The Ctrl+letter event for `letter`, mirroring what the terminal sends
    /// for that chord.
    pub const fn ctrl(letter: u8) -> Key {
        Key::Ctrl(letter.to_ascii_lowercase())
    }
}
