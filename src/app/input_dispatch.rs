//! Key dispatch: maps each decoded key to an editor operation.

use super::Editor;
use crate::input::key::Key;
use crate::model::cursor::Direction;

impl Editor {
    /// Apply one key. Returns `false` when the session should end.
    pub fn handle_key(&mut self, key: Key) -> bool {
        match key {
            Key::Ctrl(b'q') => return false,
            Key::Ctrl(b's') => self.save(),

            Key::ArrowUp => self.move_cursor(Direction::Up),
            Key::ArrowDown => self.move_cursor(Direction::Down),
            Key::ArrowLeft => self.move_cursor(Direction::Left),
            Key::ArrowRight => self.move_cursor(Direction::Right),

            Key::Home => self.move_to_line_start(),
            Key::End => self.move_to_line_end(),
            Key::PageUp => self.page_up(),
            Key::PageDown => self.page_down(),

            // Decoded but not editing operations in this editor.
            Key::Enter | Key::Backspace | Key::Delete => {
                tracing::trace!("Ignoring {:?}", key);
            }
            // Ctrl-L (redraw) needs nothing: every key is followed by a frame.
            Key::Escape | Key::Ctrl(_) => {}

            Key::Char(byte) => self.insert_char(byte),
        }
        true
    }
}
