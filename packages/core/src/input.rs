//! Keyboard command mapping shared by every learning screen: arrows
//! navigate, space shuffles, a letter jumps to the first item starting
//! with it, a digit jumps to that number ('0' means ten).

use crate::catalog::Catalog;
use crate::session::{Direction, SessionInput};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Key {
    Left,
    Right,
    Space,
    Char(char),
}

/// Resolve a key press against the catalog. `None` for keys the player
/// does not handle.
pub fn session_input_for_key(key: Key, catalog: &Catalog) -> Option<SessionInput> {
    match key {
        Key::Left => Some(SessionInput::Advance(Direction::Previous)),
        Key::Right => Some(SessionInput::Advance(Direction::Next)),
        Key::Space => Some(SessionInput::ShuffleAdvance),
        Key::Char(c) if c.is_ascii_digit() => {
            let target = if c == '0' {
                "10".to_string()
            } else {
                c.to_string()
            };
            catalog.find_by_display(&target).map(SessionInput::Select)
        }
        Key::Char(c) if c.is_ascii_alphabetic() => {
            catalog.find_by_prefix(c).map(SessionInput::Select)
        }
        Key::Char(_) => None,
    }
}
