// src/keys.rs

use serde::{Deserialize, Serialize};

/// Represents a key symbol.
///
/// Only the keys the demo programs react to get their own variant; every
/// other key arrives as `Char` (when printable) or `Unknown`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum KeySymbol {
    Char(char),

    // Navigation keys
    Left,
    Right,
    Up,
    Down,

    Enter,
    Space,
    Escape,

    #[default]
    Unknown,
}

impl KeySymbol {
    /// Returns true for keys that cycle a selection.
    pub fn is_horizontal_arrow(&self) -> bool {
        matches!(self, KeySymbol::Left | KeySymbol::Right)
    }
}

impl From<sdl2::keyboard::Keycode> for KeySymbol {
    fn from(keycode: sdl2::keyboard::Keycode) -> Self {
        use sdl2::keyboard::Keycode;
        match keycode {
            Keycode::Left => KeySymbol::Left,
            Keycode::Right => KeySymbol::Right,
            Keycode::Up => KeySymbol::Up,
            Keycode::Down => KeySymbol::Down,
            Keycode::Return | Keycode::KpEnter => KeySymbol::Enter,
            Keycode::Space => KeySymbol::Space,
            Keycode::Escape => KeySymbol::Escape,
            other => {
                // Printable keycodes carry their character value.
                match char::from_u32(other as i32 as u32) {
                    Some(c) if !c.is_control() => KeySymbol::Char(c),
                    _ => KeySymbol::Unknown,
                }
            }
        }
    }
}
