// src/color.rs

//! Defines color-related enums (`NamedColor`, `Color`) and conversion to RGBA.

use serde::{Deserialize, Serialize};

/// Standard named colors used by the demo scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NamedColor {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Magenta,
    Cyan,
    White,
    Grey,
    BrightMagenta,
}

impl NamedColor {
    /// Returns the opaque `Color::Rgba` representation of this named color.
    pub fn to_rgba_color(self) -> Color {
        match self {
            NamedColor::Black => Color::Rgba(0, 0, 0, 255),
            NamedColor::Red => Color::Rgba(205, 0, 0, 255),
            NamedColor::Green => Color::Rgba(0, 205, 0, 255),
            NamedColor::Yellow => Color::Rgba(205, 205, 0, 255),
            NamedColor::Blue => Color::Rgba(0, 0, 238, 255),
            NamedColor::Magenta => Color::Rgba(205, 0, 205, 255),
            NamedColor::Cyan => Color::Rgba(0, 205, 205, 255),
            NamedColor::White => Color::Rgba(229, 229, 229, 255),
            NamedColor::Grey => Color::Rgba(127, 127, 127, 255),
            NamedColor::BrightMagenta => Color::Rgba(255, 0, 255, 255),
        }
    }
}

/// A color value as it appears in configuration and display objects.
///
/// Either a named color or explicit RGBA components. Drivers only ever see
/// the resolved components via [`Color::to_rgba`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Color {
    Named(NamedColor),
    Rgba(u8, u8, u8, u8),
}

impl Color {
    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Color::Rgba(r, g, b, 255)
    }

    /// Resolves to `(r, g, b, a)` components.
    pub fn to_rgba(self) -> (u8, u8, u8, u8) {
        match self {
            Color::Rgba(r, g, b, a) => (r, g, b, a),
            Color::Named(named) => named.to_rgba_color().to_rgba(),
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::Named(NamedColor::Black)
    }
}

impl From<Color> for sdl2::pixels::Color {
    fn from(color: Color) -> Self {
        let (r, g, b, a) = color.to_rgba();
        sdl2::pixels::Color::RGBA(r, g, b, a)
    }
}
