//! SDL_ttf font driver.
//!
//! The font is opened from an in-memory buffer, so the buffer must outlive
//! the driver (`'r`), and the TTF context must outlive both (`'ttf`).

use crate::color::Color;
use crate::rasterizer::font_driver::FontDriver;
use anyhow::{anyhow, Context, Result};
use log::info;
use sdl2::rwops::RWops;
use sdl2::surface::Surface;
use sdl2::ttf::{Font, Sdl2TtfContext};
use std::path::Path;

/// Reads a font file into memory.
pub fn read_font_bytes(path: &Path) -> Result<Vec<u8>> {
    std::fs::read(path).with_context(|| format!("Failed to read font '{}'", path.display()))
}

pub struct SdlFontDriver<'ttf, 'r> {
    font: Font<'ttf, 'r>,
}

impl<'ttf, 'r> SdlFontDriver<'ttf, 'r> {
    /// Opens the font in `bytes` at `point_size`.
    pub fn from_bytes(ttf: &'ttf Sdl2TtfContext, bytes: &'r [u8], point_size: u16) -> Result<Self> {
        let rwops = RWops::from_bytes(bytes).map_err(|e| anyhow!("Failed to wrap font: {}", e))?;
        let font = ttf
            .load_font_from_rwops(rwops, point_size)
            .map_err(|e| anyhow!("Failed to open font: {}", e))?;
        info!(
            "Font loaded: {} {} at {} pt",
            font.face_family_name().unwrap_or_default(),
            font.face_style_name().unwrap_or_default(),
            point_size
        );
        Ok(Self { font })
    }
}

impl FontDriver for SdlFontDriver<'_, '_> {
    type Surface = Surface<'static>;

    fn render_text(&self, text: &str, color: Color) -> Result<Surface<'static>> {
        self.font
            .render(text)
            .blended(sdl2::pixels::Color::from(color))
            .with_context(|| format!("Failed to render text '{}'", text))
    }
}
