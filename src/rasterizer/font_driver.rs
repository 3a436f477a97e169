//! Font rasterization primitives.
//!
//! This module defines the `FontDriver` trait, a thin wrapper around the
//! platform font API (SDL_ttf in production, a headless stand-in for tests).

use crate::color::Color;
use anyhow::Result;

/// Platform-specific font driver trait.
///
/// A font driver is a loaded font at a fixed point size. It is shared
/// read-only by every text label that uses it.
pub trait FontDriver {
    /// Pixel surface produced by rasterization.
    type Surface;

    /// Rasterize `text` in `color` to a new surface.
    ///
    /// # Arguments
    /// * `text` - Non-empty string to render on one line
    /// * `color` - Foreground color; the background is transparent
    ///
    /// # Returns
    /// A surface sized to the rendered text, or an error if rasterization fails
    fn render_text(&self, text: &str, color: Color) -> Result<Self::Surface>;
}
