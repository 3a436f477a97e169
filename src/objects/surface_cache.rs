// src/objects/surface_cache.rs

//! Lazily rasterized surface and texture for one text string.
//!
//! Rasterization is expensive next to a per-frame texture copy, so each
//! distinct string is rasterized and uploaded once and then reused until the
//! text changes.

use crate::color::Color;
use crate::display::{DisplayDriver, PixelSurface, Point, Rect};
use crate::rasterizer::FontDriver;
use log::{trace, warn};

/// Cached surface/texture pair.
///
/// Invariant: `texture` is `Some` only if `surface` is `Some`, and both were
/// produced from the current `text`.
pub struct SurfaceCache<D: DisplayDriver> {
    text: String,
    stale: bool,
    surface: Option<D::Surface>,
    texture: Option<D::Texture>,
}

impl<D: DisplayDriver> Default for SurfaceCache<D> {
    fn default() -> Self {
        Self::new()
    }
}

impl<D: DisplayDriver> SurfaceCache<D> {
    pub fn new() -> Self {
        Self {
            text: String::new(),
            stale: false,
            surface: None,
            texture: None,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn has_surface(&self) -> bool {
        self.surface.is_some()
    }

    pub fn has_texture(&self) -> bool {
        self.texture.is_some()
    }

    /// Replaces the text and releases the cached resources.
    ///
    /// Nothing is rasterized until the next [`render`](Self::render), so
    /// several calls within one frame only ever rasterize the last string.
    /// Setting the text it already holds keeps the cache.
    pub fn set_text(&mut self, text: &str) {
        if text == self.text {
            return;
        }
        self.release();
        self.text.clear();
        self.text.push_str(text);
        self.stale = true;
    }

    /// Releases texture and surface. Safe when neither exists.
    ///
    /// The text is kept; a later render regenerates both.
    pub fn release(&mut self) {
        // Texture first: it was derived from the surface.
        self.texture = None;
        self.surface = None;
        self.stale = !self.text.is_empty();
    }

    /// Draws the cached text at `origin`, rasterizing and uploading first if
    /// needed. Failures are logged and retried on the next call.
    pub fn render<F>(&mut self, driver: &mut D, font: &F, color: Color, origin: Point)
    where
        F: FontDriver<Surface = D::Surface>,
    {
        if self.stale {
            if self.text.is_empty() {
                self.stale = false;
            } else {
                match font.render_text(&self.text, color) {
                    Ok(surface) => {
                        trace!("SurfaceCache: rasterized '{}'", self.text);
                        self.surface = Some(surface);
                        self.stale = false;
                    }
                    Err(e) => {
                        warn!("SurfaceCache: {:#}", e);
                        return;
                    }
                }
            }
        }

        let Some(surface) = self.surface.as_ref() else {
            return;
        };

        if self.texture.is_none() {
            match driver.create_texture(surface) {
                Ok(texture) => self.texture = Some(texture),
                Err(e) => {
                    warn!("SurfaceCache: skipping '{}' this frame: {:#}", self.text, e);
                    return;
                }
            }
        }

        let (width, height) = surface.size();
        if let Some(texture) = self.texture.as_ref() {
            let dst = Rect {
                x: origin.x,
                y: origin.y,
                width,
                height,
            };
            if let Err(e) = driver.copy_texture(texture, dst) {
                warn!("SurfaceCache: {:#}", e);
            }
        }
    }
}
