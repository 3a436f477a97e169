// src/display/driver.rs
//! DisplayDriver trait - minimal RISC interface for the drawing primitives
//! the display objects need.
//!
//! All caching and layout lives in the display objects; a driver only knows
//! how to clear, upload a surface, copy a texture, fill a circle and present.
//!
//! ## Lifecycle
//! 1. Construction - window and renderer already exist (fatal on failure)
//! 2. Per frame: `clear` → draw calls → `present`
//! 3. `Drop` - textures are owned by display objects and released there;
//!    the driver releases the renderer itself

use crate::color::Color;
use anyhow::Result;

/// A position in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// A destination rectangle in window pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: u32,
    pub height: u32,
}

/// A rasterized pixel buffer with a natural size.
pub trait PixelSurface {
    /// Width and height in pixels.
    fn size(&self) -> (u32, u32);
}

/// Minimal platform-specific display driver interface.
pub trait DisplayDriver {
    /// In-memory pixel buffer produced by text rasterization.
    type Surface: PixelSurface;

    /// Renderer-resident image derived from a surface.
    type Texture;

    /// Clears the whole frame to `color`.
    fn clear(&mut self, color: Color);

    /// Uploads `surface` as a texture.
    ///
    /// May fail on resource exhaustion; callers keep the surface and retry.
    fn create_texture(&mut self, surface: &Self::Surface) -> Result<Self::Texture>;

    /// Copies `texture` into `dst` without scaling beyond `dst`'s size.
    fn copy_texture(&mut self, texture: &Self::Texture, dst: Rect) -> Result<()>;

    /// Fills a circle centered at `center`.
    fn fill_circle(&mut self, center: Point, radius: i32, color: Color) -> Result<()>;

    /// Shows the composed frame.
    fn present(&mut self);
}
