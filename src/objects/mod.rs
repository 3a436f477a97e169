// src/objects/mod.rs

//! Positioned, renderable display objects.
//!
//! Objects are plain state mutated between frames by the scene that owns
//! them, and read back when the frame loop asks the scene to render.

pub mod circle;
pub mod surface_cache;
pub mod text_label;

pub use circle::CircleIndicator;
pub use surface_cache::SurfaceCache;
pub use text_label::TextLabel;

use crate::display::DisplayDriver;

/// Something that can draw itself through a display driver.
///
/// Rendering never fails: per-frame drawing errors are logged by the object
/// and the affected draw is skipped.
pub trait DisplayObject<D: DisplayDriver> {
    fn render(&mut self, driver: &mut D);
}
