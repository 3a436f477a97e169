// src/objects/text_label.rs

use super::{DisplayObject, SurfaceCache};
use crate::color::Color;
use crate::display::{DisplayDriver, Point};
use crate::rasterizer::FontDriver;

/// A line of text at a fixed position, color and font.
///
/// The font is borrowed; every label in a scene usually shares one.
pub struct TextLabel<'f, F, D: DisplayDriver> {
    origin: Point,
    color: Color,
    font: &'f F,
    cache: SurfaceCache<D>,
}

impl<'f, F, D> TextLabel<'f, F, D>
where
    F: FontDriver<Surface = D::Surface>,
    D: DisplayDriver,
{
    pub fn new(origin: Point, color: Color, font: &'f F) -> Self {
        Self {
            origin,
            color,
            font,
            cache: SurfaceCache::new(),
        }
    }

    pub fn origin(&self) -> Point {
        self.origin
    }

    pub fn text(&self) -> &str {
        self.cache.text()
    }

    /// See [`SurfaceCache::set_text`].
    pub fn set_text(&mut self, text: &str) {
        self.cache.set_text(text);
    }
}

impl<F, D> DisplayObject<D> for TextLabel<'_, F, D>
where
    F: FontDriver<Surface = D::Surface>,
    D: DisplayDriver,
{
    fn render(&mut self, driver: &mut D) {
        self.cache.render(driver, self.font, self.color, self.origin);
    }
}
