//! Headless mock font driver implementation.

use crate::color::Color;
use crate::display::drivers::headless::{HeadlessSurface, LiveCount};
use crate::rasterizer::font_driver::FontDriver;
use anyhow::{bail, Result};
use std::cell::{Cell, RefCell};

/// Fixed advance per character, in pixels.
pub const HEADLESS_GLYPH_WIDTH: u32 = 7;
/// Fixed line height, in pixels.
pub const HEADLESS_LINE_HEIGHT: u32 = 14;

/// Produces [`HeadlessSurface`]s with a monospace size and records every
/// string it was asked to rasterize.
#[derive(Debug, Default)]
pub struct HeadlessFontDriver {
    rendered: RefCell<Vec<String>>,
    failures_pending: Cell<usize>,
    live_surfaces: LiveCount,
}

impl HeadlessFontDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `count` rasterizations fail.
    pub fn fail_next(&self, count: usize) {
        self.failures_pending.set(count);
    }

    /// Every string rasterized so far, in order.
    pub fn rendered(&self) -> Vec<String> {
        self.rendered.borrow().clone()
    }

    pub fn live_surfaces(&self) -> usize {
        self.live_surfaces.get()
    }
}

impl FontDriver for HeadlessFontDriver {
    type Surface = HeadlessSurface;

    fn render_text(&self, text: &str, _color: Color) -> Result<HeadlessSurface> {
        if self.failures_pending.get() > 0 {
            self.failures_pending.set(self.failures_pending.get() - 1);
            bail!("HeadlessFontDriver: simulated rasterization failure");
        }
        if text.is_empty() {
            bail!("HeadlessFontDriver: text has zero width");
        }
        self.rendered.borrow_mut().push(text.to_string());
        let width = text.chars().count() as u32 * HEADLESS_GLYPH_WIDTH;
        Ok(HeadlessSurface::new(
            text,
            width,
            HEADLESS_LINE_HEIGHT,
            &self.live_surfaces,
        ))
    }
}
