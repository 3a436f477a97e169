//! Headless display driver implementation.
//!
//! Records every draw call instead of drawing, and tracks how many textures
//! and surfaces are alive so tests can observe the cache lifecycle.

use crate::color::Color;
use crate::display::driver::{DisplayDriver, PixelSurface, Point, Rect};
use anyhow::{bail, Result};
use log::trace;
use std::cell::Cell;
use std::rc::Rc;

/// Shared counter of live resources; decremented by the resource's `Drop`.
#[derive(Debug, Clone, Default)]
pub struct LiveCount(Rc<Cell<usize>>);

impl LiveCount {
    pub fn get(&self) -> usize {
        self.0.get()
    }

    fn acquire(&self) -> LiveToken {
        self.0.set(self.0.get() + 1);
        LiveToken(Rc::clone(&self.0))
    }
}

#[derive(Debug)]
struct LiveToken(Rc<Cell<usize>>);

impl Drop for LiveToken {
    fn drop(&mut self) {
        self.0.set(self.0.get() - 1);
    }
}

/// A surface holding the text it was rasterized from.
#[derive(Debug)]
pub struct HeadlessSurface {
    pub text: String,
    width: u32,
    height: u32,
    _live: LiveToken,
}

impl HeadlessSurface {
    pub fn new(text: &str, width: u32, height: u32, live: &LiveCount) -> Self {
        Self {
            text: text.to_string(),
            width,
            height,
            _live: live.acquire(),
        }
    }
}

impl PixelSurface for HeadlessSurface {
    fn size(&self) -> (u32, u32) {
        (self.width, self.height)
    }
}

#[derive(Debug)]
pub struct HeadlessTexture {
    pub id: usize,
    pub text: String,
    _live: LiveToken,
}

/// One recorded driver call.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    Clear(Color),
    Texture { text: String, dst: Rect },
    Circle {
        center: Point,
        radius: i32,
        color: Color,
    },
    Present,
}

#[derive(Debug, Default)]
pub struct HeadlessDisplayDriver {
    ops: Vec<DrawOp>,
    textures_created: usize,
    texture_failures_pending: usize,
    live_textures: LiveCount,
}

impl HeadlessDisplayDriver {
    pub fn new() -> Self {
        Self::default()
    }

    /// Makes the next `count` texture uploads fail.
    pub fn fail_next_textures(&mut self, count: usize) {
        self.texture_failures_pending = count;
    }

    pub fn ops(&self) -> &[DrawOp] {
        &self.ops
    }

    pub fn take_ops(&mut self) -> Vec<DrawOp> {
        std::mem::take(&mut self.ops)
    }

    pub fn textures_created(&self) -> usize {
        self.textures_created
    }

    pub fn live_textures(&self) -> usize {
        self.live_textures.get()
    }

    pub fn presents(&self) -> usize {
        self.ops.iter().filter(|op| **op == DrawOp::Present).count()
    }
}

impl DisplayDriver for HeadlessDisplayDriver {
    type Surface = HeadlessSurface;
    type Texture = HeadlessTexture;

    fn clear(&mut self, color: Color) {
        self.ops.push(DrawOp::Clear(color));
    }

    fn create_texture(&mut self, surface: &HeadlessSurface) -> Result<HeadlessTexture> {
        if self.texture_failures_pending > 0 {
            self.texture_failures_pending -= 1;
            bail!("HeadlessDisplayDriver: simulated texture failure");
        }
        self.textures_created += 1;
        trace!(
            "HeadlessDisplayDriver: texture {} for '{}'",
            self.textures_created,
            surface.text
        );
        Ok(HeadlessTexture {
            id: self.textures_created,
            text: surface.text.clone(),
            _live: self.live_textures.acquire(),
        })
    }

    fn copy_texture(&mut self, texture: &HeadlessTexture, dst: Rect) -> Result<()> {
        self.ops.push(DrawOp::Texture {
            text: texture.text.clone(),
            dst,
        });
        Ok(())
    }

    fn fill_circle(&mut self, center: Point, radius: i32, color: Color) -> Result<()> {
        self.ops.push(DrawOp::Circle {
            center,
            radius,
            color,
        });
        Ok(())
    }

    fn present(&mut self) {
        trace!("HeadlessDisplayDriver: Present");
        self.ops.push(DrawOp::Present);
    }
}
