//! SDL2 canvas display driver.

use crate::color::Color;
use crate::config::WindowConfig;
use crate::display::driver::{DisplayDriver, PixelSurface, Point, Rect};
use anyhow::{anyhow, Context, Result};
use log::{info, warn};
use sdl2::gfx::primitives::DrawRenderer;
use sdl2::render::{Canvas, Texture, TextureCreator};
use sdl2::surface::{Surface, SurfaceRef};
use sdl2::video::{Window, WindowContext};
use sdl2::VideoSubsystem;

impl PixelSurface for Surface<'static> {
    fn size(&self) -> (u32, u32) {
        SurfaceRef::size(self)
    }
}

/// Creates the window and its canvas.
///
/// Prefers an accelerated renderer and falls back to the software renderer.
pub fn create_canvas(video: &VideoSubsystem, window: &WindowConfig) -> Result<Canvas<Window>> {
    let build_window = || {
        video
            .window(&window.title, window.width, window.height)
            .position(0, 0)
            .build()
            .context("Failed to create window")
    };

    let canvas = match build_window()?.into_canvas().accelerated().build() {
        Ok(canvas) => canvas,
        Err(e) => {
            warn!("Couldn't get accelerated renderer: {}", e);
            build_window()?
                .into_canvas()
                .software()
                .build()
                .context("Failed to create software renderer")?
        }
    };

    let renderer_info = canvas.info();
    info!(
        "Renderer info: name={} flags={:#x} max_texture={}x{}",
        renderer_info.name,
        renderer_info.flags,
        renderer_info.max_texture_width,
        renderer_info.max_texture_height
    );
    Ok(canvas)
}

/// Draws onto an SDL canvas. Textures borrow the externally owned
/// `TextureCreator`, so they may outlive any single frame.
pub struct SdlDisplayDriver<'tc> {
    canvas: Canvas<Window>,
    creator: &'tc TextureCreator<WindowContext>,
}

impl<'tc> SdlDisplayDriver<'tc> {
    pub fn new(canvas: Canvas<Window>, creator: &'tc TextureCreator<WindowContext>) -> Self {
        Self { canvas, creator }
    }
}

impl<'tc> DisplayDriver for SdlDisplayDriver<'tc> {
    type Surface = Surface<'static>;
    type Texture = Texture<'tc>;

    fn clear(&mut self, color: Color) {
        self.canvas.set_draw_color(color);
        self.canvas.clear();
    }

    fn create_texture(&mut self, surface: &Surface<'static>) -> Result<Texture<'tc>> {
        self.creator
            .create_texture_from_surface(surface)
            .context("Failed to create texture from surface")
    }

    fn copy_texture(&mut self, texture: &Texture<'tc>, dst: Rect) -> Result<()> {
        let dst = sdl2::rect::Rect::new(dst.x, dst.y, dst.width, dst.height);
        self.canvas
            .copy(texture, None, Some(dst))
            .map_err(|e| anyhow!("Failed to copy texture: {}", e))
    }

    fn fill_circle(&mut self, center: Point, radius: i32, color: Color) -> Result<()> {
        let clamp = |v: i32| v.clamp(i16::MIN as i32, i16::MAX as i32) as i16;
        self.canvas
            .filled_circle(
                clamp(center.x),
                clamp(center.y),
                clamp(radius),
                sdl2::pixels::Color::from(color),
            )
            .map_err(|e| anyhow!("Failed to draw circle: {}", e))
    }

    fn present(&mut self) {
        self.canvas.present();
    }
}
