// src/session.rs

//! Process-level setup shared by the binaries: logging, and the SDL
//! context, window, renderer and font a scene draws with.

use crate::config::Config;
use crate::display::drivers::sdl::create_canvas;
use crate::display::drivers::SdlDisplayDriver;
use crate::rasterizer::sdl_font_driver::read_font_bytes;
use crate::rasterizer::SdlFontDriver;
use anyhow::{anyhow, Context, Result};
use log::info;
use sdl2::Sdl;

/// Initializes the logger. Default filter is "info" if RUST_LOG is not set.
pub fn init_logging() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp_micros()
        .init();
}

/// Opens SDL, the window and the font, then hands them to `body`.
///
/// Everything opened here is released after `body` returns, in reverse
/// order of creation, whether or not it succeeded.
pub fn with_sdl<R>(
    config: &Config,
    body: impl FnOnce(&Sdl, SdlDisplayDriver<'_>, &SdlFontDriver<'_, '_>) -> Result<R>,
) -> Result<R> {
    let sdl = sdl2::init().map_err(|e| anyhow!("Failed to initialize SDL: {}", e))?;
    let video = sdl
        .video()
        .map_err(|e| anyhow!("Failed to initialize video subsystem: {}", e))?;
    let ttf = sdl2::ttf::init().map_err(|e| anyhow!("Failed to initialize SDL_ttf: {}", e))?;

    let canvas = create_canvas(&video, &config.window)?;
    let creator = canvas.texture_creator();
    let driver = SdlDisplayDriver::new(canvas, &creator);

    let font_bytes = read_font_bytes(&config.font.path)?;
    let font = SdlFontDriver::from_bytes(&ttf, &font_bytes, config.font.point_size)
        .with_context(|| format!("Failed to load font '{}'", config.font.path.display()))?;

    if config.window.hide_cursor {
        sdl.mouse().show_cursor(false);
    }
    info!(
        "Window '{}' open at {}x{}",
        config.window.title, config.window.width, config.window.height
    );

    body(&sdl, driver, &font)
}
