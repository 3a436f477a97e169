//! Text rasterization.
//!
//! A `FontDriver` turns a string into a pixel surface; the display objects
//! own the resulting surfaces and the textures derived from them.

pub mod font_driver;
pub mod headless_font_driver;
pub mod sdl_font_driver;

pub use font_driver::FontDriver;
pub use headless_font_driver::HeadlessFontDriver;
pub use sdl_font_driver::SdlFontDriver;
