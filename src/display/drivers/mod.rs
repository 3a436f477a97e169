// src/display/drivers/mod.rs
//! Display driver implementations.

pub mod headless;
pub mod sdl;

pub use headless::HeadlessDisplayDriver;
pub use sdl::SdlDisplayDriver;
