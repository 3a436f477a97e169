// src/platform/mod.rs
//
// Input side of the windowing library: event queue and device handles.

pub mod mock;
pub mod platform_trait;
pub mod sdl;

pub use mock::{MockDevice, MockPlatform};
pub use platform_trait::Platform;
pub use sdl::SdlPlatform;
