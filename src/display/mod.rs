// src/display/mod.rs
//! Display drivers and the primitives they accept.
//!
//! - DisplayDriver: clear / upload / copy / circle / present
//! - Drivers: SDL2 canvas, and a headless recorder for tests

pub mod driver;
pub mod drivers;

pub use driver::{DisplayDriver, PixelSurface, Point, Rect};
