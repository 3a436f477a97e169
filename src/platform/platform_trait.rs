// src/platform/platform_trait.rs
//
// Defines the `Platform` trait, which abstracts over the input side of the
// windowing library: the event queue and joystick devices.

use anyhow::Result;

use crate::input::InputEvent;

/// A trait that defines the interface for a platform implementation.
///
/// Rendering goes through [`DisplayDriver`](crate::display::DisplayDriver);
/// the platform only provides input events and opens input devices.
pub trait Platform {
    /// An opened input device. Dropping it closes the device.
    type Device;

    /// Returns the next pending event without blocking, or `None` when the
    /// queue is empty. Events the programs have no use for are skipped.
    fn poll_event(&mut self) -> Option<InputEvent>;

    /// Opens the input device at `index`.
    fn open_device(&mut self, index: u32) -> Result<Self::Device>;
}
