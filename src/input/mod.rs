// src/input/mod.rs

//! Platform-agnostic input events and their translation into scene actions.

pub mod adapter;
pub mod registry;

pub use adapter::{Action, InputAdapter, Selection};
pub use registry::{DeviceRegistry, RegistryError, MAX_DEVICES};

use crate::keys::KeySymbol;

/// An input event as delivered by a [`Platform`](crate::platform::Platform).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent {
    /// The user asked to close the window.
    Quit,
    /// A key changed state.
    Key { symbol: KeySymbol, pressed: bool },
    /// A joystick axis moved. `value` is the raw signed reading.
    JoyAxis { which: u32, axis: u8, value: i32 },
    /// A joystick button changed state.
    JoyButton { which: u32, button: u8, pressed: bool },
    /// A joystick was attached at device `index`.
    DeviceAdded { index: u32 },
    /// The joystick at device `index` was detached.
    DeviceRemoved { index: u32 },
}
