// src/platform/sdl.rs

//! SDL2 event pump and joystick subsystem.

use crate::input::InputEvent;
use crate::keys::KeySymbol;
use crate::platform::platform_trait::Platform;
use anyhow::{anyhow, Context, Result};
use log::{debug, info, trace};
use sdl2::event::Event;
use sdl2::joystick::Joystick;
use sdl2::{EventPump, JoystickSubsystem, Sdl};
use std::collections::HashMap;

pub struct SdlPlatform {
    event_pump: EventPump,
    joystick: JoystickSubsystem,
    instances: InstanceMap,
}

/// Device index of every joystick opened so far, keyed by SDL instance id.
///
/// SDL reports additions by device index but removals by instance id.
#[derive(Debug, Default)]
pub struct InstanceMap {
    indices: HashMap<u32, u32>,
}

impl InstanceMap {
    pub fn record(&mut self, instance: u32, index: u32) {
        self.indices.insert(instance, index);
    }

    /// Rewrites a removal's instance id to the device index it was opened
    /// at. Removals of joysticks that were never opened are dropped; other
    /// events pass through.
    pub fn resolve(&mut self, event: InputEvent) -> Option<InputEvent> {
        match event {
            InputEvent::DeviceRemoved { index: instance } => match self.indices.remove(&instance) {
                Some(index) => Some(InputEvent::DeviceRemoved { index }),
                None => {
                    debug!("SdlPlatform: ignoring removal of unopened joystick instance {}", instance);
                    None
                }
            },
            other => Some(other),
        }
    }
}

impl SdlPlatform {
    /// Takes the event pump and enables joystick events.
    pub fn new(sdl: &Sdl) -> Result<Self> {
        let joystick = sdl
            .joystick()
            .map_err(|e| anyhow!("Failed to initialize joystick subsystem: {}", e))?;
        joystick.set_event_state(true);
        info!(
            "SdlPlatform: {} joystick(s) present at startup",
            joystick.num_joysticks().unwrap_or(0)
        );
        let event_pump = sdl
            .event_pump()
            .map_err(|e| anyhow!("Failed to obtain event pump: {}", e))?;
        Ok(Self {
            event_pump,
            joystick,
            instances: InstanceMap::default(),
        })
    }
}

/// Translates an SDL event, or returns `None` for events nobody handles.
///
/// `DeviceRemoved` carries the SDL instance id; [`InstanceMap::resolve`]
/// maps it back to the device index.
pub fn translate_event(event: Event) -> Option<InputEvent> {
    match event {
        Event::Quit { .. } => Some(InputEvent::Quit),
        Event::KeyDown {
            keycode: Some(keycode),
            ..
        } => Some(InputEvent::Key {
            symbol: KeySymbol::from(keycode),
            pressed: true,
        }),
        Event::KeyUp {
            keycode: Some(keycode),
            ..
        } => Some(InputEvent::Key {
            symbol: KeySymbol::from(keycode),
            pressed: false,
        }),
        Event::JoyAxisMotion {
            which,
            axis_idx,
            value,
            ..
        } => Some(InputEvent::JoyAxis {
            which,
            axis: axis_idx,
            value: i32::from(value),
        }),
        Event::JoyButtonDown {
            which, button_idx, ..
        } => Some(InputEvent::JoyButton {
            which,
            button: button_idx,
            pressed: true,
        }),
        Event::JoyButtonUp {
            which, button_idx, ..
        } => Some(InputEvent::JoyButton {
            which,
            button: button_idx,
            pressed: false,
        }),
        Event::JoyDeviceAdded { which, .. } => Some(InputEvent::DeviceAdded { index: which }),
        Event::JoyDeviceRemoved { which, .. } => Some(InputEvent::DeviceRemoved { index: which }),
        _ => None,
    }
}

impl Platform for SdlPlatform {
    type Device = Joystick;

    fn poll_event(&mut self) -> Option<InputEvent> {
        while let Some(event) = self.event_pump.poll_event() {
            if let Some(input) = translate_event(event).and_then(|e| self.instances.resolve(e)) {
                return Some(input);
            }
        }
        None
    }

    fn open_device(&mut self, index: u32) -> Result<Joystick> {
        let joystick = self
            .joystick
            .open(index)
            .with_context(|| format!("Failed to open joystick {}", index))?;
        trace!(
            "SdlPlatform: joystick {} has {} axes, {} buttons",
            index,
            joystick.num_axes(),
            joystick.num_buttons()
        );
        info!("Opened joystick {}: {}", index, joystick.name());
        self.instances.record(joystick.instance_id(), index);
        Ok(joystick)
    }
}
