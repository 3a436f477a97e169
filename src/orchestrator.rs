// src/orchestrator.rs
//! Drives the single-threaded frame loop: render, present, wait for the
//! tick, then drain and dispatch input.
//!
//! The loop owns every collaborator (platform, display driver, ticker) and
//! the device registry; the scene owns the display objects. Input applied in
//! one iteration is drawn in the next.

use crate::color::Color;
use crate::display::DisplayDriver;
use crate::input::{Action, DeviceRegistry, InputAdapter};
use crate::platform::Platform;
use crate::ticker::Ticker;
use log::{debug, error, info, warn};

/// Loop state. `Stopped` is terminal.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum LoopState {
    Running,
    Stopped,
}

/// One program's display objects and its reaction to input.
pub trait Scene<D: DisplayDriver> {
    /// Renders every display object in a fixed order.
    fn render(&mut self, driver: &mut D);

    /// Applies an action that is not handled by the loop itself.
    ///
    /// Receives everything except `Stop`, `AttachDevice` and `DetachDevice`.
    fn apply(&mut self, action: Action);

    /// Called after the number of registered devices changed.
    fn devices_changed(&mut self, _count: usize) {}
}

pub struct FrameLoop<P: Platform, D, T> {
    platform: P,
    driver: D,
    ticker: T,
    adapter: InputAdapter,
    devices: DeviceRegistry<P::Device>,
    background: Color,
    state: LoopState,
    frames: u64,
}

impl<P, D, T> FrameLoop<P, D, T>
where
    P: Platform,
    D: DisplayDriver,
    T: Ticker,
{
    pub fn new(platform: P, driver: D, ticker: T, adapter: InputAdapter, background: Color) -> Self {
        FrameLoop {
            platform,
            driver,
            ticker,
            adapter,
            devices: DeviceRegistry::new(),
            background,
            state: LoopState::Running,
            frames: 0,
        }
    }

    pub fn state(&self) -> LoopState {
        self.state
    }

    /// Frames presented so far.
    pub fn frames(&self) -> u64 {
        self.frames
    }

    pub fn platform(&self) -> &P {
        &self.platform
    }

    pub fn platform_mut(&mut self) -> &mut P {
        &mut self.platform
    }

    pub fn driver(&self) -> &D {
        &self.driver
    }

    pub fn ticker(&self) -> &T {
        &self.ticker
    }

    pub fn devices(&self) -> &DeviceRegistry<P::Device> {
        &self.devices
    }

    /// Runs one iteration. Does nothing once stopped.
    pub fn run_frame<S: Scene<D>>(&mut self, scene: &mut S) -> LoopState {
        if self.state == LoopState::Stopped {
            return self.state;
        }

        self.driver.clear(self.background);
        scene.render(&mut self.driver);
        self.driver.present();
        self.frames += 1;

        self.ticker.wait();

        while let Some(event) = self.platform.poll_event() {
            debug!("FrameLoop: Handling InputEvent: {:?}", event);
            if let Some(action) = self.adapter.translate(&event) {
                self.dispatch(action, scene);
            }
        }
        self.state
    }

    /// Runs until an action stops the loop.
    pub fn run<S: Scene<D>>(&mut self, scene: &mut S) -> LoopState {
        info!("FrameLoop: starting");
        while self.state == LoopState::Running {
            self.run_frame(scene);
        }
        info!("FrameLoop: stopped after {} frames", self.frames);
        self.state
    }

    /// Releases all registered devices.
    pub fn shutdown(&mut self) {
        self.devices.clear();
    }

    fn dispatch<S: Scene<D>>(&mut self, action: Action, scene: &mut S) {
        match action {
            Action::Stop => {
                info!("FrameLoop: stop requested; finishing current frame");
                self.state = LoopState::Stopped;
            }
            Action::AttachDevice(index) => {
                if self.attach_device(index) {
                    scene.devices_changed(self.devices.len());
                }
            }
            Action::DetachDevice(index) => {
                if let Some(device) = self.devices.detach(index) {
                    drop(device);
                    info!("Released device {}", index);
                    scene.devices_changed(self.devices.len());
                }
            }
            other => scene.apply(other),
        }
    }

    /// Opens and registers the device at `index`. Returns false on failure.
    fn attach_device(&mut self, index: u32) -> bool {
        if let Err(e) = self.devices.check_index(index) {
            warn!("FrameLoop: ignoring attach: {}", e);
            return false;
        }
        match self.platform.open_device(index) {
            Ok(device) => match self.devices.attach(index, device) {
                Ok(()) => {
                    info!("Registered device {}", index);
                    true
                }
                Err(e) => {
                    warn!("FrameLoop: {}", e);
                    false
                }
            },
            Err(e) => {
                error!("{:#}", e);
                false
            }
        }
    }
}

impl<P: Platform, D, T> Drop for FrameLoop<P, D, T> {
    fn drop(&mut self) {
        self.devices.clear();
    }
}

#[cfg(test)]
mod tests;
