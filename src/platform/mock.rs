// src/platform/mock.rs

use crate::input::InputEvent;
use crate::platform::platform_trait::Platform;
use anyhow::{bail, Result};
use std::cell::Cell;
use std::collections::{HashSet, VecDeque};
use std::rc::Rc;

/// A device handle that counts how many handles are open.
#[derive(Debug)]
pub struct MockDevice {
    pub index: u32,
    open: Rc<Cell<usize>>,
}

impl Drop for MockDevice {
    fn drop(&mut self) {
        self.open.set(self.open.get() - 1);
    }
}

/// Platform fed from a queue of scripted events.
#[derive(Debug, Default)]
pub struct MockPlatform {
    events: VecDeque<InputEvent>,
    failing_devices: HashSet<u32>,
    opened: Vec<u32>,
    open_devices: Rc<Cell<usize>>,
    polls: usize,
}

impl MockPlatform {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_event(&mut self, event: InputEvent) {
        self.events.push_back(event);
    }

    pub fn push_events(&mut self, events: impl IntoIterator<Item = InputEvent>) {
        self.events.extend(events);
    }

    /// Makes opening the device at `index` fail.
    pub fn fail_device(&mut self, index: u32) {
        self.failing_devices.insert(index);
    }

    /// Indices passed to successful `open_device` calls, in order.
    pub fn opened(&self) -> &[u32] {
        &self.opened
    }

    /// Number of device handles currently alive.
    pub fn open_devices(&self) -> usize {
        self.open_devices.get()
    }

    pub fn pending_events(&self) -> usize {
        self.events.len()
    }

    /// Number of `poll_event` calls made so far.
    pub fn polls(&self) -> usize {
        self.polls
    }
}

impl Platform for MockPlatform {
    type Device = MockDevice;

    fn poll_event(&mut self) -> Option<InputEvent> {
        self.polls += 1;
        self.events.pop_front()
    }

    fn open_device(&mut self, index: u32) -> Result<MockDevice> {
        if self.failing_devices.contains(&index) {
            bail!("MockPlatform: device {} refused to open", index);
        }
        self.opened.push(index);
        self.open_devices.set(self.open_devices.get() + 1);
        Ok(MockDevice {
            index,
            open: Rc::clone(&self.open_devices),
        })
    }
}
