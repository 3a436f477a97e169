// src/input/registry.rs

//! Bounded mapping from input-device index to its opened handle.
//!
//! Handles release their platform resources on `Drop`, so removing a handle
//! from the registry and dropping it is the release.

use log::{info, warn};
use std::fmt;

/// Capacity of the registry; device indices must be below this.
pub const MAX_DEVICES: usize = 16;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RegistryError {
    /// The device index does not fit in the registry.
    OutOfRange { index: u32 },
}

impl fmt::Display for RegistryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RegistryError::OutOfRange { index } => write!(
                f,
                "device index {} is outside the registry capacity of {}",
                index, MAX_DEVICES
            ),
        }
    }
}

impl std::error::Error for RegistryError {}

pub struct DeviceRegistry<H> {
    slots: Vec<Option<H>>,
}

impl<H> Default for DeviceRegistry<H> {
    fn default() -> Self {
        Self::new()
    }
}

impl<H> DeviceRegistry<H> {
    pub fn new() -> Self {
        Self {
            slots: (0..MAX_DEVICES).map(|_| None).collect(),
        }
    }

    fn slot(index: u32) -> Result<usize, RegistryError> {
        let slot = index as usize;
        if slot < MAX_DEVICES {
            Ok(slot)
        } else {
            Err(RegistryError::OutOfRange { index })
        }
    }

    /// Checks that `index` can be registered, before a handle is opened for it.
    pub fn check_index(&self, index: u32) -> Result<(), RegistryError> {
        Self::slot(index).map(|_| ())
    }

    /// Registers `handle` at `index`.
    ///
    /// An occupied slot is released first and then replaced.
    pub fn attach(&mut self, index: u32, handle: H) -> Result<(), RegistryError> {
        let slot = Self::slot(index)?;
        if let Some(previous) = self.slots[slot].replace(handle) {
            warn!(
                "DeviceRegistry: slot {} was already occupied; releasing previous handle",
                index
            );
            drop(previous);
        }
        Ok(())
    }

    /// Removes the handle at `index` and returns it for release.
    ///
    /// Absent slots and out-of-range indices yield `None`.
    pub fn detach(&mut self, index: u32) -> Option<H> {
        let slot = Self::slot(index).ok()?;
        self.slots[slot].take()
    }

    pub fn get(&self, index: u32) -> Option<&H> {
        let slot = Self::slot(index).ok()?;
        self.slots[slot].as_ref()
    }

    pub fn is_occupied(&self, index: u32) -> bool {
        self.get(index).is_some()
    }

    /// Number of registered devices.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Releases every registered handle.
    pub fn clear(&mut self) {
        for (index, slot) in self.slots.iter_mut().enumerate() {
            if slot.take().is_some() {
                info!("DeviceRegistry: released device {}", index);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;
    use test_log::test;

    /// Handle that counts how many instances are alive.
    struct Tracked(Rc<Cell<usize>>);

    impl Tracked {
        fn new(live: &Rc<Cell<usize>>) -> Self {
            live.set(live.get() + 1);
            Tracked(Rc::clone(live))
        }
    }

    impl Drop for Tracked {
        fn drop(&mut self) {
            self.0.set(self.0.get() - 1);
        }
    }

    #[test]
    fn detach_of_empty_slot_is_noop() {
        let mut registry: DeviceRegistry<Tracked> = DeviceRegistry::new();
        assert!(registry.detach(3).is_none());
        assert!(registry.is_empty());
    }

    #[test]
    fn attach_then_detach_leaves_slot_empty() {
        let live = Rc::new(Cell::new(0));
        let mut registry = DeviceRegistry::new();
        registry.attach(5, Tracked::new(&live)).unwrap();
        assert!(registry.is_occupied(5));
        assert_eq!(registry.len(), 1);

        drop(registry.detach(5));
        assert!(!registry.is_occupied(5));
        assert_eq!(live.get(), 0);
    }

    #[test]
    fn reattach_releases_previous_handle() {
        let live = Rc::new(Cell::new(0));
        let mut registry = DeviceRegistry::new();
        registry.attach(0, Tracked::new(&live)).unwrap();
        registry.attach(0, Tracked::new(&live)).unwrap();
        assert_eq!(live.get(), 1);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn out_of_range_index_is_rejected() {
        let live = Rc::new(Cell::new(0));
        let mut registry = DeviceRegistry::new();
        let err = registry
            .attach(MAX_DEVICES as u32, Tracked::new(&live))
            .unwrap_err();
        assert_eq!(
            err,
            RegistryError::OutOfRange {
                index: MAX_DEVICES as u32
            }
        );
        assert_eq!(live.get(), 0);
        assert!(registry.check_index(15).is_ok());
        assert!(registry.detach(99).is_none());
    }

    #[test]
    fn clear_releases_everything() {
        let live = Rc::new(Cell::new(0));
        let mut registry = DeviceRegistry::new();
        registry.attach(1, Tracked::new(&live)).unwrap();
        registry.attach(7, Tracked::new(&live)).unwrap();
        registry.clear();
        assert_eq!(live.get(), 0);
        assert!(registry.is_empty());
    }
}
