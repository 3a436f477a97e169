// src/input/adapter.rs

//! Translates [`InputEvent`]s into [`Action`]s using a binding table.
//!
//! The adapter is stateless: it decides *what* an event means, and the frame
//! loop and the scene decide what to do about it. One event yields at most
//! one action, and events are translated in arrival order.

use super::InputEvent;
use crate::keys::KeySymbol;
use log::trace;
use serde::{Deserialize, Serialize};

/// Largest magnitude reported by a joystick axis.
pub const AXIS_MAX_MAGNITUDE: f32 = 32768.0;

/// Which offset component of an indicator an axis drives.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AxisField {
    X,
    Y,
}

/// Maps a joystick axis to one offset field of an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct AxisBinding {
    pub axis: u8,
    pub indicator: usize,
    pub field: AxisField,
}

/// Maps a joystick button to the pressed flag of an indicator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ButtonBinding {
    pub button: u8,
    pub indicator: usize,
}

/// The binding table consulted by [`InputAdapter::translate`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Bindings {
    pub axes: Vec<AxisBinding>,
    pub buttons: Vec<ButtonBinding>,
    /// Button whose press requests the one-shot side effect.
    pub trigger_button: Option<u8>,
    /// When set, every button press advances the selection instead.
    pub advance_on_button: bool,
}

impl Bindings {
    /// Bindings for a program that only cycles a selection.
    pub fn selection_only() -> Self {
        Bindings {
            advance_on_button: true,
            ..Bindings::default()
        }
    }
}

/// What a translated event asks for.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Action {
    /// Stop the frame loop after the current frame.
    Stop,
    /// Move the current selection to the next item.
    AdvanceSelection,
    /// Set one offset component of an indicator. Not clamped.
    SetOffset {
        indicator: usize,
        field: AxisField,
        value: f32,
    },
    /// Set the pressed flag of an indicator.
    SetPressed { indicator: usize, pressed: bool },
    /// Start the one-shot side effect if it is not already running.
    Trigger,
    /// Open and register the device at this index.
    AttachDevice(u32),
    /// Release the device at this index, if registered.
    DetachDevice(u32),
}

/// Normalizes a raw axis reading to `[-1.0, 1.0]`.
///
/// Readings outside the nominal range pass through scaled, not clamped.
pub fn normalize_axis(value: i32) -> f32 {
    value as f32 / AXIS_MAX_MAGNITUDE
}

#[derive(Debug, Clone, Default)]
pub struct InputAdapter {
    bindings: Bindings,
}

impl InputAdapter {
    pub fn new(bindings: Bindings) -> Self {
        Self { bindings }
    }

    pub fn bindings(&self) -> &Bindings {
        &self.bindings
    }

    /// Translates one event. Unmapped keys, axes and buttons yield `None`.
    pub fn translate(&self, event: &InputEvent) -> Option<Action> {
        let action = match *event {
            InputEvent::Quit => Some(Action::Stop),
            InputEvent::Key {
                symbol,
                pressed: true,
            } => match symbol {
                KeySymbol::Escape => Some(Action::Stop),
                s if s.is_horizontal_arrow() => Some(Action::AdvanceSelection),
                _ => None,
            },
            InputEvent::Key { pressed: false, .. } => None,
            InputEvent::JoyAxis { axis, value, .. } => self
                .bindings
                .axes
                .iter()
                .find(|b| b.axis == axis)
                .map(|b| Action::SetOffset {
                    indicator: b.indicator,
                    field: b.field,
                    value: normalize_axis(value),
                }),
            InputEvent::JoyButton {
                button, pressed, ..
            } => self.translate_button(button, pressed),
            InputEvent::DeviceAdded { index } => Some(Action::AttachDevice(index)),
            InputEvent::DeviceRemoved { index } => Some(Action::DetachDevice(index)),
        };
        trace!("InputAdapter: {:?} -> {:?}", event, action);
        action
    }

    fn translate_button(&self, button: u8, pressed: bool) -> Option<Action> {
        if self.bindings.advance_on_button {
            return pressed.then_some(Action::AdvanceSelection);
        }
        if let Some(binding) = self.bindings.buttons.iter().find(|b| b.button == button) {
            return Some(Action::SetPressed {
                indicator: binding.indicator,
                pressed,
            });
        }
        if pressed && self.bindings.trigger_button == Some(button) {
            return Some(Action::Trigger);
        }
        None
    }
}

/// A cyclic index over a fixed, non-empty set of items.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    index: usize,
    count: usize,
}

impl Selection {
    /// Creates a selection at index 0. Returns `None` when `count` is zero.
    pub fn new(count: usize) -> Option<Self> {
        (count > 0).then_some(Self { index: 0, count })
    }

    pub fn index(&self) -> usize {
        self.index
    }

    pub fn count(&self) -> usize {
        self.count
    }

    /// Advances to the next item, wrapping to 0 after the last.
    pub fn advance(&mut self) -> usize {
        self.index = (self.index + 1) % self.count;
        self.index
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_log::test;

    fn joystick_adapter() -> InputAdapter {
        InputAdapter::new(Bindings {
            axes: vec![
                AxisBinding {
                    axis: 0,
                    indicator: 0,
                    field: AxisField::X,
                },
                AxisBinding {
                    axis: 1,
                    indicator: 0,
                    field: AxisField::Y,
                },
            ],
            buttons: vec![ButtonBinding {
                button: 0,
                indicator: 0,
            }],
            trigger_button: Some(1),
            advance_on_button: false,
        })
    }

    fn key(symbol: KeySymbol, pressed: bool) -> InputEvent {
        InputEvent::Key { symbol, pressed }
    }

    #[test]
    fn axis_extremes_normalize_to_unit_range() {
        assert_eq!(normalize_axis(32768), 1.0);
        assert_eq!(normalize_axis(-32768), -1.0);
        assert_eq!(normalize_axis(0), 0.0);
    }

    #[test]
    fn axis_values_are_not_clamped() {
        assert_eq!(normalize_axis(65536), 2.0);
    }

    #[test]
    fn quit_and_escape_stop_the_loop() {
        let adapter = InputAdapter::default();
        assert_eq!(adapter.translate(&InputEvent::Quit), Some(Action::Stop));
        assert_eq!(
            adapter.translate(&key(KeySymbol::Escape, true)),
            Some(Action::Stop)
        );
        assert_eq!(adapter.translate(&key(KeySymbol::Escape, false)), None);
    }

    #[test]
    fn arrow_presses_advance_selection() {
        let adapter = InputAdapter::default();
        assert_eq!(
            adapter.translate(&key(KeySymbol::Left, true)),
            Some(Action::AdvanceSelection)
        );
        assert_eq!(
            adapter.translate(&key(KeySymbol::Right, true)),
            Some(Action::AdvanceSelection)
        );
        assert_eq!(adapter.translate(&key(KeySymbol::Right, false)), None);
        assert_eq!(adapter.translate(&key(KeySymbol::Up, true)), None);
        assert_eq!(adapter.translate(&key(KeySymbol::Char('a'), true)), None);
    }

    #[test]
    fn bound_axis_sets_indicator_offset() {
        let adapter = joystick_adapter();
        let action = adapter.translate(&InputEvent::JoyAxis {
            which: 0,
            axis: 1,
            value: -16384,
        });
        assert_eq!(
            action,
            Some(Action::SetOffset {
                indicator: 0,
                field: AxisField::Y,
                value: -0.5
            })
        );
    }

    #[test]
    fn unbound_axis_and_button_are_ignored() {
        let adapter = joystick_adapter();
        assert_eq!(
            adapter.translate(&InputEvent::JoyAxis {
                which: 0,
                axis: 7,
                value: 100
            }),
            None
        );
        assert_eq!(
            adapter.translate(&InputEvent::JoyButton {
                which: 0,
                button: 9,
                pressed: true
            }),
            None
        );
    }

    #[test]
    fn bound_button_tracks_pressed_state() {
        let adapter = joystick_adapter();
        for pressed in [true, false] {
            assert_eq!(
                adapter.translate(&InputEvent::JoyButton {
                    which: 0,
                    button: 0,
                    pressed
                }),
                Some(Action::SetPressed {
                    indicator: 0,
                    pressed
                })
            );
        }
    }

    #[test]
    fn trigger_button_fires_only_on_press() {
        let adapter = joystick_adapter();
        let press = InputEvent::JoyButton {
            which: 0,
            button: 1,
            pressed: true,
        };
        let release = InputEvent::JoyButton {
            which: 0,
            button: 1,
            pressed: false,
        };
        assert_eq!(adapter.translate(&press), Some(Action::Trigger));
        assert_eq!(adapter.translate(&release), None);
    }

    #[test]
    fn any_button_advances_in_selection_mode() {
        let adapter = InputAdapter::new(Bindings::selection_only());
        assert_eq!(
            adapter.translate(&InputEvent::JoyButton {
                which: 3,
                button: 11,
                pressed: true
            }),
            Some(Action::AdvanceSelection)
        );
        assert_eq!(
            adapter.translate(&InputEvent::JoyButton {
                which: 3,
                button: 11,
                pressed: false
            }),
            None
        );
    }

    #[test]
    fn device_events_map_to_registry_actions() {
        let adapter = InputAdapter::default();
        assert_eq!(
            adapter.translate(&InputEvent::DeviceAdded { index: 2 }),
            Some(Action::AttachDevice(2))
        );
        assert_eq!(
            adapter.translate(&InputEvent::DeviceRemoved { index: 2 }),
            Some(Action::DetachDevice(2))
        );
    }

    #[test]
    fn selection_wraps_after_count_advances() {
        let mut selection = Selection::new(3).unwrap();
        assert_eq!(selection.index(), 0);
        for _ in 0..3 {
            selection.advance();
        }
        assert_eq!(selection.index(), 0);
        assert_eq!(selection.advance(), 1);
    }

    #[test]
    fn empty_selection_is_rejected() {
        assert!(Selection::new(0).is_none());
    }
}
