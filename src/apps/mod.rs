// src/apps/mod.rs

//! The scenes driven by the three binaries.
//!
//! Each scene owns its display objects and borrows the shared font; the
//! frame loop hands it every action it does not handle itself.

pub mod cmdview;
pub mod joysound;
pub mod joyview;

pub use cmdview::CommandInspector;
pub use joysound::SoundTrigger;
pub use joyview::JoystickViewer;

use crate::config::{IndicatorLayout, JoystickConfig};
use crate::display::Point;
use crate::input::Action;
use crate::objects::circle::{CircleIndicator, IndicatorColors};
use log::warn;

/// Builds the indicators described by `layouts` with the configured colors.
pub fn indicators_from_config(
    layouts: &[IndicatorLayout],
    config: &JoystickConfig,
) -> Vec<CircleIndicator> {
    let colors = IndicatorColors {
        idle: config.idle_color,
        pressed: config.pressed_color,
        dot: config.dot_color,
    };
    layouts
        .iter()
        .map(|l| CircleIndicator::new(Point::new(l.x, l.y), l.radius, colors))
        .collect()
}

/// Applies an offset or pressed action to the indicator it names.
///
/// Returns false for any other action. Actions naming an indicator that
/// does not exist are logged and dropped.
pub fn apply_to_indicators(indicators: &mut [CircleIndicator], action: Action) -> bool {
    match action {
        Action::SetOffset {
            indicator,
            field,
            value,
        } => {
            match indicators.get_mut(indicator) {
                Some(target) => target.set_offset(field, value),
                None => warn!("No indicator {} for {:?}", indicator, action),
            }
            true
        }
        Action::SetPressed { indicator, pressed } => {
            match indicators.get_mut(indicator) {
                Some(target) => target.pressed = pressed,
                None => warn!("No indicator {} for {:?}", indicator, action),
            }
            true
        }
        _ => false,
    }
}
