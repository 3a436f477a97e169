// src/apps/joyview.rs

//! Joystick viewer: circle indicators tracking stick axes and buttons, plus
//! a count of attached joysticks.

use super::{apply_to_indicators, indicators_from_config};
use crate::config::JoystickConfig;
use crate::display::{DisplayDriver, Point};
use crate::input::Action;
use crate::objects::{CircleIndicator, DisplayObject, TextLabel};
use crate::orchestrator::Scene;
use crate::rasterizer::FontDriver;
use log::trace;

/// Top-left corner of the status label.
pub const STATUS_ORIGIN: Point = Point::new(10, 5);

pub struct JoystickViewer<'f, F, D: DisplayDriver> {
    indicators: Vec<CircleIndicator>,
    status: TextLabel<'f, F, D>,
}

pub fn status_text(count: usize) -> String {
    format!("joysticks: {}", count)
}

impl<'f, F, D> JoystickViewer<'f, F, D>
where
    F: FontDriver<Surface = D::Surface>,
    D: DisplayDriver,
{
    pub fn new(config: &JoystickConfig, font: &'f F) -> Self {
        let mut status = TextLabel::new(STATUS_ORIGIN, config.text_color, font);
        status.set_text(&status_text(0));
        Self {
            indicators: indicators_from_config(&config.indicators, config),
            status,
        }
    }

    pub fn indicators(&self) -> &[CircleIndicator] {
        &self.indicators
    }

    pub fn status(&self) -> &str {
        self.status.text()
    }
}

impl<F, D> Scene<D> for JoystickViewer<'_, F, D>
where
    F: FontDriver<Surface = D::Surface>,
    D: DisplayDriver,
{
    fn render(&mut self, driver: &mut D) {
        for indicator in &mut self.indicators {
            indicator.render(driver);
        }
        self.status.render(driver);
    }

    fn apply(&mut self, action: Action) {
        if !apply_to_indicators(&mut self.indicators, action) {
            trace!("JoystickViewer: ignoring {:?}", action);
        }
    }

    fn devices_changed(&mut self, count: usize) {
        self.status.set_text(&status_text(count));
    }
}
