// src/objects/circle.rs

use super::DisplayObject;
use crate::color::Color;
use crate::display::{DisplayDriver, Point};
use crate::input::adapter::AxisField;
use log::warn;

/// Colors of a circle indicator.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct IndicatorColors {
    pub idle: Color,
    pub pressed: Color,
    pub dot: Color,
}

/// A circle with a smaller dot displaced from its center.
///
/// The offset is nominally in `[-1.0, 1.0]` on each axis, in units of the
/// radius. It is not clamped: larger values draw the dot outside the circle.
#[derive(Debug, Clone, PartialEq)]
pub struct CircleIndicator {
    pub center: Point,
    pub radius: i32,
    pub offset_x: f32,
    pub offset_y: f32,
    pub pressed: bool,
    pub colors: IndicatorColors,
}

impl CircleIndicator {
    pub fn new(center: Point, radius: i32, colors: IndicatorColors) -> Self {
        Self {
            center,
            radius,
            offset_x: 0.0,
            offset_y: 0.0,
            pressed: false,
            colors,
        }
    }

    pub fn set_offset(&mut self, field: AxisField, value: f32) {
        match field {
            AxisField::X => self.offset_x = value,
            AxisField::Y => self.offset_y = value,
        }
    }

    /// Center of the inner dot.
    pub fn dot_center(&self) -> Point {
        let radius = self.radius as f32;
        Point::new(
            self.center.x + (radius * self.offset_x) as i32,
            self.center.y + (radius * self.offset_y) as i32,
        )
    }

    pub fn dot_radius(&self) -> i32 {
        self.radius / 5
    }
}

impl<D: DisplayDriver> DisplayObject<D> for CircleIndicator {
    fn render(&mut self, driver: &mut D) {
        let outer = if self.pressed {
            self.colors.pressed
        } else {
            self.colors.idle
        };
        if let Err(e) = driver.fill_circle(self.center, self.radius, outer) {
            warn!("CircleIndicator: {:#}", e);
        }
        if let Err(e) = driver.fill_circle(self.dot_center(), self.dot_radius(), self.colors.dot) {
            warn!("CircleIndicator: {:#}", e);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::display::drivers::headless::{DrawOp, HeadlessDisplayDriver};

    const COLORS: IndicatorColors = IndicatorColors {
        idle: Color::Rgba(0, 0, 180, 255),
        pressed: Color::Rgba(200, 0, 0, 255),
        dot: Color::Rgba(255, 255, 255, 255),
    };

    #[test]
    fn outer_circle_is_drawn_before_dot() {
        let mut driver = HeadlessDisplayDriver::new();
        let mut circle = CircleIndicator::new(Point::new(100, 100), 50, COLORS);
        circle.set_offset(AxisField::X, 1.0);
        circle.set_offset(AxisField::Y, -0.5);

        circle.render(&mut driver);

        assert_eq!(
            driver.ops(),
            &[
                DrawOp::Circle {
                    center: Point::new(100, 100),
                    radius: 50,
                    color: COLORS.idle,
                },
                DrawOp::Circle {
                    center: Point::new(150, 75),
                    radius: 10,
                    color: COLORS.dot,
                },
            ]
        );
    }

    #[test]
    fn pressed_switches_outer_color() {
        let mut driver = HeadlessDisplayDriver::new();
        let mut circle = CircleIndicator::new(Point::new(0, 0), 10, COLORS);
        circle.pressed = true;
        circle.render(&mut driver);
        assert!(matches!(
            driver.ops()[0],
            DrawOp::Circle { color, .. } if color == COLORS.pressed
        ));
    }

    #[test]
    fn offsets_outside_unit_range_are_drawn_as_is() {
        let mut circle = CircleIndicator::new(Point::new(0, 0), 10, COLORS);
        circle.set_offset(AxisField::X, 2.0);
        assert_eq!(circle.offset_x, 2.0);
        assert_eq!(circle.dot_center(), Point::new(20, 0));
    }
}
