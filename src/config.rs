// src/config.rs

//! Defines the configuration structures shared by the `padprobe` programs.
//!
//! Every section deserializes with `#[serde(default)]`, so a configuration
//! file only needs to name the values it overrides. The file is JSON and is
//! located through the `PADPROBE_CONFIG` environment variable; without it the
//! built-in defaults apply.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::color::{Color, NamedColor};
use crate::input::adapter::{AxisBinding, AxisField, Bindings, ButtonBinding};
use anyhow::{Context, Result};
use log::{info, warn};
use once_cell::sync::Lazy;

/// Environment variable naming the JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "PADPROBE_CONFIG";

/// Global configuration, loaded once on first access.
pub static CONFIG: Lazy<Config> = Lazy::new(Config::load_or_default);

// --- Top-Level Configuration Structure ---

/// Represents the complete configuration of the demo programs.
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq)]
#[serde(default)]
pub struct Config {
    /// Window and background settings.
    pub window: WindowConfig,
    /// Frame loop timing.
    pub timing: TimingConfig,
    /// Font used by every text label.
    pub font: FontConfig,
    /// Command inspector (`cmdview`) settings.
    pub commands: CommandPanelConfig,
    /// Joystick indicator and binding settings (`joyview`, `joysound`).
    pub joystick: JoystickConfig,
    /// Sound trigger settings (`joysound`).
    pub sound: SoundConfig,
}

impl Config {
    /// Parses a configuration from JSON text.
    pub fn from_json(text: &str) -> Result<Self> {
        serde_json::from_str(text).context("Failed to parse configuration JSON")
    }

    /// Reads and parses the configuration file at `path`.
    pub fn load(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file '{}'", path.display()))?;
        Self::from_json(&text)
    }

    /// Loads the file named by `PADPROBE_CONFIG`, or the defaults.
    ///
    /// A missing variable is silent; an unreadable or invalid file is logged
    /// and the defaults are used instead.
    pub fn load_or_default() -> Self {
        match std::env::var_os(CONFIG_ENV_VAR) {
            Some(path) => {
                let path = PathBuf::from(path);
                match Self::load(&path) {
                    Ok(config) => {
                        info!("Configuration loaded from '{}'", path.display());
                        config
                    }
                    Err(e) => {
                        warn!("{:#}. Using default configuration.", e);
                        Config::default()
                    }
                }
            }
            None => {
                info!("Configuration loaded (using default).");
                Config::default()
            }
        }
    }
}

// --- Window Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct WindowConfig {
    pub title: String,
    pub width: u32,
    pub height: u32,
    /// Color the frame is cleared to before every render.
    pub background: Color,
    /// Hide the mouse cursor while the window has focus.
    pub hide_cursor: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        WindowConfig {
            title: "padprobe".to_string(),
            width: 640,
            height: 480,
            background: Color::Named(NamedColor::Black),
            hide_cursor: true,
        }
    }
}

// --- Timing Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct TimingConfig {
    /// Interval between frame loop ticks in microseconds (~30 Hz).
    pub tick_micros: u64,
}

impl Default for TimingConfig {
    fn default() -> Self {
        TimingConfig { tick_micros: 33_333 }
    }
}

// --- Font Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct FontConfig {
    /// TrueType font file, read into memory at startup.
    pub path: PathBuf,
    pub point_size: u16,
}

impl Default for FontConfig {
    fn default() -> Self {
        FontConfig {
            path: PathBuf::from("/usr/share/fonts/truetype/dejavu/DejaVuSans-Bold.ttf"),
            point_size: 12,
        }
    }
}

// --- Command Panel Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct CommandPanelConfig {
    /// Commands run once at startup, in selection order.
    pub commands: Vec<String>,
    /// Visible rows per output panel.
    pub rows: usize,
    /// Width of the dash row shown for an empty output.
    pub placeholder_width: usize,
    pub text_color: Color,
    pub left_px: i32,
    pub header_top_px: i32,
    pub stdout_top_px: i32,
    pub stderr_top_px: i32,
    pub row_height_px: i32,
}

impl Default for CommandPanelConfig {
    fn default() -> Self {
        CommandPanelConfig {
            commands: vec!["ip".to_string(), "ifconfig".to_string()],
            rows: 10,
            placeholder_width: 80,
            text_color: Color::Named(NamedColor::BrightMagenta),
            left_px: 10,
            header_top_px: 5,
            stdout_top_px: 25,
            stderr_top_px: 180,
            row_height_px: 15,
        }
    }
}

// --- Joystick Configuration ---

/// Placement of one circle indicator.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq)]
pub struct IndicatorLayout {
    pub x: i32,
    pub y: i32,
    pub radius: i32,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct JoystickConfig {
    /// Indicators drawn by `joyview`, in draw order.
    pub indicators: Vec<IndicatorLayout>,
    pub idle_color: Color,
    pub pressed_color: Color,
    pub dot_color: Color,
    pub text_color: Color,
    /// Axis index → indicator offset field.
    pub axes: Vec<AxisBinding>,
    /// Button index → indicator pressed flag.
    pub buttons: Vec<ButtonBinding>,
    /// Button that starts the one-shot sound in `joysound`.
    pub trigger_button: Option<u8>,
}

impl Default for JoystickConfig {
    fn default() -> Self {
        JoystickConfig {
            indicators: vec![
                IndicatorLayout {
                    x: 200,
                    y: 240,
                    radius: 100,
                },
                IndicatorLayout {
                    x: 440,
                    y: 240,
                    radius: 100,
                },
            ],
            idle_color: Color::rgb(0, 0, 180),
            pressed_color: Color::rgb(200, 0, 0),
            dot_color: Color::Named(NamedColor::White),
            text_color: Color::Named(NamedColor::BrightMagenta),
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
                AxisBinding {
                    axis: 3,
                    indicator: 1,
                    field: AxisField::X,
                },
                AxisBinding {
                    axis: 4,
                    indicator: 1,
                    field: AxisField::Y,
                },
            ],
            buttons: vec![
                ButtonBinding {
                    button: 0,
                    indicator: 0,
                },
                ButtonBinding {
                    button: 1,
                    indicator: 1,
                },
            ],
            trigger_button: Some(2),
        }
    }
}

impl JoystickConfig {
    /// Input bindings for the joystick programs.
    ///
    /// A trigger button that collides with a press binding never fires,
    /// because press bindings are matched first; that is logged here.
    pub fn bindings(&self) -> Bindings {
        if let Some(trigger) = self.trigger_button {
            if self.buttons.iter().any(|b| b.button == trigger) {
                warn!(
                    "Trigger button {} is also bound to an indicator; it will not trigger",
                    trigger
                );
            }
        }
        Bindings {
            axes: self.axes.clone(),
            buttons: self.buttons.clone(),
            trigger_button: self.trigger_button,
            advance_on_button: false,
        }
    }
}

// --- Sound Configuration ---

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct SoundConfig {
    /// WAV file to play; a synthesized tone is used when unset.
    pub path: Option<PathBuf>,
    /// Mixer volume, 0-128.
    pub volume: i32,
    pub tone_hz: f32,
    pub tone_millis: u32,
}

impl Default for SoundConfig {
    fn default() -> Self {
        SoundConfig {
            path: None,
            volume: 64,
            tone_hz: 440.0,
            tone_millis: 300,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_the_demo_layout() {
        let config = Config::default();
        assert_eq!(config.timing.tick_micros, 33_333);
        assert_eq!(config.commands.commands, vec!["ip", "ifconfig"]);
        assert_eq!(config.commands.rows, 10);
        assert_eq!(config.joystick.indicators.len(), 2);
    }

    #[test]
    fn partial_json_overrides_only_named_fields() {
        let config =
            Config::from_json(r#"{ "timing": { "tick_micros": 1000 }, "commands": { "rows": 4 } }"#)
                .unwrap();
        assert_eq!(config.timing.tick_micros, 1000);
        assert_eq!(config.commands.rows, 4);
        assert_eq!(config.commands.placeholder_width, 80);
        assert_eq!(config.window, WindowConfig::default());
    }

    #[test]
    fn invalid_json_is_an_error() {
        assert!(Config::from_json("{ not json").is_err());
    }

    #[test]
    fn joystick_bindings_carry_trigger_button() {
        let bindings = JoystickConfig::default().bindings();
        assert_eq!(bindings.trigger_button, Some(2));
        assert!(!bindings.advance_on_button);
        assert_eq!(bindings.axes.len(), 4);
    }
}
