// src/apps/joysound.rs

//! Joystick sound trigger: one indicator lit by a button, and a one-shot
//! sound started by another.

use super::{apply_to_indicators, indicators_from_config};
use crate::audio::SoundPlayer;
use crate::config::{JoystickConfig, SoundConfig};
use crate::display::{DisplayDriver, Point};
use crate::input::Action;
use crate::objects::{CircleIndicator, DisplayObject, TextLabel};
use crate::orchestrator::Scene;
use crate::rasterizer::FontDriver;
use log::{debug, error, info, trace};

pub const STATUS_ORIGIN: Point = Point::new(10, 5);

pub struct SoundTrigger<'f, F, D: DisplayDriver, S> {
    indicators: Vec<CircleIndicator>,
    status: TextLabel<'f, F, D>,
    player: S,
    triggers: usize,
}

fn status_text(playing: bool) -> &'static str {
    if playing {
        "sound: playing"
    } else {
        "sound: idle"
    }
}

impl<'f, F, D, S> SoundTrigger<'f, F, D, S>
where
    F: FontDriver<Surface = D::Surface>,
    D: DisplayDriver,
    S: SoundPlayer,
{
    /// Uses the first configured indicator layout; the player's volume is
    /// set from `sound`.
    pub fn new(joystick: &JoystickConfig, sound: &SoundConfig, mut player: S, font: &'f F) -> Self {
        player.set_volume(sound.volume);
        let layouts = joystick.indicators.get(..1).unwrap_or_default();
        Self {
            indicators: indicators_from_config(layouts, joystick),
            status: TextLabel::new(STATUS_ORIGIN, joystick.text_color, font),
            player,
            triggers: 0,
        }
    }

    pub fn indicators(&self) -> &[CircleIndicator] {
        &self.indicators
    }

    pub fn player(&self) -> &S {
        &self.player
    }

    pub fn player_mut(&mut self) -> &mut S {
        &mut self.player
    }

    /// Playbacks started so far.
    pub fn triggers(&self) -> usize {
        self.triggers
    }

    pub fn status(&self) -> &str {
        self.status.text()
    }

    fn trigger(&mut self) {
        if self.player.is_playing() {
            debug!("SoundTrigger: already playing; ignoring trigger");
            return;
        }
        match self.player.play() {
            Ok(()) => {
                self.triggers += 1;
                info!("SoundTrigger: playback {} started", self.triggers);
            }
            Err(e) => error!("{:#}", e),
        }
    }
}

impl<F, D, S> Scene<D> for SoundTrigger<'_, F, D, S>
where
    F: FontDriver<Surface = D::Surface>,
    D: DisplayDriver,
    S: SoundPlayer,
{
    fn render(&mut self, driver: &mut D) {
        self.status.set_text(status_text(self.player.is_playing()));
        for indicator in &mut self.indicators {
            indicator.render(driver);
        }
        self.status.render(driver);
    }

    fn apply(&mut self, action: Action) {
        if action == Action::Trigger {
            self.trigger();
        } else if !apply_to_indicators(&mut self.indicators, action) {
            trace!("SoundTrigger: ignoring {:?}", action);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::MockSound;
    use crate::display::drivers::headless::{DrawOp, HeadlessDisplayDriver};
    use crate::rasterizer::HeadlessFontDriver;
    use test_log::test;

    type TestTrigger<'f> = SoundTrigger<'f, HeadlessFontDriver, HeadlessDisplayDriver, MockSound>;

    fn new_trigger(font: &HeadlessFontDriver) -> TestTrigger<'_> {
        SoundTrigger::new(
            &JoystickConfig::default(),
            &SoundConfig::default(),
            MockSound::default(),
            font,
        )
    }

    #[test]
    fn only_one_indicator_is_shown() {
        let font = HeadlessFontDriver::new();
        let trigger = new_trigger(&font);
        assert_eq!(trigger.indicators().len(), 1);
        assert_eq!(trigger.player().volume, 64);
    }

    #[test]
    fn trigger_does_not_restart_a_playing_sound() {
        let font = HeadlessFontDriver::new();
        let mut trigger = new_trigger(&font);

        trigger.apply(Action::Trigger);
        trigger.apply(Action::Trigger);
        assert_eq!(trigger.player().plays, 1);

        trigger.player_mut().finish();
        trigger.apply(Action::Trigger);
        assert_eq!(trigger.player().plays, 2);
        assert_eq!(trigger.triggers(), 2);
    }

    #[test]
    fn playback_failure_is_tolerated() {
        let font = HeadlessFontDriver::new();
        let mut trigger = new_trigger(&font);
        trigger.player_mut().fail = true;

        trigger.apply(Action::Trigger);

        assert_eq!(trigger.triggers(), 0);
        assert!(!trigger.player().is_playing());
    }

    #[test]
    fn press_lights_the_indicator() {
        let font = HeadlessFontDriver::new();
        let mut trigger = new_trigger(&font);
        trigger.apply(Action::SetPressed {
            indicator: 0,
            pressed: true,
        });
        assert!(trigger.indicators()[0].pressed);
        assert_eq!(trigger.player().plays, 0);
    }

    #[test]
    fn status_follows_playback() {
        let font = HeadlessFontDriver::new();
        let mut driver = HeadlessDisplayDriver::new();
        let mut trigger = new_trigger(&font);

        trigger.render(&mut driver);
        assert_eq!(trigger.status(), "sound: idle");
        trigger.apply(Action::Trigger);
        trigger.render(&mut driver);
        assert_eq!(trigger.status(), "sound: playing");
        assert!(matches!(
            driver.ops().last(),
            Some(DrawOp::Texture { text, .. }) if text == "sound: playing"
        ));
    }
}
