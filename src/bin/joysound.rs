// src/bin/joysound.rs

//! Joystick sound trigger.

use anyhow::Context;
use log::info;
use padprobe::{
    apps::SoundTrigger,
    audio::SdlSound,
    config::CONFIG,
    input::InputAdapter,
    orchestrator::FrameLoop,
    platform::SdlPlatform,
    session::{init_logging, with_sdl},
    ticker::FixedTicker,
};

fn main() -> anyhow::Result<()> {
    init_logging();
    info!("Starting joysound...");
    let config = &*CONFIG;

    with_sdl(config, |sdl, driver, font| {
        let sound = SdlSound::new(sdl, &config.sound).context("Failed to initialize sound")?;
        let platform = SdlPlatform::new(sdl).context("Failed to initialize SdlPlatform")?;
        let mut frame_loop = FrameLoop::new(
            platform,
            driver,
            FixedTicker::from_micros(config.timing.tick_micros),
            InputAdapter::new(config.joystick.bindings()),
            config.window.background,
        );
        // Declared after the loop so display objects are released first.
        let mut scene = SoundTrigger::new(&config.joystick, &config.sound, sound, font);
        frame_loop.run(&mut scene);
        frame_loop.shutdown();
        Ok(())
    })?;

    info!("joysound exited.");
    Ok(())
}
