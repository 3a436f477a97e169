// src/bin/joyview.rs

//! Joystick viewer: indicators tracking sticks and buttons.

use anyhow::Context;
use log::info;
use padprobe::{
    apps::JoystickViewer,
    config::CONFIG,
    input::InputAdapter,
    orchestrator::FrameLoop,
    platform::SdlPlatform,
    session::{init_logging, with_sdl},
    ticker::FixedTicker,
};

fn main() -> anyhow::Result<()> {
    init_logging();
    info!("Starting joyview...");
    let config = &*CONFIG;

    with_sdl(config, |sdl, driver, font| {
        let platform = SdlPlatform::new(sdl).context("Failed to initialize SdlPlatform")?;
        let mut frame_loop = FrameLoop::new(
            platform,
            driver,
            FixedTicker::from_micros(config.timing.tick_micros),
            InputAdapter::new(config.joystick.bindings()),
            config.window.background,
        );
        // Declared after the loop so display objects are released first.
        let mut scene = JoystickViewer::new(&config.joystick, font);
        frame_loop.run(&mut scene);
        frame_loop.shutdown();
        Ok(())
    })?;

    info!("joyview exited.");
    Ok(())
}
