// src/bin/cmdview.rs

//! Command inspector: shows the output of each configured command.

use anyhow::Context;
use log::info;
use padprobe::{
    apps::CommandInspector,
    commands::run_command,
    config::CONFIG,
    input::{adapter::Bindings, InputAdapter},
    orchestrator::FrameLoop,
    platform::SdlPlatform,
    session::{init_logging, with_sdl},
    ticker::FixedTicker,
};

fn main() -> anyhow::Result<()> {
    init_logging();
    info!("Starting cmdview...");
    let config = &*CONFIG;

    // Commands run once, before the window opens.
    let outputs: Vec<_> = config
        .commands
        .commands
        .iter()
        .map(|name| run_command(name, config.commands.placeholder_width))
        .collect();

    with_sdl(config, |sdl, driver, font| {
        let platform = SdlPlatform::new(sdl).context("Failed to initialize SdlPlatform")?;
        let mut frame_loop = FrameLoop::new(
            platform,
            driver,
            FixedTicker::from_micros(config.timing.tick_micros),
            InputAdapter::new(Bindings::selection_only()),
            config.window.background,
        );
        // Declared after the loop so display objects are released first.
        let mut scene = CommandInspector::new(outputs, &config.commands, font)?;
        frame_loop.run(&mut scene);
        frame_loop.shutdown();
        Ok(())
    })?;

    info!("cmdview exited.");
    Ok(())
}
