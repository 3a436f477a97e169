// src/lib.rs

//! Input-driven render loop and display objects shared by the `cmdview`,
//! `joyview` and `joysound` programs.

pub mod apps;
pub mod audio;
pub mod color;
pub mod commands;
pub mod config;
pub mod display;
pub mod input;
pub mod keys;
pub mod objects;
pub mod orchestrator;
pub mod platform;
pub mod rasterizer;
pub mod session;
pub mod ticker;
