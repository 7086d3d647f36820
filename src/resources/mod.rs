//! ECS resources made available to systems.
//!
//! This module groups the long-lived data injected into the ECS world and
//! accessed by systems during execution: configuration, input, the player,
//! map data and rendering handles.
//!
//! Overview
//! - `debugmode` – presence toggles the debug overlay
//! - `frameerror` – error raised by the frame tick, stops the host loop
//! - `gameconfig` – settings loaded from `config.ini`
//! - `input` – keys held this frame and the key → action table
//! - `player` – position, facing and animation counter of the player
//! - `rendertarget` – fixed-resolution framebuffer scaled to the window
//! - `screensize` – logical screen dimensions in pixels (held by the scene)
//! - `spritesheet` – frame layout shared by the player sheets
//! - `texturestore` – GPU textures keyed by [`SheetKey`](crate::surface::SheetKey)
//! - `tilemap` – tile layers and tileset geometry
//! - `windowstate` – window size and minimized flag
pub mod debugmode;
pub mod frameerror;
pub mod gameconfig;
pub mod input;
pub mod player;
pub mod rendertarget;
pub mod screensize;
pub mod spritesheet;
pub mod texturestore;
pub mod tilemap;
pub mod windowstate;
