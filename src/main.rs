//! Tilemap Runner main entry point.
//!
//! A small 2D demo written in Rust using:
//! - **raylib** for windowing, image decoding and drawing
//! - **bevy_ecs** for resources, systems and the frame schedule
//!
//! A two-layer tile map fills the screen and an animated runner moves over
//! it with the arrow keys. F11 toggles a debug overlay.
//!
//! # Project Structure
//!
//! - `events` – debug overlay toggle event and observer
//! - `game` – embedded assets, scene setup and the per-frame tick
//! - `resources` – ECS resources (config, input, player, tilemap, etc.)
//! - `surface` – draw call abstraction shared by the renderers
//! - `systems` – input, tile renderer, sprite animator and frame systems
//!
//! # Main Loop
//!
//! 1. Load `config.ini`, parse the command line
//! 2. Decode the embedded sheets and build the scene (fatal on failure)
//! 3. Open the window, upload textures, insert resources
//! 4. Each frame: scan input, tick the scene into the render target,
//!    present it scaled to the window
//! 5. Stop when the window closes or a frame fails
//!
//! # Running
//!
//! ```sh
//! cargo run --release
//! ```

// Do not create console on Windows
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

use bevy_ecs::observer::Observer;
use bevy_ecs::prelude::*;
use clap::Parser;
use log::{error, info, warn};
use std::path::PathBuf;
use tilemap_runner::events::switchdebug::switch_debug_observer;
use tilemap_runner::game;
use tilemap_runner::resources::debugmode::DebugMode;
use tilemap_runner::resources::frameerror::FrameError;
use tilemap_runner::resources::gameconfig::GameConfig;
use tilemap_runner::resources::input::{InputState, KeyBindings};
use tilemap_runner::resources::player::PlayerState;
use tilemap_runner::resources::rendertarget::RenderTarget;
use tilemap_runner::resources::windowstate::WindowState;
use tilemap_runner::systems::input::{update_input_state, window_visible};
use tilemap_runner::systems::render::frame_system;

/// Tile map rendering and sprite animation demo.
#[derive(Parser)]
#[command(version, about = "Tile map rendering and sprite animation on raylib")]
struct Cli {
    /// Configuration file (default: ./config.ini).
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Load the tile map from a JSON file instead of the embedded one.
    #[arg(long, value_name = "PATH")]
    map: Option<PathBuf>,

    /// Start with the debug overlay visible.
    #[arg(long)]
    debug: bool,
}

fn fatal(message: impl AsRef<str>) -> ! {
    error!("{}", message.as_ref());
    std::process::exit(1);
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let cli = Cli::parse();

    // --------------- Configuration ---------------
    let mut config = match &cli.config {
        Some(path) => GameConfig::with_path(path),
        None => GameConfig::new(),
    };
    if let Err(e) = config.load_from_file() {
        if cli.config.is_some() {
            warn!("{}, using defaults", e);
        } else {
            info!("No config file, using defaults ({})", e);
        }
    }
    if cli.debug {
        config.debug = true;
    }

    // --------------- Assets & scene ---------------
    let sheets = game::decode_sheets().unwrap_or_else(|e| fatal(e));
    let tilemap = game::load_tilemap(cli.map.as_deref()).unwrap_or_else(|e| fatal(e));
    let scene = game::build_scene(tilemap, &sheets, &config).unwrap_or_else(|e| fatal(e));

    // --------------- Raylib window ---------------
    let (window_width, window_height) = config.window_size().unwrap_or_else(|e| fatal(e));
    let (mut rl, thread) = raylib::init()
        .size(window_width, window_height)
        .resizable()
        .title(&config.title)
        .build();
    rl.set_target_fps(config.target_fps);
    // Keys are only read through the input scan
    rl.set_exit_key(None);
    if config.vsync {
        unsafe {
            raylib::ffi::SetWindowState(raylib::ffi::ConfigFlags::FLAG_VSYNC_HINT as u32);
        }
    }

    let textures = game::upload_textures(&mut rl, &thread, &sheets).unwrap_or_else(|e| fatal(e));
    drop(sheets);
    let render_target = RenderTarget::new(
        &mut rl,
        &thread,
        config.screen_width,
        config.screen_height,
    )
    .unwrap_or_else(|e| fatal(e));

    // --------------- ECS world + resources ---------------
    let mut world = World::new();
    world.insert_resource(WindowState::new(
        rl.get_screen_width(),
        rl.get_screen_height(),
    ));
    world.insert_resource(InputState::default());
    world.insert_resource(KeyBindings::default());
    world.insert_resource(PlayerState::default());
    world.insert_resource(scene);
    if config.debug {
        world.insert_resource(DebugMode {});
    }
    world.insert_resource(config);
    world.insert_non_send_resource(textures);
    world.insert_non_send_resource(render_target);
    world.insert_non_send_resource(rl);
    world.insert_non_send_resource(thread);

    world.spawn(Observer::new(switch_debug_observer));
    world.flush();

    let mut update = Schedule::default();
    update.add_systems(update_input_state.run_if(window_visible));
    update.add_systems(frame_system.after(update_input_state));

    if let Err(e) = update.initialize(&mut world) {
        fatal(format!("Failed to initialize schedule: {}", e));
    }

    info!("Starting main loop");
    // --------------- Main loop ---------------
    while !world
        .non_send_resource::<raylib::RaylibHandle>()
        .window_should_close()
    {
        let (w, h, minimized) = {
            let rl = world.non_send_resource::<raylib::RaylibHandle>();
            (
                rl.get_screen_width(),
                rl.get_screen_height(),
                rl.is_window_minimized(),
            )
        };
        {
            let mut window = world.resource_mut::<WindowState>();
            window.w = w;
            window.h = h;
            window.minimized = minimized;
        }

        update.run(&mut world);

        if let Some(FrameError(e)) = world.get_resource::<FrameError>() {
            fatal(format!("Stopping after frame error: {}", e));
        }
    }
    info!("Window closed, bye");
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    #[test]
    fn test_cli_defaults() {
        let cli = Cli::try_parse_from(["tilemap-runner"]).unwrap();
        assert!(cli.config.is_none());
        assert!(cli.map.is_none());
        assert!(!cli.debug);
    }

    #[test]
    fn test_cli_map_config_and_debug() {
        let cli = Cli::try_parse_from([
            "tilemap-runner",
            "--map",
            "levels/other.json",
            "--config",
            "alt.ini",
            "--debug",
        ])
        .unwrap();
        assert_eq!(cli.map.as_deref(), Some(Path::new("levels/other.json")));
        assert_eq!(cli.config.as_deref(), Some(Path::new("alt.ini")));
        assert!(cli.debug);
    }

    #[test]
    fn test_cli_rejects_unknown_flag() {
        assert!(Cli::try_parse_from(["tilemap-runner", "--fullscreen"]).is_err());
        assert!(Cli::try_parse_from(["tilemap-runner", "--map"]).is_err());
    }
}
