//! Game configuration resource.
//!
//! Settings loaded from an INI configuration file. Provides defaults for a
//! safe startup and methods to load configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [screen]
//! width = 240
//! height = 240
//! scale = 2
//!
//! [window]
//! title = Tilemap Runner
//! target_fps = 60
//! vsync = true
//!
//! [animation]
//! frames_per_step = 5
//!
//! [debug]
//! enabled = false
//! ```

use bevy_ecs::prelude::*;
use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_SCREEN_WIDTH: u32 = 240;
const DEFAULT_SCREEN_HEIGHT: u32 = 240;
const DEFAULT_SCALE: u32 = 2;
const DEFAULT_TITLE: &str = "Tilemap Runner";
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_VSYNC: bool = true;
const DEFAULT_FRAMES_PER_STEP: u32 = 5;
const DEFAULT_DEBUG: bool = false;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration resource.
#[derive(Resource, Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Logical screen width in pixels.
    pub screen_width: u32,
    /// Logical screen height in pixels.
    pub screen_height: u32,
    /// Window pixels per logical pixel.
    pub scale: u32,
    pub title: String,
    /// Target frames per second.
    pub target_fps: u32,
    /// Enable vertical sync.
    pub vsync: bool,
    /// Ticks each animation frame is held.
    pub frames_per_step: u32,
    /// Start with the debug overlay visible.
    pub debug: bool,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            screen_width: DEFAULT_SCREEN_WIDTH,
            screen_height: DEFAULT_SCREEN_HEIGHT,
            scale: DEFAULT_SCALE,
            title: DEFAULT_TITLE.to_string(),
            target_fps: DEFAULT_TARGET_FPS,
            vsync: DEFAULT_VSYNC,
            frames_per_step: DEFAULT_FRAMES_PER_STEP,
            debug: DEFAULT_DEBUG,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply_ini(&config);

        info!(
            "Loaded config: {}x{} screen, scale={}, fps={}, vsync={}, frames_per_step={}",
            self.screen_width,
            self.screen_height,
            self.scale,
            self.target_fps,
            self.vsync,
            self.frames_per_step
        );

        Ok(())
    }

    /// Load configuration from INI text.
    pub fn load_from_str(&mut self, text: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(text.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply_ini(&config);
        Ok(())
    }

    fn apply_ini(&mut self, config: &Ini) {
        // [screen] section
        if let Some(width) = config.getuint("screen", "width").ok().flatten() {
            self.screen_width = width as u32;
        }
        if let Some(height) = config.getuint("screen", "height").ok().flatten() {
            self.screen_height = height as u32;
        }
        if let Some(scale) = config.getuint("screen", "scale").ok().flatten() {
            self.scale = (scale as u32).max(1);
        }

        // [window] section
        if let Some(title) = config.get("window", "title") {
            self.title = title;
        }
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }
        if let Some(vsync) = config.getbool("window", "vsync").ok().flatten() {
            self.vsync = vsync;
        }

        // [animation] section
        if let Some(step) = config.getuint("animation", "frames_per_step").ok().flatten() {
            self.frames_per_step = (step as u32).max(1);
        }

        // [debug] section
        if let Some(enabled) = config.getbool("debug", "enabled").ok().flatten() {
            self.debug = enabled;
        }
    }

    /// Window size in pixels: the logical screen times the scale factor.
    pub fn window_size(&self) -> Result<(i32, i32), String> {
        let scaled = |dim: u32| {
            dim.checked_mul(self.scale)
                .and_then(|px| i32::try_from(px).ok())
                .ok_or_else(|| {
                    format!(
                        "Window size {}x{} at scale {} is too large",
                        self.screen_width, self.screen_height, self.scale
                    )
                })
        };
        Ok((scaled(self.screen_width)?, scaled(self.screen_height)?))
    }
}
