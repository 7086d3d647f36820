//! Scene setup and the per-frame tick.
//!
//! The three sheets and the default map are embedded in the binary so the
//! program runs from any working directory. Startup decodes them, checks the
//! map against the tileset and the player sheets against the frame layout,
//! then uploads the bitmaps as textures. Any failure here is fatal.

use bevy_ecs::prelude::*;
use log::info;
use raylib::prelude::*;

use crate::resources::gameconfig::GameConfig;
use crate::resources::input::{InputState, KeyBindings};
use crate::resources::player::PlayerState;
use crate::resources::screensize::ScreenSize;
use crate::resources::spritesheet::SpriteSheetLayout;
use crate::resources::texturestore::TextureStore;
use crate::resources::tilemap::{Tilemap, Tileset};
use crate::surface::{DrawSurface, SheetKey};
use crate::systems::animation::animate_player;
use crate::systems::tiles::draw_tiles;

pub const TILES_PNG: &[u8] = include_bytes!("../assets/tiles.png");
pub const RUNNER_PNG: &[u8] = include_bytes!("../assets/runner.png");
pub const RUNNER_LEFT_PNG: &[u8] = include_bytes!("../assets/runner_left.png");
pub const MAP_JSON: &str = include_str!("../assets/map.json");

/// Everything immutable the tick needs: map, tileset geometry, sprite
/// layout and the logical screen size.
#[derive(Resource, Debug, Clone)]
pub struct Scene {
    pub tilemap: Tilemap,
    pub tileset: Tileset,
    pub layout: SpriteSheetLayout,
    pub screen: ScreenSize,
}

impl Scene {
    /// Build a scene, rejecting maps that do not fit the tileset.
    pub fn new(
        tilemap: Tilemap,
        tileset: Tileset,
        layout: SpriteSheetLayout,
        screen: ScreenSize,
    ) -> Result<Self, String> {
        tilemap.validate(&tileset)?;
        Ok(Self {
            tilemap,
            tileset,
            layout,
            screen,
        })
    }

    /// Run one frame: tiles first, then the player on top.
    ///
    /// While drawing is skipped (minimized window) nothing is drawn and the
    /// player does not advance.
    pub fn tick(
        &self,
        player: &mut PlayerState,
        input: &InputState,
        bindings: &KeyBindings,
        surface: &mut impl DrawSurface,
        drawing_skipped: bool,
    ) -> Result<(), String> {
        if drawing_skipped {
            return Ok(());
        }
        draw_tiles(&self.tilemap, &self.tileset, surface)?;
        animate_player(player, input, bindings, &self.layout, self.screen, surface)
    }
}

/// Decoded, not yet uploaded, sheet bitmaps.
pub struct DecodedSheets {
    pub tiles: Image,
    pub runner_right: Image,
    pub runner_left: Image,
}

/// Decode an in-memory PNG.
pub fn decode_png(name: &str, bytes: &[u8]) -> Result<Image, String> {
    let image = Image::load_image_from_mem(".png", bytes)
        .map_err(|e| format!("Failed to decode {}: {}", name, e))?;
    info!("Decoded {} ({}x{})", name, image.width, image.height);
    Ok(image)
}

/// Decode the three embedded sheets.
pub fn decode_sheets() -> Result<DecodedSheets, String> {
    Ok(DecodedSheets {
        tiles: decode_png(SheetKey::Tiles.as_str(), TILES_PNG)?,
        runner_right: decode_png(SheetKey::RunnerRight.as_str(), RUNNER_PNG)?,
        runner_left: decode_png(SheetKey::RunnerLeft.as_str(), RUNNER_LEFT_PNG)?,
    })
}

/// Read the tilemap from `path`, or the embedded map when `None`.
pub fn load_tilemap(path: Option<&std::path::Path>) -> Result<Tilemap, String> {
    match path {
        Some(path) => Tilemap::load_from_file(path),
        None => Tilemap::from_json(MAP_JSON),
    }
}

/// Put the decoded sheets, the map and the configuration together.
pub fn build_scene(
    tilemap: Tilemap,
    sheets: &DecodedSheets,
    config: &GameConfig,
) -> Result<Scene, String> {
    if tilemap.tile_size == 0 {
        return Err("Tilemap tile size must be positive".to_string());
    }
    let tileset = Tileset::new(
        tilemap.tile_size,
        sheets.tiles.width as u32,
        sheets.tiles.height as u32,
    );

    let layout = SpriteSheetLayout::default().with_frames_per_step(config.frames_per_step);
    let (need_w, need_h) = layout.required_size();
    for (key, image) in [
        (SheetKey::RunnerRight, &sheets.runner_right),
        (SheetKey::RunnerLeft, &sheets.runner_left),
    ] {
        if image.width < need_w || image.height < need_h {
            return Err(format!(
                "Sheet '{}' is {}x{}, animation frames need at least {}x{}",
                key.as_str(),
                image.width,
                image.height,
                need_w,
                need_h
            ));
        }
    }

    let screen = ScreenSize {
        w: config.screen_width as i32,
        h: config.screen_height as i32,
    };
    let scene = Scene::new(tilemap, tileset, layout, screen)?;
    info!(
        "Scene ready: {}x{} tiles, {} layers, {} tiles in tileset",
        scene.tilemap.columns,
        scene.tilemap.rows,
        scene.tilemap.layers.len(),
        scene.tileset.tile_count()
    );
    Ok(scene)
}

/// Upload the decoded sheets as GPU textures. Needs an open window.
pub fn upload_textures(
    rl: &mut RaylibHandle,
    th: &RaylibThread,
    sheets: &DecodedSheets,
) -> Result<TextureStore, String> {
    let mut store = TextureStore::new();
    for (key, image) in [
        (SheetKey::Tiles, &sheets.tiles),
        (SheetKey::RunnerRight, &sheets.runner_right),
        (SheetKey::RunnerLeft, &sheets.runner_left),
    ] {
        let texture = rl
            .load_texture_from_image(th, image)
            .map_err(|e| format!("Failed to upload texture '{}': {}", key.as_str(), e))?;
        store.insert(key, texture);
    }
    Ok(store)
}
