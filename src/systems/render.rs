//! Frame system.
//!
//! Draws the scene tick into the fixed-resolution [`RenderTarget`], then
//! stretches the target over the window and, when [`DebugMode`] is present,
//! prints the overlay on top. Tick errors are stored as a [`FrameError`]
//! resource for the host loop.
use bevy_ecs::prelude::*;
use raylib::prelude::*;

use crate::game::Scene;
use crate::resources::debugmode::DebugMode;
use crate::resources::frameerror::FrameError;
use crate::resources::input::{InputState, KeyBindings};
use crate::resources::player::PlayerState;
use crate::resources::rendertarget::RenderTarget;
use crate::resources::texturestore::TextureStore;
use crate::resources::windowstate::WindowState;
use crate::surface::{Blit, DrawSurface};

/// [`DrawSurface`] backed by a raylib draw handle and the loaded textures.
pub struct RaylibSurface<'a, D: RaylibDraw> {
    pub d: &'a mut D,
    pub textures: &'a TextureStore,
}

impl<D: RaylibDraw> DrawSurface for RaylibSurface<'_, D> {
    fn draw(&mut self, blit: Blit) -> Result<(), String> {
        let tex = self
            .textures
            .get(blit.sheet)
            .ok_or_else(|| format!("Texture '{}' is not loaded", blit.sheet.as_str()))?;
        let src = Rectangle {
            x: blit.src.x as f32,
            y: blit.src.y as f32,
            width: blit.src.w as f32,
            height: blit.src.h as f32,
        };
        let pos = Vector2 {
            x: blit.dest_x as f32,
            y: blit.dest_y as f32,
        };
        self.d.draw_texture_rec(tex, src, pos, Color::WHITE);
        Ok(())
    }
}

/// Render one frame and present it.
#[allow(clippy::too_many_arguments)]
pub fn frame_system(
    mut rl: NonSendMut<RaylibHandle>,
    th: NonSend<RaylibThread>,
    mut target: NonSendMut<RenderTarget>,
    textures: NonSend<TextureStore>,
    scene: Res<Scene>,
    mut player: ResMut<PlayerState>,
    input: Res<InputState>,
    bindings: Res<KeyBindings>,
    window: Res<WindowState>,
    debug: Option<Res<DebugMode>>,
    mut commands: Commands,
) {
    // Minimized: leave the target and the player untouched, only present
    if !window.drawing_skipped() {
        let result = {
            let mut t = rl.begin_texture_mode(&th, &mut target.texture);
            t.clear_background(Color::BLACK);
            let mut surface = RaylibSurface {
                d: &mut t,
                textures: &textures,
            };
            scene.tick(&mut player, &input, &bindings, &mut surface, false)
        };
        if let Err(e) = result {
            commands.insert_resource(FrameError(e));
        }
    }

    let dest = window.calculate_letterbox(target.width, target.height);
    let src = target.source_rect();

    let mut d = rl.begin_drawing(&th);
    d.clear_background(Color::BLACK);
    d.draw_texture_pro(
        &target.texture,
        src,
        dest,
        Vector2 { x: 0.0, y: 0.0 },
        0.0,
        Color::WHITE,
    );

    if debug.is_some() {
        draw_debug_overlay(&mut d, &player);
    }
}

/// Debug text in window coordinates.
fn draw_debug_overlay(d: &mut RaylibDrawHandle, player: &PlayerState) {
    let fps = d.get_fps();
    d.draw_text(
        &format!("DEBUG (F11 to toggle) | FPS: {}", fps),
        10,
        10,
        10,
        Color::WHITE,
    );
    d.draw_text(
        &format!(
            "Player ({}, {}) {:?} {:?} frame {} tick {}",
            player.x, player.y, player.facing, player.status, player.frame_index, player.frame_counter
        ),
        10,
        24,
        10,
        Color::WHITE,
    );
}
