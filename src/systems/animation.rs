//! Sprite animator.
//!
//! Turns this frame's held keys into player movement, picks the animation
//! frame and issues the single player draw call.
//!
//! # Frame flow
//!
//! 1. The frame counter advances by one.
//! 2. Every held key is dispatched through [`KeyBindings`] in scan order.
//!    Movement actions accumulate, so Up+Left moves diagonally and
//!    Left+Right cancels out with the later key deciding the facing.
//! 3. The position is clamped so the sprite stays on screen.
//! 4. Status is `Running` if any movement key was held, `Standing`
//!    otherwise, and the frame index comes from the counter and the status
//!    row of the [`SpriteSheetLayout`].

use log::{debug, warn};

use crate::resources::input::{InputState, KeyBindings};
use crate::resources::player::{MoveStatus, PlayerState};
use crate::resources::screensize::ScreenSize;
use crate::resources::spritesheet::SpriteSheetLayout;
use crate::surface::{Blit, DrawSurface};

/// Advance the player by one tick and return the draw call for it.
pub fn advance_player(
    player: &mut PlayerState,
    input: &InputState,
    bindings: &KeyBindings,
    layout: &SpriteSheetLayout,
    screen: ScreenSize,
) -> Blit {
    player.frame_counter += 1;

    let mut status = MoveStatus::Standing;
    for action in input.held.iter().filter_map(|k| bindings.action(*k)) {
        if player.apply(action) {
            status = MoveStatus::Running;
        }
    }
    for key in input.unbound_presses(bindings) {
        warn!("Unsupported key pressed: {:?}", key);
    }
    player.clamp_to(screen, layout.frame_width, layout.frame_height);

    if player.status != status {
        debug!("Player {:?} -> {:?}", player.status, status);
    }
    player.status = status;
    player.frame_index = layout.frame_index(status, player.frame_counter);

    Blit {
        sheet: player.facing.sheet(),
        src: layout.frame_region(status, player.frame_index),
        dest_x: player.x,
        dest_y: player.y,
    }
}

/// Advance the player and draw it. Exactly one draw call per tick.
pub fn animate_player(
    player: &mut PlayerState,
    input: &InputState,
    bindings: &KeyBindings,
    layout: &SpriteSheetLayout,
    screen: ScreenSize,
    surface: &mut impl DrawSurface,
) -> Result<(), String> {
    let blit = advance_player(player, input, bindings, layout, screen);
    surface.draw(blit)
}
