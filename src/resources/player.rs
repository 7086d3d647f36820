//! Player state resource.
//!
//! Position, facing, movement status and the animation frame counter of the
//! single player sprite. Mutated once per frame by
//! [`animate_player`](crate::systems::animation::animate_player); never
//! reset while the process runs.

use bevy_ecs::prelude::Resource;

use crate::resources::input::Action;
use crate::resources::screensize::ScreenSize;
use crate::surface::SheetKey;

/// Which way the player sprite looks.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Facing {
    Left,
    #[default]
    Right,
}

impl Facing {
    /// Sheet drawn for this facing. Left uses its own bitmap, not a mirror.
    pub fn sheet(&self) -> SheetKey {
        match self {
            Facing::Right => SheetKey::RunnerRight,
            Facing::Left => SheetKey::RunnerLeft,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MoveStatus {
    #[default]
    Standing,
    Running,
}

#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PlayerState {
    /// Left edge in screen pixels.
    pub x: i32,
    /// Top edge in screen pixels.
    pub y: i32,
    pub facing: Facing,
    pub status: MoveStatus,
    /// Ticks since startup. Only ever increases.
    pub frame_counter: u64,
    /// Column of the frame drawn on the last tick.
    pub frame_index: u32,
}

impl PlayerState {
    pub fn at(x: i32, y: i32) -> Self {
        Self {
            x,
            y,
            ..Self::default()
        }
    }

    /// Apply one movement action. Facing only changes on horizontal moves.
    /// Returns false for actions that do not move the player.
    pub fn apply(&mut self, action: Action) -> bool {
        match action {
            Action::MoveUp => self.y -= 1,
            Action::MoveDown => self.y += 1,
            Action::MoveLeft => {
                self.x -= 1;
                self.facing = Facing::Left;
            }
            Action::MoveRight => {
                self.x += 1;
                self.facing = Facing::Right;
            }
            Action::ToggleDebug => return false,
        }
        true
    }

    /// Keep a `sprite_w` x `sprite_h` sprite fully on screen.
    pub fn clamp_to(&mut self, screen: ScreenSize, sprite_w: i32, sprite_h: i32) {
        self.x = self.x.clamp(0, (screen.w - sprite_w).max(0));
        self.y = self.y.clamp(0, (screen.h - sprite_h).max(0));
    }
}
