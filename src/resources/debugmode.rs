//! Debug toggle resource.
//!
//! The mere presence of this resource enables the debug overlay drawn on top
//! of the scaled frame. Remove it to hide the overlay.

use bevy_ecs::prelude::Resource;

/// Marker resource: when present, the frame system draws the debug overlay.
#[derive(Resource, Debug, Clone, Copy)]
pub struct DebugMode {}
