//! Error raised by the per-frame tick.
//!
//! The frame system inserts this resource when [`Scene::tick`] fails. The
//! host loop checks for it after every schedule run and stops.
//!
//! [`Scene::tick`]: crate::game::Scene::tick

use bevy_ecs::prelude::Resource;

#[derive(Resource, Debug, Clone, PartialEq, Eq)]
pub struct FrameError(pub String);
