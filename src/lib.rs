//! Tilemap Runner library.
//!
//! Exposes the scene, resources, systems and events of the tile map and
//! sprite animation demo for use in integration tests.

pub mod events;
pub mod game;
pub mod resources;
pub mod surface;
pub mod systems;
