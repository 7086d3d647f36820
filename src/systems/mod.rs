//! Engine systems and the per-frame steps they run.
//!
//! Submodules overview
//! - [`animation`] – sprite animator: input dispatch, clamping, frame selection
//! - [`input`] – read hardware input into [`crate::resources::input::InputState`]
//! - [`render`] – draw the scene tick into the render target and present it
//! - [`tiles`] – tile renderer: one draw call per non-empty cell per layer

pub mod animation;
pub mod input;
pub mod render;
pub mod tiles;
