//! Logical screen size.
//!
//! The fixed resolution the scene is drawn at, before scaling to the window.
//! Player clamping and the render target both use it.

/// Logical screen size in pixels.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
}
