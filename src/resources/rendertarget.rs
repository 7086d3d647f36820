//! Render target resource for fixed-resolution rendering.
//!
//! The scene is drawn into a texture at the logical screen size, then the
//! frame system stretches that texture over the window with nearest-neighbor
//! filtering so tiles and sprites stay crisp at any scale.

use raylib::ffi::{self, TextureFilter};
use raylib::prelude::*;

/// Off-screen framebuffer at the logical screen resolution.
///
/// This is a NonSend resource because `RenderTexture2D` contains GPU
/// resources that must be accessed from the main thread.
pub struct RenderTarget {
    /// The underlying raylib render texture.
    pub texture: RenderTexture2D,
    pub width: u32,
    pub height: u32,
}

impl RenderTarget {
    /// Create a render target of `width` x `height` logical pixels.
    pub fn new(
        rl: &mut RaylibHandle,
        th: &RaylibThread,
        width: u32,
        height: u32,
    ) -> Result<Self, String> {
        let texture = rl
            .load_render_texture(th, width, height)
            .map_err(|e| format!("Failed to create render texture: {}", e))?;

        unsafe {
            ffi::SetTextureFilter(
                texture.texture,
                TextureFilter::TEXTURE_FILTER_POINT as i32,
            );
        }

        Ok(Self {
            texture,
            width,
            height,
        })
    }

    /// Source rectangle for drawing this texture.
    ///
    /// Height is negative to flip the Y axis, compensating for OpenGL's
    /// inverted texture coordinates.
    pub fn source_rect(&self) -> Rectangle {
        Rectangle {
            x: 0.0,
            y: 0.0,
            width: self.width as f32,
            height: -(self.height as f32),
        }
    }
}
