//! Window state resource.
//!
//! Tracks the actual window dimensions in pixels, which differ from the
//! logical screen size by the scale factor (or by user resizing), and
//! whether the window is minimized. Updated by the host loop every frame.

use bevy_ecs::prelude::Resource;
use raylib::prelude::*;

/// Current window size and visibility.
#[derive(Resource, Debug, Clone, Copy, PartialEq)]
pub struct WindowState {
    /// Width in pixels.
    pub w: i32,
    /// Height in pixels.
    pub h: i32,
    /// While minimized nothing is drawn and the scene does not advance.
    pub minimized: bool,
}

impl WindowState {
    pub fn new(w: i32, h: i32) -> Self {
        Self {
            w,
            h,
            minimized: false,
        }
    }

    pub fn drawing_skipped(&self) -> bool {
        self.minimized
    }

    /// Destination rectangle for the render target inside the window.
    ///
    /// Keeps the game's aspect ratio, fits the window and centers the
    /// content (letterbox/pillarbox as needed).
    pub fn calculate_letterbox(&self, game_width: u32, game_height: u32) -> Rectangle {
        let game_w = game_width as f32;
        let game_h = game_height as f32;
        let window_w = self.w as f32;
        let window_h = self.h as f32;

        let game_aspect = game_w / game_h;
        let window_aspect = window_w / window_h;

        if window_aspect > game_aspect {
            // pillarbox
            let scale = window_h / game_h;
            let scaled_w = game_w * scale;
            Rectangle {
                x: (window_w - scaled_w) / 2.0,
                y: 0.0,
                width: scaled_w,
                height: window_h,
            }
        } else {
            // letterbox
            let scale = window_w / game_w;
            let scaled_h = game_h * scale;
            Rectangle {
                x: 0.0,
                y: (window_h - scaled_h) / 2.0,
                width: window_w,
                height: scaled_h,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_exact_scale_fills_window() {
        let r = WindowState::new(480, 480).calculate_letterbox(240, 240);
        assert!(approx(r.x, 0.0) && approx(r.y, 0.0));
        assert!(approx(r.width, 480.0) && approx(r.height, 480.0));
    }

    #[test]
    fn test_wide_window_pillarboxes() {
        let r = WindowState::new(800, 480).calculate_letterbox(240, 240);
        assert!(approx(r.width, 480.0));
        assert!(approx(r.x, 160.0));
        assert!(approx(r.y, 0.0));
    }

    #[test]
    fn test_tall_window_letterboxes() {
        let r = WindowState::new(480, 600).calculate_letterbox(240, 240);
        assert!(approx(r.height, 480.0));
        assert!(approx(r.y, 60.0));
    }

    #[test]
    fn test_minimized_skips_drawing() {
        let mut w = WindowState::new(480, 480);
        assert!(!w.drawing_skipped());
        w.minimized = true;
        assert!(w.drawing_skipped());
    }
}
