//! Output surface abstraction.
//!
//! The tile renderer and the sprite animator never talk to raylib directly.
//! They issue draw calls against a [`DrawSurface`], which copies a rectangle
//! of one of the loaded sheets to a position on the frame. The raylib backed
//! implementation lives in [`crate::systems::render`]; tests provide their
//! own in-memory surfaces.

/// Identifies one of the bitmaps loaded at startup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SheetKey {
    /// Tileset shared by every tile layer.
    Tiles,
    /// Player sheet facing right.
    RunnerRight,
    /// Player sheet facing left.
    RunnerLeft,
}

impl SheetKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SheetKey::Tiles => "tiles",
            SheetKey::RunnerRight => "runner",
            SheetKey::RunnerLeft => "runner_left",
        }
    }
}

/// Axis-aligned pixel rectangle inside a sheet.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Region {
    pub x: i32,
    pub y: i32,
    pub w: i32,
    pub h: i32,
}

impl Region {
    pub fn new(x: i32, y: i32, w: i32, h: i32) -> Self {
        Self { x, y, w, h }
    }

    /// True if the region lies fully inside a `width` x `height` bitmap.
    pub fn fits_within(&self, width: i32, height: i32) -> bool {
        self.x >= 0 && self.y >= 0 && self.x + self.w <= width && self.y + self.h <= height
    }
}

/// A single draw call: copy `src` from `sheet` to `(dest_x, dest_y)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Blit {
    pub sheet: SheetKey,
    pub src: Region,
    pub dest_x: i32,
    pub dest_y: i32,
}

/// Target of the per-frame draw calls.
pub trait DrawSurface {
    /// Copy a sheet region to the frame. No scaling or rotation is applied.
    fn draw(&mut self, blit: Blit) -> Result<(), String>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn region_inside_bitmap() {
        assert!(Region::new(0, 0, 16, 16).fits_within(16, 16));
        assert!(Region::new(384, 384, 16, 16).fits_within(400, 400));
    }

    #[test]
    fn region_crossing_edge_is_outside() {
        assert!(!Region::new(392, 0, 16, 16).fits_within(400, 400));
        assert!(!Region::new(-1, 0, 16, 16).fits_within(400, 400));
    }

    #[test]
    fn sheet_keys_have_distinct_names() {
        assert_ne!(SheetKey::Tiles.as_str(), SheetKey::RunnerRight.as_str());
        assert_ne!(SheetKey::RunnerRight.as_str(), SheetKey::RunnerLeft.as_str());
    }
}
