//! In-memory drawing helpers shared by the integration tests.

#![allow(dead_code)]

use rustc_hash::FxHashMap;

use tilemap_runner::surface::{Blit, DrawSurface, SheetKey};

pub type Rgba = [u8; 4];

pub const CLEAR: Rgba = [0, 0, 0, 0];
pub const RED: Rgba = [255, 0, 0, 255];
pub const GREEN: Rgba = [0, 255, 0, 255];
pub const BLUE: Rgba = [0, 0, 255, 255];

/// RGBA bitmap, row-major.
#[derive(Debug, Clone, PartialEq)]
pub struct Bitmap {
    pub width: i32,
    pub height: i32,
    pub pixels: Vec<Rgba>,
}

impl Bitmap {
    pub fn filled(width: i32, height: i32, color: Rgba) -> Self {
        Self {
            width,
            height,
            pixels: vec![color; (width * height) as usize],
        }
    }

    pub fn get(&self, x: i32, y: i32) -> Rgba {
        self.pixels[(y * self.width + x) as usize]
    }

    pub fn set(&mut self, x: i32, y: i32, color: Rgba) {
        self.pixels[(y * self.width + x) as usize] = color;
    }

    /// Paint a `w` x `h` rectangle.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, color: Rgba) {
        for py in y..y + h {
            for px in x..x + w {
                self.set(px, py, color);
            }
        }
    }

    /// True if every pixel of the rectangle is `color`.
    pub fn rect_is(&self, x: i32, y: i32, w: i32, h: i32, color: Rgba) -> bool {
        (y..y + h).all(|py| (x..x + w).all(|px| self.get(px, py) == color))
    }
}

/// Software rasterizer: copies sheet pixels into a frame, skipping fully
/// transparent pixels, and records every draw call.
pub struct SoftwareSurface {
    pub frame: Bitmap,
    pub sheets: FxHashMap<SheetKey, Bitmap>,
    pub blits: Vec<Blit>,
}

impl SoftwareSurface {
    pub fn new(width: i32, height: i32) -> Self {
        Self {
            frame: Bitmap::filled(width, height, CLEAR),
            sheets: FxHashMap::default(),
            blits: Vec::new(),
        }
    }

    pub fn with_sheet(mut self, key: SheetKey, bitmap: Bitmap) -> Self {
        self.sheets.insert(key, bitmap);
        self
    }

    pub fn blits_from(&self, key: SheetKey) -> usize {
        self.blits.iter().filter(|b| b.sheet == key).count()
    }
}

impl DrawSurface for SoftwareSurface {
    fn draw(&mut self, blit: Blit) -> Result<(), String> {
        let sheet = self
            .sheets
            .get(&blit.sheet)
            .ok_or_else(|| format!("no sheet {:?}", blit.sheet))?;
        if !blit.src.fits_within(sheet.width, sheet.height) {
            return Err(format!("{:?} outside {:?}", blit.src, blit.sheet));
        }
        for sy in 0..blit.src.h {
            for sx in 0..blit.src.w {
                let color = sheet.get(blit.src.x + sx, blit.src.y + sy);
                let (dx, dy) = (blit.dest_x + sx, blit.dest_y + sy);
                if color[3] == 0 || dx < 0 || dy < 0 || dx >= self.frame.width || dy >= self.frame.height {
                    continue;
                }
                self.frame.set(dx, dy, color);
            }
        }
        self.blits.push(blit);
        Ok(())
    }
}

/// A surface holding every sheet at the size of the bundled assets.
pub fn demo_surface() -> SoftwareSurface {
    let mut runner = Bitmap::filled(256, 96, CLEAR);
    runner.fill_rect(0, 0, 256, 64, GREEN);
    SoftwareSurface::new(240, 240)
        .with_sheet(SheetKey::Tiles, Bitmap::filled(400, 400, BLUE))
        .with_sheet(SheetKey::RunnerRight, runner.clone())
        .with_sheet(SheetKey::RunnerLeft, runner)
}
