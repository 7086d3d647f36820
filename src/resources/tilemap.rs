//! Tilemap data and tileset geometry.
//!
//! A [`Tilemap`] is a stack of layers, each a row-major list of tile indices
//! covering `columns * rows` cells. A [`Tileset`] describes how tile indices
//! map to square cells of the tileset bitmap. Both are immutable after
//! startup.

use log::info;
use serde::{Deserialize, Serialize};

use crate::surface::Region;

/// One layer of tile indices, row-major.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tilelayer {
    pub name: String,
    pub tiles: Vec<u32>,
    /// Tile index that marks an empty cell. Cells holding it are not drawn.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub empty: Option<u32>,
}

impl Tilelayer {
    pub fn is_empty_cell(&self, tile: u32) -> bool {
        self.empty == Some(tile)
    }
}

/// Tilemap metadata and layers.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct Tilemap {
    /// Size of a tile in pixels.
    pub tile_size: u32,
    /// Map width in tiles.
    pub columns: u32,
    /// Map height in tiles.
    pub rows: u32,
    /// Layers in draw order; later layers cover earlier ones.
    pub layers: Vec<Tilelayer>,
}

impl Tilemap {
    /// Parse a tilemap from its JSON form.
    pub fn from_json(json: &str) -> Result<Self, String> {
        serde_json::from_str(json).map_err(|e| format!("Failed to parse tilemap JSON: {}", e))
    }

    /// Read and parse a tilemap JSON file.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self, String> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| format!("Failed to read tilemap {}: {}", path.display(), e))?;
        let tilemap = Self::from_json(&json)?;
        info!(
            "Loaded tilemap {}: {}x{} tiles, {} layers",
            path.display(),
            tilemap.columns,
            tilemap.rows,
            tilemap.layers.len()
        );
        Ok(tilemap)
    }

    /// Number of cells in every layer, `None` if it overflows.
    pub fn cell_count(&self) -> Option<usize> {
        (self.columns as usize).checked_mul(self.rows as usize)
    }

    /// Screen-space top-left corner of cell `index`.
    pub fn cell_position(&self, index: usize) -> (i32, i32) {
        let columns = self.columns as usize;
        let size = self.tile_size as i32;
        (
            (index % columns) as i32 * size,
            (index / columns) as i32 * size,
        )
    }

    /// Check the map against the tileset it will be drawn with.
    ///
    /// Every layer must cover the whole grid and every tile index must
    /// resolve to a cell of the tileset.
    pub fn validate(&self, tileset: &Tileset) -> Result<(), String> {
        if self.columns == 0 || self.rows == 0 {
            return Err(format!(
                "Tilemap grid must not be empty ({}x{})",
                self.columns, self.rows
            ));
        }
        if self.tile_size != tileset.tile_size {
            return Err(format!(
                "Tilemap tile size {} does not match tileset tile size {}",
                self.tile_size, tileset.tile_size
            ));
        }
        let cells = self
            .cell_count()
            .ok_or_else(|| format!("Tilemap grid {}x{} is too large", self.columns, self.rows))?;
        for layer in &self.layers {
            if layer.tiles.len() != cells {
                return Err(format!(
                    "Layer '{}' has {} tiles, expected {} ({}x{})",
                    layer.name,
                    layer.tiles.len(),
                    cells,
                    self.columns,
                    self.rows
                ));
            }
            if let Some((cell, tile)) = layer
                .tiles
                .iter()
                .enumerate()
                .find(|(_, t)| !layer.is_empty_cell(**t) && !tileset.contains(**t))
            {
                return Err(format!(
                    "Layer '{}' cell {} uses tile {}, tileset only has {} tiles",
                    layer.name,
                    cell,
                    tile,
                    tileset.tile_count()
                ));
            }
        }
        Ok(())
    }
}

/// Geometry of the tileset bitmap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tileset {
    /// Side of a square tile in pixels.
    pub tile_size: u32,
    /// Bitmap width in pixels.
    pub width: u32,
    /// Bitmap height in pixels.
    pub height: u32,
}

impl Tileset {
    pub fn new(tile_size: u32, width: u32, height: u32) -> Self {
        Self {
            tile_size,
            width,
            height,
        }
    }

    /// How many tiles fit on one row of the bitmap.
    pub fn tiles_per_row(&self) -> u32 {
        (self.width / self.tile_size).max(1)
    }

    /// How many full rows of tiles the bitmap holds.
    pub fn tile_rows(&self) -> u32 {
        self.height / self.tile_size
    }

    pub fn tile_count(&self) -> u32 {
        self.tiles_per_row() * self.tile_rows()
    }

    pub fn contains(&self, tile: u32) -> bool {
        tile < self.tile_count()
    }

    /// Source rectangle of `tile`, counting left-to-right, top-to-bottom.
    pub fn source_region(&self, tile: u32) -> Region {
        let per_row = self.tiles_per_row();
        let size = self.tile_size as i32;
        Region::new(
            (tile % per_row) as i32 * size,
            (tile / per_row) as i32 * size,
            size,
            size,
        )
    }
}
