//! Tile renderer.
//!
//! Walks every layer of the [`Tilemap`] in order and issues one draw call per
//! non-empty cell, sourced from the shared tileset. Later layers are drawn
//! after earlier ones and so cover them.

use log::trace;

use crate::resources::tilemap::{Tilemap, Tileset};
use crate::surface::{Blit, DrawSurface, SheetKey};

/// Draw calls for every non-empty cell, layer by layer, row-major.
pub fn tile_blits<'a>(
    tilemap: &'a Tilemap,
    tileset: &'a Tileset,
) -> impl Iterator<Item = Blit> + 'a {
    tilemap.layers.iter().flat_map(move |layer| {
        layer
            .tiles
            .iter()
            .enumerate()
            .filter(move |(_, tile)| !layer.is_empty_cell(**tile))
            .map(move |(cell, tile)| {
                let (dest_x, dest_y) = tilemap.cell_position(cell);
                Blit {
                    sheet: SheetKey::Tiles,
                    src: tileset.source_region(*tile),
                    dest_x,
                    dest_y,
                }
            })
    })
}

/// Draw the whole tilemap. Returns the number of draw calls issued.
pub fn draw_tiles(
    tilemap: &Tilemap,
    tileset: &Tileset,
    surface: &mut impl DrawSurface,
) -> Result<usize, String> {
    let mut drawn = 0;
    for blit in tile_blits(tilemap, tileset) {
        surface.draw(blit)?;
        drawn += 1;
    }
    trace!("Drew {} tiles", drawn);
    Ok(drawn)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::resources::tilemap::Tilelayer;
    use crate::surface::Region;

    #[derive(Default)]
    struct Recorder {
        blits: Vec<Blit>,
    }

    impl DrawSurface for Recorder {
        fn draw(&mut self, blit: Blit) -> Result<(), String> {
            self.blits.push(blit);
            Ok(())
        }
    }

    fn layer(name: &str, tiles: Vec<u32>, empty: Option<u32>) -> Tilelayer {
        Tilelayer {
            name: name.into(),
            tiles,
            empty,
        }
    }

    fn map(layers: Vec<Tilelayer>) -> Tilemap {
        Tilemap {
            tile_size: 16,
            columns: 3,
            rows: 2,
            layers,
        }
    }

    #[test]
    fn test_one_draw_per_cell_per_layer() {
        let m = map(vec![
            layer("a", vec![1; 6], None),
            layer("b", vec![2; 6], None),
        ]);
        let mut rec = Recorder::default();
        let drawn = draw_tiles(&m, &Tileset::new(16, 400, 400), &mut rec).unwrap();
        assert_eq!(drawn, 12);
        assert_eq!(rec.blits.len(), 12);
        assert!(rec.blits[..6].iter().all(|b| b.src.x == 16));
        assert!(rec.blits[6..].iter().all(|b| b.src.x == 32));
    }

    #[test]
    fn test_destination_and_source_per_cell() {
        let m = map(vec![layer("a", vec![0, 1, 2, 25, 26, 243], None)]);
        let blits: Vec<Blit> = tile_blits(&m, &Tileset::new(16, 400, 400)).collect();
        assert_eq!((blits[2].dest_x, blits[2].dest_y), (32, 0));
        assert_eq!((blits[3].dest_x, blits[3].dest_y), (0, 16));
        assert_eq!(blits[3].src, Region::new(0, 16, 16, 16));
        assert_eq!(blits[5].src, Region::new(288, 144, 16, 16));
        assert!(blits.iter().all(|b| b.sheet == SheetKey::Tiles));
    }

    #[test]
    fn test_empty_cells_are_skipped() {
        let m = map(vec![layer("props", vec![0, 5, 0, 0, 7, 0], Some(0))]);
        let blits: Vec<Blit> = tile_blits(&m, &Tileset::new(16, 400, 400)).collect();
        assert_eq!(blits.len(), 2);
        assert_eq!((blits[0].dest_x, blits[0].dest_y), (16, 0));
        assert_eq!((blits[1].dest_x, blits[1].dest_y), (16, 16));
    }

    #[test]
    fn test_surface_error_stops_the_pass() {
        struct Failing(usize);
        impl DrawSurface for Failing {
            fn draw(&mut self, _: Blit) -> Result<(), String> {
                self.0 += 1;
                Err("texture missing".into())
            }
        }
        let m = map(vec![layer("a", vec![1; 6], None)]);
        let mut surface = Failing(0);
        let err = draw_tiles(&m, &Tileset::new(16, 400, 400), &mut surface).unwrap_err();
        assert_eq!(err, "texture missing");
        assert_eq!(surface.0, 1);
    }
}
