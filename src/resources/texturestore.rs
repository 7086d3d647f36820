//! GPU textures for the loaded sheets.
//!
//! NonSend resource: textures belong to the raylib thread.

use raylib::prelude::*;
use rustc_hash::FxHashMap;

use crate::surface::SheetKey;

#[derive(Default)]
pub struct TextureStore {
    pub map: FxHashMap<SheetKey, Texture2D>,
}

impl TextureStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: SheetKey) -> Option<&Texture2D> {
        self.map.get(&key)
    }

    pub fn insert(&mut self, key: SheetKey, texture: Texture2D) {
        self.map.insert(key, texture);
    }
}
