use log::debug;

use super::{Atlas, AtlasMeta};
use crate::sprite::SpriteRecord;

/// Collects run metadata and assembles the final [`Atlas`].
pub struct AtlasBuilder {
    pub source: String,
    pub image_w: u32,
    pub image_h: u32,
    pub tile: u32,
    pub mask_w: u32,
    pub mask_h: u32,
}

impl AtlasBuilder {
    pub fn new(source: impl Into<String>, image_w: u32, image_h: u32) -> Self {
        Self {
            source: source.into(),
            image_w,
            image_h,
            tile: 1,
            mask_w: image_w,
            mask_h: image_h,
        }
    }

    pub fn tile(mut self, tile: u32) -> Self {
        self.tile = tile;
        self
    }

    pub fn mask_size(mut self, mask_w: u32, mask_h: u32) -> Self {
        self.mask_w = mask_w;
        self.mask_h = mask_h;
        self
    }

    /// Build the atlas from the finished sprite records, in id order.
    pub fn build(self, sprites: Vec<SpriteRecord>) -> Atlas {
        debug!("Assembling atlas for {} sprites", sprites.len());
        Atlas {
            meta: AtlasMeta {
                source: self.source,
                image_w: self.image_w,
                image_h: self.image_h,
                tile: self.tile,
                mask_w: self.mask_w,
                mask_h: self.mask_h,
                count: sprites.len(),
            },
            sprites,
        }
    }
}
