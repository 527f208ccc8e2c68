use serde::{Deserialize, Serialize};

use crate::sprite::SpriteRecord;

/// Run metadata recorded at the top of the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AtlasMeta {
    /// Input file name
    pub source: String,
    pub image_w: u32,
    pub image_h: u32,
    pub tile: u32,
    /// Coarse grid dimensions
    pub mask_w: u32,
    pub mask_h: u32,
    /// Number of sprites written
    pub count: usize,
}

/// Descriptor for one extraction run
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Atlas {
    pub meta: AtlasMeta,
    pub sprites: Vec<SpriteRecord>,
}
