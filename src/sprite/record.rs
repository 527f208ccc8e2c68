use serde::{Deserialize, Serialize};

use super::cropper::CropBox;
use crate::component::CellBounds;

/// Output file name for the sprite with the given id.
pub fn sprite_filename(id: usize) -> String {
    format!("sprite_{:04}.png", id)
}

/// Descriptor entry for one extracted sprite.
///
/// Field order is the serialized key order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpriteRecord {
    /// Dense index assigned after filtering and sorting
    pub id: usize,
    /// Name returned by the labeler
    pub name: String,
    /// Crop position in the sheet (pixels)
    pub x: u32,
    pub y: u32,
    /// Crop size (pixels)
    pub w: u32,
    pub h: u32,
    /// Bounding box position in the coarse grid (cells)
    pub mask_x: u32,
    pub mask_y: u32,
    /// Bounding box size in the coarse grid (cells)
    pub mask_w: u32,
    pub mask_h: u32,
    /// Output image file name
    pub image: String,
}

impl SpriteRecord {
    pub fn new(id: usize, name: String, crop: &CropBox, bounds: &CellBounds, image: String) -> Self {
        Self {
            id,
            name,
            x: crop.x0,
            y: crop.y0,
            w: crop.width(),
            h: crop.height(),
            mask_x: bounds.min_x,
            mask_y: bounds.min_y,
            mask_w: bounds.width(),
            mask_h: bounds.height(),
            image,
        }
    }
}
