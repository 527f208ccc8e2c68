use image::RgbaImage;

use crate::component::{CellBounds, Component, ComponentMap};
use crate::grid::OccupancyMask;

/// Pixel-space crop rectangle. `x1` and `y1` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CropBox {
    pub x0: u32,
    pub y0: u32,
    pub x1: u32,
    pub y1: u32,
}

impl CropBox {
    /// Scale a coarse bounding box up to pixels, clipped to the image.
    pub fn from_bounds(bounds: CellBounds, tile: u32, image_w: u32, image_h: u32) -> Self {
        let x0 = bounds.min_x.saturating_mul(tile).min(image_w);
        let y0 = bounds.min_y.saturating_mul(tile).min(image_h);
        let x1 = (bounds.max_x + 1).saturating_mul(tile).min(image_w);
        let y1 = (bounds.max_y + 1).saturating_mul(tile).min(image_h);
        Self { x0, y0, x1, y1 }
    }

    pub fn width(&self) -> u32 {
        self.x1 - self.x0
    }

    pub fn height(&self) -> u32 {
        self.y1 - self.y0
    }
}

/// A masked crop of one component.
#[derive(Debug, Clone)]
pub struct SpriteCrop {
    pub crop: CropBox,
    pub bounds: CellBounds,
    pub image: RgbaImage,
}

/// Cut a component out of the sheet.
///
/// The crop covers the component's tile-aligned bounding box. Inside it, a
/// pixel keeps its alpha only if its tile belongs to this component and the
/// pixel itself is foreground; every other pixel gets alpha 0 with RGB left
/// as is.
pub fn crop_component(
    image: &RgbaImage,
    mask: &OccupancyMask,
    map: &ComponentMap,
    component: &Component,
    tile: u32,
) -> SpriteCrop {
    let tile = tile.max(1);
    let bounds = component.bounds();
    let crop = CropBox::from_bounds(bounds, tile, image.width(), image.height());
    let label = component.label();

    let mut out =
        image::imageops::crop_imm(image, crop.x0, crop.y0, crop.width(), crop.height()).to_image();

    for (px, py, pixel) in out.enumerate_pixels_mut() {
        let gx = crop.x0 + px;
        let gy = crop.y0 + py;
        if !map.is_member(gx / tile, gy / tile, label) || !mask.is_set(gx, gy) {
            pixel[3] = 0;
        }
    }

    SpriteCrop {
        crop,
        bounds,
        image: out,
    }
}
