use std::collections::HashMap;

use image::RgbaImage;
use log::debug;
use rayon::prelude::*;

use crate::grid::{Grid, OccupancyMask};

/// Above this many pixels the background sampler only visits every other
/// pixel in both axes.
const FULL_SAMPLE_LIMIT: u64 = 2_000_000;

/// Build the full-resolution foreground mask for a sheet.
///
/// With an alpha channel, any pixel with alpha > 0 is foreground. Without
/// one, the most common RGB value is taken as the background and every pixel
/// with a different RGB value is foreground.
pub fn foreground_mask(image: &RgbaImage, has_alpha: bool) -> OccupancyMask {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Grid::new(width, height);
    }

    let row_bytes = width as usize * 4;
    let mut cells = vec![false; width as usize * height as usize];

    if has_alpha {
        cells
            .par_chunks_mut(width as usize)
            .zip(image.as_raw().par_chunks(row_bytes))
            .for_each(|(out, row)| {
                for (cell, px) in out.iter_mut().zip(row.chunks_exact(4)) {
                    *cell = px[3] > 0;
                }
            });
    } else {
        let bg = most_common_rgb(image);
        debug!("Background color: rgb({}, {}, {})", bg[0], bg[1], bg[2]);
        cells
            .par_chunks_mut(width as usize)
            .zip(image.as_raw().par_chunks(row_bytes))
            .for_each(|(out, row)| {
                for (cell, px) in out.iter_mut().zip(row.chunks_exact(4)) {
                    *cell = px[..3] != bg[..];
                }
            });
    }

    // Length always matches: one cell per pixel
    Grid::from_vec(width, height, cells).unwrap_or_else(|| Grid::new(width, height))
}

/// Find the most frequent RGB value in the image.
///
/// Ties go to the color that was encountered first in row-major sampling
/// order. An image with no pixels yields black.
pub fn most_common_rgb(image: &RgbaImage) -> [u8; 3] {
    let (width, height) = image.dimensions();
    let step = if u64::from(width) * u64::from(height) <= FULL_SAMPLE_LIMIT {
        1
    } else {
        2
    };

    let mut counts: HashMap<[u8; 3], usize> = HashMap::new();
    let mut first_seen: Vec<[u8; 3]> = Vec::new();

    for y in (0..height).step_by(step) {
        for x in (0..width).step_by(step) {
            let p = image.get_pixel(x, y);
            let rgb = [p[0], p[1], p[2]];
            let count = counts.entry(rgb).or_insert_with(|| {
                first_seen.push(rgb);
                0
            });
            *count += 1;
        }
    }

    let mut best = [0, 0, 0];
    let mut best_count = 0;
    for rgb in first_seen {
        let count = counts.get(&rgb).copied().unwrap_or(0);
        if count > best_count {
            best = rgb;
            best_count = count;
        }
    }
    best
}
