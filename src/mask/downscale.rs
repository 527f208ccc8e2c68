use rayon::prelude::*;

use crate::grid::{Grid, OccupancyGrid, OccupancyMask};

/// Downscale a pixel mask into `tile x tile` blocks.
///
/// A coarse cell is occupied if any pixel of its block is set. Blocks in the
/// last row and column are clipped to the image edge. The result is
/// `ceil(w / tile) x ceil(h / tile)`. `tile` must be at least 1.
pub fn downscale_any(mask: &OccupancyMask, tile: u32) -> OccupancyGrid {
    let tile = tile.max(1);
    let (w, h) = (mask.width(), mask.height());
    let sw = w.div_ceil(tile);
    let sh = h.div_ceil(tile);
    if sw == 0 || sh == 0 {
        return Grid::new(sw, sh);
    }

    let mut cells = vec![false; sw as usize * sh as usize];
    cells
        .par_chunks_mut(sw as usize)
        .enumerate()
        .for_each(|(sy, out)| {
            let sy = sy as u32;
            let y0 = sy * tile;
            let y1 = (y0 + tile).min(h);
            for (sx, cell) in out.iter_mut().enumerate() {
                let x0 = sx as u32 * tile;
                let x1 = (x0 + tile).min(w);
                *cell = (y0..y1).any(|y| {
                    mask.row(y)
                        .is_some_and(|row| row[x0 as usize..x1 as usize].contains(&true))
                });
            }
        });

    Grid::from_vec(sw, sh, cells).unwrap_or_else(|| Grid::new(sw, sh))
}
