use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use log::{debug, info};
use rayon::prelude::*;

use crate::atlas::{Atlas, AtlasBuilder};
use crate::cli::{CompressionLevel, SortMode};
use crate::component::{filter_components, find_components, sort_components};
use crate::error::SlicerError;
use crate::label::{FileStemLabeler, Labeler};
use crate::mask::{downscale_any, foreground_mask};
use crate::output::{save_sprite_image, write_atlas_json};
use crate::sprite::{SpriteCrop, SpriteRecord, SpriteSheet, crop_component, sprite_filename};

/// Masked crops for one sheet, in sprite id order.
#[derive(Debug, Clone)]
pub struct Slices {
    /// Coarse grid width
    pub mask_w: u32,
    /// Coarse grid height
    pub mask_h: u32,
    pub sprites: Vec<SpriteCrop>,
}

/// Extraction settings and the labeler used to name sprites.
pub struct Extractor {
    pub tile: u32,
    pub min_cells: u32,
    pub sort: SortMode,
    pub compress: Option<CompressionLevel>,
    labeler: Option<Box<dyn Labeler>>,
}

impl Default for Extractor {
    fn default() -> Self {
        Self::new()
    }
}

impl Extractor {
    pub fn new() -> Self {
        Self {
            tile: 2,
            min_cells: 1,
            sort: SortMode::TopLeft,
            compress: None,
            labeler: Some(Box::new(FileStemLabeler)),
        }
    }

    pub fn tile(mut self, tile: u32) -> Self {
        self.tile = tile;
        self
    }

    pub fn min_cells(mut self, min_cells: u32) -> Self {
        self.min_cells = min_cells;
        self
    }

    pub fn sort(mut self, sort: SortMode) -> Self {
        self.sort = sort;
        self
    }

    pub fn compress(mut self, compress: Option<CompressionLevel>) -> Self {
        self.compress = compress;
        self
    }

    /// Replace the labeler. `None` names each sprite after its image file.
    pub fn labeler(mut self, labeler: Option<Box<dyn Labeler>>) -> Self {
        self.labeler = labeler;
        self
    }

    /// Reject settings that cannot produce output.
    pub fn validate(&self) -> Result<()> {
        if self.tile < 1 {
            return Err(SlicerError::InvalidTile(self.tile).into());
        }
        if self.min_cells < 1 {
            return Err(SlicerError::InvalidMinCells(self.min_cells).into());
        }
        Ok(())
    }

    /// Find, filter, order and crop every sprite on the sheet without
    /// touching the filesystem.
    pub fn slice(&self, sheet: &SpriteSheet) -> Result<Slices> {
        self.validate()?;

        let mask = foreground_mask(&sheet.image, sheet.has_alpha);
        let small = downscale_any(&mask, self.tile);
        info!(
            "Coarse grid {}x{} (tile {})",
            small.width(),
            small.height(),
            self.tile
        );

        let map = find_components(&small);
        let found = map.components.len();
        let kept = filter_components(map.components.clone(), self.min_cells as usize);
        info!(
            "Found {} components, kept {} with >= {} cells",
            found,
            kept.len(),
            self.min_cells
        );
        let ordered = sort_components(kept, self.sort);

        let sprites: Vec<SpriteCrop> = ordered
            .par_iter()
            .map(|component| crop_component(&sheet.image, &mask, &map, component, self.tile))
            .collect();

        Ok(Slices {
            mask_w: small.width(),
            mask_h: small.height(),
            sprites,
        })
    }

    /// Run the full extraction: save one image per sprite into `out_dir`,
    /// then write the descriptor as `out_dir/atlas_name`.
    ///
    /// The descriptor is only written once every sprite has been saved and
    /// labelled.
    pub fn extract(&self, sheet: &SpriteSheet, out_dir: &Path, atlas_name: &str) -> Result<Atlas> {
        self.validate()?;

        fs::create_dir_all(out_dir).map_err(|e| SlicerError::OutputWrite {
            path: out_dir.to_path_buf(),
            source: e,
        })?;

        let slices = self.slice(sheet)?;

        let filenames: Vec<String> = slices
            .sprites
            .par_iter()
            .enumerate()
            .map(|(id, sprite)| -> Result<String> {
                let filename = sprite_filename(id);
                let path = out_dir.join(&filename);
                save_sprite_image(&sprite.image, &path, self.compress)?;
                debug!("Saved {}", path.display());
                Ok(filename)
            })
            .collect::<Result<_>>()?;

        let mut records = Vec::with_capacity(filenames.len());
        for (id, (sprite, filename)) in slices.sprites.iter().zip(filenames).enumerate() {
            let name = match &self.labeler {
                Some(labeler) => {
                    let path = out_dir.join(&filename);
                    labeler
                        .label(&path)
                        .with_context(|| format!("labeling failed for {}", path.display()))?
                }
                None => filename.clone(),
            };
            records.push(SpriteRecord::new(
                id,
                name,
                &sprite.crop,
                &sprite.bounds,
                filename,
            ));
        }

        let atlas = AtlasBuilder::new(sheet.name.clone(), sheet.width(), sheet.height())
            .tile(self.tile)
            .mask_size(slices.mask_w, slices.mask_h)
            .build(records);

        let atlas_path = out_dir.join(atlas_name);
        write_atlas_json(&atlas, &atlas_path)
            .with_context(|| format!("failed to write atlas: {}", atlas_path.display()))?;
        info!("Wrote {} sprites to {}", atlas.meta.count, out_dir.display());

        Ok(atlas)
    }
}
