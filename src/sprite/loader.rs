use std::path::{Path, PathBuf};

use anyhow::Result;
use image::{DynamicImage, ImageReader, RgbaImage};
use log::info;

use crate::error::SlicerError;

/// A decoded sprite sheet.
#[derive(Debug, Clone)]
pub struct SpriteSheet {
    /// Original file path
    pub path: PathBuf,
    /// File name with extension, recorded as the atlas source
    pub name: String,
    /// Pixels as RGBA regardless of the source color type
    pub image: RgbaImage,
    /// Whether the source carried an alpha channel
    pub has_alpha: bool,
}

impl SpriteSheet {
    /// Wrap an already decoded image.
    pub fn from_image(name: impl Into<String>, image: DynamicImage) -> Self {
        let name = name.into();
        // Paletted or RGB sources with a transparency chunk decode with an
        // alpha channel, so they use the alpha rule too
        let has_alpha = image.color().has_alpha();
        Self {
            path: PathBuf::from(&name),
            name,
            image: image.into_rgba8(),
            has_alpha,
        }
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }
}

/// Load and decode a sprite sheet from disk.
pub fn load_sheet(path: &Path) -> Result<SpriteSheet> {
    if !path.exists() {
        return Err(SlicerError::InputNotFound(path.to_path_buf()).into());
    }

    let img = ImageReader::open(path)
        .map_err(|e| SlicerError::ImageLoad {
            path: path.to_path_buf(),
            source: e.into(),
        })?
        .decode()
        .map_err(|e| SlicerError::ImageLoad {
            path: path.to_path_buf(),
            source: e,
        })?;

    let name = path
        .file_name()
        .and_then(|s| s.to_str())
        .unwrap_or("unknown")
        .to_string();

    let mut sheet = SpriteSheet::from_image(name, img);
    sheet.path = path.to_path_buf();

    info!(
        "Loaded {} ({}x{}, {})",
        sheet.path.display(),
        sheet.width(),
        sheet.height(),
        if sheet.has_alpha { "alpha" } else { "opaque" }
    );

    Ok(sheet)
}
