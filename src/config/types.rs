use serde::{Deserialize, Serialize};

use crate::cli::CompressionLevel;

/// The only config file version this build understands.
pub const CONFIG_VERSION: u32 = 1;

/// PNG compression level configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CompressConfig {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression ("max")
    Max(String),
}

impl CompressConfig {
    /// Validate against the same 0-6 / "max" rules as `--compress`.
    pub fn to_level(&self) -> Result<CompressionLevel, String> {
        match self {
            CompressConfig::Level(n) => n.to_string().parse(),
            CompressConfig::Max(s) => s.parse(),
        }
    }
}

/// Slicer configuration file structure.
///
/// The output directory is relative to the config file location.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SlicerConfig {
    /// Config file version (currently 1)
    pub version: u32,
    /// Output directory for sprites and the atlas
    pub out: String,
    /// Downscale tile size in pixels
    pub tile: u32,
    /// Atlas JSON filename inside the output directory
    pub atlas: String,
    /// Component ordering: "none", "topleft" or "size"
    pub sort: String,
    /// Drop components smaller than this many mask cells
    pub min_cells: u32,
    /// Run the labeler to name sprites
    pub label: bool,
    /// PNG compression configuration (optional)
    pub compress: Option<CompressConfig>,
}

impl Default for SlicerConfig {
    fn default() -> Self {
        Self {
            version: CONFIG_VERSION,
            out: "out".to_string(),
            tile: 2,
            atlas: "atlas.json".to_string(),
            sort: "topleft".to_string(),
            min_cells: 1,
            label: true,
            compress: None,
        }
    }
}
