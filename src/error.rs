use std::path::PathBuf;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum SlicerError {
    #[error("Tile size must be >= 1, got {0}")]
    InvalidTile(u32),

    #[error("Minimum cell count must be >= 1, got {0}")]
    InvalidMinCells(u32),

    #[error("Unknown sort mode '{0}'. Valid values: none, topleft, size")]
    UnknownSortMode(String),

    #[error("Input path does not exist: {0}")]
    InputNotFound(PathBuf),

    #[error("Failed to load image '{path}': {source}")]
    ImageLoad {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to save image '{path}': {source}")]
    ImageSave {
        path: PathBuf,
        source: image::ImageError,
    },

    #[error("Failed to write output file '{path}': {source}")]
    OutputWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to compress PNG '{path}': {message}")]
    PngCompress { path: PathBuf, message: String },

    #[error("Failed to label sprite '{path}': {message}")]
    Label { path: PathBuf, message: String },
}
