pub mod atlas;
pub mod cli;
pub mod component;
pub mod config;
pub mod error;
pub mod grid;
pub mod label;
pub mod mask;
pub mod output;
pub mod pipeline;
pub mod sprite;

pub use atlas::{Atlas, AtlasBuilder, AtlasMeta};
pub use cli::{CliArgs, SortMode};
pub use error::SlicerError;
pub use label::{FileStemLabeler, Labeler};
pub use pipeline::{Extractor, Slices};
pub use sprite::{SpriteRecord, SpriteSheet};
