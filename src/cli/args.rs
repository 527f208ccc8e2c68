use clap::{Parser, ValueEnum};
use std::path::PathBuf;

use crate::error::SlicerError;

#[derive(Parser, Debug, Clone)]
#[command(name = "slicer")]
#[command(
    version,
    about = "Extract sprites from a sprite sheet by connected occupancy",
    long_about = None
)]
pub struct CliArgs {
    /// Input sprite sheet image (e.g. sheet.png)
    pub input: PathBuf,

    /// Load settings from a .slicer config file
    #[arg(short = 'c', long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Output directory [default: out]
    #[arg(short, long)]
    pub out: Option<PathBuf>,

    /// Downscale tile size in pixels [default: 2]
    #[arg(short, long)]
    pub tile: Option<u32>,

    /// Atlas JSON filename inside the output directory [default: atlas.json]
    #[arg(long)]
    pub atlas: Option<String>,

    /// Component ordering in output [default: topleft]
    #[arg(short, long, value_enum)]
    pub sort: Option<SortMode>,

    /// Drop components smaller than this many mask cells [default: 1]
    #[arg(long)]
    pub min_cells: Option<u32>,

    /// Do not call the labeler; use the output filename as the name
    #[arg(long)]
    pub no_label: bool,

    /// Compress PNG output (0-6 or 'max'). Default level is 2 if flag is present without value.
    #[arg(long, value_name = "LEVEL", default_missing_value = "2", num_args = 0..=1)]
    pub compress: Option<CompressionLevel>,

    /// Verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

/// Order in which surviving components are assigned sprite ids.
#[derive(Debug, Clone, Copy, ValueEnum, Default, PartialEq, Eq)]
pub enum SortMode {
    /// Discovery order (row-major scan of each component's first cell)
    #[value(name = "none")]
    None,
    /// Reading order of bounding boxes: top row first, then left to right
    #[default]
    #[value(name = "topleft")]
    TopLeft,
    /// Largest component first
    #[value(name = "size")]
    Size,
}

impl SortMode {
    /// Parse a sort mode name as written in config files.
    pub fn parse(s: &str) -> Result<Self, SlicerError> {
        match s {
            "none" => Ok(SortMode::None),
            "topleft" => Ok(SortMode::TopLeft),
            "size" => Ok(SortMode::Size),
            other => Err(SlicerError::UnknownSortMode(other.to_string())),
        }
    }
}

/// PNG compression level (0-6 or max)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CompressionLevel {
    /// Optimization level 0-6
    Level(u8),
    /// Maximum compression
    Max,
}

impl std::str::FromStr for CompressionLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.eq_ignore_ascii_case("max") {
            Ok(CompressionLevel::Max)
        } else {
            s.parse::<u8>()
                .map_err(|_e| format!("invalid compression level: {}", s))
                .and_then(|n| {
                    if n <= 6 {
                        Ok(CompressionLevel::Level(n))
                    } else {
                        Err(format!("compression level must be 0-6 or 'max', got {}", n))
                    }
                })
        }
    }
}

impl Default for CompressionLevel {
    fn default() -> Self {
        CompressionLevel::Level(2)
    }
}
