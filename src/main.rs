use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use slicer::cli::{CliArgs, CompressionLevel, SortMode};
use slicer::config::{CompressConfig, LoadedConfig};
use slicer::pipeline::Extractor;
use slicer::sprite::load_sheet;

#[allow(clippy::print_stderr)]
fn main() {
    if let Err(e) = run() {
        // Use eprintln instead of error! because logger may not be initialized
        // (e.g., config loading fails before logger init)
        eprintln!("Error: {:#}", e);
        std::process::exit(1);
    }
}

#[allow(clippy::print_stdout)]
fn run() -> Result<()> {
    let args = CliArgs::parse();

    // Load config if specified and merge with CLI args
    let merged = merge_config_with_args(&args)?;

    // Initialize logging
    env_logger::Builder::new()
        .filter_level(if merged.verbose {
            log::LevelFilter::Debug
        } else {
            log::LevelFilter::Info
        })
        .format_timestamp(None)
        .format_target(false)
        .init();

    info!("Slicer v{}", env!("CARGO_PKG_VERSION"));

    let extractor = Extractor::new()
        .tile(merged.tile)
        .min_cells(merged.min_cells)
        .sort(merged.sort)
        .compress(merged.compress);
    let extractor = if merged.label {
        extractor
    } else {
        extractor.labeler(None)
    };

    // Reject bad settings before touching the input or output
    extractor.validate()?;

    let sheet = load_sheet(&args.input)?;
    let atlas = extractor.extract(&sheet, &merged.out, &merged.atlas)?;

    let atlas_path = merged.out.join(&merged.atlas);
    println!("sprites: {}", atlas.meta.count);
    println!("wrote:   {}", atlas_path.display());

    Ok(())
}

/// Merged configuration from CLI args and optional config file.
#[derive(Debug)]
struct MergedConfig {
    out: PathBuf,
    tile: u32,
    atlas: String,
    sort: SortMode,
    min_cells: u32,
    label: bool,
    compress: Option<CompressionLevel>,
    verbose: bool,
}

/// Merge config file values with CLI arguments.
/// CLI arguments always take precedence over config values.
fn merge_config_with_args(args: &CliArgs) -> Result<MergedConfig> {
    let loaded_config = if let Some(config_path) = &args.config {
        Some(
            LoadedConfig::load(config_path)
                .with_context(|| format!("failed to load config: {}", config_path.display()))?,
        )
    } else {
        None
    };

    let out = args.out.clone().unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.resolve_output_dir())
            .unwrap_or_else(|| PathBuf::from("out"))
    });

    let tile = args.tile.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.tile)
            .unwrap_or(2)
    });

    let atlas = args.atlas.clone().unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.atlas.clone())
            .unwrap_or_else(|| "atlas.json".to_string())
    });

    let min_cells = args.min_cells.unwrap_or_else(|| {
        loaded_config
            .as_ref()
            .map(|lc| lc.config.min_cells)
            .unwrap_or(1)
    });

    // Sort: CLI > config > default
    let sort = if let Some(s) = args.sort {
        s
    } else if let Some(ref lc) = loaded_config {
        SortMode::parse(&lc.config.sort).context("invalid sort in config file")?
    } else {
        SortMode::TopLeft
    };

    // --no-label on the CLI always wins
    let label = if args.no_label {
        false
    } else if let Some(ref lc) = loaded_config {
        lc.config.label
    } else {
        true
    };

    // Compress: CLI option overrides config
    let compress = if args.compress.is_some() {
        args.compress
    } else if let Some(ref lc) = loaded_config {
        lc.config
            .compress
            .as_ref()
            .map(CompressConfig::to_level)
            .transpose()
            .map_err(|e| anyhow::anyhow!("invalid compress in config file: {}", e))?
    } else {
        None
    };

    Ok(MergedConfig {
        out,
        tile,
        atlas,
        sort,
        min_cells,
        label,
        compress,
        verbose: args.verbose,
    })
}
