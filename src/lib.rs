//! Hexatile - printable periodic-table hexagon sheets
//!
//! This library reads a periodic-table lookup table, buckets the elements by
//! normalized chemical category, lays each bucket out on a honeycomb grid of
//! hexagonal tiles, and renders one SVG sheet per category. A separate
//! conversion step hands each sheet to an external converter for CAD-friendly
//! output.
//!
//! # Example
//!
//! ```rust
//! use hexatile::generate;
//!
//! let lookup = r#"{
//!     "order": ["hydrogen"],
//!     "hydrogen": {
//!         "name": "Hydrogen", "symbol": "H", "number": 1,
//!         "category": "diatomic nonmetal", "group": 1, "block": "s"
//!     }
//! }"#;
//!
//! let sheets = generate(lookup).unwrap();
//! assert_eq!(sheets.len(), 1);
//! assert_eq!(sheets[0].category, "hydrogen");
//! assert!(sheets[0].svg.contains("<svg"));
//! ```

pub mod category;
pub mod convert;
pub mod data;
pub mod layout;
pub mod profile;
pub mod renderer;

use std::path::{Path, PathBuf};

pub use category::{categorize, CategoryBuckets};
pub use convert::{ConversionReport, ConversionTask, Converter};
pub use data::{DataError, ElementRecord, ElementTable};
pub use layout::{SheetLayout, TileConfig};
pub use profile::{ProfileError, TileProfile};
pub use renderer::SvgConfig;

use thiserror::Error;

/// Errors that can occur while generating sheets
#[derive(Debug, Error)]
pub enum PipelineError {
    /// Error loading the element table
    #[error("lookup table error: {0}")]
    Data(#[from] DataError),

    /// Error loading a tile profile
    #[error("profile error: {0}")]
    Profile(#[from] ProfileError),

    /// Error writing output files
    #[error("failed to write '{path}': {source}")]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Configuration for the complete generation pipeline
#[derive(Debug, Clone, Default)]
pub struct GenerateConfig {
    /// Tile dimensions and grid layout
    pub tiles: TileConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
}

impl GenerateConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Configuration derived from a tile profile
    pub fn from_profile(profile: &TileProfile) -> Self {
        Self {
            tiles: profile.tile_config(),
            svg: profile.svg_config(),
        }
    }

    /// Set the tile configuration
    pub fn with_tiles(mut self, tiles: TileConfig) -> Self {
        self.tiles = tiles;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, svg: SvgConfig) -> Self {
        self.svg = svg;
        self
    }
}

/// One rendered category sheet
#[derive(Debug, Clone, PartialEq)]
pub struct Sheet {
    /// Normalized category name (also the output file base name)
    pub category: String,
    pub svg: String,
}

/// Lay out every category bucket of a table, in first-encounter order
pub fn plan_sheets(table: &ElementTable, config: &TileConfig) -> Vec<SheetLayout> {
    let buckets = CategoryBuckets::from_table(table);
    buckets
        .iter()
        .map(|bucket| {
            // bucket members always come from the table
            let members: Vec<&ElementRecord> = bucket
                .members
                .iter()
                .filter_map(|key| table.get(key))
                .collect();
            layout::compute(&bucket.category, &members, config)
        })
        .collect()
}

/// Generate one SVG sheet per category from lookup JSON, with defaults
pub fn generate(source: &str) -> Result<Vec<Sheet>, PipelineError> {
    generate_with_config(source, &GenerateConfig::default())
}

/// Generate one SVG sheet per category from lookup JSON
pub fn generate_with_config(
    source: &str,
    config: &GenerateConfig,
) -> Result<Vec<Sheet>, PipelineError> {
    let table = ElementTable::from_str(source)?;

    let sheets = plan_sheets(&table, &config.tiles)
        .iter()
        .map(|sheet| Sheet {
            category: sheet.category.clone(),
            svg: renderer::render_sheet(sheet, &config.tiles, &config.svg),
        })
        .collect();

    Ok(sheets)
}

/// Write sheets as `<dir>/<category>.svg`, creating the directory if absent.
///
/// Returns the written paths in sheet order.
pub fn write_sheets(sheets: &[Sheet], dir: &Path) -> Result<Vec<PathBuf>, PipelineError> {
    std::fs::create_dir_all(dir).map_err(|source| PipelineError::Write {
        path: dir.to_path_buf(),
        source,
    })?;

    let mut paths = Vec::with_capacity(sheets.len());
    for sheet in sheets {
        let path = dir.join(format!("{}.svg", sheet.category));
        std::fs::write(&path, &sheet.svg).map_err(|source| PipelineError::Write {
            path: path.clone(),
            source,
        })?;
        paths.push(path);
    }
    Ok(paths)
}

/// Pair written SVG paths with converted output paths in another directory
pub fn conversion_tasks(sheets: &[Sheet], svg_dir: &Path, out_dir: &Path) -> Vec<ConversionTask> {
    sheets
        .iter()
        .map(|sheet| ConversionTask {
            category: sheet.category.clone(),
            input: svg_dir.join(format!("{}.svg", sheet.category)),
            output: out_dir.join(format!("{}.dxf", sheet.category)),
        })
        .collect()
}
