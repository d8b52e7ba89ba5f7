//! Tile profiles: user-adjustable dimensions via TOML
//!
//! A profile overrides the physical dimensions of the tiles (hexagon width,
//! vial hole, label fonts) without recompiling, e.g. for a different vial
//! size or cutter kerf. Every field is optional; missing fields fall back to
//! the reference dimensions.

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::layout::TileConfig;
use crate::renderer::SvgConfig;

/// Errors that can occur when loading or parsing profiles
#[derive(Error, Debug)]
pub enum ProfileError {
    #[error("failed to read profile file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse profile TOML: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("invalid profile: {0}")]
    Invalid(String),
}

/// A tile profile loaded from TOML
#[derive(Debug, Clone)]
pub struct TileProfile {
    /// Optional name for the profile
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    tile: TileSection,
    vial: VialSection,
    text: TextSection,
}

#[derive(Deserialize)]
struct TomlProfile {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    tile: TileSection,
    #[serde(default)]
    vial: VialSection,
    #[serde(default)]
    text: TextSection,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct TileSection {
    width: Option<f64>,
    spacing: Option<f64>,
    max_columns: Option<usize>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct VialSection {
    diameter: Option<f64>,
    clearance: Option<f64>,
}

#[derive(Debug, Clone, Deserialize, Default)]
struct TextSection {
    font_family: Option<String>,
    line_width: Option<f64>,
    name_size: Option<f64>,
    symbol_size: Option<f64>,
    number_size: Option<f64>,
    name_gap: Option<f64>,
    symbol_gap: Option<f64>,
}

impl TileProfile {
    /// Load a profile from a TOML file
    pub fn from_file(path: &Path) -> Result<Self, ProfileError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load a profile from a TOML string
    pub fn from_str(content: &str) -> Result<Self, ProfileError> {
        let parsed: TomlProfile = toml::from_str(content)?;

        // a zero-column grid has nowhere to place a tile
        if parsed.tile.max_columns == Some(0) {
            return Err(ProfileError::Invalid(
                "[tile] max_columns must be at least 1".to_string(),
            ));
        }

        Ok(Self {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            tile: parsed.tile,
            vial: parsed.vial,
            text: parsed.text,
        })
    }

    /// Layout configuration with this profile's overrides applied
    pub fn tile_config(&self) -> TileConfig {
        let defaults = TileConfig::default();
        TileConfig {
            tile_width: self.tile.width.unwrap_or(defaults.tile_width),
            spacing: self.tile.spacing.unwrap_or(defaults.spacing),
            max_columns: self.tile.max_columns.unwrap_or(defaults.max_columns),
            vial_diameter: self.vial.diameter.unwrap_or(defaults.vial_diameter),
            vial_clearance: self.vial.clearance.unwrap_or(defaults.vial_clearance),
            name_gap: self.text.name_gap.unwrap_or(defaults.name_gap),
            symbol_gap: self.text.symbol_gap.unwrap_or(defaults.symbol_gap),
            name_font_size: self.text.name_size.unwrap_or(defaults.name_font_size),
            symbol_font_size: self.text.symbol_size.unwrap_or(defaults.symbol_font_size),
            number_font_size: self.text.number_size.unwrap_or(defaults.number_font_size),
        }
    }

    /// SVG configuration with this profile's overrides applied
    pub fn svg_config(&self) -> SvgConfig {
        let mut config = SvgConfig::default();
        if let Some(family) = &self.text.font_family {
            config.font_family = family.clone();
        }
        if let Some(width) = self.text.line_width {
            config.line_width = width;
        }
        config
    }
}

impl Default for TileProfile {
    fn default() -> Self {
        Self {
            name: None,
            description: None,
            tile: TileSection::default(),
            vial: VialSection::default(),
            text: TextSection::default(),
        }
    }
}
