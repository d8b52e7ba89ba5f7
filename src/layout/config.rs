//! Configuration for the tile layout engine

/// Dimensions driving tile placement and per-tile geometry.
///
/// All lengths are millimetres. The defaults match a 34.2 mm flat-to-flat
/// hexagon holding a 12.8 mm sample vial.
#[derive(Debug, Clone)]
pub struct TileConfig {
    /// Flat-to-flat width of one hexagon
    pub tile_width: f64,

    /// Gap between adjacent tiles
    pub spacing: f64,

    /// Tiles per row before wrapping
    pub max_columns: usize,

    /// Diameter of the vial mounting hole
    pub vial_diameter: f64,

    /// Clearance kept around the vial hole
    pub vial_clearance: f64,

    /// Vertical distance from the name line up to the symbol line
    pub name_gap: f64,

    /// Vertical distance from the symbol line up to the number line
    pub symbol_gap: f64,

    /// Font size for the element name
    pub name_font_size: f64,

    /// Font size for the element symbol
    pub symbol_font_size: f64,

    /// Font size for the atomic number
    pub number_font_size: f64,
}

impl Default for TileConfig {
    fn default() -> Self {
        Self {
            tile_width: 34.2,
            spacing: 0.7,
            max_columns: 5,
            vial_diameter: 12.8,
            vial_clearance: 3.8,
            name_gap: 7.3,
            symbol_gap: 7.3,
            name_font_size: 4.0,
            symbol_font_size: 11.0,
            number_font_size: 5.0,
        }
    }
}

impl TileConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Apex radius of the hexagon (also its side length):
    /// tile_width / sqrt(3)
    pub fn side(&self) -> f64 {
        self.tile_width / 3f64.sqrt()
    }

    /// Horizontal distance between adjacent tile centers in a row
    pub fn column_step(&self) -> f64 {
        self.tile_width + self.spacing
    }

    /// Set the flat-to-flat tile width
    pub fn with_tile_width(mut self, width: f64) -> Self {
        self.tile_width = width;
        self
    }

    /// Set the gap between tiles
    pub fn with_spacing(mut self, spacing: f64) -> Self {
        self.spacing = spacing;
        self
    }

    /// Set the number of tiles per row; zero is clamped to one
    pub fn with_max_columns(mut self, columns: usize) -> Self {
        self.max_columns = columns.max(1);
        self
    }

    /// Set the vial hole diameter
    pub fn with_vial_diameter(mut self, diameter: f64) -> Self {
        self.vial_diameter = diameter;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = TileConfig::default();
        assert_eq!(config.tile_width, 34.2);
        assert_eq!(config.spacing, 0.7);
        assert_eq!(config.max_columns, 5);
        assert_eq!(config.vial_diameter, 12.8);
        assert_eq!(config.vial_clearance, 3.8);
        assert_eq!(config.name_gap, 7.3);
        assert_eq!(config.symbol_gap, 7.3);
    }

    #[test]
    fn test_side_is_width_over_sqrt3() {
        let config = TileConfig::default();
        assert!((config.side() - 34.2 / 3f64.sqrt()).abs() < 1e-12);
    }

    #[test]
    fn test_builder_pattern() {
        let config = TileConfig::new()
            .with_tile_width(40.0)
            .with_spacing(1.0)
            .with_max_columns(4);

        assert_eq!(config.tile_width, 40.0);
        assert_eq!(config.spacing, 1.0);
        assert_eq!(config.max_columns, 4);
        assert_eq!(config.column_step(), 41.0);
    }

    #[test]
    fn test_zero_columns_clamped_to_one() {
        let config = TileConfig::new().with_max_columns(0);
        assert_eq!(config.max_columns, 1);
    }
}
