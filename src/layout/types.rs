//! Core types for the tile layout engine

/// A 2D point in sheet coordinates (millimetres, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

/// Position of a tile on the honeycomb grid, derived from its index within
/// a category bucket
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridPosition {
    pub col: usize,
    pub row: usize,
}

impl GridPosition {
    /// Grid cell for the tile at `index`, wrapping after `max_columns`
    pub fn from_index(index: usize, max_columns: usize) -> Self {
        Self {
            col: index % max_columns,
            row: index / max_columns,
        }
    }

    /// Odd rows are shifted half a tile step to interlock with their
    /// neighbours
    pub fn is_offset_row(&self) -> bool {
        self.row % 2 == 1
    }
}

/// One placed tile: the element it carries plus its grid cell and center
#[derive(Debug, Clone, PartialEq)]
pub struct TilePlacement {
    /// Canonical element key (used as the SVG group id)
    pub key: String,
    /// Display name drawn on the tile
    pub name: String,
    pub symbol: String,
    pub number: u32,
    pub grid: GridPosition,
    pub center: Point,
}

/// A centered line of text with its own font size
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabel {
    pub text: String,
    pub position: Point,
    pub font_size: f64,
}

/// Everything needed to draw one tile: outline, mounting hole, labels
#[derive(Debug, Clone, PartialEq)]
pub struct TileGeometry {
    /// Hexagon vertices, first vertex at 30 degrees from horizontal
    pub outline: [Point; 6],
    pub hole_center: Point,
    pub hole_radius: f64,
    /// Name, symbol, atomic number, stacked upward from the hole
    pub labels: [TextLabel; 3],
}

/// A laid-out sheet: one category's tiles and the canvas that holds them
#[derive(Debug, Clone, PartialEq)]
pub struct SheetLayout {
    /// Normalized category name (also the output file base name)
    pub category: String,
    /// Canvas width in millimetres
    pub width: f64,
    /// Canvas height in millimetres
    pub height: f64,
    pub tiles: Vec<TilePlacement>,
}
