//! Honeycomb grid placement and per-tile geometry
//!
//! Tiles fill rows left to right, wrapping after `max_columns`. Odd rows are
//! shifted half a tile step so the hexagons interlock; vertically, adjacent
//! rows overlap at 3/4 of twice the apex radius. The canvas keeps half a
//! tile of margin on each axis for the hexagon halves that poke past the
//! last full column and row.

use std::f64::consts::PI;

use crate::data::ElementRecord;

use super::config::TileConfig;
use super::types::{
    GridPosition, Point, SheetLayout, TextLabel, TileGeometry, TilePlacement,
};

/// Lay out one category's elements on a honeycomb grid.
///
/// An empty element list is a valid boundary case: the sheet has zero rows,
/// minimal positive dimensions and no tiles.
pub fn compute(category: &str, elements: &[&ElementRecord], config: &TileConfig) -> SheetLayout {
    let count = elements.len();
    let rows = count.div_ceil(config.max_columns);
    let cols = config.max_columns.min(count);

    let side = config.side();
    let width = (cols as f64 + 0.5) * config.column_step();
    let height = (0.25 + rows as f64 * 0.75) * 2.0 * (side + config.spacing);

    let tiles = elements
        .iter()
        .enumerate()
        .map(|(index, elem)| {
            let grid = GridPosition::from_index(index, config.max_columns);
            TilePlacement {
                key: elem.key.clone(),
                name: elem.name.clone(),
                symbol: elem.symbol.clone(),
                number: elem.number,
                center: tile_center(grid, config),
                grid,
            }
        })
        .collect();

    SheetLayout {
        category: category.to_string(),
        width,
        height,
        tiles,
    }
}

/// Center of the tile occupying a grid cell
pub fn tile_center(grid: GridPosition, config: &TileConfig) -> Point {
    let side = config.side();
    let mut x = grid.col as f64 * config.column_step() + config.tile_width / 2.0;
    let y = 0.75 * grid.row as f64 * (2.0 * side + config.spacing) + side;

    if grid.is_offset_row() {
        x += config.column_step() / 2.0;
    }

    Point::new(x, y)
}

/// Compute the drawable geometry for one placed tile: hexagon outline, vial
/// hole, and the three text lines stacked above the hole.
pub fn tile_geometry(tile: &TilePlacement, config: &TileConfig) -> TileGeometry {
    let side = config.side();
    let center = tile.center;

    let outline: [Point; 6] = std::array::from_fn(|i| {
        let angle = i as f64 * PI / 3.0 + PI / 6.0;
        Point::new(
            center.x + side * angle.cos(),
            center.y + side * angle.sin(),
        )
    });

    let hole_radius = config.vial_diameter / 2.0;
    let hole_y = center.y + side - config.vial_clearance - hole_radius;

    let name_y = hole_y - config.vial_clearance - hole_radius;
    let symbol_y = name_y - config.name_gap;
    let number_y = symbol_y - config.symbol_gap;

    TileGeometry {
        outline,
        hole_center: Point::new(center.x, hole_y),
        hole_radius,
        labels: [
            TextLabel {
                text: tile.name.clone(),
                position: Point::new(center.x, name_y),
                font_size: config.name_font_size,
            },
            TextLabel {
                text: tile.symbol.clone(),
                position: Point::new(center.x, symbol_y),
                font_size: config.symbol_font_size,
            },
            TextLabel {
                text: tile.number.to_string(),
                position: Point::new(center.x, number_y),
                font_size: config.number_font_size,
            },
        ],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn element(key: &str, number: u32) -> ElementRecord {
        ElementRecord {
            key: key.to_string(),
            name: key.to_string(),
            symbol: "X".to_string(),
            number,
            category: "test".to_string(),
            group: None,
            block: "p".to_string(),
        }
    }

    fn elements(count: usize) -> Vec<ElementRecord> {
        (0..count)
            .map(|i| element(&format!("elem{i}"), i as u32 + 1))
            .collect()
    }

    fn refs(owned: &[ElementRecord]) -> Vec<&ElementRecord> {
        owned.iter().collect()
    }

    #[test]
    fn test_empty_category_has_minimal_canvas() {
        let config = TileConfig::default();
        let sheet = compute("empty", &[], &config);

        assert!(sheet.tiles.is_empty());
        assert!(sheet.width > 0.0);
        assert!(sheet.height > 0.0);
        // half a column step of margin, zero rows
        assert!((sheet.width - 0.5 * config.column_step()).abs() < 1e-9);
        assert!((sheet.height - 0.5 * (config.side() + config.spacing)).abs() < 1e-9);
    }

    #[test]
    fn test_single_tile_at_origin_cell() {
        let config = TileConfig::default();
        let owned = elements(1);
        let sheet = compute("one", &refs(&owned), &config);

        assert_eq!(sheet.tiles.len(), 1);
        let tile = &sheet.tiles[0];
        assert_eq!(tile.grid, GridPosition { col: 0, row: 0 });
        assert!((tile.center.x - config.tile_width / 2.0).abs() < 1e-9);
        assert!((tile.center.y - config.side()).abs() < 1e-9);
    }

    #[test]
    fn test_six_tiles_wrap_to_two_rows() {
        let config = TileConfig::default();
        let owned = elements(config.max_columns + 1);
        let sheet = compute("wrap", &refs(&owned), &config);

        let last = sheet.tiles.last().unwrap();
        assert_eq!(last.grid, GridPosition { col: 0, row: 1 });

        // row 1 interlocks: same column, shifted half a step right
        let first = &sheet.tiles[0];
        let offset = last.center.x - first.center.x;
        assert!((offset - config.column_step() / 2.0).abs() < 1e-9);
        assert!(last.center.y > first.center.y);
    }

    #[test]
    fn test_row_height_interlocks_at_three_quarters() {
        let config = TileConfig::default();
        let owned = elements(6);
        let sheet = compute("rows", &refs(&owned), &config);

        let dy = sheet.tiles[5].center.y - sheet.tiles[0].center.y;
        let expected = 0.75 * (2.0 * config.side() + config.spacing);
        assert!((dy - expected).abs() < 1e-9);
    }

    #[test]
    fn test_canvas_regression_reference_dimensions() {
        // tile_width = 34.2, spacing = 0.7, max_columns = 5
        let config = TileConfig::default();
        let step = config.side() + 0.7;

        let owned5 = elements(5);
        let sheet5 = compute("five", &refs(&owned5), &config);
        assert!((sheet5.width - 5.5 * 34.9).abs() < 1e-9);
        assert!((sheet5.height - 2.0 * step).abs() < 1e-9);

        // a sixth element wraps: same width, one more row of height
        let owned6 = elements(6);
        let sheet6 = compute("six", &refs(&owned6), &config);
        assert!((sheet6.width - 5.5 * 34.9).abs() < 1e-9);
        assert!((sheet6.height - 3.5 * step).abs() < 1e-9);
    }

    #[test]
    fn test_width_caps_at_max_columns() {
        let config = TileConfig::default();
        let owned3 = elements(3);
        let sheet3 = compute("three", &refs(&owned3), &config);
        assert!((sheet3.width - 3.5 * config.column_step()).abs() < 1e-9);

        let owned9 = elements(9);
        let sheet9 = compute("nine", &refs(&owned9), &config);
        assert!((sheet9.width - 5.5 * config.column_step()).abs() < 1e-9);
    }

    #[test]
    fn test_hexagon_outline_vertices() {
        let config = TileConfig::default();
        let owned = elements(1);
        let sheet = compute("one", &refs(&owned), &config);
        let geometry = tile_geometry(&sheet.tiles[0], &config);

        let side = config.side();
        let center = sheet.tiles[0].center;
        for vertex in &geometry.outline {
            let dx = vertex.x - center.x;
            let dy = vertex.y - center.y;
            assert!(((dx * dx + dy * dy).sqrt() - side).abs() < 1e-9);
        }

        // first vertex sits at 30 degrees from horizontal
        let first = geometry.outline[0];
        assert!((first.x - (center.x + side * (PI / 6.0).cos())).abs() < 1e-9);
        assert!((first.y - (center.y + side * (PI / 6.0).sin())).abs() < 1e-9);
    }

    #[test]
    fn test_vial_hole_below_center() {
        let config = TileConfig::default();
        let owned = elements(1);
        let sheet = compute("one", &refs(&owned), &config);
        let geometry = tile_geometry(&sheet.tiles[0], &config);

        let center = sheet.tiles[0].center;
        assert_eq!(geometry.hole_radius, config.vial_diameter / 2.0);
        assert_eq!(geometry.hole_center.x, center.x);
        let expected_y =
            center.y + config.side() - config.vial_clearance - config.vial_diameter / 2.0;
        assert!((geometry.hole_center.y - expected_y).abs() < 1e-9);
    }

    #[test]
    fn test_labels_stack_upward_from_hole() {
        let config = TileConfig::default();
        let owned = vec![ElementRecord {
            key: "hydrogen".to_string(),
            name: "Hydrogen".to_string(),
            symbol: "H".to_string(),
            number: 1,
            category: "hydrogen".to_string(),
            group: Some(1),
            block: "s".to_string(),
        }];
        let sheet = compute("hydrogen", &refs(&owned), &config);
        let geometry = tile_geometry(&sheet.tiles[0], &config);

        let [name, symbol, number] = &geometry.labels;
        assert_eq!(name.text, "Hydrogen");
        assert_eq!(symbol.text, "H");
        assert_eq!(number.text, "1");

        assert_eq!(name.font_size, config.name_font_size);
        assert_eq!(symbol.font_size, config.symbol_font_size);
        assert_eq!(number.font_size, config.number_font_size);

        let name_y = geometry.hole_center.y - config.vial_clearance - geometry.hole_radius;
        assert!((name.position.y - name_y).abs() < 1e-9);
        assert!((symbol.position.y - (name_y - config.name_gap)).abs() < 1e-9);
        assert!(
            (number.position.y - (name_y - config.name_gap - config.symbol_gap)).abs() < 1e-9
        );
    }
}
