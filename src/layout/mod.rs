//! Layout engine for placing hexagon tiles on a honeycomb grid
//!
//! Takes one category's elements and computes the canvas size and the
//! position and geometry of every tile on the sheet.

pub mod config;
pub mod engine;
pub mod types;

pub use config::TileConfig;
pub use engine::{compute, tile_center, tile_geometry};
pub use types::*;
