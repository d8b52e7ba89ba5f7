//! SVG renderer for laid-out tile sheets
//!
//! Takes a SheetLayout and produces a standalone SVG string in millimetre
//! units, with CSS classes separating cut lines from labels.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_sheet, SvgBuilder};
