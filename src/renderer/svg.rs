//! SVG generation from sheet layouts

use crate::layout::{tile_geometry, Point, SheetLayout, TileConfig};

use super::SvgConfig;

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    styles: Vec<String>,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            styles: vec![],
            elements: vec![],
            indent: 1,
        }
    }

    fn prefix(&self) -> String {
        self.config.class_prefix.clone().unwrap_or_default()
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add the cut-line and label rules.
    ///
    /// Cut lines are stroke-only (the sheet goes to a cutter); labels are
    /// filled text centered on their anchor point.
    pub fn add_sheet_styles(&mut self) {
        let prefix = self.prefix();
        self.styles.push(format!(
            ".{prefix}cut {{ fill: none; stroke: #000000; stroke-width: {}; }}",
            self.config.line_width
        ));
        self.styles.push(format!(
            ".{prefix}label {{ fill: #000000; stroke: none; font-family: \"{}\"; \
             text-anchor: middle; dominant-baseline: middle; }}",
            self.config.font_family
        ));
    }

    /// Add a polygon cut line
    pub fn add_polygon(&mut self, points: &[Point], classes: &[String]) {
        let prefix = self.prefix();
        let class_list = std::iter::once(format!("{}cut", prefix))
            .chain(classes.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");

        let points_str: String = points
            .iter()
            .map(|p| format!("{},{}", p.x, p.y))
            .collect::<Vec<_>>()
            .join(" ");

        self.elements.push(format!(
            r#"{}<polygon class="{}" points="{}"/>"#,
            self.indent_str(),
            class_list,
            points_str
        ));
    }

    /// Add a circle cut line
    pub fn add_circle(&mut self, cx: f64, cy: f64, r: f64, classes: &[String]) {
        let prefix = self.prefix();
        let class_list = std::iter::once(format!("{}cut", prefix))
            .chain(classes.iter().cloned())
            .collect::<Vec<_>>()
            .join(" ");

        self.elements.push(format!(
            r#"{}<circle class="{}" cx="{}" cy="{}" r="{}"/>"#,
            self.indent_str(),
            class_list,
            cx,
            cy,
            r
        ));
    }

    /// Add a centered text label with an explicit font size
    pub fn add_label(&mut self, text: &str, x: f64, y: f64, font_size: f64) {
        let prefix = self.prefix();
        self.elements.push(format!(
            r#"{}<text class="{}label" x="{}" y="{}" font-size="{}">{}</text>"#,
            self.indent_str(),
            prefix,
            x,
            y,
            font_size,
            escape_xml(text)
        ));
    }

    /// Open a group element with an optional id
    pub fn start_group(&mut self, id: Option<&str>) {
        let id_attr = id.map(|i| format!(r#" id="{}""#, i)).unwrap_or_default();
        self.elements
            .push(format!("{}<g{}>", self.indent_str(), id_attr));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string.
    ///
    /// `width` and `height` are physical millimetres; the viewBox maps one
    /// user unit to one millimetre so downstream CAD conversion keeps scale.
    pub fn build(self, width: f64, height: f64) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}mm" height="{h}mm" viewBox="0 0 {w} {h}">"#,
            w = width,
            h = height
        ));
        svg.push_str(nl);

        if !self.styles.is_empty() {
            svg.push_str("  <style>");
            svg.push_str(nl);
            for style in &self.styles {
                svg.push_str("    ");
                svg.push_str(style);
                svg.push_str(nl);
            }
            svg.push_str("  </style>");
            svg.push_str(nl);
        }

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render one laid-out sheet to an SVG string.
///
/// Each tile becomes a `<g>` (id = element key) holding the hexagon outline,
/// the vial hole, and the three labels.
pub fn render_sheet(sheet: &SheetLayout, tiles: &TileConfig, config: &SvgConfig) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    let prefix = builder.prefix();

    builder.add_sheet_styles();

    for tile in &sheet.tiles {
        let geometry = tile_geometry(tile, tiles);

        builder.start_group(Some(&tile.key));
        builder.add_polygon(&geometry.outline, &[format!("{}hex", prefix)]);
        builder.add_circle(
            geometry.hole_center.x,
            geometry.hole_center.y,
            geometry.hole_radius,
            &[format!("{}hole", prefix)],
        );
        for label in &geometry.labels {
            builder.add_label(
                &label.text,
                label.position.x,
                label.position.y,
                label.font_size,
            );
        }
        builder.end_group();
    }

    builder.build(sheet.width, sheet.height)
}

fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}
