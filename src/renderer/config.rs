//! Configuration for SVG output

/// Configuration options for the generated sheets
#[derive(Debug, Clone)]
pub struct SvgConfig {
    /// Stroke width for cut lines, in millimetres
    pub line_width: f64,

    /// Font family for the tile labels
    pub font_family: String,

    /// Whether to include the XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,

    /// Prefix for CSS class names (e.g., "pt-" for "pt-hex")
    pub class_prefix: Option<String>,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            line_width: 0.5,
            font_family: "Latin Modern Sans Demi Cond".to_string(),
            standalone: true,
            pretty_print: true,
            class_prefix: Some("pt-".to_string()),
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the stroke width
    pub fn with_line_width(mut self, width: f64) -> Self {
        self.line_width = width;
        self
    }

    /// Set the label font family
    pub fn with_font_family(mut self, family: impl Into<String>) -> Self {
        self.font_family = family.into();
        self
    }

    /// Set whether output carries an XML declaration
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }

    /// Set the CSS class prefix
    pub fn with_class_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.class_prefix = Some(prefix.into());
        self
    }

    /// Remove the CSS class prefix
    pub fn without_class_prefix(mut self) -> Self {
        self.class_prefix = None;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = SvgConfig::default();
        assert_eq!(config.line_width, 0.5);
        assert_eq!(config.font_family, "Latin Modern Sans Demi Cond");
        assert!(config.standalone);
        assert!(config.pretty_print);
        assert_eq!(config.class_prefix, Some("pt-".to_string()));
    }

    #[test]
    fn test_builder_pattern() {
        let config = SvgConfig::new()
            .with_line_width(0.2)
            .with_font_family("DejaVu Sans")
            .with_standalone(false)
            .with_pretty_print(false)
            .without_class_prefix();

        assert_eq!(config.line_width, 0.2);
        assert_eq!(config.font_family, "DejaVu Sans");
        assert!(!config.standalone);
        assert!(!config.pretty_print);
        assert_eq!(config.class_prefix, None);
    }
}
