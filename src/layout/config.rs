//! Configuration for the quote card layout

use serde::Deserialize;

/// Configuration options for layout computation
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct LayoutConfig {
    /// Width of the canvas
    pub canvas_width: f64,

    /// Vertical distance between quote baselines
    pub line_height: f64,

    /// Padding above the first line and below the attribution
    pub padding: f64,

    /// Character budget per quote line
    pub max_line_length: usize,
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            canvas_width: 700.0,
            line_height: 20.0,
            padding: 20.0,
            max_line_length: 80,
        }
    }
}

impl LayoutConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the canvas width
    pub fn with_canvas_width(mut self, width: f64) -> Self {
        self.canvas_width = width;
        self
    }

    /// Set the line height
    pub fn with_line_height(mut self, height: f64) -> Self {
        self.line_height = height;
        self
    }

    /// Set the padding
    pub fn with_padding(mut self, padding: f64) -> Self {
        self.padding = padding;
        self
    }

    /// Set the per-line character budget (must be positive)
    pub fn with_max_line_length(mut self, length: usize) -> Self {
        self.max_line_length = length;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = LayoutConfig::default();
        assert_eq!(config.canvas_width, 700.0);
        assert_eq!(config.line_height, 20.0);
        assert_eq!(config.padding, 20.0);
        assert_eq!(config.max_line_length, 80);
    }

    #[test]
    fn test_builder_pattern() {
        let config = LayoutConfig::new()
            .with_canvas_width(400.0)
            .with_line_height(30.0)
            .with_max_line_length(40);

        assert_eq!(config.canvas_width, 400.0);
        assert_eq!(config.line_height, 30.0);
        assert_eq!(config.padding, 20.0);
        assert_eq!(config.max_line_length, 40);
    }

    #[test]
    fn test_partial_toml() {
        let config: LayoutConfig = toml::from_str("padding = 10").unwrap();
        assert_eq!(config.padding, 10.0);
        assert_eq!(config.canvas_width, 700.0);
    }
}
