//! Configuration for SVG rendering

use serde::Deserialize;

/// Configuration options for SVG output
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SvgConfig {
    /// Font size of the quote rows
    pub quote_font_size: f64,

    /// Font size of the attribution row
    pub author_font_size: f64,

    /// Whether to include an XML declaration
    pub standalone: bool,

    /// Whether to format output with indentation
    pub pretty_print: bool,
}

impl Default for SvgConfig {
    fn default() -> Self {
        Self {
            quote_font_size: 16.0,
            author_font_size: 14.0,
            standalone: false,
            pretty_print: true,
        }
    }
}

impl SvgConfig {
    /// Create a new configuration with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the quote font size
    pub fn with_quote_font_size(mut self, size: f64) -> Self {
        self.quote_font_size = size;
        self
    }

    /// Set the attribution font size
    pub fn with_author_font_size(mut self, size: f64) -> Self {
        self.author_font_size = size;
        self
    }

    /// Set whether output is standalone
    pub fn with_standalone(mut self, standalone: bool) -> Self {
        self.standalone = standalone;
        self
    }

    /// Set whether to pretty-print output
    pub fn with_pretty_print(mut self, pretty: bool) -> Self {
        self.pretty_print = pretty;
        self
    }
}
