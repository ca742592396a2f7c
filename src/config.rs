//! Settings file for the quote updater
//!
//! Every key is optional; missing keys keep their defaults.
//!
//! ```toml
//! quotes_file = "quotes.json"
//! document_file = "README.md"
//! image_file = "quote.svg"
//!
//! [markers]
//! start = "<!-- QUOTE:START -->"
//! end = "<!-- QUOTE:END -->"
//!
//! [layout]
//! max_line_length = 60
//!
//! [svg]
//! quote_font_size = 18
//! ```

use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

use crate::layout::LayoutConfig;
use crate::patch::Markers;
use crate::renderer::SvgConfig;

/// Errors that can occur when loading settings
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read settings file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse settings TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// Where the updater reads and writes, and how it lays out the card
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// JSON file holding the quote collection
    pub quotes_file: PathBuf,
    /// Document containing the marker region
    pub document_file: PathBuf,
    /// Image file name, written next to the document and referenced from it
    pub image_file: String,
    pub markers: Markers,
    pub layout: LayoutConfig,
    pub svg: SvgConfig,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            quotes_file: PathBuf::from("quotes.json"),
            document_file: PathBuf::from("README.md"),
            image_file: "quote.svg".to_string(),
            markers: Markers::default(),
            layout: LayoutConfig::default(),
            svg: SvgConfig::default(),
        }
    }
}

impl Settings {
    /// Load settings from TOML file
    pub fn from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load settings from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Path of the image, in the same directory as the document
    pub fn image_path(&self) -> PathBuf {
        match self.document_file.parent() {
            Some(dir) => dir.join(&self.image_file),
            None => PathBuf::from(&self.image_file),
        }
    }
}
