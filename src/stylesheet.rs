//! Stylesheet for quote card colors and fonts
//!
//! A stylesheet maps the card's color tokens (`quote`, `author`,
//! `background`) to concrete values and names the font family. Stylesheets
//! are TOML files so a repository can restyle its card without rebuilding.

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur when loading or parsing stylesheets
#[derive(Error, Debug)]
pub enum StylesheetError {
    #[error("Failed to read stylesheet file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse stylesheet TOML: {0}")]
    ParseError(#[from] toml::de::Error),
}

/// A stylesheet mapping color tokens to concrete values
#[derive(Debug, Clone)]
pub struct Stylesheet {
    /// Optional name for the stylesheet
    pub name: Option<String>,
    /// Optional description
    pub description: Option<String>,
    /// Color mappings: token name -> color
    pub colors: HashMap<String, String>,
    /// CSS font-family list used for every text row
    pub font_family: Option<String>,
}

/// TOML structure for deserializing stylesheets
#[derive(Deserialize)]
struct TomlStylesheet {
    metadata: Option<TomlMetadata>,
    #[serde(default)]
    colors: HashMap<String, String>,
    fonts: Option<TomlFonts>,
}

#[derive(Deserialize)]
struct TomlMetadata {
    name: Option<String>,
    description: Option<String>,
}

#[derive(Deserialize)]
struct TomlFonts {
    family: Option<String>,
}

/// Default palette, GitHub-style muted grays on a transparent canvas
const DEFAULT_PALETTE: &str = r##"
[metadata]
name = "default"

[colors]
quote = "#586069"
author = "#6a737d"
background = "none"

[fonts]
family = "'Segoe UI', 'Helvetica', 'Arial', sans-serif"
"##;

const FALLBACK_TEXT_COLOR: &str = "#586069";
const FALLBACK_FONT_FAMILY: &str = "sans-serif";

impl Stylesheet {
    /// Load stylesheet from TOML file
    pub fn from_file(path: &Path) -> Result<Self, StylesheetError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load stylesheet from TOML string
    pub fn from_str(content: &str) -> Result<Self, StylesheetError> {
        let parsed: TomlStylesheet = toml::from_str(content)?;

        Ok(Stylesheet {
            name: parsed.metadata.as_ref().and_then(|m| m.name.clone()),
            description: parsed.metadata.as_ref().and_then(|m| m.description.clone()),
            colors: parsed.colors,
            font_family: parsed.fonts.and_then(|f| f.family),
        })
    }

    /// Resolve a color token to a concrete value
    ///
    /// Returns None if the token is not defined in this stylesheet.
    pub fn resolve(&self, token: &str) -> Option<&str> {
        self.colors.get(token).map(|s| s.as_str())
    }

    /// Resolve a color token with fallback to the default palette
    pub fn resolve_or_default(&self, token: &str) -> String {
        if let Some(color) = self.resolve(token) {
            return color.to_string();
        }

        let default = Self::default();
        if let Some(color) = default.resolve(token) {
            return color.to_string();
        }

        FALLBACK_TEXT_COLOR.to_string()
    }

    /// Font family, falling back to the default palette's
    pub fn font_family_or_default(&self) -> String {
        if let Some(family) = &self.font_family {
            return family.clone();
        }
        Self::default()
            .font_family
            .unwrap_or_else(|| FALLBACK_FONT_FAMILY.to_string())
    }
}

impl Default for Stylesheet {
    fn default() -> Self {
        Self::from_str(DEFAULT_PALETTE).expect("Default palette should be valid TOML")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn empty() -> Stylesheet {
        Stylesheet {
            name: None,
            description: None,
            colors: HashMap::new(),
            font_family: None,
        }
    }

    #[test]
    fn test_default_stylesheet() {
        let stylesheet = Stylesheet::default();
        assert_eq!(stylesheet.name.as_deref(), Some("default"));
        assert_eq!(stylesheet.resolve("quote"), Some("#586069"));
        assert_eq!(stylesheet.resolve("author"), Some("#6a737d"));
        assert_eq!(stylesheet.resolve("background"), Some("none"));
        assert_eq!(
            stylesheet.font_family.as_deref(),
            Some("'Segoe UI', 'Helvetica', 'Arial', sans-serif")
        );
    }

    #[test]
    fn test_resolve_missing_token() {
        assert_eq!(Stylesheet::default().resolve("nonexistent"), None);
    }

    #[test]
    fn test_resolve_or_default_fallback() {
        let empty = empty();
        assert_eq!(empty.resolve_or_default("author"), "#6a737d");
        assert_eq!(empty.resolve_or_default("unknown"), "#586069");
        assert_eq!(
            empty.font_family_or_default(),
            "'Segoe UI', 'Helvetica', 'Arial', sans-serif"
        );
    }

    #[test]
    fn test_parse_toml_with_metadata() {
        let toml_str = r##"
[metadata]
name = "Dark"
description = "Light text for dark READMEs"

[colors]
quote = "#c9d1d9"

[fonts]
family = "monospace"
"##;
        let stylesheet = Stylesheet::from_str(toml_str).expect("Should parse");
        assert_eq!(stylesheet.name, Some("Dark".to_string()));
        assert_eq!(
            stylesheet.description,
            Some("Light text for dark READMEs".to_string())
        );
        assert_eq!(stylesheet.resolve("quote"), Some("#c9d1d9"));
        assert_eq!(stylesheet.resolve_or_default("author"), "#6a737d");
        assert_eq!(stylesheet.font_family_or_default(), "monospace");
    }

    #[test]
    fn test_parse_toml_colors_only() {
        let toml_str = r##"
[colors]
background = "#ffffff"
"##;
        let stylesheet = Stylesheet::from_str(toml_str).expect("Should parse");
        assert_eq!(stylesheet.name, None);
        assert_eq!(stylesheet.font_family, None);
        assert_eq!(stylesheet.resolve("background"), Some("#ffffff"));
    }

    #[test]
    fn test_invalid_toml_error() {
        let result = Stylesheet::from_str("this is not valid toml {{{{");
        assert!(matches!(result, Err(StylesheetError::ParseError(_))));
    }
}
