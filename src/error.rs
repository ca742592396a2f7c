//! Error type for the quote update pipeline

use std::path::PathBuf;

use thiserror::Error;

use crate::config::ConfigError;
use crate::patch::PatchError;
use crate::quotes::QuoteError;
use crate::stylesheet::StylesheetError;

/// Errors that can occur while updating the quote
///
/// Wrapping and rendering cannot fail; everything here comes from loading
/// inputs or touching files.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{} not found", .0.display())]
    DocumentNotFound(PathBuf),

    #[error("failed to access '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error(transparent)]
    Quotes(#[from] QuoteError),

    #[error(transparent)]
    Patch(#[from] PatchError),

    #[error("stylesheet error: {0}")]
    Stylesheet(#[from] StylesheetError),

    #[error("settings error: {0}")]
    Config(#[from] ConfigError),
}

impl Error {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
