//! Quote records and the quote collection they are chosen from

use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use crate::select::Selector;
use crate::workspace::Workspace;

/// Errors that can occur when loading quotes
#[derive(Debug, Error)]
pub enum QuoteError {
    #[error("failed to read quotes file '{path}': {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid quotes JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("quotes file contains no quotes")]
    Empty,
}

/// A quote and its author
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Quote {
    pub quote: String,
    pub author: String,
}

impl Quote {
    pub fn new(quote: impl Into<String>, author: impl Into<String>) -> Self {
        Self {
            quote: quote.into(),
            author: author.into(),
        }
    }
}

/// A non-empty collection of quotes
#[derive(Debug, Clone)]
pub struct QuoteBook {
    quotes: Vec<Quote>,
}

impl QuoteBook {
    /// Create a book from quotes, rejecting an empty list
    pub fn new(quotes: Vec<Quote>) -> Result<Self, QuoteError> {
        if quotes.is_empty() {
            return Err(QuoteError::Empty);
        }
        Ok(Self { quotes })
    }

    /// Parse a JSON array of `{"quote": .., "author": ..}` objects
    pub fn from_json(json: &str) -> Result<Self, QuoteError> {
        let quotes: Vec<Quote> = serde_json::from_str(json)?;
        Self::new(quotes)
    }

    /// Load quotes through a workspace
    pub fn load<W: Workspace + ?Sized>(workspace: &W, path: &Path) -> Result<Self, QuoteError> {
        let json = workspace
            .read_to_string(path)
            .map_err(|source| QuoteError::Read {
                path: path.display().to_string(),
                source,
            })?;
        Self::from_json(&json)
    }

    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    /// Always false; kept for API symmetry with `len`
    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }

    pub fn quotes(&self) -> &[Quote] {
        &self.quotes
    }

    /// Pick one quote using the given selector
    pub fn choose<S: Selector + ?Sized>(&self, selector: &mut S) -> &Quote {
        let index = selector.pick(self.quotes.len()) % self.quotes.len();
        &self.quotes[index]
    }
}
