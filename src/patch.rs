//! Splicing the quote image into a marked document region

use regex::{NoExpand, Regex};
use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

pub const DEFAULT_START_MARKER: &str = "<!-- QUOTE:START -->";
pub const DEFAULT_END_MARKER: &str = "<!-- QUOTE:END -->";

/// Errors that can occur while patching a document
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("quote markers not found in document, add {start} and {end} markers")]
    MarkersNotFound { start: String, end: String },

    #[error("quote markers must not be empty")]
    EmptyMarker,

    #[error("invalid marker pattern: {0}")]
    Pattern(#[from] regex::Error),
}

/// Start and end markers delimiting the replaced region
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_MARKER.to_string(),
            end: DEFAULT_END_MARKER.to_string(),
        }
    }
}

impl Markers {
    pub fn new(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            start: start.into(),
            end: end.into(),
        }
    }

    /// Non-greedy pattern matching `start ... end`, across lines
    fn pattern(&self) -> Result<Regex, regex::Error> {
        Regex::new(&format!(
            "(?s){}.*?{}",
            regex::escape(&self.start),
            regex::escape(&self.end)
        ))
    }
}

/// Markup referencing the rendered image
pub fn image_snippet(image_name: &str) -> String {
    format!(r#"<img src="./{}" alt="Quote" />"#, image_name)
}

/// Replace every marked region of `content` with a reference to the image
///
/// Fails if either marker is empty, or if `content` has no start marker
/// followed by an end marker.
pub fn patch_document(
    content: &str,
    markers: &Markers,
    image_name: &str,
) -> Result<String, PatchError> {
    if markers.start.is_empty() || markers.end.is_empty() {
        return Err(PatchError::EmptyMarker);
    }
    let pattern = markers.pattern()?;
    let regions = pattern.find_iter(content).count();
    if regions == 0 {
        return Err(PatchError::MarkersNotFound {
            start: markers.start.clone(),
            end: markers.end.clone(),
        });
    }

    let replacement = format!(
        "{}\n{}\n{}",
        markers.start,
        image_snippet(image_name),
        markers.end
    );
    debug!(regions, image = image_name, "patching marked regions");

    Ok(pattern
        .replace_all(content, NoExpand(&replacement))
        .into_owned())
}
