//! Rendering a quote and splicing it into the document

use std::io;

use tracing::{debug, info};

use crate::config::Settings;
use crate::error::Error;
use crate::patch::patch_document;
use crate::quotes::Quote;
use crate::workspace::Workspace;
use crate::{render_with_config, RenderConfig};

/// Outcome of a successful update
#[derive(Debug, Clone)]
pub struct Update {
    pub quote: Quote,
    /// The SVG written to the image file
    pub svg: String,
    /// False when the patched document was identical to the old one
    pub document_changed: bool,
}

/// Render `quote`, write the image and point the document's marker region at it
///
/// Nothing is written unless the document exists and contains the markers.
pub fn update_document<W: Workspace + ?Sized>(
    workspace: &mut W,
    quote: &Quote,
    settings: &Settings,
    config: &RenderConfig,
) -> Result<Update, Error> {
    let document_path = settings.document_file.as_path();
    let content = match workspace.read_to_string(document_path) {
        Ok(content) => content,
        Err(e) if e.kind() == io::ErrorKind::NotFound => {
            return Err(Error::DocumentNotFound(document_path.to_path_buf()))
        }
        Err(e) => return Err(Error::io(document_path, e)),
    };

    let patched = patch_document(&content, &settings.markers, &settings.image_file)?;

    let svg = render_with_config(&quote.quote, &quote.author, config);
    let image_path = settings.image_path();
    workspace
        .write(&image_path, &svg)
        .map_err(|e| Error::io(&image_path, e))?;
    info!(path = %image_path.display(), "wrote quote image");

    let document_changed = patched != content;
    if document_changed {
        workspace
            .write(document_path, &patched)
            .map_err(|e| Error::io(document_path, e))?;
        info!(path = %document_path.display(), "updated document");
    } else {
        debug!(path = %document_path.display(), "document already references the image");
    }

    Ok(Update {
        quote: quote.clone(),
        svg,
        document_changed,
    })
}
