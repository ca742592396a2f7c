//! Daily Quote - render a random quote as an SVG card for a README
//!
//! The core is two pure functions: [`wrap_text`] packs the quote into lines
//! and [`render`] lays the lines out and emits the SVG document. The rest of
//! the crate loads quotes, picks one and splices the image into a document.
//!
//! # Example
//!
//! ```rust
//! use daily_quote::render;
//!
//! let svg = render("Talk is cheap. Show me the code.", "Linus Torvalds");
//! assert!(svg.contains("<svg"));
//! assert!(svg.contains("Linus Torvalds"));
//! ```

pub mod config;
pub mod error;
pub mod layout;
pub mod patch;
pub mod quotes;
pub mod renderer;
pub mod select;
pub mod stylesheet;
pub mod update;
pub mod workspace;

pub use config::Settings;
pub use error::Error;
pub use layout::{wrap_text, LayoutConfig, QuoteLayout};
pub use patch::{patch_document, Markers};
pub use quotes::{Quote, QuoteBook};
pub use renderer::{render_svg, render_svg_with_stylesheet, SvgConfig};
pub use select::{SeededRng, Selector};
pub use stylesheet::Stylesheet;
pub use update::{update_document, Update};
pub use workspace::{FsWorkspace, MemoryWorkspace, Workspace};

/// Configuration for the complete render pipeline
#[derive(Debug, Clone, Default)]
pub struct RenderConfig {
    /// Layout configuration
    pub layout: LayoutConfig,
    /// SVG output configuration
    pub svg: SvgConfig,
    /// Stylesheet for colors and fonts
    pub stylesheet: Stylesheet,
}

impl RenderConfig {
    /// Create a new configuration with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the layout configuration
    pub fn with_layout(mut self, config: LayoutConfig) -> Self {
        self.layout = config;
        self
    }

    /// Set the SVG configuration
    pub fn with_svg(mut self, config: SvgConfig) -> Self {
        self.svg = config;
        self
    }

    /// Set the stylesheet
    pub fn with_stylesheet(mut self, stylesheet: Stylesheet) -> Self {
        self.stylesheet = stylesheet;
        self
    }
}

/// Render a quote card with default configuration
///
/// The quote is wrapped at 80 characters; the canvas is 700 wide and
/// `20 * lines + 100` tall.
pub fn render(quote_text: &str, author: &str) -> String {
    render_with_config(quote_text, author, &RenderConfig::default())
}

/// Render a quote card with custom configuration
///
/// # Example
///
/// ```rust
/// use daily_quote::{render_with_config, LayoutConfig, RenderConfig, SvgConfig};
///
/// let config = RenderConfig::new()
///     .with_layout(LayoutConfig::default().with_max_line_length(40))
///     .with_svg(SvgConfig::default().with_quote_font_size(18.0));
///
/// let svg = render_with_config("Simplicity is prerequisite for reliability.", "Edsger W. Dijkstra", &config);
/// assert!(svg.contains(r#"font-size="18""#));
/// ```
pub fn render_with_config(quote_text: &str, author: &str, config: &RenderConfig) -> String {
    let layout = layout::compute(quote_text, author, &config.layout);
    render_svg_with_stylesheet(&layout, &config.svg, &config.stylesheet)
}
