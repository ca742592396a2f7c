//! Layout for quote cards
//!
//! This module wraps the quote text and computes the canvas size and the
//! baseline of every text row, producing a QuoteLayout for the renderer.

pub mod config;
pub mod wrap;

pub use config::LayoutConfig;
pub use wrap::wrap_text;

use tracing::debug;

/// Vertical space reserved for the attribution block
pub const AUTHOR_BLOCK_HEIGHT: f64 = 60.0;

/// Offset from the top padding to the first quote baseline
pub const FIRST_BASELINE_OFFSET: f64 = 25.0;

/// Gap between the line after the last quote row and the attribution
pub const AUTHOR_GAP: f64 = 20.0;

/// A positioned row of text
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    /// Baseline y-coordinate
    pub y: f64,
}

/// Computed layout of a quote card
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteLayout {
    pub width: f64,
    pub height: f64,
    /// Wrapped quote rows, top to bottom
    pub lines: Vec<TextLine>,
    /// Attribution row
    pub author: TextLine,
}

/// Compute the layout of a quote card
pub fn compute(quote_text: &str, author: &str, config: &LayoutConfig) -> QuoteLayout {
    let wrapped = wrap_text(quote_text, config.max_line_length);
    let height = canvas_height(wrapped.len(), config);

    let mut y = config.padding + FIRST_BASELINE_OFFSET;
    let mut lines = Vec::with_capacity(wrapped.len());
    for text in wrapped {
        lines.push(TextLine { text, y });
        y += config.line_height;
    }

    debug!(lines = lines.len(), height, "computed quote layout");

    QuoteLayout {
        width: config.canvas_width,
        height,
        lines,
        author: TextLine {
            text: author.to_string(),
            y: y + AUTHOR_GAP,
        },
    }
}

/// Canvas height for a card with `line_count` quote rows
pub fn canvas_height(line_count: usize, config: &LayoutConfig) -> f64 {
    line_count as f64 * config.line_height + AUTHOR_BLOCK_HEIGHT + config.padding * 2.0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_line_layout() {
        let layout = compute(
            "Code is read more often than written.",
            "Guido van Rossum",
            &LayoutConfig::default(),
        );
        assert_eq!(layout.width, 700.0);
        assert_eq!(layout.height, 120.0);
        assert_eq!(layout.lines.len(), 1);
        assert_eq!(layout.lines[0].y, 45.0);
        assert_eq!(layout.author.y, 85.0);
        assert_eq!(layout.author.text, "Guido van Rossum");
    }

    #[test]
    fn test_multi_line_positions() {
        let config = LayoutConfig::default().with_max_line_length(10);
        let layout = compute("the quick brown fox jumps", "anon", &config);
        let ys: Vec<f64> = layout.lines.iter().map(|l| l.y).collect();
        assert_eq!(ys, vec![45.0, 65.0, 85.0]);
        assert_eq!(layout.author.y, 125.0);
        assert_eq!(layout.height, 160.0);
    }

    #[test]
    fn test_author_fits_inside_canvas() {
        let config = LayoutConfig::default().with_max_line_length(5);
        for text in ["", "one", "one two three four five six seven"] {
            let layout = compute(text, "someone", &config);
            assert!(layout.author.y < layout.height);
        }
    }

    #[test]
    fn test_empty_quote() {
        let layout = compute("", "nobody", &LayoutConfig::default());
        assert!(layout.lines.is_empty());
        assert_eq!(layout.height, 100.0);
        assert_eq!(layout.author.y, 65.0);
    }

    #[test]
    fn test_custom_metrics() {
        let config = LayoutConfig::default()
            .with_line_height(30.0)
            .with_padding(10.0);
        assert_eq!(canvas_height(2, &config), 2.0 * 30.0 + 60.0 + 20.0);
    }
}
