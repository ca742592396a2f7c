//! SVG generation from quote layouts

use crate::layout::QuoteLayout;
use crate::stylesheet::Stylesheet;

use super::SvgConfig;

/// Presentation attributes for a text row
#[derive(Debug, Clone)]
pub struct TextStyle {
    pub font_family: String,
    pub font_size: f64,
    pub fill: String,
    pub italic: bool,
}

/// Build SVG elements incrementally
pub struct SvgBuilder {
    config: SvgConfig,
    elements: Vec<String>,
    indent: usize,
}

impl SvgBuilder {
    /// Create a new SVG builder
    pub fn new(config: SvgConfig) -> Self {
        Self {
            config,
            elements: vec![],
            indent: 1,
        }
    }

    fn indent_str(&self) -> String {
        if self.config.pretty_print {
            "  ".repeat(self.indent)
        } else {
            String::new()
        }
    }

    fn newline(&self) -> &str {
        if self.config.pretty_print {
            "\n"
        } else {
            ""
        }
    }

    /// Add a full-canvas background rectangle
    pub fn add_background(&mut self, width: f64, height: f64, fill: &str) {
        self.elements.push(format!(
            r#"{}<rect width="{}" height="{}" fill="{}"/>"#,
            self.indent_str(),
            width,
            height,
            escape_attr(fill)
        ));
    }

    /// Add a horizontally centered text row
    ///
    /// `content` is inserted as-is; callers escape it.
    pub fn add_centered_text(&mut self, content: &str, y: f64, style: &TextStyle) {
        let italic = if style.italic {
            r#" font-style="italic""#
        } else {
            ""
        };

        self.elements.push(format!(
            r#"{}<text x="50%" y="{}" font-family="{}" font-size="{}" fill="{}" text-anchor="middle"{}>{}</text>"#,
            self.indent_str(),
            y,
            escape_attr(&style.font_family),
            style.font_size,
            escape_attr(&style.fill),
            italic,
            content
        ));
    }

    /// Open a group element
    pub fn start_group(&mut self) {
        self.elements.push(format!("{}<g>", self.indent_str()));
        self.indent += 1;
    }

    /// Close a group element
    pub fn end_group(&mut self) {
        self.indent = self.indent.saturating_sub(1);
        self.elements.push(format!("{}</g>", self.indent_str()));
    }

    /// Build the final SVG string
    pub fn build(self, width: f64, height: f64) -> String {
        let nl = self.newline();

        let mut svg = String::new();

        if self.config.standalone {
            svg.push_str(r#"<?xml version="1.0" encoding="UTF-8"?>"#);
            svg.push_str(nl);
        }

        svg.push_str(&format!(
            r#"<svg width="{}" height="{}" xmlns="http://www.w3.org/2000/svg">"#,
            width, height
        ));
        svg.push_str(nl);

        for elem in &self.elements {
            svg.push_str(elem);
            svg.push_str(nl);
        }

        svg.push_str("</svg>");

        svg
    }
}

/// Render a QuoteLayout to an SVG string (with default stylesheet)
pub fn render_svg(layout: &QuoteLayout, config: &SvgConfig) -> String {
    render_svg_with_stylesheet(layout, config, &Stylesheet::default())
}

/// Render a QuoteLayout to an SVG string with a custom stylesheet
pub fn render_svg_with_stylesheet(
    layout: &QuoteLayout,
    config: &SvgConfig,
    stylesheet: &Stylesheet,
) -> String {
    let mut builder = SvgBuilder::new(config.clone());
    let font_family = stylesheet.font_family_or_default();

    builder.add_background(
        layout.width,
        layout.height,
        &stylesheet.resolve_or_default("background"),
    );

    let quote_style = TextStyle {
        font_family: font_family.clone(),
        font_size: config.quote_font_size,
        fill: stylesheet.resolve_or_default("quote"),
        italic: true,
    };
    let author_style = TextStyle {
        font_family,
        font_size: config.author_font_size,
        fill: stylesheet.resolve_or_default("author"),
        italic: false,
    };

    builder.start_group();
    for line in &layout.lines {
        let content = format!("\"{}\"", escape_text(&line.text));
        builder.add_centered_text(&content, line.y, &quote_style);
    }
    let attribution = format!("\u{2014} {}", escape_text(&layout.author.text));
    builder.add_centered_text(&attribution, layout.author.y, &author_style);
    builder.end_group();

    builder.build(layout.width, layout.height)
}

/// Escape characters that are special in XML text content
///
/// Characters XML 1.0 does not allow at all are dropped.
fn escape_text(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars().filter(|&c| is_xml_char(c)) {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

/// Escape characters that are special in double-quoted XML attributes
fn escape_attr(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars().filter(|&c| is_xml_char(c)) {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

/// Whether `c` may appear in an XML 1.0 document
fn is_xml_char(c: char) -> bool {
    matches!(c, '\t' | '\n' | '\r' | '\u{20}'..='\u{D7FF}' | '\u{E000}'..='\u{FFFD}' | '\u{10000}'..='\u{10FFFF}')
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::{compute, LayoutConfig};

    #[test]
    fn test_escape_text() {
        assert_eq!(escape_text("a < b"), "a &lt; b");
        assert_eq!(escape_text("a & b"), "a &amp; b");
        assert_eq!(escape_text("<tag>"), "&lt;tag&gt;");
        assert_eq!(escape_text(r#"say "hi""#), r#"say "hi""#);
    }

    #[test]
    fn test_escape_attr_keeps_single_quotes() {
        assert_eq!(escape_attr("'Segoe UI', serif"), "'Segoe UI', serif");
        assert_eq!(escape_attr(r#"a"b"#), "a&quot;b");
    }

    #[test]
    fn test_render_structure() {
        let layout = compute("Talk is cheap.", "Linus Torvalds", &LayoutConfig::default());
        let svg = render_svg(&layout, &SvgConfig::default());

        assert!(svg.starts_with(r#"<svg width="700" height="120""#));
        assert!(svg.ends_with("</svg>"));
        assert!(svg.contains(r#"<rect width="700" height="120" fill="none"/>"#));
        assert!(svg.contains("\n  <g>\n"));
        assert!(svg.contains("\n  </g>\n"));
        assert!(svg.contains(r#"font-style="italic">"Talk is cheap."</text>"#));
        assert!(svg.contains("text-anchor=\"middle\">\u{2014} Linus Torvalds</text>"));
    }

    #[test]
    fn test_quote_rows_precede_author() {
        let config = LayoutConfig::default().with_max_line_length(10);
        let layout = compute("the quick brown fox jumps", "anon", &config);
        let svg = render_svg(&layout, &SvgConfig::default());

        let first = svg.find("\"the quick\"").unwrap();
        let second = svg.find("\"brown fox\"").unwrap();
        let third = svg.find("\"jumps\"").unwrap();
        let author = svg.find("\u{2014} anon").unwrap();
        assert!(first < second && second < third && third < author);
    }

    #[test]
    fn test_escapes_markup_in_quote() {
        let layout = compute("if a < b && c > d", "<script>", &LayoutConfig::default());
        let svg = render_svg(&layout, &SvgConfig::default());
        assert!(svg.contains(r#""if a &lt; b &amp;&amp; c &gt; d""#));
        assert!(svg.contains("\u{2014} &lt;script&gt;"));
        assert!(!svg.contains("<script>"));
    }

    #[test]
    fn test_drops_control_characters() {
        let layout = compute("bell\u{7}quote", "nul\u{0}author", &LayoutConfig::default());
        let svg = render_svg(&layout, &SvgConfig::default());
        assert!(svg.contains(r#""bellquote""#));
        assert!(svg.contains("\u{2014} nulauthor"));
        assert!(!svg.chars().any(|c| !is_xml_char(c)));
    }

    #[test]
    fn test_is_xml_char() {
        assert!(is_xml_char('\t'));
        assert!(is_xml_char('\n'));
        assert!(is_xml_char('\u{2014}'));
        assert!(is_xml_char('\u{1F600}'));
        assert!(!is_xml_char('\u{0}'));
        assert!(!is_xml_char('\u{1B}'));
        assert!(!is_xml_char('\u{FFFE}'));
    }

    #[test]
    fn test_compact_output() {
        let layout = compute("Short.", "Someone", &LayoutConfig::default());
        let config = SvgConfig::default().with_pretty_print(false);
        let svg = render_svg(&layout, &config);
        assert!(!svg.contains('\n'));
        assert!(svg.contains("<g><text"));
    }

    #[test]
    fn test_standalone_declaration() {
        let layout = compute("Short.", "Someone", &LayoutConfig::default());
        let config = SvgConfig::default().with_standalone(true);
        let svg = render_svg(&layout, &config);
        assert!(svg.starts_with(r#"<?xml version="1.0" encoding="UTF-8"?>"#));
    }

    #[test]
    fn test_custom_stylesheet() {
        let stylesheet = Stylesheet::from_str(
            r##"
[colors]
quote = "#ffffff"
background = "#000000"

[fonts]
family = "Georgia, serif"
"##,
        )
        .unwrap();
        let layout = compute("Dark mode.", "Someone", &LayoutConfig::default());
        let svg = render_svg_with_stylesheet(&layout, &SvgConfig::default(), &stylesheet);
        assert!(svg.contains(r##"fill="#000000"/>"##));
        assert!(svg.contains(r##"font-size="16" fill="#ffffff""##));
        assert!(svg.contains(r##"font-size="14" fill="#6a737d""##));
        assert!(svg.contains(r#"font-family="Georgia, serif""#));
    }

    #[test]
    fn test_font_sizes_from_config() {
        let layout = compute("Sizes.", "Someone", &LayoutConfig::default());
        let config = SvgConfig::default()
            .with_quote_font_size(18.0)
            .with_author_font_size(12.5);
        let svg = render_svg(&layout, &config);
        assert!(svg.contains(r#"font-size="18""#));
        assert!(svg.contains(r#"font-size="12.5""#));
    }
}
