//! SVG renderer for quote cards
//!
//! This module takes a QuoteLayout and produces an SVG string.

pub mod config;
pub mod svg;

pub use config::SvgConfig;
pub use svg::{render_svg, render_svg_with_stylesheet};
