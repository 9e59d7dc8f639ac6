//! Rendering module for ascross.
//!
//! Turns mapped puzzles into printable output: an SVG grid, HTML pages
//! (A4 single page or A5 facing pages), a JSON export, and a plain-text
//! grid dump for debugging.

pub mod html;
pub mod json;
pub mod svg;
pub mod text;

pub use html::{render_a4, render_a5_two, PageOptions};
pub use json::to_json;
pub use svg::{svg_grid, SvgOptions};
pub use text::{dump_clues, dump_grid};

/// Escape text for use in HTML or SVG content and attribute values.
pub fn escape_xml(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}
