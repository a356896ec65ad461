//! Section renderers.
//!
//! Each section produces exactly its declared height in lines, so the
//! document the layout windows always matches the geometry the scroll
//! model computes against.

pub mod about;
pub mod contact;
pub mod hero;
pub mod work;

use ratatui::text::Line;

/// Pads or truncates a section's lines to its declared height.
pub(crate) fn pad_to(mut lines: Vec<Line<'static>>, height: u16) -> Vec<Line<'static>> {
    lines.truncate(usize::from(height));
    while lines.len() < usize::from(height) {
        lines.push(Line::from(""));
    }
    lines
}
