#![forbid(unsafe_code)]

//! Headless buffer snapshots.
//!
//! Turns a [`Buffer`] into plain text for tests and non-terminal output.
//! Colors and attributes are dropped; the glyph grid is what snapshot
//! assertions care about.

use crate::buffer::Buffer;

/// Render the buffer's glyphs as one string per row.
pub fn render_lines(buffer: &Buffer) -> Vec<String> {
    let mut lines = Vec::with_capacity(buffer.height() as usize);
    for y in 0..buffer.height() {
        let mut line = String::with_capacity(buffer.width() as usize);
        for x in 0..buffer.width() {
            match buffer.get(x, y) {
                Some(cell) => line.push(cell.ch),
                None => line.push(' '),
            }
        }
        lines.push(line);
    }
    lines
}

/// Render the buffer's glyphs as a single newline-joined string.
pub fn render_string(buffer: &Buffer) -> String {
    render_lines(buffer).join("\n")
}
