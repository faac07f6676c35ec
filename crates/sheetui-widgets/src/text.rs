#![forbid(unsafe_code)]

//! Line-oriented text content.

use sheetui_core::geometry::Rect;
use sheetui_render::frame::Frame;
use sheetui_style::Style;

use crate::{Widget, draw_text_span};

/// A block of text rendered line by line, clipped to its area.
///
/// Lines that overflow the area horizontally are truncated at a grapheme
/// boundary; lines below the area are dropped. A `Text` knows its own
/// natural height, which makes it a convenient child for a scroll region.
#[derive(Debug, Clone, Default)]
pub struct Text {
    lines: Vec<String>,
    style: Style,
}

impl Text {
    /// Create a text block from a string, splitting on newlines.
    pub fn new(content: &str) -> Self {
        Self {
            lines: content.lines().map(str::to_string).collect(),
            style: Style::new(),
        }
    }

    /// Create a text block from pre-split lines.
    pub fn from_lines(lines: Vec<String>) -> Self {
        Self {
            lines,
            style: Style::new(),
        }
    }

    /// Set the style applied to every drawn glyph.
    pub fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    /// Natural height in rows.
    pub fn line_count(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }
}

impl Widget for Text {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }
        for (row, line) in self.lines.iter().enumerate() {
            let Ok(row) = u16::try_from(row) else { break };
            let y = area.y.saturating_add(row);
            if y >= area.bottom() {
                break;
            }
            draw_text_span(frame, area.x, y, line, self.style, area.right());
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use sheetui_render::headless::render_lines;

    #[test]
    fn test_renders_lines_in_order() {
        let mut frame = Frame::new(8, 4);
        Text::new("one\ntwo\nthree").render(Rect::new(0, 0, 8, 4), &mut frame);

        let lines = render_lines(&frame.buffer);
        assert_eq!(lines[0], "one     ");
        assert_eq!(lines[1], "two     ");
        assert_eq!(lines[2], "three   ");
        assert_eq!(lines[3], "        ");
    }

    #[test]
    fn test_clips_below_area() {
        let mut frame = Frame::new(8, 4);
        Text::new("a\nb\nc\nd").render(Rect::new(0, 1, 8, 2), &mut frame);

        let lines = render_lines(&frame.buffer);
        assert_eq!(lines[0], "        ");
        assert_eq!(lines[1], "a       ");
        assert_eq!(lines[2], "b       ");
        assert_eq!(lines[3], "        ");
    }

    #[test]
    fn test_truncates_long_lines() {
        let mut frame = Frame::new(4, 1);
        Text::new("abcdefgh").render(Rect::new(0, 0, 4, 1), &mut frame);

        assert_eq!(render_lines(&frame.buffer)[0], "abcd");
    }

    #[test]
    fn test_line_count() {
        assert_eq!(Text::new("").line_count(), 0);
        assert_eq!(Text::new("a").line_count(), 1);
        assert_eq!(Text::new("a\nb\nc").line_count(), 3);
    }
}
