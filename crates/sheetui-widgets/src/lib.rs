#![forbid(unsafe_code)]

//! Widgets for sheetui.
//!
//! The centerpiece is [`sheet::BottomSheet`], a bottom-anchored overlay
//! that slides in over existing content. The remaining widgets support
//! it: [`text::Text`] for line-oriented content and [`scroll::ScrollRegion`]
//! for content taller than the sheet body.
//!
//! Widgets render into a [`Frame`], which carries both the cell buffer and
//! an optional hit grid. Widgets that respond to the pointer register hit
//! regions during render; callers resolve pointer events against the frame
//! and feed the result back into the widget's `handle_event`.

pub mod borders;
pub mod scroll;
pub mod sheet;
pub mod text;

pub use scroll::{ScrollRegion, ScrollState};
pub use sheet::{BottomSheet, SheetAction, SheetConfig, SheetState};
pub use text::Text;

use sheetui_core::geometry::Rect;
use sheetui_render::cell::Cell;
use sheetui_render::frame::Frame;
use sheetui_style::Style;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a `Frame` within a given `Rect`.
pub trait Widget {
    /// Render the widget into the frame at the given area.
    fn render(&self, area: Rect, frame: &mut Frame);
}

impl<W: Widget + ?Sized> Widget for &W {
    fn render(&self, area: Rect, frame: &mut Frame) {
        (**self).render(area, frame);
    }
}

/// A `StatefulWidget` is a widget that renders based on mutable state.
pub trait StatefulWidget {
    type State;

    /// Render the widget into the frame with mutable state.
    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State);
}

/// Apply a style to a single cell, preserving unset fields.
pub(crate) fn apply_style(cell: &mut Cell, style: Style) {
    if let Some(fg) = style.fg {
        cell.fg = fg;
    }
    if let Some(bg) = style.bg {
        cell.bg = bg;
    }
    if let Some(attrs) = style.attrs {
        cell.flags = attrs;
    }
}

/// Draw a text span at the given position, clipped at `max_x` (exclusive).
///
/// Returns the x position after the last drawn glyph. Wide graphemes
/// occupy their full display width; the continuation column is blanked so
/// stale glyphs cannot show through.
pub(crate) fn draw_text_span(
    frame: &mut Frame,
    mut x: u16,
    y: u16,
    content: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    use unicode_segmentation::UnicodeSegmentation;
    use unicode_width::UnicodeWidthStr;

    for grapheme in content.graphemes(true) {
        if x >= max_x {
            break;
        }
        let w = UnicodeWidthStr::width(grapheme) as u16;
        if w == 0 {
            continue;
        }
        if x + w > max_x {
            break;
        }

        let ch = match grapheme.chars().next() {
            Some(ch) => ch,
            None => continue,
        };
        if let Some(cell) = frame.buffer.get_mut(x, y) {
            cell.ch = ch;
            apply_style(cell, style);
        }
        for extra in 1..w {
            if let Some(cell) = frame.buffer.get_mut(x + extra, y) {
                cell.ch = ' ';
                apply_style(cell, style);
            }
        }
        x += w;
    }
    x
}
