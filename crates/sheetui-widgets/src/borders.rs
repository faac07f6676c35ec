//! Border glyph sets for the sheet outline.

use sheetui_core::geometry::Rect;
use sheetui_render::frame::Frame;
use sheetui_style::Style;

use crate::apply_style;

/// Box-drawing characters for an outline.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderSet {
    pub vertical: char,
    pub horizontal: char,
    pub top_left: char,
    pub top_right: char,
    pub bottom_left: char,
    pub bottom_right: char,
}

impl BorderSet {
    /// Square corners (┌, ┐, ┘, └).
    pub const PLAIN: Self = Self {
        vertical: '│',
        horizontal: '─',
        top_left: '┌',
        top_right: '┐',
        bottom_left: '└',
        bottom_right: '┘',
    };

    /// Rounded corners (╭, ╮, ╯, ╰).
    pub const ROUNDED: Self = Self {
        vertical: '│',
        horizontal: '─',
        top_left: '╭',
        top_right: '╮',
        bottom_left: '╰',
        bottom_right: '╯',
    };

    /// Pick the set matching a corner radius: any positive radius rounds
    /// the corners, zero keeps them square.
    pub const fn for_radius(radius: u16) -> Self {
        if radius > 0 { Self::ROUNDED } else { Self::PLAIN }
    }
}

/// Draw a one-cell outline around `area`, clipped to the frame.
///
/// Degenerate areas (width or height < 2) collapse to whatever edges fit.
pub(crate) fn draw_outline(frame: &mut Frame, area: Rect, set: BorderSet, style: Style) {
    if area.is_empty() {
        return;
    }
    let right = area.right().saturating_sub(1);
    let bottom = area.bottom().saturating_sub(1);

    for x in area.x..area.right() {
        put(frame, x, area.y, set.horizontal, style);
        put(frame, x, bottom, set.horizontal, style);
    }
    for y in area.y..area.bottom() {
        put(frame, area.x, y, set.vertical, style);
        put(frame, right, y, set.vertical, style);
    }
    put(frame, area.x, area.y, set.top_left, style);
    put(frame, right, area.y, set.top_right, style);
    put(frame, area.x, bottom, set.bottom_left, style);
    put(frame, right, bottom, set.bottom_right, style);
}

fn put(frame: &mut Frame, x: u16, y: u16, ch: char, style: Style) {
    if let Some(cell) = frame.buffer.get_mut(x, y) {
        cell.ch = ch;
        apply_style(cell, style);
    }
}
