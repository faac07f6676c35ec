#![forbid(unsafe_code)]

//! Scrollable viewport over content taller than its area.
//!
//! The child renders once into a scratch buffer at its natural height;
//! the viewport blits the visible window out of it. Scrolling therefore
//! never re-flows the child, it only moves the window.

use sheetui_core::geometry::Rect;
use sheetui_render::frame::{Frame, HitId, HitRegion};

use crate::{StatefulWidget, Widget};

/// Track glyph for the scrollbar column.
const TRACK: char = '░';
/// Thumb glyph for the scrollbar column.
const THUMB: char = '█';

/// Scroll position, owned by the caller across frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScrollState {
    offset: u16,
    max_offset: u16,
}

impl ScrollState {
    /// Create a state scrolled to the top.
    pub fn new() -> Self {
        Self::default()
    }

    /// Current offset in rows from the top of the content.
    pub fn offset(&self) -> u16 {
        self.offset
    }

    /// Largest offset the last render allowed.
    pub fn max_offset(&self) -> u16 {
        self.max_offset
    }

    /// Jump to an absolute offset, clamped to the known overflow.
    pub fn scroll_to(&mut self, offset: u16) {
        self.offset = offset.min(self.max_offset);
    }

    /// Move by a row delta, clamped to the known overflow.
    pub fn scroll_by(&mut self, delta: i32) {
        let next = (i32::from(self.offset) + delta).clamp(0, i32::from(self.max_offset));
        self.offset = next as u16;
    }

    fn clamp_to(&mut self, max_offset: u16) {
        self.max_offset = max_offset;
        self.offset = self.offset.min(max_offset);
    }
}

/// Viewport that shows a window of `content_height` rows of its child.
#[derive(Debug, Clone)]
pub struct ScrollRegion<C> {
    content: C,
    content_height: u16,
    hit_id: Option<HitId>,
}

impl<C> ScrollRegion<C> {
    /// Create a viewport over `content` with the given natural height.
    pub fn new(content: C, content_height: u16) -> Self {
        Self {
            content,
            content_height,
            hit_id: None,
        }
    }

    /// Register the scrollbar column under this id for hit testing.
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = Some(id);
        self
    }

    fn overflows(&self, area: Rect) -> bool {
        self.content_height > area.height
    }
}

impl<C: Widget> StatefulWidget for ScrollRegion<C> {
    type State = ScrollState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut ScrollState) {
        if area.is_empty() {
            return;
        }

        let overflows = self.overflows(area);
        state.clamp_to(self.content_height.saturating_sub(area.height));

        // One column on the right is reserved for the scrollbar only when
        // the content actually overflows.
        let view_width = if overflows {
            area.width.saturating_sub(1)
        } else {
            area.width
        };
        if view_width == 0 {
            return;
        }

        // Render the child at its natural height, then blit the window.
        let scratch_height = self.content_height.max(area.height);
        let mut scratch = Frame::new(view_width, scratch_height);
        self.content
            .render(Rect::new(0, 0, view_width, scratch_height), &mut scratch);

        for row in 0..area.height {
            let src_y = row.saturating_add(state.offset);
            for col in 0..view_width {
                let src = match scratch.buffer.get(col, src_y) {
                    Some(cell) => *cell,
                    None => continue,
                };
                // Empty cells are transparent: whatever the host already
                // drew underneath the viewport shows through.
                if src.is_empty() {
                    continue;
                }
                let x = area.x.saturating_add(col);
                let y = area.y.saturating_add(row);
                if let Some(dst) = frame.buffer.get_mut(x, y) {
                    dst.ch = src.ch;
                    dst.fg = src.fg;
                    dst.flags = src.flags;
                    if !src.bg.is_transparent() {
                        dst.bg = src.bg;
                    }
                }
            }
        }

        if overflows {
            self.render_scrollbar(area, frame, state);
        }
    }
}

impl<C> ScrollRegion<C> {
    fn render_scrollbar(&self, area: Rect, frame: &mut Frame, state: &ScrollState) {
        let bar_x = area.right().saturating_sub(1);
        let track_height = area.height;
        if track_height == 0 {
            return;
        }

        let thumb_height =
            (u32::from(track_height) * u32::from(track_height) / u32::from(self.content_height))
                .max(1) as u16;
        let travel = track_height.saturating_sub(thumb_height);
        let thumb_top = if state.max_offset == 0 {
            0
        } else {
            (u32::from(state.offset) * u32::from(travel) / u32::from(state.max_offset)) as u16
        };

        for row in 0..track_height {
            let ch = if row >= thumb_top && row < thumb_top + thumb_height {
                THUMB
            } else {
                TRACK
            };
            if let Some(cell) = frame.buffer.get_mut(bar_x, area.y.saturating_add(row)) {
                cell.ch = ch;
            }
        }

        if let Some(id) = self.hit_id {
            frame.register_hit(
                Rect::new(bar_x, area.y, 1, track_height),
                id,
                HitRegion::Scrollbar,
                0,
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::text::Text;
    use sheetui_render::headless::render_lines;

    fn numbered(lines: u16) -> Text {
        Text::from_lines((0..lines).map(|i| format!("line{i}")).collect())
    }

    #[test]
    fn test_shows_top_window_initially() {
        let region = ScrollRegion::new(numbered(10), 10);
        let mut frame = Frame::new(8, 4);
        let mut state = ScrollState::new();

        region.render(Rect::new(0, 0, 8, 4), &mut frame, &mut state);

        let lines = render_lines(&frame.buffer);
        assert!(lines[0].starts_with("line0"));
        assert!(lines[3].starts_with("line3"));
    }

    #[test]
    fn test_offset_moves_window() {
        let region = ScrollRegion::new(numbered(10), 10);
        let mut frame = Frame::new(8, 4);
        let mut state = ScrollState::new();

        // First render establishes the overflow, then scroll and re-render.
        region.render(Rect::new(0, 0, 8, 4), &mut frame, &mut state);
        state.scroll_by(2);
        frame.clear();
        region.render(Rect::new(0, 0, 8, 4), &mut frame, &mut state);

        let lines = render_lines(&frame.buffer);
        assert!(lines[0].starts_with("line2"));
        assert!(lines[3].starts_with("line5"));
    }

    #[test]
    fn test_offset_clamps_to_overflow() {
        let region = ScrollRegion::new(numbered(10), 10);
        let mut frame = Frame::new(8, 4);
        let mut state = ScrollState::new();

        region.render(Rect::new(0, 0, 8, 4), &mut frame, &mut state);
        state.scroll_by(100);
        assert_eq!(state.offset(), 6);

        state.scroll_by(-100);
        assert_eq!(state.offset(), 0);
    }

    #[test]
    fn test_scrollbar_drawn_only_on_overflow() {
        let mut frame = Frame::new(8, 4);
        let mut state = ScrollState::new();

        ScrollRegion::new(numbered(10), 10).render(Rect::new(0, 0, 8, 4), &mut frame, &mut state);
        let glyph = frame.buffer.get(7, 0).map(|c| c.ch);
        assert!(glyph == Some(TRACK) || glyph == Some(THUMB));

        frame.clear();
        ScrollRegion::new(numbered(3), 3).render(Rect::new(0, 0, 8, 4), &mut frame, &mut state);
        assert_eq!(frame.buffer.get(7, 0).map(|c| c.ch), Some(' '));
    }

    #[test]
    fn test_thumb_tracks_offset() {
        let region = ScrollRegion::new(numbered(16), 16);
        let mut frame = Frame::new(8, 4);
        let mut state = ScrollState::new();

        region.render(Rect::new(0, 0, 8, 4), &mut frame, &mut state);
        assert_eq!(frame.buffer.get(7, 0).map(|c| c.ch), Some(THUMB));

        state.scroll_to(state.max_offset());
        frame.clear();
        region.render(Rect::new(0, 0, 8, 4), &mut frame, &mut state);
        assert_eq!(frame.buffer.get(7, 3).map(|c| c.ch), Some(THUMB));
    }

    #[test]
    fn test_scrollbar_hit_region_registered() {
        let region = ScrollRegion::new(numbered(10), 10).hit_id(HitId::new(3));
        let mut frame = Frame::with_hit_grid(8, 4);
        let mut state = ScrollState::new();

        region.render(Rect::new(0, 0, 8, 4), &mut frame, &mut state);

        assert_eq!(
            frame.hit_test(7, 2),
            Some((HitId::new(3), HitRegion::Scrollbar, 0))
        );
        assert_eq!(frame.hit_test(3, 2), None);
    }

    #[test]
    fn test_short_content_fills_viewport_without_scrollbar_column() {
        let region = ScrollRegion::new(numbered(2), 2);
        let mut frame = Frame::new(8, 4);
        let mut state = ScrollState::new();

        region.render(Rect::new(0, 0, 8, 4), &mut frame, &mut state);

        let lines = render_lines(&frame.buffer);
        assert!(lines[0].starts_with("line0"));
        assert_eq!(state.max_offset(), 0);
    }
}
