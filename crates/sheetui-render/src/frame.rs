#![forbid(unsafe_code)]

//! Frame = Buffer + hit grid for a render pass.
//!
//! The `Frame` is the render target widgets write to. It bundles the cell
//! grid ([`Buffer`]) with an optional hit grid for mouse interaction, so a
//! widget can both draw a region and claim the clicks landing on it in one
//! pass.

use crate::buffer::Buffer;
use sheetui_core::geometry::Rect;

/// Identifier for a clickable region in the hit grid.
///
/// Widgets register hit regions with unique IDs to enable mouse routing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct HitId(pub u32);

impl HitId {
    /// Create a new hit ID from a raw value.
    #[inline]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[inline]
    pub const fn id(self) -> u32 {
        self.0
    }
}

/// Opaque user data attached to a hit registration.
pub type HitData = u64;

/// Regions within a widget for mouse interaction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum HitRegion {
    /// No interactive region.
    #[default]
    None,
    /// Main content area.
    Content,
    /// Scrollbar track or thumb.
    Scrollbar,
    /// Grab handle or drag target.
    Handle,
    /// Custom region tag.
    Custom(u8),
}

/// A single hit cell in the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct HitCell {
    pub widget_id: Option<HitId>,
    pub region: HitRegion,
    pub data: HitData,
}

impl HitCell {
    /// Create a populated hit cell.
    #[inline]
    pub const fn new(widget_id: HitId, region: HitRegion, data: HitData) -> Self {
        Self {
            widget_id: Some(widget_id),
            region,
            data,
        }
    }

    /// Check if the cell is empty.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.widget_id.is_none()
    }
}

/// Hit testing grid for mouse interaction.
///
/// Maps positions to widget IDs. Overlapping registrations resolve to the
/// last writer per cell, so a later (topmost) layer claims the click.
#[derive(Debug, Clone)]
pub struct HitGrid {
    width: u16,
    height: u16,
    cells: Vec<HitCell>,
}

impl HitGrid {
    /// Create a new hit grid with the given dimensions.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![HitCell::default(); size],
        }
    }

    /// Grid width.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Grid height.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get the hit cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&HitCell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    #[inline]
    fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut HitCell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Register a clickable region with the given hit metadata.
    ///
    /// All cells within the rectangle (clipped to the grid) map to this
    /// hit cell.
    pub fn register(&mut self, rect: Rect, widget_id: HitId, region: HitRegion, data: HitData) {
        let x_end = (rect.x as usize + rect.width as usize).min(self.width as usize) as u16;
        let y_end = (rect.y as usize + rect.height as usize).min(self.height as usize) as u16;

        let hit_cell = HitCell::new(widget_id, region, data);
        for y in rect.y..y_end {
            for x in rect.x..x_end {
                if let Some(cell) = self.get_mut(x, y) {
                    *cell = hit_cell;
                }
            }
        }
    }

    /// Hit test at the given position.
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion, HitData)> {
        self.get(x, y)
            .and_then(|cell| cell.widget_id.map(|id| (id, cell.region, cell.data)))
    }

    /// Clear all hit regions.
    pub fn clear(&mut self) {
        self.cells.fill(HitCell::default());
    }
}

/// Frame = Buffer + hit grid for a render pass.
#[derive(Debug, Clone)]
pub struct Frame {
    /// The cell grid for this render pass.
    pub buffer: Buffer,

    /// Optional hit grid for mouse hit testing.
    ///
    /// When `Some`, widgets can register clickable regions.
    pub hit_grid: Option<HitGrid>,
}

impl Frame {
    /// Create a new frame with given dimensions and no hit grid.
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            hit_grid: None,
        }
    }

    /// Create a frame with hit testing enabled.
    pub fn with_hit_grid(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            hit_grid: Some(HitGrid::new(width, height)),
        }
    }

    /// Enable hit testing on an existing frame.
    pub fn enable_hit_testing(&mut self) {
        if self.hit_grid.is_none() {
            self.hit_grid = Some(HitGrid::new(self.width(), self.height()));
        }
    }

    /// Frame width in cells.
    #[inline]
    pub fn width(&self) -> u16 {
        self.buffer.width()
    }

    /// Frame height in cells.
    #[inline]
    pub fn height(&self) -> u16 {
        self.buffer.height()
    }

    /// Clear frame for the next render.
    ///
    /// Resets both the buffer and hit grid (if present).
    pub fn clear(&mut self) {
        self.buffer.clear();
        if let Some(ref mut grid) = self.hit_grid {
            grid.clear();
        }
    }

    /// Get the bounding rectangle of the frame.
    #[inline]
    pub fn bounds(&self) -> Rect {
        self.buffer.bounds()
    }

    /// Register a hit region (if hit grid is enabled).
    ///
    /// Returns `true` if the region was registered, `false` if no hit grid.
    pub fn register_hit(
        &mut self,
        rect: Rect,
        id: HitId,
        region: HitRegion,
        data: HitData,
    ) -> bool {
        if let Some(ref mut grid) = self.hit_grid {
            grid.register(rect, id, region, data);
            true
        } else {
            false
        }
    }

    /// Hit test at the given position (if hit grid is enabled).
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion, HitData)> {
        self.hit_grid.as_ref().and_then(|grid| grid.hit_test(x, y))
    }
}

impl Default for Frame {
    /// Create a 1x1 frame (minimum size).
    fn default() -> Self {
        Self::new(1, 1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cell::Cell;

    #[test]
    fn frame_creation() {
        let frame = Frame::new(80, 24);
        assert_eq!(frame.width(), 80);
        assert_eq!(frame.height(), 24);
        assert!(frame.hit_grid.is_none());
    }

    #[test]
    fn frame_with_hit_grid() {
        let frame = Frame::with_hit_grid(80, 24);
        assert!(frame.hit_grid.is_some());
    }

    #[test]
    fn enable_hit_testing_is_idempotent() {
        let mut frame = Frame::new(10, 10);
        frame.enable_hit_testing();
        frame.register_hit(Rect::new(0, 0, 2, 2), HitId::new(1), HitRegion::Content, 0);
        frame.enable_hit_testing();
        assert!(frame.hit_test(1, 1).is_some());
    }

    #[test]
    fn frame_clear_resets_buffer_and_grid() {
        let mut frame = Frame::with_hit_grid(10, 10);
        frame.buffer.set(5, 5, Cell::from_char('X'));
        frame.register_hit(Rect::new(0, 0, 5, 5), HitId::new(1), HitRegion::Content, 0);

        frame.clear();

        assert!(frame.buffer.get(5, 5).is_some_and(Cell::is_empty));
        assert!(frame.hit_test(2, 2).is_none());
    }

    #[test]
    fn hit_grid_registration_bounds() {
        let mut frame = Frame::with_hit_grid(80, 24);
        let hit_id = HitId::new(42);
        frame.register_hit(Rect::new(10, 5, 20, 3), hit_id, HitRegion::Handle, 99);

        assert_eq!(frame.hit_test(15, 6), Some((hit_id, HitRegion::Handle, 99)));
        assert_eq!(frame.hit_test(10, 5), Some((hit_id, HitRegion::Handle, 99)));
        assert_eq!(frame.hit_test(29, 7), Some((hit_id, HitRegion::Handle, 99)));

        assert!(frame.hit_test(5, 5).is_none());
        assert!(frame.hit_test(30, 6).is_none());
        assert!(frame.hit_test(15, 8).is_none());
    }

    #[test]
    fn hit_grid_overlapping_last_wins() {
        let mut frame = Frame::with_hit_grid(20, 20);
        frame.register_hit(Rect::new(0, 0, 10, 10), HitId::new(1), HitRegion::Content, 1);
        frame.register_hit(Rect::new(5, 5, 10, 10), HitId::new(2), HitRegion::Custom(7), 2);

        assert_eq!(
            frame.hit_test(2, 2),
            Some((HitId::new(1), HitRegion::Content, 1))
        );
        assert_eq!(
            frame.hit_test(7, 7),
            Some((HitId::new(2), HitRegion::Custom(7), 2))
        );
    }

    #[test]
    fn hit_grid_out_of_bounds() {
        let frame = Frame::with_hit_grid(10, 10);
        assert!(frame.hit_test(100, 100).is_none());
        assert!(frame.hit_test(10, 0).is_none());
        assert!(frame.hit_test(0, 10).is_none());
    }

    #[test]
    fn hit_grid_boundary_clipping() {
        let mut grid = HitGrid::new(10, 10);
        grid.register(Rect::new(8, 8, 10, 10), HitId::new(1), HitRegion::Content, 0);

        assert_eq!(
            grid.hit_test(9, 9),
            Some((HitId::new(1), HitRegion::Content, 0))
        );
        assert!(grid.hit_test(10, 10).is_none());
    }

    #[test]
    fn register_hit_without_grid_reports_false() {
        let mut frame = Frame::new(10, 10);
        assert!(!frame.register_hit(Rect::new(0, 0, 5, 5), HitId::new(1), HitRegion::Content, 0));
    }
}
