#![forbid(unsafe_code)]

//! The cell grid widgets draw into.

use crate::cell::{Cell, PackedRgba};
use sheetui_core::geometry::Rect;

/// A rectangular grid of [`Cell`]s.
///
/// All accessors are bounds-checked; writes outside the grid are dropped
/// silently so widgets can draw against clipped areas without pre-checking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Buffer {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Buffer {
    /// Create a buffer of empty cells.
    pub fn new(width: u16, height: u16) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            cells: vec![Cell::EMPTY; size],
        }
    }

    /// Buffer width in cells.
    #[inline]
    pub const fn width(&self) -> u16 {
        self.width
    }

    /// Buffer height in cells.
    #[inline]
    pub const fn height(&self) -> u16 {
        self.height
    }

    /// The bounding rectangle at the origin.
    #[inline]
    pub const fn bounds(&self) -> Rect {
        Rect::from_size(self.width, self.height)
    }

    #[inline]
    fn index(&self, x: u16, y: u16) -> Option<usize> {
        if x < self.width && y < self.height {
            Some(y as usize * self.width as usize + x as usize)
        } else {
            None
        }
    }

    /// Get the cell at (x, y).
    #[inline]
    pub fn get(&self, x: u16, y: u16) -> Option<&Cell> {
        self.index(x, y).map(|i| &self.cells[i])
    }

    /// Get a mutable reference to the cell at (x, y).
    #[inline]
    pub fn get_mut(&mut self, x: u16, y: u16) -> Option<&mut Cell> {
        self.index(x, y).map(|i| &mut self.cells[i])
    }

    /// Write a cell at (x, y). Out-of-bounds writes are dropped.
    #[inline]
    pub fn set(&mut self, x: u16, y: u16, cell: Cell) {
        if let Some(i) = self.index(x, y) {
            self.cells[i] = cell;
        }
    }

    /// Reset every cell to empty.
    pub fn clear(&mut self) {
        self.cells.fill(Cell::EMPTY);
    }

    /// Fill an area with copies of a cell, clipped to the buffer.
    pub fn fill(&mut self, area: Rect, cell: Cell) {
        let area = self.bounds().intersection(&area);
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                self.set(x, y, cell);
            }
        }
    }

    /// Composite a translucent color over an area, preserving glyphs.
    ///
    /// Both foreground and background take the tint, which is what dims
    /// text under a backdrop instead of leaving it at full brightness.
    pub fn tint(&mut self, area: Rect, color: PackedRgba) {
        if color.is_transparent() {
            return;
        }
        let area = self.bounds().intersection(&area);
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                if let Some(cell) = self.get_mut(x, y) {
                    cell.fg = color.over(cell.fg);
                    cell.bg = color.over(cell.bg);
                }
            }
        }
    }
}
