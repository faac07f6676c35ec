#![forbid(unsafe_code)]

//! The optional-field style widgets carry.

use sheetui_render::cell::{CellFlags, PackedRgba};

/// A partial style: only the set fields are applied to a cell.
///
/// `None` fields leave the cell's existing value untouched, so styles
/// layer the way widgets expect (a content style over a container fill
/// changes text color without flattening the background).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Style {
    /// Foreground color override.
    pub fg: Option<PackedRgba>,
    /// Background color override.
    pub bg: Option<PackedRgba>,
    /// Attribute flags override.
    pub attrs: Option<CellFlags>,
}

impl Style {
    /// An empty style that changes nothing.
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    /// Set the foreground color.
    #[must_use]
    pub const fn fg(mut self, color: PackedRgba) -> Self {
        self.fg = Some(color);
        self
    }

    /// Set the background color.
    #[must_use]
    pub const fn bg(mut self, color: PackedRgba) -> Self {
        self.bg = Some(color);
        self
    }

    /// Set the attribute flags.
    #[must_use]
    pub const fn attrs(mut self, attrs: CellFlags) -> Self {
        self.attrs = Some(attrs);
        self
    }

    /// Whether no field is set.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none()
    }

    /// Overlay `other` on `self`: set fields of `other` win.
    #[must_use]
    pub fn patch(self, other: Style) -> Style {
        Style {
            fg: other.fg.or(self.fg),
            bg: other.bg.or(self.bg),
            attrs: other.attrs.or(self.attrs),
        }
    }
}
