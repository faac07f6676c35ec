#![forbid(unsafe_code)]

//! Cell and color primitives.
//!
//! A [`Cell`] is one character column of the grid: a glyph plus foreground,
//! background, and attribute flags. Colors are packed RGBA with a real
//! alpha channel so overlays can composite instead of overwrite.

use bitflags::bitflags;

/// A 32-bit packed RGBA color.
///
/// Layout is `0xRRGGBBAA`. Alpha 0 means "unset": the terminal default
/// shows through and compositing treats the color as fully transparent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PackedRgba(pub u32);

impl PackedRgba {
    /// Fully transparent (terminal default).
    pub const TRANSPARENT: Self = Self(0);

    /// Create an opaque color from RGB channels.
    #[inline]
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self::rgba(r, g, b, 255)
    }

    /// Create a color from RGBA channels.
    #[inline]
    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | (a as u32))
    }

    /// Red channel.
    #[inline]
    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Green channel.
    #[inline]
    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    /// Blue channel.
    #[inline]
    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }

    /// Alpha channel.
    #[inline]
    pub const fn a(self) -> u8 {
        self.0 as u8
    }

    /// Whether the color is fully opaque.
    #[inline]
    pub const fn is_opaque(self) -> bool {
        self.a() == 255
    }

    /// Whether the color is fully transparent (unset).
    #[inline]
    pub const fn is_transparent(self) -> bool {
        self.a() == 0
    }

    /// Scale the alpha channel by an opacity factor in `[0.0, 1.0]`.
    #[must_use]
    pub fn with_opacity(self, opacity: f32) -> Self {
        let opacity = opacity.clamp(0.0, 1.0);
        let a = (self.a() as f32 * opacity).round() as u8;
        Self::rgba(self.r(), self.g(), self.b(), a)
    }

    /// Source-over composite of `self` on top of `below`.
    ///
    /// A transparent `below` acts as the bare terminal: the result is just
    /// `self` at its own alpha, so tinting an unset background stays a
    /// translucent tint rather than inventing a black backing.
    #[must_use]
    pub fn over(self, below: Self) -> Self {
        if self.is_opaque() || below.is_transparent() {
            return self;
        }
        if self.is_transparent() {
            return below;
        }

        let sa = self.a() as f32 / 255.0;
        let ba = below.a() as f32 / 255.0;
        let out_a = sa + ba * (1.0 - sa);
        if out_a <= 0.0 {
            return Self::TRANSPARENT;
        }

        let blend = |s: u8, b: u8| -> u8 {
            let s = s as f32 / 255.0;
            let b = b as f32 / 255.0;
            (((s * sa + b * ba * (1.0 - sa)) / out_a) * 255.0).round() as u8
        };

        Self::rgba(
            blend(self.r(), below.r()),
            blend(self.g(), below.g()),
            blend(self.b(), below.b()),
            (out_a * 255.0).round() as u8,
        )
    }
}

bitflags! {
    /// Text attribute flags for a cell.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct CellFlags: u8 {
        const BOLD      = 0b0000_0001;
        const DIM       = 0b0000_0010;
        const ITALIC    = 0b0000_0100;
        const UNDERLINE = 0b0000_1000;
        const REVERSE   = 0b0001_0000;
    }
}

/// A single cell of the render grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    /// The glyph occupying this cell. Wide glyphs occupy the cell at their
    /// left edge; the following cell holds a plain space continuation.
    pub ch: char,
    /// Foreground color. Transparent means terminal default.
    pub fg: PackedRgba,
    /// Background color. Transparent means terminal default.
    pub bg: PackedRgba,
    /// Attribute flags.
    pub flags: CellFlags,
}

impl Cell {
    /// An empty cell: space glyph, default colors, no attributes.
    pub const EMPTY: Self = Self {
        ch: ' ',
        fg: PackedRgba::TRANSPARENT,
        bg: PackedRgba::TRANSPARENT,
        flags: CellFlags::empty(),
    };

    /// Create a cell holding the given glyph with default colors.
    #[inline]
    pub const fn from_char(ch: char) -> Self {
        Self {
            ch,
            fg: PackedRgba::TRANSPARENT,
            bg: PackedRgba::TRANSPARENT,
            flags: CellFlags::empty(),
        }
    }

    /// Replace the foreground color.
    #[must_use]
    pub const fn with_fg(mut self, fg: PackedRgba) -> Self {
        self.fg = fg;
        self
    }

    /// Replace the background color.
    #[must_use]
    pub const fn with_bg(mut self, bg: PackedRgba) -> Self {
        self.bg = bg;
        self
    }

    /// Replace the attribute flags.
    #[must_use]
    pub const fn with_flags(mut self, flags: CellFlags) -> Self {
        self.flags = flags;
        self
    }

    /// Whether the cell is indistinguishable from a cleared cell.
    #[inline]
    pub fn is_empty(&self) -> bool {
        *self == Self::EMPTY
    }
}

impl Default for Cell {
    fn default() -> Self {
        Self::EMPTY
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn packed_rgba_channels_round_trip() {
        let c = PackedRgba::rgba(1, 2, 3, 4);
        assert_eq!(c.r(), 1);
        assert_eq!(c.g(), 2);
        assert_eq!(c.b(), 3);
        assert_eq!(c.a(), 4);
    }

    #[test]
    fn rgb_is_opaque() {
        let c = PackedRgba::rgb(10, 20, 30);
        assert!(c.is_opaque());
        assert!(!c.is_transparent());
    }

    #[test]
    fn with_opacity_scales_alpha_only() {
        let c = PackedRgba::rgb(100, 150, 200).with_opacity(0.5);
        assert_eq!(c.r(), 100);
        assert_eq!(c.g(), 150);
        assert_eq!(c.b(), 200);
        assert_eq!(c.a(), 128);
    }

    #[test]
    fn with_opacity_clamps() {
        assert_eq!(PackedRgba::rgb(0, 0, 0).with_opacity(2.0).a(), 255);
        assert_eq!(PackedRgba::rgb(0, 0, 0).with_opacity(-1.0).a(), 0);
    }

    #[test]
    fn over_opaque_wins() {
        let top = PackedRgba::rgb(255, 0, 0);
        let below = PackedRgba::rgb(0, 255, 0);
        assert_eq!(top.over(below), top);
    }

    #[test]
    fn over_transparent_passes_through() {
        let below = PackedRgba::rgb(0, 255, 0);
        assert_eq!(PackedRgba::TRANSPARENT.over(below), below);
    }

    #[test]
    fn over_half_black_darkens_white() {
        let tint = PackedRgba::rgb(0, 0, 0).with_opacity(0.5);
        let out = tint.over(PackedRgba::rgb(255, 255, 255));
        assert!(out.is_opaque());
        // Roughly half brightness; rounding leaves one bit of slack.
        assert!((out.r() as i32 - 127).abs() <= 1);
        assert_eq!(out.r(), out.g());
        assert_eq!(out.g(), out.b());
    }

    #[test]
    fn over_unset_background_keeps_tint_translucent() {
        let tint = PackedRgba::rgb(0, 0, 0).with_opacity(0.2);
        let out = tint.over(PackedRgba::TRANSPARENT);
        assert_eq!(out, tint);
    }

    #[test]
    fn cell_builders() {
        let cell = Cell::from_char('x')
            .with_fg(PackedRgba::rgb(1, 1, 1))
            .with_bg(PackedRgba::rgb(2, 2, 2))
            .with_flags(CellFlags::BOLD);
        assert_eq!(cell.ch, 'x');
        assert!(cell.flags.contains(CellFlags::BOLD));
        assert!(!cell.is_empty());
    }

    #[test]
    fn empty_cell_is_empty() {
        assert!(Cell::EMPTY.is_empty());
        assert!(Cell::default().is_empty());
        assert!(!Cell::from_char('x').is_empty());
    }

    proptest! {
        #[test]
        fn prop_over_alpha_never_decreases_below_top(
            (r1, g1, b1, a1) in (0u8.., 0u8.., 0u8.., 0u8..),
            (r2, g2, b2, a2) in (0u8.., 0u8.., 0u8.., 0u8..),
        ) {
            let top = PackedRgba::rgba(r1, g1, b1, a1);
            let below = PackedRgba::rgba(r2, g2, b2, a2);
            let out = top.over(below);
            prop_assert!(out.a() >= top.a().saturating_sub(1));
        }

        #[test]
        fn prop_over_opaque_below_stays_opaque(
            (r1, g1, b1, a1) in (0u8.., 0u8.., 0u8.., 0u8..),
            (r2, g2, b2) in (0u8.., 0u8.., 0u8..),
        ) {
            let top = PackedRgba::rgba(r1, g1, b1, a1);
            let below = PackedRgba::rgb(r2, g2, b2);
            prop_assert!(top.over(below).is_opaque());
        }
    }
}
