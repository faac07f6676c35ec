#![forbid(unsafe_code)]

//! Sheet configuration surface.
//!
//! Every field a caller can set lives here, with its default applied at
//! construction time so the whole defaults table is auditable in one
//! place. Configs are plain data: cloning is cheap and nothing here
//! mutates after construction.

use sheetui_render::cell::PackedRgba;
use sheetui_style::{BLACK, LIGHT_GRAY, WHITE};

use crate::sheet::animation::SheetAnimationConfig;

// ============================================================================
// Height
// ============================================================================

/// Requested sheet height: absolute rows or a percentage of the screen.
///
/// Percentages are kept as raw strings until [`resolve`](Self::resolve) so
/// that malformed input surfaces at resolution time the same way every
/// render, not once at construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum SheetHeight {
    /// Absolute height in cells.
    Cells(f64),
    /// Percentage of the screen height, e.g. `"50%"`.
    Percent(String),
}

impl SheetHeight {
    /// Resolve to a concrete height in cells.
    ///
    /// Absolute heights pass through unchanged. A percentage string is
    /// stripped of its trailing `%`, parsed as an integer, and taken as a
    /// fraction of `screen_height`. A string that does not parse resolves
    /// to NaN rather than an error; downstream geometry treats NaN as a
    /// zero-row sheet.
    pub fn resolve(&self, screen_height: f64) -> f64 {
        match self {
            Self::Cells(height) => *height,
            Self::Percent(raw) => {
                let digits = raw.strip_suffix('%').unwrap_or(raw);
                match digits.trim().parse::<i64>() {
                    Ok(percent) => percent as f64 / 100.0 * screen_height,
                    Err(_) => {
                        #[cfg(feature = "tracing")]
                        tracing::warn!(message = "sheet.height.unparsed", input = %raw);
                        f64::NAN
                    }
                }
            }
        }
    }
}

impl Default for SheetHeight {
    fn default() -> Self {
        Self::Cells(300.0)
    }
}

impl From<f64> for SheetHeight {
    fn from(height: f64) -> Self {
        Self::Cells(height)
    }
}

impl From<u16> for SheetHeight {
    fn from(height: u16) -> Self {
        Self::Cells(f64::from(height))
    }
}

impl From<&str> for SheetHeight {
    fn from(raw: &str) -> Self {
        Self::Percent(raw.to_string())
    }
}

impl From<String> for SheetHeight {
    fn from(raw: String) -> Self {
        Self::Percent(raw)
    }
}

// ============================================================================
// Backdrop
// ============================================================================

/// Appearance of the dimmed layer behind the sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BackdropConfig {
    /// Tint color.
    pub color: PackedRgba,
    /// Tint strength at full visibility, in [0.0, 1.0].
    pub opacity: f32,
}

impl Default for BackdropConfig {
    fn default() -> Self {
        Self {
            color: BLACK,
            opacity: 0.2,
        }
    }
}

impl BackdropConfig {
    /// Create a new default backdrop.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tint color.
    pub fn color(mut self, color: PackedRgba) -> Self {
        self.color = color;
        self
    }

    /// Set the tint strength at full visibility.
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity;
        self
    }
}

// ============================================================================
// Sheet Style
// ============================================================================

/// Offset of the depth shadow relative to the sheet, in cells.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ShadowOffset {
    pub x: i32,
    pub y: i32,
}

/// Visual styling of the sheet panel itself.
///
/// The depth cue defaults are platform-conditional: unix-like systems get
/// a soft shadow above the top edge, windows gets an elevation hint. A
/// caller can override either regardless of platform.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetStyle {
    /// Fill color of the sheet body.
    pub background: PackedRgba,
    /// Top corner rounding. Zero keeps square corners; any positive value
    /// rounds them.
    pub corner_radius: u16,
    /// Outline color. Falls back to black when an outline is drawn
    /// without an explicit color.
    pub border_color: Option<PackedRgba>,
    /// Outline thickness in cells. Zero disables the outline.
    pub border_width: u16,
    /// Shadow tint.
    pub shadow_color: Option<PackedRgba>,
    /// Shadow displacement. Negative y casts upward.
    pub shadow_offset: Option<ShadowOffset>,
    /// Shadow spread in rows.
    pub shadow_radius: Option<u16>,
    /// Depth hint used instead of a shadow on windows.
    pub elevation: Option<u16>,
}

impl Default for SheetStyle {
    fn default() -> Self {
        let mut style = Self {
            background: WHITE,
            corner_radius: 10,
            border_color: None,
            border_width: 0,
            shadow_color: None,
            shadow_offset: None,
            shadow_radius: None,
            elevation: None,
        };
        if cfg!(windows) {
            style.elevation = Some(4);
        } else {
            style.shadow_color = Some(BLACK);
            style.shadow_offset = Some(ShadowOffset { x: 0, y: -1 });
            style.shadow_radius = Some(1);
        }
        style
    }
}

impl SheetStyle {
    /// Create a new default style.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the fill color of the sheet body.
    pub fn background(mut self, color: PackedRgba) -> Self {
        self.background = color;
        self
    }

    /// Set the top corner rounding.
    pub fn corner_radius(mut self, radius: u16) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set the outline color.
    pub fn border_color(mut self, color: PackedRgba) -> Self {
        self.border_color = Some(color);
        self
    }

    /// Set the outline thickness in cells.
    pub fn border_width(mut self, width: u16) -> Self {
        self.border_width = width;
        self
    }

    /// Set the shadow tint.
    pub fn shadow_color(mut self, color: PackedRgba) -> Self {
        self.shadow_color = Some(color);
        self
    }

    /// Set the shadow displacement.
    pub fn shadow_offset(mut self, x: i32, y: i32) -> Self {
        self.shadow_offset = Some(ShadowOffset { x, y });
        self
    }

    /// Set the shadow spread in rows.
    pub fn shadow_radius(mut self, radius: u16) -> Self {
        self.shadow_radius = Some(radius);
        self
    }

    /// Set the depth hint.
    pub fn elevation(mut self, elevation: u16) -> Self {
        self.elevation = Some(elevation);
        self
    }
}

// ============================================================================
// Handle Bar
// ============================================================================

/// Appearance of the grab indicator at the top of the sheet.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HandleBarConfig {
    /// Whether the handle bar is drawn at all.
    pub visible: bool,
    /// Bar color.
    pub color: PackedRgba,
    /// Bar width in cells.
    pub width: u16,
    /// Bar height in cells.
    pub height: u16,
}

impl Default for HandleBarConfig {
    fn default() -> Self {
        Self {
            visible: true,
            color: LIGHT_GRAY,
            width: 40,
            height: 4,
        }
    }
}

impl HandleBarConfig {
    /// Create a new default handle bar.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether the handle bar is drawn.
    pub fn visible(mut self, visible: bool) -> Self {
        self.visible = visible;
        self
    }

    /// Set the bar color.
    pub fn color(mut self, color: PackedRgba) -> Self {
        self.color = color;
        self
    }

    /// Set the bar width in cells.
    pub fn width(mut self, width: u16) -> Self {
        self.width = width;
        self
    }

    /// Set the bar height in cells.
    pub fn height(mut self, height: u16) -> Self {
        self.height = height;
        self
    }
}

// ============================================================================
// Sheet Configuration
// ============================================================================

/// Complete configuration for a bottom sheet.
///
/// Every field has a default, so `SheetConfig::new()` is a usable sheet.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetConfig {
    /// Requested sheet height.
    pub height: SheetHeight,
    /// Whether content taller than the sheet scrolls instead of clipping.
    pub scrollable: bool,
    /// Transition timing.
    pub animation: SheetAnimationConfig,
    /// Backdrop appearance.
    pub backdrop: BackdropConfig,
    /// Sheet panel styling.
    pub style: SheetStyle,
    /// Grab indicator styling.
    pub handle_bar: HandleBarConfig,
    /// Padding around the content region, in cells.
    pub content_padding: u16,
    /// Whether the escape key requests a close while the sheet is open.
    pub close_on_escape: bool,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            height: SheetHeight::default(),
            scrollable: true,
            animation: SheetAnimationConfig::default(),
            backdrop: BackdropConfig::default(),
            style: SheetStyle::default(),
            handle_bar: HandleBarConfig::default(),
            content_padding: 16,
            close_on_escape: true,
        }
    }
}

impl SheetConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the requested sheet height.
    pub fn height(mut self, height: impl Into<SheetHeight>) -> Self {
        self.height = height.into();
        self
    }

    /// Set whether overflowing content scrolls.
    pub fn scrollable(mut self, scrollable: bool) -> Self {
        self.scrollable = scrollable;
        self
    }

    /// Set the transition timing.
    pub fn animation(mut self, animation: SheetAnimationConfig) -> Self {
        self.animation = animation;
        self
    }

    /// Set the backdrop appearance.
    pub fn backdrop(mut self, backdrop: BackdropConfig) -> Self {
        self.backdrop = backdrop;
        self
    }

    /// Set the sheet panel styling.
    pub fn style(mut self, style: SheetStyle) -> Self {
        self.style = style;
        self
    }

    /// Set the grab indicator styling.
    pub fn handle_bar(mut self, handle_bar: HandleBarConfig) -> Self {
        self.handle_bar = handle_bar;
        self
    }

    /// Set the padding around the content region.
    pub fn content_padding(mut self, padding: u16) -> Self {
        self.content_padding = padding;
        self
    }

    /// Set whether the escape key requests a close.
    pub fn close_on_escape(mut self, close: bool) -> Self {
        self.close_on_escape = close;
        self
    }
}

// ============================================================================
// Tests
// ============================================================================
