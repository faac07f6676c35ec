#![forbid(unsafe_code)]

//! Bottom sheet container widget.
//!
//! Renders, outer to inner:
//! 1) a full-frame backdrop (tinted overlay) with a press-capture region,
//! 2) the sliding sheet panel at its animated vertical position,
//! 3) the optional handle bar on the sheet's top edge,
//! 4) the content, plain or wrapped in a scroll region.
//!
//! Invariants:
//! - Nothing is drawn and no hit regions exist while the sheet is hidden.
//! - The content hit region is registered over the backdrop's, so a press
//!   inside the sheet can never reach the backdrop handler.
//! - The close callback fires exactly once per completed hide transition.
//!
//! Failure modes:
//! - A height that resolves to NaN or ≤ 0 collapses the panel to zero rows;
//!   the backdrop still renders and captures presses.
//! - Padding larger than the panel leaves no content region; content is
//!   simply not rendered.

use std::fmt;
use std::time::Duration;

use crate::borders::{BorderSet, draw_outline};
use crate::scroll::{ScrollRegion, ScrollState};
use crate::sheet::animation::{SheetAnimationState, SheetMotion};
use crate::sheet::config::{SheetConfig, SheetHeight};
use crate::{StatefulWidget, Widget};
use sheetui_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, MouseButton, MouseEvent, MouseEventKind,
};
use sheetui_core::geometry::{Rect, Sides};
use sheetui_render::cell::Cell;
use sheetui_render::frame::{Frame, HitData, HitId, HitRegion};
use sheetui_style::{BLACK, Style};

/// Hit region tag for the backdrop outside the sheet.
pub const SHEET_HIT_BACKDROP: HitRegion = HitRegion::Custom(1);
/// Hit region tag for the sheet panel itself.
pub const SHEET_HIT_CONTENT: HitRegion = HitRegion::Custom(2);

/// Shadow tint strength at full visibility.
const SHADOW_ALPHA: f32 = 0.25;

/// Action emitted by [`SheetState::handle_event`] and [`SheetState::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SheetAction {
    /// A press landed on the backdrop outside the sheet.
    BackdropPressed,
    /// Escape was pressed while `close_on_escape` is enabled.
    EscapePressed,
    /// The hide transition finished and the sheet unmounted.
    Closed,
}

// ============================================================================
// Sheet State
// ============================================================================

/// Long-lived state for a bottom sheet: animation phase, scroll position,
/// and the outbound callbacks.
///
/// The visibility signal is external: feed it through
/// [`set_visible`](Self::set_visible) every time it may have changed, then
/// advance with [`tick`](Self::tick) each frame. The state never flips the
/// signal itself; a backdrop press only notifies the callbacks and leaves
/// the decision to the host.
#[derive(Default)]
pub struct SheetState {
    animation: SheetAnimationState,
    scroll: ScrollState,
    on_close: Option<Box<dyn FnMut()>>,
    on_backdrop_press: Option<Box<dyn FnMut()>>,
}

impl fmt::Debug for SheetState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SheetState")
            .field("animation", &self.animation)
            .field("scroll", &self.scroll)
            .field("on_close", &self.on_close.is_some())
            .field("on_backdrop_press", &self.on_backdrop_press.is_some())
            .finish()
    }
}

impl SheetState {
    /// Create a hidden sheet with no callbacks.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the callback invoked when a hide transition completes, and as
    /// the fallback for backdrop presses.
    pub fn set_on_close(&mut self, callback: impl FnMut() + 'static) {
        self.on_close = Some(Box::new(callback));
    }

    /// Set the callback invoked on a backdrop press instead of the close
    /// callback.
    pub fn set_on_backdrop_press(&mut self, callback: impl FnMut() + 'static) {
        self.on_backdrop_press = Some(Box::new(callback));
    }

    /// Animation state, for sampling or direct phase control.
    pub fn animation(&self) -> &SheetAnimationState {
        &self.animation
    }

    /// Mutable animation state.
    pub fn animation_mut(&mut self) -> &mut SheetAnimationState {
        &mut self.animation
    }

    /// Scroll position of the content region.
    pub fn scroll(&self) -> &ScrollState {
        &self.scroll
    }

    /// Mutable scroll position.
    pub fn scroll_mut(&mut self) -> &mut ScrollState {
        &mut self.scroll
    }

    /// Whether the sheet currently produces output.
    pub fn is_rendered(&self) -> bool {
        self.animation.is_rendered()
    }

    /// Apply the external visibility signal. Safe to call every frame.
    pub fn set_visible(&mut self, visible: bool) {
        self.animation.set_visible(visible);
    }

    /// Advance the animation by `delta`.
    ///
    /// Returns [`SheetAction::Closed`] and invokes the close callback when
    /// a hide transition completes on this tick. A hide cancelled by a
    /// re-show never completes, so it produces neither.
    pub fn tick(&mut self, delta: Duration, config: &SheetConfig) -> Option<SheetAction> {
        let changed = self.animation.tick(delta, &config.animation);
        if changed && self.animation.is_hidden() {
            self.invoke_close();
            return Some(SheetAction::Closed);
        }
        None
    }

    /// Route an input event.
    ///
    /// `hit` is the hit-test result from the frame the sheet last rendered
    /// into, for the event's position. Presses on the sheet panel (content,
    /// handle bar, scrollbar) are captured without any callback; presses on
    /// the backdrop invoke the backdrop-press callback, falling back to the
    /// close callback. While the sheet is hidden every event is ignored.
    pub fn handle_event(
        &mut self,
        event: &Event,
        hit: Option<(HitId, HitRegion, HitData)>,
        config: &SheetConfig,
    ) -> Option<SheetAction> {
        if !self.animation.is_rendered() {
            return None;
        }

        match event {
            Event::Key(KeyEvent {
                code: KeyCode::Escape,
                kind: KeyEventKind::Press,
                ..
            }) if config.close_on_escape => {
                self.invoke_close();
                Some(SheetAction::EscapePressed)
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                ..
            }) => match hit {
                Some((_, region, _)) if region == SHEET_HIT_BACKDROP => {
                    self.invoke_backdrop_press();
                    Some(SheetAction::BackdropPressed)
                }
                // Captured by the sheet; never reaches the backdrop handler.
                _ => None,
            },
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::ScrollUp,
                ..
            }) if config.scrollable && hit_on_sheet(hit) => {
                self.scroll.scroll_by(-1);
                None
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::ScrollDown,
                ..
            }) if config.scrollable && hit_on_sheet(hit) => {
                self.scroll.scroll_by(1);
                None
            }
            _ => None,
        }
    }

    fn invoke_close(&mut self) {
        if let Some(callback) = self.on_close.as_mut() {
            callback();
        }
    }

    fn invoke_backdrop_press(&mut self) {
        if let Some(callback) = self.on_backdrop_press.as_mut() {
            callback();
        } else if let Some(callback) = self.on_close.as_mut() {
            callback();
        }
    }
}

fn hit_on_sheet(hit: Option<(HitId, HitRegion, HitData)>) -> bool {
    matches!(
        hit,
        Some((_, region, _))
            if region == SHEET_HIT_CONTENT
                || region == HitRegion::Scrollbar
                || region == HitRegion::Handle
    )
}

// ============================================================================
// Bottom Sheet Widget
// ============================================================================

/// Bottom sheet overlay widget.
///
/// Rebuild it each frame around the content; the durable parts live in
/// [`SheetState`]. Without a [`hit_id`](Self::hit_id) no hit regions are
/// registered and backdrop presses cannot be told apart from content
/// presses.
#[derive(Debug, Clone)]
pub struct BottomSheet<C> {
    content: C,
    config: SheetConfig,
    content_height: Option<u16>,
    hit_id: Option<HitId>,
}

impl<C> BottomSheet<C> {
    /// Create a sheet around the given content with default configuration.
    pub fn new(content: C) -> Self {
        Self {
            content,
            config: SheetConfig::default(),
            content_height: None,
            hit_id: None,
        }
    }

    /// Replace the whole configuration.
    pub fn config(mut self, config: SheetConfig) -> Self {
        self.config = config;
        self
    }

    /// Set the requested sheet height.
    pub fn height(mut self, height: impl Into<SheetHeight>) -> Self {
        self.config.height = height.into();
        self
    }

    /// Set whether overflowing content scrolls.
    pub fn scrollable(mut self, scrollable: bool) -> Self {
        self.config.scrollable = scrollable;
        self
    }

    /// Declare the content's natural height in rows, enabling overflow
    /// detection for the scroll region. Without it the content is assumed
    /// to fit.
    pub fn content_height(mut self, rows: u16) -> Self {
        self.content_height = Some(rows);
        self
    }

    /// Set the id used when registering hit regions.
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = Some(id);
        self
    }

    /// Compute the panel rectangle for the given area and offscreen factor.
    ///
    /// The resting position is anchored to the bottom edge; the offscreen
    /// factor slides it below it. Mid-slide the rect extends past the area
    /// and relies on buffer clipping. NaN and non-positive resolved heights
    /// collapse to an empty rect.
    pub fn sheet_rect(&self, area: Rect, offscreen: f32) -> Rect {
        let resolved = self.config.height.resolve(f64::from(area.height));
        let height = if resolved.is_nan() {
            0.0
        } else {
            resolved.clamp(0.0, f64::from(area.height))
        };
        let height = height.round() as u16;
        if height == 0 {
            return Rect::new(area.x, area.bottom(), 0, 0);
        }

        let resting = area.bottom_slice(height);
        let drop = (offscreen.clamp(0.0, 1.0) * f32::from(height)).round() as i32;
        resting.offset(0, drop)
    }

    fn render_shadow(&self, sheet: Rect, frame: &mut Frame, motion: &SheetMotion) {
        let style = &self.config.style;
        let (Some(color), Some(offset)) = (style.shadow_color, style.shadow_offset) else {
            return;
        };
        let spread = style.shadow_radius.unwrap_or(1).max(1);
        for step in 0..spread {
            let cast = sheet.offset(
                offset.x + offset.x.signum() * i32::from(step),
                offset.y + offset.y.signum() * i32::from(step),
            );
            let fade = f32::from(spread - step) / f32::from(spread);
            frame
                .buffer
                .tint(cast, color.with_opacity(SHADOW_ALPHA * fade * motion.backdrop));
        }
    }

    fn render_body(&self, sheet: Rect, frame: &mut Frame) {
        let style = &self.config.style;
        let right = sheet.right().saturating_sub(1);
        let rounded = style.border_width == 0 && style.corner_radius > 0 && sheet.width >= 2;

        // Remember what was behind the top corners so a rounded corner can
        // keep the backdrop visible outside the curve.
        let saved = if rounded {
            (
                frame.buffer.get(sheet.x, sheet.y).map(|c| c.bg),
                frame.buffer.get(right, sheet.y).map(|c| c.bg),
            )
        } else {
            (None, None)
        };

        frame
            .buffer
            .fill(sheet, Cell::from_char(' ').with_bg(style.background));

        if style.border_width > 0 {
            let set = BorderSet::for_radius(style.corner_radius);
            let color = style.border_color.unwrap_or(BLACK);
            draw_outline(frame, sheet, set, Style::new().fg(color));
        } else if rounded {
            let set = BorderSet::ROUNDED;
            if let Some(cell) = frame.buffer.get_mut(sheet.x, sheet.y) {
                cell.ch = set.top_left;
                cell.fg = style.background;
                if let Some(bg) = saved.0 {
                    cell.bg = bg;
                }
            }
            if let Some(cell) = frame.buffer.get_mut(right, sheet.y) {
                cell.ch = set.top_right;
                cell.fg = style.background;
                if let Some(bg) = saved.1 {
                    cell.bg = bg;
                }
            }
        }
    }

    /// Draw the handle bar and return the rows it consumed from the top of
    /// `inner`, including the one-row gap above it.
    fn render_handle_bar(&self, inner: Rect, frame: &mut Frame) -> u16 {
        let bar = &self.config.handle_bar;
        if !bar.visible || inner.height < 2 || inner.width == 0 {
            return 0;
        }

        let bar_width = bar.width.min(inner.width);
        let bar_height = bar.height.min(inner.height - 1).max(1);
        let bar_rect = Rect::new(
            inner.x + (inner.width - bar_width) / 2,
            inner.y + 1,
            bar_width,
            bar_height,
        );

        frame
            .buffer
            .fill(bar_rect, Cell::from_char(' ').with_bg(bar.color));
        if let Some(id) = self.hit_id {
            frame.register_hit(bar_rect, id, HitRegion::Handle, 0);
        }

        1 + bar_height
    }
}

impl<C: Widget> StatefulWidget for BottomSheet<C> {
    type State = SheetState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut SheetState) {
        if area.is_empty() {
            return;
        }
        let motion = state.animation.motion(&self.config.animation);
        if !motion.rendered {
            return;
        }

        // Backdrop, preserving the glyphs underneath.
        let opacity = (self.config.backdrop.opacity * motion.backdrop).clamp(0.0, 1.0);
        if opacity > 0.0 {
            frame
                .buffer
                .tint(area, self.config.backdrop.color.with_opacity(opacity));
        }

        let sheet = self.sheet_rect(area, motion.offscreen);

        // Register hit regions before content renders so inner widgets can
        // stack finer regions on top. Content over backdrop: a press inside
        // the sheet resolves to the sheet, not the backdrop.
        if let Some(id) = self.hit_id {
            frame.register_hit(area, id, SHEET_HIT_BACKDROP, 0);
            if !sheet.is_empty() {
                frame.register_hit(sheet, id, SHEET_HIT_CONTENT, 0);
            }
        }

        if sheet.is_empty() {
            return;
        }

        self.render_shadow(sheet, frame, &motion);
        self.render_body(sheet, frame);

        let body = if self.config.style.border_width > 0 {
            sheet.inner(Sides::all(self.config.style.border_width))
        } else {
            sheet
        };
        let consumed = self.render_handle_bar(body, frame);
        let below_bar = Rect::new(
            body.x,
            body.y.saturating_add(consumed),
            body.width,
            body.height.saturating_sub(consumed),
        );
        let content_area = below_bar.inner(Sides::all(self.config.content_padding));
        if content_area.is_empty() {
            return;
        }

        if self.config.scrollable {
            let content_height = self.content_height.unwrap_or(content_area.height);
            let mut region = ScrollRegion::new(&self.content, content_height);
            if let Some(id) = self.hit_id {
                region = region.hit_id(id);
            }
            region.render(content_area, frame, &mut state.scroll);
        } else {
            self.content.render(content_area, frame);
        }

        // Content fade: veil the content region with the sheet background
        // while the content opacity is below 1.
        if motion.content < 1.0 {
            let veil = self
                .config
                .style
                .background
                .with_opacity(1.0 - motion.content);
            frame.buffer.tint(content_area, veil);
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
