#![forbid(unsafe_code)]

//! Sheet visibility state machine and slide/fade transitions.
//!
//! This module provides:
//! - A four-phase lifecycle driven by a boolean visibility signal
//! - Three progress clocks: sheet translation, backdrop fade, content fade
//! - Reversal of in-flight transitions on rapid show/hide
//! - Reduced motion support
//!
//! # Example
//!
//! ```ignore
//! let config = SheetAnimationConfig::default();
//! let mut state = SheetAnimationState::new();
//!
//! // React to the visibility signal
//! state.set_visible(true);
//!
//! // Each frame, advance and sample
//! state.tick(delta_time, &config);
//! let motion = state.motion(&config);
//! ```
//!
//! # Invariants
//!
//! - Each progress clock stays in [0.0, 1.0]
//! - The sheet is rendered whenever the phase is not `Hidden`
//! - `Hiding` ends when the translation clock completes; the fade clocks
//!   do not gate it
//! - Rapid show/hide reverses in-flight clocks from their current value
//!
//! # Failure Modes
//!
//! - Zero-duration transitions complete on the next tick

use std::time::Duration;

use sheetui_core::animation::{Easing, Progress};

// ============================================================================
// Sheet Phase
// ============================================================================

/// Current phase of the sheet lifecycle.
///
/// State machine: Hidden → Showing → Visible → Hiding → Hidden
///
/// Rapid toggling can skip phases (e.g., Showing → Hiding directly).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SheetPhase {
    /// Sheet is fully off screen and produces no output.
    #[default]
    Hidden,
    /// Sheet is sliding in (backdrop and content fading in).
    Showing,
    /// Sheet is fully on screen at rest.
    Visible,
    /// Sheet is sliding out (backdrop and content fading out).
    Hiding,
}

impl SheetPhase {
    /// Check if the sheet occupies the screen at all.
    #[inline]
    pub fn is_rendered(self) -> bool {
        !matches!(self, Self::Hidden)
    }

    /// Check if a transition is in progress.
    #[inline]
    pub fn is_animating(self) -> bool {
        matches!(self, Self::Showing | Self::Hiding)
    }
}

// ============================================================================
// Animation Configuration
// ============================================================================

/// Timing configuration for sheet transitions.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SheetAnimationConfig {
    /// Duration of both the show and hide transitions.
    pub duration: Duration,
    /// Easing applied while showing.
    pub show_easing: Easing,
    /// Easing applied while hiding.
    pub hide_easing: Easing,
}

impl Default for SheetAnimationConfig {
    fn default() -> Self {
        Self {
            duration: Duration::from_millis(300),
            show_easing: Easing::EaseOut,
            hide_easing: Easing::EaseIn,
        }
    }
}

impl SheetAnimationConfig {
    /// Create a new default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a configuration with no animation (instant snap).
    pub fn none() -> Self {
        Self {
            duration: Duration::ZERO,
            ..Default::default()
        }
    }

    /// Create a configuration for reduced motion preference.
    ///
    /// Short linear transitions instead of the default eased slide.
    pub fn reduced_motion() -> Self {
        Self {
            duration: Duration::from_millis(100),
            show_easing: Easing::Linear,
            hide_easing: Easing::Linear,
        }
    }

    /// Set the transition duration.
    pub fn duration(mut self, duration: Duration) -> Self {
        self.duration = duration;
        self
    }

    /// Set the easing used while showing.
    pub fn show_easing(mut self, easing: Easing) -> Self {
        self.show_easing = easing;
        self
    }

    /// Set the easing used while hiding.
    pub fn hide_easing(mut self, easing: Easing) -> Self {
        self.hide_easing = easing;
        self
    }
}

// ============================================================================
// Sampled Motion
// ============================================================================

/// A single frame's worth of interpolated sheet motion.
///
/// Factors are already eased; multiply them against resolved geometry and
/// configured opacities when rendering.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SheetMotion {
    /// Fraction of the sheet's height still below the bottom edge, in
    /// [0.0, 1.0]. 0.0 = at rest, 1.0 = fully off screen.
    pub offscreen: f32,
    /// Backdrop fade factor in [0.0, 1.0], to be multiplied with the
    /// configured backdrop opacity.
    pub backdrop: f32,
    /// Content fade factor in [0.0, 1.0].
    pub content: f32,
    /// Whether the sheet should produce any output at all.
    pub rendered: bool,
}

// ============================================================================
// Animation State
// ============================================================================

/// Animation state for a bottom sheet.
///
/// Owns the phase and the three progress clocks. The clocks count 0 → 1
/// within each animating phase; sampled accessors convert them into
/// direction-aware factors.
#[derive(Debug, Clone, Default)]
pub struct SheetAnimationState {
    /// Current lifecycle phase.
    phase: SheetPhase,
    /// Vertical translation progress within the current phase.
    translation: Progress,
    /// Backdrop fade progress within the current phase.
    backdrop: Progress,
    /// Content fade progress within the current phase.
    content: Progress,
}

impl SheetAnimationState {
    /// Create a new animation state (hidden, no animation).
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a state that starts fully visible (for testing or instant show).
    pub fn shown() -> Self {
        Self {
            phase: SheetPhase::Visible,
            translation: Progress::one(),
            backdrop: Progress::one(),
            content: Progress::one(),
        }
    }

    /// Get the current phase.
    pub fn phase(&self) -> SheetPhase {
        self.phase
    }

    /// Get the raw translation progress (0.0 to 1.0).
    pub fn translation_progress(&self) -> f32 {
        self.translation.value()
    }

    /// Get the raw backdrop progress (0.0 to 1.0).
    pub fn backdrop_progress(&self) -> f32 {
        self.backdrop.value()
    }

    /// Get the raw content progress (0.0 to 1.0).
    pub fn content_progress(&self) -> f32 {
        self.content.value()
    }

    /// Check if the sheet occupies the screen at all.
    #[inline]
    pub fn is_rendered(&self) -> bool {
        self.phase.is_rendered()
    }

    /// Check if a transition is in progress.
    #[inline]
    pub fn is_animating(&self) -> bool {
        self.phase.is_animating()
    }

    /// Check if the sheet is fully visible at rest.
    #[inline]
    pub fn is_visible(&self) -> bool {
        matches!(self.phase, SheetPhase::Visible)
    }

    /// Check if the sheet is fully hidden.
    #[inline]
    pub fn is_hidden(&self) -> bool {
        matches!(self.phase, SheetPhase::Hidden)
    }

    /// Apply an external visibility signal.
    ///
    /// `true` starts or continues showing, `false` starts or continues
    /// hiding. Repeating the current direction is a no-op, so callers may
    /// feed this every frame.
    pub fn set_visible(&mut self, visible: bool) {
        if visible {
            self.show();
        } else {
            self.hide();
        }
    }

    /// Start the show transition.
    ///
    /// If already showing or visible, this is a no-op.
    /// If hiding, reverses direction from the current position.
    pub fn show(&mut self) {
        match self.phase {
            SheetPhase::Hidden => {
                self.phase = SheetPhase::Showing;
                self.translation.reset();
                self.backdrop.reset();
                self.content.reset();
                #[cfg(feature = "tracing")]
                log_transition("show", SheetPhase::Hidden, self.phase);
            }
            SheetPhase::Hiding => {
                // Reverse from the current position: 30% hidden resumes
                // as 70% shown.
                self.phase = SheetPhase::Showing;
                self.translation.invert();
                self.backdrop.invert();
                self.content.invert();
                #[cfg(feature = "tracing")]
                log_transition("show", SheetPhase::Hiding, self.phase);
            }
            SheetPhase::Showing | SheetPhase::Visible => {
                // Already heading there, nothing to do
            }
        }
    }

    /// Start the hide transition.
    ///
    /// If already hiding or hidden, this is a no-op.
    /// If showing, reverses direction from the current position.
    pub fn hide(&mut self) {
        match self.phase {
            SheetPhase::Visible => {
                self.phase = SheetPhase::Hiding;
                self.translation.reset();
                self.backdrop.reset();
                self.content.reset();
                #[cfg(feature = "tracing")]
                log_transition("hide", SheetPhase::Visible, self.phase);
            }
            SheetPhase::Showing => {
                self.phase = SheetPhase::Hiding;
                self.translation.invert();
                self.backdrop.invert();
                self.content.invert();
                #[cfg(feature = "tracing")]
                log_transition("hide", SheetPhase::Showing, self.phase);
            }
            SheetPhase::Hiding | SheetPhase::Hidden => {
                // Already heading there, nothing to do
            }
        }
    }

    /// Force the sheet fully visible, skipping animation.
    pub fn force_shown(&mut self) {
        self.phase = SheetPhase::Visible;
        self.translation = Progress::one();
        self.backdrop = Progress::one();
        self.content = Progress::one();
    }

    /// Force the sheet fully hidden, skipping animation.
    ///
    /// Bypasses the hide transition entirely, so no close notification is
    /// produced for it.
    pub fn force_hidden(&mut self) {
        self.phase = SheetPhase::Hidden;
        self.translation.reset();
        self.backdrop.reset();
        self.content.reset();
    }

    /// Advance the animation by the given delta time.
    ///
    /// Returns `true` if the phase changed (e.g., Hiding → Hidden). The
    /// hide transition ends when the translation clock completes; the fade
    /// clocks keep advancing but do not gate it.
    pub fn tick(&mut self, delta: Duration, config: &SheetAnimationConfig) -> bool {
        match self.phase {
            SheetPhase::Showing => {
                let translation_done = self.translation.advance(delta, config.duration);
                let backdrop_done = self.backdrop.advance(delta, config.duration);
                let content_done = self.content.advance(delta, config.duration);

                if translation_done && backdrop_done && content_done {
                    self.phase = SheetPhase::Visible;
                    self.translation = Progress::one();
                    self.backdrop = Progress::one();
                    self.content = Progress::one();
                    #[cfg(feature = "tracing")]
                    log_transition("tick", SheetPhase::Showing, self.phase);
                    return true;
                }
            }
            SheetPhase::Hiding => {
                let translation_done = self.translation.advance(delta, config.duration);
                self.backdrop.advance(delta, config.duration);
                self.content.advance(delta, config.duration);

                if translation_done {
                    self.phase = SheetPhase::Hidden;
                    self.translation.reset();
                    self.backdrop.reset();
                    self.content.reset();
                    #[cfg(feature = "tracing")]
                    log_transition("tick", SheetPhase::Hiding, self.phase);
                    return true;
                }
            }
            SheetPhase::Hidden | SheetPhase::Visible => {
                // No animation in progress
            }
        }

        false
    }

    /// Fraction of the sheet's height still below the bottom edge.
    ///
    /// Returns a value in [0.0, 1.0]: 0.0 at rest, 1.0 fully off screen.
    pub fn offscreen_factor(&self, config: &SheetAnimationConfig) -> f32 {
        match self.phase {
            SheetPhase::Hidden => 1.0,
            SheetPhase::Showing => 1.0 - config.show_easing.apply(self.translation.value()),
            SheetPhase::Visible => 0.0,
            SheetPhase::Hiding => config.hide_easing.apply(self.translation.value()),
        }
    }

    /// Backdrop fade factor in [0.0, 1.0].
    ///
    /// Multiply with the configured backdrop opacity.
    pub fn backdrop_factor(&self, config: &SheetAnimationConfig) -> f32 {
        match self.phase {
            SheetPhase::Hidden => 0.0,
            SheetPhase::Showing => config.show_easing.apply(self.backdrop.value()),
            SheetPhase::Visible => 1.0,
            SheetPhase::Hiding => 1.0 - config.hide_easing.apply(self.backdrop.value()),
        }
    }

    /// Content fade factor in [0.0, 1.0].
    pub fn content_factor(&self, config: &SheetAnimationConfig) -> f32 {
        match self.phase {
            SheetPhase::Hidden => 0.0,
            SheetPhase::Showing => config.show_easing.apply(self.content.value()),
            SheetPhase::Visible => 1.0,
            SheetPhase::Hiding => 1.0 - config.hide_easing.apply(self.content.value()),
        }
    }

    /// Sample every interpolated value for the current frame at once.
    pub fn motion(&self, config: &SheetAnimationConfig) -> SheetMotion {
        SheetMotion {
            offscreen: self.offscreen_factor(config),
            backdrop: self.backdrop_factor(config),
            content: self.content_factor(config),
            rendered: self.is_rendered(),
        }
    }
}

#[cfg(feature = "tracing")]
fn log_transition(action: &'static str, from: SheetPhase, to: SheetPhase) {
    tracing::debug!(message = "sheet.phase", action, from = ?from, to = ?to);
}

// ============================================================================
// Tests
// ============================================================================
