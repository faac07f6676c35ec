#![forbid(unsafe_code)]

//! Bottom sheet overlay.
//!
//! A bottom sheet is a panel anchored to the bottom edge of the screen that
//! slides up over existing content, with a tinted backdrop behind it. The
//! module splits into three parts:
//!
//! - [`animation`]: the visibility state machine and its progress clocks
//! - [`config`]: the caller-facing configuration surface with its defaults
//! - [`container`]: the widget that composes backdrop, sheet body, handle
//!   bar, and content into a frame, plus the event routing around it

pub mod animation;
pub mod config;
pub mod container;

pub use animation::{SheetAnimationConfig, SheetAnimationState, SheetMotion, SheetPhase};
pub use config::{
    BackdropConfig, HandleBarConfig, ShadowOffset, SheetConfig, SheetHeight, SheetStyle,
};
pub use container::{
    BottomSheet, SheetAction, SheetState, SHEET_HIT_BACKDROP, SHEET_HIT_CONTENT,
};
