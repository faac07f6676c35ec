#![forbid(unsafe_code)]

//! Core: geometry, input events, and animation clocks.
//!
//! # Role in sheetui
//! `sheetui-core` is the foundation layer. It owns the coordinate types the
//! render kernel draws into, the normalized input events the widgets route,
//! and the phase-free animation primitives (easing curves and tick-driven
//! progress clocks) that the sheet's state machine is built from.
//!
//! # Primary responsibilities
//! - **Rect/Sides/Size**: cell-based geometry for areas, padding, and hit
//!   testing.
//! - **Event**: canonical input events (keys, mouse, resize, focus).
//! - **Easing/Progress**: time-driven interpolation state advanced by
//!   explicit deltas, never by an internal wall clock.
//!
//! # How it fits in the system
//! The render kernel (`sheetui-render`) consumes geometry; the widget layer
//! (`sheetui-widgets`) consumes events and builds its visibility state
//! machine on `Progress`. Nothing here touches a terminal: the host owns
//! I/O and feeds deltas and events in.

pub mod animation;
pub mod event;
pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{
    debug, debug_span, error, error_span, info, info_span, trace, trace_span, warn, warn_span,
};
