#![forbid(unsafe_code)]

//! Animation primitives: easing curves and tick-driven progress clocks.
//!
//! Nothing in this module reads a wall clock. Hosts advance [`Progress`]
//! values with explicit deltas from their own frame loop, which keeps every
//! animation deterministic under test and frame-rate independent in
//! production.
//!
//! # Invariants
//! - `Progress::value()` is always in `[0.0, 1.0]`.
//! - A zero duration snaps to completion on the first advance.
//! - Easing curves map 0 to 0 and 1 to 1 and never leave `[0.0, 1.0]`.

mod clock;
mod easing;

pub use clock::Progress;
pub use easing::{Easing, lerp};
