#![forbid(unsafe_code)]

//! Render kernel: cells, buffers, frames, and hit testing.
//!
//! # Role in sheetui
//! `sheetui-render` owns the cell grid widgets draw into and the per-frame
//! hit grid that maps mouse positions back to interactive regions. It is
//! deliberately backend-free: presenting a [`buffer::Buffer`] on a real
//! terminal (ANSI, diffing, synchronized output) belongs to the host.
//!
//! # Invariants
//! - All writes are clipped to the buffer bounds; out-of-range access is a
//!   no-op, never a panic.
//! - Overlapping hit registrations resolve to the last writer at every
//!   cell, which is what lets an overlay claim clicks over a backdrop.
//!
//! # Failure Modes
//! - None surfaced: the kernel has no fallible operations. Degenerate
//!   geometry (zero-sized areas, off-grid rectangles) degrades to no-ops.

pub mod buffer;
pub mod cell;
pub mod frame;
pub mod headless;
