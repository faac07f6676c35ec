#![forbid(unsafe_code)]

//! sheetui public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! The core workflow:
//!
//! ```
//! use sheetui::prelude::*;
//! use std::time::Duration;
//!
//! let sheet = BottomSheet::new(Text::new("Session expired"))
//!     .height("40%")
//!     .hit_id(HitId::new(1));
//! let mut state = SheetState::new();
//!
//! state.set_visible(true);
//! let mut frame = Frame::with_hit_grid(80, 24);
//! sheet.render(Rect::new(0, 0, 80, 24), &mut frame, &mut state);
//!
//! // Each frame: advance the animation and re-render.
//! state.tick(Duration::from_millis(16), &SheetConfig::default());
//! ```

use std::fmt;

// --- Core re-exports -------------------------------------------------------

pub use sheetui_core::animation::{Easing, Progress};
pub use sheetui_core::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind,
};
pub use sheetui_core::geometry::{Rect, Sides};

// --- Render re-exports -----------------------------------------------------

pub use sheetui_render::buffer::Buffer;
pub use sheetui_render::cell::{Cell, CellFlags, PackedRgba};
pub use sheetui_render::frame::{Frame, HitData, HitId, HitRegion};
pub use sheetui_render::headless::render_lines;

// --- Style re-exports ------------------------------------------------------

pub use sheetui_style::{BLACK, LIGHT_GRAY, Style, WHITE, parse_hex};

// --- Widget re-exports -----------------------------------------------------

pub use sheetui_widgets::sheet::{
    BackdropConfig, HandleBarConfig, SHEET_HIT_BACKDROP, SHEET_HIT_CONTENT, ShadowOffset,
    SheetAnimationConfig, SheetAnimationState, SheetHeight, SheetMotion, SheetPhase, SheetStyle,
};
pub use sheetui_widgets::{
    BottomSheet, ScrollRegion, ScrollState, SheetAction, SheetConfig, SheetState, StatefulWidget,
    Text, Widget,
};

// --- Errors ---------------------------------------------------------------

/// Top-level error type for sheetui apps.
#[derive(Debug)]
pub enum Error {
    /// I/O failure while presenting a frame.
    Io(std::io::Error),
    /// Host surface error with message.
    Surface(String),
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(err) => write!(f, "{err}"),
            Self::Surface(msg) => write!(f, "{msg}"),
        }
    }
}

impl std::error::Error for Error {}

impl From<std::io::Error> for Error {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

/// Standard result type for sheetui APIs.
pub type Result<T> = std::result::Result<T, Error>;

// --- Prelude --------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BottomSheet, Buffer, Error, Event, Frame, HitId, KeyCode, KeyEvent, Rect, Result,
        SheetAction, SheetConfig, SheetHeight, SheetState, StatefulWidget, Style, Text, Widget,
    };

    pub use crate::{core, render, style, widgets};
}

pub use sheetui_core as core;
pub use sheetui_render as render;
pub use sheetui_style as style;
pub use sheetui_widgets as widgets;
