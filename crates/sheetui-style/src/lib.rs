#![forbid(unsafe_code)]

//! Style and color primitives.
//!
//! # Role in sheetui
//! `sheetui-style` sits between the render kernel and the widget layer: it
//! defines the optional-field [`Style`] widgets carry and the color
//! utilities (named defaults, hex parsing) configuration surfaces lean on.

pub mod color;
pub mod style;

pub use color::{BLACK, LIGHT_GRAY, WHITE, parse_hex};
pub use style::Style;
