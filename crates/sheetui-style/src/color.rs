#![forbid(unsafe_code)]

//! Named colors and hex parsing.

use sheetui_render::cell::PackedRgba;

/// Opaque black (`#000`).
pub const BLACK: PackedRgba = PackedRgba::rgb(0, 0, 0);

/// Opaque white (`#fff`).
pub const WHITE: PackedRgba = PackedRgba::rgb(255, 255, 255);

/// Opaque light gray (`#ccc`).
pub const LIGHT_GRAY: PackedRgba = PackedRgba::rgb(204, 204, 204);

/// Parse a CSS-style hex color.
///
/// Accepts `#rgb`, `#rrggbb`, and `#rrggbbaa` (case-insensitive). Returns
/// `None` for anything else; the reject is logged at debug level so
/// misconfigured themes are diagnosable without failing.
pub fn parse_hex(input: &str) -> Option<PackedRgba> {
    let parsed = try_parse_hex(input);
    if parsed.is_none() {
        tracing::debug!(message = "color.parse_hex.reject", input);
    }
    parsed
}

fn try_parse_hex(input: &str) -> Option<PackedRgba> {
    let hex = input.strip_prefix('#')?;
    // from_str_radix tolerates a leading '+'; require plain hex digits.
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }

    match hex.len() {
        3 => {
            let r = nibble(hex, 0)?;
            let g = nibble(hex, 1)?;
            let b = nibble(hex, 2)?;
            Some(PackedRgba::rgb(r * 17, g * 17, b * 17))
        }
        6 => {
            let r = byte(hex, 0)?;
            let g = byte(hex, 1)?;
            let b = byte(hex, 2)?;
            Some(PackedRgba::rgb(r, g, b))
        }
        8 => {
            let r = byte(hex, 0)?;
            let g = byte(hex, 1)?;
            let b = byte(hex, 2)?;
            let a = byte(hex, 3)?;
            Some(PackedRgba::rgba(r, g, b, a))
        }
        _ => None,
    }
}

fn nibble(hex: &str, index: usize) -> Option<u8> {
    let digit = hex.get(index..index + 1)?;
    u8::from_str_radix(digit, 16).ok()
}

fn byte(hex: &str, pair: usize) -> Option<u8> {
    let digits = hex.get(pair * 2..pair * 2 + 2)?;
    u8::from_str_radix(digits, 16).ok()
}
