#![no_main]

use libfuzzer_sys::fuzz_target;
use sheetui_style::parse_hex;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 64 {
        return;
    }

    // parse_hex must never panic, and must only accept well-formed hex.
    let Some(color) = parse_hex(text) else {
        return;
    };

    let hex = text.strip_prefix('#').expect("accepted input without '#'");
    assert!(
        matches!(hex.len(), 3 | 6 | 8),
        "accepted {text:?} with {} hex digits",
        hex.len()
    );
    assert!(
        hex.chars().all(|c| c.is_ascii_hexdigit()),
        "accepted non-hex {text:?}"
    );

    match hex.len() {
        3 => {
            // Short form expands each nibble: #f00 == #ff0000.
            let nibble = |i: usize| u8::from_str_radix(&hex[i..=i], 16).unwrap() * 17;
            assert_eq!(color.r(), nibble(0));
            assert_eq!(color.g(), nibble(1));
            assert_eq!(color.b(), nibble(2));
            assert_eq!(color.a(), 255);
        }
        6 => {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap();
            assert_eq!(color.r(), byte(0));
            assert_eq!(color.g(), byte(2));
            assert_eq!(color.b(), byte(4));
            assert_eq!(color.a(), 255);
        }
        _ => {
            let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).unwrap();
            assert_eq!(color.a(), byte(6));
        }
    }
});
