#![no_main]

use libfuzzer_sys::fuzz_target;
use sheetui_widgets::sheet::SheetHeight;

fuzz_target!(|data: &[u8]| {
    let Ok(text) = std::str::from_utf8(data) else {
        return;
    };
    if text.len() > 256 {
        return;
    }

    for screen in [0.0, 1.0, 24.0, 800.0, 1e9] {
        // resolve must never panic; malformed input flows through as NaN.
        let resolved = SheetHeight::Percent(text.to_string()).resolve(screen);
        assert!(
            resolved.is_nan() || resolved.is_finite(),
            "non-finite non-NaN height for {text:?} at screen {screen}: {resolved}"
        );

        // A parseable integer percent must resolve proportionally.
        if let Ok(pct) = text.strip_suffix('%').unwrap_or(text).trim().parse::<i64>() {
            let expected = pct as f64 / 100.0 * screen;
            assert_eq!(
                resolved, expected,
                "percent {pct} at screen {screen} resolved to {resolved}"
            );
        } else {
            assert!(resolved.is_nan(), "unparsed {text:?} resolved to {resolved}");
        }
    }
});
