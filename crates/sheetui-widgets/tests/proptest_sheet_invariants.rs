//! Property-based invariant tests for the bottom sheet state machine.
//!
//! These verify invariants that must hold for any input sequence:
//!
//! 1. Setting visible=true always renders immediately.
//! 2. A non-rendered sheet implies the last visibility input was false.
//! 3. Hiding then ticking a full duration always stops rendering.
//! 4. Motion factors stay inside [0, 1] under arbitrary schedules.
//! 5. Close count equals the number of completed true→false edges.
//! 6. Linear re-show mid-hide never jumps the panel position.
//! 7. Integer percent heights resolve proportionally; garbage is NaN.
//! 8. Scroll offset never escapes [0, max_offset].

use proptest::prelude::*;
use sheetui_core::animation::Easing;
use sheetui_core::geometry::Rect;
use sheetui_render::frame::Frame;
use sheetui_widgets::sheet::{SheetAnimationConfig, SheetAnimationState, SheetHeight};
use sheetui_widgets::{ScrollRegion, ScrollState, StatefulWidget, Text};
use std::time::Duration;

// ── Helpers ─────────────────────────────────────────────────────────────

const DURATION_MS: u64 = 300;

fn config() -> SheetAnimationConfig {
    SheetAnimationConfig::new().duration(Duration::from_millis(DURATION_MS))
}

fn linear_config() -> SheetAnimationConfig {
    config()
        .show_easing(Easing::Linear)
        .hide_easing(Easing::Linear)
}

/// A visibility input plus the milliseconds ticked right after it.
fn schedule(max_len: usize) -> impl Strategy<Value = Vec<(bool, u64)>> {
    proptest::collection::vec((any::<bool>(), 0u64..=600), 1..=max_len)
}

// ═════════════════════════════════════════════════════════════════════════
// 1. visible=true renders immediately
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn show_renders_immediately(ops in schedule(20)) {
        let cfg = config();
        let mut state = SheetAnimationState::new();
        for (visible, ms) in ops {
            state.set_visible(visible);
            if visible {
                prop_assert!(
                    state.is_rendered(),
                    "phase {:?} after set_visible(true)",
                    state.phase()
                );
            }
            state.tick(Duration::from_millis(ms), &cfg);
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 2. not rendered implies last input was false
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn hidden_only_after_false_input(ops in schedule(20)) {
        let cfg = config();
        let mut state = SheetAnimationState::new();
        let mut last_input = false;
        for (visible, ms) in ops {
            state.set_visible(visible);
            last_input = visible;
            state.tick(Duration::from_millis(ms), &cfg);
            if !state.is_rendered() {
                prop_assert!(
                    !last_input,
                    "sheet went dark while the input still said visible"
                );
            }
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 3. a full-duration tick always completes a hide
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn full_tick_completes_hide(ops in schedule(10)) {
        let cfg = config();
        let mut state = SheetAnimationState::new();
        for (visible, ms) in ops {
            state.set_visible(visible);
            state.tick(Duration::from_millis(ms), &cfg);
        }

        state.set_visible(false);
        state.tick(Duration::from_millis(DURATION_MS), &cfg);
        prop_assert!(!state.is_rendered(), "phase {:?}", state.phase());
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 4. motion factors stay inside [0, 1]
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn motion_factors_bounded(ops in schedule(30)) {
        let cfg = config();
        let mut state = SheetAnimationState::new();
        for (visible, ms) in ops {
            state.set_visible(visible);
            state.tick(Duration::from_millis(ms), &cfg);

            let motion = state.motion(&cfg);
            for (name, value) in [
                ("offscreen", motion.offscreen),
                ("backdrop", motion.backdrop),
                ("content", motion.content),
            ] {
                prop_assert!(
                    (0.0..=1.0).contains(&value),
                    "{name} escaped to {value} in phase {:?}",
                    state.phase()
                );
            }
            prop_assert_eq!(motion.rendered, state.is_rendered());
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 5. close count equals completed true→false edges
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn close_count_matches_edges(inputs in proptest::collection::vec(any::<bool>(), 1..=20)) {
        let cfg = config();
        let mut state = SheetAnimationState::new();
        let mut applied = false;
        let mut edges = 0u32;
        let mut closes = 0u32;

        for visible in inputs {
            if applied && !visible {
                edges += 1;
            }
            applied = visible;

            state.set_visible(visible);
            // Drive every transition to completion before the next input.
            let changed = state.tick(Duration::from_millis(DURATION_MS), &cfg);
            if changed && state.is_hidden() {
                closes += 1;
            }
        }

        prop_assert_eq!(closes, edges, "one completion per hide edge");
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 6. linear re-show mid-hide never jumps the panel
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn linear_reshow_is_continuous(hide_ms in 1u64..DURATION_MS) {
        let cfg = linear_config();
        let mut state = SheetAnimationState::new();
        state.show();
        state.tick(Duration::from_millis(DURATION_MS), &cfg);

        state.hide();
        state.tick(Duration::from_millis(hide_ms), &cfg);
        let before = state.offscreen_factor(&cfg);

        state.show();
        let after = state.offscreen_factor(&cfg);
        prop_assert!(
            (before - after).abs() < 1e-5,
            "panel jumped from {before} to {after} at {hide_ms}ms"
        );
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 7. height resolution
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn integer_percent_resolves_proportionally(pct in 0i64..=400, screen in 1u16..=2000) {
        let height = SheetHeight::from(format!("{pct}%"));
        let resolved = height.resolve(f64::from(screen));
        let expected = pct as f64 / 100.0 * f64::from(screen);
        prop_assert!((resolved - expected).abs() < 1e-9);
    }

    #[test]
    fn cells_resolve_to_themselves(cells in 0.0f64..=5000.0, screen in 1u16..=2000) {
        let resolved = SheetHeight::Cells(cells).resolve(f64::from(screen));
        prop_assert_eq!(resolved, cells);
    }

    #[test]
    fn garbage_percent_is_nan_not_panic(input in "[a-zA-Z .#]{0,12}%?") {
        // Anything without a leading integer resolves to NaN, silently.
        let resolved = SheetHeight::Percent(input.clone()).resolve(800.0);
        if input.trim_end_matches('%').trim().parse::<i64>().is_err() {
            prop_assert!(resolved.is_nan(), "{input:?} resolved to {resolved}");
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 8. scroll offset stays inside bounds
// ═════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn scroll_offset_clamped(
        overflow in 0u16..=200,
        deltas in proptest::collection::vec(-300i32..=300, 1..=40),
    ) {
        // The overflow bound is discovered during render, so run one.
        let area = Rect::new(0, 0, 8, 10);
        let content_height = 10 + overflow;
        let region = ScrollRegion::new(
            Text::from_lines((0..content_height).map(|i| format!("{i}")).collect()),
            content_height,
        );
        let mut frame = Frame::new(8, 10);
        let mut state = ScrollState::new();
        region.render(area, &mut frame, &mut state);
        prop_assert_eq!(state.max_offset(), overflow);

        for delta in deltas {
            state.scroll_by(delta);
            prop_assert!(
                state.offset() <= state.max_offset(),
                "offset {} above max {}",
                state.offset(),
                state.max_offset()
            );
        }
    }
}

// ═════════════════════════════════════════════════════════════════════════
// 9. configuration survives serialization (serde feature)
// ═════════════════════════════════════════════════════════════════════════

#[cfg(feature = "serde")]
mod serde_round_trip {
    use super::*;
    use sheetui_widgets::SheetConfig;
    use sheetui_widgets::sheet::{BackdropConfig, SheetStyle};

    fn height_strategy() -> impl Strategy<Value = SheetHeight> {
        prop_oneof![
            (0.0f64..=2000.0).prop_map(SheetHeight::Cells),
            (0i64..=200).prop_map(|p| SheetHeight::Percent(format!("{p}%"))),
        ]
    }

    proptest! {
        #[test]
        fn sheet_config_survives_json(
            height in height_strategy(),
            opacity in 0.0f32..=1.0,
            radius in 0u16..=20,
            padding in 0u16..=32,
            scrollable in any::<bool>(),
            duration_ms in 0u64..=1000,
        ) {
            let config = SheetConfig::new()
                .height(height)
                .scrollable(scrollable)
                .content_padding(padding)
                .backdrop(BackdropConfig::new().opacity(opacity))
                .style(SheetStyle::new().corner_radius(radius))
                .animation(
                    SheetAnimationConfig::new().duration(Duration::from_millis(duration_ms)),
                );

            let json = serde_json::to_string(&config).unwrap();
            let back: SheetConfig = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(back, config);
        }
    }
}
