#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use sheetui_widgets::sheet::{SheetAnimationConfig, SheetAnimationState};
use std::time::Duration;

#[derive(Arbitrary, Debug)]
struct Step {
    visible: bool,
    tick_ms: u16,
}

#[derive(Arbitrary, Debug)]
struct Schedule {
    duration_ms: u16,
    steps: Vec<Step>,
}

fuzz_target!(|schedule: Schedule| {
    if schedule.steps.len() > 64 {
        return;
    }

    let config = SheetAnimationConfig::new()
        .duration(Duration::from_millis(u64::from(schedule.duration_ms)));
    let mut state = SheetAnimationState::new();

    for step in &schedule.steps {
        state.set_visible(step.visible);
        if step.visible {
            assert!(state.is_rendered(), "visible sheet not rendered: {state:?}");
        }

        state.tick(Duration::from_millis(u64::from(step.tick_ms)), &config);

        let motion = state.motion(&config);
        for value in [motion.offscreen, motion.backdrop, motion.content] {
            assert!(
                (0.0..=1.0).contains(&value),
                "factor escaped [0,1]: {value} in {state:?}"
            );
        }
        assert_eq!(motion.rendered, state.is_rendered());
    }
});
