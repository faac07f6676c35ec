//! Benchmarks for bottom sheet animation and rendering.
//!
//! Run with: cargo bench -p sheetui-widgets --bench sheet_bench

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use sheetui_core::geometry::Rect;
use sheetui_render::frame::{Frame, HitId};
use sheetui_widgets::sheet::{SheetAnimationConfig, SheetAnimationState};
use sheetui_widgets::{BottomSheet, SheetConfig, SheetState, StatefulWidget, Text};
use std::hint::black_box;
use std::time::Duration;

/// One frame at 60fps.
const TICK: Duration = Duration::from_micros(16_667);

fn bench_animation_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheet/animation");
    let config = SheetAnimationConfig::new().duration(Duration::from_millis(300));

    group.bench_function("full_show_hide_cycle", |b| {
        b.iter(|| {
            let mut state = SheetAnimationState::new();
            state.show();
            while state.is_animating() {
                black_box(state.tick(TICK, &config));
            }
            state.hide();
            while state.is_animating() {
                black_box(state.tick(TICK, &config));
            }
            black_box(state.phase());
        });
    });

    group.bench_function("motion_sample", |b| {
        let mut state = SheetAnimationState::new();
        state.show();
        state.tick(Duration::from_millis(150), &config);
        b.iter(|| {
            black_box(state.motion(&config));
        });
    });

    group.finish();
}

fn bench_sheet_render(c: &mut Criterion) {
    let mut group = c.benchmark_group("sheet/render");

    for &(width, height) in &[(80u16, 24u16), (200u16, 60u16)] {
        let area = Rect::new(0, 0, width, height);
        group.throughput(Throughput::Elements(
            u64::from(width) * u64::from(height),
        ));

        let content = Text::from_lines((0..50).map(|i| format!("row {i}")).collect());
        let widget = BottomSheet::new(content)
            .config(SheetConfig::new().height("40%").content_padding(1))
            .content_height(50)
            .hit_id(HitId::new(1));

        group.bench_function(BenchmarkId::new("visible", format!("{width}x{height}")), |b| {
            let mut state = SheetState::new();
            state.animation_mut().force_shown();
            let mut frame = Frame::with_hit_grid(width, height);
            b.iter(|| {
                frame.clear();
                widget.render(area, &mut frame, &mut state);
                black_box(&frame.buffer);
            });
        });

        group.bench_function(
            BenchmarkId::new("mid_transition", format!("{width}x{height}")),
            |b| {
                let mut state = SheetState::new();
                state.set_visible(true);
                state.tick(Duration::from_millis(150), &SheetConfig::new());
                let mut frame = Frame::with_hit_grid(width, height);
                b.iter(|| {
                    frame.clear();
                    widget.render(area, &mut frame, &mut state);
                    black_box(&frame.buffer);
                });
            },
        );
    }

    group.finish();
}

criterion_group!(benches, bench_animation_tick, bench_sheet_render);
criterion_main!(benches);
