#![forbid(unsafe_code)]

//! Headless bottom sheet walkthrough.
//!
//! Drives a scripted session against a 48x18 frame and prints the glyph
//! grid at each step: slide in, scroll the content, press the backdrop,
//! slide out. No terminal backend is involved; the output is the same
//! snapshot text the test suite asserts on.
//!
//! # Running
//!
//! ```sh
//! cargo run -p sheetui-demo
//! ```

use std::io::{self, Write as _};
use std::time::Duration;

use sheetui::prelude::*;
use sheetui::render::headless::render_lines;
use sheetui::widgets::sheet::{HandleBarConfig, SheetStyle};
use sheetui::{MouseButton, MouseEvent, MouseEventKind};

const WIDTH: u16 = 48;
const HEIGHT: u16 = 18;
const TICK: Duration = Duration::from_millis(50);

fn host_background() -> Text {
    let mut lines = vec![
        " inbox - 14 unread".to_string(),
        String::new(),
    ];
    for i in 0..HEIGHT - 2 {
        lines.push(format!(" > message {:02} ······································", i + 1));
    }
    Text::from_lines(lines)
}

fn sheet_content() -> Text {
    Text::from_lines((1..=14).map(|i| format!("option {i:02}")).collect())
}

fn demo_config() -> SheetConfig {
    SheetConfig::new()
        .height("50%")
        .content_padding(1)
        .style(SheetStyle::new().border_width(1).corner_radius(1))
        .handle_bar(HandleBarConfig::new().width(10).height(1))
}

fn snapshot(out: &mut impl io::Write, label: &str, frame: &Frame) -> io::Result<()> {
    writeln!(out, "--- {label} ---")?;
    for line in render_lines(&frame.buffer) {
        writeln!(out, "|{line}|")?;
    }
    writeln!(out)
}

fn render(
    sheet: &BottomSheet<Text>,
    state: &mut SheetState,
    background: &Text,
    frame: &mut Frame,
) {
    frame.clear();
    background.render(Rect::new(0, 0, WIDTH, HEIGHT), frame);
    sheet.render(Rect::new(0, 0, WIDTH, HEIGHT), frame, state);
}

fn main() -> sheetui::Result<()> {
    #[cfg(feature = "tracing-json")]
    sheetui::core::logging::init_json_logging();

    let mut out = io::stdout().lock();
    let area = Rect::new(0, 0, WIDTH, HEIGHT);

    let background = host_background();
    let config = demo_config();
    let sheet = BottomSheet::new(sheet_content())
        .config(config.clone())
        .content_height(14)
        .hit_id(HitId::new(1));

    let mut state = SheetState::new();
    state.set_on_close(|| println!("[callback] sheet closed"));
    state.set_on_backdrop_press(|| println!("[callback] backdrop pressed"));

    let mut frame = Frame::with_hit_grid(WIDTH, HEIGHT);

    // Slide in.
    state.set_visible(true);
    state.tick(Duration::from_millis(150), &config);
    render(&sheet, &mut state, &background, &mut frame);
    snapshot(&mut out, "sliding in", &frame)?;

    while state.animation().is_animating() {
        state.tick(TICK, &config);
    }
    render(&sheet, &mut state, &background, &mut frame);
    snapshot(&mut out, "open", &frame)?;

    // Scroll the content by two rows with the wheel.
    for _ in 0..2 {
        let wheel = Event::Mouse(MouseEvent::new(MouseEventKind::ScrollDown, 10, 14));
        state.handle_event(&wheel, frame.hit_test(10, 14), &config);
    }
    render(&sheet, &mut state, &background, &mut frame);
    snapshot(&mut out, "scrolled", &frame)?;

    // Press the backdrop above the sheet; the host reacts by dropping the
    // visibility flag.
    let press = Event::Mouse(MouseEvent::new(
        MouseEventKind::Down(MouseButton::Left),
        2,
        1,
    ));
    if state.handle_event(&press, frame.hit_test(2, 1), &config) == Some(SheetAction::BackdropPressed)
    {
        state.set_visible(false);
    }

    state.tick(Duration::from_millis(150), &config);
    render(&sheet, &mut state, &background, &mut frame);
    snapshot(&mut out, "sliding out", &frame)?;

    while state.is_rendered() {
        if state.tick(TICK, &config) == Some(SheetAction::Closed) {
            writeln!(out, "[action] Closed")?;
        }
    }
    render(&sheet, &mut state, &background, &mut frame);
    snapshot(&mut out, "closed", &frame)?;

    Ok(())
}
