// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Headless widget gallery: declares a small UI for a few simulated frames
//! and prints the draw commands and interaction outcomes.
//!
//! Run with `cargo run -p bracken_demos --example widget_gallery`.

use kurbo::{Point, Rect};

use bracken_demos::PrintSink;
use bracken_layout::{Layout, Ui};
use bracken_theme::Theme;
use bracken_widgets::{FixedMetrics, Target, WidgetStates};

struct App {
    name: String,
    count: i64,
    volume: i64,
}

fn main() {
    let mut ui = Ui::new();
    let mut sink = PrintSink::default();
    let metrics = FixedMetrics::default();
    let theme = Theme::steel_blue();
    let mut states = WidgetStates::new();
    let mut app = App {
        name: String::from("ada"),
        count: 3,
        volume: 2,
    };

    // A scripted pointer session: click the button, then click the slider
    // track left of the knob to page the volume down.
    let script: &[(Point, Option<u32>, Option<u32>)] = &[
        (Point::new(20.0, 30.0), None, None),
        (Point::new(20.0, 30.0), Some(0), None),
        (Point::new(20.0, 30.0), None, Some(0)),
        (Point::new(24.0, 60.0), Some(0), None),
        (Point::new(24.0, 60.0), None, Some(0)),
        (Point::new(150.0, 90.0), None, None),
    ];

    for (frame, (pos, press, release)) in script.iter().enumerate() {
        sink.begin_frame(frame);
        ui.move_pointer(*pos);
        if let Some(button) = press {
            ui.press_pointer(*button);
        }
        if let Some(button) = release {
            ui.release_pointer(*button);
        }

        let mut target =
            Target::new(&mut ui, &mut sink, &metrics, &theme, &mut states).with_ticks(frame as u64 * 16);
        target.panel(
            "gallery",
            Rect::new(10.0, 10.0, 210.0, 110.0),
            Layout::Vertical,
            |t| {
                t.label("widget gallery", Point::ZERO);
                if t.button("more", "+1", Point::ZERO) {
                    app.count += 1;
                    println!("count -> {}", app.count);
                }
                if t.text_box("name", &mut app.name, Rect::new(0.0, 0.0, 120.0, 14.0)) {
                    println!("name -> {:?}", app.name);
                }
                if t.slider("volume", &mut app.volume, 0, 10, Rect::new(0.0, 0.0, 100.0, 10.0)) {
                    println!("volume -> {}", app.volume);
                }
            },
        );
        drop(target);
        ui.end_frame();
    }

    println!("final: count={} name={:?} volume={}", app.count, app.name, app.volume);
}
