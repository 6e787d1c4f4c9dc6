// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared test support: a recording sink and a one-stop harness.

use alloc::string::{String, ToString};
use alloc::vec::Vec;

use kurbo::{Point, Rect};

use bracken_layout::Ui;
use bracken_theme::{EdgeSize, Rgba, Theme};

use crate::metrics::FixedMetrics;
use crate::sink::DrawSink;
use crate::state::WidgetStates;
use crate::target::Target;

/// A sink that records every command for assertions.
#[derive(Debug, Default)]
pub(crate) struct Recorder {
    pub(crate) fills: Vec<(Rect, Rgba)>,
    pub(crate) strokes: Vec<(Rect, EdgeSize, Rgba)>,
    pub(crate) texts: Vec<(Point, String, f64, Rgba)>,
}

impl Recorder {
    pub(crate) fn clear(&mut self) {
        self.fills.clear();
        self.strokes.clear();
        self.texts.clear();
    }
}

impl DrawSink for Recorder {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.fills.push((rect, color));
    }

    fn stroke_rect(&mut self, rect: Rect, edges: EdgeSize, color: Rgba) {
        self.strokes.push((rect, edges, color));
    }

    fn text(&mut self, origin: Point, text: &str, scale: f64, color: Rgba) {
        self.texts.push((origin, text.to_string(), scale, color));
    }
}

/// Everything a widget test needs, with a [`Target`] on demand.
#[derive(Debug)]
pub(crate) struct Harness {
    pub(crate) ui: Ui,
    pub(crate) sink: Recorder,
    pub(crate) metrics: FixedMetrics,
    pub(crate) theme: Theme,
    pub(crate) states: WidgetStates,
}

impl Harness {
    pub(crate) fn new() -> Self {
        Self {
            ui: Ui::new(),
            sink: Recorder::default(),
            metrics: FixedMetrics::default(),
            theme: Theme::steel_blue(),
            states: WidgetStates::new(),
        }
    }

    /// A widget context borrowing this harness for one frame.
    pub(crate) fn target(&mut self) -> Target<'_, Recorder, FixedMetrics> {
        Target::new(
            &mut self.ui,
            &mut self.sink,
            &self.metrics,
            &self.theme,
            &mut self.states,
        )
    }
}
