// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bracken Widgets: the stock widget layer over the Bracken immediate-mode
//! UI core.
//!
//! ## Overview
//!
//! Each widget follows the same per-frame shape: place itself through the
//! layout [`Ui`](bracken_layout::Ui), learn its interaction state from the
//! dispatcher, and present itself into an opaque [`DrawSink`]. The widgets
//! never inspect the sink and never measure glyphs themselves — both cross
//! the crate boundary as traits ([`DrawSink`], [`TextMetrics`]) supplied by
//! the host.
//!
//! Widget-private state that must survive across frames (a text cursor, a
//! drag anchor, a numeric edit buffer) lives in [`WidgetStates`], keyed by
//! qualified id, so multiple instances of the same widget kind never alias.
//!
//! The [`Target`] bundles everything a widget call needs for one frame:
//! the `Ui`, the sink, the metrics, the [`Theme`](bracken_theme::Theme),
//! and the `WidgetStates`.
//!
//! ## Minimal example
//!
//! ```
//! use bracken_theme::Theme;
//! use bracken_widgets::{DrawSink, FixedMetrics, Target, WidgetStates};
//! use bracken_layout::Ui;
//! use bracken_theme::{EdgeSize, Rgba};
//! use kurbo::{Point, Rect};
//!
//! struct NullSink;
//! impl DrawSink for NullSink {
//!     fn fill_rect(&mut self, _rect: Rect, _color: Rgba) {}
//!     fn stroke_rect(&mut self, _rect: Rect, _edges: EdgeSize, _color: Rgba) {}
//!     fn text(&mut self, _origin: Point, _text: &str, _scale: f64, _color: Rgba) {}
//! }
//!
//! let mut ui = Ui::new();
//! let mut sink = NullSink;
//! let metrics = FixedMetrics::default();
//! let theme = Theme::steel_blue();
//! let mut states = WidgetStates::new();
//!
//! let mut target = Target::new(&mut ui, &mut sink, &metrics, &theme, &mut states);
//! let clicked = target.button("ok", "OK", Point::new(10.0, 10.0));
//! assert!(!clicked);
//! ui.end_frame();
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod input_box;
mod metrics;
mod scroll_bar;
mod sink;
mod state;
mod target;
#[cfg(test)]
mod testing;

pub use input_box::{NumberValue, TextChange};
pub use metrics::{FixedMetrics, TextMetrics};
pub use sink::DrawSink;
pub use state::WidgetStates;
pub use target::Target;
