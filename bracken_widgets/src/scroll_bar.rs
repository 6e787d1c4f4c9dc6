// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Sliders and scroll bars.

use kurbo::{Point, Rect};

use bracken_events::{Event, Request, Status};
use bracken_layout::ContainerOptions;
use bracken_theme::WidgetKind;

use crate::metrics::TextMetrics;
use crate::sink::{DrawSink, present_box};
use crate::target::Target;

impl<'a, S: DrawSink, M: TextMetrics> Target<'a, S, M> {
    /// A horizontal value slider over `[min, max]`.
    ///
    /// The knob is dragged with the pointer grab; clicking the track pages
    /// the value toward the pointer. Returns `true` when the value changed.
    pub fn slider(&mut self, id: &str, value: &mut i64, min: i64, max: i64, rect: Rect) -> bool {
        debug_assert!(min < max, "slider range must be non-empty");
        let style = self.theme.slider(WidgetKind::Slider);
        let container = self.ui.begin_container(
            id,
            rect,
            ContainerOptions {
                request: Request::Grab,
                ..ContainerOptions::default()
            },
        );
        let track = self.ui.container_rect(&container);
        present_box(self.sink, track, &style.track);

        let distance = (max - min) as f64;
        let knob_len = (rect.width() / distance).max(style.min_knob);
        let knob_max = rect.width() - knob_len;
        let knob_pos = ((*value - min) as f64 * knob_max / distance).clamp(0.0, knob_max);

        let knob = self.ui.element(
            "knob",
            Rect::new(knob_pos, 0.0, knob_pos + knob_len, rect.height()),
            Request::Grab,
        );
        present_box(self.sink, knob.rect, &style.knob);

        let mut changed = false;
        if knob.status.contains(Status::GRABBED) {
            let pointer_x = self.ui.pointer_position().x;
            let anchor = self
                .states
                .drag_anchors
                .entry(knob.id.clone())
                .or_insert(pointer_x);
            if knob.event == Event::Grab {
                *anchor = pointer_x;
            }
            let delta = drag_steps(pointer_x - *anchor, distance, knob_max);
            if delta != 0 {
                // Consume only whole steps; the remainder keeps accumulating.
                *anchor += delta as f64 * knob_max / distance;
                let next = (*value + delta).clamp(min, max);
                changed = next != *value;
                *value = next;
            }
        } else {
            self.states.drag_anchors.remove(&knob.id);
        }

        let track_state = self.ui.end_container(container);
        if track_state.event == Event::Action {
            // A click on the bare track pages toward the pointer.
            let step = ((max - min) / 8).max(1);
            let next = if self.ui.pointer_position().x < track.x0 + knob_pos {
                (*value - step).max(min)
            } else {
                (*value + step).min(max)
            };
            changed |= next != *value;
            *value = next;
        }
        changed
    }

    /// A horizontal scroll bar: step buttons at both ends around a
    /// proportional slider. Returns `true` when the value changed.
    pub fn scroll_bar(&mut self, id: &str, value: &mut i64, min: i64, max: i64, rect: Rect) -> bool {
        debug_assert!(min < max, "scroll bar range must be non-empty");
        let style = self.theme.scroll_bar(WidgetKind::ScrollBar);
        let glyph = self.metrics.measure("<", style.buttons.text.scale);
        let inset = style.buttons.padding + style.buttons.normal.border_size;
        let button_len = glyph.width + inset.horizontal();

        let container = self.ui.begin_container(id, rect, ContainerOptions::default());
        let mut changed = false;
        if self.button("prev", "<", Point::ZERO) {
            *value = (*value - 1).max(min);
            changed = true;
        }
        if self.button("next", ">", Point::new(rect.width() - button_len, 0.0)) {
            *value = (*value + 1).min(max);
            changed = true;
        }
        changed |= self.slider(
            "bar",
            value,
            min,
            max,
            Rect::new(button_len, 0.0, rect.width() - button_len, rect.height()),
        );
        self.ui.end_container(container);
        changed
    }
}

/// Whole value steps covered by a pixel delta along the knob travel,
/// rounded half away from zero.
#[expect(
    clippy::cast_possible_truncation,
    reason = "the rounded step count is bounded by the slider range"
)]
fn drag_steps(delta_px: f64, distance: f64, knob_max: f64) -> i64 {
    if knob_max <= 0.0 {
        return 0;
    }
    let steps = delta_px * distance / knob_max;
    if steps >= 0.0 {
        (steps + 0.5) as i64
    } else {
        (steps - 0.5) as i64
    }
}
