// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The per-frame widget context and the basic widgets.

use core::fmt;

use kurbo::{Point, Rect, Size, Vec2};

use bracken_events::{Event, Request, Status};
use bracken_layout::{ContainerOptions, ElementState, Layout, Ui};
use bracken_theme::{ElementStyle, TextStyle, Theme, WidgetKind};

use crate::metrics::TextMetrics;
use crate::sink::{DrawSink, inset_rect, present_box};
use crate::state::WidgetStates;

/// Everything a widget call needs for one frame.
///
/// A `Target` borrows the frame driver, the draw sink, the metrics, the
/// theme, and the widget-private state store; construct one per frame (or
/// per subtree) and call widgets as methods.
pub struct Target<'a, S, M> {
    /// The frame driver.
    pub ui: &'a mut Ui,
    /// The opaque draw-command consumer.
    pub sink: &'a mut S,
    /// Glyph measurement.
    pub metrics: &'a M,
    /// Widget styles.
    pub theme: &'a Theme,
    /// Cross-frame widget-private state.
    pub states: &'a mut WidgetStates,
    /// Host frame time in milliseconds; drives the edit-cursor blink.
    pub ticks: u64,
}

impl<S, M> fmt::Debug for Target<'_, S, M> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Target")
            .field("ticks", &self.ticks)
            .finish_non_exhaustive()
    }
}

impl<'a, S: DrawSink, M: TextMetrics> Target<'a, S, M> {
    /// Bundle a widget context for one frame.
    pub fn new(
        ui: &'a mut Ui,
        sink: &'a mut S,
        metrics: &'a M,
        theme: &'a Theme,
        states: &'a mut WidgetStates,
    ) -> Self {
        Self {
            ui,
            sink,
            metrics,
            theme,
            states,
            ticks: 0,
        }
    }

    /// This context with the host's frame time, for blink animation.
    pub fn with_ticks(mut self, ticks: u64) -> Self {
        self.ticks = ticks;
        self
    }

    /// A stylizable box with the theme's element style.
    pub fn element(&mut self, id: &str, rect: Rect, request: Request) -> ElementState {
        let style = self.theme.element(WidgetKind::Element);
        self.element_styled(id, rect, request, &style)
    }

    /// A stylizable box with an explicit style.
    pub fn element_styled(
        &mut self,
        id: &str,
        rect: Rect,
        request: Request,
        style: &ElementStyle,
    ) -> ElementState {
        let state = self.ui.element(id, rect, request);
        present_box(self.sink, state.rect, style);
        state
    }

    /// A text run at the given position, placed but not interactive.
    pub fn text(&mut self, text: &str, origin: Point, style: &TextStyle) {
        let size = self.metrics.measure(text, style.scale);
        let state = self
            .ui
            .element("", Rect::from_origin_size(origin, size), Request::None);
        self.sink
            .text(state.rect.origin(), text, style.scale, style.color);
    }

    /// A single character, placed but not interactive.
    pub fn character(&mut self, ch: char, origin: Point, style: &TextStyle) {
        let mut buffer = [0_u8; 4];
        let text = ch.encode_utf8(&mut buffer);
        self.text(text, origin, style);
    }

    /// A text label in the theme's label style.
    pub fn label(&mut self, text: &str, origin: Point) {
        let style = self.theme.text(WidgetKind::Label);
        self.text(text, origin, &style);
    }

    /// A push button with a text label, auto-sized around it.
    ///
    /// Returns `true` on activation: the pointer grab released over the
    /// button.
    pub fn button(&mut self, id: &str, label: &str, origin: Point) -> bool {
        let style = self.theme.button(WidgetKind::Button);
        let text_size = self.metrics.measure(label, style.text.scale);
        let inset = style.padding + style.normal.border_size;
        let size = Size::new(
            text_size.width + inset.horizontal(),
            text_size.height + inset.vertical(),
        );
        let state = self
            .ui
            .element(id, Rect::from_origin_size(origin, size), Request::Grab);
        let decoration = if state.status.contains(Status::GRABBED) {
            style.pressed
        } else if state.status.contains(Status::HOVERED) {
            style.hovered
        } else {
            style.normal
        };
        present_box(self.sink, state.rect, &decoration);
        let content = inset_rect(state.rect, inset);
        self.sink
            .text(content.origin(), label, style.text.scale, style.text.color);
        state.event == Event::Action
    }

    /// An undecorated container; children are declared inside the closure.
    ///
    /// The closure form is the release point: the container closes on every
    /// exit path of `f`.
    pub fn group<R>(
        &mut self,
        id: &str,
        rect: Rect,
        options: ContainerOptions,
        f: impl FnOnce(&mut Self) -> R,
    ) -> (ElementState, R) {
        let container = self.ui.begin_container(id, rect, options);
        let result = f(self);
        (self.ui.end_container(container), result)
    }

    /// A decorated container in the theme's panel style.
    ///
    /// The decoration is emitted against the rectangle known at open time;
    /// give panels explicit extents when the decoration matters.
    pub fn panel<R>(
        &mut self,
        id: &str,
        rect: Rect,
        layout: Layout,
        f: impl FnOnce(&mut Self) -> R,
    ) -> (ElementState, R) {
        let style = self.theme.panel(WidgetKind::Panel);
        let inset = style.client_inset();
        let options = ContainerOptions {
            layout,
            element_spacing: style.element_spacing,
            offset: Vec2::new(inset.left, inset.top),
            end_padding: Size::new(inset.right, inset.bottom),
            request: Request::Hover,
        };
        let container = self.ui.begin_container(id, rect, options);
        present_box(
            self.sink,
            self.ui.container_rect(&container),
            &style.decoration,
        );
        let result = f(self);
        (self.ui.end_container(container), result)
    }

}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Harness;
    use bracken_theme::Rgba;

    #[test]
    fn button_activates_on_release() {
        let mut h = Harness::new();
        h.ui.move_pointer(Point::new(5.0, 5.0));

        // Press: grabbed, not yet activated.
        h.ui.press_pointer(0);
        let clicked = h.target().button("ok", "OK", Point::ZERO);
        assert!(!clicked);
        h.ui.end_frame();

        // Release over the button: activated.
        h.ui.release_pointer(0);
        let clicked = h.target().button("ok", "OK", Point::ZERO);
        assert!(clicked);
        h.ui.end_frame();

        // Idle frame: nothing.
        let clicked = h.target().button("ok", "OK", Point::ZERO);
        assert!(!clicked);
        h.ui.end_frame();
    }

    #[test]
    fn button_draws_state_dependent_decoration() {
        let mut h = Harness::new();
        let style = h.theme.button(bracken_theme::WidgetKind::Button);
        h.ui.move_pointer(Point::new(-5.0, -5.0));

        // Idle: normal background.
        let _ = h.target().button("ok", "OK", Point::ZERO);
        h.ui.end_frame();
        assert_eq!(h.sink.fills[0].1, style.normal.background);
        h.sink.clear();

        // Hovered.
        h.ui.move_pointer(Point::new(5.0, 5.0));
        let _ = h.target().button("ok", "OK", Point::ZERO);
        h.ui.end_frame();
        assert_eq!(h.sink.fills[0].1, style.hovered.background);
        h.sink.clear();

        // Grabbed.
        h.ui.press_pointer(0);
        let _ = h.target().button("ok", "OK", Point::ZERO);
        h.ui.end_frame();
        assert_eq!(h.sink.fills[0].1, style.pressed.background);
    }

    #[test]
    fn button_release_elsewhere_cancels() {
        let mut h = Harness::new();
        h.ui.move_pointer(Point::new(5.0, 5.0));
        h.ui.press_pointer(0);
        let clicked = h.target().button("ok", "OK", Point::ZERO);
        assert!(!clicked);
        h.ui.end_frame();

        // Drag off the button before releasing: no activation.
        h.ui.move_pointer(Point::new(200.0, 200.0));
        h.ui.release_pointer(0);
        let clicked = h.target().button("ok", "OK", Point::ZERO);
        assert!(!clicked);
        h.ui.end_frame();
    }

    #[test]
    fn labels_stack_in_a_vertical_group() {
        let mut h = Harness::new();
        let mut target = h.target();
        target.group(
            "col",
            Rect::new(0.0, 0.0, 100.0, 100.0),
            ContainerOptions::vertical(2.0),
            |t| {
                t.label("one", Point::ZERO);
                t.label("two", Point::ZERO);
            },
        );
        drop(target);
        h.ui.end_frame();

        assert_eq!(h.sink.texts[0].0, Point::new(0.0, 0.0));
        // Line height 8 plus spacing 2.
        assert_eq!(h.sink.texts[1].0, Point::new(0.0, 10.0));
    }

    #[test]
    fn panel_insets_children_by_border_and_padding() {
        let mut h = Harness::new();
        let mut target = h.target();
        let (_, child) = target.panel(
            "p",
            Rect::new(0.0, 0.0, 50.0, 50.0),
            Layout::None,
            |t| t.element("child", Rect::new(0.0, 0.0, 10.0, 10.0), Request::Hover),
        );
        drop(target);
        h.ui.end_frame();

        // Stock panel: 1px border plus 2px padding.
        assert_eq!(child.rect.origin(), Point::new(3.0, 3.0));
        assert_eq!(child.id, "p/child");
    }

    #[test]
    fn element_styled_fills_inside_its_border() {
        let mut h = Harness::new();
        let style = ElementStyle {
            background: Rgba::opaque(9, 9, 9),
            border: Rgba::opaque(1, 1, 1),
            border_size: bracken_theme::EdgeSize::all(2.0),
        };
        let mut target = h.target();
        target.element_styled(
            "box",
            Rect::new(0.0, 0.0, 10.0, 10.0),
            Request::Hover,
            &style,
        );
        drop(target);
        h.ui.end_frame();

        assert_eq!(h.sink.strokes.len(), 1);
        assert_eq!(h.sink.fills[0].0, Rect::new(2.0, 2.0, 8.0, 8.0));
        assert_eq!(h.sink.fills[0].1, Rgba::opaque(9, 9, 9));
    }
}
