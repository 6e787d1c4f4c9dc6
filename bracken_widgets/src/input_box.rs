// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Text and numeric input boxes.

use alloc::string::{String, ToString};
use core::fmt::Write as _;

use kurbo::{Point, Rect};

use bracken_events::{Event, Request, Status};
use bracken_layout::ElementState;
use bracken_theme::{ControlStyle, InputBoxStyle, WidgetKind};

use crate::metrics::TextMetrics;
use crate::sink::{DrawSink, inset_rect, present_box};
use crate::target::Target;

/// An edit to apply to a text box's backing value.
///
/// `erase` bytes are removed at `index`, then `insert` goes in at the same
/// position. Indices are byte offsets and always fall on character
/// boundaries.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TextChange {
    /// Text to insert.
    pub insert: String,
    /// Byte position of the edit.
    pub index: usize,
    /// Number of bytes to remove before inserting.
    pub erase: usize,
}

impl TextChange {
    /// Whether this change leaves the value untouched.
    pub fn is_empty(&self) -> bool {
        self.insert.is_empty() && self.erase == 0
    }

    /// Apply this change to a backing value.
    pub fn apply(&self, value: &mut String) {
        let end = (self.index + self.erase).min(value.len());
        value.replace_range(self.index..end, &self.insert);
    }
}

/// A value editable through a [`number_box`](Target::number_box).
pub trait NumberValue: Copy + PartialEq {
    /// Format the value into an edit buffer.
    fn format_into(self, buffer: &mut String);

    /// Parse an edited buffer back, if it is a valid value.
    fn parse_from(text: &str) -> Option<Self>;
}

macro_rules! impl_number_value {
    ($($ty:ty),*) => {
        $(impl NumberValue for $ty {
            fn format_into(self, buffer: &mut String) {
                let _ = write!(buffer, "{self}");
            }

            fn parse_from(text: &str) -> Option<Self> {
                text.trim().parse().ok()
            }
        })*
    };
}

impl_number_value!(i32, i64, u32, u64, f32, f64);

impl<'a, S: DrawSink, M: TextMetrics> Target<'a, S, M> {
    /// A text box editing a caller-owned string.
    ///
    /// Returns `true` when the value changed this frame. The edit cursor is
    /// kept per qualified id in [`WidgetStates`](crate::WidgetStates).
    pub fn text_box(&mut self, id: &str, value: &mut String, rect: Rect) -> bool {
        let style = self.theme.input_box(WidgetKind::TextBox);
        let rect = self.input_rect(rect, &style.normal);
        let state = self.ui.element(id, rect, Request::Input);
        match self.edit_text(&state, value.as_str(), &style) {
            Some(change) if !change.is_empty() => {
                change.apply(value);
                true
            }
            _ => false,
        }
    }

    /// A numeric box editing a caller-owned value through a buffered string.
    ///
    /// The buffer refills from the value whenever the box is inactive or
    /// freshly grabbed, and parses back after every accepted edit.
    pub fn number_box<T: NumberValue>(&mut self, id: &str, value: &mut T, rect: Rect) -> bool {
        let style = self.theme.input_box(WidgetKind::NumberBox);
        let rect = self.input_rect(rect, &style.normal);
        let state = self.ui.element(id, rect, Request::Input);

        let mut buffer = self
            .states
            .number_buffers
            .remove(&state.id)
            .unwrap_or_default();
        let active = state.status.contains(Status::FOCUSED);
        if !active || state.event == Event::Grab {
            buffer.clear();
            value.format_into(&mut buffer);
        }

        let mut changed = false;
        if let Some(change) = self.edit_text(&state, buffer.as_str(), &style) {
            if !change.is_empty() {
                change.apply(&mut buffer);
                if let Some(parsed) = T::parse_from(&buffer) {
                    if parsed != *value {
                        *value = parsed;
                        changed = true;
                    }
                }
            }
        }
        self.states.number_buffers.insert(state.id, buffer);
        changed
    }

    /// Substitute the default input extents for zero dimensions: sixteen
    /// representative glyphs wide, one line high, plus the control inset.
    fn input_rect(&self, rect: Rect, style: &ControlStyle) -> Rect {
        if rect.width() != 0.0 && rect.height() != 0.0 {
            return rect;
        }
        let glyph = self.metrics.measure("m", style.text.scale);
        let inset = style.content_inset();
        let mut rect = rect;
        if rect.width() == 0.0 {
            rect.x1 = rect.x0 + glyph.width * 16.0 + inset.horizontal();
        }
        if rect.height() == 0.0 {
            rect.y1 = rect.y0 + glyph.height + inset.vertical();
        }
        rect
    }

    /// Present an input box and resolve this frame's edit, if any.
    ///
    /// Shared by [`text_box`](Self::text_box) and
    /// [`number_box`](Self::number_box); `value` is the text as it stood
    /// before the edit.
    fn edit_text(
        &mut self,
        state: &ElementState,
        value: &str,
        style: &InputBoxStyle,
    ) -> Option<TextChange> {
        let active = state.status.contains(Status::FOCUSED);
        let mut cursor = self
            .states
            .text_cursors
            .get(&state.id)
            .copied()
            .unwrap_or(0);
        if state.event == Event::Grab {
            cursor = value.len();
        }
        if cursor > value.len() {
            cursor = value.len();
        }

        let control = if active { style.active } else { style.normal };
        present_box(self.sink, state.rect, &control.decoration);
        let client = inset_rect(state.rect, control.content_inset());

        // Scroll the text left so the cursor stays visible in a full box.
        let advance = self.metrics.measure("m", control.text.scale).width;
        let content = self.metrics.measure(value, control.text.scale).width;
        let mut delta = content - client.width();
        if delta < 0.0 {
            delta = 0.0;
        } else if active {
            let cursor_x = prefix_width(value, cursor, advance);
            if delta + advance > cursor_x {
                delta = (cursor_x - advance).max(0.0);
            }
        }
        self.sink.text(
            Point::new(client.x0 - delta, client.y0),
            value,
            control.text.scale,
            control.text.color,
        );
        if !active {
            self.states.text_cursors.insert(state.id.clone(), cursor);
            return None;
        }

        if (self.ticks / 512).is_multiple_of(2) {
            let x = client.x0 + prefix_width(value, cursor, advance) - delta;
            self.sink.fill_rect(
                Rect::new(x, client.y0, x + 1.0, client.y1),
                control.text.color,
            );
        }

        let change = match state.event {
            Event::Input => {
                let insert = self.ui.input().to_string();
                let index = cursor;
                cursor += insert.len();
                Some(TextChange {
                    insert,
                    index,
                    erase: 0,
                })
            }
            Event::Backspace if cursor > 0 => {
                let erased = value[..cursor]
                    .chars()
                    .next_back()
                    .map_or(0, char::len_utf8);
                cursor -= erased;
                Some(TextChange {
                    insert: String::new(),
                    index: cursor,
                    erase: erased,
                })
            }
            _ => None,
        };
        self.states.text_cursors.insert(state.id.clone(), cursor);
        change
    }
}

/// Width of the first `bytes` bytes of `value` under fixed-advance metrics.
fn prefix_width(value: &str, bytes: usize, advance: f64) -> f64 {
    value[..bytes].chars().count() as f64 * advance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::Harness;
    use bracken_events::Command;

    const BOX_RECT: Rect = Rect::new(0.0, 0.0, 100.0, 14.0);

    #[test]
    fn click_focuses_and_places_cursor_at_end() {
        let mut h = Harness::new();
        let mut value = String::from("ab");
        h.ui.move_pointer(Point::new(5.0, 5.0));

        // Press: the box grabs, the cursor jumps to the end.
        h.ui.press_pointer(0);
        let changed = h.target().text_box("t", &mut value, BOX_RECT);
        assert!(!changed);
        h.ui.end_frame();
        assert_eq!(h.states.text_cursor("t"), Some(2));

        // Release: the box is focused now.
        h.ui.release_pointer(0);
        let changed = h.target().text_box("t", &mut value, BOX_RECT);
        assert!(!changed);
        h.ui.end_frame();
        assert!(h.ui.is_active("t"));
    }

    #[test]
    fn typed_text_inserts_at_the_cursor() {
        let mut h = Harness::new();
        let mut value = String::from("ab");
        h.ui.move_pointer(Point::new(5.0, 5.0));

        h.ui.press_pointer(0);
        h.target().text_box("t", &mut value, BOX_RECT);
        h.ui.end_frame();
        h.ui.release_pointer(0);
        h.target().text_box("t", &mut value, BOX_RECT);
        h.ui.end_frame();

        h.ui.insert_text("c");
        let changed = h.target().text_box("t", &mut value, BOX_RECT);
        assert!(changed);
        h.ui.end_frame();
        assert_eq!(value, "abc");
        assert_eq!(h.states.text_cursor("t"), Some(3));
    }

    #[test]
    fn backspace_on_empty_input_buffer_erases_one_character() {
        let mut h = Harness::new();
        let mut value = String::from("abc");
        h.ui.move_pointer(Point::new(5.0, 5.0));

        h.ui.press_pointer(0);
        h.target().text_box("t", &mut value, BOX_RECT);
        h.ui.end_frame();
        h.ui.release_pointer(0);
        h.target().text_box("t", &mut value, BOX_RECT);
        h.ui.end_frame();

        h.ui.set_command(Command::Backspace);
        let changed = h.target().text_box("t", &mut value, BOX_RECT);
        assert!(changed);
        h.ui.end_frame();
        assert_eq!(value, "ab");
        assert_eq!(h.states.text_cursor("t"), Some(2));
    }

    #[test]
    fn two_boxes_keep_separate_cursors() {
        let mut h = Harness::new();
        let mut first = String::from("one");
        let mut second = String::from("fourteen");

        // Click the first box; the second stays untouched.
        h.ui.move_pointer(Point::new(5.0, 5.0));
        h.ui.press_pointer(0);
        let mut target = h.target();
        target.text_box("a", &mut first, BOX_RECT);
        target.text_box("b", &mut second, Rect::new(0.0, 20.0, 100.0, 34.0));
        drop(target);
        h.ui.end_frame();

        assert_eq!(h.states.text_cursor("a"), Some(3));
        assert_eq!(h.states.text_cursor("b"), Some(0));
    }

    #[test]
    fn number_box_parses_edited_buffer() {
        let mut h = Harness::new();
        let mut value: i64 = 5;
        h.ui.move_pointer(Point::new(5.0, 5.0));

        // Click to focus; the buffer refills from the value.
        h.ui.press_pointer(0);
        h.target().number_box("n", &mut value, BOX_RECT);
        h.ui.end_frame();
        h.ui.release_pointer(0);
        h.target().number_box("n", &mut value, BOX_RECT);
        h.ui.end_frame();

        // Type a digit after the "5".
        h.ui.insert_text("0");
        let changed = h.target().number_box("n", &mut value, BOX_RECT);
        assert!(changed);
        h.ui.end_frame();
        assert_eq!(value, 50);
    }

    #[test]
    fn number_box_ignores_unparseable_edits() {
        let mut h = Harness::new();
        let mut value: i64 = 5;
        h.ui.move_pointer(Point::new(5.0, 5.0));

        h.ui.press_pointer(0);
        h.target().number_box("n", &mut value, BOX_RECT);
        h.ui.end_frame();
        h.ui.release_pointer(0);
        h.target().number_box("n", &mut value, BOX_RECT);
        h.ui.end_frame();

        h.ui.insert_text("x");
        let changed = h.target().number_box("n", &mut value, BOX_RECT);
        assert!(!changed);
        h.ui.end_frame();
        assert_eq!(value, 5);

        // The malformed buffer survives for further editing.
        h.ui.set_command(Command::Backspace);
        let changed = h.target().number_box("n", &mut value, BOX_RECT);
        assert!(!changed, "back to \"5\", which equals the current value");
        h.ui.end_frame();
    }

    #[test]
    fn inactive_box_draws_but_never_edits() {
        let mut h = Harness::new();
        let mut value = String::from("ab");
        // Pointer far away: the box never focuses.
        h.ui.move_pointer(Point::new(500.0, 500.0));
        h.ui.insert_text("zzz");
        let changed = h.target().text_box("t", &mut value, BOX_RECT);
        assert!(!changed);
        h.ui.end_frame();
        assert_eq!(value, "ab");
        // The box and its text were still presented.
        assert!(!h.sink.fills.is_empty());
        assert_eq!(h.sink.texts[0].1, "ab");
    }

    #[test]
    fn default_input_rect_from_metrics() {
        let mut h = Harness::new();
        let mut value = String::new();
        h.ui.move_pointer(Point::new(500.0, 500.0));
        h.target().text_box("t", &mut value, Rect::ZERO);
        h.ui.end_frame();

        // 16 glyphs at 8px plus 3px inset each side; one line plus inset.
        assert_eq!(h.sink.strokes[0].0, Rect::new(0.0, 0.0, 134.0, 14.0));
    }
}
