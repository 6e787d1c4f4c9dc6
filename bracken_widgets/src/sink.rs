// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The opaque draw-command boundary.

use kurbo::{Point, Rect};

use bracken_theme::{EdgeSize, ElementStyle, Rgba};

/// Consumer of widget draw commands.
///
/// Widgets emit commands in declaration order and never read them back; the
/// host decides how to batch, reorder, or rasterize them. Rectangles are in
/// absolute coordinates.
pub trait DrawSink {
    /// Fill a rectangle with a solid color.
    fn fill_rect(&mut self, rect: Rect, color: Rgba);

    /// Stroke a rectangle's border with the given per-edge thickness,
    /// inside the rectangle.
    fn stroke_rect(&mut self, rect: Rect, edges: EdgeSize, color: Rgba);

    /// Draw a text run with its top-left corner at `origin`.
    fn text(&mut self, origin: Point, text: &str, scale: f64, color: Rgba);
}

/// Present a box: border stroke, then the fill inset by the border.
pub(crate) fn present_box<S: DrawSink>(sink: &mut S, rect: Rect, style: &ElementStyle) {
    if style.border_size != EdgeSize::ZERO {
        sink.stroke_rect(rect, style.border_size, style.border);
    }
    sink.fill_rect(inset_rect(rect, style.border_size), style.background);
}

/// Shrink a rectangle by per-edge insets, clamping to emptiness.
pub(crate) fn inset_rect(rect: Rect, edges: EdgeSize) -> Rect {
    let x0 = rect.x0 + edges.left;
    let y0 = rect.y0 + edges.top;
    Rect::new(x0, y0, (rect.x1 - edges.right).max(x0), (rect.y1 - edges.bottom).max(y0))
}
