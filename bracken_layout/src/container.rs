// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-level container state: layout policy, caret, and content extent.

use kurbo::{Point, Rect, Size, Vec2};

use bracken_dispatch::EventTarget;
use bracken_events::Request;

/// Layout policy of one container level.
///
/// The policy decides which caret axis advances when a child is placed.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Layout {
    /// No caret advancement: children overlap freely and the extent is the
    /// union of their sizes.
    #[default]
    None,
    /// Children stack downwards; the extent widens to the widest child.
    Vertical,
    /// Children stack rightwards; the extent grows to the tallest child.
    Horizontal,
}

/// Options for opening a container.
#[derive(Clone, Copy, Debug)]
pub struct ContainerOptions {
    /// Layout policy for the container's children.
    pub layout: Layout,
    /// Gap inserted between consecutive stacked children.
    pub element_spacing: f64,
    /// Content inset from the container's top-left corner.
    pub offset: Vec2,
    /// Trailing inset added to auto-resolved extents.
    pub end_padding: Size,
    /// Event tier the container itself requests from the dispatcher.
    ///
    /// Defaults to [`Request::Hover`]: children can only be hovered while
    /// their parent is, so even decoration-free containers normally take
    /// part in hover resolution.
    pub request: Request,
}

impl Default for ContainerOptions {
    fn default() -> Self {
        Self {
            layout: Layout::None,
            element_spacing: 0.0,
            offset: Vec2::ZERO,
            end_padding: Size::ZERO,
            request: Request::Hover,
        }
    }
}

impl ContainerOptions {
    /// A vertically stacking container with the given element spacing.
    pub fn vertical(element_spacing: f64) -> Self {
        Self {
            layout: Layout::Vertical,
            element_spacing,
            ..Self::default()
        }
    }

    /// A horizontally stacking container with the given element spacing.
    pub fn horizontal(element_spacing: f64) -> Self {
        Self {
            layout: Layout::Horizontal,
            element_spacing,
            ..Self::default()
        }
    }
}

/// One open container level.
///
/// The caret and extent may only be touched while this level is the top of
/// the container stack; the `locked` flag guards that discipline.
#[derive(Debug)]
pub(crate) struct Level {
    /// Dispatcher stack witness for this level.
    pub(crate) target: EventTarget,
    /// Absolute rectangle as requested, auto dimensions still zero.
    pub(crate) rect: Rect,
    /// Top-left corner of the content area (rect origin plus offset).
    pub(crate) top_left: Point,
    /// Running bottom-right content extent, in absolute coordinates.
    pub(crate) bottom_right: Point,
    pub(crate) undefined_width: bool,
    pub(crate) undefined_height: bool,
    pub(crate) end_padding: Size,
    pub(crate) layout: Layout,
    pub(crate) element_spacing: f64,
    /// Set while a descendant level is open.
    pub(crate) locked: bool,
}

impl Level {
    /// The next-child placement cursor.
    pub(crate) fn caret(&self) -> Point {
        match self.layout {
            Layout::Vertical => Point::new(self.top_left.x, self.bottom_right.y),
            Layout::Horizontal => Point::new(self.bottom_right.x, self.top_left.y),
            Layout::None => self.top_left,
        }
    }

    /// Grow the extent for one placed child of the given size.
    pub(crate) fn advance(&mut self, size: Size) {
        debug_assert!(!self.locked, "level is locked while a descendant is open");
        match self.layout {
            Layout::Vertical => {
                self.bottom_right.x = self.bottom_right.x.max(self.top_left.x + size.width);
                self.bottom_right.y += size.height + self.element_spacing;
            }
            Layout::Horizontal => {
                self.bottom_right.x += size.width + self.element_spacing;
                self.bottom_right.y = self.bottom_right.y.max(self.top_left.y + size.height);
            }
            Layout::None => {
                self.bottom_right.x = self.bottom_right.x.max(self.top_left.x + size.width);
                self.bottom_right.y = self.bottom_right.y.max(self.top_left.y + size.height);
            }
        }
    }

    /// Effective width: fixed if requested non-zero, else resolved from the
    /// accumulated content extent.
    pub(crate) fn width(&self) -> f64 {
        if !self.undefined_width {
            return self.rect.width();
        }
        let content = make_len(
            self.bottom_right.x - self.top_left.x,
            self.layout == Layout::Horizontal,
            self.element_spacing,
        );
        (self.top_left.x - self.rect.x0) + content + self.end_padding.width
    }

    /// Effective height: fixed if requested non-zero, else resolved from the
    /// accumulated content extent.
    pub(crate) fn height(&self) -> f64 {
        if !self.undefined_height {
            return self.rect.height();
        }
        let content = make_len(
            self.bottom_right.y - self.top_left.y,
            self.layout == Layout::Vertical,
            self.element_spacing,
        );
        (self.top_left.y - self.rect.y0) + content + self.end_padding.height
    }

    pub(crate) fn size(&self) -> Size {
        Size::new(self.width(), self.height())
    }
}

/// Resolve an auto extent: the last stacked child carries no trailing gap.
fn make_len(delta: f64, stacked: bool, element_spacing: f64) -> f64 {
    if stacked && delta >= element_spacing {
        delta - element_spacing
    } else {
        delta
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(layout: Layout, spacing: f64) -> Level {
        Level {
            target: dummy_target(),
            rect: Rect::ZERO,
            top_left: Point::ZERO,
            bottom_right: Point::ZERO,
            undefined_width: true,
            undefined_height: true,
            end_padding: Size::ZERO,
            layout,
            element_spacing: spacing,
            locked: false,
        }
    }

    // Levels under test never touch the dispatcher.
    fn dummy_target() -> EventTarget {
        use bracken_dispatch::EventDispatcher;
        let mut d = EventDispatcher::default();
        d.check(Request::None, Rect::ZERO, "")
    }

    #[test]
    fn vertical_stacking_extent() {
        let mut l = level(Layout::Vertical, 4.0);
        l.advance(Size::new(20.0, 10.0));
        l.advance(Size::new(15.0, 10.0));
        // Widest child wins; no trailing gap is counted.
        assert_eq!(l.width(), 20.0);
        assert_eq!(l.height(), 24.0);
    }

    #[test]
    fn horizontal_stacking_extent() {
        let mut l = level(Layout::Horizontal, 4.0);
        l.advance(Size::new(10.0, 20.0));
        l.advance(Size::new(10.0, 15.0));
        assert_eq!(l.width(), 24.0);
        assert_eq!(l.height(), 20.0);
    }

    #[test]
    fn free_layout_unions_children() {
        let mut l = level(Layout::None, 4.0);
        l.advance(Size::new(20.0, 10.0));
        l.advance(Size::new(15.0, 30.0));
        // No spacing, no stacking: the union of the child sizes.
        assert_eq!(l.width(), 20.0);
        assert_eq!(l.height(), 30.0);
        assert_eq!(l.caret(), Point::ZERO);
    }

    #[test]
    fn caret_advances_along_the_stacking_axis_only() {
        let mut l = level(Layout::Vertical, 2.0);
        l.advance(Size::new(20.0, 10.0));
        assert_eq!(l.caret(), Point::new(0.0, 12.0));

        let mut l = level(Layout::Horizontal, 2.0);
        l.advance(Size::new(20.0, 10.0));
        assert_eq!(l.caret(), Point::new(22.0, 0.0));
    }

    #[test]
    fn fixed_dimensions_ignore_content() {
        let mut l = level(Layout::Vertical, 4.0);
        l.rect = Rect::new(0.0, 0.0, 50.0, 60.0);
        l.undefined_width = false;
        l.undefined_height = false;
        l.advance(Size::new(200.0, 200.0));
        assert_eq!(l.size(), Size::new(50.0, 60.0));
    }

    #[test]
    fn offset_and_end_padding_grow_auto_extents() {
        let mut l = level(Layout::None, 0.0);
        l.top_left = Point::new(2.0, 3.0);
        l.bottom_right = l.top_left;
        l.end_padding = Size::new(4.0, 5.0);
        l.advance(Size::new(10.0, 10.0));
        assert_eq!(l.width(), 16.0);
        assert_eq!(l.height(), 18.0);
    }
}
