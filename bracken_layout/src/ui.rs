// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The frame driver: mirrored dispatcher and container stacks.

use alloc::string::{String, ToString};

use kurbo::{Point, Rect, Size};
use smallvec::SmallVec;

use bracken_dispatch::EventDispatcher;
use bracken_events::{Command, Event, Request, Status};

use crate::container::{ContainerOptions, Level};

/// Resolved interaction state of one placed element, returned by
/// [`Ui::element`] and [`Ui::end_container`].
#[derive(Clone, Debug)]
pub struct ElementState {
    /// The element's qualified id.
    pub id: String,
    /// Absolute rectangle, clipped against the parent and, for auto-sized
    /// containers, shrunk to the resolved extent.
    pub rect: Rect,
    /// Resolved status flags for this frame.
    pub status: Status,
    /// Resolved event for this frame.
    pub event: Event,
}

/// Witness for one open container level.
///
/// Returned by [`Ui::begin_container`] and consumed by
/// [`Ui::end_container`]; neither `Copy` nor `Clone`, so each open has
/// exactly one close.
#[derive(Debug)]
pub struct Container {
    index: usize,
}

/// Owner of the dispatcher and the container stack, driven once per frame.
///
/// The container stack and the dispatcher's target stack mirror each other
/// at every instant: [`begin_container`](Ui::begin_container) pushes one
/// level on both, [`element`](Ui::element) pushes and immediately pops a
/// dispatcher level, and [`end_container`](Ui::end_container) pops both.
///
/// Prefer [`container`](Ui::container) where control flow allows: the
/// closure form cannot leave a level open on an early return.
#[derive(Debug, Default)]
pub struct Ui {
    dispatcher: EventDispatcher,
    levels: SmallVec<[Level; 8]>,
}

impl Ui {
    /// Create an empty frame driver.
    pub fn new() -> Self {
        Self::default()
    }

    /// The underlying event dispatcher.
    pub fn dispatcher(&self) -> &EventDispatcher {
        &self.dispatcher
    }

    /// Mutable access to the underlying event dispatcher.
    pub fn dispatcher_mut(&mut self) -> &mut EventDispatcher {
        &mut self.dispatcher
    }

    /// Number of currently open container levels.
    pub fn depth(&self) -> usize {
        self.levels.len()
    }

    /// Change the pointer position.
    pub fn move_pointer(&mut self, pos: Point) {
        self.dispatcher.move_pointer(pos);
    }

    /// Mark a pointer button as pressed on this frame.
    pub fn press_pointer(&mut self, button: u32) {
        self.dispatcher.press_pointer(button);
    }

    /// Mark a pointer button as released on this frame.
    pub fn release_pointer(&mut self, button: u32) {
        self.dispatcher.release_pointer(button);
    }

    /// Set the pending keyboard command, at most one per frame.
    pub fn set_command(&mut self, cmd: Command) {
        self.dispatcher.set_command(cmd);
    }

    /// Append inserted text to the pending input buffer.
    pub fn insert_text(&mut self, text: &str) {
        self.dispatcher.insert_text(text);
    }

    /// Try to transfer focus to the given qualified id; first claim wins.
    pub fn try_focus(&mut self, qualified_id: &str) -> bool {
        self.dispatcher.try_focus(qualified_id)
    }

    /// Whether the given qualified id currently holds keyboard focus.
    pub fn is_active(&self, qualified_id: &str) -> bool {
        self.dispatcher.is_active(qualified_id)
    }

    /// The pending input text.
    pub fn input(&self) -> &str {
        self.dispatcher.input()
    }

    /// Current pointer position.
    pub fn pointer_position(&self) -> Point {
        self.dispatcher.pointer_position()
    }

    /// End the frame: all containers must be closed.
    pub fn end_frame(&mut self) {
        debug_assert!(self.levels.is_empty(), "end_frame with open containers");
        self.dispatcher.reset();
    }

    /// Place one leaf element.
    ///
    /// The rectangle is local to the innermost open container; it is
    /// translated by the container's caret and advances it. The element's
    /// dispatcher level is pushed and popped within this call.
    pub fn element(&mut self, id: &str, rect: Rect, request: Request) -> ElementState {
        let rect = match self.levels.last_mut() {
            Some(top) => {
                let caret = top.caret();
                let rect = rect + caret.to_vec2();
                top.advance(rect.size());
                rect
            }
            None => rect,
        };
        let target = self.dispatcher.check(request, rect, id);
        let state = self.dispatcher.state_of(&target);
        let snapshot = ElementState {
            id: self.dispatcher.current_id().to_string(),
            rect: state.rect,
            status: state.status,
            event: state.event,
        };
        self.dispatcher.pop_target(target);
        snapshot
    }

    /// Open a container level.
    ///
    /// The rectangle is local to the parent's caret. Zero dimensions
    /// request auto-sizing: hit testing runs against a placeholder that
    /// fills the parent's remaining extent and is repaired by the late
    /// shrink in [`end_container`](Self::end_container).
    pub fn begin_container(
        &mut self,
        id: &str,
        rect: Rect,
        options: ContainerOptions,
    ) -> Container {
        let mut check_rect = rect;
        let rect = match self.levels.last_mut() {
            Some(top) => {
                let caret = top.caret();
                let rect = rect + caret.to_vec2();
                check_rect = rect;
                if rect.width() == 0.0 {
                    check_rect.x1 = top.rect.x1.max(check_rect.x0);
                }
                if rect.height() == 0.0 {
                    check_rect.y1 = top.rect.y1.max(check_rect.y0);
                }
                top.locked = true;
                rect
            }
            None => rect,
        };
        let target = self.dispatcher.check(options.request, check_rect, id);
        let top_left = rect.origin() + options.offset;
        self.levels.push(Level {
            target,
            rect,
            top_left,
            bottom_right: top_left,
            undefined_width: rect.width() == 0.0,
            undefined_height: rect.height() == 0.0,
            end_padding: options.end_padding,
            layout: options.layout,
            element_spacing: options.element_spacing,
            locked: false,
        });
        Container {
            index: self.levels.len() - 1,
        }
    }

    /// Close the innermost container level.
    ///
    /// Resolves the final size, late-shrinks the dispatcher rectangle for
    /// auto-sized containers *before* popping it (hover resolution may have
    /// run against the placeholder), then advances the parent's caret by the
    /// final size exactly as a leaf element would.
    pub fn end_container(&mut self, container: Container) -> ElementState {
        debug_assert_eq!(
            container.index + 1,
            self.levels.len(),
            "containers must close in LIFO order"
        );
        let Some(level) = self.levels.pop() else {
            debug_assert!(false, "end_container on empty stack");
            return ElementState {
                id: String::new(),
                rect: Rect::ZERO,
                status: Status::empty(),
                event: Event::None,
            };
        };
        let size = level.size();
        if level.undefined_width || level.undefined_height {
            self.dispatcher.shrink(&level.target, size.width, size.height);
        }
        let state = self.dispatcher.state_of(&level.target);
        let snapshot = ElementState {
            id: self.dispatcher.current_id().to_string(),
            rect: state.rect,
            status: state.status,
            event: state.event,
        };
        self.dispatcher.pop_target(level.target);
        if let Some(parent) = self.levels.last_mut() {
            parent.locked = false;
            parent.advance(size);
        }
        snapshot
    }

    /// Scoped container helper: opens, runs `f`, and closes on every path.
    pub fn container<R>(
        &mut self,
        id: &str,
        rect: Rect,
        options: ContainerOptions,
        f: impl FnOnce(&mut Self) -> R,
    ) -> (ElementState, R) {
        let container = self.begin_container(id, rect, options);
        let result = f(self);
        (self.end_container(container), result)
    }

    /// The caret of an open container.
    ///
    /// May only be queried while no descendant level is open.
    pub fn container_caret(&self, container: &Container) -> Point {
        let level = &self.levels[container.index];
        debug_assert!(!level.locked, "level is locked while a descendant is open");
        level.caret()
    }

    /// The effective size of an open container, auto dimensions resolved
    /// from the extent accumulated so far.
    ///
    /// May only be queried while no descendant level is open.
    pub fn container_size(&self, container: &Container) -> Size {
        let level = &self.levels[container.index];
        debug_assert!(!level.locked, "level is locked while a descendant is open");
        level.size()
    }

    /// The absolute rectangle of an open container as currently known.
    pub fn container_rect(&self, container: &Container) -> Rect {
        self.dispatcher.state_of(&self.levels[container.index].target).rect
    }

    /// The resolved status of an open container as currently known.
    pub fn container_status(&self, container: &Container) -> Status {
        self.dispatcher
            .state_of(&self.levels[container.index].target)
            .status
    }

    /// The resolved event of an open container as currently known.
    pub fn container_event(&self, container: &Container) -> Event {
        self.dispatcher
            .state_of(&self.levels[container.index].target)
            .event
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rect(x: f64, y: f64, w: f64, h: f64) -> Rect {
        Rect::new(x, y, x + w, y + h)
    }

    const ROOT: Rect = Rect::new(0.0, 0.0, 100.0, 100.0);

    #[test]
    fn vertical_auto_size_resolution() {
        let mut ui = Ui::new();
        let root = ui.begin_container("root", ROOT, ContainerOptions::default());
        let col = ui.begin_container("col", Rect::ZERO, ContainerOptions::vertical(4.0));
        ui.element("a", rect(0.0, 0.0, 20.0, 10.0), Request::Hover);
        ui.element("b", rect(0.0, 0.0, 15.0, 10.0), Request::Hover);
        let col = ui.end_container(col);
        ui.end_container(root);
        ui.end_frame();

        assert_eq!(col.rect, rect(0.0, 0.0, 20.0, 24.0));
        assert_eq!(col.id, "root/col");
    }

    #[test]
    fn caret_places_stacked_children() {
        let mut ui = Ui::new();
        let root = ui.begin_container("root", ROOT, ContainerOptions::default());
        let col = ui.begin_container("col", Rect::ZERO, ContainerOptions::vertical(4.0));
        let a = ui.element("a", rect(0.0, 0.0, 20.0, 10.0), Request::Hover);
        let b = ui.element("b", rect(0.0, 0.0, 15.0, 10.0), Request::Hover);
        ui.end_container(col);
        ui.end_container(root);
        ui.end_frame();

        assert_eq!(a.rect.origin(), Point::new(0.0, 0.0));
        assert_eq!(b.rect.origin(), Point::new(0.0, 14.0));
    }

    #[test]
    fn horizontal_caret_and_size() {
        let mut ui = Ui::new();
        let root = ui.begin_container("root", ROOT, ContainerOptions::default());
        let row = ui.begin_container("row", Rect::ZERO, ContainerOptions::horizontal(2.0));
        let a = ui.element("a", rect(0.0, 0.0, 10.0, 30.0), Request::Hover);
        let b = ui.element("b", rect(0.0, 0.0, 10.0, 20.0), Request::Hover);
        let row = ui.end_container(row);
        ui.end_container(root);
        ui.end_frame();

        assert_eq!(a.rect.origin(), Point::new(0.0, 0.0));
        assert_eq!(b.rect.origin(), Point::new(12.0, 0.0));
        assert_eq!(row.rect, rect(0.0, 0.0, 22.0, 30.0));
    }

    #[test]
    fn free_layout_children_overlap() {
        let mut ui = Ui::new();
        let root = ui.begin_container("root", ROOT, ContainerOptions::default());
        let free = ui.begin_container("free", Rect::ZERO, ContainerOptions::default());
        let a = ui.element("a", rect(0.0, 0.0, 20.0, 10.0), Request::Hover);
        let b = ui.element("b", rect(0.0, 0.0, 15.0, 30.0), Request::Hover);
        let free = ui.end_container(free);
        ui.end_container(root);
        ui.end_frame();

        // Same caret for both children; the extent is their union.
        assert_eq!(a.rect.origin(), b.rect.origin());
        assert_eq!(free.rect, rect(0.0, 0.0, 20.0, 30.0));
    }

    #[test]
    fn offset_and_end_padding_inset_content() {
        let options = ContainerOptions {
            offset: kurbo::Vec2::new(2.0, 3.0),
            end_padding: Size::new(4.0, 5.0),
            ..ContainerOptions::default()
        };
        let mut ui = Ui::new();
        let root = ui.begin_container("root", ROOT, ContainerOptions::default());
        let panel = ui.begin_container("panel", Rect::ZERO, options);
        let child = ui.element("child", rect(0.0, 0.0, 10.0, 10.0), Request::Hover);
        let panel = ui.end_container(panel);
        ui.end_container(root);
        ui.end_frame();

        assert_eq!(child.rect.origin(), Point::new(2.0, 3.0));
        assert_eq!(panel.rect, rect(0.0, 0.0, 16.0, 18.0));
    }

    #[test]
    fn nested_containers_compose_carets() {
        let mut ui = Ui::new();
        let root = ui.begin_container("root", ROOT, ContainerOptions::vertical(0.0));
        ui.element("top", rect(0.0, 0.0, 100.0, 20.0), Request::Hover);
        let row = ui.begin_container("row", Rect::ZERO, ContainerOptions::horizontal(0.0));
        let first = ui.element("first", rect(0.0, 0.0, 10.0, 10.0), Request::Hover);
        ui.end_container(row);
        ui.end_container(root);
        ui.end_frame();

        // The row opened at the root caret (below "top").
        assert_eq!(first.rect.origin(), Point::new(0.0, 20.0));
        assert_eq!(first.id, "root/row/first");
    }

    #[test]
    fn auto_container_hover_runs_against_placeholder_then_shrinks() {
        let mut ui = Ui::new();
        // Pointer inside the placeholder but outside the resolved extent.
        ui.move_pointer(Point::new(50.0, 5.0));
        let root = ui.begin_container("root", ROOT, ContainerOptions::default());
        let col = ui.begin_container("col", Rect::ZERO, ContainerOptions::vertical(0.0));
        assert!(ui.container_status(&col).contains(Status::HOVERED));
        ui.element("a", rect(0.0, 0.0, 20.0, 10.0), Request::Hover);
        let col = ui.end_container(col);

        // The late shrink discarded the placeholder hover...
        assert_eq!(col.rect, rect(0.0, 0.0, 20.0, 10.0));
        assert!(!col.status.contains(Status::HOVERED));

        // ...so a later sibling under the pointer can still take it.
        let side = ui.element("side", rect(40.0, 0.0, 20.0, 10.0), Request::Hover);
        assert!(side.status.contains(Status::HOVERED));
        ui.end_container(root);
        ui.end_frame();
    }

    #[test]
    fn auto_container_keeps_hover_when_pointer_inside_resolved_extent() {
        let mut ui = Ui::new();
        ui.move_pointer(Point::new(5.0, 5.0));
        let root = ui.begin_container("root", ROOT, ContainerOptions::default());
        let col = ui.begin_container("col", Rect::ZERO, ContainerOptions::vertical(0.0));
        ui.element("a", rect(0.0, 0.0, 20.0, 10.0), Request::Hover);
        let col = ui.end_container(col);
        ui.end_container(root);
        ui.end_frame();

        assert!(col.status.contains(Status::HOVERED));
    }

    #[test]
    fn closure_container_closes_on_every_path() {
        let mut ui = Ui::new();
        let (state, result) = ui.container(
            "root",
            ROOT,
            ContainerOptions::vertical(0.0),
            |ui| {
                ui.element("a", rect(0.0, 0.0, 10.0, 10.0), Request::Hover);
                42
            },
        );
        ui.end_frame();
        assert_eq!(result, 42);
        assert_eq!(state.id, "root");
        assert_eq!(ui.depth(), 0);
    }

    #[test]
    fn element_outside_any_container_is_absolute() {
        let mut ui = Ui::new();
        let state = ui.element("solo", rect(5.0, 6.0, 10.0, 10.0), Request::Hover);
        ui.end_frame();
        assert_eq!(state.rect, rect(5.0, 6.0, 10.0, 10.0));
        assert_eq!(state.id, "solo");
    }

    #[cfg(debug_assertions)]
    #[test]
    #[should_panic(expected = "locked")]
    fn querying_a_locked_level_asserts() {
        let mut ui = Ui::new();
        let outer = ui.begin_container("outer", ROOT, ContainerOptions::default());
        let _inner = ui.begin_container("inner", rect(0.0, 0.0, 10.0, 10.0), ContainerOptions::default());
        // The outer level is locked while the inner one is open.
        let _ = ui.container_caret(&outer);
    }
}
