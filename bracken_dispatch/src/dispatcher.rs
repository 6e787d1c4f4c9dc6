// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The event dispatcher: hover, grab, and focus resolution for one frame.

use alloc::string::String;

use kurbo::{Point, Rect};
use smallvec::SmallVec;

use bracken_events::{Command, Event, Request, Status};

/// Separator joining an element's local id to its ancestors' ids.
pub const ID_SEPARATOR: char = '/';

/// Resolved state of one open level on the dispatcher's stack.
///
/// Pushed by [`EventDispatcher::check`], mutated only by shrink/discard
/// calls from widget code or by the pop of a descendant folding a grab or
/// focus loss upward, and removed in strict LIFO order.
#[derive(Clone, Debug, Default)]
pub struct TargetState {
    /// Byte length of this level's local id segment, used to truncate the
    /// qualified-id accumulator on pop.
    id_len: usize,
    /// Absolute rectangle, clipped against the immediate open ancestor.
    pub rect: Rect,
    /// Resolved status flags for this frame.
    pub status: Status,
    /// Resolved event for this frame.
    pub event: Event,
}

/// Witness for one pushed stack level.
///
/// Returned by [`EventDispatcher::check`] and consumed by
/// [`EventDispatcher::pop_target`]. The token is deliberately neither `Copy`
/// nor `Clone`: each push has exactly one matching pop.
#[derive(Debug)]
pub struct EventTarget {
    index: usize,
}

/// Component responsible for resolving and dispatching UI interaction.
///
/// Owns all cross-frame interaction state: pointer position, per-frame
/// press/release masks, the grab holder, and the three-slot focus protocol
/// (current, next, losing). See the [crate docs](crate) for the frame
/// protocol.
#[derive(Debug, Default)]
pub struct EventDispatcher {
    pointer_pos: Point,
    pointer_pressed: u32,
    pointer_released: u32,

    id_current: String,
    had_hover: bool,
    id_grabbed: String,
    id_focus: String,
    id_next_focus: String,
    id_losing_focus: String,

    next_command: Command,
    input_buffer: String,

    stack: SmallVec<[TargetState; 8]>,
}

impl EventDispatcher {
    /// Change the pointer position.
    pub fn move_pointer(&mut self, pos: Point) {
        self.pointer_pos = pos;
    }

    /// Mark the given pointer button as pressed on this frame.
    pub fn press_pointer(&mut self, button: u32) {
        debug_assert!(button < 32, "button index out of range");
        self.pointer_pressed |= 1 << button;
    }

    /// Mark the given pointer button as released on this frame.
    pub fn release_pointer(&mut self, button: u32) {
        debug_assert!(button < 32, "button index out of range");
        self.pointer_released |= 1 << button;
    }

    /// Set the pending keyboard command, at most one per frame.
    pub fn set_command(&mut self, cmd: Command) {
        self.next_command = cmd;
    }

    /// Append inserted text to the pending input buffer.
    ///
    /// A pending [`Command::Space`] or [`Command::Backspace`] is first
    /// resolved against the buffer: a space command appends a literal space
    /// (swallowing the incoming text when it is itself a single space), and
    /// a backspace command pops one character before the new text is
    /// appended. A backspace against an empty buffer stays pending and the
    /// incoming text is dropped.
    pub fn insert_text(&mut self, text: &str) {
        if self.next_command == Command::Space {
            self.next_command = Command::None;
            self.input_buffer.push(' ');
            if text == " " {
                return;
            }
        } else if self.next_command == Command::Backspace {
            if self.input_buffer.is_empty() {
                return;
            }
            self.next_command = Command::None;
            self.input_buffer.pop();
        }
        self.input_buffer.push_str(text);
    }

    /// Reset the dispatcher. Call once per frame, after the final pop.
    ///
    /// Clears the hover latch and press/release masks, consumes a next-focus
    /// claim that matched the current focus, performs the deferred focus
    /// clear when the losing id matched, and clears the pending command and
    /// input buffer. Calling it again with no intervening activity is a
    /// no-op.
    pub fn reset(&mut self) {
        debug_assert!(self.stack.is_empty(), "reset with open targets");
        self.had_hover = false;
        self.pointer_pressed = 0;
        self.pointer_released = 0;
        if self.id_next_focus == self.id_focus {
            self.id_next_focus.clear();
        }
        if self.id_losing_focus == self.id_focus {
            self.id_focus.clear();
        } else {
            self.id_losing_focus.clear();
        }
        self.next_command = Command::None;
        self.input_buffer.clear();
    }

    /// Try to transfer focus to the given element.
    ///
    /// Returns `false` if focus already changed this frame (first claim
    /// wins). On success the claim is promoted on the element's next
    /// `check`, and the previous holder is marked as losing focus.
    pub fn try_focus(&mut self, qualified_id: &str) -> bool {
        if !self.id_next_focus.is_empty() && self.id_next_focus != self.id_focus {
            return false;
        }
        self.id_next_focus.clear();
        self.id_next_focus.push_str(qualified_id);
        if !self.id_focus.is_empty() {
            self.id_losing_focus.clone_from(&self.id_focus);
        }
        true
    }

    /// Current pointer position.
    pub fn pointer_position(&self) -> Point {
        self.pointer_pos
    }

    /// Whether the given button was pressed this frame, with no release
    /// pending. Button 0 is the primary button.
    pub fn is_pointer_pressed(&self, button: u32) -> bool {
        debug_assert!(button < 32, "button index out of range");
        self.pointer_released == 0 && self.pointer_pressed & (1 << button) != 0
    }

    /// Whether the given qualified id currently holds keyboard focus.
    pub fn is_active(&self, qualified_id: &str) -> bool {
        self.id_focus == qualified_id
    }

    /// The pending keyboard command.
    pub fn command(&self) -> Command {
        self.next_command
    }

    /// The pending input text.
    pub fn input(&self) -> &str {
        &self.input_buffer
    }

    /// Whether the UI wants pointer events this frame. Hosts use this to
    /// decide whether to forward native pointer input at all.
    pub fn wants_mouse(&self) -> bool {
        self.had_hover || !self.id_grabbed.is_empty()
    }

    /// Whether the UI wants keyboard events this frame.
    pub fn wants_keyboard(&self) -> bool {
        !self.id_focus.is_empty()
    }

    /// The qualified id of the innermost open target.
    ///
    /// Valid between a `check` and its matching pop. Widget layers use this
    /// to key per-widget private state.
    pub fn current_id(&self) -> &str {
        &self.id_current
    }

    /// Check events for one element, in strict nesting order.
    ///
    /// Builds the element's qualified id, clips `rect` against the
    /// immediate open ancestor, resolves hover/grab/focus for the requested
    /// tier, and pushes the resolved state. The returned token must be
    /// handed back to [`pop_target`](Self::pop_target) after all descendant
    /// checks, mirroring container close.
    ///
    /// `id` may be empty only for [`Request::None`] and [`Request::Hover`].
    pub fn check(&mut self, request: Request, rect: Rect, id: &str) -> EventTarget {
        let rect = match self.stack.last() {
            Some(parent) => rect.intersect(parent.rect),
            None => rect,
        };
        if self.stack.is_empty() {
            self.id_current.clear();
        } else {
            self.id_current.push(ID_SEPARATOR);
        }
        self.id_current.push_str(id);
        if request == Request::None {
            self.stack.push(TargetState {
                id_len: id.len(),
                rect,
                status: Status::empty(),
                event: Event::None,
            });
            return EventTarget {
                index: self.stack.len() - 1,
            };
        }
        debug_assert!(
            !id.is_empty() || request == Request::Hover,
            "non-hover requests need an id"
        );

        let mut event = Event::None;
        let status = self.check_hover(request, rect, &mut event);
        self.stack.push(TargetState {
            id_len: id.len(),
            rect,
            status,
            event,
        });
        EventTarget {
            index: self.stack.len() - 1,
        }
    }

    /// The resolved state of an open target.
    pub fn state_of(&self, target: &EventTarget) -> &TargetState {
        &self.stack[target.index]
    }

    /// Pop the innermost open target, folding its grab/focus loss upward.
    ///
    /// Sets the frame's hover latch if this level was hovered, truncates the
    /// qualified-id accumulator by this level's segment, and informs the new
    /// top of stack of any grab or focus that expired inside it.
    pub fn pop_target(&mut self, target: EventTarget) {
        debug_assert_eq!(
            target.index + 1,
            self.stack.len(),
            "targets must pop in LIFO order"
        );
        let Some(element) = self.stack.pop() else {
            debug_assert!(false, "pop on empty target stack");
            return;
        };
        if element.status.contains(Status::HOVERED) {
            self.had_hover = true;
        }
        if self.stack.is_empty() {
            self.id_current.clear();
            return;
        }
        let segment = element.id_len + ID_SEPARATOR.len_utf8();
        debug_assert!(
            self.id_current.len() >= segment,
            "qualified-id accumulator underflow"
        );
        self.id_current
            .truncate(self.id_current.len().saturating_sub(segment));

        let had_grab = element.status.contains(Status::GRABBED);
        let had_focus = element.status.contains(Status::FOCUSED);
        if !had_grab && !had_focus {
            return;
        }
        let Some(parent) = self.stack.last_mut() else {
            return;
        };
        if had_grab {
            parent.status.remove(Status::GRABBED);
            if parent.event == Event::Grab {
                parent.event = Event::None;
            }
        }
        if had_focus {
            parent.status.remove(Status::FOCUSED);
            if parent.event == Event::FocusGained {
                parent.event = Event::None;
            } else {
                parent.event = Event::FocusLost;
            }
        }
    }

    /// Shrink an open target's width, discarding it if the pointer falls
    /// outside the new extent.
    ///
    /// Auto-sized containers resolve their extent only once their children
    /// are measured, after their own `check` already ran against a
    /// placeholder rectangle. The late shrink repairs hit testing for that
    /// case.
    pub fn shrink_width(&mut self, target: &EventTarget, width: f64) {
        let state = &mut self.stack[target.index];
        state.rect.x1 = state.rect.x0 + width;
        if self.pointer_pos.x - state.rect.x0 >= width {
            self.discard(target);
        }
    }

    /// Shrink an open target's height, discarding it if the pointer falls
    /// outside the new extent.
    pub fn shrink_height(&mut self, target: &EventTarget, height: f64) {
        let state = &mut self.stack[target.index];
        state.rect.y1 = state.rect.y0 + height;
        if self.pointer_pos.y - state.rect.y0 >= height {
            self.discard(target);
        }
    }

    /// Shrink both dimensions of an open target, discarding it if the
    /// pointer falls outside the new extent on either axis.
    pub fn shrink(&mut self, target: &EventTarget, width: f64, height: f64) {
        let state = &mut self.stack[target.index];
        state.rect.x1 = state.rect.x0 + width;
        state.rect.y1 = state.rect.y0 + height;
        if self.pointer_pos.x - state.rect.x0 >= width
            || self.pointer_pos.y - state.rect.y0 >= height
        {
            self.discard(target);
        }
    }

    /// Drop an open target's interaction for this frame.
    ///
    /// Un-hovers the target, and un-grabs it when the grab was acquired this
    /// very frame. Widget code calls this before pop when it decides the
    /// resolved interaction should not stand.
    pub fn discard(&mut self, target: &EventTarget) {
        let state = &mut self.stack[target.index];
        if !state.status.contains(Status::GRABBED) {
            state.status.remove(Status::HOVERED);
        } else if state.event == Event::Grab {
            state.status.remove(Status::HOVERED | Status::GRABBED);
            state.event = Event::None;
        }
    }

    fn check_hover(&mut self, request: Request, rect: Rect, event: &mut Event) -> Status {
        let parent_hovered = match self.stack.last() {
            None => true,
            Some(parent) => parent.status.contains(Status::HOVERED),
        };
        if self.had_hover || !parent_hovered || !rect.contains(self.pointer_pos) {
            if request == Request::Hover {
                return Status::empty();
            }
            return self.check_grab_out(request, event);
        }
        if request == Request::Hover {
            return Status::HOVERED;
        }
        Status::HOVERED | self.check_grab_over(request, event)
    }

    /// Grab resolution while the pointer is over the element.
    fn check_grab_over(&mut self, request: Request, event: &mut Event) -> Status {
        if self.pointer_released != 0 {
            if self.id_grabbed == self.id_current {
                *event = Event::Action;
                self.id_grabbed.clear();
            }
            return self.check_focus(request, event);
        }
        if self.pointer_pressed != 1 {
            if self.id_grabbed != self.id_current {
                return if request == Request::Grab {
                    Status::empty()
                } else {
                    self.gain_focus(request, event)
                };
            }
            if self.pointer_pressed == 0 {
                return Status::GRABBED | self.check_grab_command(request, event);
            }
            // A different button combination while held: the grab is over.
            *event = Event::Cancel;
            self.id_grabbed.clear();
            return self.check_focus(request, event);
        }
        *event = Event::Grab;
        self.id_grabbed.clone_from(&self.id_current);
        if request == Request::Grab {
            return Status::GRABBED;
        }
        Status::GRABBED | self.gain_focus(request, event)
    }

    /// Grab resolution while the pointer is away from the element.
    ///
    /// A grab holder kept off-screen this frame must still receive its
    /// cancel or keep its grab; a focus holder must still be told about a
    /// press elsewhere.
    fn check_grab_out(&mut self, request: Request, event: &mut Event) -> Status {
        if self.id_grabbed != self.id_current {
            return if self.pointer_pressed == 0 {
                self.check_focus(request, event)
            } else {
                self.lose_focus(request, event)
            };
        }
        if self.pointer_released == 0 && self.pointer_pressed == 0 {
            return Status::GRABBED | self.check_focus(request, event);
        }
        *event = Event::Cancel;
        self.id_grabbed.clear();
        if request == Request::Grab || self.id_focus != self.id_current {
            return Status::empty();
        }
        if self.pointer_pressed != 0 {
            return self.lose_focus(request, event);
        }
        self.check_focus(request, event)
    }

    fn check_grab_command(&mut self, request: Request, event: &mut Event) -> Status {
        if self.next_command == Command::Escape {
            *event = Event::Cancel;
        }
        if request == Request::Grab {
            self.check_action_command(event)
        } else {
            self.check_focus(request, event)
        }
    }

    /// Steady-state focus resolution: keep, promote, or report loss.
    fn check_focus(&mut self, request: Request, event: &mut Event) -> Status {
        if self.id_focus == self.id_current {
            if self.id_losing_focus == self.id_current {
                return Status::FOCUSED;
            }
            self.id_next_focus.clone_from(&self.id_current);
            return Status::FOCUSED | self.check_focus_command(request, event);
        }
        if self.id_losing_focus == self.id_current {
            *event = Event::FocusLost;
            return Status::empty();
        }
        if self.id_next_focus == self.id_current {
            self.id_focus.clone_from(&self.id_current);
            *event = Event::FocusGained;
            return Status::FOCUSED;
        }
        Status::empty()
    }

    /// Focus acquisition for an element interacting this frame.
    ///
    /// A claim is honored only if no rival claimed first this frame and no
    /// open ancestor is mid-event; an ancestor mid-event defers the claim by
    /// one frame instead of dropping it.
    fn gain_focus(&mut self, request: Request, event: &mut Event) -> Status {
        if self.id_focus == self.id_current || self.id_next_focus == self.id_current {
            return self.check_focus(request, event);
        }
        if !self.id_next_focus.is_empty() {
            let Some(parent) = self.stack.last() else {
                return Status::empty();
            };
            if !parent.status.contains(Status::FOCUSED) {
                return Status::empty();
            }
            if parent.event != Event::None && parent.event != Event::FocusGained {
                self.id_next_focus.clone_from(&self.id_current);
                self.id_losing_focus.clone_from(&self.id_focus);
                return Status::empty();
            }
        }
        self.id_next_focus.clone_from(&self.id_current);
        if *event != Event::None
            || !self.id_losing_focus.is_empty()
            || (!self.id_focus.is_empty() && self.id_focus == self.id_grabbed)
        {
            return Status::empty();
        }
        self.id_losing_focus.clone_from(&self.id_focus);
        self.id_focus.clone_from(&self.id_current);
        *event = Event::FocusGained;
        Status::FOCUSED
    }

    fn lose_focus(&mut self, request: Request, event: &mut Event) -> Status {
        if self.id_focus != self.id_current {
            return self.check_focus(request, event);
        }
        if *event == Event::None {
            self.id_focus.clear();
            *event = Event::FocusLost;
            return Status::empty();
        }
        self.id_losing_focus.clone_from(&self.id_current);
        self.check_focus(request, event)
    }

    fn check_focus_command(&mut self, request: Request, event: &mut Event) -> Status {
        if request == Request::Focus {
            self.check_action_command(event)
        } else {
            self.check_input_command(event)
        }
    }

    /// Text-input interpretation of the pending command, for
    /// [`Request::Input`] elements holding focus.
    fn check_input_command(&mut self, event: &mut Event) -> Status {
        match self.next_command {
            Command::Enter => {
                if self.input_buffer.is_empty() {
                    *event = Event::EndLine;
                } else {
                    // More text is coming; swallow the enter.
                    *event = Event::None;
                    return Status::empty();
                }
            }
            Command::Space => {
                if self.input_buffer.is_empty() {
                    *event = Event::Space;
                } else {
                    *event = Event::Input;
                    self.input_buffer.push(' ');
                }
            }
            Command::Backspace => {
                if self.input_buffer.is_empty() {
                    *event = Event::Backspace;
                } else {
                    *event = Event::Input;
                    self.input_buffer.pop();
                }
            }
            Command::Escape => {
                *event = Event::Cancel;
            }
            _ => {
                if !self.input_buffer.is_empty() {
                    *event = Event::Input;
                }
            }
        }
        self.check_action_command(event)
    }

    /// Activation interpretation of the pending command; releases any stale
    /// grab once an event is settled.
    fn check_action_command(&mut self, event: &mut Event) -> Status {
        if *event != Event::None {
            self.id_grabbed.clear();
            return Status::empty();
        }
        match self.next_command {
            Command::None => return Status::empty(),
            cmd if cmd.is_activation() => *event = Event::Action,
            _ => {}
        }
        self.id_grabbed.clear();
        Status::empty()
    }
}
