// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bracken Dispatch: the per-frame interaction state machine of the Bracken
//! immediate-mode UI core.
//!
//! ## Overview
//!
//! Application code redeclares its UI tree every frame. Each interactive
//! region calls [`EventDispatcher::check`] once, in strict nesting order,
//! with its absolute rectangle and a local id. The dispatcher resolves the
//! region's [`Status`](bracken_events::Status) (hover, grab, focus) and its
//! [`Event`](bracken_events::Event) for the frame from one linear pass,
//! using only a handful of sticky qualified ids that persist across frames
//! (the grab holder, the focus holder, and the pending/losing focus slots).
//!
//! The dispatcher keeps an internal stack that must mirror the caller's
//! container nesting exactly: every [`check`](EventDispatcher::check) pushes
//! one [`TargetState`] and every [`pop_target`](EventDispatcher::pop_target)
//! removes the most recent one. Balanced push/pop is a caller obligation; a
//! layout layer typically wraps the pair in a scoped helper so the release
//! cannot be forgotten.
//!
//! ## Identity
//!
//! Elements are named by *qualified ids*: the local id appended to the open
//! ancestors' ids with [`ID_SEPARATOR`]. The dispatcher maintains the
//! qualified id as a growable append-and-truncate buffer, so building and
//! unwinding ids is cheap and allocation settles after the first frame.
//! Uniqueness within a frame is the caller's responsibility.
//!
//! ## Frame protocol
//!
//! 1. Feed input: [`move_pointer`](EventDispatcher::move_pointer),
//!    [`press_pointer`](EventDispatcher::press_pointer) /
//!    [`release_pointer`](EventDispatcher::release_pointer),
//!    [`set_command`](EventDispatcher::set_command),
//!    [`insert_text`](EventDispatcher::insert_text).
//! 2. Declare the tree: nested `check` / `pop_target` pairs.
//! 3. [`reset`](EventDispatcher::reset) once, with the stack empty.
//!
//! ## Minimal example
//!
//! ```
//! use bracken_dispatch::EventDispatcher;
//! use bracken_events::{Event, Request, Status};
//! use kurbo::{Point, Rect};
//!
//! let mut dispatcher = EventDispatcher::default();
//! let rect = Rect::new(0.0, 0.0, 10.0, 10.0);
//!
//! // Frame 1: press the primary button while hovering the element.
//! dispatcher.move_pointer(Point::new(5.0, 5.0));
//! dispatcher.press_pointer(0);
//! let target = dispatcher.check(Request::Grab, rect, "btn");
//! assert_eq!(dispatcher.state_of(&target).status, Status::HOVERED | Status::GRABBED);
//! assert_eq!(dispatcher.state_of(&target).event, Event::Grab);
//! dispatcher.pop_target(target);
//! dispatcher.reset();
//!
//! // Frame 2: release over the same element: that is an action.
//! dispatcher.release_pointer(0);
//! let target = dispatcher.check(Request::Grab, rect, "btn");
//! assert_eq!(dispatcher.state_of(&target).event, Event::Action);
//! dispatcher.pop_target(target);
//! dispatcher.reset();
//! ```
//!
//! ## Error handling
//!
//! There is no recoverable-error path. Balanced push/pop, non-empty ids for
//! grab-and-above requests, and in-range button indices are caller
//! contracts, checked with `debug_assert!`. The only "soft" outcome is
//! [`Event::Cancel`](bracken_events::Event::Cancel), which is an ordinary
//! state-machine result, not an error.
//!
//! ## Features
//!
//! - `std` (default): enables `std` support for `kurbo`.
//! - `libm`: enables `no_std` builds that rely on `libm` for floating-point
//!   math.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod dispatcher;

pub use dispatcher::{EventDispatcher, EventTarget, ID_SEPARATOR, TargetState};
