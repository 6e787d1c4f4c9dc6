// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bracken Layout: the container stack and caret placement model of the
//! Bracken immediate-mode UI core.
//!
//! ## Overview
//!
//! Widgets declare rectangles in coordinates local to their container. This
//! crate translates them to absolute screen rectangles before they reach the
//! [`EventDispatcher`](bracken_dispatch::EventDispatcher), and accumulates
//! each open container's content extent so that zero-sized ("auto")
//! dimensions can be resolved once the container closes.
//!
//! Per open container level there is a *caret* (the next-child placement
//! cursor) and a running bottom-right extent. Three layout policies govern
//! how placing a child advances them: [`Layout::Vertical`] stacks children
//! downwards, [`Layout::Horizontal`] stacks them rightwards, and
//! [`Layout::None`] lets children overlap freely.
//!
//! The [`Ui`] driver owns the dispatcher and the container stack and keeps
//! the two mirrored at every instant: opening a container pushes one
//! dispatcher level, placing an element pushes and immediately pops one, and
//! closing a container pops one — resolving the container's final size and,
//! for auto-sized containers, retroactively shrinking the dispatcher's
//! already-pushed rectangle so hit testing stays correct.
//!
//! ## Minimal example
//!
//! ```
//! use bracken_events::Request;
//! use bracken_layout::{ContainerOptions, Ui};
//! use kurbo::Rect;
//!
//! let mut ui = Ui::new();
//! let root = ui.begin_container(
//!     "root",
//!     Rect::new(0.0, 0.0, 100.0, 100.0),
//!     ContainerOptions::default(),
//! );
//! let column = ui.begin_container(
//!     "col",
//!     Rect::ZERO,
//!     ContainerOptions::vertical(4.0),
//! );
//! ui.element("a", Rect::new(0.0, 0.0, 20.0, 10.0), Request::Hover);
//! ui.element("b", Rect::new(0.0, 0.0, 15.0, 10.0), Request::Hover);
//! let col = ui.end_container(column);
//! ui.end_container(root);
//! ui.end_frame();
//!
//! // Auto width is the widest child; auto height stacks the children with
//! // one spacing between them, no trailing gap.
//! assert_eq!(col.rect.width(), 20.0);
//! assert_eq!(col.rect.height(), 24.0);
//! ```
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

mod container;
mod ui;

pub use container::{ContainerOptions, Layout};
pub use ui::{Container, ElementState, Ui};
