// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bracken Events: the interaction vocabulary of the Bracken immediate-mode UI core.
//!
//! This crate is pure data. It defines the small closed sets that the event
//! dispatcher resolves each frame and that widget code branches on:
//!
//! - [`Status`]: bit flags describing what an element *is* this frame
//!   (hovered, holding the pointer grab, holding keyboard focus).
//! - [`Event`]: the discrete interaction *outcome* an element received this
//!   frame (a fresh grab, an action, a cancellation, a focus transition, an
//!   input edit, ...). At most one per element per frame.
//! - [`Command`]: the at-most-one keyboard command the host fed into the
//!   frame (activate, enter, space, backspace, escape).
//! - [`Request`]: the tier of events an element asks the dispatcher to
//!   resolve for it. Tiers are cumulative: an element requesting
//!   [`Request::Focus`] also takes part in hover and grab resolution.
//!
//! ## Minimal example
//!
//! ```
//! use bracken_events::{Event, Request, Status};
//!
//! // A button asks for grab-tier events and learns it is hovered and
//! // freshly grabbed this frame.
//! let status = Status::HOVERED | Status::GRABBED;
//! let event = Event::Grab;
//!
//! assert!(status.contains(Status::HOVERED));
//! assert!(Request::Grab > Request::Hover);
//! assert_eq!(event, Event::Grab);
//! ```
//!
//! This crate is `no_std` and has no dependencies beyond `bitflags`.

#![no_std]

bitflags::bitflags! {
    /// Per-frame interaction status of an element.
    ///
    /// The empty set means the element received no interaction this frame.
    /// The dispatcher guarantees that at most one element holds
    /// [`Status::GRABBED`] and at most one holds [`Status::FOCUSED`] at any
    /// instant across a frame.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct Status: u8 {
        /// The pointer is over the element and no earlier element consumed
        /// the hover this frame.
        const HOVERED = 0b0000_0001;
        /// The element holds the exclusive pointer grab.
        const GRABBED = 0b0000_0010;
        /// The element holds the exclusive keyboard focus.
        const FOCUSED = 0b0000_0100;
    }
}

impl Default for Status {
    fn default() -> Self {
        Self::empty()
    }
}

/// Discrete interaction outcome delivered to an element for one frame.
///
/// Events are mutually exclusive per element per frame. `Cancel` is an
/// ordinary state-machine outcome (the user abandoned a grab or an input
/// sequence), not an error.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Event {
    /// Nothing happened.
    #[default]
    None,
    /// The element acquired the pointer grab on a fresh primary press.
    Grab,
    /// The element was activated: grab released over it, or an activation
    /// command arrived while it was focused.
    Action,
    /// An in-progress grab or input sequence was abandoned.
    Cancel,
    /// The element acquired keyboard focus this frame.
    FocusGained,
    /// The element lost keyboard focus this frame.
    FocusLost,
    /// Enter was pressed on a focused input element with an empty buffer.
    EndLine,
    /// Literal space, reported when the input buffer was empty so the widget
    /// can apply its own semantics.
    Space,
    /// Literal backspace, reported when the input buffer was empty so the
    /// widget can apply its own semantics (for example caret movement).
    Backspace,
    /// The shared input buffer holds text for the focused element.
    Input,
}

/// Keyboard command fed into the frame by the host, at most one per frame.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Command {
    /// No pending command.
    #[default]
    None,
    /// Generic activation (for example a gamepad confirm).
    Action,
    /// The enter/return key.
    Enter,
    /// The space key.
    Space,
    /// The backspace key.
    Backspace,
    /// The escape key.
    Escape,
}

impl Command {
    /// Whether this command activates a focused, non-text element.
    ///
    /// `Action`, `Enter` and `Space` are synonyms for activation at the
    /// focus tier.
    pub fn is_activation(self) -> bool {
        matches!(self, Self::Action | Self::Enter | Self::Space)
    }
}

/// Tier of events an element requests from the dispatcher.
///
/// Tiers are cumulative and ordered: requesting a tier opts into every tier
/// below it. [`Request::None`] pushes a purely structural stack frame that
/// takes part in clipping and id qualification but receives no interaction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Request {
    /// Structural only: no hover, no grab, no focus.
    None,
    /// Hover resolution only.
    Hover,
    /// Hover plus exclusive pointer grab.
    Grab,
    /// Hover, grab, and keyboard focus with activation commands.
    Focus,
    /// Hover, grab, focus, and text-input command interpretation.
    Input,
}
