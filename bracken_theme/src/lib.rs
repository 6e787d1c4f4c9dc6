// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Bracken Theme: style values and the widget-kind lookup for the Bracken
//! immediate-mode UI widgets.
//!
//! ## Overview
//!
//! Widgets do not hard-code colors or insets; they ask a [`Theme`] for the
//! default style of their [`WidgetKind`]. The theme is an explicit mapping
//! built at configuration-load time — a plain table from kind to style
//! values — so hosts can restyle individual widget kinds by inserting
//! replacements, without any type-level dispatch.
//!
//! [`Theme::steel_blue`] provides the stock palette.
//!
//! ## Minimal example
//!
//! ```
//! use bracken_theme::{KindStyle, Theme, WidgetKind};
//!
//! let mut theme = Theme::steel_blue();
//! let stock = theme.button(WidgetKind::Button);
//!
//! // Restyle buttons only: brighten the idle background.
//! let mut restyled = stock;
//! restyled.normal.background = bracken_theme::Rgba::opaque(230, 236, 244);
//! theme.set(WidgetKind::Button, KindStyle::Button(restyled));
//!
//! assert_ne!(theme.button(WidgetKind::Button).normal.background, stock.normal.background);
//! ```
//!
//! This crate is `no_std` and uses `alloc` (through `hashbrown`).

#![no_std]

mod style;
mod theme;

pub use style::{
    ButtonStyle, ControlStyle, EdgeSize, ElementStyle, InputBoxStyle, PanelStyle, Rgba,
    ScrollBarStyle, SliderStyle, TextStyle,
};
pub use theme::{KindStyle, Theme, WidgetKind};
