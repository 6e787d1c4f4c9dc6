// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Plain style values consumed by the widget layer.

use core::ops::Add;

/// An 8-bit RGBA color.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Rgba {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
    /// Alpha channel, 255 is opaque.
    pub a: u8,
}

impl Rgba {
    /// Create a color from all four channels.
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Create a fully opaque color.
    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Per-edge inset sizes.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct EdgeSize {
    /// Left inset.
    pub left: f64,
    /// Top inset.
    pub top: f64,
    /// Right inset.
    pub right: f64,
    /// Bottom inset.
    pub bottom: f64,
}

impl EdgeSize {
    /// No insets.
    pub const ZERO: Self = Self::all(0.0);

    /// The same inset on every edge.
    pub const fn all(size: f64) -> Self {
        Self {
            left: size,
            top: size,
            right: size,
            bottom: size,
        }
    }

    /// Combined left and right inset.
    pub fn horizontal(&self) -> f64 {
        self.left + self.right
    }

    /// Combined top and bottom inset.
    pub fn vertical(&self) -> f64 {
        self.top + self.bottom
    }
}

impl Add for EdgeSize {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self {
            left: self.left + rhs.left,
            top: self.top + rhs.top,
            right: self.right + rhs.right,
            bottom: self.bottom + rhs.bottom,
        }
    }
}

/// Style of a plain box element: fill plus border.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ElementStyle {
    /// Fill color.
    pub background: Rgba,
    /// Border color.
    pub border: Rgba,
    /// Border thickness per edge.
    pub border_size: EdgeSize,
}

impl ElementStyle {
    /// This style with another background.
    pub const fn with_background(mut self, background: Rgba) -> Self {
        self.background = background;
        self
    }

    /// This style with another border color.
    pub const fn with_border(mut self, border: Rgba) -> Self {
        self.border = border;
        self
    }

    /// This style with another border thickness.
    pub const fn with_border_size(mut self, border_size: EdgeSize) -> Self {
        self.border_size = border_size;
        self
    }
}

/// Style of a text run.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextStyle {
    /// Glyph color.
    pub color: Rgba,
    /// Glyph scale relative to the metrics' base size.
    pub scale: f64,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            color: Rgba::opaque(0, 0, 0),
            scale: 1.0,
        }
    }
}

/// Style of an interactive control: decoration, content padding, text.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ControlStyle {
    /// Box decoration.
    pub decoration: ElementStyle,
    /// Padding between the border and the content.
    pub padding: EdgeSize,
    /// Text style of the content.
    pub text: TextStyle,
}

impl ControlStyle {
    /// Total inset from the outer rectangle to the content.
    pub fn content_inset(&self) -> EdgeSize {
        self.decoration.border_size + self.padding
    }
}

/// Style of a button across its interaction states.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ButtonStyle {
    /// Idle decoration.
    pub normal: ElementStyle,
    /// Decoration while hovered.
    pub hovered: ElementStyle,
    /// Decoration while grabbed.
    pub pressed: ElementStyle,
    /// Padding around the label.
    pub padding: EdgeSize,
    /// Label text style.
    pub text: TextStyle,
}

/// Style of a decorated container.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PanelStyle {
    /// Box decoration.
    pub decoration: ElementStyle,
    /// Padding between the border and the client area.
    pub padding: EdgeSize,
    /// Default spacing between the client's stacked children.
    pub element_spacing: f64,
}

impl PanelStyle {
    /// Total inset from the panel rectangle to the client area.
    pub fn client_inset(&self) -> EdgeSize {
        self.decoration.border_size + self.padding
    }
}

/// Style of a text input box in its two focus states.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct InputBoxStyle {
    /// Style while unfocused.
    pub normal: ControlStyle,
    /// Style while focused.
    pub active: ControlStyle,
}

/// Style of a slider: track, knob, and the knob's minimum length.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SliderStyle {
    /// Track decoration.
    pub track: ElementStyle,
    /// Knob decoration.
    pub knob: ElementStyle,
    /// Minimum knob length along the slider axis.
    pub min_knob: f64,
}

/// Style of a scroll bar: step buttons plus the proportional slider.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ScrollBarStyle {
    /// Style of the step buttons at both ends.
    pub buttons: ButtonStyle,
    /// Style of the slider between the buttons.
    pub bar: SliderStyle,
}
