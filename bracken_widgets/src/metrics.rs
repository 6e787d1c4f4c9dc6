// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The glyph-measurement boundary.

use kurbo::Size;

/// Source of text measurements.
///
/// The widgets only ever need extents; shaping and rasterization stay on
/// the host's side of the boundary.
pub trait TextMetrics {
    /// Measure a single-line text run at the given scale.
    fn measure(&self, text: &str, scale: f64) -> Size;
}

/// Fixed-advance metrics for monospaced bitmap fonts.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct FixedMetrics {
    /// Horizontal advance per glyph at scale 1.
    pub advance: f64,
    /// Line height at scale 1.
    pub line_height: f64,
}

impl Default for FixedMetrics {
    fn default() -> Self {
        Self {
            advance: 8.0,
            line_height: 8.0,
        }
    }
}

impl TextMetrics for FixedMetrics {
    fn measure(&self, text: &str, scale: f64) -> Size {
        let glyphs = text.chars().count() as f64;
        Size::new(self.advance * glyphs * scale, self.line_height * scale)
    }
}
