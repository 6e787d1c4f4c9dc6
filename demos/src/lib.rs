// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Shared support for the Bracken demos: a stdout draw sink.

use kurbo::{Point, Rect};

use bracken_theme::{EdgeSize, Rgba};
use bracken_widgets::DrawSink;

/// A draw sink that prints every command, for headless demos.
#[derive(Debug, Default)]
pub struct PrintSink {
    /// Number of commands received this frame.
    pub commands: usize,
}

impl PrintSink {
    /// Start a new frame of output.
    pub fn begin_frame(&mut self, index: usize) {
        self.commands = 0;
        println!("--- frame {index} ---");
    }
}

impl DrawSink for PrintSink {
    fn fill_rect(&mut self, rect: Rect, color: Rgba) {
        self.commands += 1;
        println!(
            "fill   {:>6.1},{:>6.1} {:>5.1}x{:<5.1} #{:02x}{:02x}{:02x}",
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
            color.r,
            color.g,
            color.b
        );
    }

    fn stroke_rect(&mut self, rect: Rect, edges: EdgeSize, color: Rgba) {
        self.commands += 1;
        println!(
            "stroke {:>6.1},{:>6.1} {:>5.1}x{:<5.1} w{} #{:02x}{:02x}{:02x}",
            rect.x0,
            rect.y0,
            rect.width(),
            rect.height(),
            edges.left,
            color.r,
            color.g,
            color.b
        );
    }

    fn text(&mut self, origin: Point, text: &str, _scale: f64, color: Rgba) {
        self.commands += 1;
        println!(
            "text   {:>6.1},{:>6.1} {:?} #{:02x}{:02x}{:02x}",
            origin.x, origin.y, text, color.r, color.g, color.b
        );
    }
}
