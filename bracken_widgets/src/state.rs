// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Widget-private state keyed by qualified id.

use alloc::string::String;

use hashbrown::HashMap;

/// Cross-frame widget-private state.
///
/// Immediate-mode widgets own no objects, so the little state they need
/// across frames (text cursors, drag anchors, numeric edit buffers) lives
/// here, keyed by qualified id. Two instances of the same widget kind get
/// distinct entries as long as their qualified ids differ.
///
/// Entries are small and bounded by the number of widgets interacted with;
/// hosts may call [`clear`](WidgetStates::clear) on scene changes.
#[derive(Clone, Debug, Default)]
pub struct WidgetStates {
    /// Byte position of the edit cursor per text box.
    pub(crate) text_cursors: HashMap<String, usize>,
    /// Edit buffer per numeric box.
    pub(crate) number_buffers: HashMap<String, String>,
    /// Pointer-x anchor per dragged slider knob.
    pub(crate) drag_anchors: HashMap<String, f64>,
}

impl WidgetStates {
    /// Create an empty state store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all stored widget state.
    pub fn clear(&mut self) {
        self.text_cursors.clear();
        self.number_buffers.clear();
        self.drag_anchors.clear();
    }

    /// The stored edit-cursor position of a text box, if any.
    pub fn text_cursor(&self, qualified_id: &str) -> Option<usize> {
        self.text_cursors.get(qualified_id).copied()
    }
}
