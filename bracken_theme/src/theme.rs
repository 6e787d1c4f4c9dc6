// Copyright 2025 the Bracken Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The widget-kind to style table.

use hashbrown::HashMap;

use crate::style::{
    ButtonStyle, ControlStyle, EdgeSize, ElementStyle, InputBoxStyle, PanelStyle, Rgba,
    ScrollBarStyle, SliderStyle, TextStyle,
};

/// The closed set of widget kinds a theme can style.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum WidgetKind {
    /// A plain stylizable box.
    Element,
    /// A text label.
    Label,
    /// A push button.
    Button,
    /// A decorated container.
    Panel,
    /// A text input box.
    TextBox,
    /// A numeric input box.
    NumberBox,
    /// A value slider.
    Slider,
    /// A scroll bar with step buttons.
    ScrollBar,
}

/// A style value for one widget kind.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum KindStyle {
    /// Style of a plain box.
    Element(ElementStyle),
    /// Style of a text run.
    Text(TextStyle),
    /// Style of a button.
    Button(ButtonStyle),
    /// Style of a decorated container.
    Panel(PanelStyle),
    /// Style of an input box.
    InputBox(InputBoxStyle),
    /// Style of a slider.
    Slider(SliderStyle),
    /// Style of a scroll bar.
    ScrollBar(ScrollBarStyle),
}

/// Mapping from widget kind to its default style values.
///
/// Resolved at configuration-load time; lookups fall back to the stock
/// steel-blue values when a kind has no entry or an entry of the wrong
/// shape.
#[derive(Clone, Debug)]
pub struct Theme {
    styles: HashMap<WidgetKind, KindStyle>,
}

// The stock steel-blue palette.
const BACKGROUND: Rgba = Rgba::opaque(219, 228, 240);
const STEEL: Rgba = Rgba::opaque(45, 72, 106);
const LIGHT: Rgba = Rgba::opaque(236, 240, 245);
const MID: Rgba = Rgba::opaque(176, 195, 222);

const ELEMENT: ElementStyle = ElementStyle {
    background: BACKGROUND,
    border: STEEL,
    border_size: EdgeSize::ZERO,
};

const TEXT: TextStyle = TextStyle {
    color: STEEL,
    scale: 1.0,
};

const BUTTON: ButtonStyle = ButtonStyle {
    normal: ElementStyle {
        background: MID,
        border: STEEL,
        border_size: EdgeSize::all(1.0),
    },
    hovered: ElementStyle {
        background: LIGHT,
        border: STEEL,
        border_size: EdgeSize::all(1.0),
    },
    pressed: ElementStyle {
        background: STEEL,
        border: STEEL,
        border_size: EdgeSize::all(1.0),
    },
    padding: EdgeSize::all(2.0),
    text: TEXT,
};

const PANEL: PanelStyle = PanelStyle {
    decoration: ElementStyle {
        background: BACKGROUND,
        border: STEEL,
        border_size: EdgeSize::all(1.0),
    },
    padding: EdgeSize::all(2.0),
    element_spacing: 2.0,
};

const CONTROL: ControlStyle = ControlStyle {
    decoration: ElementStyle {
        background: LIGHT,
        border: STEEL,
        border_size: EdgeSize::all(1.0),
    },
    padding: EdgeSize::all(2.0),
    text: TEXT,
};

const INPUT_BOX: InputBoxStyle = InputBoxStyle {
    normal: CONTROL,
    active: ControlStyle {
        decoration: ElementStyle {
            background: Rgba::opaque(255, 255, 255),
            border: STEEL,
            border_size: EdgeSize::all(1.0),
        },
        padding: EdgeSize::all(2.0),
        text: TEXT,
    },
};

const SLIDER: SliderStyle = SliderStyle {
    track: ElementStyle {
        background: LIGHT,
        border: STEEL,
        border_size: EdgeSize::all(1.0),
    },
    knob: ElementStyle {
        background: MID,
        border: STEEL,
        border_size: EdgeSize::all(1.0),
    },
    min_knob: 8.0,
};

const SCROLL_BAR: ScrollBarStyle = ScrollBarStyle {
    buttons: BUTTON,
    bar: SLIDER,
};

impl Theme {
    /// An empty theme; every lookup falls back to the stock values.
    pub fn new() -> Self {
        Self {
            styles: HashMap::new(),
        }
    }

    /// The stock steel-blue theme with an explicit entry per widget kind.
    pub fn steel_blue() -> Self {
        let mut theme = Self::new();
        theme.set(WidgetKind::Element, KindStyle::Element(ELEMENT));
        theme.set(WidgetKind::Label, KindStyle::Text(TEXT));
        theme.set(WidgetKind::Button, KindStyle::Button(BUTTON));
        theme.set(WidgetKind::Panel, KindStyle::Panel(PANEL));
        theme.set(WidgetKind::TextBox, KindStyle::InputBox(INPUT_BOX));
        theme.set(WidgetKind::NumberBox, KindStyle::InputBox(INPUT_BOX));
        theme.set(WidgetKind::Slider, KindStyle::Slider(SLIDER));
        theme.set(WidgetKind::ScrollBar, KindStyle::ScrollBar(SCROLL_BAR));
        theme
    }

    /// Insert or replace the style of one widget kind.
    pub fn set(&mut self, kind: WidgetKind, style: KindStyle) {
        self.styles.insert(kind, style);
    }

    /// Box style for the given kind.
    pub fn element(&self, kind: WidgetKind) -> ElementStyle {
        match self.styles.get(&kind) {
            Some(KindStyle::Element(style)) => *style,
            _ => ELEMENT,
        }
    }

    /// Text style for the given kind.
    pub fn text(&self, kind: WidgetKind) -> TextStyle {
        match self.styles.get(&kind) {
            Some(KindStyle::Text(style)) => *style,
            _ => TEXT,
        }
    }

    /// Button style for the given kind.
    pub fn button(&self, kind: WidgetKind) -> ButtonStyle {
        match self.styles.get(&kind) {
            Some(KindStyle::Button(style)) => *style,
            _ => BUTTON,
        }
    }

    /// Panel style for the given kind.
    pub fn panel(&self, kind: WidgetKind) -> PanelStyle {
        match self.styles.get(&kind) {
            Some(KindStyle::Panel(style)) => *style,
            _ => PANEL,
        }
    }

    /// Input box style for the given kind.
    pub fn input_box(&self, kind: WidgetKind) -> InputBoxStyle {
        match self.styles.get(&kind) {
            Some(KindStyle::InputBox(style)) => *style,
            _ => INPUT_BOX,
        }
    }

    /// Slider style for the given kind.
    pub fn slider(&self, kind: WidgetKind) -> SliderStyle {
        match self.styles.get(&kind) {
            Some(KindStyle::Slider(style)) => *style,
            _ => SLIDER,
        }
    }

    /// Scroll bar style for the given kind.
    pub fn scroll_bar(&self, kind: WidgetKind) -> ScrollBarStyle {
        match self.styles.get(&kind) {
            Some(KindStyle::ScrollBar(style)) => *style,
            _ => SCROLL_BAR,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::steel_blue()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_theme_falls_back_to_stock_values() {
        let theme = Theme::new();
        assert_eq!(theme.element(WidgetKind::Element), ELEMENT);
        assert_eq!(theme.button(WidgetKind::Button), BUTTON);
        assert_eq!(theme.panel(WidgetKind::Panel), PANEL);
    }

    #[test]
    fn wrong_shaped_entry_falls_back() {
        let mut theme = Theme::new();
        theme.set(WidgetKind::Button, KindStyle::Element(ELEMENT));
        assert_eq!(theme.button(WidgetKind::Button), BUTTON);
    }

    #[test]
    fn replacement_is_returned() {
        let mut theme = Theme::steel_blue();
        let mut restyled = theme.button(WidgetKind::Button);
        restyled.normal.background = Rgba::opaque(1, 2, 3);
        theme.set(WidgetKind::Button, KindStyle::Button(restyled));
        assert_eq!(
            theme.button(WidgetKind::Button).normal.background,
            Rgba::opaque(1, 2, 3)
        );
    }

    #[test]
    fn kinds_can_share_a_style_shape() {
        let theme = Theme::steel_blue();
        assert_eq!(
            theme.input_box(WidgetKind::TextBox),
            theme.input_box(WidgetKind::NumberBox)
        );
    }
}
