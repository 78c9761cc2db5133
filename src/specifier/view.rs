//! Plain view styling.

use kurbo::{Insets, Point, Size};
use peniko::Color;
use serde_json::{Map, Value};

use crate::coerce;
use crate::specifier::ControlState;

/// Resolved styling for a plain view: geometry and per-state background
/// colors.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ViewSpecifier {
    /// The view's size.
    pub size: Size,
    /// The view's position.
    pub position: Point,
    /// The resting background color.
    pub background_color: Option<Color>,
    /// The background color while highlighted.
    pub highlighted_background_color: Option<Color>,
    /// The background color while disabled.
    pub disabled_background_color: Option<Color>,
    /// Advisory padding. The engine never applies it; how padding affects
    /// the view is interpreted by the interested party.
    pub padding: Insets,
}

impl ViewSpecifier {
    /// Build a specifier from a view mapping.
    pub fn from_mapping(mapping: &Map<String, Value>) -> Self {
        Self {
            size: coerce::size(mapping.get("size")),
            position: coerce::point(mapping.get("position")),
            background_color: coerce::optional_color(mapping.get("backgroundColor")),
            highlighted_background_color: coerce::optional_color(
                mapping.get("highlightedBackgroundColor"),
            ),
            disabled_background_color: coerce::optional_color(
                mapping.get("disabledBackgroundColor"),
            ),
            padding: coerce::edge_insets(mapping.get("padding")),
        }
    }

    /// The background color configured for `state`, if any.
    pub fn background_color_for_state(&self, state: ControlState) -> Option<Color> {
        match state {
            ControlState::Normal => self.background_color,
            ControlState::Highlighted => self.highlighted_background_color,
            ControlState::Disabled => self.disabled_background_color,
        }
    }
}
