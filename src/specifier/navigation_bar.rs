//! Navigation bar styling.

use peniko::Color;
use serde_json::{Map, Value};

use crate::apply::ThemedNavigationBar;
use crate::attributes::AttributeKey;
use crate::coerce;
use crate::platform::BarStyle;
use crate::specifier::TextLabelSpecifier;

/// Attribute kinds pushed for bar titles and bar-button items.
const BAR_TEXT_ATTRIBUTES: [AttributeKey; 2] =
    [AttributeKey::Font, AttributeKey::ForegroundColor];

/// Resolved styling for a navigation bar.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct NavigationBarSpecifier {
    /// Whether the bar is translucent.
    pub translucent: bool,
    /// The bar's appearance style.
    pub bar_style: BarStyle,
    /// Background color for popover presentations anchored to the bar.
    /// Advisory: the engine does not apply it.
    pub popover_background_color: Option<Color>,
    /// The bar's chrome background color.
    pub bar_color: Option<Color>,
    /// The tint color for bar items.
    pub tint_color: Option<Color>,
    /// Styling for the bar title.
    pub title_label: Option<TextLabelSpecifier>,
    /// Styling for bar-button items.
    pub buttons_label: Option<TextLabelSpecifier>,
}

impl NavigationBarSpecifier {
    /// Build a specifier from a navigation-bar mapping, applying an
    /// additive point-size adjustment to the title and button fonts.
    pub fn from_mapping(mapping: &Map<String, Value>, size_adjustment: f64) -> Self {
        Self {
            translucent: coerce::boolean(mapping.get("translucency")),
            bar_style: coerce::bar_style(mapping.get("barStyle")),
            popover_background_color: coerce::optional_color(
                mapping.get("popoverBackgroundColor"),
            ),
            bar_color: coerce::optional_color(mapping.get("barColor")),
            tint_color: coerce::optional_color(mapping.get("tintColor")),
            title_label: coerce::mapping(mapping.get("titleLabel"))
                .map(|label| TextLabelSpecifier::from_mapping(label, size_adjustment)),
            buttons_label: coerce::mapping(mapping.get("buttonsLabel"))
                .map(|label| TextLabelSpecifier::from_mapping(label, size_adjustment)),
        }
    }

    /// Push bar style, translucency, colors and the title/button text
    /// attributes onto a navigation bar.
    ///
    /// `scope`, when present, names a container the bar-button styling is
    /// limited to; it is forwarded verbatim to the bar implementation,
    /// which owns the filtering.
    pub fn apply_to_navigation_bar(
        &self,
        bar: &mut impl ThemedNavigationBar,
        scope: Option<&str>,
    ) {
        if let Some(bar_color) = self.bar_color {
            bar.set_bar_color(bar_color);
        }
        if let Some(tint_color) = self.tint_color {
            bar.set_tint_color(tint_color);
        }
        bar.set_translucent(self.translucent);
        bar.set_bar_style(self.bar_style);
        if let Some(title_label) = &self.title_label {
            bar.set_title_attributes(&title_label.attributes_for_keys(&BAR_TEXT_ATTRIBUTES));
        }
        if let Some(buttons_label) = &self.buttons_label {
            bar.set_button_attributes(
                &buttons_label.attributes_for_keys(&BAR_TEXT_ATTRIBUTES),
                scope,
            );
        }
    }
}
