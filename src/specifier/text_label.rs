//! Text label styling and derived attributes.
//!
//! [TextLabelSpecifier] is the richest specifier: besides resolved fields
//! it derives attribute bundles for building styled text, applies case
//! transforms, and synthesizes highlighted/disabled colors from the normal
//! ones when no explicit override is configured.

use kurbo::{Insets, Point, Size};
use peniko::Color;
use serde_json::{Map, Value};

use crate::apply::{ThemedButton, ThemedLabel};
use crate::attributes::{
    AttributeKey, AttributedString, LineBreakMode, ParagraphStyle, TextAlignment,
    TextAttributes, TextCaseTransform,
};
use crate::coerce;
use crate::specifier::{ControlState, FontSpecifier};

/// Alpha fraction used to fade normal colors into missing highlighted
/// colors when no explicit fraction is supplied.
const DEFAULT_HIGHLIGHT_FADE: f32 = 0.5;

/// Resolved styling for a text label.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLabelSpecifier {
    /// The label font.
    pub font: FontSpecifier,
    /// An optional bold companion font.
    pub bold_font: Option<FontSpecifier>,
    /// An optional italic companion font.
    pub italic_font: Option<FontSpecifier>,
    /// The label's size. Ignored when [size_to_fit](Self::size_to_fit) is set.
    pub size: Size,
    /// When `true`, the label should be sized to its text instead of
    /// [size](Self::size).
    pub size_to_fit: bool,
    /// The label's position.
    pub position: Point,
    /// Maximum number of text lines. Default: 1 (a single line).
    pub number_of_lines: i64,
    /// Space after each paragraph, in points.
    pub paragraph_spacing: f64,
    /// Space before each paragraph, in points.
    pub paragraph_spacing_before: f64,
    /// Space after each paragraph as a multiple of the font's line height.
    /// When greater than zero, takes precedence over
    /// [paragraph_spacing](Self::paragraph_spacing).
    pub paragraph_spacing_multiple: f64,
    /// Space before each paragraph as a multiple of the font's line height.
    /// When greater than zero, takes precedence over
    /// [paragraph_spacing_before](Self::paragraph_spacing_before).
    pub paragraph_spacing_before_multiple: f64,
    /// Extra line spacing as a multiple of the font's line height.
    pub line_spacing_multiple: f64,
    /// Horizontal alignment.
    pub alignment: TextAlignment,
    /// Line-break behavior.
    pub line_break_mode: LineBreakMode,
    /// Case transform applied to text at render time.
    pub text_transform: TextCaseTransform,
    /// The resting text color.
    pub color: Option<Color>,
    /// The text color while highlighted.
    pub highlighted_color: Option<Color>,
    /// The text color while disabled.
    pub disabled_color: Option<Color>,
    /// The resting background color.
    pub background_color: Option<Color>,
    /// The background color while highlighted.
    pub highlighted_background_color: Option<Color>,
    /// The background color while disabled.
    pub disabled_background_color: Option<Color>,
    /// Advisory padding. The engine never applies it; how padding affects
    /// the label is interpreted by the interested party.
    pub padding: Insets,
    attributes: TextAttributes,
}

impl Default for TextLabelSpecifier {
    fn default() -> Self {
        let mut specifier = Self {
            font: FontSpecifier::default(),
            bold_font: None,
            italic_font: None,
            size: Size::ZERO,
            size_to_fit: false,
            position: Point::ZERO,
            number_of_lines: 1,
            paragraph_spacing: 0.0,
            paragraph_spacing_before: 0.0,
            paragraph_spacing_multiple: 0.0,
            paragraph_spacing_before_multiple: 0.0,
            line_spacing_multiple: 0.0,
            alignment: TextAlignment::default(),
            line_break_mode: LineBreakMode::default(),
            text_transform: TextCaseTransform::default(),
            color: None,
            highlighted_color: None,
            disabled_color: None,
            background_color: None,
            highlighted_background_color: None,
            disabled_background_color: None,
            padding: Insets::ZERO,
            attributes: TextAttributes::default(),
        };
        specifier.attributes = specifier.attributes_for_keys(&AttributeKey::ALL);
        specifier
    }
}

impl TextLabelSpecifier {
    /// Build a specifier from a text-label mapping, applying an additive
    /// point-size adjustment to every font in it.
    pub fn from_mapping(mapping: &Map<String, Value>, size_adjustment: f64) -> Self {
        let mut specifier = Self {
            font: coerce::font(mapping.get("font"), size_adjustment),
            bold_font: coerce::optional_font(mapping.get("boldFont"), size_adjustment),
            italic_font: coerce::optional_font(mapping.get("italicFont"), size_adjustment),
            size: coerce::size(mapping.get("size")),
            size_to_fit: coerce::boolean(mapping.get("sizeToFit")),
            position: coerce::point(mapping.get("position")),
            number_of_lines: if mapping.contains_key("numberOfLines") {
                coerce::integer(mapping.get("numberOfLines"))
            } else {
                1
            },
            paragraph_spacing: coerce::float(mapping.get("paragraphSpacing")),
            paragraph_spacing_before: coerce::float(mapping.get("paragraphSpacingBefore")),
            paragraph_spacing_multiple: coerce::float(mapping.get("paragraphSpacingMultiple")),
            paragraph_spacing_before_multiple: coerce::float(
                mapping.get("paragraphSpacingBeforeMultiple"),
            ),
            line_spacing_multiple: coerce::float(mapping.get("lineSpacingMultiple")),
            alignment: coerce::text_alignment(mapping.get("alignment")),
            line_break_mode: coerce::line_break_mode(mapping.get("lineBreakMode")),
            text_transform: coerce::text_case_transform(mapping.get("textTransform")),
            color: coerce::optional_color(mapping.get("color")),
            highlighted_color: coerce::optional_color(mapping.get("highlightedColor")),
            disabled_color: coerce::optional_color(mapping.get("disabledColor")),
            background_color: coerce::optional_color(mapping.get("backgroundColor")),
            highlighted_background_color: coerce::optional_color(
                mapping.get("highlightedBackgroundColor"),
            ),
            disabled_background_color: coerce::optional_color(
                mapping.get("disabledBackgroundColor"),
            ),
            padding: coerce::edge_insets(mapping.get("padding")),
            attributes: TextAttributes::default(),
        };
        specifier.attributes = specifier.attributes_for_keys(&AttributeKey::ALL);
        specifier
    }

    /// Apply the configured case transform to `text`.
    pub fn transform_text(&self, text: &str) -> String {
        self.text_transform.apply(text)
    }

    /// The full derived attribute bundle: font, colors, and the paragraph
    /// style built from alignment, line breaking and spacing.
    pub fn attributes(&self) -> &TextAttributes {
        &self.attributes
    }

    /// Build an attribute bundle restricted to the requested kinds.
    pub fn attributes_for_keys(&self, keys: &[AttributeKey]) -> TextAttributes {
        self.attributes_with_overrides(keys, None, None)
    }

    /// Convenience bundle: font, foreground color and background color.
    pub fn font_and_color_attributes(&self) -> TextAttributes {
        self.attributes_for_keys(&[
            AttributeKey::Font,
            AttributeKey::ForegroundColor,
            AttributeKey::BackgroundColor,
        ])
    }

    fn attributes_with_overrides(
        &self,
        keys: &[AttributeKey],
        foreground: Option<Color>,
        background: Option<Color>,
    ) -> TextAttributes {
        let mut attributes = TextAttributes::default();
        for key in keys {
            match key {
                AttributeKey::Font => {
                    attributes.font = Some(self.font.clone());
                }
                AttributeKey::ForegroundColor => {
                    attributes.foreground_color = foreground.or(self.color);
                }
                AttributeKey::BackgroundColor => {
                    attributes.background_color = background.or(self.background_color);
                }
                AttributeKey::ParagraphStyle => {
                    attributes.paragraph_style = Some(self.paragraph_style());
                }
            }
        }
        attributes
    }

    /// Derive the paragraph style from alignment, line breaking and the
    /// spacing fields. Each spacing multiple, when greater than zero, takes
    /// precedence over its absolute counterpart and is computed against the
    /// font's [line height](FontSpecifier::line_height).
    pub fn paragraph_style(&self) -> ParagraphStyle {
        let line_height = self.font.line_height();
        let paragraph_spacing = if self.paragraph_spacing_multiple > 0.0 {
            line_height * self.paragraph_spacing_multiple
        } else {
            self.paragraph_spacing
        };
        let paragraph_spacing_before = if self.paragraph_spacing_before_multiple > 0.0 {
            line_height * self.paragraph_spacing_before_multiple
        } else {
            self.paragraph_spacing_before
        };
        let line_spacing = if self.line_spacing_multiple > 0.0 {
            line_height * self.line_spacing_multiple
        } else {
            0.0
        };
        ParagraphStyle {
            alignment: self.alignment,
            line_break_mode: self.line_break_mode,
            paragraph_spacing,
            paragraph_spacing_before,
            line_spacing,
        }
    }

    /// Build an attributed string with the full attribute bundle, applying
    /// the case transform to `text`.
    pub fn attributed_string(&self, text: &str) -> AttributedString {
        self.attributed_string_with_attributes(text, self.attributes.clone())
    }

    /// Build an attributed string from `text` and a caller-supplied bundle,
    /// applying the case transform.
    pub fn attributed_string_with_attributes(
        &self,
        text: &str,
        attributes: TextAttributes,
    ) -> AttributedString {
        AttributedString::new(self.transform_text(text), attributes)
    }

    /// Build an attributed string for one control state.
    ///
    /// The state's explicit colors win when configured. For the highlighted
    /// and disabled states, a missing color is synthesized from the normal
    /// one when `generate_missing_with_alpha` is supplied: the normal
    /// color's alpha is scaled by the fraction, so `0` is fully transparent
    /// and `1` gives back the normal color exactly. With no fraction and no
    /// explicit color, the normal colors are used unchanged.
    pub fn attributed_string_for_state(
        &self,
        text: &str,
        state: ControlState,
        generate_missing_with_alpha: Option<f32>,
    ) -> AttributedString {
        let (mut foreground, mut background) = match state {
            ControlState::Normal => (self.color, self.background_color),
            ControlState::Highlighted => {
                (self.highlighted_color, self.highlighted_background_color)
            }
            ControlState::Disabled => (self.disabled_color, self.disabled_background_color),
        };

        if state != ControlState::Normal {
            if let Some(alpha) = generate_missing_with_alpha {
                if foreground.is_none() {
                    foreground = self.color.map(|color| color.multiply_alpha(alpha));
                }
                if background.is_none() {
                    background = self
                        .background_color
                        .map(|color| color.multiply_alpha(alpha));
                }
            }
        }

        let attributes =
            self.attributes_with_overrides(&AttributeKey::ALL, foreground, background);
        self.attributed_string_with_attributes(text, attributes)
    }

    /// Build an attributed string for the highlighted state of a control.
    ///
    /// Shorthand for [attributed_string_for_state](Self::attributed_string_for_state)
    /// with [ControlState::Highlighted]; see there for the color-synthesis
    /// rule.
    pub fn highlighted_attributed_string(
        &self,
        text: &str,
        generate_missing_with_alpha: Option<f32>,
    ) -> AttributedString {
        self.attributed_string_for_state(
            text,
            ControlState::Highlighted,
            generate_missing_with_alpha,
        )
    }

    /// Push the resolved attributes onto a label.
    pub fn apply_to_label(&self, label: &mut impl ThemedLabel) {
        self.apply(label, None);
    }

    /// Push the resolved attributes onto a label and set its text,
    /// transformed.
    pub fn apply_to_label_with_text(&self, label: &mut impl ThemedLabel, text: &str) {
        self.apply(label, Some(text));
    }

    fn apply(&self, label: &mut impl ThemedLabel, text: Option<&str>) {
        if let Some(text) = text {
            label.set_text(&self.transform_text(text));
        }
        label.set_font(&self.font);
        label.set_text_alignment(self.alignment);
        label.set_number_of_lines(self.number_of_lines);
        if let Some(color) = self.color {
            label.set_text_color(color);
        }
        if let Some(background_color) = self.background_color {
            label.set_background_color(background_color);
        }
        if self.size_to_fit {
            label.size_to_fit();
        }
    }

    /// Assign attributed titles to a button for each of the given states,
    /// using each state's explicit colors (no synthesis).
    pub fn apply_to_button_for_states(
        &self,
        button: &mut impl ThemedButton,
        title: &str,
        states: &[ControlState],
    ) {
        for state in states {
            let attributed = self.attributed_string_for_state(title, *state, None);
            button.set_attributed_title(attributed, *state);
        }
    }

    /// Assign attributed titles to a button for the normal and highlighted
    /// states, fading missing highlighted colors to 50% of the normal ones.
    pub fn apply_to_button_normal_and_highlighted(
        &self,
        button: &mut impl ThemedButton,
        title: &str,
    ) {
        self.apply_to_button_normal_and_highlighted_with_alpha(
            button,
            title,
            Some(DEFAULT_HIGHLIGHT_FADE),
        );
    }

    /// Assign attributed titles to a button for the normal and highlighted
    /// states. When `alpha` is [None], no colors are synthesized and the
    /// highlighted title falls back to the normal colors.
    pub fn apply_to_button_normal_and_highlighted_with_alpha(
        &self,
        button: &mut impl ThemedButton,
        title: &str,
        alpha: Option<f32>,
    ) {
        button.set_attributed_title(self.attributed_string(title), ControlState::Normal);
        let highlighted = self.highlighted_attributed_string(title, alpha);
        button.set_attributed_title(highlighted, ControlState::Highlighted);
    }

    /// Assign an attributed title to a button for the disabled state, using
    /// the disabled colors directly.
    pub fn apply_to_button_disabled(&self, button: &mut impl ThemedButton, title: &str) {
        let disabled = self.attributed_string_for_state(title, ControlState::Disabled, None);
        button.set_attributed_title(disabled, ControlState::Disabled);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn specifier(node: serde_json::Value) -> TextLabelSpecifier {
        TextLabelSpecifier::from_mapping(node.as_object().unwrap(), 0.0)
    }

    #[derive(Default)]
    struct MockLabel {
        text: Option<String>,
        font: Option<FontSpecifier>,
        alignment: Option<TextAlignment>,
        number_of_lines: Option<i64>,
        text_color: Option<Color>,
        background_color: Option<Color>,
        sized_to_fit: bool,
    }

    impl ThemedLabel for MockLabel {
        fn set_text(&mut self, text: &str) {
            self.text = Some(text.to_string());
        }
        fn set_font(&mut self, font: &FontSpecifier) {
            self.font = Some(font.clone());
        }
        fn set_text_alignment(&mut self, alignment: TextAlignment) {
            self.alignment = Some(alignment);
        }
        fn set_number_of_lines(&mut self, lines: i64) {
            self.number_of_lines = Some(lines);
        }
        fn set_text_color(&mut self, color: Color) {
            self.text_color = Some(color);
        }
        fn set_background_color(&mut self, color: Color) {
            self.background_color = Some(color);
        }
        fn size_to_fit(&mut self) {
            self.sized_to_fit = true;
        }
    }

    #[derive(Default)]
    struct MockButton {
        titles: Vec<(ControlState, AttributedString)>,
    }

    impl ThemedButton for MockButton {
        fn set_attributed_title(&mut self, title: AttributedString, state: ControlState) {
            self.titles.push((state, title));
        }
    }

    fn title_for(button: &MockButton, state: ControlState) -> &AttributedString {
        &button
            .titles
            .iter()
            .find(|(s, _)| *s == state)
            .expect("state was not applied")
            .1
    }

    #[test]
    fn test_from_mapping_defaults() {
        let spec = specifier(json!({}));
        assert_eq!(spec.number_of_lines, 1);
        assert_eq!(spec.alignment, TextAlignment::Left);
        assert_eq!(spec.line_break_mode, LineBreakMode::TruncateTail);
        assert_eq!(spec.text_transform, TextCaseTransform::None);
        assert_eq!(spec.color, None);
        assert!(!spec.size_to_fit);
    }

    #[test]
    fn test_transform_text() {
        let upper = specifier(json!({ "textTransform": "uppercase" }));
        assert_eq!(upper.transform_text("abc"), "ABC");
        let lower = specifier(json!({ "textTransform": "lowercase" }));
        assert_eq!(lower.transform_text("ABC"), "abc");
        let none = specifier(json!({ "textTransform": "smallcaps" }));
        assert_eq!(none.transform_text("MiXeD"), "MiXeD");
    }

    #[test]
    fn test_attributes_for_keys_is_restricted() {
        let spec = specifier(json!({
            "font": { "name": "Menlo", "size": 12 },
            "color": { "hex": "112233" },
            "backgroundColor": { "hex": "445566" }
        }));
        let attributes = spec.attributes_for_keys(&[AttributeKey::Font]);
        assert!(attributes.font.is_some());
        assert_eq!(attributes.foreground_color, None);
        assert_eq!(attributes.background_color, None);
        assert_eq!(attributes.paragraph_style, None);

        let full = spec.attributes();
        assert!(full.font.is_some());
        assert_eq!(full.foreground_color, Some(Color::from_rgb8(0x11, 0x22, 0x33)));
        assert_eq!(full.background_color, Some(Color::from_rgb8(0x44, 0x55, 0x66)));
        assert!(full.paragraph_style.is_some());
    }

    #[test]
    fn test_font_and_color_attributes_omits_paragraph_style() {
        let spec = specifier(json!({ "color": { "hex": "112233" } }));
        let attributes = spec.font_and_color_attributes();
        assert!(attributes.font.is_some());
        assert!(attributes.paragraph_style.is_none());
    }

    #[test]
    fn test_paragraph_spacing_absolute_wins_when_multiple_is_zero() {
        let spec = specifier(json!({
            "font": { "name": "Menlo", "size": 10 },
            "paragraphSpacing": 7,
            "paragraphSpacingMultiple": 0
        }));
        assert_eq!(spec.paragraph_style().paragraph_spacing, 7.0);
    }

    #[test]
    fn test_paragraph_spacing_multiple_takes_precedence() {
        let spec = specifier(json!({
            "font": { "name": "Menlo", "size": 10 },
            "paragraphSpacing": 7,
            "paragraphSpacingMultiple": 2
        }));
        assert_eq!(spec.paragraph_style().paragraph_spacing, 20.0);
    }

    #[test]
    fn test_paragraph_spacing_before_mirrors_precedence_rule() {
        let absolute = specifier(json!({
            "font": { "name": "Menlo", "size": 10 },
            "paragraphSpacingBefore": 4
        }));
        assert_eq!(absolute.paragraph_style().paragraph_spacing_before, 4.0);

        let multiple = specifier(json!({
            "font": { "name": "Menlo", "size": 10 },
            "paragraphSpacingBefore": 4,
            "paragraphSpacingBeforeMultiple": 1.5
        }));
        assert_eq!(multiple.paragraph_style().paragraph_spacing_before, 15.0);
    }

    #[test]
    fn test_line_spacing_multiple() {
        let spec = specifier(json!({
            "font": { "name": "Menlo", "size": 12 },
            "lineSpacingMultiple": 0.5
        }));
        assert_eq!(spec.paragraph_style().line_spacing, 6.0);
    }

    #[test]
    fn test_attributed_string_transforms_text() {
        let spec = specifier(json!({ "textTransform": "uppercase" }));
        let attributed = spec.attributed_string("done");
        assert_eq!(attributed.text, "DONE");
        assert_eq!(&attributed.attributes, spec.attributes());
    }

    #[test]
    fn test_highlighted_synthesis_scales_alpha() {
        let spec = specifier(json!({
            "color": { "hex": "FF0000" },
            "backgroundColor": { "hex": "00FF00", "alpha": 0.8 }
        }));
        let highlighted =
            spec.attributed_string_for_state("go", ControlState::Highlighted, Some(0.5));
        let foreground = highlighted.attributes.foreground_color.unwrap();
        assert_eq!(foreground.components[3], 0.5);
        let background = highlighted.attributes.background_color.unwrap();
        assert_eq!(background.components[3], 0.4);
    }

    #[test]
    fn test_highlighted_synthesis_boundary_fractions() {
        let spec = specifier(json!({ "color": { "hex": "FF0000" } }));
        let transparent =
            spec.attributed_string_for_state("go", ControlState::Highlighted, Some(0.0));
        assert_eq!(
            transparent.attributes.foreground_color.unwrap().components[3],
            0.0
        );
        let identical =
            spec.attributed_string_for_state("go", ControlState::Highlighted, Some(1.0));
        assert_eq!(
            identical.attributes.foreground_color,
            Some(Color::from_rgb8(0xFF, 0, 0))
        );
    }

    #[test]
    fn test_explicit_highlighted_color_wins_over_synthesis() {
        let spec = specifier(json!({
            "color": { "hex": "FF0000" },
            "highlightedColor": { "hex": "0000FF" }
        }));
        let highlighted =
            spec.attributed_string_for_state("go", ControlState::Highlighted, Some(0.5));
        assert_eq!(
            highlighted.attributes.foreground_color,
            Some(Color::from_rgb8(0, 0, 0xFF))
        );
    }

    #[test]
    fn test_no_fraction_falls_back_to_normal_colors() {
        let spec = specifier(json!({ "color": { "hex": "FF0000" } }));
        let highlighted =
            spec.attributed_string_for_state("go", ControlState::Highlighted, None);
        assert_eq!(
            highlighted.attributes.foreground_color,
            Some(Color::from_rgb8(0xFF, 0, 0))
        );
    }

    #[test]
    fn test_highlighted_attributed_string_matches_state_variant() {
        let spec = specifier(json!({ "color": { "hex": "FF0000" } }));
        assert_eq!(
            spec.highlighted_attributed_string("go", Some(0.5)),
            spec.attributed_string_for_state("go", ControlState::Highlighted, Some(0.5))
        );
    }

    #[test]
    fn test_disabled_state_uses_disabled_colors() {
        let spec = specifier(json!({
            "color": { "hex": "FF0000" },
            "disabledColor": { "hex": "888888" }
        }));
        let disabled = spec.attributed_string_for_state("go", ControlState::Disabled, None);
        assert_eq!(
            disabled.attributes.foreground_color,
            Some(Color::from_rgb8(0x88, 0x88, 0x88))
        );
    }

    #[test]
    fn test_disabled_synthesis_follows_the_highlighted_rule() {
        let spec = specifier(json!({ "color": { "hex": "FF0000" } }));
        let disabled =
            spec.attributed_string_for_state("go", ControlState::Disabled, Some(0.25));
        assert_eq!(
            disabled.attributes.foreground_color.unwrap().components[3],
            0.25
        );
    }

    #[test]
    fn test_apply_to_label_with_text() {
        let spec = specifier(json!({
            "font": { "name": "Menlo", "size": 12 },
            "textTransform": "uppercase",
            "numberOfLines": 3,
            "alignment": "center",
            "color": { "hex": "112233" },
            "sizeToFit": true
        }));
        let mut label = MockLabel::default();
        spec.apply_to_label_with_text(&mut label, "hello");
        assert_eq!(label.text.as_deref(), Some("HELLO"));
        assert_eq!(label.font.as_ref().unwrap().family.as_deref(), Some("Menlo"));
        assert_eq!(label.alignment, Some(TextAlignment::Center));
        assert_eq!(label.number_of_lines, Some(3));
        assert_eq!(label.text_color, Some(Color::from_rgb8(0x11, 0x22, 0x33)));
        assert_eq!(label.background_color, None);
        assert!(label.sized_to_fit);
    }

    #[test]
    fn test_apply_to_label_leaves_text_alone() {
        let spec = specifier(json!({}));
        let mut label = MockLabel::default();
        spec.apply_to_label(&mut label);
        assert_eq!(label.text, None);
        assert!(label.font.is_some());
    }

    #[test]
    fn test_apply_to_button_fades_highlighted_title() {
        let spec = specifier(json!({ "color": { "hex": "FF0000" } }));
        let mut button = MockButton::default();
        spec.apply_to_button_normal_and_highlighted(&mut button, "Buy");
        let normal = title_for(&button, ControlState::Normal);
        assert_eq!(normal.text, "Buy");
        assert_eq!(
            normal.attributes.foreground_color,
            Some(Color::from_rgb8(0xFF, 0, 0))
        );
        let highlighted = title_for(&button, ControlState::Highlighted);
        assert_eq!(
            highlighted.attributes.foreground_color.unwrap().components[3],
            0.5
        );
    }

    #[test]
    fn test_apply_to_button_disabled() {
        let spec = specifier(json!({
            "color": { "hex": "FF0000" },
            "disabledColor": { "hex": "888888" }
        }));
        let mut button = MockButton::default();
        spec.apply_to_button_disabled(&mut button, "Buy");
        let disabled = title_for(&button, ControlState::Disabled);
        assert_eq!(
            disabled.attributes.foreground_color,
            Some(Color::from_rgb8(0x88, 0x88, 0x88))
        );
    }

    #[test]
    fn test_apply_to_button_for_states() {
        let spec = specifier(json!({ "color": { "hex": "FF0000" } }));
        let mut button = MockButton::default();
        spec.apply_to_button_for_states(
            &mut button,
            "Buy",
            &[ControlState::Normal, ControlState::Highlighted],
        );
        assert_eq!(button.titles.len(), 2);
        // No synthesis without a fraction: highlighted falls back to normal.
        assert_eq!(
            title_for(&button, ControlState::Highlighted)
                .attributes
                .foreground_color,
            Some(Color::from_rgb8(0xFF, 0, 0))
        );
    }
}
