//! # Text Styling Vocabulary
//!
//! The enums and value bundles used to describe styled text: alignment,
//! line breaking, case transforms, and the attribute dictionaries a
//! [TextLabelSpecifier](crate::specifier::TextLabelSpecifier) derives from
//! its resolved fields.
//!
//! An attribute bundle is deliberately close to the attributed-string model
//! of the big UI toolkits: a font, a foreground color, a background color
//! and a paragraph style, any subset of which may be present. The engine
//! only assembles these bundles; rendering them is the embedding toolkit's
//! concern.

use peniko::Color;

use crate::specifier::FontSpecifier;

/// A case transform applied to text at render time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextCaseTransform {
    /// Leave text unchanged.
    #[default]
    None,
    /// Uppercase the text.
    Upper,
    /// Lowercase the text.
    Lower,
}

impl TextCaseTransform {
    /// Parse a transform keyword (`uppercase`/`upper`, `lowercase`/`lower`).
    /// Returns [None] for unrecognized keywords.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_lowercase().as_str() {
            "uppercase" | "upper" => Some(Self::Upper),
            "lowercase" | "lower" => Some(Self::Lower),
            _ => None,
        }
    }

    /// Apply the transform to `text`.
    pub fn apply(&self, text: &str) -> String {
        match self {
            Self::None => text.to_string(),
            Self::Upper => text.to_uppercase(),
            Self::Lower => text.to_lowercase(),
        }
    }
}

/// Horizontal text alignment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TextAlignment {
    /// Left-aligned.
    #[default]
    Left,
    /// Centered.
    Center,
    /// Right-aligned.
    Right,
    /// Fully justified.
    Justified,
    /// Aligned per the script's natural direction.
    Natural,
}

impl TextAlignment {
    /// Parse an alignment keyword. Returns [None] for unrecognized keywords.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_lowercase().as_str() {
            "left" => Some(Self::Left),
            "center" => Some(Self::Center),
            "right" => Some(Self::Right),
            "justified" => Some(Self::Justified),
            "natural" => Some(Self::Natural),
            _ => None,
        }
    }
}

/// How text that does not fit its container is broken or elided.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LineBreakMode {
    /// Wrap at word boundaries.
    WordWrap,
    /// Wrap at character boundaries.
    CharWrap,
    /// Clip overflowing text.
    Clip,
    /// Elide the beginning.
    TruncateHead,
    /// Elide the end.
    #[default]
    TruncateTail,
    /// Elide the middle.
    TruncateMiddle,
}

impl LineBreakMode {
    /// Parse a line-break keyword. Returns [None] for unrecognized keywords.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_lowercase().as_str() {
            "wordwrap" => Some(Self::WordWrap),
            "charwrap" => Some(Self::CharWrap),
            "clip" => Some(Self::Clip),
            "truncatehead" => Some(Self::TruncateHead),
            "truncatetail" => Some(Self::TruncateTail),
            "truncatemiddle" => Some(Self::TruncateMiddle),
            _ => None,
        }
    }
}

/// The kinds of attribute a text bundle can carry.
///
/// Used to restrict [attribute construction](crate::specifier::TextLabelSpecifier::attributes_for_keys)
/// to a subset of the full bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AttributeKey {
    /// The font.
    Font,
    /// The foreground (text) color.
    ForegroundColor,
    /// The background color behind the text.
    BackgroundColor,
    /// The derived paragraph style.
    ParagraphStyle,
}

impl AttributeKey {
    /// Every attribute kind, in bundle order.
    pub const ALL: [AttributeKey; 4] = [
        AttributeKey::Font,
        AttributeKey::ForegroundColor,
        AttributeKey::BackgroundColor,
        AttributeKey::ParagraphStyle,
    ];
}

/// Paragraph-level layout attributes derived from a text label specifier.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct ParagraphStyle {
    /// Horizontal alignment.
    pub alignment: TextAlignment,
    /// Line-break behavior.
    pub line_break_mode: LineBreakMode,
    /// Space after each paragraph, in points.
    pub paragraph_spacing: f64,
    /// Space before each paragraph, in points.
    pub paragraph_spacing_before: f64,
    /// Extra space between lines, in points.
    pub line_spacing: f64,
}

/// A bundle of style attributes suitable for building styled text.
///
/// Each field is optional; bundles built for a subset of
/// [AttributeKey]s leave the other fields unset.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TextAttributes {
    /// The font, if requested and resolved.
    pub font: Option<FontSpecifier>,
    /// The foreground color, if requested and resolved.
    pub foreground_color: Option<Color>,
    /// The background color, if requested and resolved.
    pub background_color: Option<Color>,
    /// The derived paragraph style, if requested.
    pub paragraph_style: Option<ParagraphStyle>,
}

/// A piece of text with an attached attribute bundle.
#[derive(Debug, Clone, PartialEq)]
pub struct AttributedString {
    /// The (already transformed) text.
    pub text: String,
    /// The attributes to render the text with.
    pub attributes: TextAttributes,
}

impl AttributedString {
    /// Create an attributed string from text and attributes.
    pub fn new(text: impl Into<String>, attributes: TextAttributes) -> Self {
        Self {
            text: text.into(),
            attributes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_case_transform() {
        assert_eq!(TextCaseTransform::Upper.apply("abc"), "ABC");
        assert_eq!(TextCaseTransform::Lower.apply("ABC"), "abc");
        assert_eq!(TextCaseTransform::None.apply("MiXeD"), "MiXeD");
    }

    #[test]
    fn test_case_transform_keywords() {
        assert_eq!(
            TextCaseTransform::from_keyword("UPPERCASE"),
            Some(TextCaseTransform::Upper)
        );
        assert_eq!(
            TextCaseTransform::from_keyword("lower"),
            Some(TextCaseTransform::Lower)
        );
        assert_eq!(TextCaseTransform::from_keyword("title"), None);
    }

    #[test]
    fn test_alignment_keywords() {
        assert_eq!(TextAlignment::from_keyword("Center"), Some(TextAlignment::Center));
        assert_eq!(TextAlignment::from_keyword("natural"), Some(TextAlignment::Natural));
        assert_eq!(TextAlignment::from_keyword("middle"), None);
    }

    #[test]
    fn test_line_break_keywords() {
        assert_eq!(
            LineBreakMode::from_keyword("truncatemiddle"),
            Some(LineBreakMode::TruncateMiddle)
        );
        assert_eq!(LineBreakMode::from_keyword("WordWrap"), Some(LineBreakMode::WordWrap));
        assert_eq!(LineBreakMode::from_keyword("ellipsis"), None);
    }
}
