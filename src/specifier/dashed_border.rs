//! Dashed border descriptions.

use kurbo::Insets;
use peniko::Color;
use serde_json::{Map, Value};

use crate::coerce;

/// Resolved parameters for drawing a dashed border.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct DashedBorderSpecifier {
    /// Stroke width of the border line.
    pub line_width: f64,
    /// The stroke color, if configured.
    pub color: Option<Color>,
    /// Corner radius of the border path.
    pub corner_radius: f64,
    /// Length of each painted dash segment.
    pub painted_segment_length: f64,
    /// Length of the gap between dash segments.
    pub spacing_segment_length: f64,
    /// Insets of the border path from the element's bounds.
    pub insets: Insets,
}

impl DashedBorderSpecifier {
    /// Build a specifier from a dashed-border mapping.
    pub fn from_mapping(mapping: &Map<String, Value>) -> Self {
        Self {
            line_width: coerce::float(mapping.get("lineWidth")),
            color: coerce::optional_color(mapping.get("color")),
            corner_radius: coerce::float(mapping.get("cornerRadius")),
            painted_segment_length: coerce::float(mapping.get("paintedSegmentLength")),
            spacing_segment_length: coerce::float(mapping.get("spacingSegmentLength")),
            insets: coerce::edge_insets(mapping.get("insets")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_from_mapping() {
        let node = json!({
            "lineWidth": 2,
            "color": { "hex": "FF0000" },
            "cornerRadius": 4,
            "paintedSegmentLength": 3,
            "spacingSegmentLength": 1.5,
            "insets": { "top": 1, "left": 1, "bottom": 1, "right": 1 }
        });
        let spec = DashedBorderSpecifier::from_mapping(node.as_object().unwrap());
        assert_eq!(spec.line_width, 2.0);
        assert_eq!(spec.color, Some(Color::from_rgb8(0xFF, 0, 0)));
        assert_eq!(spec.corner_radius, 4.0);
        assert_eq!(spec.painted_segment_length, 3.0);
        assert_eq!(spec.spacing_segment_length, 1.5);
        assert_eq!(spec.insets, Insets::uniform(1.0));
    }

    #[test]
    fn test_missing_fields_default() {
        let node = json!({});
        let spec = DashedBorderSpecifier::from_mapping(node.as_object().unwrap());
        assert_eq!(spec, DashedBorderSpecifier::default());
    }
}
