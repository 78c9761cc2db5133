//! # Coercion Layer
//!
//! Total conversion functions from raw mapping nodes to typed primitives.
//!
//! Theme data is hand-authored configuration, not adversarial input, so
//! every function here degrades instead of failing: a missing node, a node
//! of the wrong shape, or an unrecognized keyword resolves to the
//! documented neutral default for its type. Mismatches are reported on the
//! `log` diagnostic channel for tooling; they never surface to callers.
//!
//! All functions take `Option<&Value>` so lookups can be piped straight
//! through without unwrapping.

use std::time::Duration;

use kurbo::{Insets, Point, Size};
use peniko::Color;
use serde_json::{Map, Value};

use crate::attributes::{LineBreakMode, TextAlignment, TextCaseTransform};
use crate::platform::{BarStyle, BlurEffectStyle, KeyboardAppearance, StatusBarStyle};
use crate::specifier::font::FALLBACK_POINT_SIZE;
use crate::specifier::{AnimationCurve, FontSpecifier, FontWeight};

/// Coerce a node to a boolean. Default: `false`.
pub fn boolean(node: Option<&Value>) -> bool {
    match node {
        Some(Value::Bool(value)) => *value,
        Some(other) => {
            log::debug!("expected a boolean, found {other}");
            false
        }
        None => false,
    }
}

/// Coerce a node to a signed integer. Default: `0`.
///
/// Fractional numbers are truncated toward zero.
pub fn integer(node: Option<&Value>) -> i64 {
    match node {
        Some(Value::Number(number)) => number
            .as_i64()
            .or_else(|| number.as_f64().map(|value| value as i64))
            .unwrap_or(0),
        Some(other) => {
            log::debug!("expected an integer, found {other}");
            0
        }
        None => 0,
    }
}

/// Coerce a node to a float. Default: `0.0`.
pub fn float(node: Option<&Value>) -> f64 {
    match node {
        Some(Value::Number(number)) => number.as_f64().unwrap_or(0.0),
        Some(other) => {
            log::debug!("expected a number, found {other}");
            0.0
        }
        None => 0.0,
    }
}

/// Coerce a node to a string. Numbers are stringified; anything else is
/// [None].
pub fn string(node: Option<&Value>) -> Option<String> {
    match node {
        Some(Value::String(value)) => Some(value.clone()),
        Some(Value::Number(number)) => Some(number.to_string()),
        _ => None,
    }
}

/// Coerce a node to a time interval in seconds. Default: zero.
///
/// Negative and non-finite values clamp to zero.
pub fn time_interval(node: Option<&Value>) -> Duration {
    let seconds = float(node);
    if seconds.is_finite() && seconds > 0.0 {
        Duration::from_secs_f64(seconds)
    } else {
        Duration::ZERO
    }
}

/// View a node as a mapping, if it is one.
pub fn mapping(node: Option<&Value>) -> Option<&Map<String, Value>> {
    match node {
        Some(Value::Object(map)) => Some(map),
        _ => None,
    }
}

/// Parse a 6-hex-digit RGB string, with an optional leading `#`.
/// Returns [None] if the string is not exactly six hex digits.
pub fn parse_hex_color(hex: &str) -> Option<Color> {
    let hex = hex.trim().trim_start_matches('#');
    if hex.len() != 6 {
        return None;
    }
    let r = u8::from_str_radix(&hex[0..2], 16).ok()?;
    let g = u8::from_str_radix(&hex[2..4], 16).ok()?;
    let b = u8::from_str_radix(&hex[4..6], 16).ok()?;
    Some(Color::from_rgb8(r, g, b))
}

/// Coerce a color mapping node to a color. Default: opaque black.
///
/// The mapping carries a `hex` key (`"1A2B3C"` or `"#1A2B3C"`) and an
/// optional `alpha` in `[0, 1]`; omitting `alpha` yields full opacity. A
/// mapping with no `hex` but an explicit `alpha` of `0` is fully
/// transparent. Everything else malformed resolves to opaque black.
pub fn color(node: Option<&Value>) -> Color {
    optional_color(node).unwrap_or(Color::BLACK)
}

/// Like [color], but distinguishes "no color configured" ([None], the node
/// is not a mapping) from a configured color. Composite specifiers use
/// this to leave unset color roles empty.
pub fn optional_color(node: Option<&Value>) -> Option<Color> {
    let map = mapping(node)?;
    Some(color_from_mapping(map))
}

fn color_from_mapping(map: &Map<String, Value>) -> Color {
    let alpha_node = map.get("alpha");
    if let Some(hex) = map.get("hex").and_then(Value::as_str) {
        let Some(base) = parse_hex_color(hex) else {
            log::warn!("malformed hex color {hex:?}");
            return Color::BLACK;
        };
        if alpha_node.is_some() {
            let alpha = float(alpha_node).clamp(0.0, 1.0) as f32;
            base.with_alpha(alpha)
        } else {
            base
        }
    } else if alpha_node.is_some() && float(alpha_node) == 0.0 {
        Color::TRANSPARENT
    } else {
        log::warn!("color mapping has no usable hex value");
        Color::BLACK
    }
}

/// Coerce an insets mapping (`top`/`left`/`bottom`/`right`) to edge
/// insets. Each side defaults to zero.
pub fn edge_insets(node: Option<&Value>) -> Insets {
    let map = mapping(node);
    Insets::new(
        float(map.and_then(|m| m.get("left"))),
        float(map.and_then(|m| m.get("top"))),
        float(map.and_then(|m| m.get("right"))),
        float(map.and_then(|m| m.get("bottom"))),
    )
}

/// Coerce a point mapping (`x`/`y`) to a point. Coordinates default to zero.
pub fn point(node: Option<&Value>) -> Point {
    let map = mapping(node);
    Point::new(
        float(map.and_then(|m| m.get("x"))),
        float(map.and_then(|m| m.get("y"))),
    )
}

/// Coerce a size mapping (`width`/`height`) to a size. Dimensions default
/// to zero.
pub fn size(node: Option<&Value>) -> Size {
    let map = mapping(node);
    Size::new(
        float(map.and_then(|m| m.get("width"))),
        float(map.and_then(|m| m.get("height"))),
    )
}

/// Coerce a font mapping (`name`/`size`, optional `weight`) to a font
/// specifier, applying an additive point-size adjustment.
///
/// A missing or empty family name requests the platform default family. An
/// adjusted size below one point falls back to
/// [the default size](FontSpecifier::default).
pub fn font(node: Option<&Value>, size_adjustment: f64) -> FontSpecifier {
    let map = mapping(node);
    let family = map
        .and_then(|m| string(m.get("name")))
        .filter(|name| !name.is_empty());
    let mut size = float(map.and_then(|m| m.get("size"))) + size_adjustment;
    if size < 1.0 {
        size = FALLBACK_POINT_SIZE;
    }
    let weight = map
        .and_then(|m| string(m.get("weight")))
        .and_then(|keyword| FontWeight::from_keyword(&keyword));
    FontSpecifier {
        family,
        size,
        weight,
    }
}

/// Like [font], but [None] when the node is not a mapping at all. Used for
/// optional font roles (bold/italic variants).
pub fn optional_font(node: Option<&Value>, size_adjustment: f64) -> Option<FontSpecifier> {
    mapping(node)?;
    Some(font(node, size_adjustment))
}

fn keyword_or<T: Copy>(
    node: Option<&Value>,
    kind: &str,
    parse: impl Fn(&str) -> Option<T>,
    default: T,
) -> T {
    let Some(keyword) = string(node).filter(|s| !s.is_empty()) else {
        return default;
    };
    match parse(&keyword) {
        Some(value) => value,
        None => {
            log::debug!("unrecognized {kind} keyword {keyword:?}");
            default
        }
    }
}

/// Coerce a case-transform keyword. Default: no transform.
pub fn text_case_transform(node: Option<&Value>) -> TextCaseTransform {
    keyword_or(
        node,
        "text case transform",
        TextCaseTransform::from_keyword,
        TextCaseTransform::None,
    )
}

/// Coerce a text-alignment keyword. Default: left.
pub fn text_alignment(node: Option<&Value>) -> TextAlignment {
    keyword_or(
        node,
        "text alignment",
        TextAlignment::from_keyword,
        TextAlignment::Left,
    )
}

/// Coerce a line-break keyword. Default: truncate the tail.
pub fn line_break_mode(node: Option<&Value>) -> LineBreakMode {
    keyword_or(
        node,
        "line break mode",
        LineBreakMode::from_keyword,
        LineBreakMode::TruncateTail,
    )
}

/// Coerce a status-bar keyword. Default: the platform default style.
pub fn status_bar_style(node: Option<&Value>) -> StatusBarStyle {
    keyword_or(
        node,
        "status bar style",
        StatusBarStyle::from_keyword,
        StatusBarStyle::Default,
    )
}

/// Coerce a blur keyword. Default: extra light.
pub fn blur_effect_style(node: Option<&Value>) -> BlurEffectStyle {
    keyword_or(
        node,
        "blur effect style",
        BlurEffectStyle::from_keyword,
        BlurEffectStyle::ExtraLight,
    )
}

/// Coerce a bar-style keyword. Default: the platform default style.
pub fn bar_style(node: Option<&Value>) -> BarStyle {
    keyword_or(node, "bar style", BarStyle::from_keyword, BarStyle::Default)
}

/// Coerce a keyboard keyword. Default: the platform default keyboard.
pub fn keyboard_appearance(node: Option<&Value>) -> KeyboardAppearance {
    keyword_or(
        node,
        "keyboard appearance",
        KeyboardAppearance::from_keyword,
        KeyboardAppearance::Default,
    )
}

/// Coerce an easing-curve keyword. Default: ease in and out.
pub fn animation_curve(node: Option<&Value>) -> AnimationCurve {
    keyword_or(
        node,
        "animation curve",
        AnimationCurve::from_keyword,
        AnimationCurve::EaseInOut,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_scalar_defaults() {
        assert!(!boolean(None));
        assert_eq!(integer(None), 0);
        assert_eq!(float(None), 0.0);
        assert_eq!(string(None), None);
        assert_eq!(time_interval(None), Duration::ZERO);
    }

    #[test]
    fn test_scalar_coercion() {
        assert!(boolean(Some(&json!(true))));
        assert!(!boolean(Some(&json!("yes"))));
        assert_eq!(integer(Some(&json!(12))), 12);
        assert_eq!(integer(Some(&json!(3.7))), 3);
        assert_eq!(float(Some(&json!(0.25))), 0.25);
        assert_eq!(string(Some(&json!("menlo"))).as_deref(), Some("menlo"));
        assert_eq!(string(Some(&json!(15))).as_deref(), Some("15"));
        assert_eq!(
            time_interval(Some(&json!(0.25))),
            Duration::from_millis(250)
        );
        assert_eq!(time_interval(Some(&json!(-3))), Duration::ZERO);
    }

    #[test]
    fn test_hex_color_leading_hash_is_optional() {
        let plain = color(Some(&json!({ "hex": "1A2B3C" })));
        let hashed = color(Some(&json!({ "hex": "#1A2B3C" })));
        assert_eq!(plain, hashed);
        assert_eq!(plain, Color::from_rgb8(0x1A, 0x2B, 0x3C));
    }

    #[test]
    fn test_color_alpha() {
        let translucent = color(Some(&json!({ "hex": "FF0000", "alpha": 0.5 })));
        assert_eq!(translucent.components[3], 0.5);
        let opaque = color(Some(&json!({ "hex": "FF0000" })));
        assert_eq!(opaque.components[3], 1.0);
    }

    #[test]
    fn test_color_alpha_zero_without_hex_is_transparent() {
        let clear = color(Some(&json!({ "alpha": 0 })));
        assert_eq!(clear, Color::TRANSPARENT);
    }

    #[test]
    fn test_color_fallbacks() {
        assert_eq!(color(None), Color::BLACK);
        assert_eq!(color(Some(&json!("red"))), Color::BLACK);
        assert_eq!(color(Some(&json!({ "hex": "12345" }))), Color::BLACK);
        assert_eq!(color(Some(&json!({ "alpha": 0.5 }))), Color::BLACK);
        assert_eq!(optional_color(Some(&json!("red"))), None);
        assert_eq!(optional_color(None), None);
    }

    #[test]
    fn test_edge_insets_sides_default_to_zero() {
        let insets = edge_insets(Some(&json!({ "top": 4, "left": 8 })));
        assert_eq!(insets, Insets::new(8.0, 4.0, 0.0, 0.0));
        assert_eq!(edge_insets(None), Insets::ZERO);
    }

    #[test]
    fn test_point_and_size() {
        assert_eq!(
            point(Some(&json!({ "x": 10, "y": 20.5 }))),
            Point::new(10.0, 20.5)
        );
        assert_eq!(point(Some(&json!({ "y": 3 }))), Point::new(0.0, 3.0));
        assert_eq!(
            size(Some(&json!({ "width": 44, "height": 44 }))),
            Size::new(44.0, 44.0)
        );
        assert_eq!(size(None), Size::ZERO);
    }

    #[test]
    fn test_font_with_adjustment() {
        let node = json!({ "name": "AvenirNext-Regular", "size": 17 });
        let font = font(Some(&node), 2.0);
        assert_eq!(font.family.as_deref(), Some("AvenirNext-Regular"));
        assert_eq!(font.size, 19.0);
        assert_eq!(font.weight, None);
    }

    #[test]
    fn test_font_size_floor() {
        let node = json!({ "name": "Menlo", "size": 10 });
        let shrunk = font(Some(&node), -9.5);
        assert_eq!(shrunk.size, FALLBACK_POINT_SIZE);
        let missing = font(None, 0.0);
        assert_eq!(missing.size, FALLBACK_POINT_SIZE);
        assert_eq!(missing.family, None);
    }

    #[test]
    fn test_font_weight_and_empty_name() {
        let node = json!({ "name": "", "size": 13, "weight": "Semibold" });
        let font = font(Some(&node), 0.0);
        assert_eq!(font.family, None);
        assert_eq!(font.weight, Some(FontWeight::Semibold));
    }

    #[test]
    fn test_keyword_defaults() {
        assert_eq!(text_case_transform(None), TextCaseTransform::None);
        assert_eq!(
            text_case_transform(Some(&json!("smallcaps"))),
            TextCaseTransform::None
        );
        assert_eq!(text_alignment(Some(&json!("bogus"))), TextAlignment::Left);
        assert_eq!(line_break_mode(None), LineBreakMode::TruncateTail);
        assert_eq!(status_bar_style(None), StatusBarStyle::Default);
        assert_eq!(blur_effect_style(None), BlurEffectStyle::ExtraLight);
        assert_eq!(bar_style(Some(&json!(42))), BarStyle::Default);
        assert_eq!(keyboard_appearance(None), KeyboardAppearance::Default);
        assert_eq!(animation_curve(None), AnimationCurve::EaseInOut);
    }

    #[test]
    fn test_keyword_case_insensitive() {
        assert_eq!(
            text_alignment(Some(&json!("CENTER"))),
            TextAlignment::Center
        );
        assert_eq!(
            line_break_mode(Some(&json!("TruncateMiddle"))),
            LineBreakMode::TruncateMiddle
        );
        assert_eq!(animation_curve(Some(&json!("EaseOut"))), AnimationCurve::EaseOut);
    }
}
