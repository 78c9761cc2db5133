//! # Theme Resolution and Caching
//!
//! [Theme] is the central component of the engine: it owns a raw key→value
//! mapping, an optional parent theme to inherit from, and one lazy cache
//! per derived-type family, and exposes the full family of typed accessors
//! built on the [coercion layer](crate::coerce).
//!
//! Every typed accessor is a total function: a key missing from the theme
//! and its whole ancestor chain, or a malformed value, resolves to the
//! type's documented neutral default, never an error. The only boolean
//! questions are [Theme::contains_key] and
//! [Theme::contains_or_inherits_key].
//!
//! ## Lookup
//!
//! A lookup first consults the per-type cache (where the type has one), then
//! the theme's own mapping (the key verbatim, then as a `.`-separated path
//! through nested mappings), and finally delegates to the parent theme,
//! recursively through the whole chain. Resolved values are cached before
//! they are returned; caches are only ever invalidated wholesale through
//! the `clear_*_cache` operations.
//!
//! ```
//! use livery::theme::Theme;
//! use serde_json::json;
//!
//! let theme = Theme::from_value(
//!     "default",
//!     json!({
//!         "titleColor": { "hex": "333333" },
//!         "titleFont": { "name": "AvenirNext-Medium", "size": 17 }
//!     }),
//! )
//! .unwrap();
//!
//! let color = theme.color_for_key("titleColor");
//! let font = theme.font_for_key("titleFont");
//! assert_eq!(font.size, 17.0);
//! # let _ = color;
//! ```
//!
//! ## Threading
//!
//! Styling is expected to happen on one thread, but nothing here requires
//! it: the caches sit behind [RwLock]s, all accessors take `&self`, and
//! cache population is idempotent, so a lost race costs at most a
//! recomputation.

use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::Duration;

use kurbo::{Insets, Point, Size};
use peniko::Color;
use serde_json::{Map, Value};

use crate::apply::{AnimationRunner, ImageProvider};
use crate::attributes::{LineBreakMode, TextAlignment, TextCaseTransform};
use crate::coerce;
use crate::error::{ThemeError, ThemeResult};
use crate::platform::{BarStyle, BlurEffectStyle, KeyboardAppearance, StatusBarStyle};
use crate::specifier::{
    AnimationSpecifier, DashedBorderSpecifier, FontSpecifier, NavigationBarSpecifier,
    TextLabelSpecifier, ViewSpecifier,
};

/// Upper bound on parent-chain walks. A chain this deep is a configuration
/// mistake; the walk stops instead of recursing unboundedly.
const MAX_INHERITANCE_DEPTH: usize = 16;

/// A named, inheritable bundle of style key→value mappings with typed,
/// cached accessors.
///
/// Themes compare equal when their names are equal. The raw mapping is
/// never mutated after construction; the only interior mutability is the
/// per-type caches.
#[derive(Debug)]
pub struct Theme {
    name: String,
    mapping: Map<String, Value>,
    parent: Option<Arc<Theme>>,
    color_cache: RwLock<HashMap<String, Color>>,
    font_cache: RwLock<HashMap<String, FontSpecifier>>,
    view_specifier_cache: RwLock<HashMap<String, ViewSpecifier>>,
    navigation_bar_specifier_cache: RwLock<HashMap<String, NavigationBarSpecifier>>,
    text_label_specifier_cache: RwLock<HashMap<String, TextLabelSpecifier>>,
}

impl PartialEq for Theme {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Theme {}

impl Theme {
    /// Create a theme from a name and a raw mapping.
    pub fn new(name: impl Into<String>, mapping: Map<String, Value>) -> Self {
        Self {
            name: name.into(),
            mapping,
            parent: None,
            color_cache: RwLock::new(HashMap::new()),
            font_cache: RwLock::new(HashMap::new()),
            view_specifier_cache: RwLock::new(HashMap::new()),
            navigation_bar_specifier_cache: RwLock::new(HashMap::new()),
            text_label_specifier_cache: RwLock::new(HashMap::new()),
        }
    }

    /// Create a theme from a name and a pre-parsed value, which must be an
    /// object node.
    pub fn from_value(name: impl Into<String>, value: Value) -> ThemeResult<Self> {
        let name = name.into();
        match value {
            Value::Object(mapping) => Ok(Self::new(name, mapping)),
            _ => Err(ThemeError::mapping_shape(name)),
        }
    }

    /// Set the parent theme this theme inherits from.
    ///
    /// Parents are set at construction time, before the theme itself is
    /// shared, so a chain can only be built from themes that already
    /// exist; see [ThemeRegistry](crate::registry::ThemeRegistry).
    pub fn with_parent(mut self, parent: Arc<Theme>) -> Self {
        self.parent = Some(parent);
        self
    }

    /// The theme's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The parent theme, if any.
    pub fn parent(&self) -> Option<&Theme> {
        self.parent.as_deref()
    }

    // Raw lookup

    /// Look up a raw value in this theme's own mapping: the key verbatim,
    /// then as a `.`-separated path through nested mappings.
    fn local_value(&self, key: &str) -> Option<&Value> {
        if let Some(value) = self.mapping.get(key) {
            return Some(value);
        }
        if !key.contains('.') {
            return None;
        }
        let mut parts = key.split('.');
        let mut node = self.mapping.get(parts.next()?)?;
        for part in parts {
            node = node.as_object()?.get(part)?;
        }
        Some(node)
    }

    /// Look up a raw value, delegating to the parent chain when this theme
    /// does not provide the key.
    pub fn value_for_key(&self, key: &str) -> Option<&Value> {
        let mut theme = self;
        for _ in 0..MAX_INHERITANCE_DEPTH {
            if let Some(value) = theme.local_value(key) {
                return Some(value);
            }
            theme = theme.parent.as_deref()?;
        }
        log::warn!(
            "theme '{}': inheritance chain deeper than {MAX_INHERITANCE_DEPTH} levels, \
             giving up on key {key:?}",
            self.name
        );
        None
    }

    /// Whether this theme itself provides the key (no inheritance).
    pub fn contains_key(&self, key: &str) -> bool {
        self.local_value(key).is_some()
    }

    /// Whether this theme or any ancestor provides the key.
    pub fn contains_or_inherits_key(&self, key: &str) -> bool {
        self.value_for_key(key).is_some()
    }

    // Scalar accessors

    /// The boolean for `key`. Default: `false`.
    pub fn bool_for_key(&self, key: &str) -> bool {
        coerce::boolean(self.value_for_key(key))
    }

    /// The string for `key`. Default: the empty string.
    pub fn string_for_key(&self, key: &str) -> String {
        coerce::string(self.value_for_key(key)).unwrap_or_default()
    }

    /// The integer for `key`. Default: `0`.
    pub fn integer_for_key(&self, key: &str) -> i64 {
        coerce::integer(self.value_for_key(key))
    }

    /// The float for `key`. Default: `0.0`.
    pub fn float_for_key(&self, key: &str) -> f64 {
        coerce::float(self.value_for_key(key))
    }

    /// The time interval for `key`. Default: zero.
    pub fn time_interval_for_key(&self, key: &str) -> Duration {
        coerce::time_interval(self.value_for_key(key))
    }

    // Geometry and color accessors

    /// The edge insets for `key`. Absent sides default to zero.
    pub fn edge_insets_for_key(&self, key: &str) -> Insets {
        coerce::edge_insets(self.value_for_key(key))
    }

    /// The point for `key`. Absent coordinates default to zero.
    pub fn point_for_key(&self, key: &str) -> Point {
        coerce::point(self.value_for_key(key))
    }

    /// The size for `key`. Absent dimensions default to zero.
    pub fn size_for_key(&self, key: &str) -> Size {
        coerce::size(self.value_for_key(key))
    }

    /// The color for `key`, cached. Default: opaque black.
    pub fn color_for_key(&self, key: &str) -> Color {
        cached(&self.color_cache, key, || {
            Some(coerce::color(self.value_for_key(key)))
        })
        .unwrap_or(Color::BLACK)
    }

    /// The font for `key`, cached.
    pub fn font_for_key(&self, key: &str) -> FontSpecifier {
        self.font_for_key_adjusted(key, 0.0)
    }

    /// The font for `key` with an additive point-size adjustment applied
    /// after lookup, cached per key and adjustment.
    pub fn font_for_key_adjusted(&self, key: &str, size_adjustment: f64) -> FontSpecifier {
        cached(&self.font_cache, &composite_key(key, size_adjustment), || {
            Some(coerce::font(self.value_for_key(key), size_adjustment))
        })
        .unwrap_or_default()
    }

    /// The image for `key`: resolves the configured asset name, then asks
    /// the platform's asset system for it.
    pub fn image_for_key<P: ImageProvider>(&self, key: &str, provider: &P) -> Option<P::Image> {
        let name = coerce::string(self.value_for_key(key)).filter(|name| !name.is_empty())?;
        provider.image_named(&name)
    }

    // Keyword accessors

    /// The case transform for `key`. Default: no transform.
    pub fn text_case_transform_for_key(&self, key: &str) -> TextCaseTransform {
        coerce::text_case_transform(self.value_for_key(key))
    }

    /// The text alignment for `key`. Default: left.
    pub fn text_alignment_for_key(&self, key: &str) -> TextAlignment {
        coerce::text_alignment(self.value_for_key(key))
    }

    /// The line-break mode for `key`. Default: truncate the tail.
    pub fn line_break_mode_for_key(&self, key: &str) -> LineBreakMode {
        coerce::line_break_mode(self.value_for_key(key))
    }

    /// The status-bar style for `key`. Default: the platform default.
    pub fn status_bar_style_for_key(&self, key: &str) -> StatusBarStyle {
        coerce::status_bar_style(self.value_for_key(key))
    }

    /// The blur style for `key`. Default: extra light.
    pub fn blur_effect_style_for_key(&self, key: &str) -> BlurEffectStyle {
        coerce::blur_effect_style(self.value_for_key(key))
    }

    /// The bar style for `key`. Default: the platform default.
    pub fn bar_style_for_key(&self, key: &str) -> BarStyle {
        coerce::bar_style(self.value_for_key(key))
    }

    /// The keyboard appearance for `key`. Default: the platform default.
    pub fn keyboard_appearance_for_key(&self, key: &str) -> KeyboardAppearance {
        coerce::keyboard_appearance(self.value_for_key(key))
    }

    // Specifier accessors

    /// The animation specifier for `key`, or [None] when the key does not
    /// resolve to a mapping.
    pub fn animation_specifier_for_key(&self, key: &str) -> Option<AnimationSpecifier> {
        coerce::mapping(self.value_for_key(key)).map(AnimationSpecifier::from_mapping)
    }

    /// The view specifier for `key`, cached, or [None] when the key does
    /// not resolve to a mapping.
    pub fn view_specifier_for_key(&self, key: &str) -> Option<ViewSpecifier> {
        cached(&self.view_specifier_cache, key, || {
            coerce::mapping(self.value_for_key(key)).map(ViewSpecifier::from_mapping)
        })
    }

    /// The navigation-bar specifier for `key`, cached, or [None] when the
    /// key does not resolve to a mapping.
    pub fn navigation_bar_specifier_for_key(&self, key: &str) -> Option<NavigationBarSpecifier> {
        self.navigation_bar_specifier_for_key_adjusted(key, 0.0)
    }

    /// Like [navigation_bar_specifier_for_key](Self::navigation_bar_specifier_for_key),
    /// with an additive point-size adjustment applied to the title and
    /// button fonts.
    pub fn navigation_bar_specifier_for_key_adjusted(
        &self,
        key: &str,
        size_adjustment: f64,
    ) -> Option<NavigationBarSpecifier> {
        cached(
            &self.navigation_bar_specifier_cache,
            &composite_key(key, size_adjustment),
            || {
                coerce::mapping(self.value_for_key(key))
                    .map(|mapping| NavigationBarSpecifier::from_mapping(mapping, size_adjustment))
            },
        )
    }

    /// The text-label specifier for `key`, cached, or [None] when the key
    /// does not resolve to a mapping.
    pub fn text_label_specifier_for_key(&self, key: &str) -> Option<TextLabelSpecifier> {
        self.text_label_specifier_for_key_adjusted(key, 0.0)
    }

    /// Like [text_label_specifier_for_key](Self::text_label_specifier_for_key),
    /// with an additive point-size adjustment applied to every font in the
    /// specifier.
    pub fn text_label_specifier_for_key_adjusted(
        &self,
        key: &str,
        size_adjustment: f64,
    ) -> Option<TextLabelSpecifier> {
        cached(
            &self.text_label_specifier_cache,
            &composite_key(key, size_adjustment),
            || {
                coerce::mapping(self.value_for_key(key))
                    .map(|mapping| TextLabelSpecifier::from_mapping(mapping, size_adjustment))
            },
        )
    }

    /// The dashed-border specifier for `key`, or [None] when the key does
    /// not resolve to a mapping.
    pub fn dashed_border_specifier_for_key(&self, key: &str) -> Option<DashedBorderSpecifier> {
        coerce::mapping(self.value_for_key(key)).map(DashedBorderSpecifier::from_mapping)
    }

    // Animation

    /// Resolve an animation specifier by key and hand it to the platform's
    /// animation runner together with the work and completion closures.
    ///
    /// A key that does not resolve is logged and animated with default
    /// parameters, keeping the call total.
    pub fn animate_with_specifier_key<R>(
        &self,
        key: &str,
        runner: &R,
        animations: Box<dyn FnOnce()>,
        completion: Box<dyn FnOnce(bool)>,
    ) where
        R: AnimationRunner + ?Sized,
    {
        let specifier = self.animation_specifier_for_key(key).unwrap_or_else(|| {
            log::warn!(
                "theme '{}': no animation specifier for key {key:?}, animating with defaults",
                self.name
            );
            AnimationSpecifier::default()
        });
        runner.animate(&specifier, animations, completion);
    }

    // Cache clearing

    /// Drop every cached font. Subsequent lookups recompute.
    pub fn clear_font_cache(&self) {
        if let Ok(mut cache) = self.font_cache.write() {
            cache.clear();
        }
    }

    /// Drop every cached color. Subsequent lookups recompute.
    pub fn clear_color_cache(&self) {
        if let Ok(mut cache) = self.color_cache.write() {
            cache.clear();
        }
    }

    /// Drop every cached view specifier. Subsequent lookups recompute.
    pub fn clear_view_specifier_cache(&self) {
        if let Ok(mut cache) = self.view_specifier_cache.write() {
            cache.clear();
        }
    }

    /// Drop every cached navigation-bar specifier. Subsequent lookups
    /// recompute.
    pub fn clear_navigation_bar_specifier_cache(&self) {
        if let Ok(mut cache) = self.navigation_bar_specifier_cache.write() {
            cache.clear();
        }
    }

    /// Drop every cached text-label specifier. Subsequent lookups
    /// recompute.
    pub fn clear_text_label_specifier_cache(&self) {
        if let Ok(mut cache) = self.text_label_specifier_cache.write() {
            cache.clear();
        }
    }
}

/// Cache key for lookups parameterized by a size adjustment.
fn composite_key(key: &str, size_adjustment: f64) -> String {
    format!("{key}|{size_adjustment:.2}")
}

/// Consult a cache, resolving and populating on miss. A poisoned lock
/// degrades to recomputation; cache population is idempotent, so losing a
/// race only costs the redundant work.
fn cached<T: Clone>(
    cache: &RwLock<HashMap<String, T>>,
    cache_key: &str,
    resolve: impl FnOnce() -> Option<T>,
) -> Option<T> {
    if let Ok(cache) = cache.read() {
        if let Some(hit) = cache.get(cache_key) {
            return Some(hit.clone());
        }
    }
    let value = resolve()?;
    if let Ok(mut cache) = cache.write() {
        cache.insert(cache_key.to_string(), value.clone());
    }
    Some(value)
}
