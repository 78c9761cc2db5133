//! Font descriptions resolved from a theme.
//!
//! The engine never loads font data itself; a [FontSpecifier] is the
//! name-and-metrics bundle the embedding toolkit hands to its own font
//! system.

/// A font weight keyword.
///
/// Weights are matched case-insensitively from the theme value; an
/// unrecognized keyword resolves to no weight at all, leaving the choice
/// to the platform font system.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FontWeight {
    /// The thinnest available weight.
    UltraLight,
    /// A very light weight.
    Thin,
    /// A light weight.
    Light,
    /// The regular weight.
    Regular,
    /// A medium weight.
    Medium,
    /// A semibold weight.
    Semibold,
    /// A bold weight.
    Bold,
    /// A heavy weight.
    Heavy,
    /// The blackest available weight.
    Black,
}

impl FontWeight {
    /// Parse a weight keyword. Returns [None] for unrecognized keywords.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_lowercase().as_str() {
            "ultralight" => Some(Self::UltraLight),
            "thin" => Some(Self::Thin),
            "light" => Some(Self::Light),
            "regular" => Some(Self::Regular),
            "medium" => Some(Self::Medium),
            "semibold" => Some(Self::Semibold),
            "bold" => Some(Self::Bold),
            "heavy" => Some(Self::Heavy),
            "black" => Some(Self::Black),
            _ => None,
        }
    }
}

/// A resolved font description: family name, point size and optional weight.
#[derive(Debug, Clone, PartialEq)]
pub struct FontSpecifier {
    /// The font family name. [None] requests the platform default family.
    pub family: Option<String>,
    /// The point size.
    pub size: f64,
    /// An optional weight keyword.
    pub weight: Option<FontWeight>,
}

/// Point size used when a theme resolves to no usable size.
pub(crate) const FALLBACK_POINT_SIZE: f64 = 15.0;

impl FontSpecifier {
    /// Create a specifier for the platform default family at the given size.
    pub fn with_size(size: f64) -> Self {
        Self {
            family: None,
            size,
            weight: None,
        }
    }

    /// The nominal line height of the font.
    ///
    /// The engine has no access to real font metrics, so the nominal line
    /// height equals the point size; derived spacing values (paragraph and
    /// line spacing multiples) are computed against this.
    pub fn line_height(&self) -> f64 {
        self.size
    }
}

impl Default for FontSpecifier {
    fn default() -> Self {
        Self::with_size(FALLBACK_POINT_SIZE)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_weight_keywords() {
        assert_eq!(FontWeight::from_keyword("semibold"), Some(FontWeight::Semibold));
        assert_eq!(FontWeight::from_keyword("ULTRALIGHT"), Some(FontWeight::UltraLight));
        assert_eq!(FontWeight::from_keyword("Bold"), Some(FontWeight::Bold));
        assert_eq!(FontWeight::from_keyword("extra-chunky"), None);
    }

    #[test]
    fn test_line_height_tracks_point_size() {
        let font = FontSpecifier::with_size(21.0);
        assert_eq!(font.line_height(), 21.0);
    }
}
