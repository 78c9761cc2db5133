//! Platform-chrome keyword enums.
//!
//! These values describe pieces of system chrome (status bar, blur
//! materials, bars, keyboards) that the embedding toolkit owns. The engine
//! only resolves the keywords; what a "prominent" blur actually looks like
//! is up to the platform.

/// Status bar content style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StatusBarStyle {
    /// The platform default.
    #[default]
    Default,
    /// Dark content over a light background.
    DarkContent,
    /// Light content over a dark background.
    LightContent,
}

impl StatusBarStyle {
    /// Parse a status-bar keyword. Returns [None] for unrecognized keywords.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "darkcontent" => Some(Self::DarkContent),
            "lightcontent" => Some(Self::LightContent),
            _ => None,
        }
    }
}

/// Blur material style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BlurEffectStyle {
    /// An extra-light blur material.
    #[default]
    ExtraLight,
    /// A light blur material.
    Light,
    /// A dark blur material.
    Dark,
    /// The adaptive regular material.
    Regular,
    /// The adaptive prominent material.
    Prominent,
}

impl BlurEffectStyle {
    /// Parse a blur keyword. Returns [None] for unrecognized keywords.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_lowercase().as_str() {
            "extralight" => Some(Self::ExtraLight),
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "regular" => Some(Self::Regular),
            "prominent" => Some(Self::Prominent),
            _ => None,
        }
    }
}

/// Navigation/tool bar appearance style.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BarStyle {
    /// The platform default bar appearance.
    #[default]
    Default,
    /// The black bar appearance.
    Black,
}

impl BarStyle {
    /// Parse a bar-style keyword. Returns [None] for unrecognized keywords.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "black" => Some(Self::Black),
            _ => None,
        }
    }
}

/// On-screen keyboard appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum KeyboardAppearance {
    /// The platform default keyboard.
    #[default]
    Default,
    /// The dark keyboard.
    Dark,
    /// The light keyboard.
    Light,
}

impl KeyboardAppearance {
    /// Parse a keyboard keyword. Returns [None] for unrecognized keywords.
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword.to_lowercase().as_str() {
            "default" => Some(Self::Default),
            "dark" => Some(Self::Dark),
            "light" => Some(Self::Light),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_bar_keywords() {
        assert_eq!(
            StatusBarStyle::from_keyword("LightContent"),
            Some(StatusBarStyle::LightContent)
        );
        assert_eq!(StatusBarStyle::from_keyword("opaque"), None);
    }

    #[test]
    fn test_blur_keywords() {
        assert_eq!(
            BlurEffectStyle::from_keyword("prominent"),
            Some(BlurEffectStyle::Prominent)
        );
        assert_eq!(BlurEffectStyle::from_keyword("frosted"), None);
    }

    #[test]
    fn test_bar_and_keyboard_keywords() {
        assert_eq!(BarStyle::from_keyword("Black"), Some(BarStyle::Black));
        assert_eq!(BarStyle::from_keyword("translucent"), None);
        assert_eq!(
            KeyboardAppearance::from_keyword("dark"),
            Some(KeyboardAppearance::Dark)
        );
        assert_eq!(KeyboardAppearance::from_keyword("system"), None);
    }
}
