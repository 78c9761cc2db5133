//! # Theme Error Types
//!
//! Error types for the theme registry and manifest layer. The typed
//! accessors on [Theme](crate::theme::Theme) never return errors; missing
//! or malformed values degrade to documented defaults. Everything in
//! this module concerns assembling themes, not reading them.

use thiserror::Error;

/// Errors that can occur while assembling themes from a manifest.
#[derive(Error, Debug)]
pub enum ThemeError {
    /// The manifest document did not have the expected shape.
    #[error("Failed to parse theme manifest: {details}")]
    ManifestShape {
        /// Details about what was malformed.
        details: String,
    },

    /// A theme's value mapping was not an object node.
    #[error("Theme '{name}' does not map to an object")]
    MappingShape {
        /// The name of the offending theme.
        name: String,
    },

    /// A theme names a parent that is not declared anywhere.
    #[error("Theme '{theme}' inherits from unknown parent '{parent}'")]
    UnknownParent {
        /// The inheriting theme.
        theme: String,
        /// The missing parent name.
        parent: String,
    },

    /// A group of themes inherit from each other in a cycle.
    #[error("Theme '{name}' participates in an inheritance cycle")]
    InheritanceCycle {
        /// One theme on the cycle.
        name: String,
    },

    /// The manifest selects a default theme that it does not declare.
    #[error("Default theme '{name}' is not declared in the manifest")]
    UnknownDefaultTheme {
        /// The undeclared default theme name.
        name: String,
    },
}

/// Result type alias for theme assembly operations.
pub type ThemeResult<T> = Result<T, ThemeError>;

impl ThemeError {
    /// Create a manifest shape error.
    pub fn manifest_shape(details: impl Into<String>) -> Self {
        Self::ManifestShape {
            details: details.into(),
        }
    }

    /// Create a mapping shape error.
    pub fn mapping_shape(name: impl Into<String>) -> Self {
        Self::MappingShape { name: name.into() }
    }

    /// Create an unknown parent error.
    pub fn unknown_parent(theme: impl Into<String>, parent: impl Into<String>) -> Self {
        Self::UnknownParent {
            theme: theme.into(),
            parent: parent.into(),
        }
    }

    /// Create an inheritance cycle error.
    pub fn inheritance_cycle(name: impl Into<String>) -> Self {
        Self::InheritanceCycle { name: name.into() }
    }

    /// Create an unknown default theme error.
    pub fn unknown_default_theme(name: impl Into<String>) -> Self {
        Self::UnknownDefaultTheme { name: name.into() }
    }
}
