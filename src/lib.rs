#![warn(missing_docs)]

//! # Livery
//!
//! A typed, inheritable style-configuration engine. Livery resolves a
//! hierarchical, dictionary-shaped theme description into strongly typed
//! style values (colors, fonts, geometry, text attributes, animation
//! parameters, border descriptors) and bundles them into immutable
//! specifiers that can be applied to UI elements supplied by the embedding
//! toolkit.
//!
//! ## Overview
//!
//! The engine consists of a few layers:
//!
//! - **[Theme](theme::Theme)**: a named key→value mapping with an optional
//!   parent theme, per-type caches, and the full family of typed accessors
//! - **[ThemeRegistry](registry::ThemeRegistry)**: assembles themes (and
//!   their parent links) from one pre-parsed manifest document
//! - **[Coercion](coerce)**: total conversion from raw mapping nodes to
//!   typed primitives, degrading to documented defaults on malformed input
//! - **[Specifiers](specifier)**: immutable bundles of resolved attributes
//!   for one UI concern each
//! - **[Collaborator traits](apply)**: the seams where the platform's
//!   labels, buttons, bars, asset system and animation runner plug in
//!
//! ## Quick Start
//!
//! ```
//! use livery::registry::ThemeRegistry;
//! use serde_json::json;
//!
//! let registry = ThemeRegistry::from_manifest(json!({
//!     "default": "dark",
//!     "themes": {
//!         "base": {
//!             "values": {
//!                 "headline": {
//!                     "font": { "name": "AvenirNext-Medium", "size": 17 },
//!                     "color": { "hex": "333333" },
//!                     "textTransform": "uppercase"
//!                 }
//!             }
//!         },
//!         "dark": {
//!             "parent": "base",
//!             "values": { "windowColor": { "hex": "1C1C1E" } }
//!         }
//!     }
//! }))
//! .unwrap();
//!
//! let theme = registry.default_theme().unwrap();
//!
//! // Keys missing everywhere resolve to neutral defaults, never errors.
//! assert_eq!(theme.integer_for_key("missing"), 0);
//!
//! // Inherited keys resolve through the parent chain and are cached.
//! let headline = theme.text_label_specifier_for_key("headline").unwrap();
//! assert_eq!(headline.transform_text("on sale"), "ON SALE");
//! ```
//!
//! ## Error Philosophy
//!
//! Theme data is hand-authored configuration, so the accessor surface is
//! total: missing keys, malformed values and unrecognized keywords all
//! resolve to each type's documented default, with diagnostics emitted on
//! the `log` channel for tooling. The one strict boundary is manifest
//! assembly ([registry]), where unknown parents, inheritance cycles and a
//! missing default theme fail with a [ThemeError](error::ThemeError).
//!
//! ## Scope
//!
//! The engine consumes an already-parsed [serde_json::Value] tree; it never
//! reads files, never watches for changes, and never creates, lays out or
//! animates concrete UI elements. Those belong to the embedding toolkit,
//! reached only through the [apply] traits.

/// Collaborator traits for the embedding UI toolkit.
pub mod apply;
/// Text styling vocabulary and attribute bundles.
pub mod attributes;
/// The coercion layer: raw mapping nodes to typed primitives.
pub mod coerce;
/// Error types for theme assembly.
pub mod error;
/// Platform-chrome keyword enums.
pub mod platform;
/// Theme assembly from manifest documents.
pub mod registry;
/// Specifier value objects.
pub mod specifier;
/// The central [Theme](theme::Theme) type: resolution and caching.
pub mod theme;
