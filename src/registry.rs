//! # Theme Registry
//!
//! Assembles a family of [Theme]s, with their parent links wired up,
//! from a single pre-parsed manifest document, and owns the resulting
//! themes for the life of the process.
//!
//! The manifest is the one place the engine is strict: a parent that is
//! never declared, an inheritance cycle, or a default theme that does not
//! exist are configuration mistakes worth failing loudly over, before any
//! styling happens. Everything downstream of assembly stays total.
//!
//! ```
//! use livery::registry::ThemeRegistry;
//! use serde_json::json;
//!
//! let registry = ThemeRegistry::from_manifest(json!({
//!     "default": "dark",
//!     "themes": {
//!         "base": {
//!             "values": { "rowHeight": 44 }
//!         },
//!         "dark": {
//!             "parent": "base",
//!             "values": { "backgroundColor": { "hex": "1C1C1E" } }
//!         }
//!     }
//! }))
//! .unwrap();
//!
//! let dark = registry.default_theme().unwrap();
//! assert_eq!(dark.integer_for_key("rowHeight"), 44);
//! ```

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use indexmap::IndexMap;
use serde::Deserialize;
use serde_json::{Map, Value};

use crate::error::{ThemeError, ThemeResult};
use crate::theme::Theme;

/// The deserialized shape of a theme manifest document.
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeManifest {
    /// The name of the theme to use by default, if the manifest picks one.
    #[serde(default)]
    pub default: Option<String>,
    /// The declared themes, in declaration order.
    pub themes: IndexMap<String, ThemeEntry>,
}

/// One theme declaration inside a [ThemeManifest].
#[derive(Debug, Clone, Deserialize)]
pub struct ThemeEntry {
    /// The name of the theme this one inherits from, if any.
    #[serde(default)]
    pub parent: Option<String>,
    /// The theme's raw key→value mapping.
    #[serde(default)]
    pub values: Map<String, Value>,
}

/// A registry of assembled themes, looked up by name.
#[derive(Debug, Default)]
pub struct ThemeRegistry {
    themes: IndexMap<String, Arc<Theme>>,
    default_theme: Option<String>,
}

impl ThemeRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Assemble a registry from a pre-parsed manifest document.
    ///
    /// Parents may be declared in any order; the registry wires each theme
    /// to its parent before the theme is handed out. See [ThemeError] for
    /// the ways a manifest can be rejected.
    pub fn from_manifest(manifest: Value) -> ThemeResult<Self> {
        let manifest: ThemeManifest = serde_json::from_value(manifest)
            .map_err(|error| ThemeError::manifest_shape(error.to_string()))?;

        if let Some(default) = &manifest.default {
            if !manifest.themes.contains_key(default) {
                return Err(ThemeError::unknown_default_theme(default));
            }
        }

        let mut built: HashMap<String, Arc<Theme>> = HashMap::new();
        let mut themes = IndexMap::new();
        for name in manifest.themes.keys() {
            let theme = build_theme(name, &manifest.themes, &mut built, &mut HashSet::new())?;
            themes.insert(name.clone(), theme);
        }

        log::debug!("assembled {} theme(s) from manifest", themes.len());
        Ok(Self {
            themes,
            default_theme: manifest.default,
        })
    }

    /// Add a standalone theme to the registry. An existing theme with the
    /// same name is replaced.
    pub fn register(&mut self, theme: Theme) -> Arc<Theme> {
        let theme = Arc::new(theme);
        if self
            .themes
            .insert(theme.name().to_string(), theme.clone())
            .is_some()
        {
            log::debug!("replaced theme '{}' in registry", theme.name());
        }
        theme
    }

    /// Look up a theme by name.
    pub fn get(&self, name: &str) -> Option<Arc<Theme>> {
        self.themes.get(name).cloned()
    }

    /// The manifest's default theme, if one was selected.
    pub fn default_theme(&self) -> Option<Arc<Theme>> {
        self.get(self.default_theme.as_deref()?)
    }

    /// The names of every registered theme, in declaration order.
    pub fn names(&self) -> Vec<&str> {
        self.themes.keys().map(String::as_str).collect()
    }

    /// The number of registered themes.
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }
}

fn build_theme(
    name: &str,
    entries: &IndexMap<String, ThemeEntry>,
    built: &mut HashMap<String, Arc<Theme>>,
    visiting: &mut HashSet<String>,
) -> ThemeResult<Arc<Theme>> {
    if let Some(theme) = built.get(name) {
        return Ok(theme.clone());
    }
    if !visiting.insert(name.to_string()) {
        return Err(ThemeError::inheritance_cycle(name));
    }

    // Entries are only reached through manifest keys, so the entry exists
    // unless a parent name points outside the manifest.
    let entry = entries
        .get(name)
        .expect("build_theme called with undeclared name");

    let parent = match &entry.parent {
        Some(parent_name) => {
            if !entries.contains_key(parent_name) {
                return Err(ThemeError::unknown_parent(name, parent_name));
            }
            Some(build_theme(parent_name, entries, built, visiting)?)
        }
        None => None,
    };

    let mut theme = Theme::new(name, entry.values.clone());
    if let Some(parent) = parent {
        theme = theme.with_parent(parent);
    }
    let theme = Arc::new(theme);
    built.insert(name.to_string(), theme.clone());
    visiting.remove(name);
    Ok(theme)
}

#[cfg(test)]
mod tests {
    use super::*;
    use peniko::Color;
    use serde_json::json;

    fn manifest() -> Value {
        json!({
            "default": "dark",
            "themes": {
                "base": {
                    "values": {
                        "rowHeight": 44,
                        "accentColor": { "hex": "FF6600" }
                    }
                },
                "dark": {
                    "parent": "base",
                    "values": { "accentColor": { "hex": "FF9944" } }
                },
                "compact-dark": {
                    "parent": "dark",
                    "values": { "rowHeight": 32 }
                }
            }
        })
    }

    #[test]
    fn test_manifest_assembly_and_inheritance() {
        let registry = ThemeRegistry::from_manifest(manifest()).unwrap();
        assert_eq!(registry.len(), 3);
        assert_eq!(registry.names(), vec!["base", "dark", "compact-dark"]);

        let compact = registry.get("compact-dark").unwrap();
        // Own value, parent's override, grandparent's value.
        assert_eq!(compact.integer_for_key("rowHeight"), 32);
        assert_eq!(
            compact.color_for_key("accentColor"),
            Color::from_rgb8(0xFF, 0x99, 0x44)
        );
        let dark = registry.get("dark").unwrap();
        assert_eq!(dark.integer_for_key("rowHeight"), 44);
    }

    #[test]
    fn test_parents_may_be_declared_after_children() {
        let registry = ThemeRegistry::from_manifest(json!({
            "themes": {
                "dark": { "parent": "base", "values": {} },
                "base": { "values": { "rowHeight": 44 } }
            }
        }))
        .unwrap();
        let dark = registry.get("dark").unwrap();
        assert_eq!(dark.integer_for_key("rowHeight"), 44);
        assert_eq!(dark.parent().map(Theme::name), Some("base"));
    }

    #[test]
    fn test_default_theme() {
        let registry = ThemeRegistry::from_manifest(manifest()).unwrap();
        assert_eq!(registry.default_theme().unwrap().name(), "dark");

        let no_default = ThemeRegistry::from_manifest(json!({
            "themes": { "base": { "values": {} } }
        }))
        .unwrap();
        assert!(no_default.default_theme().is_none());
    }

    #[test]
    fn test_unknown_default_is_rejected() {
        let error = ThemeRegistry::from_manifest(json!({
            "default": "nope",
            "themes": { "base": { "values": {} } }
        }))
        .unwrap_err();
        assert!(matches!(error, ThemeError::UnknownDefaultTheme { name } if name == "nope"));
    }

    #[test]
    fn test_unknown_parent_is_rejected() {
        let error = ThemeRegistry::from_manifest(json!({
            "themes": { "dark": { "parent": "phantom", "values": {} } }
        }))
        .unwrap_err();
        assert!(
            matches!(error, ThemeError::UnknownParent { theme, parent }
                if theme == "dark" && parent == "phantom")
        );
    }

    #[test]
    fn test_inheritance_cycle_is_rejected() {
        let error = ThemeRegistry::from_manifest(json!({
            "themes": {
                "a": { "parent": "b", "values": {} },
                "b": { "parent": "a", "values": {} }
            }
        }))
        .unwrap_err();
        assert!(matches!(error, ThemeError::InheritanceCycle { .. }));
    }

    #[test]
    fn test_malformed_manifest_is_rejected() {
        let error = ThemeRegistry::from_manifest(json!({ "themes": 42 })).unwrap_err();
        assert!(matches!(error, ThemeError::ManifestShape { .. }));
    }

    #[test]
    fn test_register_returns_shared_theme() {
        let mut registry = ThemeRegistry::new();
        let theme = registry.register(Theme::new("extra", Map::new()));
        assert!(Arc::ptr_eq(&theme, &registry.get("extra").unwrap()));
        // Re-registering a name replaces the earlier theme.
        registry.register(Theme::new("extra", Map::new()));
        assert_eq!(registry.len(), 1);
    }
}
