//! Flat dotted-path token table.

use crate::GlassTheme;

/// Host-side defaults for the spacing and type-scale tokens the component
/// presets reference. A host styling system normally owns these; they are
/// shipped here so the plugin also works standalone.
pub const BASE_TOKENS: [(&str, &str); 8] = [
    ("spacing.1", "0.25rem"),
    ("spacing.2", "0.5rem"),
    ("spacing.2.5", "0.625rem"),
    ("spacing.3", "0.75rem"),
    ("spacing.4", "1rem"),
    ("spacing.5", "1.25rem"),
    ("spacing.6", "1.5rem"),
    ("fontSize.sm", "0.875rem"),
];

/// Ordered name → value token table.
///
/// Keys are dotted paths (`colors.glass.light`, `borderRadius.glass-lg`).
/// Insertion order is preserved so hosts merging the table see a stable
/// token sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TokenMap {
    entries: Vec<(String, String)>,
}

impl TokenMap {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Flatten a theme table into dotted-path tokens.
    pub fn from_theme(theme: &GlassTheme) -> Self {
        let mut map = Self::new();

        for (tier, value) in theme.colors.light_tiers() {
            map.set(format!("colors.glass.{tier}"), value);
        }
        for (tier, value) in theme.colors.dark_tiers() {
            map.set(format!("colors.glass.{tier}"), value);
        }
        for (tier, value) in theme.borders.tiers() {
            map.set(format!("colors.glass-border.{tier}"), value);
        }
        for (tier, value) in theme.radii.tiers() {
            match tier {
                "DEFAULT" => map.set("borderRadius.glass", value),
                _ => map.set(format!("borderRadius.glass-{tier}"), value),
            }
        }
        map.set("boxShadow.glass", theme.shadows.base.as_str());
        map.set("boxShadow.glass-lg", theme.shadows.lg.as_str());
        map.set("boxShadow.glass-inset", theme.shadows.inset.as_str());
        map.set("boxShadow.glass-elevated", theme.shadows.elevated.as_str());

        map
    }

    /// Layer the host-side base tokens on top of the table.
    pub fn with_base_tokens(mut self) -> Self {
        for (name, value) in BASE_TOKENS {
            self.set(name, value);
        }
        self
    }

    /// Set a token, replacing an existing entry with the same name.
    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.entries.iter_mut().find(|(n, _)| *n == name) {
            Some(entry) => entry.1 = value,
            None => self.entries.push((name, value)),
        }
    }

    /// Look up a token value.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.entries
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// Check whether a token exists.
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Iterate over tokens in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.entries.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }

    /// Number of tokens.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if the table is empty.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_and_get() {
        let mut map = TokenMap::new();
        map.set("colors.glass.light", "rgba(255, 255, 255, 0.15)");

        assert_eq!(
            map.get("colors.glass.light"),
            Some("rgba(255, 255, 255, 0.15)")
        );
        assert_eq!(map.get("colors.glass.missing"), None);
    }

    #[test]
    fn set_replaces_in_place() {
        let mut map = TokenMap::new();
        map.set("a", "1");
        map.set("b", "2");
        map.set("a", "3");

        assert_eq!(map.get("a"), Some("3"));
        assert_eq!(map.len(), 2);
        let order: Vec<&str> = map.iter().map(|(n, _)| n).collect();
        assert_eq!(order, ["a", "b"]);
    }

    #[test]
    fn from_theme_publishes_all_token_groups() {
        let map = TokenMap::from_theme(&GlassTheme::new());

        assert!(map.contains("colors.glass.subtle"));
        assert!(map.contains("colors.glass.dark-strong"));
        assert!(map.contains("colors.glass-border.DEFAULT"));
        assert!(map.contains("borderRadius.glass"));
        assert!(map.contains("borderRadius.glass-xl"));
        assert!(map.contains("boxShadow.glass-elevated"));
        // 7 fills + 3 borders + 4 radii + 4 shadows
        assert_eq!(map.len(), 18);
    }

    #[test]
    fn base_tokens_cover_spacing_and_type_scale() {
        let map = TokenMap::from_theme(&GlassTheme::new()).with_base_tokens();

        assert_eq!(map.get("spacing.2.5"), Some("0.625rem"));
        assert_eq!(map.get("fontSize.sm"), Some("0.875rem"));
    }
}
