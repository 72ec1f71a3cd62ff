//! Plugin entry points.

use liquid_glass_tokens::{GlassTheme, TokenMap};

use crate::generate::register_rules;
use crate::registry::{RuleRegistry, StyleCollector};
use crate::resolve::TokenResolver;
use crate::Result;

/// The Liquid Glass plugin: a theme table plus the rule generation pass.
///
/// Hosts hand it their token resolver and registration callbacks; the raw
/// [`GlassTheme`] is equally available for hosts that only want token
/// values. Both entry points are supported independently.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LiquidGlass {
    theme: GlassTheme,
}

impl LiquidGlass {
    /// Create the plugin with the stock theme table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create the plugin over a custom theme table.
    pub fn with_theme(theme: GlassTheme) -> Self {
        Self { theme }
    }

    /// The theme table this plugin generates from.
    pub fn theme(&self) -> &GlassTheme {
        &self.theme
    }

    /// Flat token table for the host to merge into its own theme
    /// namespace before the generation pass runs.
    pub fn token_map(&self) -> TokenMap {
        TokenMap::from_theme(&self.theme)
    }

    /// Run the generation pass against host-supplied capabilities.
    ///
    /// The resolver must expose this plugin's tokens (see
    /// [`token_map`](Self::token_map)) alongside the host's own spacing and
    /// type-scale tokens.
    pub fn register(
        &self,
        resolver: &dyn TokenResolver,
        registry: &mut dyn RuleRegistry,
    ) -> Result<()> {
        register_rules(resolver, registry)
    }

    /// Standalone pass: generate against the bundled token table and
    /// serialize the result to CSS.
    pub fn render_css(&self) -> Result<String> {
        let tokens = self.token_map().with_base_tokens();
        let mut collector = StyleCollector::new();
        self.register(&tokens, &mut collector)?;
        Ok(collector.to_css())
    }
}

/// Plugin factory with the stock theme table.
pub fn liquid_glass() -> LiquidGlass {
    LiquidGlass::new()
}
