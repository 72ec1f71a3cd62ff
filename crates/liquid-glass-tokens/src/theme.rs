//! The aggregate theme table.

use crate::{GlassBorderColors, GlassColors, RadiusScale, ShadowScale};

/// The static theme table driving rule generation.
///
/// Constructed once per generation pass, read through token lookups, and
/// discarded afterwards. `Default` yields the stock Liquid Glass table.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GlassTheme {
    /// Semi-transparent fill tiers.
    pub colors: GlassColors,
    /// Border color tiers.
    pub borders: GlassBorderColors,
    /// Corner radius scale.
    pub radii: RadiusScale,
    /// Composite shadow presets.
    pub shadows: ShadowScale,
}

impl GlassTheme {
    /// Create the stock theme table.
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stock_theme_values() {
        let theme = GlassTheme::new();
        assert_eq!(theme.colors.light, "rgba(255, 255, 255, 0.15)");
        assert_eq!(theme.borders.base, "rgba(255, 255, 255, 0.20)");
        assert_eq!(theme.radii.base, "16px");
        assert_eq!(theme.shadows.base, "0 8px 32px rgba(31, 38, 135, 0.15)");
    }
}
