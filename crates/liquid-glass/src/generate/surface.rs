//! Surface utilities: frosted backdrop blur tiers.

use crate::rules::{DeclarationBlock, MediaRule, RuleSet, StyleRule};

/// One backdrop blur tier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SurfaceTier {
    /// Selector suffix; `None` is the unsuffixed default tier.
    pub suffix: Option<&'static str>,
    /// Blur radius in pixels.
    pub blur_px: u32,
    /// Backdrop saturation percentage.
    pub saturation_pct: u32,
}

/// Blur tiers in ascending intensity.
///
/// The reduced-transparency override iterates this table, so every tier
/// added here is covered by the fallback automatically.
pub const SURFACE_TIERS: [SurfaceTier; 4] = [
    SurfaceTier {
        suffix: Some("sm"),
        blur_px: 8,
        saturation_pct: 150,
    },
    SurfaceTier {
        suffix: None,
        blur_px: 16,
        saturation_pct: 180,
    },
    SurfaceTier {
        suffix: Some("lg"),
        blur_px: 24,
        saturation_pct: 200,
    },
    SurfaceTier {
        suffix: Some("xl"),
        blur_px: 40,
        saturation_pct: 200,
    },
];

/// Near-opaque fill substituted when the platform asks for reduced
/// transparency.
pub const REDUCED_TRANSPARENCY_FILL: &str = "rgba(30, 30, 30, 0.95)";

/// Media condition signalling the reduced-transparency preference.
pub const REDUCED_TRANSPARENCY_CONDITION: &str = "(prefers-reduced-transparency: reduce)";

impl SurfaceTier {
    /// Utility selector for this tier.
    pub fn selector(&self) -> String {
        match self.suffix {
            Some(suffix) => format!(".glass-surface-{suffix}"),
            None => ".glass-surface".to_string(),
        }
    }

    /// Backdrop filter value for this tier.
    pub fn filter(&self) -> String {
        format!("blur({}px) saturate({}%)", self.blur_px, self.saturation_pct)
    }
}

/// One utility rule per blur tier.
pub fn surface_utilities() -> RuleSet {
    let mut rules = RuleSet::new();
    for tier in SURFACE_TIERS {
        rules.add(
            tier.selector(),
            DeclarationBlock::new().backdrop_filter(tier.filter()),
        );
    }
    rules
}

/// The accessibility override: under the reduced-transparency media
/// condition, disable blur on every surface tier and substitute a
/// near-opaque fill.
pub fn reduced_transparency_override() -> RuleSet {
    let selector = SURFACE_TIERS
        .iter()
        .map(SurfaceTier::selector)
        .collect::<Vec<_>>()
        .join(", ");
    let block = DeclarationBlock::new()
        .backdrop_filter("none")
        .decl("background", REDUCED_TRANSPARENCY_FILL);

    let mut rules = RuleSet::new();
    rules.push_media(MediaRule::new(
        REDUCED_TRANSPARENCY_CONDITION,
        vec![StyleRule::new(selector, block)],
    ));
    rules
}
