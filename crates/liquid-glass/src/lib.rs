//! Liquid Glass: glassmorphism utilities and component presets for
//! build-time CSS generation.
//!
//! This crate expands a static theme-token table into a deterministic set
//! of CSS rules (backdrop blur utilities, specular shine overlays, a
//! reduced-transparency accessibility override, and eleven component
//! presets) and hands them to a host styling system through two
//! capabilities the host supplies:
//!
//! - a [`TokenResolver`](resolve::TokenResolver) mapping dotted token paths
//!   to CSS values, and
//! - a [`RuleRegistry`](registry::RuleRegistry) collecting utility and
//!   component rule sets.
//!
//! # Example
//!
//! ```ignore
//! use liquid_glass::prelude::*;
//!
//! // Standalone: bundled tokens, bundled collector, serialized CSS.
//! let css = liquid_glass().render_css()?;
//!
//! // Hosted: merge the plugin's tokens into the host theme, then run the
//! // generation pass against the host's capabilities.
//! let plugin = liquid_glass();
//! host_theme.merge(plugin.token_map());
//! plugin.register(&host_theme, &mut host_registry)?;
//! ```
//!
//! The raw theme table is also exported directly ([`GlassTheme`]) for
//! hosts that want token values without the generated rules.

pub mod css;
pub mod generate;
pub mod install;
pub mod registry;
pub mod resolve;
pub mod rules;

mod error;
mod plugin;

pub use error::{Error, Result};
pub use plugin::{liquid_glass, LiquidGlass};

pub use liquid_glass_tokens::{
    GlassBorderColors, GlassColors, GlassTheme, RadiusScale, ShadowScale, TokenMap,
};

/// Prelude module with commonly used types.
pub mod prelude {
    pub use crate::generate::{register_rules, SurfaceTier, SURFACE_TIERS};
    pub use crate::registry::{RuleRegistry, StyleCollector};
    pub use crate::resolve::TokenResolver;
    pub use crate::rules::{CssRule, Declaration, DeclarationBlock, MediaRule, RuleSet, StyleRule};
    pub use crate::{liquid_glass, Error, LiquidGlass, Result};
    pub use liquid_glass_tokens::{GlassTheme, TokenMap};
}
