//! Design tokens for the Liquid Glass aesthetic.
//!
//! This crate is the theme table consumed by the `liquid-glass` rule
//! generator: semi-transparent fill tiers, border tiers, a corner radius
//! scale, and composite shadow presets. The table is plain immutable data;
//! it is constructed once per generation pass and never mutated.
//!
//! Tokens are exposed two ways:
//!
//! - **Typed**: [`GlassTheme`] and its per-scale structs, for hosts that
//!   want raw token values.
//! - **Flat**: [`TokenMap`], a dotted-path name → value table
//!   (`colors.glass.light`, `borderRadius.glass-lg`, ...) in the shape the
//!   rule generator resolves against.

mod color;
mod map;
mod radius;
mod shadow;
mod theme;

pub use color::{alpha_component, GlassBorderColors, GlassColors};
pub use map::{TokenMap, BASE_TOKENS};
pub use radius::{px_value, RadiusScale};
pub use shadow::ShadowScale;
pub use theme::GlassTheme;
