//! Deterministic rule generation from the theme table.
//!
//! Pure and synchronous: one pass per host build, no I/O, no shared state.
//! The only inputs are the host's [`TokenResolver`] and the fixed tables in
//! the submodules; identical input always yields identical rule output.

mod components;
mod shine;
mod surface;

pub use components::{
    component_presets, BUTTON_TRANSITION_MS, EASING, INPUT_TRANSITION_MS,
};
pub use shine::{shine_overlays, SHINE_GRADIENT, SHINE_SUBTLE_GRADIENT};
pub use surface::{
    reduced_transparency_override, surface_utilities, SurfaceTier,
    REDUCED_TRANSPARENCY_CONDITION, REDUCED_TRANSPARENCY_FILL, SURFACE_TIERS,
};

use crate::registry::RuleRegistry;
use crate::resolve::TokenResolver;
use crate::Result;

/// Run the full generation pass against the host's capabilities.
///
/// Components are assembled first so a missing token aborts before anything
/// has been registered; registration itself is infallible.
pub fn register_rules(
    resolver: &dyn TokenResolver,
    registry: &mut dyn RuleRegistry,
) -> Result<()> {
    let components = component_presets(resolver)?;

    let surfaces = surface_utilities();
    let shine = shine_overlays();
    let fallback = reduced_transparency_override();
    tracing::debug!(
        utilities = surfaces.len() + shine.len() + fallback.len(),
        components = components.len(),
        "registering liquid glass rules"
    );

    registry.register_utilities(surfaces);
    registry.register_utilities(shine);
    registry.register_utilities(fallback);
    registry.register_components(components);
    Ok(())
}
