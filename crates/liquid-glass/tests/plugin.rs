//! End-to-end tests for the full generation pass.

use liquid_glass::prelude::*;
use liquid_glass::registry::StyleCollector;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

fn generate() -> StyleCollector {
    init_tracing();
    let plugin = liquid_glass();
    let tokens = plugin.token_map().with_base_tokens();
    let mut collector = StyleCollector::new();
    plugin.register(&tokens, &mut collector).unwrap();
    collector
}

#[test]
fn theme_value_flows_into_card_preset() {
    let collector = generate();

    let card = collector.find(".glass-card").unwrap();
    assert_eq!(
        card.block.get("background-color"),
        Some("rgba(255, 255, 255, 0.15)")
    );
}

#[test]
fn reduced_transparency_overrides_the_default_surface() {
    let collector = generate();

    // Base rule: 16px blur at 180% saturation.
    let base = collector.find(".glass-surface").unwrap();
    assert_eq!(
        base.block.get("backdrop-filter"),
        Some("blur(16px) saturate(180%)")
    );

    // Under the media condition the same selector gets blur: none and the
    // near-opaque fallback fill.
    let media = collector
        .utilities()
        .iter()
        .flat_map(|rules| rules.media_rules())
        .find(|m| m.condition == "(prefers-reduced-transparency: reduce)")
        .unwrap();
    let fallback = &media.rules[0];
    assert!(fallback.selectors().any(|s| s == ".glass-surface"));
    assert_eq!(fallback.block.get("backdrop-filter"), Some("none"));
    assert_eq!(
        fallback.block.get("background"),
        Some("rgba(30, 30, 30, 0.95)")
    );
}

#[test]
fn serialized_css_contains_every_selector() {
    let css = liquid_glass().render_css().unwrap();

    let selectors = [
        ".glass-surface",
        ".glass-surface-sm",
        ".glass-surface-lg",
        ".glass-surface-xl",
        ".glass-shine",
        ".glass-shine-subtle",
        ".glass-card",
        ".glass-card-elevated",
        ".glass-btn",
        ".glass-btn-secondary",
        ".glass-btn-pill",
        ".glass-nav",
        ".glass-modal",
        ".glass-input",
        ".glass-segment",
        ".glass-segment-item",
        ".glass-segment-item-active",
    ];
    for selector in selectors {
        assert!(css.contains(&format!("{selector} {{")), "{selector}");
    }
    assert!(css.contains("@media (prefers-reduced-transparency: reduce) {"));
    assert!(css.contains(".glass-shine::after {"));
    assert!(css.contains(".glass-btn:hover {"));
    assert!(css.contains(".glass-input::placeholder {"));
}

#[test]
fn two_passes_serialize_byte_identically() {
    let plugin = liquid_glass();
    assert_eq!(plugin.render_css().unwrap(), plugin.render_css().unwrap());
}

#[test]
fn raw_theme_export_matches_plugin_table() {
    let plugin = liquid_glass();
    assert_eq!(plugin.theme(), &GlassTheme::new());

    // Both entry points expose the same token values.
    let map = plugin.token_map();
    assert_eq!(
        map.get("colors.glass.light"),
        Some(plugin.theme().colors.light.as_str())
    );
}

#[test]
fn guide_installs_into_a_fresh_directory_tree() {
    init_tracing();
    let root = tempfile::tempdir().unwrap();
    let dir = root.path().join("missing").join("skills");

    let path = liquid_glass::install::install_design_guide_into(&dir).unwrap();
    assert!(path.exists());
}
