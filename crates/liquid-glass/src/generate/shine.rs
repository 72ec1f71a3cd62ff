//! Specular shine overlays.
//!
//! Purely decorative diagonal highlights drawn on an `::after`
//! pseudo-element pinned to the element box. The overlay inherits the
//! host's corner rounding, never intercepts pointer input, and sets no
//! layout-affecting property.

use crate::rules::{DeclarationBlock, RuleSet};

/// Four-stop gradient: bright corner, fade, fade, faint opposite corner.
pub const SHINE_GRADIENT: &str = "linear-gradient(135deg, rgba(255,255,255,0.25) 0%, transparent 40%, transparent 60%, rgba(255,255,255,0.05) 100%)";

/// Two-stop gradient at lower opacity.
pub const SHINE_SUBTLE_GRADIENT: &str =
    "linear-gradient(135deg, rgba(255,255,255,0.12) 0%, transparent 50%)";

fn overlay(gradient: &str) -> DeclarationBlock {
    DeclarationBlock::new()
        .decl("position", "relative")
        .decl("overflow", "hidden")
        .pseudo(
            "&::after",
            DeclarationBlock::new()
                .decl("content", "\"\"")
                .decl("position", "absolute")
                .decl("inset", "0")
                .decl("border-radius", "inherit")
                .decl("background", gradient)
                .decl("pointer-events", "none"),
        )
}

/// The two shine overlay utilities.
pub fn shine_overlays() -> RuleSet {
    let mut rules = RuleSet::new();
    rules.add(".glass-shine", overlay(SHINE_GRADIENT));
    rules.add(".glass-shine-subtle", overlay(SHINE_SUBTLE_GRADIENT));
    rules
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::DeclarationBlock;

    fn all_blocks(block: &DeclarationBlock) -> Vec<&DeclarationBlock> {
        let mut blocks = vec![block];
        for nested in &block.nested {
            blocks.extend(all_blocks(&nested.block));
        }
        blocks
    }

    #[test]
    fn overlays_set_no_layout_property() {
        let rules = shine_overlays();
        for rule in rules.style_rules() {
            for block in all_blocks(&rule.block) {
                for decl in &block.declarations {
                    assert!(
                        !matches!(decl.property.as_str(), "width" | "height" | "margin"),
                        "{} must not set {}",
                        rule.selector,
                        decl.property
                    );
                }
            }
        }
    }

    #[test]
    fn overlays_suppress_pointer_events() {
        let rules = shine_overlays();
        for selector in [".glass-shine", ".glass-shine-subtle"] {
            let rule = rules.find(selector).unwrap();
            let after = rule.block.nested_block("&::after").unwrap();
            assert_eq!(after.get("pointer-events"), Some("none"));
            assert_eq!(after.get("border-radius"), Some("inherit"));
            assert_eq!(after.get("inset"), Some("0"));
        }
    }

    #[test]
    fn gradients_differ_between_tiers() {
        let rules = shine_overlays();
        let full = rules.find(".glass-shine").unwrap();
        let subtle = rules.find(".glass-shine-subtle").unwrap();

        let full_bg = full.block.nested_block("&::after").unwrap().get("background");
        let subtle_bg = subtle
            .block
            .nested_block("&::after")
            .unwrap()
            .get("background");

        assert_eq!(full_bg, Some(SHINE_GRADIENT));
        assert_eq!(subtle_bg, Some(SHINE_SUBTLE_GRADIENT));
    }
}
