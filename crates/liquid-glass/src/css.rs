//! Deterministic CSS serialization of generated rule sets.
//!
//! Hosts normally own serialization; this writer is the in-tree
//! equivalent for standalone use and tests.
//! Output is byte-identical for identical input: rules are emitted in
//! source order with fixed two-space indentation.

use crate::rules::{CssRule, DeclarationBlock, MediaRule, RuleSet, StyleRule};

/// Serialize a rule set to CSS text.
pub fn rule_set_to_css(rules: &RuleSet) -> String {
    let mut out = String::new();
    write_rule_set(&mut out, rules);
    out
}

/// Append a rule set to an output buffer.
pub fn write_rule_set(out: &mut String, rules: &RuleSet) {
    for rule in rules.iter() {
        separate(out);
        match rule {
            CssRule::Style(rule) => write_style_rule(out, rule, 0),
            CssRule::Media(rule) => write_media_rule(out, rule),
        }
    }
}

fn write_style_rule(out: &mut String, rule: &StyleRule, indent: usize) {
    write_block(out, &rule.selector, &rule.block, indent);
}

fn write_media_rule(out: &mut String, rule: &MediaRule) {
    out.push_str("@media ");
    out.push_str(&rule.condition);
    out.push_str(" {\n");
    for (i, inner) in rule.rules.iter().enumerate() {
        if i > 0 {
            out.push('\n');
        }
        write_style_rule(out, inner, 1);
    }
    out.push_str("}\n");
}

fn write_block(out: &mut String, selector: &str, block: &DeclarationBlock, indent: usize) {
    let pad = "  ".repeat(indent);

    out.push_str(&pad);
    out.push_str(selector);
    out.push_str(" {\n");
    for decl in &block.declarations {
        out.push_str(&pad);
        out.push_str("  ");
        out.push_str(&decl.property);
        out.push_str(": ");
        out.push_str(&decl.value);
        out.push_str(";\n");
    }
    out.push_str(&pad);
    out.push_str("}\n");

    // Nested pseudo blocks become sibling rules on the expanded selector.
    for nested in &block.nested {
        out.push('\n');
        let expanded = nested.selector.replace('&', selector);
        write_block(out, &expanded, &nested.block, indent);
    }
}

fn separate(out: &mut String) {
    if !out.is_empty() {
        out.push('\n');
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rules::{DeclarationBlock, MediaRule, StyleRule};

    #[test]
    fn writes_flat_rule() {
        let mut rules = RuleSet::new();
        rules.add(
            ".glass-surface",
            DeclarationBlock::new().backdrop_filter("blur(16px) saturate(180%)"),
        );

        let css = rule_set_to_css(&rules);
        assert_eq!(
            css,
            ".glass-surface {\n  backdrop-filter: blur(16px) saturate(180%);\n  -webkit-backdrop-filter: blur(16px) saturate(180%);\n}\n"
        );
    }

    #[test]
    fn expands_nested_selector_against_parent() {
        let mut rules = RuleSet::new();
        rules.add(
            ".glass-shine",
            DeclarationBlock::new()
                .decl("position", "relative")
                .pseudo("&::after", DeclarationBlock::new().decl("inset", "0")),
        );

        let css = rule_set_to_css(&rules);
        assert!(css.contains(".glass-shine::after {\n  inset: 0;\n}"));
    }

    #[test]
    fn media_rules_indent_inner_rules() {
        let mut rules = RuleSet::new();
        rules.push_media(MediaRule::new(
            "(prefers-reduced-transparency: reduce)",
            vec![StyleRule::new(
                ".glass-surface",
                DeclarationBlock::new().decl("backdrop-filter", "none"),
            )],
        ));

        let css = rule_set_to_css(&rules);
        assert_eq!(
            css,
            "@media (prefers-reduced-transparency: reduce) {\n  .glass-surface {\n    backdrop-filter: none;\n  }\n}\n"
        );
    }

    #[test]
    fn top_level_rules_are_blank_line_separated() {
        let mut rules = RuleSet::new();
        rules.add(".a", DeclarationBlock::new());
        rules.add(".b", DeclarationBlock::new());

        assert_eq!(rule_set_to_css(&rules), ".a {\n}\n\n.b {\n}\n");
    }
}
