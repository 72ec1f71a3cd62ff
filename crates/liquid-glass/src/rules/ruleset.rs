//! Ordered rule collections.

use super::{DeclarationBlock, MediaRule, StyleRule};

/// A top-level entry in a rule set.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CssRule {
    /// A plain style rule.
    Style(StyleRule),
    /// A media-scoped rule group.
    Media(MediaRule),
}

/// An ordered collection of rules.
///
/// Insertion assigns a monotonically increasing source order; rules are
/// stored in `Vec`s so identical input always yields identical output.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RuleSet {
    /// The rules in emission order.
    pub rules: Vec<CssRule>,
}

impl RuleSet {
    /// Create an empty rule set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a style rule for a selector.
    pub fn add(&mut self, selector: impl Into<String>, block: DeclarationBlock) {
        self.push_style(StyleRule::new(selector, block));
    }

    /// Append a pre-built style rule, re-assigning its order.
    pub fn push_style(&mut self, mut rule: StyleRule) {
        rule.order = self.rules.len() as u32;
        self.rules.push(CssRule::Style(rule));
    }

    /// Append a media-scoped rule group.
    pub fn push_media(&mut self, rule: MediaRule) {
        self.rules.push(CssRule::Media(rule));
    }

    /// Number of top-level rules.
    pub fn len(&self) -> usize {
        self.rules.len()
    }

    /// Check if the rule set is empty.
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Iterate over top-level rules.
    pub fn iter(&self) -> impl Iterator<Item = &CssRule> {
        self.rules.iter()
    }

    /// Iterate over plain style rules, skipping media groups.
    pub fn style_rules(&self) -> impl Iterator<Item = &StyleRule> {
        self.rules.iter().filter_map(|r| match r {
            CssRule::Style(rule) => Some(rule),
            CssRule::Media(_) => None,
        })
    }

    /// Iterate over media-scoped groups.
    pub fn media_rules(&self) -> impl Iterator<Item = &MediaRule> {
        self.rules.iter().filter_map(|r| match r {
            CssRule::Media(rule) => Some(rule),
            CssRule::Style(_) => None,
        })
    }

    /// First plain style rule with the given selector.
    pub fn find(&self, selector: &str) -> Option<&StyleRule> {
        self.style_rules().find(|r| r.selector == selector)
    }
}
