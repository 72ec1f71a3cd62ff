//! Rule registration: host-supplied callbacks collecting generated rules.

use crate::css;
use crate::rules::{RuleSet, StyleRule};

/// Registration capability supplied by the host styling system.
///
/// The generator emits structured rule sets against this interface; the
/// host decides how to merge and serialize them.
pub trait RuleRegistry {
    /// Register single-purpose utility rules.
    fn register_utilities(&mut self, rules: RuleSet);

    /// Register composite component presets.
    fn register_components(&mut self, rules: RuleSet);
}

/// The bundled registry: collects rule sets in registration order.
///
/// Used by tests and by hosts that just want the serialized CSS.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct StyleCollector {
    utilities: Vec<RuleSet>,
    components: Vec<RuleSet>,
}

impl StyleCollector {
    /// Create an empty collector.
    pub fn new() -> Self {
        Self::default()
    }

    /// Registered utility rule sets, in registration order.
    pub fn utilities(&self) -> &[RuleSet] {
        &self.utilities
    }

    /// Registered component rule sets, in registration order.
    pub fn components(&self) -> &[RuleSet] {
        &self.components
    }

    /// First style rule with the given selector, across all rule sets.
    pub fn find(&self, selector: &str) -> Option<&StyleRule> {
        self.utilities
            .iter()
            .chain(self.components.iter())
            .find_map(|rules| rules.find(selector))
    }

    /// Serialize everything to CSS, utilities before components.
    pub fn to_css(&self) -> String {
        let mut out = String::new();
        for rules in self.utilities.iter().chain(self.components.iter()) {
            css::write_rule_set(&mut out, rules);
        }
        out
    }
}

impl RuleRegistry for StyleCollector {
    fn register_utilities(&mut self, rules: RuleSet) {
        self.utilities.push(rules);
    }

    fn register_components(&mut self, rules: RuleSet) {
        self.components.push(rules);
    }
}
