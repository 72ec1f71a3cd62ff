//! Rule data model: declarations, rules, and ordered rule sets.

mod declaration;
mod rule;
mod ruleset;

pub use declaration::{Declaration, DeclarationBlock, NestedBlock};
pub use rule::{MediaRule, StyleRule};
pub use ruleset::{CssRule, RuleSet};
