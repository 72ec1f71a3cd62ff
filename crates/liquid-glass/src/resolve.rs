//! Token resolution: host-supplied lookup from dotted path to CSS value.

use std::borrow::Cow;

use liquid_glass_tokens::TokenMap;

use crate::{Error, Result};

/// Lookup capability supplied by the host styling system.
///
/// The generator only ever names dotted token paths
/// (`colors.glass.light`); it never hardcodes resolved values. Hosts that
/// namespace or override tokens implement this over their own theme store.
pub trait TokenResolver {
    /// Resolve a dotted token path to a CSS value.
    fn resolve(&self, path: &str) -> Option<Cow<'_, str>>;
}

impl TokenResolver for TokenMap {
    fn resolve(&self, path: &str) -> Option<Cow<'_, str>> {
        self.get(path).map(Cow::Borrowed)
    }
}

/// Resolve a token path, surfacing a missing entry as a configuration
/// error.
pub fn require(resolver: &dyn TokenResolver, path: &str) -> Result<String> {
    resolver
        .resolve(path)
        .map(Cow::into_owned)
        .ok_or_else(|| Error::missing_token(path))
}
