//! Composite shadow presets.
//!
//! Shadow values are opaque strings (offset, blur, color, optional inset
//! component); nothing downstream inspects their structure.

/// Named shadow presets for glass surfaces.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShadowScale {
    /// Standard ambient shadow.
    pub base: String,
    /// Larger shadow with an inner specular highlight.
    pub lg: String,
    /// Top-edge inner highlight only.
    pub inset: String,
    /// Deep shadow for elevated cards.
    pub elevated: String,
}

impl Default for ShadowScale {
    fn default() -> Self {
        Self {
            base: "0 8px 32px rgba(31, 38, 135, 0.15)".into(),
            lg: "0 8px 32px rgba(31, 38, 135, 0.20), inset 0 4px 20px rgba(255, 255, 255, 0.15)"
                .into(),
            inset: "inset 0 1px 0 rgba(255, 255, 255, 0.20)".into(),
            elevated:
                "0 16px 48px rgba(31, 38, 135, 0.25), inset 0 2px 12px rgba(255, 255, 255, 0.10)"
                    .into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn elevated_and_lg_carry_inner_highlight() {
        let shadows = ShadowScale::default();
        assert!(shadows.lg.contains("inset"));
        assert!(shadows.elevated.contains("inset"));
        assert!(!shadows.base.contains("inset"));
    }
}
