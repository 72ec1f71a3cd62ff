//! Corner radius scale.

/// Corner radius tiers, strictly increasing in pixel value.
///
/// `base` is published as the unsuffixed `borderRadius.glass` token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadiusScale {
    /// Inputs, segmented controls.
    pub sm: String,
    /// Buttons.
    pub base: String,
    /// Cards.
    pub lg: String,
    /// Modal sheets.
    pub xl: String,
}

impl Default for RadiusScale {
    fn default() -> Self {
        Self {
            sm: "12px".into(),
            base: "16px".into(),
            lg: "24px".into(),
            xl: "32px".into(),
        }
    }
}

impl RadiusScale {
    /// Tiers in ascending order.
    pub fn tiers(&self) -> [(&'static str, &str); 4] {
        [
            ("sm", self.sm.as_str()),
            ("DEFAULT", self.base.as_str()),
            ("lg", self.lg.as_str()),
            ("xl", self.xl.as_str()),
        ]
    }
}

/// Pixel magnitude of a `px` length value, if it parses.
pub fn px_value(value: &str) -> Option<f32> {
    value.strip_suffix("px")?.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_is_strictly_increasing() {
        let scale = RadiusScale::default();
        let tiers = scale.tiers();
        for pair in tiers.windows(2) {
            let lo = px_value(pair[0].1).unwrap();
            let hi = px_value(pair[1].1).unwrap();
            assert!(lo < hi, "{} must be below {}", pair[0].0, pair[1].0);
        }
    }

    #[test]
    fn px_value_parses() {
        assert_eq!(px_value("16px"), Some(16.0));
        assert_eq!(px_value("16"), None);
        assert_eq!(px_value("1rem"), None);
    }
}
