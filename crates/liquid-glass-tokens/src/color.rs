//! Glass fill and border color tiers.

/// Semi-transparent fill tiers: a light (white) and a dark (black) family.
///
/// Within each family the alpha channel strictly increases in tier order:
/// `subtle < medium < light < strong` and `dark < dark_medium < dark_strong`.
/// The ordering is a construction-time contract verified by tests, not a
/// runtime check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlassColors {
    /// Faintest white fill.
    pub subtle: String,
    /// Low-emphasis white fill.
    pub medium: String,
    /// Standard white fill, the default card/surface tint.
    pub light: String,
    /// Highest-emphasis white fill.
    pub strong: String,
    /// Faintest black fill.
    pub dark: String,
    /// Mid black fill.
    pub dark_medium: String,
    /// Strongest black fill.
    pub dark_strong: String,
}

impl Default for GlassColors {
    fn default() -> Self {
        Self {
            subtle: "rgba(255, 255, 255, 0.08)".into(),
            medium: "rgba(255, 255, 255, 0.10)".into(),
            light: "rgba(255, 255, 255, 0.15)".into(),
            strong: "rgba(255, 255, 255, 0.25)".into(),
            dark: "rgba(0, 0, 0, 0.15)".into(),
            dark_medium: "rgba(0, 0, 0, 0.25)".into(),
            dark_strong: "rgba(0, 0, 0, 0.35)".into(),
        }
    }
}

impl GlassColors {
    /// Light-family tiers in ascending alpha order.
    pub fn light_tiers(&self) -> [(&'static str, &str); 4] {
        [
            ("subtle", self.subtle.as_str()),
            ("medium", self.medium.as_str()),
            ("light", self.light.as_str()),
            ("strong", self.strong.as_str()),
        ]
    }

    /// Dark-family tiers in ascending alpha order.
    pub fn dark_tiers(&self) -> [(&'static str, &str); 3] {
        [
            ("dark", self.dark.as_str()),
            ("dark-medium", self.dark_medium.as_str()),
            ("dark-strong", self.dark_strong.as_str()),
        ]
    }
}

/// Border color tiers, alpha strictly increasing `subtle < base < strong`.
///
/// `base` is published under the `DEFAULT` token key, so `glass-border`
/// resolves without a tier suffix.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GlassBorderColors {
    /// Hairline border for low-emphasis chrome.
    pub subtle: String,
    /// Standard border.
    pub base: String,
    /// High-emphasis border (focus rings, elevated cards).
    pub strong: String,
}

impl Default for GlassBorderColors {
    fn default() -> Self {
        Self {
            subtle: "rgba(255, 255, 255, 0.10)".into(),
            base: "rgba(255, 255, 255, 0.20)".into(),
            strong: "rgba(255, 255, 255, 0.30)".into(),
        }
    }
}

impl GlassBorderColors {
    /// Tiers in ascending alpha order.
    pub fn tiers(&self) -> [(&'static str, &str); 3] {
        [
            ("subtle", self.subtle.as_str()),
            ("DEFAULT", self.base.as_str()),
            ("strong", self.strong.as_str()),
        ]
    }
}

/// Alpha channel of a CSS color value, if it parses as a color.
pub fn alpha_component(value: &str) -> Option<f32> {
    csscolorparser::parse(value).ok().map(|color| color.a)
}
