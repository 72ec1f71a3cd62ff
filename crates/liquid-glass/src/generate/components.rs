//! Component presets assembled from theme-table lookups.
//!
//! Every background, radius, border, shadow, and spacing value comes
//! through the host's [`TokenResolver`]; only structural values (display
//! modes, transforms, transition timing) are fixed here.

use crate::resolve::{require, TokenResolver};
use crate::rules::{DeclarationBlock, RuleSet};
use crate::Result;

/// Easing curve shared by every interactive preset.
pub const EASING: &str = "cubic-bezier(0.4, 0, 0.2, 1)";

/// Transition duration for buttons.
pub const BUTTON_TRANSITION_MS: u32 = 300;

/// Faster transition duration for inputs and segment items.
pub const INPUT_TRANSITION_MS: u32 = 200;

fn transition(duration_ms: u32) -> String {
    format!("all {duration_ms}ms {EASING}")
}

fn pressed_scale() -> DeclarationBlock {
    DeclarationBlock::new().decl("transform", "scale(0.95)")
}

fn border(value: String) -> String {
    format!("1px solid {value}")
}

/// The eleven component presets, in emission order.
pub fn component_presets(t: &dyn TokenResolver) -> Result<RuleSet> {
    let mut rules = RuleSet::new();
    rules.add(".glass-card", card(t)?);
    rules.add(".glass-card-elevated", card_elevated(t)?);
    rules.add(".glass-btn", button(t)?);
    rules.add(".glass-btn-secondary", button_secondary(t)?);
    rules.add(".glass-btn-pill", button_pill(t)?);
    rules.add(".glass-nav", nav(t)?);
    rules.add(".glass-modal", modal(t)?);
    rules.add(".glass-input", input(t)?);
    rules.add(".glass-segment", segment(t)?);
    rules.add(".glass-segment-item", segment_item(t)?);
    rules.add(".glass-segment-item-active", segment_item_active(t)?);
    Ok(rules)
}

fn card(t: &dyn TokenResolver) -> Result<DeclarationBlock> {
    Ok(DeclarationBlock::new()
        .decl("background-color", require(t, "colors.glass.light")?)
        .backdrop_filter("blur(16px) saturate(180%)")
        .decl("border-radius", require(t, "borderRadius.glass-lg")?)
        .decl("border", border(require(t, "colors.glass-border.DEFAULT")?))
        .decl("box-shadow", require(t, "boxShadow.glass")?)
        .decl("padding", require(t, "spacing.6")?))
}

fn card_elevated(t: &dyn TokenResolver) -> Result<DeclarationBlock> {
    Ok(DeclarationBlock::new()
        .decl("background-color", require(t, "colors.glass.strong")?)
        .backdrop_filter("blur(24px) saturate(200%)")
        .decl("border-radius", require(t, "borderRadius.glass-lg")?)
        .decl("border", border(require(t, "colors.glass-border.strong")?))
        .decl("box-shadow", require(t, "boxShadow.glass-elevated")?)
        .decl("padding", require(t, "spacing.6")?))
}

/// Layout scaffold shared by every button preset.
fn button_frame(t: &dyn TokenResolver) -> Result<DeclarationBlock> {
    Ok(DeclarationBlock::new()
        .decl("display", "inline-flex")
        .decl("align-items", "center")
        .decl("justify-content", "center")
        .decl("gap", require(t, "spacing.2")?)
        .decl("padding-left", require(t, "spacing.5")?)
        .decl("padding-right", require(t, "spacing.5")?)
        .decl("padding-top", require(t, "spacing.2.5")?)
        .decl("padding-bottom", require(t, "spacing.2.5")?))
}

fn button(t: &dyn TokenResolver) -> Result<DeclarationBlock> {
    Ok(button_frame(t)?
        .decl("border-radius", require(t, "borderRadius.glass")?)
        .decl("font-weight", "500")
        .decl("background-color", require(t, "colors.glass.light")?)
        .backdrop_filter("blur(16px)")
        .decl("border", border(require(t, "colors.glass-border.subtle")?))
        .decl("box-shadow", require(t, "boxShadow.glass")?)
        .decl("transition", transition(BUTTON_TRANSITION_MS))
        .pseudo(
            "&:hover",
            DeclarationBlock::new()
                .decl("transform", "translateY(-2px)")
                .decl("box-shadow", require(t, "boxShadow.glass-lg")?),
        )
        .pseudo("&:active", pressed_scale()))
}

fn button_secondary(t: &dyn TokenResolver) -> Result<DeclarationBlock> {
    Ok(button_frame(t)?
        .decl("border-radius", require(t, "borderRadius.glass")?)
        .decl("font-weight", "500")
        .decl("background-color", require(t, "colors.glass.subtle")?)
        .backdrop_filter("blur(16px)")
        .decl("border", border(require(t, "colors.glass-border.subtle")?))
        .decl("box-shadow", require(t, "boxShadow.glass")?)
        .decl("transition", transition(BUTTON_TRANSITION_MS))
        .pseudo(
            "&:hover",
            DeclarationBlock::new()
                .decl("transform", "translateY(-2px)")
                .decl("background-color", require(t, "colors.glass.medium")?),
        )
        .pseudo("&:active", pressed_scale()))
}

fn button_pill(t: &dyn TokenResolver) -> Result<DeclarationBlock> {
    Ok(button_frame(t)?
        .decl("border-radius", "9999px")
        .decl("font-size", require(t, "fontSize.sm")?)
        .decl("font-weight", "500")
        .decl("background-color", require(t, "colors.glass.subtle")?)
        .backdrop_filter("blur(16px)")
        .decl("border", border(require(t, "colors.glass-border.subtle")?))
        .decl("box-shadow", require(t, "boxShadow.glass")?)
        .decl("transition", transition(BUTTON_TRANSITION_MS))
        .pseudo(
            "&:hover",
            DeclarationBlock::new().decl("transform", "translateY(-2px)"),
        )
        .pseudo("&:active", pressed_scale()))
}

// Nav and modal carry no interactive states.

fn nav(t: &dyn TokenResolver) -> Result<DeclarationBlock> {
    Ok(DeclarationBlock::new()
        .decl("position", "fixed")
        .decl("top", "0")
        .decl("left", "0")
        .decl("right", "0")
        .decl("z-index", "50")
        .decl("background-color", require(t, "colors.glass.medium")?)
        .backdrop_filter("blur(24px) saturate(180%)")
        .decl(
            "border-bottom",
            border(require(t, "colors.glass-border.subtle")?),
        ))
}

fn modal(t: &dyn TokenResolver) -> Result<DeclarationBlock> {
    let radius_xl = require(t, "borderRadius.glass-xl")?;
    Ok(DeclarationBlock::new()
        .decl("background-color", require(t, "colors.glass.light")?)
        .backdrop_filter("blur(40px) saturate(180%)")
        .decl("border-radius", format!("{radius_xl} {radius_xl} 0 0"))
        .decl("border", border(require(t, "colors.glass-border.DEFAULT")?))
        .decl("box-shadow", "0 -8px 32px rgba(31, 38, 135, 0.2)"))
}

fn input(t: &dyn TokenResolver) -> Result<DeclarationBlock> {
    Ok(DeclarationBlock::new()
        .decl("width", "100%")
        .decl("padding-left", require(t, "spacing.4")?)
        .decl("padding-right", require(t, "spacing.4")?)
        .decl("padding-top", require(t, "spacing.3")?)
        .decl("padding-bottom", require(t, "spacing.3")?)
        .decl("border-radius", require(t, "borderRadius.glass-sm")?)
        .decl("background-color", require(t, "colors.glass.subtle")?)
        .backdrop_filter("blur(16px)")
        .decl("border", border(require(t, "colors.glass-border.subtle")?))
        .decl("outline", "none")
        .decl("transition", transition(INPUT_TRANSITION_MS))
        .pseudo(
            "&::placeholder",
            DeclarationBlock::new().decl("color", "rgba(255, 255, 255, 0.5)"),
        )
        .pseudo(
            "&:focus",
            DeclarationBlock::new()
                .decl("border-color", require(t, "colors.glass-border.strong")?)
                .decl("background-color", require(t, "colors.glass.medium")?),
        ))
}

fn segment(t: &dyn TokenResolver) -> Result<DeclarationBlock> {
    Ok(DeclarationBlock::new()
        .decl("display", "inline-flex")
        .decl("border-radius", require(t, "borderRadius.glass-sm")?)
        .decl("background-color", require(t, "colors.glass.subtle")?)
        .backdrop_filter("blur(16px)")
        .decl("border", border(require(t, "colors.glass-border.subtle")?))
        .decl("padding", require(t, "spacing.1")?))
}

fn segment_item(t: &dyn TokenResolver) -> Result<DeclarationBlock> {
    Ok(DeclarationBlock::new()
        .decl("padding-left", require(t, "spacing.4")?)
        .decl("padding-right", require(t, "spacing.4")?)
        .decl("padding-top", require(t, "spacing.2")?)
        .decl("padding-bottom", require(t, "spacing.2")?)
        .decl("border-radius", require(t, "borderRadius.glass-sm")?)
        .decl("font-size", require(t, "fontSize.sm")?)
        .decl("font-weight", "500")
        .decl("transition", transition(INPUT_TRANSITION_MS)))
}

fn segment_item_active(t: &dyn TokenResolver) -> Result<DeclarationBlock> {
    Ok(DeclarationBlock::new()
        .decl("background-color", require(t, "colors.glass.light")?)
        .decl("box-shadow", require(t, "boxShadow.glass")?))
}
