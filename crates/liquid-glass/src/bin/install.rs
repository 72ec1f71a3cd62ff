//! Post-install hook: copy the designer guide to the user's skill
//! directory.
//!
//! Always exits successfully. The guide is optional; the plugin works
//! without it.

fn main() {
    if let Some(path) = liquid_glass::install::install_design_guide() {
        println!(
            "\x1b[36m\u{2713}\x1b[0m Liquid Glass skill installed \u{2192} {}",
            path.display()
        );
    }
}
