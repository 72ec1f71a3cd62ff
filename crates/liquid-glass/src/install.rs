//! Best-effort installation of the designer guide.
//!
//! The guide is an auxiliary artifact: its installation must never fail
//! the encompassing install process. Every failure is swallowed, logged at
//! debug level, and reported as `None`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// Designer-facing guidance shipped with the plugin.
pub const DESIGN_GUIDE: &str = include_str!("../skill/liquidglass-design.md");

/// File name of the installed guide.
pub const GUIDE_FILE_NAME: &str = "liquidglass-design.md";

/// Install the guide under the user's skill directory
/// (`~/.claude/skills/`).
///
/// Skipped entirely in CI environments. Returns the installed path, or
/// `None` when skipped or on any failure.
pub fn install_design_guide() -> Option<PathBuf> {
    if env::var_os("CI").is_some() || env::var_os("CONTINUOUS_INTEGRATION").is_some() {
        tracing::debug!("CI environment detected, skipping design guide install");
        return None;
    }
    let home = dirs::home_dir()?;
    install_design_guide_into(&home.join(".claude").join("skills"))
}

/// Write the guide into `dir`, creating the directory if needed.
///
/// The bounded best-effort core: never fails outward, never panics.
pub fn install_design_guide_into(dir: &Path) -> Option<PathBuf> {
    match try_install(dir) {
        Ok(path) => {
            tracing::debug!(path = %path.display(), "installed design guide");
            Some(path)
        }
        Err(error) => {
            tracing::debug!(%error, "design guide install skipped");
            None
        }
    }
}

fn try_install(dir: &Path) -> Result<PathBuf> {
    fs::create_dir_all(dir).map_err(|e| Error::io(dir, e))?;
    let dest = dir.join(GUIDE_FILE_NAME);
    fs::write(&dest, DESIGN_GUIDE).map_err(|e| Error::io(&dest, e))?;
    Ok(dest)
}
