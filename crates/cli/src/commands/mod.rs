pub mod build;
pub mod preview;
pub mod serve;
pub mod validate;

use anyhow::{Context, Result};
use couture_core::Site;
use std::path::Path;

/// Load a site directory, turning core errors into CLI errors
pub(crate) fn load_site(path: &Path) -> Result<Site> {
    if !path.exists() {
        anyhow::bail!("Site directory does not exist: {}", path.display());
    }

    Site::load(path).with_context(|| format!("Failed to load site from {}", path.display()))
}
