//! Platform directories for paradise-nursery
//!
//! - Linux: `~/.config/paradise-nursery/`, `~/.cache/paradise-nursery/`
//! - macOS: `~/Library/Application Support/paradise-nursery/`, `~/Library/Caches/paradise-nursery/`
//! - Windows: `%APPDATA%\paradise-nursery\`, `%LOCALAPPDATA%\paradise-nursery\`

use anyhow::{Context, Result};
use std::path::{Path, PathBuf};

const APP_NAME: &str = "paradise-nursery";

const CATALOG_FILE: &str = "catalog.json";

/// `<base>/paradise-nursery`, created on first use
fn app_dir(base: Option<PathBuf>, kind: &str) -> Result<PathBuf> {
    let dir = base
        .with_context(|| format!("Could not determine {} directory", kind))?
        .join(APP_NAME);
    ensure_dir(&dir)?;
    Ok(dir)
}

fn ensure_dir(dir: &Path) -> Result<()> {
    std::fs::create_dir_all(dir).with_context(|| format!("Failed to create {}", dir.display()))
}

pub fn config_dir() -> Result<PathBuf> {
    app_dir(dirs::config_dir(), "config")
}

/// Where release builds write their log files
pub fn cache_dir() -> Result<PathBuf> {
    app_dir(dirs::cache_dir(), "cache")
}

/// Catalog used when neither the command line nor the config names one
pub fn default_catalog_path() -> Result<PathBuf> {
    Ok(config_dir()?.join(CATALOG_FILE))
}
