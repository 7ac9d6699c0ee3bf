//! Configuration module for the SearXNG search tool
//!
//! Handles loading and validating settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::{Path, PathBuf};
use tracing::info;

/// Environment variable pointing at a settings file
pub const SETTINGS_PATH_ENV: &str = "SEARXNG_TOOL_SETTINGS";

/// Default locations searched for a settings file, in order
pub fn default_paths() -> Vec<PathBuf> {
    let mut paths = vec![
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
    ];
    if let Some(dir) = dirs::config_dir() {
        paths.push(dir.join("searxng-tool/settings.yml"));
    }
    paths
}

/// Load settings from an explicit path, the environment, or the default locations.
///
/// Environment overrides are applied on top of whichever source wins, and the
/// result is validated before it is returned.
pub fn load(explicit: Option<&Path>) -> Result<Settings> {
    let mut settings = match locate(explicit)? {
        Some(path) => {
            info!("Loading settings from: {}", path.display());
            Settings::from_file(&path)?
        }
        None => {
            info!("No settings file found, using defaults");
            Settings::default()
        }
    };
    settings.merge_env();
    settings.validate()?;
    Ok(settings)
}

fn locate(explicit: Option<&Path>) -> Result<Option<PathBuf>> {
    if let Some(path) = explicit {
        if !path.exists() {
            anyhow::bail!("settings file not found: {}", path.display());
        }
        return Ok(Some(path.to_path_buf()));
    }

    if let Ok(path) = std::env::var(SETTINGS_PATH_ENV) {
        let path = PathBuf::from(path);
        if path.exists() {
            return Ok(Some(path));
        }
    }

    Ok(default_paths().into_iter().find(|p| p.exists()))
}
