//! Configuration module for Creator Finder
//!
//! Handles loading settings from YAML files and environment variables.

mod settings;

pub use settings::*;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// Environment variable pointing at an explicit settings file
pub const SETTINGS_PATH_ENV: &str = "CREATOR_FINDER_SETTINGS_PATH";

/// First settings file that exists, checking the explicit path first
pub fn locate() -> Option<PathBuf> {
    let mut candidates = Vec::new();

    if let Ok(path) = std::env::var(SETTINGS_PATH_ENV) {
        candidates.push(PathBuf::from(path));
    }

    candidates.extend([
        PathBuf::from("settings.yml"),
        PathBuf::from("config/settings.yml"),
        PathBuf::from("/etc/creator-finder/settings.yml"),
    ]);

    if let Some(dir) = dirs::config_dir() {
        candidates.push(dir.join("creator-finder/settings.yml"));
    }

    candidates.into_iter().find(|p| p.exists())
}

/// Load settings from `path`, or defaults when there is none.
///
/// Environment overrides are applied on top in every case.
pub fn load_from(path: Option<&Path>) -> Result<Settings> {
    let mut settings = match path {
        Some(path) => Settings::from_file(path)?,
        None => Settings::default(),
    };

    settings.merge_env();
    settings.validate()?;
    Ok(settings)
}
