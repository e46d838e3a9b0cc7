//! ConfigStore - Local Configuration Storage

use std::fs;
use std::path::Path;

use crate::domain::AppConfig;
use crate::error::Result;
use crate::helpers::{default_config_path, ensure_dir};

/// Load and validate the config at `path`; a missing file yields defaults
pub fn load_config(path: &Path) -> Result<AppConfig> {
    if !path.exists() {
        tracing::info!(path = %path.display(), "config file not found, using defaults");
        return Ok(AppConfig::default());
    }

    let content = fs::read_to_string(path)?;
    let config: AppConfig = toml::from_str(&content)?;
    config.validate()?;
    tracing::info!(path = %path.display(), tabs = config.tabs.items.len(), "config loaded");
    Ok(config)
}

/// Load the config from the platform config directory
pub fn load_default_config() -> Result<AppConfig> {
    load_config(&default_config_path()?)
}

/// Save `config` to `path` as pretty TOML
pub fn save_config(path: &Path, config: &AppConfig) -> Result<()> {
    if let Some(parent) = path.parent() {
        ensure_dir(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}
