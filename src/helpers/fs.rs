//! File System Utilities
//!
//! Configuration directory management.

use crate::constants::{APP_NAME, CONFIG_FILE_NAME};
use crate::error::{Error, Result};
use directories::ProjectDirs;
use std::fs;
use std::path::{Path, PathBuf};

/// Get or create the application's configuration directory
///
/// Platform-specific locations:
/// - **Linux**: `~/.config/ui-patterns/` or `$XDG_CONFIG_HOME/ui-patterns/`
/// - **macOS**: `~/Library/Application Support/com.ui-patterns.ui-patterns/`
/// - **Windows**: `C:\Users\<User>\AppData\Roaming\ui-patterns\ui-patterns\config\`
pub fn get_or_create_config_dir() -> Result<PathBuf> {
    let Some(project_dirs) = ProjectDirs::from("com", APP_NAME, APP_NAME) else {
        return Err(Error::Invalid {
            message: "Could not determine project directories".to_string(),
        });
    };

    let config_dir = project_dirs.config_dir();
    ensure_dir(config_dir)?;
    Ok(config_dir.to_path_buf())
}

/// Path of the default config file (the directory is created if missing)
pub fn default_config_path() -> Result<PathBuf> {
    Ok(get_or_create_config_dir()?.join(CONFIG_FILE_NAME))
}

/// Create `dir` and its parents if it doesn't exist
pub fn ensure_dir(dir: &Path) -> Result<()> {
    if !dir.exists() {
        fs::create_dir_all(dir)?;
    }
    Ok(())
}
