//! Config - Application Configuration

use std::path::PathBuf;

use ahash::AHashSet;
use serde::{Deserialize, Serialize};

use crate::constants::{AUTH_TOKEN_KEY, DEFAULT_LOG_LEVEL};
use crate::error::{Error, Result};

/// Main application configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Logging configuration
    pub log: LogConfig,
    /// Demo tab group
    pub tabs: TabsConfig,
    /// Authentication guard settings
    pub auth: AuthConfig,
}

impl AppConfig {
    /// Check invariants serde cannot express
    pub fn validate(&self) -> Result<()> {
        self.tabs.validate()
    }
}

/// Logging configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Tracing filter directive (e.g. "info", "ui_patterns=debug")
    pub level: String,
    /// Directory for daily rolling log files; stderr only when unset
    pub directory: Option<PathBuf>,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: DEFAULT_LOG_LEVEL.to_string(),
            directory: None,
        }
    }
}

/// One tab with its panel content
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TabItem {
    /// Key shared by the tab and its panel
    pub key: String,
    /// Tab label
    pub label: String,
    /// Panel body
    pub content: String,
}

impl TabItem {
    /// Create a tab item
    pub fn new(key: impl Into<String>, label: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            label: label.into(),
            content: content.into(),
        }
    }
}

/// Tab group configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TabsConfig {
    /// Initially active key; need not match any item
    pub default: String,
    /// Tabs in display order
    pub items: Vec<TabItem>,
}

impl Default for TabsConfig {
    fn default() -> Self {
        Self {
            default: "1".to_string(),
            items: vec![
                TabItem::new("1", "Tab 1", "Content for Tab 1"),
                TabItem::new("2", "Tab 2", "Content for Tab 2"),
            ],
        }
    }
}

impl TabsConfig {
    /// Reject empty or duplicate keys
    pub fn validate(&self) -> Result<()> {
        let mut seen = AHashSet::new();
        for item in &self.items {
            if item.key.is_empty() {
                return Err(Error::Invalid {
                    message: format!("tab `{}` has an empty key", item.label),
                });
            }
            if !seen.insert(item.key.as_str()) {
                return Err(Error::Invalid {
                    message: format!("duplicate tab key `{}`", item.key),
                });
            }
        }

        if !seen.contains(&self.default.as_str()) {
            tracing::warn!(default = %self.default, "default tab matches no item");
        }
        Ok(())
    }
}

/// Authentication guard settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AuthConfig {
    /// Storage key holding the token
    pub token_key: String,
    /// Token preloaded into the in-memory store (demo only)
    pub token: Option<String>,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            token_key: AUTH_TOKEN_KEY.to_string(),
            token: None,
        }
    }
}
