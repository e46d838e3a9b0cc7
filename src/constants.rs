//! Constants
//!
//! Names and defaults shared across components and the demo binary.

/// Application name used for config directories and log files
pub const APP_NAME: &str = "ui-patterns";

/// Storage key checked by the authentication guard
pub const AUTH_TOKEN_KEY: &str = "authToken";

/// Shown in place of guarded content when no token is present
pub const LOGIN_MESSAGE: &str = "Please log in to access this page.";

/// Config file name inside the config directory
pub const CONFIG_FILE_NAME: &str = "config.toml";

/// Default tracing directive when neither config nor `RUST_LOG` sets one
pub const DEFAULT_LOG_LEVEL: &str = "info";
