//! Error types for ui-patterns
//!
//! Centralized error handling using snafu for ergonomic error definitions.

use snafu::Snafu;

/// Main error type for the library
#[derive(Debug, Snafu)]
pub enum Error {
    /// A component was rendered outside the provider it depends on
    #[snafu(display("{component} must be rendered inside a {context} provider"))]
    MissingContext {
        component: &'static str,
        context: &'static str,
    },

    /// An event was dispatched to an element id that is not in the current tree
    #[snafu(display("No element with id `{id}` in the rendered tree"))]
    UnknownTarget { id: String },

    /// Invalid input or configuration
    #[snafu(display("Invalid: {message}"))]
    Invalid { message: String },

    /// IO error (config and log files)
    #[snafu(display("IO error: {source}"))]
    Io { source: std::io::Error },

    /// JSON serialization error
    #[snafu(display("JSON error: {source}"))]
    Json { source: serde_json::Error },

    /// TOML deserialization error
    #[snafu(display("TOML parse error: {source}"))]
    TomlDe { source: toml::de::Error },

    /// TOML serialization error
    #[snafu(display("TOML serialize error: {source}"))]
    TomlSe { source: toml::ser::Error },
}

impl Error {
    /// Whether this error is a programmer mistake in how components are composed
    pub fn is_misuse(&self) -> bool {
        matches!(self, Error::MissingContext { .. })
    }
}

impl From<std::io::Error> for Error {
    fn from(source: std::io::Error) -> Self {
        Error::Io { source }
    }
}

impl From<serde_json::Error> for Error {
    fn from(source: serde_json::Error) -> Self {
        Error::Json { source }
    }
}

impl From<toml::de::Error> for Error {
    fn from(source: toml::de::Error) -> Self {
        Error::TomlDe { source }
    }
}

impl From<toml::ser::Error> for Error {
    fn from(source: toml::ser::Error) -> Self {
        Error::TomlSe { source }
    }
}

/// Result type alias for convenience
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_context_display() {
        let err = Error::MissingContext {
            component: "Tab",
            context: "Tabs",
        };
        assert_eq!(err.to_string(), "Tab must be rendered inside a Tabs provider");
        assert!(err.is_misuse());
    }

    #[test]
    fn test_unknown_target_is_not_misuse() {
        let err = Error::UnknownTarget { id: "x".to_string() };
        assert!(!err.is_misuse());
    }
}
