//! Logging - Tracing Subscriber Setup
//!
//! Logs go to stderr, and additionally to a daily rolling file when a log
//! directory is configured. `RUST_LOG` overrides the configured level.

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::constants::APP_NAME;
use crate::domain::LogConfig;
use crate::error::{Error, Result};
use crate::helpers::ensure_dir;

/// Build the filter: `RUST_LOG` first, then the configured directive
pub fn build_filter(config: &LogConfig) -> Result<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.level))
        .map_err(|e| Error::Invalid {
            message: format!("invalid log filter `{}`: {e}", config.level),
        })
}

/// Install the global subscriber
///
/// Keep the returned guard alive for as long as file logging should flush.
pub fn init_logging(config: &LogConfig) -> Result<Option<WorkerGuard>> {
    let filter = build_filter(config)?;

    let (file_layer, guard) = match &config.directory {
        Some(dir) => {
            ensure_dir(dir)?;
            let appender = tracing_appender::rolling::daily(dir, format!("{APP_NAME}.log"));
            let (writer, guard) = tracing_appender::non_blocking(appender);
            (
                Some(fmt::layer().with_ansi(false).with_writer(writer)),
                Some(guard),
            )
        }
        None => (None, None),
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .with(file_layer)
        .try_init()
        .map_err(|e| Error::Invalid {
            message: format!("logging already initialized: {e}"),
        })?;

    Ok(guard)
}
