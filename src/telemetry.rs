//! Logging setup.
//!
//! Installs a global `tracing` subscriber. `RUST_LOG` takes precedence over
//! the configured filter.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

use crate::config::{LogFormat, LoggingConfig};
use crate::error::{EngineError, EngineResult};

/// Builds the filter from `RUST_LOG`, falling back to `config.filter`.
pub fn env_filter(config: &LoggingConfig) -> EngineResult<EnvFilter> {
    EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&config.filter))
        .map_err(|e| EngineError::InvalidConfig {
            message: format!("invalid logging.filter '{}': {}", config.filter, e),
        })
}

/// Installs the global subscriber.
///
/// Fails if the filter does not parse or a global subscriber is already set.
pub fn init_logging(config: &LoggingConfig) -> EngineResult<()> {
    let filter = env_filter(config)?;
    let registry = tracing_subscriber::registry().with(filter);

    let result = match config.format {
        LogFormat::Json => registry.with(fmt::layer().json()).try_init(),
        LogFormat::Pretty => registry.with(fmt::layer().pretty()).try_init(),
    };

    result.map_err(|e| EngineError::InvalidConfig {
        message: format!("failed to install logger: {}", e),
    })
}
