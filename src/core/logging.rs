//! Tracing subscriber setup

use tracing_subscriber::{fmt, EnvFilter};
use crate::core::config::LoggingConfig;
use crate::core::error::{Error, Result};

/// Install the global fmt subscriber.
///
/// `RUST_LOG` wins when set; otherwise the configured level applies to this crate and
/// to `tower_http` request tracing.
pub fn init_tracing(config: &LoggingConfig) -> Result<()> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("{0},tower_http={0}", config.level)));

    let builder = fmt().with_env_filter(filter).with_target(true);
    let installed = match config.format.as_str() {
        "compact" => builder.compact().try_init(),
        _ => builder.pretty().try_init(),
    };

    installed.map_err(|e| Error::config(format!("Failed to install tracing subscriber: {}", e)))
}
