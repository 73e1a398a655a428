//! Telemetry and logging initialization.
//!
//! Sets up structured logging with tracing and optional JSON output.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::LoggingConfig;

/// Initialize telemetry (logging and tracing).
///
/// Returns `Ok(false)` when a global subscriber was already installed, which
/// happens whenever several tests in one binary initialise logging.
pub fn init_telemetry(log_level: &str, json_format: bool) -> anyhow::Result<bool> {
    let filter = EnvFilter::try_new(log_level)?;

    let installed = if json_format {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().json())
            .try_init()
            .is_ok()
    } else {
        tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().pretty())
            .try_init()
            .is_ok()
    };

    Ok(installed)
}

/// Initialize telemetry from the `[logging]` section of the configuration.
pub fn init_from_config(config: &LoggingConfig) -> anyhow::Result<bool> {
    init_telemetry(&config.level, config.json)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_telemetry_is_repeatable() {
        assert!(init_telemetry("info", false).is_ok());
        assert!(!init_telemetry("debug", true).unwrap());
    }

    #[test]
    fn test_invalid_filter() {
        assert!(init_telemetry("primer_vm=notalevel", false).is_err());
    }
}
