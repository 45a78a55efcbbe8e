//! Tracing setup shared by the workspace binaries

use tracing_subscriber::{EnvFilter, FmtSubscriber};

use crate::error::{ConfigError, ConfigResult};

/// Install the global fmt subscriber
///
/// `RUST_LOG` takes precedence over `default_filter` when it is set.
pub fn init_tracing(default_filter: &str) -> ConfigResult<()> {
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(default_filter))
        .map_err(|e| ConfigError::Invalid(format!("Invalid log filter: {}", e)))?;

    let subscriber = FmtSubscriber::builder()
        .with_env_filter(filter)
        .with_target(false)
        .finish();

    tracing::subscriber::set_global_default(subscriber)
        .map_err(|e| ConfigError::Telemetry(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serial_test::serial;

    #[test]
    #[serial]
    fn test_init_tracing_rejects_bad_directive() {
        // SAFETY: tests touching the environment are serialised.
        unsafe { std::env::remove_var("RUST_LOG") };

        let result = init_tracing("admin_panel=loudest");
        assert!(matches!(result, Err(ConfigError::Invalid(_))));
    }

    #[test]
    #[serial]
    fn test_init_tracing_twice_is_an_error() {
        // SAFETY: tests touching the environment are serialised.
        unsafe { std::env::remove_var("RUST_LOG") };

        // The first call may already have lost to another test in this binary.
        let _ = init_tracing("info");
        let second = init_tracing("info");
        assert!(matches!(second, Err(ConfigError::Telemetry(_))));
    }
}
