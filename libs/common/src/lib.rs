//! Common library for the admin panel workspace
//!
//! This crate provides shared functionality used by the panel binaries,
//! including configuration loading, error handling, and tracing setup.
//!
//! ```rust,no_run
//! use common::{PanelConfig, telemetry::init_tracing};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = PanelConfig::from_env()?;
//!     init_tracing(&config.log_filter)?;
//!     println!("Users endpoint: {}", config.api_url);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod telemetry;

pub use crate::config::PanelConfig;
pub use crate::error::{ConfigError, ConfigResult};
