//! Application configuration module
//!
//! This module provides type-safe configuration loading from environment variables
//! using the `config` and `dotenvy` crates. Configuration is loaded with the
//! `MAITRI` prefix and nested values use double underscores as separators.
//! Every section has defaults, so an empty environment yields a working demo.
//!
//! # Example
//!
//! ```no_run
//! use maitri::config::AppConfig;
//!
//! let config = AppConfig::load().expect("Failed to load configuration");
//! config.validate().expect("Invalid configuration");
//!
//! println!("Capture window: {}s", config.session.capture_duration_secs);
//! ```

mod app;
mod auth;
mod error;
mod features;
mod report;
mod session;

pub use app::{AppSettings, Environment};
pub use auth::AuthConfig;
pub use error::{ConfigError, ValidationError};
pub use features::FeatureFlags;
pub use report::ReportConfig;
pub use session::SessionConfig;

use serde::Deserialize;

/// Root application configuration
///
/// Load using [`AppConfig::load()`] which reads from environment variables.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Environment and logging
    #[serde(default)]
    pub app: AppSettings,

    /// Capture window and countdown
    #[serde(default)]
    pub session: SessionConfig,

    /// Placeholder report policy
    #[serde(default)]
    pub report: ReportConfig,

    /// Login gate credentials
    #[serde(default)]
    pub auth: AuthConfig,

    /// Feature flags
    #[serde(default)]
    pub features: FeatureFlags,
}

impl AppConfig {
    /// Load configuration from environment variables
    ///
    /// This function:
    /// 1. Loads `.env` file if present (for development)
    /// 2. Reads environment variables with `MAITRI` prefix
    /// 3. Uses `__` (double underscore) to separate nested values
    /// 4. Deserializes into typed configuration structs
    ///
    /// # Environment Variable Format
    ///
    /// - `MAITRI__SESSION__CAPTURE_DURATION_SECS=30` -> `session.capture_duration_secs = 30`
    /// - `MAITRI__REPORT__SEED=42` -> `report.seed = Some(42)`
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if values cannot be parsed into expected types.
    pub fn load() -> Result<Self, ConfigError> {
        // Load .env file if present (development)
        dotenvy::dotenv().ok();

        let config = config::Config::builder()
            .add_source(
                config::Environment::default()
                    .prefix("MAITRI")
                    .separator("__"),
            )
            .build()?
            .try_deserialize()?;

        Ok(config)
    }

    /// Validate all configuration values
    ///
    /// # Errors
    ///
    /// Returns `ValidationError` for the first section that fails.
    pub fn validate(&self) -> Result<(), ValidationError> {
        self.app.validate()?;
        self.session.validate()?;
        self.report.validate()?;
        self.auth.validate()?;
        Ok(())
    }

    /// Check if running in production environment
    pub fn is_production(&self) -> bool {
        self.app.is_production()
    }
}
