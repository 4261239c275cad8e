//! Shared configuration types for the postcheck suite
//!
//! This crate provides the configuration consumed by both the `postcheck`
//! runner binary and the integration tests, so both hit the same target.

mod api;
mod error;

pub use api::{ApiConfig, DEFAULT_BASE_URL, POSTS_PATH};
pub use error::{ConfigError, ConfigResult};

use std::env;

/// Configuration shared by the runner and the test suite
#[derive(Debug, Clone)]
pub struct SuiteConfig {
    /// API under test
    pub api: ApiConfig,

    /// Run against the real service instead of the local mock server
    pub live: bool,

    /// Fallback log level (from LOG_LEVEL), used when RUST_LOG is unset or invalid
    pub log_level: String,
}

impl SuiteConfig {
    /// Load suite configuration from environment variables
    pub fn from_env() -> ConfigResult<Self> {
        Ok(Self {
            api: ApiConfig::from_env()?,
            live: parse_flag("POSTCHECK_LIVE")?,
            log_level: get_env_or_default("LOG_LEVEL", "info"),
        })
    }

    /// Load `.env` (if present) and then read configuration from the environment
    pub fn load() -> ConfigResult<Self> {
        dotenvy::dotenv().ok();
        Self::from_env()
    }
}

/// Helper function to get an optional environment variable with a default
pub fn get_env_or_default(name: &str, default: &str) -> String {
    env::var(name).unwrap_or_else(|_| default.to_string())
}

/// Helper function to parse an environment variable into a specific type
pub fn parse_env<T>(name: &str, default: T) -> ConfigResult<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    match env::var(name) {
        Ok(val) => val
            .parse()
            .map_err(|e| ConfigError::InvalidValue(name.to_string(), format!("{}", e))),
        Err(_) => Ok(default),
    }
}

/// Helper function to read a boolean switch (`1/true/yes/on`, `0/false/no/off`)
///
/// An unset or empty variable is `false`.
pub fn parse_flag(name: &str) -> ConfigResult<bool> {
    let raw = match env::var(name) {
        Ok(val) => val,
        Err(_) => return Ok(false),
    };

    match raw.trim().to_lowercase().as_str() {
        "" | "0" | "false" | "no" | "off" => Ok(false),
        "1" | "true" | "yes" | "on" => Ok(true),
        other => Err(ConfigError::InvalidValue(
            name.to_string(),
            format!("expected a boolean, got `{}`", other),
        )),
    }
}
