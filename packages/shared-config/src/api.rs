//! Target API configuration types

use crate::{get_env_or_default, parse_env, ConfigError, ConfigResult};

/// Default base URL of the public mock service
pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";

/// Path of the posts resource, relative to the base URL
pub const POSTS_PATH: &str = "/posts";

/// Configuration of the API under test
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    /// Base URL of the service (scheme, host and optional prefix)
    pub base_url: String,

    /// Request timeout in seconds
    pub timeout_secs: u64,

    /// Connection timeout in seconds
    pub connect_timeout_secs: u64,

    /// User agent sent with every request
    pub user_agent: String,
}

impl ApiConfig {
    /// Load API configuration from environment variables
    ///
    /// The base URL must be an absolute `http` or `https` URL.
    pub fn from_env() -> ConfigResult<Self> {
        let base_url = get_env_or_default("POSTCHECK_BASE_URL", DEFAULT_BASE_URL);
        validate_base_url("POSTCHECK_BASE_URL", &base_url)?;

        Ok(Self {
            base_url,
            timeout_secs: parse_env("POSTCHECK_TIMEOUT", 10)?,
            connect_timeout_secs: parse_env("POSTCHECK_CONNECT_TIMEOUT", 5)?,
            user_agent: get_env_or_default("POSTCHECK_USER_AGENT", "postcheck/0.1"),
        })
    }

    /// Create a configuration with a custom base URL (useful for testing)
    pub fn with_url(url: impl Into<String>) -> Self {
        Self {
            base_url: url.into(),
            ..Self::default()
        }
    }

    /// Get the full URL of the posts collection
    pub fn posts_url(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), POSTS_PATH)
    }

    /// Get the full URL of a single post
    ///
    /// The id is inserted verbatim, so adversarial ids like `abc` reach the
    /// server exactly as a hand-typed URL would.
    pub fn post_url(&self, id: impl std::fmt::Display) -> String {
        format!("{}/{}", self.posts_url(), id)
    }
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout_secs: 10,
            connect_timeout_secs: 5,
            user_agent: "postcheck/0.1".to_string(),
        }
    }
}

fn validate_base_url(name: &str, value: &str) -> ConfigResult<()> {
    let parsed = url::Url::parse(value)
        .map_err(|e| ConfigError::InvalidUrl(name.to_string(), e.to_string()))?;

    match parsed.scheme() {
        "http" | "https" => Ok(()),
        other => Err(ConfigError::InvalidUrl(
            name.to_string(),
            format!("unsupported scheme `{}`", other),
        )),
    }
}
