//! Client configuration.
//!
//! Provides configuration options for the HTTP client.

use std::env;
use std::time::Duration;

use super::error::ClientError;

/// Default base URL for the API.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3100";

/// Environment variable overriding the base URL.
pub const ENV_API_URL: &str = "AGENTPAY_API_URL";

/// Environment variable providing the API key.
pub const ENV_API_KEY: &str = "AGENTPAY_API_KEY";

/// Client configuration.
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL for the API, without trailing slash.
    pub base_url: String,

    /// Total request timeout. Unset by default: an execution reply arrives
    /// only after the provider has answered.
    pub timeout: Option<Duration>,

    /// Optional API key for authentication.
    pub api_key: Option<String>,

    /// User agent string.
    pub user_agent: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            timeout: None,
            api_key: None,
            user_agent: format!("agentspay-sdk/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

impl ClientConfig {
    /// Creates a new configuration with the given base URL.
    ///
    /// Trailing slashes are stripped.
    #[must_use]
    pub fn new(base_url: impl Into<String>) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            ..Default::default()
        }
    }

    /// Creates a configuration from `AGENTPAY_API_URL` and `AGENTPAY_API_KEY`.
    ///
    /// Unset variables fall back to the defaults.
    #[must_use]
    pub fn from_env() -> Self {
        let base_url = env::var(ENV_API_URL).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let mut config = Self::new(base_url);
        config.api_key = env::var(ENV_API_KEY).ok().filter(|k| !k.is_empty());
        config
    }

    /// Sets a total request timeout.
    #[must_use]
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the API key.
    #[must_use]
    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    /// Sets the user agent.
    #[must_use]
    pub fn with_user_agent(mut self, user_agent: impl Into<String>) -> Self {
        self.user_agent = user_agent.into();
        self
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid.
    pub fn validate(&self) -> Result<(), ClientError> {
        if self.base_url.is_empty() {
            return Err(ClientError::InvalidConfig(
                "base_url cannot be empty".to_string(),
            ));
        }

        if !self.base_url.starts_with("http://") && !self.base_url.starts_with("https://") {
            return Err(ClientError::InvalidConfig(
                "base_url must start with http:// or https://".to_string(),
            ));
        }

        reqwest::Url::parse(&self.base_url)
            .map_err(|e| ClientError::InvalidConfig(format!("invalid base_url: {}", e)))?;

        if self.timeout.is_some_and(|t| t.is_zero()) {
            return Err(ClientError::InvalidConfig(
                "timeout must be greater than zero".to_string(),
            ));
        }

        Ok(())
    }
}
