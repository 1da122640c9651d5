//! Application configuration
//!
//! Settings are read from an optional YAML file, then overridden by
//! environment variables, then by command-line flags.
//!
//! ```yaml
//! api:
//!   base_url: "http://127.0.0.1:8000"
//!   timeout_seconds: 10
//!   max_retries: 2
//!   retry_backoff:
//!     type: exponential
//!     initial_ms: 100
//!     max_ms: 2000
//!   rate_limit:
//!     requests_per_second: 20
//!     burst_size: 20
//! server:
//!   port: 3000
//! ```

use crate::error::{Error, Result};
use crate::http::{HttpClientConfig, RateLimiterConfig};
use crate::types::BackoffType;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

/// Environment variable overriding `api.base_url`
pub const ENV_API_URL: &str = "TAMAYA_API_URL";

/// Environment variable overriding `server.port`
pub const ENV_PORT: &str = "TAMAYA_PORT";

// ============================================================================
// Top-Level Config
// ============================================================================

/// Complete application configuration
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    /// Library backend settings
    #[serde(default)]
    pub api: ApiConfig,

    /// Settings for `serve`
    #[serde(default)]
    pub server: ServerSettings,
}

impl AppConfig {
    /// Load from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| {
            Error::config(format!("Failed to read config '{}': {e}", path.display()))
        })?;
        Self::from_yaml(&content)
    }

    /// Parse from YAML text
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Load the file if given, then apply environment overrides
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(|key| std::env::var(key).ok())?;
        debug!(?config, "configuration loaded");
        Ok(config)
    }

    /// Apply overrides from an environment lookup
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(url) = lookup(ENV_API_URL).filter(|v| !v.is_empty()) {
            self.api.base_url = url;
        }
        if let Some(port) = lookup(ENV_PORT).filter(|v| !v.is_empty()) {
            self.server.port = port
                .parse()
                .map_err(|e| Error::invalid_config(ENV_PORT, format!("'{port}': {e}")))?;
        }
        self.validate()
    }

    /// Check values that serde cannot
    pub fn validate(&self) -> Result<()> {
        let url = url::Url::parse(&self.api.base_url)
            .map_err(|e| Error::invalid_config("api.base_url", e.to_string()))?;
        if !matches!(url.scheme(), "http" | "https") {
            return Err(Error::invalid_config(
                "api.base_url",
                format!("unsupported scheme '{}'", url.scheme()),
            ));
        }
        if self.api.timeout_seconds == 0 {
            return Err(Error::invalid_config("api.timeout_seconds", "must be non-zero"));
        }
        Ok(())
    }
}

// ============================================================================
// API Config
// ============================================================================

/// Library backend connection settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ApiConfig {
    /// Base URL of the library backend
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Request timeout in seconds
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u64,

    /// Retries after the first attempt
    #[serde(default = "default_max_retries")]
    pub max_retries: u32,

    /// Retry backoff configuration
    #[serde(default)]
    pub retry_backoff: BackoffConfig,

    /// Client-side rate limit; `null` disables it
    #[serde(default = "default_rate_limit")]
    pub rate_limit: Option<RateLimiterConfig>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            timeout_seconds: default_timeout(),
            max_retries: default_max_retries(),
            retry_backoff: BackoffConfig::default(),
            rate_limit: default_rate_limit(),
        }
    }
}

impl ApiConfig {
    /// HTTP client settings for these values
    pub fn http_client_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .base_url(&self.base_url)
            .timeout(Duration::from_secs(self.timeout_seconds))
            .max_retries(self.max_retries)
            .backoff(
                self.retry_backoff.backoff_type,
                Duration::from_millis(self.retry_backoff.initial_ms),
                Duration::from_millis(self.retry_backoff.max_ms),
            );
        builder = match &self.rate_limit {
            Some(limit) => builder.rate_limit(limit.clone()),
            None => builder.no_rate_limit(),
        };
        builder.build()
    }
}

fn default_base_url() -> String {
    "http://127.0.0.1:8000".to_string()
}

fn default_timeout() -> u64 {
    10
}

fn default_max_retries() -> u32 {
    2
}

fn default_rate_limit() -> Option<RateLimiterConfig> {
    Some(RateLimiterConfig::default())
}

/// Backoff configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BackoffConfig {
    /// Type of backoff
    #[serde(rename = "type", default)]
    pub backoff_type: BackoffType,

    /// Initial delay in milliseconds
    #[serde(default = "default_initial_ms")]
    pub initial_ms: u64,

    /// Maximum delay in milliseconds
    #[serde(default = "default_max_ms")]
    pub max_ms: u64,
}

impl Default for BackoffConfig {
    fn default() -> Self {
        Self {
            backoff_type: BackoffType::Exponential,
            initial_ms: default_initial_ms(),
            max_ms: default_max_ms(),
        }
    }
}

fn default_initial_ms() -> u64 {
    100
}

fn default_max_ms() -> u64 {
    2000
}

// ============================================================================
// Server Config
// ============================================================================

/// HTTP server settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ServerSettings {
    /// Port to listen on
    #[serde(default = "default_port")]
    pub port: u16,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            port: default_port(),
        }
    }
}

fn default_port() -> u16 {
    3000
}
