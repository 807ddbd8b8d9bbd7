//! Credential and provider configuration structures
//!
//! The flat key layout matches the host's provider block:
//!
//! ```toml
//! oauth2_client_id = "1000.ABC"
//! oauth2_client_secret = "..."
//! oauth2_refresh_token = "..."
//! data_center = "EU"
//! retry_max_attempts = 3
//! ```

use std::fmt;
use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;

use crate::errors::ApiError;
use crate::impl_domain_status_conversions;

/// Site24x7 data center hosting the account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Deserialize)]
pub enum DataCenter {
    #[default]
    #[serde(alias = "us")]
    US,
    #[serde(alias = "eu")]
    EU,
    #[serde(alias = "in")]
    IN,
    #[serde(alias = "au")]
    AU,
    #[serde(alias = "cn")]
    CN,
}

impl_domain_status_conversions!(DataCenter {
    US => "US",
    EU => "EU",
    IN => "IN",
    AU => "AU",
    CN => "CN",
});

impl DataCenter {
    /// Base URL of the REST API, without a trailing slash
    pub fn api_base_url(self) -> &'static str {
        match self {
            Self::US => "https://www.site24x7.com/api",
            Self::EU => "https://www.site24x7.eu/api",
            Self::IN => "https://www.site24x7.in/api",
            Self::AU => "https://www.site24x7.net.au/api",
            Self::CN => "https://www.site24x7.cn/api",
        }
    }

    /// Base URL of the Zoho accounts server that issues access tokens
    pub fn accounts_base_url(self) -> &'static str {
        match self {
            Self::US => "https://accounts.zoho.com",
            Self::EU => "https://accounts.zoho.eu",
            Self::IN => "https://accounts.zoho.in",
            Self::AU => "https://accounts.zoho.com.au",
            Self::CN => "https://accounts.zoho.com.cn",
        }
    }
}

/// OAuth2 client credentials plus the long-lived refresh token.
///
/// `Debug` never prints the secret or the refresh token.
#[derive(Clone, PartialEq, Eq, Deserialize)]
pub struct Credentials {
    #[serde(rename = "oauth2_client_id")]
    pub client_id: String,
    #[serde(rename = "oauth2_client_secret")]
    pub client_secret: String,
    #[serde(rename = "oauth2_refresh_token")]
    pub refresh_token: String,
}

impl Credentials {
    pub fn new(
        client_id: impl Into<String>,
        client_secret: impl Into<String>,
        refresh_token: impl Into<String>,
    ) -> Self {
        Self {
            client_id: client_id.into(),
            client_secret: client_secret.into(),
            refresh_token: refresh_token.into(),
        }
    }
}

impl fmt::Debug for Credentials {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credentials")
            .field("client_id", &self.client_id)
            .field("client_secret", &"[REDACTED]")
            .field("refresh_token", &"[REDACTED]")
            .finish()
    }
}

/// Retry budget for throttled and transient responses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct RetrySettings {
    /// Total attempts, including the first
    #[serde(rename = "retry_max_attempts", default = "default_max_attempts")]
    pub max_attempts: u32,
    #[serde(rename = "retry_base_ms", default = "default_base_ms")]
    pub base_ms: u64,
    #[serde(rename = "retry_max_ms", default = "default_max_ms")]
    pub max_ms: u64,
}

fn default_max_attempts() -> u32 {
    3
}

fn default_base_ms() -> u64 {
    500
}

fn default_max_ms() -> u64 {
    5_000
}

fn default_request_timeout_secs() -> u64 {
    60
}

impl Default for RetrySettings {
    fn default() -> Self {
        Self {
            max_attempts: default_max_attempts(),
            base_ms: default_base_ms(),
            max_ms: default_max_ms(),
        }
    }
}

/// Everything needed to build a production client
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProviderConfig {
    #[serde(flatten)]
    pub credentials: Credentials,
    #[serde(default)]
    pub data_center: DataCenter,
    /// Overrides the data center's API base URL
    #[serde(default)]
    pub api_base_url: Option<String>,
    /// Overrides the data center's accounts base URL
    #[serde(default)]
    pub accounts_base_url: Option<String>,
    #[serde(flatten)]
    pub retry: RetrySettings,
    /// Per-request HTTP timeout
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl ProviderConfig {
    pub fn new(credentials: Credentials, data_center: DataCenter) -> Self {
        Self {
            credentials,
            data_center,
            api_base_url: None,
            accounts_base_url: None,
            retry: RetrySettings::default(),
            request_timeout_secs: default_request_timeout_secs(),
        }
    }

    pub fn api_base_url(&self) -> &str {
        self.api_base_url.as_deref().unwrap_or_else(|| self.data_center.api_base_url())
    }

    pub fn accounts_base_url(&self) -> &str {
        self.accounts_base_url.as_deref().unwrap_or_else(|| self.data_center.accounts_base_url())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    /// Check that every credential is present and the numeric knobs are sane.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let required = [
            ("oauth2_client_id", &self.credentials.client_id),
            ("oauth2_client_secret", &self.credentials.client_secret),
            ("oauth2_refresh_token", &self.credentials.refresh_token),
        ];
        for (key, value) in required {
            if value.trim().is_empty() {
                return Err(ConfigError::MissingCredential(key));
            }
        }

        if self.retry.max_attempts == 0 {
            return Err(ConfigError::InvalidValue {
                key: "retry_max_attempts",
                message: "must be at least 1".to_string(),
            });
        }
        if self.retry.base_ms > self.retry.max_ms {
            return Err(ConfigError::InvalidValue {
                key: "retry_base_ms",
                message: format!("must not exceed retry_max_ms ({})", self.retry.max_ms),
            });
        }
        if self.request_timeout_secs == 0 {
            return Err(ConfigError::InvalidValue {
                key: "request_timeout_secs",
                message: "must be at least 1".to_string(),
            });
        }

        Ok(())
    }
}

/// Configuration errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    #[error("missing credential: {0}")]
    MissingCredential(&'static str),

    #[error("invalid data center: {0}")]
    InvalidDataCenter(String),

    #[error("invalid value for {key}: {message}")]
    InvalidValue { key: &'static str, message: String },

    #[error("failed to read config file {path}: {message}")]
    Io { path: String, message: String },

    #[error("failed to parse config: {0}")]
    Parse(String),
}

impl From<ConfigError> for ApiError {
    fn from(err: ConfigError) -> Self {
        ApiError::fatal(err.to_string())
    }
}
