//! Client configuration types.

use fody_core::{FodyError, Result};
use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Environment variable holding the backend URL
pub const ENV_URL: &str = "FODY_URL";
/// Environment variable holding the login name
pub const ENV_USERNAME: &str = "FODY_USERNAME";
/// Environment variable holding the password
pub const ENV_PASSWORD: &str = "FODY_PASSWORD";
/// Environment variable holding a pre-issued login token
pub const ENV_TOKEN: &str = "FODY_TOKEN";
/// Environment variable toggling TLS certificate verification
pub const ENV_VERIFY_TLS: &str = "FODY_VERIFY_TLS";
/// Environment variable holding the request timeout in seconds
pub const ENV_TIMEOUT_SECS: &str = "FODY_TIMEOUT_SECS";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Connection settings for a Fody backend
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Base URL of the Fody installation
    pub url: String,

    /// Login name
    #[serde(default)]
    pub username: Option<String>,

    /// Password
    #[serde(default)]
    pub password: Option<String>,

    /// Pre-issued login token, used when no credentials are given
    #[serde(default)]
    pub token: Option<String>,

    /// Verify the server certificate
    #[serde(default = "default_true")]
    pub verify_tls: bool,

    /// Request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

const fn default_true() -> bool {
    true
}

const fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl std::fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ClientConfig")
            .field("url", &self.url)
            .field("username", &self.username)
            .field("password", &self.password.as_ref().map(|_| "***"))
            .field("token", &self.token.as_ref().map(|_| "***"))
            .field("verify_tls", &self.verify_tls)
            .field("timeout_secs", &self.timeout_secs)
            .finish()
    }
}

impl ClientConfig {
    /// Configuration for `url` with default settings and no credentials
    #[must_use]
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            username: None,
            password: None,
            token: None,
            verify_tls: true,
            timeout_secs: DEFAULT_TIMEOUT_SECS,
        }
    }

    /// Load configuration from `FODY_*` environment variables
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let url = lookup(ENV_URL)
            .ok_or_else(|| FodyError::Config(format!("{ENV_URL} is not set")))?;

        let mut config = Self::new(url);
        config.username = lookup(ENV_USERNAME);
        config.password = lookup(ENV_PASSWORD);
        config.token = lookup(ENV_TOKEN);

        if let Some(value) = lookup(ENV_VERIFY_TLS) {
            config.verify_tls = parse_bool(&value).ok_or_else(|| {
                FodyError::Config(format!("{ENV_VERIFY_TLS} must be a boolean, got '{value}'"))
            })?;
        }

        if let Some(value) = lookup(ENV_TIMEOUT_SECS) {
            config.timeout_secs = value.trim().parse().map_err(|_| {
                FodyError::Config(format!("{ENV_TIMEOUT_SECS} must be a number, got '{value}'"))
            })?;
        }

        config.validate()?;
        Ok(config)
    }

    /// Check that username and password are given together
    pub fn validate(&self) -> Result<()> {
        match (&self.username, &self.password) {
            (Some(_), None) => Err(FodyError::Config("username given without password".into())),
            (None, Some(_)) => Err(FodyError::Config("password given without username".into())),
            _ => Ok(()),
        }
    }

    /// Username and password if both are set
    #[must_use]
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.username, &self.password) {
            (Some(username), Some(password)) => Some((username.as_str(), password.as_str())),
            _ => None,
        }
    }

    /// Request timeout
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn parse_bool(value: &str) -> Option<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
