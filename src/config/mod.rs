//
//  app-directory
//  config/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/01/12.
//  Copyright (c) 2025 IAMNGONI. All rights reserved.
//

//! # Configuration Module
//!
//! Client configuration for the App Directory API.
//!
//! ## Overview
//!
//! - [`ClientConfig`]: the immutable settings a [`DirectoryClient`](crate::DirectoryClient)
//!   is built from (base URL, admin API key, default edit token, timeout)
//! - [`ClientConfigBuilder`]: resolves each setting from an explicit value, the
//!   process environment, or a built-in default, exactly once
//! - [`Settings`]: the optional TOML settings file used by the `ad` binary
//!
//! ## Resolution Order
//!
//! | Setting | Explicit | Environment | Default |
//! |---------|----------|-------------|---------|
//! | base URL | `base_url()` | `APP_DIRECTORY_URL` | `http://localhost:3003` |
//! | admin key | `api_key()` | `APP_DIRECTORY_KEY` | none |
//! | edit token | `edit_token()` | - | none |
//! | timeout | `timeout()` | - | 30 seconds |
//!
//! ## Example
//!
//! ```rust
//! use std::time::Duration;
//! use app_directory::config::ClientConfig;
//!
//! let config = ClientConfig::builder()
//!     .base_url("https://apps.example.com/")
//!     .timeout(Duration::from_secs(5))
//!     .build()?;
//!
//! assert_eq!(config.base_url(), "https://apps.example.com");
//! # Ok::<(), app_directory::Error>(())
//! ```

mod file;

pub use file::*;

use std::fmt;
use std::time::Duration;

use url::Url;

use crate::api::error::{Error, Result};

/// Base URL used when neither an explicit value nor `APP_DIRECTORY_URL` is set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3003";

/// Per-request timeout used when none is configured.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable holding the default base URL.
pub const ENV_BASE_URL: &str = "APP_DIRECTORY_URL";

/// Environment variable holding the default admin API key.
pub const ENV_API_KEY: &str = "APP_DIRECTORY_KEY";

/// Immutable configuration shared by every call a client makes.
///
/// Nothing here changes after [`ClientConfigBuilder::build`], so a client can
/// be shared across threads without synchronization.
#[derive(Clone, PartialEq, Eq)]
pub struct ClientConfig {
    base_url: String,
    api_key: Option<String>,
    edit_token: Option<String>,
    timeout: Duration,
}

impl ClientConfig {
    pub fn builder() -> ClientConfigBuilder {
        ClientConfigBuilder::default()
    }

    /// Configuration from the environment and defaults only.
    pub fn from_env() -> Result<Self> {
        Self::builder().build()
    }

    /// The base URL without a trailing slash.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// The admin API key sent as a bearer token on privileged calls.
    pub fn api_key(&self) -> Option<&str> {
        self.api_key.as_deref()
    }

    /// The edit token sent on PATCH/DELETE calls that name no other credential.
    pub fn edit_token(&self) -> Option<&str> {
        self.edit_token.as_deref()
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

impl fmt::Debug for ClientConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ClientConfig")
            .field("base_url", &self.base_url)
            .field("api_key", &self.api_key.as_ref().map(|_| "<redacted>"))
            .field("edit_token", &self.edit_token.as_ref().map(|_| "<redacted>"))
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// Builder for [`ClientConfig`].
///
/// Empty strings count as unset, so `APP_DIRECTORY_URL=""` falls back to the
/// default instead of producing an unusable URL.
#[derive(Clone, Default)]
pub struct ClientConfigBuilder {
    base_url: Option<String>,
    api_key: Option<String>,
    edit_token: Option<String>,
    timeout: Option<Duration>,
}

impl ClientConfigBuilder {
    pub fn base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = Some(base_url.into());
        self
    }

    pub fn api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = Some(api_key.into());
        self
    }

    pub fn edit_token(mut self, edit_token: impl Into<String>) -> Self {
        self.edit_token = Some(edit_token.into());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Resolves the configuration against the process environment.
    pub fn build(self) -> Result<ClientConfig> {
        self.build_with_env(|key| std::env::var(key).ok())
    }

    /// Resolves the configuration with `env` standing in for the process
    /// environment.
    pub fn build_with_env<F>(self, env: F) -> Result<ClientConfig>
    where
        F: Fn(&str) -> Option<String>,
    {
        let base_url = non_empty(self.base_url)
            .or_else(|| non_empty(env(ENV_BASE_URL)))
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string());
        let base_url = normalize_base_url(&base_url)?;

        let api_key = non_empty(self.api_key).or_else(|| non_empty(env(ENV_API_KEY)));
        let edit_token = non_empty(self.edit_token);

        let timeout = self.timeout.unwrap_or(DEFAULT_TIMEOUT);
        if timeout.is_zero() {
            return Err(Error::Config("timeout must be greater than zero".to_string()));
        }

        Ok(ClientConfig {
            base_url,
            api_key,
            edit_token,
            timeout,
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Trims trailing slashes and checks the result is an absolute http(s) URL.
pub fn normalize_base_url(raw: &str) -> Result<String> {
    let trimmed = raw.trim().trim_end_matches('/');
    let url = Url::parse(trimmed)
        .map_err(|e| Error::Config(format!("invalid base URL '{trimmed}': {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(trimmed.to_string()),
        other => Err(Error::Config(format!(
            "unsupported URL scheme '{other}' in '{trimmed}'"
        ))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env_of(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_defaults() {
        let config = ClientConfig::builder().build_with_env(env_of(&[])).unwrap();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.api_key(), None);
        assert_eq!(config.edit_token(), None);
        assert_eq!(config.timeout(), DEFAULT_TIMEOUT);
    }

    #[test]
    fn test_environment_fills_unset_values() {
        let env = env_of(&[(ENV_BASE_URL, "http://dir.local:9000/"), (ENV_API_KEY, "ad_env")]);
        let config = ClientConfig::builder().build_with_env(env).unwrap();
        assert_eq!(config.base_url(), "http://dir.local:9000");
        assert_eq!(config.api_key(), Some("ad_env"));
    }

    #[test]
    fn test_explicit_values_win() {
        let env = env_of(&[(ENV_BASE_URL, "http://env"), (ENV_API_KEY, "ad_env")]);
        let config = ClientConfig::builder()
            .base_url("https://explicit.example.com//")
            .api_key("ad_explicit")
            .edit_token("tok")
            .build_with_env(env)
            .unwrap();
        assert_eq!(config.base_url(), "https://explicit.example.com");
        assert_eq!(config.api_key(), Some("ad_explicit"));
        assert_eq!(config.edit_token(), Some("tok"));
    }

    #[test]
    fn test_empty_values_count_as_unset() {
        let env = env_of(&[(ENV_BASE_URL, ""), (ENV_API_KEY, "  ")]);
        let config = ClientConfig::builder()
            .base_url("")
            .build_with_env(env)
            .unwrap();
        assert_eq!(config.base_url(), DEFAULT_BASE_URL);
        assert_eq!(config.api_key(), None);
    }

    #[test]
    fn test_rejects_bad_urls_and_zero_timeout() {
        assert!(ClientConfig::builder()
            .base_url("ftp://example.com")
            .build_with_env(env_of(&[]))
            .is_err());
        assert!(ClientConfig::builder()
            .base_url("localhost:3003")
            .build_with_env(env_of(&[]))
            .is_err());
        assert!(ClientConfig::builder()
            .timeout(Duration::ZERO)
            .build_with_env(env_of(&[]))
            .is_err());
    }

    #[test]
    fn test_debug_redacts_secrets() {
        let config = ClientConfig::builder()
            .api_key("ad_secret")
            .edit_token("edit_secret")
            .build_with_env(env_of(&[]))
            .unwrap();
        let debug = format!("{config:?}");
        assert!(!debug.contains("ad_secret"));
        assert!(!debug.contains("edit_secret"));
        assert!(debug.contains("<redacted>"));
    }
}
