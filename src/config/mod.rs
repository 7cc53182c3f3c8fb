//! Configuration types for the store client.
//!
//! # Overview
//!
//! - [`StoreConfig`]: base URL, cookie file, verbosity and timeout for a client
//! - [`StoreConfigBuilder`]: builder for [`StoreConfig`]
//! - [`BaseUrl`]: a validated `http(s)` base URL
//! - [`Credentials`] / [`Password`]: login credentials with a masked password
//!
//! Defaults come from the environment (`STORE_BASE_URL`,
//! `STORE_ADMIN_EMAIL`, `STORE_ADMIN_PASSWORD`), with a `.env` file honored
//! through dotenvy.
//!
//! # Example
//!
//! ```rust
//! use vexo_store::{BaseUrl, StoreConfig};
//!
//! let config = StoreConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:3000").unwrap())
//!     .cookie_file("admin.cookies")
//!     .verbose(false)
//!     .build()
//!     .unwrap();
//!
//! assert!(!config.verbose());
//! ```

mod newtypes;

pub use newtypes::{BaseUrl, Credentials, Password};

use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::error::ConfigError;

/// Base URL used when `STORE_BASE_URL` is not set.
pub const DEFAULT_BASE_URL: &str = "http://localhost:3000";

/// Admin email used when `STORE_ADMIN_EMAIL` is not set.
pub const DEFAULT_ADMIN_EMAIL: &str = "admin@local.test";

/// Admin password used when `STORE_ADMIN_PASSWORD` is not set.
pub const DEFAULT_ADMIN_PASSWORD: &str = "admin123!";

/// Per-request network timeout.
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Environment variable naming the store base URL.
pub const BASE_URL_ENV: &str = "STORE_BASE_URL";

/// Environment variable naming the admin email.
pub const ADMIN_EMAIL_ENV: &str = "STORE_ADMIN_EMAIL";

/// Environment variable naming the admin password.
pub const ADMIN_PASSWORD_ENV: &str = "STORE_ADMIN_PASSWORD";

/// Configuration for an [`ApiClient`](crate::clients::ApiClient).
///
/// # Thread Safety
///
/// `StoreConfig` is `Clone`, `Send`, and `Sync`.
#[derive(Clone, Debug)]
pub struct StoreConfig {
    base_url: BaseUrl,
    cookie_file: Option<PathBuf>,
    verbose: bool,
    timeout: Duration,
    user_agent_prefix: Option<String>,
}

impl StoreConfig {
    /// Creates a new builder for constructing a `StoreConfig`.
    #[must_use]
    pub fn builder() -> StoreConfigBuilder {
        StoreConfigBuilder::new()
    }

    /// Builds a configuration from `STORE_BASE_URL` (after loading `.env`),
    /// falling back to [`DEFAULT_BASE_URL`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the variable holds an
    /// invalid URL.
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let base_url =
            std::env::var(BASE_URL_ENV).unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        Self::builder().base_url(BaseUrl::new(base_url)?).build()
    }

    /// Returns the base URL.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the cookie file path, if configured.
    #[must_use]
    pub fn cookie_file(&self) -> Option<&Path> {
        self.cookie_file.as_deref()
    }

    /// Returns whether request lines are logged at `info` level.
    #[must_use]
    pub const fn verbose(&self) -> bool {
        self.verbose
    }

    /// Returns the per-request timeout.
    #[must_use]
    pub const fn timeout(&self) -> Duration {
        self.timeout
    }

    /// Returns the user agent prefix, if configured.
    #[must_use]
    pub fn user_agent_prefix(&self) -> Option<&str> {
        self.user_agent_prefix.as_deref()
    }

    /// Returns a copy of this configuration using a different cookie file.
    #[must_use]
    pub fn with_cookie_file(&self, cookie_file: Option<PathBuf>) -> Self {
        Self {
            cookie_file,
            ..self.clone()
        }
    }

    /// Returns a copy of this configuration pointed at a different base URL.
    #[must_use]
    pub fn with_base_url(&self, base_url: BaseUrl) -> Self {
        Self {
            base_url,
            ..self.clone()
        }
    }
}

// Verify StoreConfig is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<StoreConfig>();
};

impl Credentials {
    /// Reads admin credentials from `STORE_ADMIN_EMAIL` and
    /// `STORE_ADMIN_PASSWORD`, falling back to the built-in defaults.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if a variable is set to an empty value.
    pub fn admin_from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        let email =
            std::env::var(ADMIN_EMAIL_ENV).unwrap_or_else(|_| DEFAULT_ADMIN_EMAIL.to_string());
        let password = std::env::var(ADMIN_PASSWORD_ENV)
            .unwrap_or_else(|_| DEFAULT_ADMIN_PASSWORD.to_string());
        Self::new(email, password)
    }
}

/// Builder for constructing [`StoreConfig`] instances.
///
/// # Defaults
///
/// - `cookie_file`: `None` (cookies live only for the process)
/// - `verbose`: `true`
/// - `timeout`: 30 seconds
/// - `user_agent_prefix`: `None`
#[derive(Debug, Default)]
pub struct StoreConfigBuilder {
    base_url: Option<BaseUrl>,
    cookie_file: Option<PathBuf>,
    verbose: Option<bool>,
    timeout: Option<Duration>,
    user_agent_prefix: Option<String>,
}

impl StoreConfigBuilder {
    /// Creates a new builder with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base URL (required).
    #[must_use]
    pub fn base_url(mut self, base_url: BaseUrl) -> Self {
        self.base_url = Some(base_url);
        self
    }

    /// Sets the file the cookie jar is loaded from and saved to.
    #[must_use]
    pub fn cookie_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.cookie_file = Some(path.into());
        self
    }

    /// Sets the cookie file from an optional path.
    #[must_use]
    pub fn maybe_cookie_file(mut self, path: Option<PathBuf>) -> Self {
        self.cookie_file = path;
        self
    }

    /// Sets whether request lines are logged at `info` level.
    #[must_use]
    pub const fn verbose(mut self, verbose: bool) -> Self {
        self.verbose = Some(verbose);
        self
    }

    /// Sets the per-request timeout.
    #[must_use]
    pub const fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Sets the user agent prefix for HTTP requests.
    #[must_use]
    pub fn user_agent_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.user_agent_prefix = Some(prefix.into());
        self
    }

    /// Builds the [`StoreConfig`].
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingRequiredField`] if `base_url` is not set.
    pub fn build(self) -> Result<StoreConfig, ConfigError> {
        let base_url = self
            .base_url
            .ok_or(ConfigError::MissingRequiredField { field: "base_url" })?;

        Ok(StoreConfig {
            base_url,
            cookie_file: self.cookie_file,
            verbose: self.verbose.unwrap_or(true),
            timeout: self.timeout.unwrap_or(DEFAULT_TIMEOUT),
            user_agent_prefix: self.user_agent_prefix,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base_url() -> BaseUrl {
        BaseUrl::new(DEFAULT_BASE_URL).unwrap()
    }

    #[test]
    fn test_builder_requires_base_url() {
        let result = StoreConfigBuilder::new().build();

        assert!(matches!(
            result,
            Err(ConfigError::MissingRequiredField { field: "base_url" })
        ));
    }

    #[test]
    fn test_builder_provides_sensible_defaults() {
        let config = StoreConfig::builder().base_url(base_url()).build().unwrap();

        assert_eq!(config.base_url().as_ref(), DEFAULT_BASE_URL);
        assert!(config.cookie_file().is_none());
        assert!(config.verbose());
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert!(config.user_agent_prefix().is_none());
    }

    #[test]
    fn test_builder_with_all_optional_fields() {
        let config = StoreConfig::builder()
            .base_url(base_url())
            .cookie_file("session.cookies")
            .verbose(false)
            .timeout(Duration::from_secs(5))
            .user_agent_prefix("SeedBot/1.0")
            .build()
            .unwrap();

        assert_eq!(config.cookie_file(), Some(Path::new("session.cookies")));
        assert!(!config.verbose());
        assert_eq!(config.timeout(), Duration::from_secs(5));
        assert_eq!(config.user_agent_prefix(), Some("SeedBot/1.0"));
    }

    #[test]
    fn test_with_cookie_file_keeps_other_settings() {
        let config = StoreConfig::builder()
            .base_url(base_url())
            .verbose(false)
            .build()
            .unwrap();

        let switched = config.with_cookie_file(Some(PathBuf::from("cart.cookies")));

        assert_eq!(switched.cookie_file(), Some(Path::new("cart.cookies")));
        assert!(!switched.verbose());
        assert_eq!(switched.base_url(), config.base_url());
    }

    #[test]
    fn test_config_is_send_sync() {
        fn assert_send_sync<T: Send + Sync>() {}
        assert_send_sync::<StoreConfig>();
    }
}
