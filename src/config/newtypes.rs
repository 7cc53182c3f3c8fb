//! Validated newtype wrappers for configuration values.
//!
//! This module provides type-safe wrappers around string values that validate
//! their contents on construction. Invalid values are rejected with clear error messages.

use crate::error::ConfigError;
use reqwest::Url;
use std::fmt;

/// A validated store base URL.
///
/// The URL must use the `http` or `https` scheme and have a host. Any
/// trailing `/` is trimmed so request paths (which always start with `/`)
/// can be appended directly.
///
/// # Example
///
/// ```rust
/// use vexo_store::BaseUrl;
///
/// let url = BaseUrl::new("http://localhost:3000/").unwrap();
/// assert_eq!(url.as_ref(), "http://localhost:3000");
/// assert_eq!(url.host_name(), Some("localhost"));
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BaseUrl {
    url: String,
    host: Option<String>,
}

impl BaseUrl {
    /// Creates a new validated base URL.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::InvalidBaseUrl`] if the URL cannot be parsed,
    /// has no host, or uses a scheme other than `http`/`https`.
    pub fn new(url: impl Into<String>) -> Result<Self, ConfigError> {
        let url = url.into();
        let trimmed = url.trim().trim_end_matches('/').to_string();

        let parsed =
            Url::parse(&trimmed).map_err(|_| ConfigError::InvalidBaseUrl { url: url.clone() })?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        let host = parsed.host_str().map(ToString::to_string);
        if host.is_none() {
            return Err(ConfigError::InvalidBaseUrl { url });
        }

        Ok(Self { url: trimmed, host })
    }

    /// Returns the host name portion of the URL.
    #[must_use]
    pub fn host_name(&self) -> Option<&str> {
        self.host.as_deref()
    }

    /// Joins a request path onto this base URL.
    #[must_use]
    pub fn join(&self, path: &str) -> String {
        format!("{}{path}", self.url)
    }
}

impl AsRef<str> for BaseUrl {
    fn as_ref(&self) -> &str {
        &self.url
    }
}

impl fmt::Display for BaseUrl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.url)
    }
}

/// A login password.
///
/// The `Debug` implementation masks the value so credentials never show up
/// in logs.
///
/// # Example
///
/// ```rust
/// use vexo_store::Password;
///
/// let password = Password::new("admin123!").unwrap();
/// assert_eq!(format!("{:?}", password), "Password(*****)");
/// ```
#[derive(Clone, PartialEq, Eq)]
pub struct Password(String);

impl Password {
    /// Creates a new password.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyPassword`] if the password is empty.
    pub fn new(password: impl Into<String>) -> Result<Self, ConfigError> {
        let password = password.into();
        if password.is_empty() {
            return Err(ConfigError::EmptyPassword);
        }
        Ok(Self(password))
    }
}

impl AsRef<str> for Password {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(*****)")
    }
}

/// Email and password pair used to log in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Credentials {
    email: String,
    password: Password,
}

impl Credentials {
    /// Creates a validated credential pair.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::EmptyEmail`] or [`ConfigError::EmptyPassword`]
    /// when either value is blank.
    pub fn new(email: impl Into<String>, password: impl Into<String>) -> Result<Self, ConfigError> {
        let email = email.into().trim().to_string();
        if email.is_empty() {
            return Err(ConfigError::EmptyEmail);
        }
        Ok(Self {
            email,
            password: Password::new(password)?,
        })
    }

    /// Returns the email address.
    #[must_use]
    pub fn email(&self) -> &str {
        &self.email
    }

    /// Returns the password.
    #[must_use]
    pub const fn password(&self) -> &Password {
        &self.password
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_url_trims_trailing_slash() {
        let url = BaseUrl::new("http://192.168.68.150:3000/").unwrap();
        assert_eq!(url.as_ref(), "http://192.168.68.150:3000");
        assert_eq!(url.host_name(), Some("192.168.68.150"));
    }

    #[test]
    fn test_base_url_join_appends_path() {
        let url = BaseUrl::new("https://store.example.com").unwrap();
        assert_eq!(
            url.join("/api/admin/brands"),
            "https://store.example.com/api/admin/brands"
        );
    }

    #[test]
    fn test_base_url_rejects_invalid() {
        assert!(BaseUrl::new("").is_err());
        assert!(BaseUrl::new("localhost:3000/").is_err());
        assert!(BaseUrl::new("ftp://files.example.com").is_err());
        assert!(BaseUrl::new("not a url").is_err());
    }

    #[test]
    fn test_password_masks_value_in_debug() {
        let password = Password::new("super-secret").unwrap();
        let debug_output = format!("{password:?}");
        assert_eq!(debug_output, "Password(*****)");
        assert!(!debug_output.contains("super-secret"));
    }

    #[test]
    fn test_credentials_reject_blank_values() {
        assert!(matches!(
            Credentials::new("  ", "pw"),
            Err(ConfigError::EmptyEmail)
        ));
        assert!(matches!(
            Credentials::new("admin@local.test", ""),
            Err(ConfigError::EmptyPassword)
        ));
    }

    #[test]
    fn test_credentials_debug_hides_password() {
        let creds = Credentials::new("admin@local.test", "admin123!").unwrap();
        let debug_output = format!("{creds:?}");
        assert!(debug_output.contains("admin@local.test"));
        assert!(!debug_output.contains("admin123!"));
    }
}
