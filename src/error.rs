//! Configuration error types for the store client.
//!
//! All configuration constructors return `Result<T, ConfigError>` so that a
//! bad base URL or an empty credential is rejected before any request is
//! built.
//!
//! # Example
//!
//! ```rust
//! use vexo_store::{BaseUrl, ConfigError};
//!
//! let result = BaseUrl::new("");
//! assert!(matches!(result, Err(ConfigError::InvalidBaseUrl { .. })));
//! ```

use thiserror::Error;

/// Errors that can occur while building client configuration.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The base URL could not be parsed or is not `http`/`https`.
    #[error("Invalid base URL '{url}'. Expected an http(s) URL such as 'http://localhost:3000'.")]
    InvalidBaseUrl {
        /// The invalid URL that was provided.
        url: String,
    },

    /// Email cannot be empty.
    #[error("Email cannot be empty.")]
    EmptyEmail,

    /// Password cannot be empty.
    #[error("Password cannot be empty.")]
    EmptyPassword,

    /// A required field is missing.
    #[error("Missing required field: '{field}'. This field must be set before building the configuration.")]
    MissingRequiredField {
        /// The name of the missing field.
        field: &'static str,
    },
}
