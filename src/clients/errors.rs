//! HTTP-specific error types for the store client.
//!
//! # Error Handling
//!
//! - [`ApiError`]: a non-2xx response from the store API
//! - [`InvalidHttpRequestError`]: a request rejected before it was sent
//! - [`HttpError`]: unified error type encompassing all HTTP-related errors
//!
//! # Example
//!
//! ```rust,ignore
//! use vexo_store::clients::HttpError;
//!
//! match client.brands().delete("b1") {
//!     Ok(body) => println!("{}", body.pretty()),
//!     Err(HttpError::Api(e)) if e.is_not_found() => println!("already gone"),
//!     Err(HttpError::Api(e)) => println!("API error {}: {}", e.status, e),
//!     Err(HttpError::Network(e)) => println!("Network error: {e}"),
//!     Err(e) => println!("{e}"),
//! }
//! ```

use thiserror::Error;

use crate::clients::http_request::HttpMethod;
use crate::clients::http_response::ResponseBody;

/// Server error codes treated as a create conflict.
pub const CONFLICT_CODES: &[&str] = &["CONFLICT", "SLUG_EXISTS", "SLUG_TAKEN", "DUPLICATE"];

/// Message fragments treated as a create conflict when no structured code
/// is present.
pub const CONFLICT_MESSAGES: &[&str] = &["Conflict", "Slug already exists"];

/// Error returned when the store API answers with a non-2xx status.
///
/// The display form is `HTTP <status> for <METHOD> <path>: <body>`, where the
/// body is pretty-printed JSON or the raw response text.
#[derive(Debug, Error, Clone, PartialEq)]
#[error("HTTP {status} for {method} {path}: {message}")]
pub struct ApiError {
    /// The HTTP status code of the response.
    pub status: u16,
    /// The request method.
    pub method: HttpMethod,
    /// The request path, relative to the base URL.
    pub path: String,
    /// The decoded response body.
    pub body: ResponseBody,
    /// Pretty-printed copy of the body.
    pub message: String,
}

impl ApiError {
    /// Creates an error from a failed response.
    #[must_use]
    pub fn new(status: u16, method: HttpMethod, path: impl Into<String>, body: ResponseBody) -> Self {
        let message = body.pretty();
        Self {
            status,
            method,
            path: path.into(),
            body,
            message,
        }
    }

    /// Returns the structured error code from the body, if the server sent one.
    ///
    /// Looks at the `code` field first, then a string `error` field that is
    /// written as an upper-case identifier (e.g. `SLUG_EXISTS`).
    #[must_use]
    pub fn error_code(&self) -> Option<&str> {
        let json = self.body.as_json()?;
        if let Some(code) = json.get("code").and_then(serde_json::Value::as_str) {
            return Some(code);
        }
        json.get("error")
            .and_then(serde_json::Value::as_str)
            .filter(|s| {
                !s.is_empty()
                    && s.chars()
                        .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
            })
    }

    /// Returns `true` for a conflict-class failure (duplicate slug/name).
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        if self.status == 409 {
            return true;
        }
        if self
            .error_code()
            .is_some_and(|code| CONFLICT_CODES.contains(&code))
        {
            return true;
        }
        CONFLICT_MESSAGES
            .iter()
            .any(|needle| self.message.contains(needle))
    }

    /// Returns `true` for HTTP 404.
    #[must_use]
    pub const fn is_not_found(&self) -> bool {
        self.status == 404
    }

    /// Returns `true` for HTTP 401 and 403.
    #[must_use]
    pub const fn is_unauthorized(&self) -> bool {
        matches!(self.status, 401 | 403)
    }
}

/// Error returned when a request fails validation before it is sent.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum InvalidHttpRequestError {
    /// The request path does not start with `/`.
    #[error("Request path '{path}' must start with '/'.")]
    RelativePath {
        /// The path that was provided.
        path: String,
    },
}

/// Unified error type for all HTTP-related errors.
#[derive(Debug, Error)]
pub enum HttpError {
    /// The API answered with a non-2xx status.
    #[error(transparent)]
    Api(#[from] ApiError),

    /// Request validation failed.
    #[error(transparent)]
    InvalidRequest(#[from] InvalidHttpRequestError),

    /// DNS, connection, TLS or timeout failure.
    #[error("Network error: {0}")]
    Network(#[from] reqwest::Error),

    /// A request payload could not be encoded as JSON.
    #[error("Could not encode request body: {0}")]
    Encode(#[source] serde_json::Error),

    /// A response could not be read as the expected shape.
    #[error("Unexpected response for {context}: {source}")]
    Decode {
        /// What was being decoded (e.g. "brand list").
        context: &'static str,
        /// The underlying JSON error.
        source: serde_json::Error,
    },
}

impl HttpError {
    /// Returns the API error if this is one.
    #[must_use]
    pub const fn as_api(&self) -> Option<&ApiError> {
        match self {
            Self::Api(e) => Some(e),
            _ => None,
        }
    }

    /// Returns `true` if this is a conflict-class API error.
    #[must_use]
    pub fn is_conflict(&self) -> bool {
        self.as_api().is_some_and(ApiError::is_conflict)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn api_error(status: u16, body: ResponseBody) -> ApiError {
        ApiError::new(status, HttpMethod::Post, "/api/admin/brands", body)
    }

    #[test]
    fn test_api_error_message_includes_status_method_and_path() {
        let error = api_error(404, ResponseBody::Json(json!({"error": "Not found"})));
        let message = error.to_string();

        assert!(message.starts_with("HTTP 404 for POST /api/admin/brands: "));
        assert!(message.contains("\"error\": \"Not found\""));
    }

    #[test]
    fn test_api_error_message_uses_raw_text_body() {
        let error = api_error(502, ResponseBody::Text("Bad Gateway".to_string()));
        assert_eq!(
            error.to_string(),
            "HTTP 502 for POST /api/admin/brands: Bad Gateway"
        );
    }

    #[test]
    fn test_conflict_from_status() {
        let error = api_error(409, ResponseBody::Json(json!({})));
        assert!(error.is_conflict());
    }

    #[test]
    fn test_conflict_from_structured_code() {
        let error = api_error(400, ResponseBody::Json(json!({"code": "SLUG_EXISTS"})));
        assert_eq!(error.error_code(), Some("SLUG_EXISTS"));
        assert!(error.is_conflict());

        let error = api_error(422, ResponseBody::Json(json!({"error": "DUPLICATE"})));
        assert!(error.is_conflict());
    }

    #[test]
    fn test_conflict_from_message_fallback() {
        let error = api_error(
            400,
            ResponseBody::Json(json!({"error": "Slug already exists"})),
        );
        assert_eq!(error.error_code(), None);
        assert!(error.is_conflict());
    }

    #[test]
    fn test_validation_error_is_not_conflict() {
        let error = api_error(
            422,
            ResponseBody::Json(json!({"error": "name is required"})),
        );
        assert!(!error.is_conflict());
        assert!(!error.is_not_found());
    }

    #[test]
    fn test_unauthorized_covers_401_and_403() {
        assert!(api_error(401, ResponseBody::Text(String::new())).is_unauthorized());
        assert!(api_error(403, ResponseBody::Text(String::new())).is_unauthorized());
        assert!(!api_error(404, ResponseBody::Text(String::new())).is_unauthorized());
    }

    #[test]
    fn test_http_error_wraps_api_error() {
        let error = HttpError::from(api_error(409, ResponseBody::Json(json!({}))));
        assert!(error.as_api().is_some());
        assert!(error.is_conflict());
    }

    #[test]
    fn test_invalid_request_error_message() {
        let error = InvalidHttpRequestError::RelativePath {
            path: "api/cart".to_string(),
        };
        assert_eq!(
            error.to_string(),
            "Request path 'api/cart' must start with '/'."
        );
    }
}
