//! HTTP response types for the store client.
//!
//! The store API mostly answers with JSON, but proxies and some endpoints
//! answer with plain text. [`ResponseBody`] carries either form so callers
//! can tolerate both.

use std::collections::HashMap;

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::clients::errors::HttpError;

/// A decoded response body.
///
/// Serializes as the JSON value itself, or as a JSON string for raw text.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(untagged)]
pub enum ResponseBody {
    /// The body parsed as JSON.
    Json(serde_json::Value),
    /// The raw body text, when it was not valid JSON (including empty bodies).
    Text(String),
}

impl ResponseBody {
    /// Decodes a raw body, falling back to the text when it is not JSON.
    #[must_use]
    pub fn parse(raw: String) -> Self {
        serde_json::from_str(&raw).map_or(Self::Text(raw), Self::Json)
    }

    /// Returns the JSON value, if the body was JSON.
    #[must_use]
    pub const fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Json(value) => Some(value),
            Self::Text(_) => None,
        }
    }

    /// Returns the raw text, if the body was not JSON.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Json(_) => None,
            Self::Text(text) => Some(text),
        }
    }

    /// Converts the body into a JSON value; text becomes a JSON string.
    #[must_use]
    pub fn into_json(self) -> serde_json::Value {
        match self {
            Self::Json(value) => value,
            Self::Text(text) => serde_json::Value::String(text),
        }
    }

    /// Looks up a top-level field of a JSON object body.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&serde_json::Value> {
        self.as_json().and_then(|v| v.get(key))
    }

    /// Returns the `items` array of a paginated body, or the body itself when
    /// it is a bare array. Anything else yields an empty slice.
    #[must_use]
    pub fn items(&self) -> &[serde_json::Value] {
        match self.as_json() {
            Some(serde_json::Value::Array(items)) => items,
            Some(value) => value
                .get("items")
                .and_then(serde_json::Value::as_array)
                .map_or(&[][..], Vec::as_slice),
            None => &[],
        }
    }

    /// Decodes the JSON body into a typed value.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] if the body is text or does not match `T`.
    pub fn decode<T: DeserializeOwned>(&self, context: &'static str) -> Result<T, HttpError> {
        let value = match self {
            Self::Json(value) => value.clone(),
            Self::Text(text) => serde_json::Value::String(text.clone()),
        };
        serde_json::from_value(value).map_err(|source| HttpError::Decode { context, source })
    }

    /// Decodes every entry of [`items`](Self::items) into `T`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Decode`] if any entry does not match `T`.
    pub fn decode_items<T: DeserializeOwned>(
        &self,
        context: &'static str,
    ) -> Result<Vec<T>, HttpError> {
        self.items()
            .iter()
            .map(|item| {
                serde_json::from_value(item.clone())
                    .map_err(|source| HttpError::Decode { context, source })
            })
            .collect()
    }

    /// Pretty-prints the body: 2-space indented JSON with non-ASCII kept
    /// as-is, or the raw text unchanged.
    #[must_use]
    pub fn pretty(&self) -> String {
        match self {
            Self::Json(value) => {
                serde_json::to_string_pretty(value).unwrap_or_else(|_| value.to_string())
            }
            Self::Text(text) => text.clone(),
        }
    }
}

impl From<serde_json::Value> for ResponseBody {
    fn from(value: serde_json::Value) -> Self {
        Self::Json(value)
    }
}

/// A response from the store API.
#[derive(Clone, Debug)]
pub struct HttpResponse {
    /// HTTP status code.
    pub code: u16,
    /// Response headers; keys are lower-case, multi-valued headers keep every value.
    pub headers: HashMap<String, Vec<String>>,
    /// Decoded body.
    pub body: ResponseBody,
}

impl HttpResponse {
    /// Creates a new response.
    #[must_use]
    pub const fn new(code: u16, headers: HashMap<String, Vec<String>>, body: ResponseBody) -> Self {
        Self {
            code,
            headers,
            body,
        }
    }

    /// Returns `true` for a status in `[200, 300)`.
    #[must_use]
    pub const fn is_ok(&self) -> bool {
        self.code >= 200 && self.code < 300
    }

    /// Returns the first value of a header.
    #[must_use]
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .get(&name.to_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }
}
