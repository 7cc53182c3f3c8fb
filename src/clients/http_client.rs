//! Session-aware HTTP client for the store API.
//!
//! This module provides the [`ApiClient`] type: a blocking reqwest client
//! bound to a base URL and a persistent [`CookieJar`].

use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use reqwest::header::{ACCEPT, CONTENT_TYPE};
use serde::Serialize;

use crate::clients::errors::{ApiError, HttpError};
use crate::clients::http_request::{HttpMethod, HttpRequest};
use crate::clients::http_response::{HttpResponse, ResponseBody};
use crate::config::{BaseUrl, StoreConfig};
use crate::session::CookieJar;

/// Client version from Cargo.toml.
pub const CLIENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// HTTP client for the store API.
///
/// The client handles:
/// - URL construction from the configured base URL
/// - Default headers (`accept`, `user-agent`) and JSON bodies
/// - Cookie sessions, loaded from and saved to the configured cookie file
/// - Mapping non-2xx responses to [`ApiError`]
///
/// # Thread Safety
///
/// `ApiClient` is `Send + Sync`. Requests block the calling thread.
///
/// # Example
///
/// ```rust,ignore
/// use vexo_store::{ApiClient, BaseUrl, StoreConfig};
/// use vexo_store::clients::{HttpMethod, HttpRequest};
///
/// let config = StoreConfig::builder()
///     .base_url(BaseUrl::new("http://localhost:3000")?)
///     .cookie_file("admin.cookies")
///     .build()?;
/// let client = ApiClient::new(&config)?;
///
/// let request = HttpRequest::builder(HttpMethod::Get, "/api/auth/me").build()?;
/// let response = client.request(request)?;
/// println!("{}", response.body.pretty());
/// ```
#[derive(Debug)]
pub struct ApiClient {
    client: reqwest::blocking::Client,
    base_url: BaseUrl,
    cookie_jar: Arc<CookieJar>,
    cookie_file: Option<PathBuf>,
    verbose: bool,
    user_agent: String,
}

// Verify ApiClient is Send + Sync at compile time
const _: fn() = || {
    const fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<ApiClient>();
};

impl ApiClient {
    /// Creates a client for the given configuration.
    ///
    /// If a cookie file is configured and exists, the session is restored
    /// from it. A file that cannot be read is logged and ignored, and the
    /// client starts unauthenticated.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Network`] if the underlying HTTP client cannot be
    /// created (e.g. TLS initialization failure).
    pub fn new(config: &StoreConfig) -> Result<Self, HttpError> {
        let cookie_jar = Arc::new(Self::load_cookie_jar(config.cookie_file()));

        let user_agent_prefix = config
            .user_agent_prefix()
            .map_or(String::new(), |prefix| format!("{prefix} | "));
        let user_agent = format!("{user_agent_prefix}vexo-store-client v{CLIENT_VERSION}");

        let client = reqwest::blocking::Client::builder()
            .use_rustls_tls()
            .timeout(config.timeout())
            .user_agent(user_agent.clone())
            .cookie_provider(Arc::clone(&cookie_jar))
            .build()?;

        Ok(Self {
            client,
            base_url: config.base_url().clone(),
            cookie_jar,
            cookie_file: config.cookie_file().map(Path::to_path_buf),
            verbose: config.verbose(),
            user_agent,
        })
    }

    /// Returns the base URL requests are sent to.
    #[must_use]
    pub const fn base_url(&self) -> &BaseUrl {
        &self.base_url
    }

    /// Returns the cookie jar backing this client's session.
    #[must_use]
    pub fn cookie_jar(&self) -> &CookieJar {
        &self.cookie_jar
    }

    /// Returns the cookie file, if one is configured.
    #[must_use]
    pub fn cookie_file(&self) -> Option<&Path> {
        self.cookie_file.as_deref()
    }

    /// Returns the `user-agent` header sent with every request.
    #[must_use]
    pub fn user_agent(&self) -> &str {
        &self.user_agent
    }

    /// Sends a request to the store API.
    ///
    /// The body, when present, is sent as `application/json`. The response
    /// body is decoded as JSON, falling back to raw text. After a successful
    /// response the cookie jar is written to the cookie file.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if:
    /// - Request validation fails (`InvalidRequest`)
    /// - A network error or timeout occurs (`Network`)
    /// - A non-2xx response is received (`Api`)
    pub fn request(&self, request: HttpRequest) -> Result<HttpResponse, HttpError> {
        request.verify()?;

        let url = self.base_url.join(&request.path);
        let mut req_builder = self
            .client
            .request(request.http_method.into(), url.as_str())
            .header(ACCEPT, "application/json");

        if !request.query.is_empty() {
            req_builder = req_builder.query(&request.query);
        }

        if let Some(body) = &request.body {
            req_builder = req_builder
                .header(CONTENT_TYPE, "application/json")
                .body(body.to_string());
        }

        let res = req_builder.send()?;

        let code = res.status().as_u16();
        let headers = Self::parse_response_headers(res.headers());
        let body = ResponseBody::parse(res.text()?);

        self.log_request(request.http_method, &request.path, code);

        let response = HttpResponse::new(code, headers, body);
        if !response.is_ok() {
            return Err(ApiError::new(code, request.http_method, request.path, response.body).into());
        }

        self.save_cookies();
        Ok(response)
    }

    /// Sends a request and returns only its decoded body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub fn call(&self, request: HttpRequest) -> Result<ResponseBody, HttpError> {
        self.request(request).map(|response| response.body)
    }

    /// Sends a `GET` request without query parameters.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub fn get(&self, path: impl Into<String>) -> Result<ResponseBody, HttpError> {
        self.call(HttpRequest::builder(HttpMethod::Get, path).build()?)
    }

    /// Sends a `POST` request with an optional JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub fn post(
        &self,
        path: impl Into<String>,
        body: Option<serde_json::Value>,
    ) -> Result<ResponseBody, HttpError> {
        self.call(Self::with_body(HttpMethod::Post, path, body)?)
    }

    /// Sends a `PUT` request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub fn put(
        &self,
        path: impl Into<String>,
        body: serde_json::Value,
    ) -> Result<ResponseBody, HttpError> {
        self.call(Self::with_body(HttpMethod::Put, path, Some(body))?)
    }

    /// Sends a `PATCH` request with a JSON body.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub fn patch(
        &self,
        path: impl Into<String>,
        body: serde_json::Value,
    ) -> Result<ResponseBody, HttpError> {
        self.call(Self::with_body(HttpMethod::Patch, path, Some(body))?)
    }

    /// Sends a `DELETE` request.
    ///
    /// # Errors
    ///
    /// See [`request`](Self::request).
    pub fn delete(&self, path: impl Into<String>) -> Result<ResponseBody, HttpError> {
        self.call(HttpRequest::builder(HttpMethod::Delete, path).build()?)
    }

    /// Serializes `payload` and sends it as the JSON body of a request.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError::Encode`] if the payload cannot be serialized, or
    /// any error from [`request`](Self::request).
    pub fn send_json<T: Serialize + ?Sized>(
        &self,
        method: HttpMethod,
        path: impl Into<String>,
        payload: &T,
    ) -> Result<ResponseBody, HttpError> {
        let request = HttpRequest::builder(method, path)
            .json(payload)
            .map_err(HttpError::Encode)?
            .build()?;
        self.call(request)
    }

    fn with_body(
        method: HttpMethod,
        path: impl Into<String>,
        body: Option<serde_json::Value>,
    ) -> Result<HttpRequest, HttpError> {
        let builder = HttpRequest::builder(method, path);
        let builder = match body {
            Some(body) => builder.body(body),
            None => builder,
        };
        Ok(builder.build()?)
    }

    fn log_request(&self, method: HttpMethod, path: &str, status: u16) {
        if self.verbose {
            tracing::info!("[{method} {path}] {status}");
        } else {
            tracing::debug!("[{method} {path}] {status}");
        }
    }

    fn load_cookie_jar(path: Option<&Path>) -> CookieJar {
        let Some(path) = path.filter(|p| p.exists()) else {
            return CookieJar::new();
        };
        CookieJar::load(path).unwrap_or_else(|error| {
            tracing::warn!(
                "Could not load cookies from {}: {error}; starting a new session",
                path.display()
            );
            CookieJar::new()
        })
    }

    fn save_cookies(&self) {
        if let Some(path) = &self.cookie_file {
            if let Err(error) = self.cookie_jar.save(path) {
                tracing::warn!("Could not save cookies to {}: {error}", path.display());
            }
        }
    }

    /// Parses response headers into a `HashMap`.
    fn parse_response_headers(
        headers: &reqwest::header::HeaderMap,
    ) -> HashMap<String, Vec<String>> {
        let mut result: HashMap<String, Vec<String>> = HashMap::new();
        for (name, value) in headers {
            let key = name.as_str().to_lowercase();
            let value = value.to_str().unwrap_or_default().to_string();
            result.entry(key).or_default().push(value);
        }
        result
    }
}
