//! HTTP client types for store API communication.
//!
//! This module provides the request layer every resource helper is built on.
//! It handles request validation, JSON bodies, cookie sessions and error
//! mapping.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`ApiClient`]: The blocking, cookie-aware HTTP client
//! - [`HttpRequest`]: A request to be sent to the API
//! - [`HttpResponse`]: A response from the API
//! - [`ResponseBody`]: A JSON or raw-text response body
//! - [`HttpMethod`]: Supported HTTP methods (GET, POST, PUT, PATCH, DELETE)
//! - [`HttpError`] / [`ApiError`]: Error types for failed requests
//!
//! # Example
//!
//! ```rust,ignore
//! use vexo_store::{ApiClient, BaseUrl, StoreConfig};
//! use vexo_store::clients::{HttpMethod, HttpRequest};
//!
//! let config = StoreConfig::builder()
//!     .base_url(BaseUrl::new("http://localhost:3000")?)
//!     .build()?;
//! let client = ApiClient::new(&config)?;
//!
//! let request = HttpRequest::builder(HttpMethod::Get, "/api/catalog/products")
//!     .query_param("sort", "newest")
//!     .build()?;
//!
//! let body = client.call(request)?;
//! println!("{}", body.pretty());
//! ```
//!
//! # Errors
//!
//! Every non-2xx response becomes an [`ApiError`]. Nothing is retried.

mod errors;
mod http_client;
mod http_request;
mod http_response;

pub use errors::{ApiError, HttpError, InvalidHttpRequestError, CONFLICT_CODES, CONFLICT_MESSAGES};
pub use http_client::{ApiClient, CLIENT_VERSION};
pub use http_request::{HttpMethod, HttpRequest, HttpRequestBuilder};
pub use http_response::{HttpResponse, ResponseBody};
