//! Authentication endpoints.
//!
//! Login stores the session cookie in the client's jar; every later call on
//! the same client (or a new client on the same cookie file) is
//! authenticated by it.

use serde_json::json;

use crate::clients::{ApiClient, HttpError, ResponseBody};
use crate::config::Credentials;

/// Handle for `/api/auth/*`.
#[derive(Clone, Copy, Debug)]
pub struct Auth<'a> {
    client: &'a ApiClient,
}

impl<'a> Auth<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Logs in; the server answers with a session cookie.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the credentials are rejected.
    pub fn login(&self, credentials: &Credentials) -> Result<ResponseBody, HttpError> {
        tracing::debug!("Logging in as {}", credentials.email());
        self.client.post(
            "/api/auth/login",
            Some(json!({
                "email": credentials.email(),
                "password": credentials.password().as_ref(),
            })),
        )
    }

    /// Registers a customer account.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn register(
        &self,
        credentials: &Credentials,
        name: &str,
    ) -> Result<ResponseBody, HttpError> {
        self.client.post(
            "/api/auth/register",
            Some(json!({
                "email": credentials.email(),
                "password": credentials.password().as_ref(),
                "name": name,
            })),
        )
    }

    /// Returns the current user.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`]; an unauthenticated session is an API error.
    pub fn me(&self) -> Result<ResponseBody, HttpError> {
        self.client.get("/api/auth/me")
    }

    /// Ends the session.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn logout(&self) -> Result<ResponseBody, HttpError> {
        self.client.post("/api/auth/logout", None)
    }
}
