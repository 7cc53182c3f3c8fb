//! Admin coupon endpoints.
//!
//! Coupon payloads are passed through as raw JSON, e.g.
//! `{"code":"SAVE10","type":"PERCENT","value":10,"maxUses":100}`.

use crate::clients::{ApiClient, HttpError, HttpMethod, HttpRequest, ResponseBody};
use crate::resources::{segment, ListParams};

/// Handle for `/api/admin/coupons`.
#[derive(Clone, Copy, Debug)]
pub struct Coupons<'a> {
    client: &'a ApiClient,
}

impl<'a> Coupons<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Lists coupons.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn list(&self, params: &ListParams) -> Result<ResponseBody, HttpError> {
        let builder = HttpRequest::builder(HttpMethod::Get, "/api/admin/coupons");
        self.client.call(params.apply(builder).build()?)
    }

    /// Creates a coupon from a raw JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn create(&self, payload: serde_json::Value) -> Result<ResponseBody, HttpError> {
        self.client.post("/api/admin/coupons", Some(payload))
    }

    /// Updates a coupon from a raw JSON payload.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn update(&self, id: &str, payload: serde_json::Value) -> Result<ResponseBody, HttpError> {
        self.client.put(format!("/api/admin/coupons/{}", segment(id)), payload)
    }

    /// Deletes a coupon.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn delete(&self, id: &str) -> Result<ResponseBody, HttpError> {
        self.client.delete(format!("/api/admin/coupons/{}", segment(id)))
    }
}
