//! Cart and checkout endpoints.
//!
//! The cart belongs to whatever session cookie the client carries, so a
//! guest cart survives between runs as long as the cookie file does.

use serde::Serialize;
use serde_json::json;

use crate::clients::{ApiClient, HttpError, HttpMethod, ResponseBody};
use crate::resources::segment;

/// Checkout payload. Without an email the logged-in user's address is used.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct Checkout {
    /// Guest email address.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Handle for `/api/cart` and `/api/checkout`.
#[derive(Clone, Copy, Debug)]
pub struct Cart<'a> {
    client: &'a ApiClient,
}

impl<'a> Cart<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Returns the current cart.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn get(&self) -> Result<ResponseBody, HttpError> {
        self.client.get("/api/cart")
    }

    /// Empties the cart.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn clear(&self) -> Result<ResponseBody, HttpError> {
        self.client.delete("/api/cart")
    }

    /// Adds a variant to the cart.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn add_item(&self, variant_id: &str, quantity: u32) -> Result<ResponseBody, HttpError> {
        self.client.post(
            "/api/cart/items",
            Some(json!({"variantId": variant_id, "quantity": quantity})),
        )
    }

    /// Sets the quantity of a cart line.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn set_quantity(&self, item_id: &str, quantity: u32) -> Result<ResponseBody, HttpError> {
        self.client.patch(
            format!("/api/cart/items/{}", segment(item_id)),
            json!({"quantity": quantity}),
        )
    }

    /// Removes a cart line.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn remove_item(&self, item_id: &str) -> Result<ResponseBody, HttpError> {
        self.client.delete(format!("/api/cart/items/{}", segment(item_id)))
    }

    /// Applies a coupon code.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the code is rejected.
    pub fn apply_coupon(&self, code: &str) -> Result<ResponseBody, HttpError> {
        self.client.post("/api/cart/coupon", Some(json!({"code": code})))
    }

    /// Removes the applied coupon.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn remove_coupon(&self) -> Result<ResponseBody, HttpError> {
        self.client.delete("/api/cart/coupon")
    }

    /// Places an order for the cart's contents.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn checkout(&self, checkout: &Checkout) -> Result<ResponseBody, HttpError> {
        self.client.send_json(HttpMethod::Post, "/api/checkout", checkout)
    }
}
