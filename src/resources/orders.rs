//! Order endpoints: the admin order desk, store stats, and a customer's own
//! orders.

use crate::clients::{ApiClient, HttpError, HttpMethod, HttpRequest, ResponseBody};
use crate::resources::{segment, ListParams};

/// List parameters for admin orders.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct OrderListParams {
    /// Paging and search.
    pub list: ListParams,
    /// Status filter, e.g. `PAID` or `FULFILLED`.
    pub status: Option<String>,
}

/// Handle for `/api/admin/orders`, `/api/admin/stats` and
/// `/api/account/orders`.
#[derive(Clone, Copy, Debug)]
pub struct Orders<'a> {
    client: &'a ApiClient,
}

impl<'a> Orders<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Lists all orders (admin).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn list(&self, params: &OrderListParams) -> Result<ResponseBody, HttpError> {
        let builder = params
            .list
            .apply(HttpRequest::builder(HttpMethod::Get, "/api/admin/orders"))
            .query_param_opt("status", params.status.as_deref());
        self.client.call(builder.build()?)
    }

    /// Fetches any order by id (admin).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn get(&self, id: &str) -> Result<ResponseBody, HttpError> {
        self.client.get(format!("/api/admin/orders/{}", segment(id)))
    }

    /// Patches an order from a raw JSON payload, e.g. `{"status":"FULFILLED"}`.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn update(&self, id: &str, payload: serde_json::Value) -> Result<ResponseBody, HttpError> {
        self.client.patch(format!("/api/admin/orders/{}", segment(id)), payload)
    }

    /// Returns store statistics (admin).
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn stats(&self) -> Result<ResponseBody, HttpError> {
        self.client.get("/api/admin/stats")
    }

    /// Lists the signed-in customer's orders.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn mine(&self) -> Result<ResponseBody, HttpError> {
        self.client.get("/api/account/orders")
    }

    /// Fetches one of the signed-in customer's orders.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn my_order(&self, id: &str) -> Result<ResponseBody, HttpError> {
        self.client.get(format!("/api/account/orders/{}", segment(id)))
    }
}
