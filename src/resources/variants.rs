//! Admin variant and stock endpoints.

use serde::{Deserialize, Serialize};

use crate::clients::{ApiClient, HttpError, HttpMethod, ResponseBody};
use crate::resources::{segment, FieldUpdate};

/// A variant as returned by the admin API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    /// Server-assigned id.
    pub id: String,
    /// Stock keeping unit.
    #[serde(default)]
    pub sku: Option<String>,
    /// Display title, usually the option values joined.
    #[serde(default)]
    pub title: Option<String>,
    /// Price in minor units.
    #[serde(default)]
    pub price_cents: Option<i64>,
    /// ISO currency code.
    #[serde(default)]
    pub currency: Option<String>,
    /// Any attributes not modelled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Partial update of a variant.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VariantUpdate {
    /// New SKU.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub sku: FieldUpdate<String>,
    /// New title.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub title: FieldUpdate<String>,
    /// New price in minor units.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub price_cents: FieldUpdate<i64>,
    /// New compare-at price in minor units.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub compare_at_cents: FieldUpdate<i64>,
    /// New unit cost in minor units.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub cost_cents: FieldUpdate<i64>,
    /// New currency.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub currency: FieldUpdate<String>,
    /// Whether stock is tracked.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub track_inventory: FieldUpdate<bool>,
    /// Whether this is the product's default variant.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub is_default: FieldUpdate<bool>,
}

/// A stock change: an absolute on-hand count or a relative delta.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub enum StockChange {
    /// Set on-hand stock to this value.
    OnHand(i64),
    /// Add (or, when negative, remove) this many units.
    Delta(i64),
}

/// Handle for `/api/admin/variants`.
#[derive(Clone, Copy, Debug)]
pub struct Variants<'a> {
    client: &'a ApiClient,
}

impl<'a> Variants<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Updates the touched fields of a variant.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn update(&self, id: &str, update: &VariantUpdate) -> Result<ResponseBody, HttpError> {
        self.client.send_json(HttpMethod::Put, Self::path(id), update)
    }

    /// Deletes a variant.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn delete(&self, id: &str) -> Result<ResponseBody, HttpError> {
        self.client.delete(Self::path(id))
    }

    /// Sets or adjusts on-hand stock.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn change_stock(&self, id: &str, change: StockChange) -> Result<ResponseBody, HttpError> {
        self.client.send_json(
            HttpMethod::Post,
            format!("{}/stock", Self::path(id)),
            &change,
        )
    }

    /// Sets on-hand stock to an absolute value.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn set_stock(&self, id: &str, on_hand: i64) -> Result<ResponseBody, HttpError> {
        self.change_stock(id, StockChange::OnHand(on_hand))
    }

    /// Adjusts on-hand stock by a signed delta.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn adjust_stock(&self, id: &str, delta: i64) -> Result<ResponseBody, HttpError> {
        self.change_stock(id, StockChange::Delta(delta))
    }

    fn path(id: &str) -> String {
        format!("/api/admin/variants/{}", segment(id))
    }
}
