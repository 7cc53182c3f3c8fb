//! Typed helpers for the store's REST endpoints.
//!
//! Each resource is reached through a borrowed handle on [`ApiClient`]:
//!
//! | Handle | Endpoints |
//! |--------|-----------|
//! | [`ApiClient::auth`] | `/api/auth/*` |
//! | [`ApiClient::brands`] | `/api/admin/brands` |
//! | [`ApiClient::categories`] | `/api/admin/categories` |
//! | [`ApiClient::products`] | `/api/admin/products`, options, variant generation |
//! | [`ApiClient::variants`] | `/api/admin/variants`, stock |
//! | [`ApiClient::catalog`] | `/api/catalog/*` |
//! | [`ApiClient::cart`] | `/api/cart`, `/api/checkout` |
//! | [`ApiClient::coupons`] | `/api/admin/coupons` |
//! | [`ApiClient::orders`] | `/api/admin/orders`, `/api/admin/stats`, `/api/account/orders` |
//!
//! Plain CRUD calls return the raw [`ResponseBody`] so front-ends can print
//! exactly what the server sent. Lookups and `ensure_*` helpers decode into
//! the typed models defined alongside each handle.
//!
//! # Partial updates
//!
//! Update payloads are built from [`FieldUpdate`] fields, so a field the
//! caller did not touch never reaches the wire:
//!
//! ```rust
//! use vexo_store::resources::{BrandUpdate, FieldUpdate};
//!
//! let update = BrandUpdate {
//!     website: FieldUpdate::Set("https://orbit.example".to_string()),
//!     description: FieldUpdate::Clear,
//!     ..Default::default()
//! };
//!
//! let json = serde_json::to_value(&update).unwrap();
//! assert_eq!(
//!     json,
//!     serde_json::json!({"website": "https://orbit.example", "description": null})
//! );
//! ```

pub mod auth;
pub mod brands;
pub mod cart;
pub mod catalog;
pub mod categories;
pub mod coupons;
pub mod orders;
pub mod products;
pub mod variants;

pub use auth::Auth;
pub use brands::{Brand, BrandUpdate, Brands, NewBrand};
pub use cart::{Cart, Checkout};
pub use catalog::{Catalog, CatalogQuery, CatalogSort};
pub use categories::{Categories, Category, CategoryListParams, CategoryUpdate, NewCategory, ROOT_PARENT};
pub use coupons::Coupons;
pub use orders::{OrderListParams, Orders};
pub use products::{
    NewOption, NewProduct, Product, ProductImage, ProductListParams, ProductOption, ProductStatus,
    ProductUpdate, Products, VariantCombination, VariantGeneration,
};
pub use variants::{StockChange, Variant, VariantUpdate, Variants};

use std::borrow::Cow;

use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize, Serializer};

use crate::clients::{ApiClient, HttpError, HttpRequestBuilder, ResponseBody};

/// Default page for list calls.
pub const DEFAULT_PAGE: u32 = 1;

/// Default page size for list calls.
pub const DEFAULT_PAGE_SIZE: u32 = 20;

/// A field of a partial update.
///
/// - `Unchanged` is left out of the payload entirely.
/// - `Clear` is sent as JSON `null`.
/// - `Set` is sent as the value.
#[derive(Clone, Debug, PartialEq, Eq, Default)]
pub enum FieldUpdate<T> {
    /// Leave the field as it is.
    #[default]
    Unchanged,
    /// Explicitly clear the field.
    Clear,
    /// Replace the field's value.
    Set(T),
}

impl<T> FieldUpdate<T> {
    /// Returns `true` for [`FieldUpdate::Unchanged`].
    #[must_use]
    pub const fn is_unchanged(&self) -> bool {
        matches!(self, Self::Unchanged)
    }

    /// Maps an optional value: `None` stays unchanged, `Some` sets it.
    #[must_use]
    pub fn from_option(value: Option<T>) -> Self {
        value.map_or(Self::Unchanged, Self::Set)
    }

    /// Maps the value of a [`FieldUpdate::Set`].
    #[must_use]
    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> FieldUpdate<U> {
        match self {
            Self::Unchanged => FieldUpdate::Unchanged,
            Self::Clear => FieldUpdate::Clear,
            Self::Set(value) => FieldUpdate::Set(f(value)),
        }
    }
}

impl FieldUpdate<String> {
    /// Interprets a command-line flag: absent is unchanged, an empty string
    /// clears the field, anything else sets it.
    #[must_use]
    pub fn from_flag(value: Option<String>) -> Self {
        match value {
            None => Self::Unchanged,
            Some(v) if v.is_empty() => Self::Clear,
            Some(v) => Self::Set(v),
        }
    }
}

impl<T: Serialize> Serialize for FieldUpdate<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            Self::Unchanged | Self::Clear => serializer.serialize_none(),
            Self::Set(value) => value.serialize(serializer),
        }
    }
}

/// Paging and search parameters shared by admin list endpoints.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ListParams {
    /// 1-based page number.
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
    /// Free-text search; omitted when empty.
    pub q: Option<String>,
}

impl Default for ListParams {
    fn default() -> Self {
        Self {
            page: DEFAULT_PAGE,
            page_size: DEFAULT_PAGE_SIZE,
            q: None,
        }
    }
}

impl ListParams {
    /// Creates parameters for a given page.
    #[must_use]
    pub const fn page(page: u32, page_size: u32) -> Self {
        Self {
            page,
            page_size,
            q: None,
        }
    }

    /// Sets the search term.
    #[must_use]
    pub fn with_query(mut self, q: impl Into<String>) -> Self {
        self.q = Some(q.into());
        self
    }

    pub(crate) fn apply(&self, builder: HttpRequestBuilder) -> HttpRequestBuilder {
        builder
            .query_param("page", self.page)
            .query_param("pageSize", self.page_size)
            .query_param_opt("q", self.q.as_deref())
    }
}

/// A page of list results.
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Page<T> {
    /// Items on this page.
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,
    /// Total number of matching items, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<u64>,
    /// Current page, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page: Option<u32>,
    /// Page size, if reported.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub page_size: Option<u32>,
}

/// Percent-encodes an id or slug for use as a path segment.
pub(crate) fn segment(value: &str) -> Cow<'_, str> {
    urlencoding::encode(value)
}

/// Creates a resource, falling back to a lookup when the server reports a
/// conflict. The original error propagates when the lookup finds nothing.
pub(crate) fn ensure_created<T, C, F>(
    resource: &'static str,
    create: C,
    find: F,
) -> Result<T, HttpError>
where
    T: DeserializeOwned,
    C: FnOnce() -> Result<ResponseBody, HttpError>,
    F: FnOnce() -> Result<Option<T>, HttpError>,
{
    match create() {
        Ok(body) => body.decode(resource),
        Err(error) if error.is_conflict() => {
            tracing::debug!("{resource} already exists, looking it up: {error}");
            match find()? {
                Some(existing) => {
                    tracing::info!("Using existing {resource}");
                    Ok(existing)
                }
                None => Err(error),
            }
        }
        Err(error) => Err(error),
    }
}

/// Extracts the `id` string of a created or fetched resource.
#[must_use]
pub fn id_of(body: &ResponseBody) -> Option<String> {
    match body.get("id")? {
        serde_json::Value::String(id) => Some(id.clone()),
        serde_json::Value::Number(id) => Some(id.to_string()),
        _ => None,
    }
}

impl ApiClient {
    /// Authentication endpoints.
    #[must_use]
    pub const fn auth(&self) -> Auth<'_> {
        Auth::new(self)
    }

    /// Admin brand endpoints.
    #[must_use]
    pub const fn brands(&self) -> Brands<'_> {
        Brands::new(self)
    }

    /// Admin category endpoints.
    #[must_use]
    pub const fn categories(&self) -> Categories<'_> {
        Categories::new(self)
    }

    /// Admin product, option and variant-generation endpoints.
    #[must_use]
    pub const fn products(&self) -> Products<'_> {
        Products::new(self)
    }

    /// Admin variant and stock endpoints.
    #[must_use]
    pub const fn variants(&self) -> Variants<'_> {
        Variants::new(self)
    }

    /// Public catalog endpoints.
    #[must_use]
    pub const fn catalog(&self) -> Catalog<'_> {
        Catalog::new(self)
    }

    /// Cart and checkout endpoints.
    #[must_use]
    pub const fn cart(&self) -> Cart<'_> {
        Cart::new(self)
    }

    /// Admin coupon endpoints.
    #[must_use]
    pub const fn coupons(&self) -> Coupons<'_> {
        Coupons::new(self)
    }

    /// Admin order, stats and account order endpoints.
    #[must_use]
    pub const fn orders(&self) -> Orders<'_> {
        Orders::new(self)
    }
}
