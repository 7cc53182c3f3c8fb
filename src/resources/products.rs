//! Admin product endpoints, including product options and variant
//! generation.
//!
//! # Variant generation
//!
//! Generation is done by the server. The client only picks a mode:
//!
//! ```rust
//! use std::collections::BTreeMap;
//! use vexo_store::resources::{VariantCombination, VariantGeneration};
//!
//! let all = VariantGeneration::Cartesian {
//!     price_cents: 2499,
//!     currency: "EUR".to_string(),
//!     initial_stock: 25,
//! };
//! assert_eq!(
//!     serde_json::to_value(&all).unwrap(),
//!     serde_json::json!({"mode": "cartesian", "priceCents": 2499, "currency": "EUR", "initialStock": 25})
//! );
//!
//! let mut values = BTreeMap::new();
//! values.insert("Size".to_string(), "M".to_string());
//! let some = VariantGeneration::Explicit {
//!     combinations: vec![VariantCombination { values, price_cents: 2999, initial_stock: 5 }],
//! };
//! assert_eq!(serde_json::to_value(&some).unwrap()["mode"], "explicit");
//! ```

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::clients::{ApiClient, HttpError, HttpMethod, HttpRequest, ResponseBody};
use crate::resources::{ensure_created, segment, FieldUpdate, ListParams};

const FIND_PAGE_SIZE: u32 = 50;

/// Publication status of a product.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "UPPERCASE")]
pub enum ProductStatus {
    /// Not visible in the catalog.
    #[default]
    Draft,
    /// Visible in the catalog.
    Published,
    /// Retired; not visible in the catalog.
    Archived,
}

impl ProductStatus {
    /// Returns the wire name (`DRAFT`, `PUBLISHED`, `ARCHIVED`).
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Draft => "DRAFT",
            Self::Published => "PUBLISHED",
            Self::Archived => "ARCHIVED",
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ProductStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_uppercase().as_str() {
            "DRAFT" => Ok(Self::Draft),
            "PUBLISHED" => Ok(Self::Published),
            "ARCHIVED" => Ok(Self::Archived),
            other => Err(format!(
                "unknown product status '{other}' (expected DRAFT, PUBLISHED or ARCHIVED)"
            )),
        }
    }
}

/// A product image reference.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductImage {
    /// Image URL.
    pub url: String,
    /// Any attributes not modelled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

impl ProductImage {
    /// Creates an image reference from a URL.
    #[must_use]
    pub fn from_url(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            extra: serde_json::Map::new(),
        }
    }
}

/// A product as returned by the admin API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    /// Server-assigned id.
    pub id: String,
    /// Product title.
    pub title: String,
    /// URL slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Owning brand.
    #[serde(default)]
    pub brand_id: Option<String>,
    /// Publication status.
    #[serde(default)]
    pub status: Option<ProductStatus>,
    /// Prefix for generated variant SKUs.
    #[serde(default)]
    pub sku_prefix: Option<String>,
    /// Product images.
    #[serde(default)]
    pub images: Vec<ProductImage>,
    /// Linked categories.
    #[serde(default)]
    pub category_ids: Vec<String>,
    /// Any attributes not modelled above (variants, options, timestamps).
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Payload for creating a product.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewProduct {
    /// Product title (required).
    pub title: String,
    /// URL slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Owning brand.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub brand_id: Option<String>,
    /// Publication status; the server defaults to `DRAFT`.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<ProductStatus>,
    /// Prefix for generated variant SKUs.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sku_prefix: Option<String>,
    /// Product images.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub images: Vec<ProductImage>,
    /// Linked categories.
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub category_ids: Vec<String>,
}

/// Partial update of a product.
///
/// `images` and `category_ids` replace the whole list when set.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ProductUpdate {
    /// New title.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub title: FieldUpdate<String>,
    /// New slug.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub slug: FieldUpdate<String>,
    /// New description.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub description: FieldUpdate<String>,
    /// New brand.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub brand_id: FieldUpdate<String>,
    /// New status.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub status: FieldUpdate<ProductStatus>,
    /// New SKU prefix.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub sku_prefix: FieldUpdate<String>,
    /// Replacement image list.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub images: FieldUpdate<Vec<ProductImage>>,
    /// Replacement category list.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub category_ids: FieldUpdate<Vec<String>>,
}

/// List parameters for products.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProductListParams {
    /// Paging and search.
    pub list: ListParams,
    /// Status filter.
    pub status: Option<ProductStatus>,
}

/// A product option as returned by the admin API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ProductOption {
    /// Option name, e.g. `Size`.
    pub name: String,
    /// Ordered option values.
    #[serde(default)]
    pub values: Vec<String>,
    /// Display position.
    #[serde(default)]
    pub position: Option<u32>,
    /// Any attributes not modelled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Payload for adding an option to a product.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct NewOption {
    /// Option name.
    pub name: String,
    /// Ordered option values.
    pub values: Vec<String>,
    /// Display position.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub position: Option<u32>,
}

impl NewOption {
    /// Creates an option payload without an explicit position.
    #[must_use]
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(Into::into).collect(),
            position: None,
        }
    }
}

/// One explicitly requested variant.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct VariantCombination {
    /// Option name to option value.
    pub values: BTreeMap<String, String>,
    /// Price in minor units.
    pub price_cents: i64,
    /// Initial on-hand stock.
    pub initial_stock: i64,
}

/// Variant generation request.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(tag = "mode", rename_all = "lowercase")]
pub enum VariantGeneration {
    /// Generate every combination of the product's option values.
    #[serde(rename_all = "camelCase")]
    Cartesian {
        /// Price in minor units.
        price_cents: i64,
        /// ISO currency code.
        currency: String,
        /// Initial on-hand stock per variant.
        initial_stock: i64,
    },
    /// Generate only the listed combinations.
    Explicit {
        /// The combinations to create.
        combinations: Vec<VariantCombination>,
    },
}

/// Handle for `/api/admin/products`.
#[derive(Clone, Copy, Debug)]
pub struct Products<'a> {
    client: &'a ApiClient,
}

impl<'a> Products<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Lists products.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn list(&self, params: &ProductListParams) -> Result<ResponseBody, HttpError> {
        let builder = params
            .list
            .apply(HttpRequest::builder(HttpMethod::Get, "/api/admin/products"))
            .query_param_opt("status", params.status.map(|s| s.as_str()));
        self.client.call(builder.build()?)
    }

    /// Fetches a product by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`]; an unknown id is a not-found API error.
    pub fn get(&self, id: &str) -> Result<ResponseBody, HttpError> {
        self.client.get(Self::path(id))
    }

    /// Creates a product.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the slug is taken.
    pub fn create(&self, product: &NewProduct) -> Result<ResponseBody, HttpError> {
        self.client.send_json(HttpMethod::Post, "/api/admin/products", product)
    }

    /// Updates the touched fields of a product.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn update(&self, id: &str, update: &ProductUpdate) -> Result<ResponseBody, HttpError> {
        self.client.send_json(HttpMethod::Put, Self::path(id), update)
    }

    /// Deletes a product.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn delete(&self, id: &str) -> Result<ResponseBody, HttpError> {
        self.client.delete(Self::path(id))
    }

    /// Looks a product up by exact slug or title.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the list request fails.
    pub fn find(
        &self,
        slug: Option<&str>,
        title: Option<&str>,
    ) -> Result<Option<Product>, HttpError> {
        let Some(q) = slug.or(title).filter(|q| !q.is_empty()) else {
            return Ok(None);
        };
        let params = ProductListParams {
            list: ListParams::page(1, FIND_PAGE_SIZE).with_query(q),
            status: None,
        };
        let products: Vec<Product> = self.list(&params)?.decode_items("product list")?;

        Ok(products.into_iter().find(|product| {
            slug.is_some_and(|s| product.slug.as_deref() == Some(s))
                || title.is_some_and(|t| product.title == t)
        }))
    }

    /// Creates a product, or returns the existing one on conflict.
    ///
    /// # Errors
    ///
    /// Returns the create error when it is not a conflict, or when no
    /// matching product can be found.
    pub fn ensure(&self, product: &NewProduct) -> Result<Product, HttpError> {
        ensure_created(
            "product",
            || self.create(product),
            || self.find(product.slug.as_deref(), Some(&product.title)),
        )
    }

    /// Lists a product's options.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn list_options(&self, product_id: &str) -> Result<ResponseBody, HttpError> {
        self.client.get(format!("{}/options", Self::path(product_id)))
    }

    /// Adds an option to a product.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn add_option(&self, product_id: &str, option: &NewOption) -> Result<ResponseBody, HttpError> {
        self.client.send_json(
            HttpMethod::Post,
            format!("{}/options", Self::path(product_id)),
            option,
        )
    }

    /// Lists a product's variants.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn list_variants(&self, product_id: &str) -> Result<ResponseBody, HttpError> {
        self.client.get(format!("{}/variants", Self::path(product_id)))
    }

    /// Asks the server to generate variants from the product's options.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn generate_variants(
        &self,
        product_id: &str,
        generation: &VariantGeneration,
    ) -> Result<ResponseBody, HttpError> {
        tracing::debug!("Generating variants for product {product_id}");
        self.client.send_json(
            HttpMethod::Post,
            format!("{}/variants", Self::path(product_id)),
            generation,
        )
    }

    fn path(id: &str) -> String {
        format!("/api/admin/products/{}", segment(id))
    }
}
