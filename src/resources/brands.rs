//! Admin brand endpoints.
//!
//! # Example
//!
//! ```rust,ignore
//! use vexo_store::resources::{BrandUpdate, FieldUpdate, ListParams, NewBrand};
//!
//! let brand = client.brands().ensure(&NewBrand {
//!     name: "Orbit".to_string(),
//!     slug: Some("orbit".to_string()),
//!     description: Some("Performance basics".to_string()),
//!     ..Default::default()
//! })?;
//!
//! client.brands().update(&brand.id, &BrandUpdate {
//!     website: FieldUpdate::Set("https://orbit.example".to_string()),
//!     ..Default::default()
//! })?;
//! ```

use serde::{Deserialize, Serialize};

use crate::clients::{ApiClient, HttpError, HttpMethod, HttpRequest, ResponseBody};
use crate::resources::{ensure_created, segment, FieldUpdate, ListParams};

/// Page size used when looking a brand up by slug or name.
const FIND_PAGE_SIZE: u32 = 50;

/// A brand as returned by the admin API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Brand {
    /// Server-assigned id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL slug; unique per store.
    #[serde(default)]
    pub slug: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Brand website.
    #[serde(default)]
    pub website: Option<String>,
    /// Logo image URL.
    #[serde(default)]
    pub logo_url: Option<String>,
    /// Any attributes not modelled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Payload for creating a brand. `None` fields are not sent.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewBrand {
    /// Display name (required).
    pub name: String,
    /// URL slug; derived by the server when absent.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Brand website.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub website: Option<String>,
    /// Logo image URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub logo_url: Option<String>,
}

/// Partial update of a brand.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct BrandUpdate {
    /// New name.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub name: FieldUpdate<String>,
    /// New slug.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub slug: FieldUpdate<String>,
    /// New description.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub description: FieldUpdate<String>,
    /// New website.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub website: FieldUpdate<String>,
    /// New logo URL.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub logo_url: FieldUpdate<String>,
}

/// Handle for `/api/admin/brands`.
#[derive(Clone, Copy, Debug)]
pub struct Brands<'a> {
    client: &'a ApiClient,
}

impl<'a> Brands<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Lists brands.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn list(&self, params: &ListParams) -> Result<ResponseBody, HttpError> {
        let builder = HttpRequest::builder(HttpMethod::Get, "/api/admin/brands");
        self.client.call(params.apply(builder).build()?)
    }

    /// Fetches a brand by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`]; an unknown id is a not-found API error.
    pub fn get(&self, id: &str) -> Result<ResponseBody, HttpError> {
        self.client.get(format!("/api/admin/brands/{}", segment(id)))
    }

    /// Creates a brand.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the slug is taken.
    pub fn create(&self, brand: &NewBrand) -> Result<ResponseBody, HttpError> {
        self.client.send_json(HttpMethod::Post, "/api/admin/brands", brand)
    }

    /// Updates the fields of a brand that are not [`FieldUpdate::Unchanged`].
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn update(&self, id: &str, update: &BrandUpdate) -> Result<ResponseBody, HttpError> {
        self.client.send_json(
            HttpMethod::Put,
            format!("/api/admin/brands/{}", segment(id)),
            update,
        )
    }

    /// Deletes a brand.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn delete(&self, id: &str) -> Result<ResponseBody, HttpError> {
        self.client.delete(format!("/api/admin/brands/{}", segment(id)))
    }

    /// Looks a brand up by exact slug or name.
    ///
    /// Searches the first page of results with the slug (or the name when no
    /// slug is given) as the search term.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the list request fails.
    pub fn find(&self, slug: Option<&str>, name: Option<&str>) -> Result<Option<Brand>, HttpError> {
        let Some(q) = slug.or(name).filter(|q| !q.is_empty()) else {
            return Ok(None);
        };
        let params = ListParams::page(1, FIND_PAGE_SIZE).with_query(q);
        let brands: Vec<Brand> = self.list(&params)?.decode_items("brand list")?;

        Ok(brands.into_iter().find(|brand| {
            slug.is_some_and(|s| brand.slug.as_deref() == Some(s))
                || name.is_some_and(|n| brand.name == n)
        }))
    }

    /// Creates a brand, or returns the existing one when the server reports
    /// a conflict on its slug or name.
    ///
    /// # Errors
    ///
    /// Returns the create error when it is not a conflict, or when no
    /// matching brand can be found.
    pub fn ensure(&self, brand: &NewBrand) -> Result<Brand, HttpError> {
        ensure_created(
            "brand",
            || self.create(brand),
            || self.find(brand.slug.as_deref(), Some(&brand.name)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_new_brand_omits_missing_fields() {
        let brand = NewBrand {
            name: "Orbit".to_string(),
            logo_url: Some("https://cdn.example/orbit.png".to_string()),
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&brand).unwrap(),
            json!({"name": "Orbit", "logoUrl": "https://cdn.example/orbit.png"})
        );
    }

    #[test]
    fn test_brand_update_sends_only_touched_fields() {
        let update = BrandUpdate {
            slug: FieldUpdate::Set("orbit".to_string()),
            logo_url: FieldUpdate::Clear,
            ..Default::default()
        };

        assert_eq!(
            serde_json::to_value(&update).unwrap(),
            json!({"slug": "orbit", "logoUrl": null})
        );
    }

    #[test]
    fn test_brand_keeps_unknown_attributes() {
        let brand: Brand = serde_json::from_value(json!({
            "id": "b1",
            "name": "Orbit",
            "slug": "orbit",
            "createdAt": "2024-01-01T00:00:00Z"
        }))
        .unwrap();

        assert_eq!(brand.slug.as_deref(), Some("orbit"));
        assert_eq!(brand.extra.get("createdAt"), Some(&json!("2024-01-01T00:00:00Z")));
        assert_eq!(serde_json::to_value(&brand).unwrap()["createdAt"], json!("2024-01-01T00:00:00Z"));
    }
}
