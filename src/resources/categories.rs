//! Admin category endpoints.
//!
//! Categories form a tree through `parentId`. When listing, the sentinel
//! [`ROOT_PARENT`] selects top-level categories.

use serde::{Deserialize, Serialize};

use crate::clients::{ApiClient, HttpError, HttpMethod, HttpRequest, ResponseBody};
use crate::resources::{ensure_created, segment, FieldUpdate, ListParams};

/// `parentId` filter value selecting top-level categories.
pub const ROOT_PARENT: &str = "root";

const FIND_PAGE_SIZE: u32 = 100;

/// A category as returned by the admin API.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Server-assigned id.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL slug.
    #[serde(default)]
    pub slug: Option<String>,
    /// Free-text description.
    #[serde(default)]
    pub description: Option<String>,
    /// Parent category id; `None` for top-level categories.
    #[serde(default)]
    pub parent_id: Option<String>,
    /// Any attributes not modelled above.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Payload for creating a category.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct NewCategory {
    /// Display name (required).
    pub name: String,
    /// URL slug.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slug: Option<String>,
    /// Free-text description.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// Parent category id.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub parent_id: Option<String>,
}

/// Partial update of a category.
///
/// Clearing `parent_id` moves the category to the top level.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CategoryUpdate {
    /// New name.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub name: FieldUpdate<String>,
    /// New slug.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub slug: FieldUpdate<String>,
    /// New description.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub description: FieldUpdate<String>,
    /// New parent.
    #[serde(skip_serializing_if = "FieldUpdate::is_unchanged")]
    pub parent_id: FieldUpdate<String>,
}

/// List parameters for categories.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryListParams {
    /// Paging and search.
    pub list: ListParams,
    /// Parent filter; [`ROOT_PARENT`] for top-level categories.
    pub parent_id: Option<String>,
}

/// Handle for `/api/admin/categories`.
#[derive(Clone, Copy, Debug)]
pub struct Categories<'a> {
    client: &'a ApiClient,
}

impl<'a> Categories<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Lists categories.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn list(&self, params: &CategoryListParams) -> Result<ResponseBody, HttpError> {
        let builder = params
            .list
            .apply(HttpRequest::builder(HttpMethod::Get, "/api/admin/categories"))
            .query_param_opt("parentId", params.parent_id.as_deref());
        self.client.call(builder.build()?)
    }

    /// Fetches a category by id.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`]; an unknown id is a not-found API error.
    pub fn get(&self, id: &str) -> Result<ResponseBody, HttpError> {
        self.client.get(format!("/api/admin/categories/{}", segment(id)))
    }

    /// Creates a category.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails or the slug is taken.
    pub fn create(&self, category: &NewCategory) -> Result<ResponseBody, HttpError> {
        self.client.send_json(HttpMethod::Post, "/api/admin/categories", category)
    }

    /// Updates the touched fields of a category.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn update(&self, id: &str, update: &CategoryUpdate) -> Result<ResponseBody, HttpError> {
        self.client.send_json(
            HttpMethod::Put,
            format!("/api/admin/categories/{}", segment(id)),
            update,
        )
    }

    /// Deletes a category.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn delete(&self, id: &str) -> Result<ResponseBody, HttpError> {
        self.client.delete(format!("/api/admin/categories/{}", segment(id)))
    }

    /// Looks a category up by exact slug, or by name under `parent_id`.
    ///
    /// A name match only counts when the category's parent equals
    /// `parent_id`; with no `parent_id`, any parent matches.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the list request fails.
    pub fn find(
        &self,
        slug: Option<&str>,
        name: Option<&str>,
        parent_id: Option<&str>,
    ) -> Result<Option<Category>, HttpError> {
        let q = slug.or(name).unwrap_or_default();
        let params = CategoryListParams {
            list: ListParams::page(1, FIND_PAGE_SIZE).with_query(q),
            parent_id: parent_id.map(str::to_string),
        };
        let categories: Vec<Category> = self.list(&params)?.decode_items("category list")?;

        Ok(categories.into_iter().find(|category| {
            if slug.is_some_and(|s| category.slug.as_deref() == Some(s)) {
                return true;
            }
            name.is_some_and(|n| category.name == n)
                && parent_id.map_or(true, |p| category.parent_id.as_deref() == Some(p))
        }))
    }

    /// Creates a category, or returns the existing one under the same
    /// parent when the server reports a conflict.
    ///
    /// # Errors
    ///
    /// Returns the create error when it is not a conflict, or when no
    /// matching category can be found.
    pub fn ensure(&self, category: &NewCategory) -> Result<Category, HttpError> {
        ensure_created(
            "category",
            || self.create(category),
            || {
                self.find(
                    category.slug.as_deref(),
                    Some(&category.name),
                    category.parent_id.as_deref(),
                )
            },
        )
    }
}
