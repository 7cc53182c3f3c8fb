//! Public catalog endpoints. These need no session.

use std::fmt;
use std::str::FromStr;

use crate::clients::{ApiClient, HttpError, HttpMethod, HttpRequest, ResponseBody};
use crate::resources::segment;

/// Default catalog page size.
pub const DEFAULT_CATALOG_PAGE_SIZE: u32 = 12;

/// Catalog sort order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogSort {
    /// Most recently published first.
    #[default]
    Newest,
    /// Title A to Z.
    TitleAsc,
    /// Title Z to A.
    TitleDesc,
}

impl CatalogSort {
    /// Returns the query value.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Newest => "newest",
            Self::TitleAsc => "title_asc",
            Self::TitleDesc => "title_desc",
        }
    }
}

impl fmt::Display for CatalogSort {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for CatalogSort {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "newest" => Ok(Self::Newest),
            "title_asc" => Ok(Self::TitleAsc),
            "title_desc" => Ok(Self::TitleDesc),
            other => Err(format!(
                "unknown sort '{other}' (expected newest, title_asc or title_desc)"
            )),
        }
    }
}

/// Catalog listing query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogQuery {
    /// 1-based page.
    pub page: u32,
    /// Items per page.
    pub page_size: u32,
    /// Sort order; omitted when `None`.
    pub sort: Option<CatalogSort>,
    /// Free-text search; omitted when empty.
    pub q: Option<String>,
}

impl Default for CatalogQuery {
    fn default() -> Self {
        Self {
            page: 1,
            page_size: DEFAULT_CATALOG_PAGE_SIZE,
            sort: None,
            q: None,
        }
    }
}

/// Handle for `/api/catalog`.
#[derive(Clone, Copy, Debug)]
pub struct Catalog<'a> {
    client: &'a ApiClient,
}

impl<'a> Catalog<'a> {
    pub(crate) const fn new(client: &'a ApiClient) -> Self {
        Self { client }
    }

    /// Lists published products.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn products(&self, query: &CatalogQuery) -> Result<ResponseBody, HttpError> {
        let request = HttpRequest::builder(HttpMethod::Get, "/api/catalog/products")
            .query_param("page", query.page)
            .query_param("pageSize", query.page_size)
            .query_param_opt("sort", query.sort)
            .query_param_opt("q", query.q.as_deref())
            .build()?;
        self.client.call(request)
    }

    /// Fetches a published product, with its variants, by slug.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`]; an unknown slug is a not-found API error.
    pub fn product(&self, slug: &str) -> Result<ResponseBody, HttpError> {
        self.client.get(format!("/api/catalog/products/{}", segment(slug)))
    }

    /// Lists public brands.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn brands(&self) -> Result<ResponseBody, HttpError> {
        self.client.get("/api/catalog/brands")
    }

    /// Lists public categories.
    ///
    /// # Errors
    ///
    /// Returns [`HttpError`] if the request fails.
    pub fn categories(&self) -> Result<ResponseBody, HttpError> {
        self.client.get("/api/catalog/categories")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sort_parses_wire_names() {
        for sort in [CatalogSort::Newest, CatalogSort::TitleAsc, CatalogSort::TitleDesc] {
            assert_eq!(sort.as_str().parse::<CatalogSort>(), Ok(sort));
        }
        assert!("price".parse::<CatalogSort>().is_err());
    }

    #[test]
    fn test_default_query_uses_catalog_page_size() {
        let query = CatalogQuery::default();
        assert_eq!(query.page, 1);
        assert_eq!(query.page_size, 12);
        assert!(query.sort.is_none());
    }
}
