//! Read-only client for a DummyJSON-compatible product catalog.
//!
//! [`CatalogClient`] holds the base URL and a shared `reqwest` client.
//! All methods return the upstream JSON body as an untouched
//! [`serde_json::Value`]; a non-2xx upstream status becomes
//! [`CatalogError::Upstream`] so the API layer can relay it.

use serde_json::Value;

/// Client for the external product catalog service.
pub struct CatalogClient {
    http: reqwest::Client,
    base_url: String,
}

impl CatalogClient {
    /// Create a new client targeting the given catalog base URL
    /// (e.g. `https://dummyjson.com`, no trailing slash).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
        }
    }

    /// Catalog base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// GET a catalog path and decode the JSON body.
    async fn get_json(&self, path: &str, query: &[(&str, &str)]) -> Result<Value, CatalogError> {
        let url = format!("{}{path}", self.base_url);
        let response = self.http.get(&url).query(query).send().await?;

        let status = response.status();
        if !status.is_success() {
            tracing::debug!(%url, status = status.as_u16(), "Catalog returned error status");
            return Err(CatalogError::Upstream {
                status: status.as_u16(),
            });
        }

        Ok(response.json().await?)
    }

    /// Full product listing.
    pub async fn list_products(&self) -> Result<Value, CatalogError> {
        self.get_json("/products", &[]).await
    }

    /// A single product by id.
    pub async fn get_product(&self, id: &str) -> Result<Value, CatalogError> {
        self.get_json(&format!("/products/{id}"), &[]).await
    }

    /// Free-text product search. `limit=0` asks the upstream for the full,
    /// unpaginated result set.
    pub async fn search(&self, query: &str) -> Result<Value, CatalogError> {
        self.get_json("/products/search", &[("q", query), ("limit", "0")])
            .await
    }

    /// All products in one category.
    pub async fn products_in_category(&self, slug: &str) -> Result<Value, CatalogError> {
        self.get_json(&format!("/products/category/{slug}"), &[])
            .await
    }

    /// The flat list of category names.
    pub async fn category_list(&self) -> Result<Value, CatalogError> {
        self.get_json("/products/category-list", &[]).await
    }
}

/// Errors from the catalog client.
#[derive(Debug, thiserror::Error)]
pub enum CatalogError {
    /// Transport-level failure (connect, TLS, body decode).
    #[error("Catalog request failed: {0}")]
    Transport(#[from] reqwest::Error),

    /// The catalog answered with a non-2xx status; relayed to API callers.
    #[error("Catalog returned status {status}")]
    Upstream { status: u16 },
}
