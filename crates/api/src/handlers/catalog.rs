//! Handlers for catalog passthrough endpoints.
//!
//! These relay the external catalog's JSON responses unchanged. Upstream
//! error statuses propagate to the caller via
//! [`CatalogError::Upstream`](vitrine_catalog::CatalogError); transport
//! failures become a generic 500. No authentication is required.

use axum::extract::{Path, State};
use axum::Json;
use futures::future::join_all;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::error::{AppError, AppResult};
use crate::extract::Query;
use crate::state::AppState;

/// Query parameters for `GET /api/search`.
#[derive(Debug, Deserialize)]
pub struct SearchParams {
    pub q: Option<String>,
}

/// One entry of the enriched category listing.
#[derive(Debug, Serialize)]
pub struct CategoryEntry {
    pub name: String,
    /// Representative image, or null when the image lookup failed.
    pub image: Option<String>,
}

/// GET /api/products
///
/// Full catalog product listing, relayed verbatim.
pub async fn list_products(State(state): State<AppState>) -> AppResult<Json<Value>> {
    let body = state.catalog.list_products().await?;

    Ok(Json(body))
}

/// GET /api/product/{id}
///
/// Single product by id; an upstream 404 is relayed as-is.
pub async fn get_product(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let body = state.catalog.get_product(&id).await?;

    Ok(Json(body))
}

/// GET /api/search?q=
///
/// Free-text catalog search, unpaginated.
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> AppResult<Json<Value>> {
    let query = params
        .q
        .filter(|q| !q.is_empty())
        .ok_or_else(|| AppError::BadRequest("Query parameter \"q\" is required".into()))?;

    let body = state.catalog.search(&query).await?;

    Ok(Json(body))
}

/// GET /api/category/{id}
///
/// All products in one category, relayed verbatim.
pub async fn products_in_category(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> AppResult<Json<Value>> {
    let body = state.catalog.products_in_category(&id).await?;

    Ok(Json(body))
}

/// GET /api/category-list
///
/// Category names annotated with one representative image each. Image
/// lookups run concurrently and degrade to null on failure rather than
/// failing the whole response.
pub async fn category_list(State(state): State<AppState>) -> AppResult<Json<Vec<CategoryEntry>>> {
    let body = state.catalog.category_list().await?;

    let names: Vec<String> = serde_json::from_value(body)
        .map_err(|e| AppError::InternalError(format!("Unexpected category list shape: {e}")))?;

    let images = join_all(
        names
            .iter()
            .map(|name| state.images.first_image_url(name)),
    )
    .await;

    let entries = names
        .into_iter()
        .zip(images)
        .map(|(name, image)| CategoryEntry { name, image })
        .collect();

    Ok(Json(entries))
}
