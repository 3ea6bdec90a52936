//! Route definitions for catalog passthrough endpoints.

use axum::routing::get;
use axum::Router;

use crate::handlers::catalog;
use crate::state::AppState;

/// Catalog routes, merged into the `/api` tree. All public.
///
/// ```text
/// GET /products        -> list_products
/// GET /product/{id}    -> get_product
/// GET /category/{id}   -> products_in_category
/// GET /category-list   -> category_list
/// GET /search?q=       -> search_products
/// ```
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/products", get(catalog::list_products))
        .route("/product/{id}", get(catalog::get_product))
        .route("/category/{id}", get(catalog::products_in_category))
        .route("/category-list", get(catalog::category_list))
        .route("/search", get(catalog::search_products))
}
