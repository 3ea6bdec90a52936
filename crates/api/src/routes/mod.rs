pub mod auth;
pub mod cart;
pub mod catalog;
pub mod favorite;
pub mod health;
pub mod users;

use axum::Router;

use crate::state::AppState;

/// Build the `/api` route tree.
///
/// Route hierarchy:
///
/// ```text
/// /auth/login           login (public)
/// /auth/refresh         refresh (public)
/// /auth/logout          logout
/// /register             create account (public)
///
/// /cart                 list, add, update quantity, delete (auth required)
/// /favorite             list, add, delete (auth required)
///
/// /products             catalog listing (public passthrough)
/// /product/{id}         single product (public passthrough)
/// /category/{id}        products in category (public passthrough)
/// /category-list        category names + representative images
/// /search?q=            free-text search (public passthrough)
/// ```
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest("/auth", auth::router())
        .merge(users::router())
        .merge(cart::router())
        .merge(favorite::router())
        .merge(catalog::router())
}
