//! Route definitions for the `/favorite` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::favorite;
use crate::state::AppState;

/// Favorite routes, merged into the `/api` tree.
///
/// ```text
/// GET    /favorite       -> list_favorites
/// POST   /favorite       -> add_favorite (409 on duplicate)
/// DELETE /favorite?id=   -> remove_favorite
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/favorite",
        get(favorite::list_favorites)
            .post(favorite::add_favorite)
            .delete(favorite::remove_favorite),
    )
}
