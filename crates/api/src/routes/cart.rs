//! Route definitions for the `/cart` resource.

use axum::routing::get;
use axum::Router;

use crate::handlers::cart;
use crate::state::AppState;

/// Cart routes, merged into the `/api` tree. All verbs share one path; the
/// delete target is passed as an `id` query parameter.
///
/// ```text
/// GET    /cart       -> list_cart
/// POST   /cart       -> add_to_cart (merge-on-add)
/// PUT    /cart       -> update_cart_quantity (absolute set)
/// DELETE /cart?id=   -> remove_from_cart
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route(
        "/cart",
        get(cart::list_cart)
            .post(cart::add_to_cart)
            .put(cart::update_cart_quantity)
            .delete(cart::remove_from_cart),
    )
}
