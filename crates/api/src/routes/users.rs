//! Route definition for account registration.

use axum::routing::post;
use axum::Router;

use crate::handlers::users;
use crate::state::AppState;

/// Registration route, merged into the `/api` tree.
///
/// ```text
/// POST /register -> register
/// ```
pub fn router() -> Router<AppState> {
    Router::new().route("/register", post(users::register))
}
