//! Handlers for the `/cart` resource.
//!
//! Cart semantics: add merges quantity into an existing line for the same
//! product (one conditional upsert, no check-then-act window), update is an
//! absolute quantity set, and delete is scoped to the owning user. The store
//! owns the quantity-positivity invariant: a quantity below 1 is rejected
//! rather than deleting the line.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::json;
use vitrine_core::error::CoreError;
use vitrine_core::types::DbId;
use vitrine_db::models::cart_item::{AddToCart, CartItem, UpdateCartQuantity};
use vitrine_db::repositories::CartRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Query};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Maximum quantity accepted per request, matching the
/// `ck_cart_items_quantity_range` bound on the stored total.
const MAX_QUANTITY: i32 = 1_000_000;

/// Query parameters for `DELETE /api/cart`.
#[derive(Debug, Deserialize)]
pub struct CartDeleteParams {
    pub id: Option<DbId>,
}

/// Reject quantities outside `1..=MAX_QUANTITY`. A merge can still push the
/// stored total past the bound; the `ck_cart_items_quantity_range` constraint
/// catches that and is classified as a 400.
fn validate_quantity(quantity: i32) -> Result<(), AppError> {
    if quantity < 1 {
        return Err(AppError::BadRequest("Quantity must be at least 1".into()));
    }
    if quantity > MAX_QUANTITY {
        return Err(AppError::BadRequest(format!(
            "Quantity must not exceed {MAX_QUANTITY}"
        )));
    }
    Ok(())
}

/// GET /api/cart
///
/// List the authenticated user's cart lines.
pub async fn list_cart(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<CartItem>>> {
    let items = CartRepo::list_for_user(&state.pool, auth.user_id).await?;

    Ok(Json(items))
}

/// POST /api/cart
///
/// Add a product to the cart. Returns 201 when a new line was created and
/// 200 when the quantity was merged into an existing line.
pub async fn add_to_cart(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<AddToCart>,
) -> AppResult<impl IntoResponse> {
    let (product_id, quantity, price) = match (input.product_id, input.quantity, input.price) {
        (Some(product_id), Some(quantity), Some(price)) if !product_id.is_empty() => {
            (product_id, quantity, price)
        }
        _ => return Err(AppError::BadRequest("Missing required fields".into())),
    };

    validate_quantity(quantity)?;

    let upserted =
        CartRepo::upsert_add(&state.pool, auth.user_id, &product_id, quantity, price).await?;

    let status = if upserted.inserted {
        StatusCode::CREATED
    } else {
        StatusCode::OK
    };

    tracing::info!(
        user_id = auth.user_id,
        product_id = %upserted.item.product_id,
        quantity = upserted.item.quantity,
        merged = !upserted.inserted,
        "Cart line added",
    );

    Ok((status, Json(upserted.item)))
}

/// PUT /api/cart
///
/// Set a cart line's quantity to an absolute value (not a delta).
pub async fn update_cart_quantity(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<UpdateCartQuantity>,
) -> AppResult<Json<CartItem>> {
    let (id, quantity) = match (input.id, input.quantity) {
        (Some(id), Some(quantity)) => (id, quantity),
        _ => return Err(AppError::BadRequest("Missing required fields".into())),
    };

    validate_quantity(quantity)?;

    let item = CartRepo::update_quantity(&state.pool, id, auth.user_id, quantity)
        .await?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "CartItem",
            id,
        }))?;

    tracing::info!(user_id = auth.user_id, cart_item_id = id, quantity, "Cart quantity updated");

    Ok(Json(item))
}

/// DELETE /api/cart?id=
///
/// Remove a cart line. A valid id belonging to another user is a 404, never
/// a cross-user deletion.
pub async fn remove_from_cart(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<CartDeleteParams>,
) -> AppResult<impl IntoResponse> {
    let id = params
        .id
        .ok_or_else(|| AppError::BadRequest("Cart item ID is required".into()))?;

    let deleted = CartRepo::delete(&state.pool, id, auth.user_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "CartItem",
            id,
        }));
    }

    tracing::info!(user_id = auth.user_id, cart_item_id = id, "Cart line deleted");

    Ok(Json(json!({ "message": "Cart item deleted successfully" })))
}
