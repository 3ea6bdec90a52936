//! Handlers for the `/favorite` resource.
//!
//! Favorites are a per-user set of product references: duplicates are
//! rejected with 409, never merged.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::Deserialize;
use serde_json::json;
use vitrine_core::error::CoreError;
use vitrine_core::types::DbId;
use vitrine_db::models::favorite::{AddFavorite, Favorite, FavoriteCreated};
use vitrine_db::repositories::FavoriteRepo;

use crate::error::{AppError, AppResult};
use crate::extract::{Json, Query};
use crate::middleware::auth::AuthUser;
use crate::state::AppState;

/// Query parameters for `DELETE /api/favorite`.
#[derive(Debug, Deserialize)]
pub struct FavoriteDeleteParams {
    pub id: Option<DbId>,
}

/// GET /api/favorite
///
/// List the authenticated user's favorites.
pub async fn list_favorites(
    auth: AuthUser,
    State(state): State<AppState>,
) -> AppResult<Json<Vec<Favorite>>> {
    let favorites = FavoriteRepo::list_for_user(&state.pool, auth.user_id).await?;

    Ok(Json(favorites))
}

/// POST /api/favorite
///
/// Bookmark a product. Returns 409 if it is already favorited. Identifying
/// fields in the response are coerced to strings for the storefront client.
pub async fn add_favorite(
    auth: AuthUser,
    State(state): State<AppState>,
    Json(input): Json<AddFavorite>,
) -> AppResult<impl IntoResponse> {
    let product_id = match input.product_id {
        Some(product_id) if !product_id.is_empty() => product_id,
        _ => return Err(AppError::BadRequest("Missing required fields".into())),
    };

    let favorite = FavoriteRepo::insert(&state.pool, auth.user_id, &product_id)
        .await?
        .ok_or_else(|| {
            AppError::Core(CoreError::Conflict("Product already in favorites".into()))
        })?;

    tracing::info!(
        user_id = auth.user_id,
        product_id = %favorite.product_id,
        "Favorite added",
    );

    Ok((StatusCode::CREATED, Json(FavoriteCreated::from(favorite))))
}

/// DELETE /api/favorite?id=
///
/// Remove a favorite. A valid id belonging to another user is a 404.
pub async fn remove_favorite(
    auth: AuthUser,
    State(state): State<AppState>,
    Query(params): Query<FavoriteDeleteParams>,
) -> AppResult<impl IntoResponse> {
    let id = params
        .id
        .ok_or_else(|| AppError::BadRequest("Favorite ID is required".into()))?;

    let deleted = FavoriteRepo::delete(&state.pool, id, auth.user_id).await?;

    if !deleted {
        return Err(AppError::Core(CoreError::NotFound {
            entity: "Favorite",
            id,
        }));
    }

    tracing::info!(user_id = auth.user_id, favorite_id = id, "Favorite deleted");

    Ok(Json(json!({ "message": "Favorite deleted successfully" })))
}
