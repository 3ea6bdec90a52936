//! Favorite (bookmark) model and DTOs.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitrine_core::types::{DbId, Timestamp};

/// A row from the `favorites` table: one user's bookmark of one product.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Favorite {
    pub id: DbId,
    pub user_id: DbId,
    pub product_id: String,
    pub created_at: Timestamp,
}

/// Body for `POST /api/favorite`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddFavorite {
    pub product_id: Option<String>,
}

/// Response payload for a newly created favorite. Identifying fields are
/// coerced to strings for the storefront client.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FavoriteCreated {
    pub id: String,
    pub user_id: String,
    pub product_id: String,
    pub created_at: Timestamp,
}

impl From<Favorite> for FavoriteCreated {
    fn from(fav: Favorite) -> Self {
        Self {
            id: fav.id.to_string(),
            user_id: fav.user_id.to_string(),
            product_id: fav.product_id,
            created_at: fav.created_at,
        }
    }
}
