//! Cart line model and DTOs.
//!
//! Wire format uses camelCase field names (`productId`, `userId`) to match
//! the storefront client.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vitrine_core::types::{DbId, Timestamp};

// ---------------------------------------------------------------------------
// Entity structs (database rows)
// ---------------------------------------------------------------------------

/// A row from the `cart_items` table: one user's stored quantity/price for
/// one product. At most one row exists per (user, product) pair.
#[derive(Debug, Clone, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CartItem {
    pub id: DbId,
    pub user_id: DbId,
    /// External catalog product reference; not validated locally.
    pub product_id: String,
    pub quantity: i32,
    /// Unit price captured at add-time. Never re-checked against the live
    /// catalog, so it can diverge from the current catalog price.
    pub price: f64,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Result of the add-with-merge upsert: the resulting row plus whether the
/// statement inserted a new row (`true`) or merged into an existing one.
#[derive(Debug, Clone, FromRow)]
pub struct CartItemUpsert {
    #[sqlx(flatten)]
    pub item: CartItem,
    pub inserted: bool,
}

// ---------------------------------------------------------------------------
// DTOs (request payloads)
// ---------------------------------------------------------------------------

/// Body for `POST /api/cart`. Fields are optional so missing values map to
/// a 400 instead of a deserialization rejection.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AddToCart {
    pub product_id: Option<String>,
    pub quantity: Option<i32>,
    pub price: Option<f64>,
}

/// Body for `PUT /api/cart`: absolute quantity set for an existing line.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCartQuantity {
    pub id: Option<DbId>,
    pub quantity: Option<i32>,
}
