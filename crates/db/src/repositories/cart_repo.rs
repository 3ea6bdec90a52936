//! Repository for the `cart_items` table.
//!
//! Add-with-merge is a single conditional upsert so two concurrent adds for
//! the same (user, product) pair cannot create duplicate lines; the database
//! constraint `uq_cart_items_user_product` is the authoritative invariant.

use sqlx::PgPool;
use vitrine_core::types::DbId;

use crate::models::cart_item::{CartItem, CartItemUpsert};

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, product_id, quantity, price, created_at, updated_at";

/// Provides CRUD operations for cart lines.
pub struct CartRepo;

impl CartRepo {
    /// List all cart lines for a user, unordered.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<CartItem>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM cart_items WHERE user_id = $1");
        sqlx::query_as::<_, CartItem>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Add a product to a user's cart, merging into an existing line.
    ///
    /// If no line exists for (user, product), one is created with the given
    /// quantity and price. If one exists, its quantity is incremented and the
    /// original price is kept. `inserted` in the result distinguishes the two
    /// (`xmax = 0` holds only for freshly inserted rows).
    pub async fn upsert_add(
        pool: &PgPool,
        user_id: DbId,
        product_id: &str,
        quantity: i32,
        price: f64,
    ) -> Result<CartItemUpsert, sqlx::Error> {
        let query = format!(
            "INSERT INTO cart_items (user_id, product_id, quantity, price)
             VALUES ($1, $2, $3, $4)
             ON CONFLICT (user_id, product_id)
             DO UPDATE SET quantity = cart_items.quantity + EXCLUDED.quantity,
                           updated_at = NOW()
             RETURNING {COLUMNS}, (xmax = 0) AS inserted"
        );
        sqlx::query_as::<_, CartItemUpsert>(&query)
            .bind(user_id)
            .bind(product_id)
            .bind(quantity)
            .bind(price)
            .fetch_one(pool)
            .await
    }

    /// Set a cart line's quantity to an absolute value, scoped to the owning
    /// user. Returns `None` if no matching line exists for that user.
    pub async fn update_quantity(
        pool: &PgPool,
        id: DbId,
        user_id: DbId,
        quantity: i32,
    ) -> Result<Option<CartItem>, sqlx::Error> {
        let query = format!(
            "UPDATE cart_items
             SET quantity = $3, updated_at = NOW()
             WHERE id = $1 AND user_id = $2
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, CartItem>(&query)
            .bind(id)
            .bind(user_id)
            .bind(quantity)
            .fetch_optional(pool)
            .await
    }

    /// Delete a cart line scoped to both id and owning user, so a valid id
    /// belonging to another user is a no-op. Returns `true` if a row was
    /// deleted.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM cart_items WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
