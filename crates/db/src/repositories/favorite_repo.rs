//! Repository for the `favorites` table.
//!
//! Duplicate favorites are rejected rather than merged. The insert is a
//! single `ON CONFLICT DO NOTHING` statement, so the existence check and the
//! write cannot interleave with a concurrent add.

use sqlx::PgPool;
use vitrine_core::types::DbId;

use crate::models::favorite::Favorite;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str = "id, user_id, product_id, created_at";

/// Provides CRUD operations for favorites.
pub struct FavoriteRepo;

impl FavoriteRepo {
    /// List all favorites for a user.
    pub async fn list_for_user(pool: &PgPool, user_id: DbId) -> Result<Vec<Favorite>, sqlx::Error> {
        let query = format!("SELECT {COLUMNS} FROM favorites WHERE user_id = $1");
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .fetch_all(pool)
            .await
    }

    /// Insert a favorite, returning `None` when the (user, product) pair is
    /// already favorited. The caller maps `None` to a conflict.
    pub async fn insert(
        pool: &PgPool,
        user_id: DbId,
        product_id: &str,
    ) -> Result<Option<Favorite>, sqlx::Error> {
        let query = format!(
            "INSERT INTO favorites (user_id, product_id)
             VALUES ($1, $2)
             ON CONFLICT (user_id, product_id) DO NOTHING
             RETURNING {COLUMNS}"
        );
        sqlx::query_as::<_, Favorite>(&query)
            .bind(user_id)
            .bind(product_id)
            .fetch_optional(pool)
            .await
    }

    /// Delete a favorite scoped to both id and owning user. Returns `true`
    /// if a row was deleted.
    pub async fn delete(pool: &PgPool, id: DbId, user_id: DbId) -> Result<bool, sqlx::Error> {
        let result = sqlx::query("DELETE FROM favorites WHERE id = $1 AND user_id = $2")
            .bind(id)
            .bind(user_id)
            .execute(pool)
            .await?;
        Ok(result.rows_affected() > 0)
    }
}
