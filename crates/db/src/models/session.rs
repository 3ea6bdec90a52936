//! Refresh-token session model.

use sqlx::FromRow;
use vitrine_core::types::{DbId, Timestamp};

/// A row from the `sessions` table.
///
/// Stores only the SHA-256 hash of the opaque refresh token. A session is
/// active while `revoked_at` is NULL and `expires_at` is in the future.
#[derive(Debug, Clone, FromRow)]
pub struct Session {
    pub id: DbId,
    pub user_id: DbId,
    pub refresh_token_hash: String,
    pub expires_at: Timestamp,
    pub revoked_at: Option<Timestamp>,
    pub created_at: Timestamp,
}
