//! User account model and DTOs.

use serde::Serialize;
use sqlx::FromRow;
use vitrine_core::types::{DbId, Timestamp};

/// A row from the `users` table.
///
/// `password_hash` is `None` for accounts created through an external OAuth
/// provider. It is never serialized into API responses.
#[derive(Debug, Clone, FromRow, Serialize)]
pub struct User {
    pub id: DbId,
    pub email: String,
    #[serde(skip_serializing)]
    pub password_hash: Option<String>,
    pub name: Option<String>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
}

/// Input for creating a new user account.
#[derive(Debug, Clone)]
pub struct CreateUser {
    pub email: String,
    /// Argon2id PHC hash. `None` for OAuth-provisioned accounts.
    pub password_hash: Option<String>,
    pub name: Option<String>,
}
