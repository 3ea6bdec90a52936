//! Handler for account registration.

use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use serde::{Deserialize, Serialize};
use validator::ValidateEmail;
use vitrine_core::error::CoreError;
use vitrine_core::types::DbId;
use vitrine_db::models::user::CreateUser;
use vitrine_db::repositories::UserRepo;

use crate::auth::password::{hash_password, validate_password_strength};
use crate::error::{AppError, AppResult};
use crate::extract::Json;
use crate::state::AppState;

/// Minimum password length for new accounts.
const MIN_PASSWORD_LENGTH: usize = 8;

/// Request body for `POST /api/register`. Fields are optional so missing
/// values map to a 400 instead of a deserialization rejection.
#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub email: Option<String>,
    pub password: Option<String>,
    pub name: Option<String>,
}

/// Response body for a successful registration. The password hash is never
/// exposed.
#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: RegisteredUser,
}

/// Public fields of the newly created account.
#[derive(Debug, Serialize)]
pub struct RegisteredUser {
    pub id: DbId,
    pub email: String,
}

/// POST /api/register
///
/// Create a credentials-based account. Returns 409 when the email is taken.
pub async fn register(
    State(state): State<AppState>,
    Json(input): Json<RegisterRequest>,
) -> AppResult<impl IntoResponse> {
    let (email, password) = match (input.email, input.password) {
        (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
            (email, password)
        }
        _ => {
            return Err(AppError::BadRequest(
                "Email and password are required".into(),
            ))
        }
    };

    if !email.validate_email() {
        return Err(AppError::BadRequest("Invalid email format".into()));
    }

    validate_password_strength(&password, MIN_PASSWORD_LENGTH).map_err(AppError::BadRequest)?;

    // Friendly conflict answer for the common case; the uq_users_email
    // constraint backstops concurrent registrations (classified as 409).
    if UserRepo::find_by_email(&state.pool, &email).await?.is_some() {
        return Err(AppError::Core(CoreError::Conflict(
            "User already exists".into(),
        )));
    }

    let password_hash = hash_password(&password)
        .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

    let user = UserRepo::create(
        &state.pool,
        &CreateUser {
            email,
            password_hash: Some(password_hash),
            name: input.name,
        },
    )
    .await?;

    tracing::info!(user_id = user.id, "User registered");

    let response = RegisterResponse {
        user: RegisteredUser {
            id: user.id,
            email: user.email,
        },
    };

    Ok((StatusCode::CREATED, Json(response)))
}
