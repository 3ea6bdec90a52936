//! Request extractors whose rejections carry the JSON error shape.
//!
//! Axum's built-in `Json` and `Query` rejections produce plain-text bodies.
//! These wrappers route rejections through [`AppError`] instead, so a
//! malformed request body or query string answers with the same
//! `{error, code}` JSON as every other error path.

use axum::extract::{FromRequest, FromRequestParts};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::error::AppError;

/// JSON request body extractor; rejects with 400 `Invalid JSON`.
///
/// Also usable as a response type, so handlers need only this one `Json`.
#[derive(Debug, FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct Json<T>(pub T);

impl<T: Serialize> IntoResponse for Json<T> {
    fn into_response(self) -> Response {
        axum::Json(self.0).into_response()
    }
}

/// Query string extractor; rejects with 400 `Invalid query parameters`.
#[derive(Debug, FromRequestParts)]
#[from_request(via(axum::extract::Query), rejection(AppError))]
pub struct Query<T>(pub T);
