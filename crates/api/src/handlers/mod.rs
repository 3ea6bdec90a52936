//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the repositories in `vitrine_db` (or the clients in
//! `vitrine_catalog`) and map errors via [`crate::error::AppError`].

pub mod auth;
pub mod cart;
pub mod catalog;
pub mod favorite;
pub mod users;
