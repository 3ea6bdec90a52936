//! Shared domain types for the Vitrine storefront backend.

pub mod error;
pub mod types;
