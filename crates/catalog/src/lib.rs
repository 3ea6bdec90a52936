//! HTTP clients for the external product catalog and image-search services.
//!
//! The catalog is the authoritative product data source this system does
//! not own; responses are relayed to API callers largely verbatim.

pub mod client;
pub mod images;

pub use client::{CatalogClient, CatalogError};
pub use images::ImageClient;
