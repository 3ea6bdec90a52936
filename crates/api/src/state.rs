use std::sync::Arc;

use vitrine_catalog::{CatalogClient, ImageClient};

use crate::config::ServerConfig;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool.
    pub pool: vitrine_db::DbPool,
    /// Server configuration (accessed by middleware and handlers).
    pub config: Arc<ServerConfig>,
    /// Client for the external product catalog.
    pub catalog: Arc<CatalogClient>,
    /// Client for the external image-search service.
    pub images: Arc<ImageClient>,
}
