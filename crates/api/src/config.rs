use crate::auth::jwt::JwtConfig;

/// Server configuration loaded from environment variables.
///
/// All fields except the JWT secret have defaults suitable for local
/// development. In production, override via environment variables.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Bind address (default: `0.0.0.0`).
    pub host: String,
    /// Bind port (default: `3000`).
    pub port: u16,
    /// Allowed CORS origins, parsed from comma-separated `CORS_ORIGINS` env var.
    pub cors_origins: Vec<String>,
    /// HTTP request timeout in seconds (default: `30`).
    pub request_timeout_secs: u64,
    /// JWT token configuration (secret, expiry durations).
    pub jwt: JwtConfig,
    /// External catalog and image-search endpoints.
    pub catalog: CatalogConfig,
}

/// Endpoints for the external product catalog and image-search services.
#[derive(Debug, Clone)]
pub struct CatalogConfig {
    /// Product catalog base URL (default: `https://dummyjson.com`).
    pub base_url: String,
    /// Image-search base URL (default: `https://api.unsplash.com`).
    pub image_base_url: String,
    /// Image-search API key. When unset, category images degrade to null.
    pub image_access_key: Option<String>,
}

impl ServerConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                    |
    /// |------------------------|----------------------------|
    /// | `HOST`                 | `0.0.0.0`                  |
    /// | `PORT`                 | `3000`                     |
    /// | `CORS_ORIGINS`         | `http://localhost:5173`    |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                       |
    /// | `CATALOG_BASE_URL`     | `https://dummyjson.com`    |
    /// | `IMAGE_SEARCH_BASE_URL`| `https://api.unsplash.com` |
    /// | `UNSPLASH_ACCESS_KEY`  | unset                      |
    pub fn from_env() -> Self {
        let host = std::env::var("HOST").unwrap_or_else(|_| "0.0.0.0".into());

        let port: u16 = std::env::var("PORT")
            .unwrap_or_else(|_| "3000".into())
            .parse()
            .expect("PORT must be a valid u16");

        let cors_origins: Vec<String> = std::env::var("CORS_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".into())
            .split(',')
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty())
            .collect();

        let request_timeout_secs: u64 = std::env::var("REQUEST_TIMEOUT_SECS")
            .unwrap_or_else(|_| "30".into())
            .parse()
            .expect("REQUEST_TIMEOUT_SECS must be a valid u64");

        let jwt = JwtConfig::from_env();
        let catalog = CatalogConfig::from_env();

        Self {
            host,
            port,
            cors_origins,
            request_timeout_secs,
            jwt,
            catalog,
        }
    }
}

impl CatalogConfig {
    /// Load external-service endpoints from environment variables.
    pub fn from_env() -> Self {
        let base_url =
            std::env::var("CATALOG_BASE_URL").unwrap_or_else(|_| "https://dummyjson.com".into());

        let image_base_url = std::env::var("IMAGE_SEARCH_BASE_URL")
            .unwrap_or_else(|_| "https://api.unsplash.com".into());

        let image_access_key = std::env::var("UNSPLASH_ACCESS_KEY").ok();

        Self {
            base_url,
            image_base_url,
            image_access_key,
        }
    }
}
