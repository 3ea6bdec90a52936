//! Client for an Unsplash-compatible image search service.
//!
//! Used to pick one representative image per catalog category. Lookup
//! failures of any kind degrade to `None` rather than failing the caller;
//! the category listing then carries a null image field.

use serde_json::Value;

/// Client for the external image-search service.
pub struct ImageClient {
    http: reqwest::Client,
    base_url: String,
    access_key: Option<String>,
}

impl ImageClient {
    /// Create a new client. `access_key` is the service API key; when absent
    /// every lookup short-circuits to `None`.
    pub fn new(base_url: impl Into<String>, access_key: Option<String>) -> Self {
        Self {
            http: reqwest::Client::new(),
            base_url: base_url.into(),
            access_key,
        }
    }

    /// URL of the first image matching `query`, or `None` when the service
    /// is unconfigured, unreachable, or has no results.
    pub async fn first_image_url(&self, query: &str) -> Option<String> {
        let access_key = match &self.access_key {
            Some(key) => key,
            None => {
                tracing::debug!("Image search access key not configured, skipping lookup");
                return None;
            }
        };

        let url = format!("{}/search/photos", self.base_url);
        let response = self
            .http
            .get(&url)
            .query(&[
                ("query", query),
                ("client_id", access_key),
                ("per_page", "1"),
            ])
            .send()
            .await;

        let body: Value = match response {
            Ok(resp) if resp.status().is_success() => match resp.json().await {
                Ok(body) => body,
                Err(e) => {
                    tracing::debug!(query, error = %e, "Image search returned invalid JSON");
                    return None;
                }
            },
            Ok(resp) => {
                tracing::debug!(query, status = resp.status().as_u16(), "Image search failed");
                return None;
            }
            Err(e) => {
                tracing::debug!(query, error = %e, "Image search request failed");
                return None;
            }
        };

        first_url_from_results(&body)
    }
}

/// Extract `results[0].urls.regular` from an image search response.
fn first_url_from_results(body: &Value) -> Option<String> {
    body.get("results")?
        .get(0)?
        .get("urls")?
        .get("regular")?
        .as_str()
        .map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn extracts_first_regular_url() {
        let body = json!({
            "results": [
                { "urls": { "regular": "https://images.example/a.jpg", "small": "https://images.example/a-s.jpg" } },
                { "urls": { "regular": "https://images.example/b.jpg" } }
            ]
        });
        assert_eq!(
            first_url_from_results(&body),
            Some("https://images.example/a.jpg".to_string())
        );
    }

    #[test]
    fn empty_results_yield_none() {
        let body = json!({ "results": [] });
        assert_eq!(first_url_from_results(&body), None);
    }

    #[test]
    fn malformed_body_yields_none() {
        assert_eq!(first_url_from_results(&json!({ "errors": ["rate limited"] })), None);
        assert_eq!(first_url_from_results(&json!({ "results": [{ "urls": {} }] })), None);
        assert_eq!(first_url_from_results(&json!("not an object")), None);
    }
}
