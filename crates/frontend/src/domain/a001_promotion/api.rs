use contracts::catalog::{parse_catalog, CatalogError, PromotionRecord};
use gloo_net::http::Request;
use web_sys::RequestCache;

/// The catalog lives at the deploy root, next to index.html.
const CATALOG_URL: &str = "/promociones.json";

/// Fetches and validates the promotion catalog. Issued exactly once per
/// session; the browser cache is bypassed so an updated file is picked up on
/// the next reload.
pub async fn fetch_catalog() -> Result<Vec<PromotionRecord>, CatalogError> {
    let response = Request::get(CATALOG_URL)
        .cache(RequestCache::NoStore)
        .send()
        .await
        .map_err(|e| CatalogError::Load {
            message: format!("Request failed: {}", e),
        })?;

    if !response.ok() {
        return Err(CatalogError::Load {
            message: format!("HTTP {}", response.status()),
        });
    }

    let payload: serde_json::Value = response.json().await.map_err(|e| CatalogError::Load {
        message: format!("Failed to parse response: {}", e),
    })?;

    parse_catalog(&payload)
}
