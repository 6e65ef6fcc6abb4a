use async_trait::async_trait;
use contracts::domain::a001_catalog_item::ItemCollection;
use contracts::usecases::u501_load_items::{decode_message, LoadItemsResponse};
use contracts::usecases::u502_match_item::{MatchRequest, MatchResponse};
use gloo_net::http::{Request, Response};

use super::{ApiError, CatalogApi};
use crate::shared::api_utils::api_base;

/// `CatalogApi` over `fetch`, JSON in and out.
#[derive(Debug, Clone)]
pub struct HttpCatalogApi {
    base_url: String,
}

impl HttpCatalogApi {
    /// `base_url` like `http://localhost:8000` (trailing slash is dropped).
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Client pointed at the configured API origin
    pub fn from_config() -> Self {
        Self::new(api_base())
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

/// Turn a non-2xx response into `ApiError::Server`
async fn ensure_ok(response: Response) -> Result<Response, ApiError> {
    if response.ok() {
        return Ok(response);
    }
    let status = response.status();
    let body = response.text().await.unwrap_or_default();
    Err(ApiError::Server { status, body })
}

#[async_trait(?Send)]
impl CatalogApi for HttpCatalogApi {
    async fn list_items(&self) -> Result<ItemCollection, ApiError> {
        let url = self.url("/item");
        log::debug!("GET {}", url);
        let response = ensure_ok(Request::get(&url).send().await?).await?;
        response
            .json::<ItemCollection>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn create_items(&self, raw: &str) -> Result<LoadItemsResponse, ApiError> {
        let url = self.url("/item");
        log::debug!("POST {} ({} bytes)", url, raw.len());
        let response = Request::post(&url)
            .header("Content-Type", "application/json")
            .body(raw.to_string())?
            .send()
            .await?;
        let response = ensure_ok(response).await?;
        let body = response.text().await?;
        Ok(decode_message(&body))
    }

    async fn auto_populate(&self) -> Result<(), ApiError> {
        let url = self.url("/load");
        log::debug!("POST {}", url);
        ensure_ok(Request::post(&url).send().await?).await?;
        Ok(())
    }

    async fn reset(&self) -> Result<(), ApiError> {
        let url = self.url("/clear");
        log::debug!("DELETE {}", url);
        ensure_ok(Request::delete(&url).send().await?).await?;
        Ok(())
    }

    async fn find_match(&self, request: &MatchRequest) -> Result<MatchResponse, ApiError> {
        let url = self.url("/match/item");
        log::debug!("POST {} trade={:?} unit={:?}", url, request.trade, request.unit_of_measure);
        let response = Request::post(&url).json(request)?.send().await?;
        let response = ensure_ok(response).await?;
        response
            .json::<MatchResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_url_joins_without_double_slash() {
        let api = HttpCatalogApi::new("http://localhost:8000/");
        assert_eq!(api.url("/match/item"), "http://localhost:8000/match/item");
    }
}
