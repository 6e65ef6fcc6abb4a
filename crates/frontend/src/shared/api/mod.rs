//! Client side of the catalog-matching service.
//!
//! `CatalogApi` is the only place where network I/O happens. Screens reach it
//! through Leptos context (`use_api`) so tests can substitute an in-memory
//! double.

pub mod error;
pub mod http;
#[cfg(test)]
pub mod testing;

pub use error::ApiError;
pub use http::HttpCatalogApi;

use async_trait::async_trait;
use contracts::domain::a001_catalog_item::ItemCollection;
use contracts::usecases::u501_load_items::LoadItemsResponse;
use contracts::usecases::u502_match_item::{MatchRequest, MatchResponse};
use leptos::prelude::*;
use std::sync::Arc;

/// REST operations of the matching service.
///
/// Futures are not `Send`: browser fetches live on the single UI thread.
#[async_trait(?Send)]
pub trait CatalogApi: Send + Sync {
    /// `GET /item`
    async fn list_items(&self) -> Result<ItemCollection, ApiError>;

    /// `POST /item` with `raw` as the body, untouched
    async fn create_items(&self, raw: &str) -> Result<LoadItemsResponse, ApiError>;

    /// `POST /load`
    async fn auto_populate(&self) -> Result<(), ApiError>;

    /// `DELETE /clear`
    async fn reset(&self) -> Result<(), ApiError>;

    /// `POST /match/item`
    async fn find_match(&self, request: &MatchRequest) -> Result<MatchResponse, ApiError>;
}

pub type SharedApi = Arc<dyn CatalogApi>;

pub fn provide_api(api: SharedApi) {
    provide_context(api);
}

pub fn use_api() -> SharedApi {
    use_context::<SharedApi>().expect("CatalogApi not provided in context")
}
