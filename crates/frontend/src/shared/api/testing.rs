//! In-memory `CatalogApi` for controller tests.

use async_trait::async_trait;
use contracts::domain::a001_catalog_item::{Item, ItemCollection};
use contracts::usecases::u501_load_items::LoadItemsResponse;
use contracts::usecases::u502_match_item::{MatchRequest, MatchResponse};
use std::collections::VecDeque;
use std::sync::Mutex;

use super::{ApiError, CatalogApi};

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    ListItems,
    CreateItems(String),
    AutoPopulate,
    Reset,
    FindMatch(MatchRequest),
}

/// Scripted responses are consumed in order; an exhausted script answers
/// with `ApiError::Network`.
#[derive(Default)]
pub struct FakeApi {
    pub calls: Mutex<Vec<Call>>,
    pub list_responses: Mutex<VecDeque<Result<ItemCollection, ApiError>>>,
    pub create_responses: Mutex<VecDeque<Result<LoadItemsResponse, ApiError>>>,
    pub populate_responses: Mutex<VecDeque<Result<(), ApiError>>>,
    pub reset_responses: Mutex<VecDeque<Result<(), ApiError>>>,
    pub match_responses: Mutex<VecDeque<Result<MatchResponse, ApiError>>>,
}

fn next<T>(queue: &Mutex<VecDeque<Result<T, ApiError>>>) -> Result<T, ApiError> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Err(ApiError::Network("no scripted response".into())))
}

impl FakeApi {
    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn push_list(&self, response: Result<ItemCollection, ApiError>) {
        self.list_responses.lock().unwrap().push_back(response);
    }

    pub fn push_create(&self, response: Result<LoadItemsResponse, ApiError>) {
        self.create_responses.lock().unwrap().push_back(response);
    }

    pub fn push_populate(&self, response: Result<(), ApiError>) {
        self.populate_responses.lock().unwrap().push_back(response);
    }

    pub fn push_reset(&self, response: Result<(), ApiError>) {
        self.reset_responses.lock().unwrap().push_back(response);
    }

    pub fn push_match(&self, response: Result<MatchResponse, ApiError>) {
        self.match_responses.lock().unwrap().push_back(response);
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }
}

#[async_trait(?Send)]
impl CatalogApi for FakeApi {
    async fn list_items(&self) -> Result<ItemCollection, ApiError> {
        self.record(Call::ListItems);
        next(&self.list_responses)
    }

    async fn create_items(&self, raw: &str) -> Result<LoadItemsResponse, ApiError> {
        self.record(Call::CreateItems(raw.to_string()));
        next(&self.create_responses)
    }

    async fn auto_populate(&self) -> Result<(), ApiError> {
        self.record(Call::AutoPopulate);
        next(&self.populate_responses)
    }

    async fn reset(&self) -> Result<(), ApiError> {
        self.record(Call::Reset);
        next(&self.reset_responses)
    }

    async fn find_match(&self, request: &MatchRequest) -> Result<MatchResponse, ApiError> {
        self.record(Call::FindMatch(request.clone()));
        next(&self.match_responses)
    }
}

/// `n` distinct items with ids "0".."n-1"
pub fn sample_items(n: usize) -> ItemCollection {
    (0..n)
        .map(|i| Item {
            id: i.to_string(),
            trade: format!("Trade {}", i),
            unit_of_measure: "hr".to_string(),
            rate: 10.0 + i as f64,
        })
        .collect()
}
