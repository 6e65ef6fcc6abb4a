use serde::{Deserialize, Serialize};

use crate::domain::a001_catalog_item::Item;

/// Closest catalog item with the matcher's score.
///
/// `similarity_score` is opaque to the client and only displayed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResponse {
    pub best_match: Item,
    pub similarity_score: f64,
}
