use serde::{Deserialize, Serialize};

/// Match query. Both fields are sent exactly as typed.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct MatchRequest {
    pub trade: String,
    pub unit_of_measure: String,
}
