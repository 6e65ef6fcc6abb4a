use serde::{Deserialize, Serialize};

// ============================================================================
// Aggregate
// ============================================================================

/// Priced catalog record.
///
/// `id` is assigned by the server and never edited on the client.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub trade: String,
    pub unit_of_measure: String,
    /// Non-negative decimal, kept unrounded.
    pub rate: f64,
}

/// Items in server order. The client never reorders or deduplicates them.
pub type ItemCollection = Vec<Item>;
