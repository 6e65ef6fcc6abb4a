pub mod response;

pub use response::{decode_message, LoadItemsResponse};

use crate::usecases::common::UseCaseMetadata;

/// Bulk creation of catalog items from user-supplied JSON.
pub struct LoadItems;

impl UseCaseMetadata for LoadItems {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "load_items"
    }

    fn display_name() -> &'static str {
        "Load Items"
    }

    fn description() -> &'static str {
        "Paste JSON describing one or more items and submit it to the catalog"
    }
}
